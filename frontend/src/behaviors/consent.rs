use crate::config::{PageConfig, CONSENT_STORAGE_KEY};

/// Somewhere to keep the consent flag between visits.
pub trait FlagStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerPhase {
    Hidden,
    /// Waiting for the show delay to elapse.
    Pending,
    Shown,
    /// Accepted, fading out.
    Dismissing,
}

impl BannerPhase {
    pub fn on_load<S: FlagStore>(store: &S) -> Self {
        if store.get(CONSENT_STORAGE_KEY).is_some() {
            BannerPhase::Hidden
        } else {
            BannerPhase::Pending
        }
    }

    pub fn show_delay_elapsed(self) -> Self {
        match self {
            BannerPhase::Pending => BannerPhase::Shown,
            other => other,
        }
    }

    /// Persists the flag and starts the fade. Later calls change nothing.
    pub fn accept<S: FlagStore>(self, store: &S) -> Self {
        match self {
            BannerPhase::Pending | BannerPhase::Shown => {
                if let Err(e) = store.set(CONSENT_STORAGE_KEY, "true") {
                    log::warn!("Could not persist cookie consent: {}", e);
                }
                BannerPhase::Dismissing
            }
            other => other,
        }
    }

    pub fn fade_elapsed(self) -> Self {
        match self {
            BannerPhase::Dismissing => BannerPhase::Hidden,
            other => other,
        }
    }

    /// How long this phase lasts before `timer_elapsed` should run, if it is timed at all.
    pub fn timer_ms(self, config: &PageConfig) -> Option<u32> {
        match self {
            BannerPhase::Pending => Some(config.banner_show_delay_ms),
            BannerPhase::Dismissing => Some(config.banner_fade_ms),
            BannerPhase::Hidden | BannerPhase::Shown => None,
        }
    }

    pub fn timer_elapsed(self) -> Self {
        self.show_delay_elapsed().fade_elapsed()
    }

    pub fn display(self) -> &'static str {
        match self {
            BannerPhase::Hidden | BannerPhase::Pending => "none",
            BannerPhase::Shown | BannerPhase::Dismissing => "block",
        }
    }

    pub fn class(self) -> Option<&'static str> {
        match self {
            BannerPhase::Shown => Some("show"),
            BannerPhase::Dismissing => Some("hide"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        values: RefCell<HashMap<String, String>>,
        writes: RefCell<usize>,
        broken: bool,
    }

    impl FlagStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), String> {
            if self.broken {
                return Err("quota exceeded".into());
            }
            *self.writes.borrow_mut() += 1;
            self.values.borrow_mut().insert(key.into(), value.into());
            Ok(())
        }
    }

    #[test]
    fn first_visit_shows_after_delay() {
        let store = MemoryStore::default();
        let phase = BannerPhase::on_load(&store);
        assert_eq!(phase, BannerPhase::Pending);
        assert_eq!(phase.display(), "none");
        let phase = phase.show_delay_elapsed();
        assert_eq!(phase, BannerPhase::Shown);
        assert_eq!(phase.display(), "block");
        assert_eq!(phase.class(), Some("show"));
    }

    #[test]
    fn accepting_persists_and_survives_reload() {
        let store = MemoryStore::default();
        let phase = BannerPhase::on_load(&store).show_delay_elapsed().accept(&store);
        assert_eq!(phase, BannerPhase::Dismissing);
        assert_eq!(phase.class(), Some("hide"));
        assert_eq!(store.get(CONSENT_STORAGE_KEY).as_deref(), Some("true"));
        assert_eq!(phase.fade_elapsed(), BannerPhase::Hidden);

        let reloaded = BannerPhase::on_load(&store);
        assert_eq!(reloaded, BannerPhase::Hidden);
        // a stray show timer must not bring it back
        assert_eq!(reloaded.show_delay_elapsed(), BannerPhase::Hidden);
    }

    #[test]
    fn accepting_twice_writes_once() {
        let store = MemoryStore::default();
        let phase = BannerPhase::Shown.accept(&store).accept(&store);
        assert_eq!(phase, BannerPhase::Dismissing);
        assert_eq!(*store.writes.borrow(), 1);
        let phase = phase.fade_elapsed().accept(&store);
        assert_eq!(phase, BannerPhase::Hidden);
        assert_eq!(*store.writes.borrow(), 1);
    }

    #[test]
    fn banner_timers_follow_the_configured_delays() {
        let config = PageConfig::default();
        let store = MemoryStore::default();
        let pending = BannerPhase::on_load(&store);
        assert_eq!(pending.timer_ms(&config), Some(2000));
        let shown = pending.timer_elapsed();
        assert_eq!(shown, BannerPhase::Shown);
        assert_eq!(shown.timer_ms(&config), None);

        let dismissing = shown.accept(&store);
        assert_eq!(dismissing.timer_ms(&config), Some(500));
        let hidden = dismissing.timer_elapsed();
        assert_eq!(hidden, BannerPhase::Hidden);
        assert_eq!(hidden.timer_ms(&config), None);
        assert_eq!(hidden.timer_elapsed(), BannerPhase::Hidden);
    }

    #[test]
    fn timer_never_revives_an_accepted_banner() {
        let store = MemoryStore::default();
        let dismissing = BannerPhase::Pending.accept(&store);
        // a show timer firing late lands on the current phase
        assert_eq!(dismissing.timer_elapsed(), BannerPhase::Hidden);
        assert_eq!(BannerPhase::on_load(&store).timer_elapsed(), BannerPhase::Hidden);
    }

    #[test]
    fn storage_failure_still_dismisses() {
        let store = MemoryStore { broken: true, ..Default::default() };
        assert_eq!(BannerPhase::Shown.accept(&store), BannerPhase::Dismissing);
        assert_eq!(BannerPhase::on_load(&store), BannerPhase::Pending);
    }
}
