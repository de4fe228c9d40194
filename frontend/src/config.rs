#[cfg(debug_assertions)]
pub fn get_form_endpoint() -> &'static str {
    "http://localhost:3001/contact"  // Local mock endpoint while developing
}

#[cfg(not(debug_assertions))]
pub fn get_form_endpoint() -> &'static str {
    "https://formspree.io/f/contacto"
}

pub const CONSENT_STORAGE_KEY: &str = "cookiesAccepted_v2";
pub const VIDEO_URL: &str = "https://www.youtube.com/embed/jy5hovMVlX4";

/// Timings and tuning knobs shared by the page behaviors.
#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub banner_show_delay_ms: u32,
    pub banner_fade_ms: u32,
    pub form_message_ttl_ms: u32,
    pub smooth_scroll_gap_px: f64,
    pub scroll_lock_ms: u32,
    pub parallax_speed: f64,
    pub typing_start_delay_ms: u32,
    pub typing_step_ms: u32,
    pub hero_entrance_delay_ms: u32,
    pub confetti_count: usize,
    pub confetti_fall_delay_ms: u32,
    pub confetti_lifetime_ms: u32,
    pub particle_count: usize,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            banner_show_delay_ms: 2000,
            banner_fade_ms: 500,
            form_message_ttl_ms: 5000,
            smooth_scroll_gap_px: 20.0,
            scroll_lock_ms: 1000,
            parallax_speed: 0.5,
            typing_start_delay_ms: 1000,
            typing_step_ms: 50,
            hero_entrance_delay_ms: 300,
            confetti_count: 50,
            confetti_fall_delay_ms: 100,
            confetti_lifetime_ms: 4000,
            particle_count: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timings() {
        let config = PageConfig::default();
        assert_eq!(config.banner_show_delay_ms, 2000);
        assert_eq!(config.banner_fade_ms, 500);
        assert_eq!(config.form_message_ttl_ms, 5000);
        assert_eq!(config.scroll_lock_ms, 1000);
        assert_eq!(config.typing_start_delay_ms, 1000);
        assert_eq!(config.typing_step_ms, 50);
        assert_eq!(config.hero_entrance_delay_ms, 300);
        assert_eq!(config.confetti_fall_delay_ms, 100);
        assert_eq!(config.confetti_lifetime_ms, 4000);
        assert_eq!((config.confetti_count, config.particle_count), (50, 30));
        assert_eq!((config.smooth_scroll_gap_px, config.parallax_speed), (20.0, 0.5));
    }
}
