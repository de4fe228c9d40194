use crate::config::VIDEO_URL;

/// Open/closed state of the video modal. The player only has a source while open,
/// so closing stops playback and any pending load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VideoModal {
    open: bool,
}

impl VideoModal {
    pub fn open(self) -> Self {
        Self { open: true }
    }

    pub fn close(self) -> Self {
        Self { open: false }
    }

    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn player_src(self) -> &'static str {
        if self.open {
            VIDEO_URL
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_sets_the_fixed_source() {
        let modal = VideoModal::default();
        assert_eq!(modal.player_src(), "");
        let modal = modal.open();
        assert!(modal.is_open());
        assert_eq!(modal.player_src(), "https://www.youtube.com/embed/jy5hovMVlX4");
    }

    #[test]
    fn closing_clears_the_source() {
        let modal = VideoModal::default().open().close();
        assert!(!modal.is_open());
        assert_eq!(modal.player_src(), "");
        assert_eq!(modal.close().player_src(), "");
    }
}
