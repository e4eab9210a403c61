//! Small pieces of page-level UI state: the scroll-aware header and the
//! demo video's mute toggle.

/// Scroll offset (px) past which the header turns solid.
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;

/// Header appearance derived from the scroll position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderState {
    pub is_scrolled: bool,
}

impl HeaderState {
    pub fn from_scroll(offset_y: f64) -> Self {
        Self {
            is_scrolled: offset_y > HEADER_SCROLL_THRESHOLD,
        }
    }

    pub fn class(&self) -> &'static str {
        if self.is_scrolled {
            "site-header scrolled"
        } else {
            "site-header"
        }
    }
}

/// DOM id of the demo `<video>` element.
pub const DEMO_VIDEO_ID: &str = "demo-video";

/// Demo video playback flags. Starts muted so autoplay is allowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VideoState {
    pub muted: bool,
    pub autoplay: bool,
}

impl Default for VideoState {
    fn default() -> Self {
        Self {
            muted: true,
            autoplay: true,
        }
    }
}

impl VideoState {
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        tracing::debug!(muted = self.muted, "demo video mute toggled");
    }

    /// Script that applies `muted` to the live element.
    ///
    /// The `muted` attribute only sets the initial state of a media element,
    /// so later changes have to go through the `muted` property.
    pub fn mute_script(&self, element_id: &str) -> String {
        format!(
            "(function() {{ var video = document.getElementById({:?}); if (video) {{ video.muted = {}; }} }})();",
            element_id, self.muted
        )
    }

    /// Label for the button, naming the action it performs.
    pub fn toggle_label(&self) -> &'static str {
        if self.muted {
            "Unmute"
        } else {
            "Mute"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_threshold_is_strict() {
        assert!(!HeaderState::from_scroll(0.0).is_scrolled);
        assert!(!HeaderState::from_scroll(50.0).is_scrolled);
        assert!(HeaderState::from_scroll(50.5).is_scrolled);
        assert_eq!(HeaderState::from_scroll(400.0).class(), "site-header scrolled");
    }

    #[test]
    fn video_starts_muted_and_toggles() {
        let mut video = VideoState::default();
        assert!(video.muted && video.autoplay);
        assert_eq!(video.toggle_label(), "Unmute");
        video.toggle_mute();
        assert!(!video.muted);
        assert_eq!(video.toggle_label(), "Mute");
        video.toggle_mute();
        assert!(video.muted);
    }

    #[test]
    fn mute_script_sets_live_property() {
        let mut video = VideoState::default();
        video.toggle_mute();
        let script = video.mute_script(DEMO_VIDEO_ID);
        assert!(script.contains(r#"document.getElementById("demo-video")"#));
        assert!(script.contains("video.muted = false;"));

        video.toggle_mute();
        assert!(video.mute_script(DEMO_VIDEO_ID).contains("video.muted = true;"));
    }
}
