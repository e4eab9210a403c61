//! Shared page context for the Bodsphere landing page.
//!
//! Provides launch settings, page content, viewport state and scroll anchors
//! to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In the Landing page
//! use_context_provider(|| Signal::new(ViewportState::default()));
//!
//! // In child components
//! let viewport = use_viewport();
//! let content = use_site_content();
//! ```

use std::rc::Rc;
use std::time::Duration;

use bodsphere_core::{SiteContent, Span};
use dioxus::prelude::*;

/// Settings resolved from the command line before the window opens.
#[derive(Clone, Debug)]
pub struct LaunchSettings {
    pub content: SiteContent,
    /// Length of the stats count-up animation
    pub count_up: Duration,
}

/// Page content shared by reference.
pub type SharedContent = Rc<SiteContent>;

/// Get the launch settings set from command line args.
pub fn get_launch_settings() -> LaunchSettings {
    crate::get_launch_settings()
}

/// Scroll position and visible area of the page's scroll container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    pub scroll_y: f64,
    /// Visible area in window coordinates
    pub viewport: Span,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            scroll_y: 0.0,
            viewport: Span::new(0.0, 0.0),
        }
    }
}

impl ViewportState {
    /// State from a measurement of the scroll container: its scroll offset
    /// and its on-screen rect.
    pub fn measured(scroll_y: f64, top: f64, height: f64) -> Self {
        Self {
            scroll_y,
            viewport: Span::from_origin(top, height),
        }
    }
}

/// Mount handles of the sections that buttons scroll to.
#[derive(Clone, Copy)]
pub struct PageAnchors {
    pub subscribe: Signal<Option<Rc<MountedData>>>,
    pub demo: Signal<Option<Rc<MountedData>>>,
}

impl PageAnchors {
    /// Must be called inside a component scope.
    pub fn new() -> Self {
        Self {
            subscribe: Signal::new(None),
            demo: Signal::new(None),
        }
    }

    /// Bring the subscribe form into view. Used by every call to action.
    pub fn scroll_to_subscribe(&self) {
        scroll_into_view(self.subscribe, "subscribe");
    }

    pub fn scroll_to_demo(&self) {
        scroll_into_view(self.demo, "demo");
    }
}

fn scroll_into_view(anchor: Signal<Option<Rc<MountedData>>>, name: &'static str) {
    let Some(node) = anchor() else {
        tracing::warn!(anchor = name, "scroll target not mounted yet");
        return;
    };
    spawn(async move {
        if let Err(e) = node.scroll_to(ScrollBehavior::Smooth).await {
            tracing::warn!(anchor = name, "scroll failed: {:?}", e);
        }
    });
}

/// Hook to access the page content from context.
pub fn use_site_content() -> SharedContent {
    use_context::<SharedContent>()
}

/// Hook to access the count-up duration from context.
pub fn use_count_up_duration() -> Duration {
    use_context::<LaunchSettings>().count_up
}

/// Hook to access the viewport state.
///
/// Updated by the Landing page on mount and on every scroll event.
pub fn use_viewport() -> Signal<ViewportState> {
    use_context::<Signal<ViewportState>>()
}

/// Hook to access the scroll anchors.
pub fn use_page_anchors() -> PageAnchors {
    use_context::<PageAnchors>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bodsphere_core::{intersects, VisibilityLatch};

    #[test]
    fn enlarging_window_reveals_element_without_scrolling() {
        // Stats bar sits just below a short window
        let stats = Span::from_origin(900.0, 200.0);
        let short = ViewportState::measured(0.0, 0.0, 700.0);
        let tall = ViewportState::measured(0.0, 0.0, 1_100.0);

        // Same scroll offset, so only a resize re-measure publishes the change
        assert_ne!(short, tall);
        assert_eq!(short.scroll_y, tall.scroll_y);

        let mut latch = VisibilityLatch::new();
        assert!(!latch.observe(intersects(stats, short.viewport)));
        assert!(latch.observe(intersects(stats, tall.viewport)));
    }

    #[test]
    fn default_viewport_is_empty() {
        let state = ViewportState::default();
        assert_eq!(state, ViewportState::measured(0.0, 0.0, 0.0));
        assert!(!intersects(Span::from_origin(0.0, 10.0), state.viewport));
    }
}
