//! Viewport geometry and one-shot visibility latches.
//!
//! Elements report their bounding box relative to the window; the page reports
//! the bounds of its scroll container. An element counts as visible as soon as
//! any part of it overlaps the viewport.

use serde::{Deserialize, Serialize};

/// Vertical extent of a box, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub top: f64,
    pub bottom: f64,
}

impl Span {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Span from a top edge and a height.
    pub fn from_origin(top: f64, height: f64) -> Self {
        Self {
            top,
            bottom: top + height.max(0.0),
        }
    }

    pub fn height(&self) -> f64 {
        (self.bottom - self.top).max(0.0)
    }
}

/// True when `element` overlaps `viewport` by a positive amount.
///
/// Boxes that only touch along an edge are not visible. A zero-height element
/// is visible when it lies strictly inside the viewport.
pub fn intersects(element: Span, viewport: Span) -> bool {
    if element.height() == 0.0 {
        return element.top > viewport.top && element.top < viewport.bottom;
    }
    element.top < viewport.bottom && element.bottom > viewport.top
}

/// Latch that fires once, on the first visible observation.
///
/// Leaving and re-entering the viewport afterwards has no effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityLatch {
    seen: bool,
}

impl VisibilityLatch {
    pub const fn new() -> Self {
        Self { seen: false }
    }

    /// Record an observation. Returns `true` exactly once.
    pub fn observe(&mut self, visible: bool) -> bool {
        if visible && !self.seen {
            self.seen = true;
            return true;
        }
        false
    }

    pub fn is_seen(&self) -> bool {
        self.seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Span = Span {
        top: 0.0,
        bottom: 900.0,
    };

    #[test]
    fn partial_overlap_is_visible() {
        assert!(intersects(Span::new(850.0, 1200.0), VIEWPORT));
        assert!(intersects(Span::new(-300.0, 1.0), VIEWPORT));
        assert!(intersects(Span::new(-100.0, 2000.0), VIEWPORT));
    }

    #[test]
    fn touching_edges_are_not_visible() {
        assert!(!intersects(Span::new(900.0, 1100.0), VIEWPORT));
        assert!(!intersects(Span::new(-200.0, 0.0), VIEWPORT));
        assert!(!intersects(Span::new(2400.0, 2600.0), VIEWPORT));
    }

    #[test]
    fn empty_element_inside_viewport() {
        assert!(intersects(Span::from_origin(10.0, 0.0), VIEWPORT));
        assert!(!intersects(Span::from_origin(900.0, 0.0), VIEWPORT));
    }

    #[test]
    fn latch_fires_once() {
        let mut latch = VisibilityLatch::new();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert!(latch.is_seen());
    }
}
