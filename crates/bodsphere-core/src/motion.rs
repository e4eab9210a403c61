//! Entrance animation presets.
//!
//! Animations themselves run in CSS; this module decides which keyframes a
//! block uses and when it starts. Blocks are rendered with the
//! `--enter-duration` and `--enter-delay` custom properties read by the global
//! stylesheet.

use std::time::Duration;

/// Delay between children of a staggered text block.
pub const STAGGER_STEP: Duration = Duration::from_millis(200);

/// Delay between cards in a grid.
pub const CARD_STEP: Duration = Duration::from_millis(100);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entrance {
    /// Fade in while rising 20px
    FadeUp,
    /// Grow from 80% scale
    ScaleIn,
    /// Rise 100px from below (floating button)
    SlideUp,
    /// Small rotate-and-grow for the logo
    LogoSettle,
    /// Cards in a grid
    Card,
}

impl Entrance {
    /// CSS class carrying the keyframes.
    pub fn class(self) -> &'static str {
        match self {
            Entrance::FadeUp | Entrance::Card => "enter-fade-up",
            Entrance::ScaleIn => "enter-scale-in",
            Entrance::SlideUp => "enter-slide-up",
            Entrance::LogoSettle => "enter-logo",
        }
    }

    pub fn duration(self) -> Duration {
        match self {
            Entrance::FadeUp | Entrance::SlideUp => Duration::from_millis(600),
            Entrance::ScaleIn => Duration::from_millis(800),
            Entrance::LogoSettle | Entrance::Card => Duration::from_millis(500),
        }
    }

    /// Delay built into the preset, before any stagger.
    pub fn base_delay(self) -> Duration {
        match self {
            Entrance::ScaleIn => Duration::from_millis(200),
            _ => Duration::ZERO,
        }
    }

    /// Inline style for the `index`-th child of a staggered group.
    pub fn style(self, index: usize) -> String {
        let step = match self {
            Entrance::Card => CARD_STEP,
            _ => STAGGER_STEP,
        };
        self.style_with_delay(self.base_delay() + stagger_delay(index, step))
    }

    /// Inline style with an explicit start delay, for blocks that follow
    /// another animation rather than a stagger.
    pub fn style_with_delay(self, delay: Duration) -> String {
        format!(
            "--enter-duration: {}ms; --enter-delay: {}ms;",
            self.duration().as_millis(),
            delay.as_millis()
        )
    }
}

/// Start offset of the `index`-th child when children are `step` apart.
pub fn stagger_delay(index: usize, step: Duration) -> Duration {
    step.saturating_mul(index.min(u32::MAX as usize) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_is_linear() {
        assert_eq!(stagger_delay(0, STAGGER_STEP), Duration::ZERO);
        assert_eq!(stagger_delay(3, STAGGER_STEP), Duration::from_millis(600));
        assert_eq!(stagger_delay(2, CARD_STEP), Duration::from_millis(200));
    }

    #[test]
    fn card_style_uses_card_step() {
        assert_eq!(
            Entrance::Card.style(3),
            "--enter-duration: 500ms; --enter-delay: 300ms;"
        );
        assert_eq!(
            Entrance::ScaleIn.style(0),
            "--enter-duration: 800ms; --enter-delay: 200ms;"
        );
    }

    #[test]
    fn explicit_delay_keeps_preset_duration() {
        assert_eq!(
            Entrance::Card.style_with_delay(Duration::from_millis(600)),
            "--enter-duration: 500ms; --enter-delay: 600ms;"
        );
        // ScaleIn's built-in delay is not added on top
        assert_eq!(
            Entrance::ScaleIn.style_with_delay(Duration::ZERO),
            "--enter-duration: 800ms; --enter-delay: 0ms;"
        );
    }
}
