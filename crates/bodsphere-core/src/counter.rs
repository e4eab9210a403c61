//! Visibility-gated count-up counter.
//!
//! A counter animates its displayed value from zero up to a target the first
//! time it scrolls into view, then holds at the target. The animation is an
//! explicit state machine:
//!
//! ```text
//! Idle ──trigger()──▶ Running ──tick(now ≥ anchor + duration)──▶ Done
//! ```
//!
//! The per-frame update is a pure function of the current state and the frame
//! timestamp, so it can be driven by any clock. Timestamps are `Duration`s
//! measured from an arbitrary monotonic origin (the UI uses the instant the
//! component mounted). The timeline is anchored at the first tick after the
//! trigger, and progress is computed from absolute elapsed time, so dropped or
//! throttled frames still converge on the target.

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default animation length for a count-up.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(2000);

/// Delay between animation frames (~60fps).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Caller-supplied description of a counter. Immutable once mounted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterSpec {
    /// Value the counter settles on
    pub target: u64,
    /// Caption rendered under the number
    pub label: String,
    /// Text appended directly after the number (e.g. "+")
    #[serde(default)]
    pub suffix: String,
}

impl CounterSpec {
    pub fn new(target: u64, label: impl Into<String>) -> Self {
        Self {
            target,
            label: label.into(),
            suffix: String::new(),
        }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Render a value the way the counter displays it: number then suffix.
    pub fn display(&self, value: u64) -> String {
        format!("{}{}", value, self.suffix)
    }
}

/// Lifecycle of a single counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CounterPhase {
    /// Not yet seen in the viewport
    #[default]
    Idle,
    /// Triggered. `anchor` is the first frame timestamp, set by the first tick.
    Running { anchor: Option<Duration> },
    /// Target reached; no more frames needed
    Done,
}

/// Mutable state owned by one counter instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CounterState {
    pub current_value: u64,
    pub phase: CounterPhase,
}

impl CounterState {
    pub const fn new() -> Self {
        Self {
            current_value: 0,
            phase: CounterPhase::Idle,
        }
    }

    /// Whether the animation has been triggered (running or finished).
    pub fn has_started(&self) -> bool {
        !matches!(self.phase, CounterPhase::Idle)
    }

    pub fn is_done(&self) -> bool {
        matches!(self.phase, CounterPhase::Done)
    }

    /// Whether another frame should be scheduled.
    pub fn wants_frame(&self) -> bool {
        matches!(self.phase, CounterPhase::Running { .. })
    }

    /// `Idle → Running`. Any other phase is returned unchanged, so a second
    /// trigger never restarts or resets the animation.
    pub fn trigger(self) -> Self {
        match self.phase {
            CounterPhase::Idle => Self {
                current_value: 0,
                phase: CounterPhase::Running { anchor: None },
            },
            _ => self,
        }
    }

    /// Advance the animation to the frame at `now`.
    ///
    /// Idle and Done states are fixed points. While running, the value is
    /// `floor(min(elapsed / duration, 1) * target)`; once the fraction reaches
    /// one the value is exactly `target` and the phase becomes `Done`. A zero
    /// target has nothing to animate and finishes on its first tick.
    pub fn tick(self, target: u64, duration: Duration, now: Duration) -> Self {
        let CounterPhase::Running { anchor } = self.phase else {
            return self;
        };

        let anchor = anchor.unwrap_or(now);
        let elapsed = now.saturating_sub(anchor);

        if elapsed >= duration || target == 0 {
            return Self {
                current_value: target,
                phase: CounterPhase::Done,
            };
        }

        Self {
            current_value: scaled_value(target, elapsed, duration),
            phase: CounterPhase::Running {
                anchor: Some(anchor),
            },
        }
    }
}

/// `floor(elapsed / duration * target)` for `elapsed < duration`.
///
/// Integer arithmetic keeps the result exact and monotone in `elapsed`.
fn scaled_value(target: u64, elapsed: Duration, duration: Duration) -> u64 {
    let total = duration.as_nanos();
    if total == 0 {
        return target;
    }
    let value = match (target as u128).checked_mul(elapsed.as_nanos()) {
        Some(product) => product / total,
        None => (elapsed.as_secs_f64() / duration.as_secs_f64() * target as f64).floor() as u128,
    };
    value.min(target as u128) as u64
}

/// A counter spec paired with its animation state and duration.
///
/// This is what a UI component keeps in its reactive state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountUp {
    spec: CounterSpec,
    duration: Duration,
    state: CounterState,
}

impl CountUp {
    pub fn new(spec: CounterSpec) -> Self {
        Self::with_duration(spec, DEFAULT_DURATION)
    }

    pub fn with_duration(spec: CounterSpec, duration: Duration) -> Self {
        Self {
            spec,
            duration,
            state: CounterState::new(),
        }
    }

    pub fn spec(&self) -> &CounterSpec {
        &self.spec
    }

    pub fn state(&self) -> CounterState {
        self.state
    }

    pub fn value(&self) -> u64 {
        self.state.current_value
    }

    /// Number plus suffix, as rendered.
    pub fn display(&self) -> String {
        self.spec.display(self.state.current_value)
    }

    /// Feed a visibility observation. Returns `true` only when this call
    /// started the animation.
    pub fn observe_visibility(&mut self, visible: bool) -> bool {
        if !visible || self.state.has_started() {
            return false;
        }
        self.state = self.state.trigger();
        tracing::debug!(label = %self.spec.label, target = self.spec.target, "count-up triggered");
        true
    }

    /// Advance to the frame at `now`. Returns `true` while more frames are needed.
    pub fn tick(&mut self, now: Duration) -> bool {
        let was_done = self.state.is_done();
        self.state = self.state.tick(self.spec.target, self.duration, now);
        if !was_done && self.state.is_done() {
            tracing::debug!(label = %self.spec.label, value = self.state.current_value, "count-up finished");
        }
        self.state.wants_frame()
    }
}

/// Run a frame loop until `step` reports that no more frames are needed,
/// awaiting `pause()` between frames.
///
/// `step` reads its own clock, so the loop works with any timer. Dropping or
/// aborting the future stops the loop between frames; nothing runs after that.
pub async fn run_frames<S, P, F>(mut step: S, mut pause: P)
where
    S: FnMut() -> bool,
    P: FnMut() -> F,
    F: Future<Output = ()>,
{
    while step() {
        pause().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn running(target: u64) -> CountUp {
        let mut counter = CountUp::new(CounterSpec::new(target, "Global Presence").with_suffix("+"));
        assert!(counter.observe_visibility(true));
        counter
    }

    #[test]
    fn idle_counter_ignores_time() {
        let mut counter = CountUp::new(CounterSpec::new(190, "Global Presence"));
        for t in [0, 500, 2000, 60_000] {
            assert!(!counter.tick(ms(t)));
            assert_eq!(counter.value(), 0);
        }
        assert!(!counter.state().has_started());
    }

    #[test]
    fn halfway_and_final_values() {
        let mut counter = running(190);
        // Anchor lands on the first frame, not on the trigger.
        counter.tick(ms(10_000));
        assert_eq!(counter.value(), 0);

        counter.tick(ms(11_000));
        assert_eq!(counter.value(), 95);

        assert!(!counter.tick(ms(12_000)));
        assert_eq!(counter.value(), 190);
        assert_eq!(counter.display(), "190+");
        assert!(counter.state().is_done());
    }

    #[test]
    fn zero_target_completes_on_first_tick() {
        let mut counter = running(0);
        assert!(!counter.tick(ms(5)));
        assert_eq!(counter.value(), 0);
        assert!(counter.state().is_done());
        assert_eq!(counter.display(), "0+");
    }

    #[test]
    fn zero_duration_completes_on_first_tick() {
        let state = CounterState::new().trigger().tick(42, Duration::ZERO, ms(5));
        assert!(state.is_done());
        assert_eq!(state.current_value, 42);
    }

    #[test]
    fn retrigger_does_not_reset() {
        let mut counter = running(500);
        counter.tick(ms(0));
        counter.tick(ms(1000));
        let mid = counter.value();
        assert!(!counter.observe_visibility(false));
        assert!(!counter.observe_visibility(true));
        assert_eq!(counter.value(), mid);

        counter.tick(ms(2500));
        assert_eq!(counter.value(), 500);
        assert!(!counter.observe_visibility(true));
        assert_eq!(counter.value(), 500);
    }

    #[test]
    fn skipped_frames_still_converge() {
        let mut counter = running(12_000);
        counter.tick(ms(100));
        // Backgrounded tab: next frame arrives much later.
        assert!(!counter.tick(ms(90_000)));
        assert_eq!(counter.value(), 12_000);
    }

    #[test]
    fn done_is_a_fixed_point() {
        let done = CounterState {
            current_value: 7,
            phase: CounterPhase::Done,
        };
        assert_eq!(done.tick(7, DEFAULT_DURATION, ms(1_000_000)), done);
        assert_eq!(done.trigger(), done);
    }

    #[test]
    fn huge_target_stays_bounded() {
        let state = CounterState::new().trigger().tick(u64::MAX, DEFAULT_DURATION, ms(0));
        let state = state.tick(u64::MAX, DEFAULT_DURATION, ms(1999));
        assert!(state.current_value < u64::MAX);
        let state = state.tick(u64::MAX, DEFAULT_DURATION, ms(2000));
        assert_eq!(state.current_value, u64::MAX);
    }
}
