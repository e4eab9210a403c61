//! Property-based tests for the count-up counter and pricing math
//!
//! Uses proptest to check the counter invariants over arbitrary targets and
//! frame schedules.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use bodsphere_core::counter::{run_frames, CounterState, DEFAULT_DURATION, FRAME_INTERVAL};
use bodsphere_core::pricing::{Price, PricingPlan};
use bodsphere_core::{CountUp, CounterSpec};
use proptest::prelude::*;
use tokio::time::Instant;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Targets ranging from tiny to very large
fn target_strategy() -> impl Strategy<Value = u64> {
    prop_oneof![
        3 => 0..1_000u64,
        2 => 1_000..1_000_000u64,
        1 => any::<u64>(),
    ]
}

/// Sorted frame timestamps in milliseconds, possibly with long gaps
fn frame_schedule_strategy() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(0..5_000u64, 1..60).prop_map(|mut frames| {
        frames.sort_unstable();
        frames
    })
}

fn triggered(target: u64) -> CountUp {
    let mut counter = CountUp::new(CounterSpec::new(target, "Users Subscribed").with_suffix("+"));
    counter.observe_visibility(true);
    counter
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The value never exceeds the target and never goes down
    #[test]
    fn value_is_bounded_and_monotone(target in target_strategy(), frames in frame_schedule_strategy()) {
        let mut counter = triggered(target);
        let mut previous = 0;
        for t in frames {
            counter.tick(Duration::from_millis(t));
            prop_assert!(counter.value() <= target);
            prop_assert!(counter.value() >= previous);
            previous = counter.value();
        }
    }

    /// A full duration after the first frame the value is exactly the target
    #[test]
    fn converges_after_duration(target in target_strategy(), first in 0..10_000u64, extra in 0..5_000u64) {
        let mut counter = triggered(target);
        counter.tick(Duration::from_millis(first));
        let more = counter.tick(Duration::from_millis(first) + DEFAULT_DURATION + Duration::from_millis(extra));
        prop_assert!(!more);
        prop_assert_eq!(counter.value(), target);
        prop_assert!(counter.state().is_done());
    }

    /// Without a visibility trigger the counter stays at zero forever
    #[test]
    fn idle_until_visible(target in target_strategy(), frames in frame_schedule_strategy()) {
        let mut counter = CountUp::new(CounterSpec::new(target, "Instructors Worldwide"));
        for t in frames {
            prop_assert!(!counter.tick(Duration::from_millis(t)));
            prop_assert_eq!(counter.value(), 0);
        }
        counter.observe_visibility(false);
        prop_assert!(!counter.state().has_started());
    }

    /// Once done, more time and more visibility changes do nothing
    #[test]
    fn terminal_state_is_stable(target in target_strategy(), later in prop::collection::vec(0..100_000u64, 0..20)) {
        let mut counter = triggered(target);
        counter.tick(Duration::ZERO);
        counter.tick(DEFAULT_DURATION);
        let done = counter.state();
        for t in later {
            counter.observe_visibility(t % 2 == 0);
            counter.tick(Duration::from_millis(t));
            prop_assert_eq!(counter.state(), done);
        }
    }

    /// Mid-animation value is the floored fraction of the target
    #[test]
    fn midpoint_matches_formula(target in 0..1_000_000u64, elapsed in 0..2_000u64) {
        let state = CounterState::new()
            .trigger()
            .tick(target, DEFAULT_DURATION, Duration::ZERO)
            .tick(target, DEFAULT_DURATION, Duration::from_millis(elapsed));
        let expected = if target == 0 { 0 } else { target * elapsed / 2_000 };
        prop_assert_eq!(state.current_value, expected);
    }

    /// Yearly savings is a percentage and zero when yearly is not cheaper
    #[test]
    fn savings_in_range(monthly in 0..100_000u32, yearly in 0..2_000_000u32) {
        let plan = PricingPlan {
            name: "Plan".to_string(),
            description: String::new(),
            monthly: Price::cents(monthly),
            yearly: Price::cents(yearly),
            features: vec![],
            popular: false,
        };
        let pct = plan.yearly_savings_percent();
        prop_assert!(pct <= 100);
        if u64::from(yearly) >= u64::from(monthly) * 12 {
            prop_assert_eq!(pct, 0);
        }
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn stat_targets_reach_exact_values() {
    for target in [0u64, 1, 190, 12_000] {
        let mut counter = triggered(target);
        counter.tick(Duration::from_millis(16));
        counter.tick(Duration::from_millis(16) + DEFAULT_DURATION);
        assert_eq!(counter.value(), target);
    }
}

#[test]
fn global_presence_at_one_second() {
    let mut counter = triggered(190);
    let mut t = 0;
    // ~60fps frames up to the one-second mark
    while t <= 1_000 {
        counter.tick(Duration::from_millis(t));
        t += 16;
    }
    let value = counter.value();
    assert!((93..=95).contains(&value), "got {value}");

    counter.tick(Duration::from_millis(2_000));
    assert_eq!(counter.display(), "190+");
}

#[tokio::test(start_paused = true)]
async fn frame_loop_reaches_target() {
    let counter = Arc::new(Mutex::new(triggered(190)));
    let origin = Instant::now();
    let driven = Arc::clone(&counter);
    run_frames(
        move || driven.lock().unwrap().tick(origin.elapsed()),
        || tokio::time::sleep(FRAME_INTERVAL),
    )
    .await;

    let counter = counter.lock().unwrap();
    assert!(counter.state().is_done());
    assert_eq!(counter.display(), "190+");
}

#[tokio::test(start_paused = true)]
async fn aborted_frame_loop_freezes_value() {
    let counter = Arc::new(Mutex::new(triggered(12_000)));
    let origin = Instant::now();
    let driven = Arc::clone(&counter);
    let frames = tokio::spawn(run_frames(
        move || driven.lock().unwrap().tick(origin.elapsed()),
        || tokio::time::sleep(FRAME_INTERVAL),
    ));

    // Tear down mid-animation
    tokio::time::sleep(Duration::from_millis(500)).await;
    frames.abort();
    assert!(frames.await.unwrap_err().is_cancelled());

    let at_teardown = counter.lock().unwrap().value();
    assert!((2_800..=3_000).contains(&at_teardown), "got {at_teardown}");

    // Well past the end of the animation
    tokio::time::sleep(Duration::from_millis(2_500)).await;
    let counter = counter.lock().unwrap();
    assert_eq!(counter.value(), at_teardown);
    assert!(!counter.state().is_done());
}
