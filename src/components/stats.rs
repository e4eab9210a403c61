//! Stats Bar - count-up counters for the headline numbers.
//!
//! Each counter starts animating the first time it scrolls into view and
//! runs its own frame loop, anchored to its own first frame.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use bodsphere_core::{run_frames, CountUp, CounterSpec, Entrance, FRAME_INTERVAL};
use dioxus::prelude::*;

use crate::components::reveal::{use_first_visible, Reveal};
use crate::context::{use_count_up_duration, use_site_content};

/// Props for a single counter.
#[derive(Props, Clone, PartialEq)]
pub struct StatsCounterProps {
    pub spec: CounterSpec,
}

/// Visibility-gated count-up counter.
///
/// Displays `0` until the element first enters the viewport, then counts up
/// to the target over the configured duration and holds there. Scrolling
/// away and back does not restart it. The frame task is cancelled when the
/// component unmounts.
#[component]
pub fn StatsCounter(props: StatsCounterProps) -> Element {
    let duration = use_count_up_duration();
    let visibility = use_first_visible("stats-counter");
    let spec = props.spec.clone();
    let mut counter = use_signal(move || CountUp::with_duration(spec, duration));
    let frame_task: Rc<Cell<Option<Task>>> = use_hook(|| Rc::new(Cell::new(None)));

    {
        let frame_task = frame_task.clone();
        use_effect(move || {
            if !visibility.seen() {
                return;
            }
            if !counter.write().observe_visibility(true) {
                return;
            }
            let origin = Instant::now();
            let task = spawn(run_frames(
                move || counter.write().tick(origin.elapsed()),
                || tokio::time::sleep(FRAME_INTERVAL),
            ));
            frame_task.set(Some(task));
        });
    }

    use_drop(move || {
        if let Some(task) = frame_task.take() {
            task.cancel();
        }
    });

    let display = counter.read().display();

    rsx! {
        div {
            class: "stat",
            onmounted: move |evt| visibility.attach(evt.data()),
            div { class: "stat-value", "{display}" }
            div { class: "stat-label", "{props.spec.label}" }
        }
    }
}

/// Gradient band with the three headline counters.
#[component]
pub fn StatsBar() -> Element {
    let content = use_site_content();

    rsx! {
        section { class: "stats-section",
            div { class: "container",
                Reveal {
                    name: "stats-panel".to_string(),
                    entrance: Entrance::FadeUp,
                    class: "stats-panel".to_string(),
                    div { class: "stats-grid",
                        for spec in content.stats.iter() {
                            StatsCounter { key: "{spec.label}", spec: spec.clone() }
                        }
                    }
                }
            }
        }
    }
}
