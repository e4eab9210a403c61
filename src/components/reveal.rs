//! Reveal-on-view - one-shot visibility tracking for page elements.
//!
//! An element attaches its mount handle; each viewport update re-measures it
//! until it has been seen once. After that the latch stays closed and the
//! element is never measured again.

use std::rc::Rc;

use bodsphere_core::{intersects, Entrance, Span, VisibilityLatch};
use dioxus::prelude::*;

use crate::context::use_viewport;

/// Handle returned by [`use_first_visible`].
#[derive(Clone, Copy)]
pub struct FirstVisible {
    node: Signal<Option<Rc<MountedData>>>,
    latch: Signal<VisibilityLatch>,
}

impl FirstVisible {
    /// Wire to the element's `onmounted`.
    pub fn attach(&self, node: Rc<MountedData>) {
        let mut slot = self.node;
        slot.set(Some(node));
    }

    /// Whether the element has been in view at least once.
    pub fn seen(&self) -> bool {
        self.latch.read().is_seen()
    }
}

/// Track whether an element has entered the viewport.
pub fn use_first_visible(name: impl Into<String>) -> FirstVisible {
    let name = name.into();
    let viewport = use_viewport();
    let node: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let mut latch = use_signal(VisibilityLatch::new);

    use_effect(move || {
        let state = viewport();
        let Some(element) = node() else {
            return;
        };
        if latch.peek().is_seen() {
            return;
        }
        let name = name.clone();
        spawn(async move {
            match element.get_client_rect().await {
                Ok(rect) => {
                    let span = Span::from_origin(rect.origin.y, rect.size.height);
                    if latch.write().observe(intersects(span, state.viewport)) {
                        tracing::debug!(element = %name, top = span.top, "entered viewport");
                    }
                }
                Err(e) => tracing::debug!(element = %name, "could not measure: {:?}", e),
            }
        });
    });

    FirstVisible { node, latch }
}

#[derive(Props, Clone, PartialEq)]
pub struct RevealProps {
    /// Name used in log lines
    pub name: String,
    #[props(default = Entrance::FadeUp)]
    pub entrance: Entrance,
    /// Position within a staggered group
    #[props(default = 0)]
    pub index: usize,
    #[props(default)]
    pub class: String,
    pub children: Element,
}

/// Block that plays its entrance animation the first time it scrolls into view.
#[component]
pub fn Reveal(props: RevealProps) -> Element {
    let visibility = use_first_visible(props.name.clone());
    let state_class = if visibility.seen() { "in-view" } else { "" };
    let enter_class = props.entrance.class();
    let style = props.entrance.style(props.index);

    rsx! {
        div {
            class: "reveal {enter_class} {state_class} {props.class}",
            style: "{style}",
            onmounted: move |evt| visibility.attach(evt.data()),
            {props.children}
        }
    }
}
