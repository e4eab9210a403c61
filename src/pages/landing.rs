//! Landing page - the whole Bodsphere pitch on one scrolling page.
//!
//! The page owns the scroll container. On mount, on every scroll event and
//! whenever the container is resized it measures the container and publishes
//! a `ViewportState` that the header, reveal blocks and stats counters react
//! to.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::{
    CallToAction, DemoVideo, Features, FloatingJoin, Footer, Hero, Pricing, SiteHeader, StatsBar,
    Testimonials,
};
use crate::context::{PageAnchors, ViewportState};

/// Landing page component.
#[component]
pub fn Landing() -> Element {
    let mut viewport = use_context_provider(|| Signal::new(ViewportState::default()));
    use_context_provider(PageAnchors::new);
    let mut container: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    let measure = move || {
        let Some(node) = container() else {
            return;
        };
        spawn(async move {
            let offset = match node.get_scroll_offset().await {
                Ok(offset) => offset,
                Err(e) => {
                    tracing::debug!("scroll offset unavailable: {:?}", e);
                    return;
                }
            };
            let rect = match node.get_client_rect().await {
                Ok(rect) => rect,
                Err(e) => {
                    tracing::debug!("viewport rect unavailable: {:?}", e);
                    return;
                }
            };
            let next = ViewportState::measured(offset.y, rect.origin.y, rect.size.height);
            if *viewport.peek() != next {
                viewport.set(next);
            }
        });
    };

    rsx! {
        main {
            class: "landing",
            onmounted: move |evt| {
                container.set(Some(evt.data()));
                measure();
            },
            onscroll: move |_| measure(),
            onresize: move |_| measure(),

            FloatingJoin {}
            SiteHeader {}
            Hero {}
            DemoVideo {}
            Features {}
            StatsBar {}
            Testimonials {}
            Pricing {}
            CallToAction {}
            Footer {}
        }
    }
}
