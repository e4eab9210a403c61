//! Floating "Join Now" button pinned to the bottom-right corner.

use bodsphere_core::Entrance;
use bodsphere_ui::{Button, ButtonVariant};
use dioxus::prelude::*;

use crate::context::use_page_anchors;

#[component]
pub fn FloatingJoin() -> Element {
    let anchors = use_page_anchors();
    let style = Entrance::SlideUp.style(0);

    rsx! {
        Button {
            variant: ButtonVariant::Floating,
            class: Entrance::SlideUp.class().to_string(),
            style: style,
            onclick: move |_| anchors.scroll_to_subscribe(),
            "Join Now"
        }
    }
}
