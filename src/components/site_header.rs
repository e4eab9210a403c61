//! Site Header - fixed top bar that turns solid once the page scrolls.

use bodsphere_core::{Entrance, HeaderState};
use bodsphere_ui::{Button, ButtonVariant};
use dioxus::prelude::*;

use crate::components::hero::brand_initial;
use crate::context::{use_page_anchors, use_site_content, use_viewport};

#[component]
pub fn SiteHeader() -> Element {
    let content = use_site_content();
    let anchors = use_page_anchors();
    let viewport = use_viewport();
    let header_state = use_memo(move || HeaderState::from_scroll(viewport().scroll_y));

    let header_class = header_state().class();
    let monogram = brand_initial(&content.brand);
    let logo_class = Entrance::LogoSettle.class();
    let logo_style = Entrance::LogoSettle.style(0);

    rsx! {
        header { class: "{header_class}",
            div { class: "container header-inner",
                div { class: "logo {logo_class}", style: "{logo_style}",
                    span { class: "logo-mark", "{monogram}" }
                    span { class: "logo-word", "{content.brand}" }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    class: "press".to_string(),
                    onclick: move |_| anchors.scroll_to_subscribe(),
                    "Sign Up Free"
                }
            }
        }
    }
}
