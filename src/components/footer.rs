//! Footer - copyright line.

use dioxus::prelude::*;

use crate::context::use_site_content;

#[component]
pub fn Footer() -> Element {
    let content = use_site_content();
    let copyright = content.copyright_now();

    rsx! {
        footer { class: "site-footer",
            p { "{copyright}" }
        }
    }
}
