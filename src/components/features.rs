//! Features - "Why Choose" grid of benefit cards.

use bodsphere_core::Entrance;
use bodsphere_ui::{CheckCircleIcon, SectionHeading};
use dioxus::prelude::*;

use crate::components::reveal::Reveal;
use crate::context::use_site_content;

#[component]
pub fn Features() -> Element {
    let content = use_site_content();

    rsx! {
        section { class: "features-section",
            div { class: "container",
                Reveal { name: "features-heading".to_string(),
                    SectionHeading {
                        title: "Why Choose".to_string(),
                        highlight: content.brand.clone(),
                        lead: content.features_intro.clone(),
                    }
                }
                div { class: "features-grid",
                    for (index, feature) in content.features.iter().enumerate() {
                        Reveal {
                            key: "{feature.title}",
                            name: format!("feature-{}", index),
                            entrance: Entrance::Card,
                            index: index,
                            class: "feature-card".to_string(),
                            div { class: "feature-icon", CheckCircleIcon {} }
                            h3 { "{feature.title}" }
                            p { "{feature.description}" }
                        }
                    }
                }
            }
        }
    }
}
