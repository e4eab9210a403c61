//! Testimonials - member quotes with star ratings.

use bodsphere_core::Entrance;
use bodsphere_ui::{SectionHeading, StarRating};
use dioxus::prelude::*;

use crate::components::reveal::Reveal;
use crate::context::use_site_content;

#[component]
pub fn Testimonials() -> Element {
    let content = use_site_content();

    rsx! {
        section { class: "testimonials-section",
            div { class: "container",
                Reveal { name: "testimonials-heading".to_string(),
                    SectionHeading {
                        title: "Transforming Lives".to_string(),
                        highlight: "Every Day".to_string(),
                        lead: content.testimonials_intro.clone(),
                    }
                }
                div { class: "testimonials-grid",
                    for (index, testimonial) in content.testimonials.iter().enumerate() {
                        Reveal {
                            key: "{testimonial.name}",
                            name: format!("testimonial-{}", index),
                            entrance: Entrance::Card,
                            index: index,
                            class: "testimonial-card".to_string(),
                            div { class: "testimonial-author",
                                div { class: "author-avatar", {testimonial.initial().to_string()} }
                                div {
                                    h3 { "{testimonial.name}" }
                                    p { class: "author-role", "{testimonial.role}" }
                                }
                            }
                            p { class: "testimonial-quote", "\u{201C}{testimonial.quote}\u{201D}" }
                            StarRating { rating: testimonial.rating }
                        }
                    }
                }
            }
        }
    }
}
