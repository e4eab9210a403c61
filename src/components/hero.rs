//! Hero - headline, pitch, primary calls to action and the feature card.
//!
//! Plays its entrance animations on load rather than on scroll, since it is
//! always in view first.

use std::time::Duration;

use bodsphere_core::Entrance;
use bodsphere_ui::{ArrowRightIcon, Button, ButtonVariant};
use dioxus::prelude::*;

use crate::context::{use_page_anchors, use_site_content};

#[component]
pub fn Hero() -> Element {
    let content = use_site_content();
    let anchors = use_page_anchors();
    let hero = &content.hero;

    let monogram = brand_initial(&content.brand);
    let fade = Entrance::FadeUp.class();
    let [title_style, body_style, actions_style, members_style] =
        [0, 1, 2, 3].map(|i| Entrance::FadeUp.style(i));
    let scale = Entrance::ScaleIn.class();
    let scale_style = Entrance::ScaleIn.style(0);
    // Card caption lands after the card itself.
    let caption_style = Entrance::Card.style_with_delay(Duration::from_millis(600));

    rsx! {
        section { class: "hero",
            div { class: "hero-blob hero-blob-top" }
            div { class: "hero-blob hero-blob-bottom" }

            div { class: "container hero-inner",
                div { class: "hero-copy",
                    h1 { class: "hero-title {fade}", style: "{title_style}",
                        "{hero.headline} "
                        br {}
                        span { class: "text-gradient", "{hero.highlight}" }
                    }
                    p { class: "hero-body {fade}", style: "{body_style}",
                        "{hero.body}"
                    }
                    div { class: "hero-actions {fade}", style: "{actions_style}",
                        Button {
                            variant: ButtonVariant::Primary,
                            class: "btn-large".to_string(),
                            onclick: move |_| anchors.scroll_to_subscribe(),
                            "Start Your Journey"
                            ArrowRightIcon {}
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            class: "btn-large".to_string(),
                            onclick: move |_| anchors.scroll_to_demo(),
                            "Watch Demo"
                        }
                    }
                    div { class: "hero-members {fade}", style: "{members_style}",
                        div { class: "member-avatar", "{monogram}" }
                        div {
                            div { class: "member-badge", "{hero.member_badge}" }
                            div { class: "member-caption", "{hero.member_caption}" }
                        }
                    }
                }

                div { class: "hero-visual {scale}", style: "{scale_style}",
                    div { class: "hero-card",
                        div { class: "hero-art" }
                        div { class: "hero-card-caption {fade}", style: "{caption_style}",
                            div { class: "instructor-avatar" }
                            div {
                                h3 { "{hero.card_title}" }
                                p { "{hero.card_caption}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// First letter of the brand, used where a logo image would go.
pub fn brand_initial(brand: &str) -> char {
    brand.chars().next().unwrap_or('B')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_initial_falls_back() {
        assert_eq!(brand_initial("Bodsphere"), 'B');
        assert_eq!(brand_initial(""), 'B');
    }
}
