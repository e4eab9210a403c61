//! Section Heading Component
//!
//! Centered section title where the trailing phrase is painted with the
//! brand gradient, plus an optional lead paragraph.

use bodsphere_core::Entrance;
use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct SectionHeadingProps {
    /// Plain leading words ("Why Choose")
    pub title: String,
    /// Gradient phrase ("Bodsphere")
    pub highlight: String,
    #[props(default)]
    pub lead: Option<String>,
}

#[component]
pub fn SectionHeading(props: SectionHeadingProps) -> Element {
    let enter_class = Entrance::FadeUp.class();
    let title_style = Entrance::FadeUp.style(0);
    let lead_style = Entrance::FadeUp.style(1);

    rsx! {
        div { class: "section-heading",
            h2 {
                class: "section-title {enter_class}",
                style: "{title_style}",
                "{props.title} "
                span { class: "text-gradient", "{props.highlight}" }
            }
            if let Some(lead) = &props.lead {
                p {
                    class: "section-lead {enter_class}",
                    style: "{lead_style}",
                    "{lead}"
                }
            }
        }
    }
}
