//! Call to Action - closing pitch with the email capture form.
//!
//! Submitting shows a thank-you notice; nothing leaves the page.

use bodsphere_core::{Entrance, SubscribeForm};
use bodsphere_ui::{Button, ButtonVariant, Input};
use dioxus::prelude::*;

use crate::components::reveal::Reveal;
use crate::context::{use_page_anchors, use_site_content};

#[component]
pub fn CallToAction() -> Element {
    let content = use_site_content();
    let anchors = use_page_anchors();
    let mut form = use_signal(SubscribeForm::new);
    let mut notice: Signal<Option<String>> = use_signal(|| None);
    let mut error: Signal<Option<String>> = use_signal(|| None);

    let brand = content.brand.clone();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let result = form.write().submit(&brand);
        match result {
            Ok(ack) => {
                notice.set(Some(ack.message()));
                error.set(None);
            }
            Err(e) => {
                error.set(Some(e.to_string()));
                notice.set(None);
            }
        }
    };

    let email = form.read().email.clone();
    let cta = &content.cta;

    rsx! {
        section {
            class: "cta-section",
            onmounted: move |evt| {
                let mut subscribe = anchors.subscribe;
                subscribe.set(Some(evt.data()));
            },
            div { class: "container",
                Reveal { name: "cta".to_string(), entrance: Entrance::FadeUp, class: "cta-inner".to_string(),
                    h2 { class: "cta-title", "{cta.headline}" }
                    p { class: "cta-body", "{cta.body}" }

                    form { class: "subscribe-form", onsubmit: on_submit,
                        Input {
                            value: email,
                            oninput: move |value: String| {
                                form.write().set_email(value);
                                error.set(None);
                            },
                            input_type: "email".to_string(),
                            placeholder: "Enter your email".to_string(),
                            label: "Email address".to_string(),
                            id: "subscribe-email".to_string(),
                            required: true,
                            invalid: error().is_some(),
                            class: "input-frosted".to_string(),
                        }
                        Button {
                            variant: ButtonVariant::Inverse,
                            button_type: "submit".to_string(),
                            "Subscribe Now"
                        }
                    }

                    if let Some(message) = error() {
                        p { class: "form-error", role: "alert", "{message}" }
                    }
                    if let Some(message) = notice() {
                        div { class: "subscribe-notice", role: "status",
                            span { "{message}" }
                            button {
                                class: "notice-dismiss",
                                r#type: "button",
                                "aria-label": "Dismiss",
                                onclick: move |_| notice.set(None),
                                "\u{00D7}"
                            }
                        }
                    }

                    p { class: "cta-fine-print", "{cta.fine_print}" }
                }
            }
        }
    }
}
