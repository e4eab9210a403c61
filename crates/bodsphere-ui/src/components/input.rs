//! Input Field Components
//!
//! Text input on the translucent call-to-action band: frosted background,
//! white text, brighter border on focus.

use dioxus::prelude::*;

use crate::components::join_classes;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Visually hidden label for screen readers
    #[props(default)]
    pub label: Option<String>,
    /// Input type (text, email, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,
    /// Marks the field as rejected (red border)
    #[props(default = false)]
    pub invalid: bool,
    /// Optional ID for label association
    #[props(default)]
    pub id: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Text input field
///
/// # Example
///
/// ```rust,ignore
/// let mut email = use_signal(String::new);
///
/// rsx! {
///     Input {
///         value: email(),
///         oninput: move |s| email.set(s),
///         input_type: "email".to_string(),
///         placeholder: "Enter your email".to_string(),
///         required: true,
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = props
        .id
        .clone()
        .unwrap_or_else(|| format!("input-{}", rand_id()));
    let base = if props.invalid {
        "input-field invalid"
    } else {
        "input-field"
    };
    let input_class = join_classes(base, props.class.as_deref());

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "visually-hidden",
                    r#for: "{id}",
                    "{label}"
                }
            }
            input {
                id: "{id}",
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                "aria-invalid": "{props.invalid}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Generate a simple pseudo-random ID
fn rand_id() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (duration.as_nanos() % 1_000_000) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rand_id_generates_number() {
        assert!(rand_id() < 1_000_000);
    }
}
