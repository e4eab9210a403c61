//! Billing Toggle Component
//!
//! Two-option switch between monthly and yearly prices.

use bodsphere_core::BillingCycle;
use dioxus::prelude::*;

/// Properties for the BillingToggle component
#[derive(Clone, PartialEq, Props)]
pub struct BillingToggleProps {
    /// Currently selected cycle
    pub cycle: BillingCycle,
    /// Best yearly discount across plans, shown as a badge when non-zero
    #[props(default = 0)]
    pub savings_percent: u32,
    /// Handler called with the newly selected cycle
    pub on_change: EventHandler<BillingCycle>,
}

/// Monthly / Yearly selector
///
/// # Example
///
/// ```rust,ignore
/// let mut cycle = use_signal(BillingCycle::default);
///
/// rsx! {
///     BillingToggle {
///         cycle: cycle(),
///         savings_percent: 17,
///         on_change: move |c| cycle.set(c)
///     }
/// }
/// ```
#[component]
pub fn BillingToggle(props: BillingToggleProps) -> Element {
    let on_change = props.on_change;

    rsx! {
        div {
            class: "billing-toggle",
            role: "radiogroup",
            "aria-label": "Billing period",
            for (cycle, label) in [(BillingCycle::Monthly, "Monthly"), (BillingCycle::Yearly, "Yearly")] {
                {
                    let is_selected = props.cycle == cycle;
                    let option_class = if is_selected { "billing-option selected" } else { "billing-option" };
                    rsx! {
                        button {
                            key: "{label}",
                            class: "{option_class}",
                            role: "radio",
                            "aria-checked": "{is_selected}",
                            onclick: move |_| {
                                if !is_selected {
                                    on_change.call(cycle);
                                }
                            },
                            "{label}"
                        }
                    }
                }
            }
            if props.savings_percent > 0 {
                span { class: "billing-savings", "Save up to {props.savings_percent}%" }
            }
        }
    }
}
