//! Pricing - plan cards with a monthly/yearly toggle.

use bodsphere_core::{BillingCycle, Entrance, PricingPlan};
use bodsphere_ui::{BillingToggle, Button, ButtonVariant, CheckCircleIcon, SectionHeading};
use dioxus::prelude::*;

use crate::components::reveal::Reveal;
use crate::context::{use_page_anchors, use_site_content};

#[component]
pub fn Pricing() -> Element {
    let content = use_site_content();
    let mut cycle = use_signal(BillingCycle::default);

    let best_savings = content
        .plans
        .iter()
        .map(PricingPlan::yearly_savings_percent)
        .max()
        .unwrap_or(0);

    rsx! {
        section { class: "pricing-section",
            div { class: "container",
                Reveal { name: "pricing-heading".to_string(),
                    SectionHeading {
                        title: "Choose Your".to_string(),
                        highlight: "Practice".to_string(),
                    }
                    BillingToggle {
                        cycle: cycle(),
                        savings_percent: best_savings,
                        on_change: move |c: BillingCycle| {
                            tracing::debug!(cycle = ?c, "billing cycle changed");
                            cycle.set(c);
                        },
                    }
                }
                div { class: "pricing-grid",
                    for (index, plan) in content.plans.iter().enumerate() {
                        PlanCard {
                            key: "{plan.name}",
                            plan: plan.clone(),
                            cycle: cycle(),
                            index: index,
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct PlanCardProps {
    pub plan: PricingPlan,
    pub cycle: BillingCycle,
    pub index: usize,
}

#[component]
fn PlanCard(props: PlanCardProps) -> Element {
    let anchors = use_page_anchors();
    let plan = &props.plan;
    let price = plan.price_for(props.cycle);
    let period = props.cycle.period_label();
    let card_class = if plan.popular {
        "plan-card popular".to_string()
    } else {
        "plan-card".to_string()
    };
    let savings = plan.yearly_savings_percent();
    let variant = if plan.popular {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Outline
    };

    rsx! {
        Reveal {
            name: format!("plan-{}", plan.name.to_lowercase()),
            entrance: Entrance::Card,
            index: props.index,
            class: card_class,
            if plan.popular {
                div { class: "plan-badge", "Most Popular" }
            }
            h3 { class: "plan-name", "{plan.name}" }
            p { class: "plan-description", "{plan.description}" }
            div { class: "plan-price",
                span { class: "plan-amount", "{price}" }
                span { class: "plan-period", "{period}" }
            }
            if props.cycle.is_yearly() && savings > 0 {
                div { class: "plan-savings", "Save {savings}%" }
            }
            ul { class: "plan-features",
                for feature in plan.features.iter() {
                    li { key: "{feature}",
                        CheckCircleIcon { size: 18 }
                        span { "{feature}" }
                    }
                }
            }
            Button {
                variant: variant,
                class: "plan-cta".to_string(),
                onclick: move |_| anchors.scroll_to_subscribe(),
                "Get Started"
            }
        }
    }
}
