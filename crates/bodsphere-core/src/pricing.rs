//! Subscription plans and the monthly/yearly billing toggle.
//!
//! Prices are kept in integer cents so display and savings math never see
//! floating point rounding.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Billing period selected by the pricing toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub fn toggle(self) -> Self {
        match self {
            BillingCycle::Monthly => BillingCycle::Yearly,
            BillingCycle::Yearly => BillingCycle::Monthly,
        }
    }

    pub fn is_yearly(self) -> bool {
        matches!(self, BillingCycle::Yearly)
    }

    /// Suffix shown after a price.
    pub fn period_label(self) -> &'static str {
        match self {
            BillingCycle::Monthly => "/month",
            BillingCycle::Yearly => "/year",
        }
    }
}

/// An amount in US cents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(pub u32);

impl Price {
    pub const fn cents(cents: u32) -> Self {
        Self(cents)
    }

    pub fn as_cents(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// One column of the pricing table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPlan {
    pub name: String,
    pub description: String,
    pub monthly: Price,
    pub yearly: Price,
    pub features: Vec<String>,
    #[serde(default)]
    pub popular: bool,
}

impl PricingPlan {
    pub fn price_for(&self, cycle: BillingCycle) -> Price {
        match cycle {
            BillingCycle::Monthly => self.monthly,
            BillingCycle::Yearly => self.yearly,
        }
    }

    /// Percentage saved by paying yearly instead of twelve monthly payments,
    /// rounded to the nearest whole percent. Zero when yearly is not cheaper.
    pub fn yearly_savings_percent(&self) -> u32 {
        let twelve_months = u64::from(self.monthly.0) * 12;
        let yearly = u64::from(self.yearly.0);
        if twelve_months == 0 || yearly >= twelve_months {
            return 0;
        }
        let saved = twelve_months - yearly;
        ((saved * 100 + twelve_months / 2) / twelve_months) as u32
    }
}

/// Built-in Bodsphere plans.
pub fn default_plans() -> Vec<PricingPlan> {
    fn plan(
        name: &str,
        description: &str,
        monthly: u32,
        yearly: u32,
        features: &[&str],
        popular: bool,
    ) -> PricingPlan {
        PricingPlan {
            name: name.to_string(),
            description: description.to_string(),
            monthly: Price::cents(monthly),
            yearly: Price::cents(yearly),
            features: features.iter().map(|f| f.to_string()).collect(),
            popular,
        }
    }

    vec![
        plan(
            "Basic",
            "Perfect for beginners starting their yoga journey",
            999,
            9999,
            &[
                "Access to 50+ beginner classes",
                "Basic pose guides",
                "Community forum access",
                "1 live session per month",
            ],
            false,
        ),
        plan(
            "Premium",
            "Our most popular plan for dedicated practitioners",
            1999,
            19999,
            &[
                "Access to 200+ classes for all levels",
                "Personalized practice recommendations",
                "Progress tracking",
                "4 live sessions per month",
                "Downloadable classes for offline practice",
            ],
            true,
        ),
        plan(
            "Ultimate",
            "The complete Bodsphere experience for serious yogis",
            2999,
            29999,
            &[
                "Unlimited access to all classes",
                "1-on-1 sessions with instructors",
                "Custom program creation",
                "Unlimited live sessions",
                "Priority support",
                "Early access to new features",
            ],
            false,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_display() {
        assert_eq!(Price::cents(999).to_string(), "$9.99");
        assert_eq!(Price::cents(29999).to_string(), "$299.99");
        assert_eq!(Price::cents(5).to_string(), "$0.05");
        assert_eq!(Price::cents(0).to_string(), "$0.00");
    }

    #[test]
    fn toggle_flips_cycle() {
        assert_eq!(BillingCycle::Monthly.toggle(), BillingCycle::Yearly);
        assert_eq!(BillingCycle::Yearly.toggle(), BillingCycle::Monthly);
        assert_eq!(BillingCycle::default(), BillingCycle::Monthly);
    }

    #[test]
    fn plan_prices_follow_cycle() {
        let plans = default_plans();
        let premium = &plans[1];
        assert!(premium.popular);
        assert_eq!(premium.price_for(BillingCycle::Monthly).to_string(), "$19.99");
        assert_eq!(premium.price_for(BillingCycle::Yearly).to_string(), "$199.99");
        assert_eq!(BillingCycle::Yearly.period_label(), "/year");
    }

    #[test]
    fn yearly_savings() {
        // 12 x 9.99 = 119.88 vs 99.99 -> 16.6%
        assert_eq!(default_plans()[0].yearly_savings_percent(), 17);

        let no_discount = PricingPlan {
            name: "Flat".into(),
            description: String::new(),
            monthly: Price::cents(1000),
            yearly: Price::cents(12000),
            features: vec![],
            popular: false,
        };
        assert_eq!(no_discount.yearly_savings_percent(), 0);
    }

    #[test]
    fn plan_json_shape() {
        let json = serde_json::to_value(&default_plans()[0]).unwrap();
        assert_eq!(json["monthly"], 999);
        assert_eq!(json["name"], "Basic");
    }
}
