//! Page copy and static catalogue data.
//!
//! `SiteContent::default()` is the built-in Bodsphere page. A JSON file with
//! the same shape can replace it at launch; the file is validated before use.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::counter::CounterSpec;
use crate::error::{SiteError, SiteResult};
use crate::pricing::{default_plans, PricingPlan};

/// A card in the "Why Choose" grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

/// A member quote.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub quote: String,
    #[serde(default = "default_rating")]
    pub rating: u8,
}

fn default_rating() -> u8 {
    5
}

impl Testimonial {
    /// First letter of the name, used for the avatar placeholder.
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}

/// Hero section copy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroCopy {
    pub headline: String,
    pub highlight: String,
    pub body: String,
    pub member_badge: String,
    pub member_caption: String,
    pub card_title: String,
    pub card_caption: String,
}

/// Closing call-to-action copy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToActionCopy {
    pub headline: String,
    pub body: String,
    pub fine_print: String,
}

/// CC0 sample clip hosted by MDN, used until a `--content` file points at
/// real footage.
pub const DEFAULT_DEMO_VIDEO_URL: &str =
    "https://interactive-examples.mdn.mozilla.net/media/cc0-videos/flower.mp4";

/// Everything the landing page renders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub brand: String,
    pub hero: HeroCopy,
    pub features_intro: String,
    pub features: Vec<Feature>,
    pub stats: Vec<CounterSpec>,
    pub testimonials_intro: String,
    pub testimonials: Vec<Testimonial>,
    pub plans: Vec<PricingPlan>,
    pub cta: CallToActionCopy,
    /// Source of the autoplaying demo video
    pub demo_video_url: String,
}

impl Default for SiteContent {
    fn default() -> Self {
        let feature = |title: &str, description: &str| Feature {
            title: title.to_string(),
            description: description.to_string(),
        };
        let testimonial = |name: &str, role: &str, quote: &str| Testimonial {
            name: name.to_string(),
            role: role.to_string(),
            quote: quote.to_string(),
            rating: 5,
        };

        Self {
            brand: "Bodsphere".to_string(),
            hero: HeroCopy {
                headline: "Welcome to".to_string(),
                highlight: "the Yogic World".to_string(),
                body: "Join Bodsphere and discover a new way to practice yoga. Our platform offers \
                       personalized sessions, expert guidance, and a supportive community."
                    .to_string(),
                member_badge: "Join 10,000+ members".to_string(),
                member_caption: "Transforming lives daily".to_string(),
                card_title: "Start Yogic Journey with Bodsphere".to_string(),
                card_caption: "Live Sessions available \u{2022} Join now".to_string(),
            },
            features_intro: "Our platform is designed to make yoga accessible, enjoyable, and \
                             effective for everyone, regardless of your experience level."
                .to_string(),
            features: vec![
                feature(
                    "Expert-Led Sessions",
                    "Learn from certified yoga instructors with years of experience",
                ),
                feature(
                    "Personalized Journey",
                    "Customized programs tailored to your fitness level and goals",
                ),
                feature(
                    "Community Support",
                    "Join a global community of like-minded individuals",
                ),
                feature(
                    "Anytime, Anywhere",
                    "Access your practice sessions from any device, anytime",
                ),
            ],
            stats: vec![
                CounterSpec::new(12_000, "Users Subscribed").with_suffix("+"),
                CounterSpec::new(190, "Global Presence").with_suffix("+"),
                CounterSpec::new(500, "Instructors Worldwide").with_suffix("+"),
            ],
            testimonials_intro:
                "Hear from our community members who have experienced the Bodsphere difference."
                    .to_string(),
            testimonials: vec![
                testimonial(
                    "Emma Thompson",
                    "Yoga Enthusiast",
                    "Bodsphere transformed my practice. The personalized sessions and expert \
                     guidance have helped me progress faster than I ever thought possible.",
                ),
                testimonial(
                    "Michael Chen",
                    "Beginner Yogi",
                    "As someone new to yoga, I was intimidated at first. Bodsphere made it \
                     approachable and enjoyable. Now I practice daily!",
                ),
                testimonial(
                    "Sarah Johnson",
                    "Fitness Instructor",
                    "The quality of instruction on Bodsphere is unmatched. I recommend it to all \
                     my clients as a complement to their fitness routines.",
                ),
            ],
            plans: default_plans(),
            cta: CallToActionCopy {
                headline: "Begin Your Yoga Journey Today".to_string(),
                body: "Join thousands of members who are already experiencing the benefits of \
                       Bodsphere. Subscribe now and get access to unlimited classes, personalized \
                       programs, and our supportive community."
                    .to_string(),
                fine_print: "Start your 7-day free trial. Cancel anytime. No credit card required."
                    .to_string(),
            },
            demo_video_url: DEFAULT_DEMO_VIDEO_URL.to_string(),
        }
    }
}

impl SiteContent {
    /// Load and validate a JSON content file.
    pub fn load(path: impl AsRef<Path>) -> SiteResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let content: SiteContent = serde_json::from_str(&raw)?;
        content.validate()?;
        tracing::info!(
            path = %path.display(),
            plans = content.plans.len(),
            stats = content.stats.len(),
            "loaded page content"
        );
        Ok(content)
    }

    /// Write the content as pretty JSON, e.g. as a starting point for edits.
    pub fn save(&self, path: impl AsRef<Path>) -> SiteResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Check the invariants the page relies on.
    pub fn validate(&self) -> SiteResult<()> {
        if self.brand.trim().is_empty() {
            return Err(SiteError::InvalidContent("brand must not be empty".to_string()));
        }
        if self.plans.is_empty() {
            return Err(SiteError::InvalidContent(
                "at least one pricing plan is required".to_string(),
            ));
        }
        let popular = self.plans.iter().filter(|p| p.popular).count();
        if popular > 1 {
            return Err(SiteError::InvalidContent(format!(
                "{} plans are marked popular, at most one allowed",
                popular
            )));
        }
        for plan in &self.plans {
            if u64::from(plan.yearly.as_cents()) > u64::from(plan.monthly.as_cents()) * 12 {
                return Err(SiteError::InvalidContent(format!(
                    "plan '{}' costs more yearly than twelve monthly payments",
                    plan.name
                )));
            }
        }
        if let Some(f) = self.features.iter().find(|f| f.title.trim().is_empty()) {
            return Err(SiteError::InvalidContent(format!(
                "feature with description '{}' has no title",
                f.description
            )));
        }
        if self.testimonials.iter().any(|t| t.name.trim().is_empty()) {
            return Err(SiteError::InvalidContent(
                "testimonial without a name".to_string(),
            ));
        }
        if let Some(t) = self.testimonials.iter().find(|t| t.rating > 5) {
            return Err(SiteError::InvalidContent(format!(
                "testimonial from '{}' rated {} stars, max 5",
                t.name, t.rating
            )));
        }
        Ok(())
    }

    /// Footer line for the given year.
    pub fn copyright(&self, year: i32) -> String {
        format!("\u{00A9} {} {}. All rights reserved.", year, self.brand)
    }

    /// Footer line for the current local year.
    pub fn copyright_now(&self) -> String {
        use chrono::Datelike;
        self.copyright(chrono::Local::now().year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::Price;

    #[test]
    fn default_content_is_valid() {
        let content = SiteContent::default();
        content.validate().unwrap();
        assert_eq!(content.features.len(), 4);
        assert_eq!(content.testimonials.len(), 3);
        assert_eq!(content.plans.len(), 3);
        let targets: Vec<u64> = content.stats.iter().map(|s| s.target).collect();
        assert_eq!(targets, vec![12_000, 190, 500]);
    }

    #[test]
    fn default_demo_video_is_remote() {
        let content = SiteContent::default();
        assert_eq!(content.demo_video_url, DEFAULT_DEMO_VIDEO_URL);
        assert!(content.demo_video_url.starts_with("https://"));
        assert!(content.demo_video_url.ends_with(".mp4"));
    }

    #[test]
    fn testimonial_initial() {
        let content = SiteContent::default();
        let initials: String = content.testimonials.iter().map(|t| t.initial()).collect();
        assert_eq!(initials, "EMS");
    }

    #[test]
    fn rejects_two_popular_plans() {
        let mut content = SiteContent::default();
        content.plans[0].popular = true;
        let err = content.validate().unwrap_err();
        assert!(matches!(err, SiteError::InvalidContent(_)));
    }

    #[test]
    fn rejects_overpriced_yearly() {
        let mut content = SiteContent::default();
        content.plans[2].yearly = Price::cents(2999 * 12 + 1);
        assert!(content.validate().is_err());
    }

    #[test]
    fn rejects_empty_plans() {
        let mut content = SiteContent::default();
        content.plans.clear();
        assert!(content.validate().is_err());
    }

    #[test]
    fn copyright_line() {
        let content = SiteContent::default();
        assert_eq!(
            content.copyright(2026),
            "\u{00A9} 2026 Bodsphere. All rights reserved."
        );
    }

    #[test]
    fn suffix_defaults_when_missing() {
        let spec: CounterSpec =
            serde_json::from_str(r#"{"target": 3, "label": "Studios"}"#).unwrap();
        assert_eq!(spec.suffix, "");
        assert_eq!(spec.display(3), "3");
    }
}
