//! Page sections for the Bodsphere landing page.

mod call_to_action;
mod demo_video;
mod features;
mod floating_join;
mod footer;
mod hero;
mod pricing;
pub mod reveal;
mod site_header;
mod stats;
mod testimonials;

pub use call_to_action::CallToAction;
pub use demo_video::DemoVideo;
pub use features::Features;
pub use floating_join::FloatingJoin;
pub use footer::Footer;
pub use hero::Hero;
pub use pricing::Pricing;
pub use site_header::SiteHeader;
pub use stats::StatsBar;
pub use testimonials::Testimonials;
