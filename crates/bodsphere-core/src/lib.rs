//! Bodsphere Landing Core Library
//!
//! Framework-free logic behind the Bodsphere landing page.
//!
//! ## Overview
//!
//! - [`counter`]: the visibility-gated count-up state machine used by the
//!   stats bar
//! - [`visibility`]: viewport intersection and one-shot reveal latches
//! - [`pricing`]: plans, prices in cents, monthly/yearly toggle
//! - [`subscribe`]: email capture with a placeholder acknowledgement
//! - [`page`]: scroll-aware header and demo video mute state
//! - [`motion`]: entrance animation presets and stagger timing
//! - [`content`]: page copy, loadable from JSON
//!
//! ## Quick Start
//!
//! ```
//! use std::time::Duration;
//! use bodsphere_core::{CountUp, CounterSpec};
//!
//! let mut counter = CountUp::new(CounterSpec::new(190, "Global Presence").with_suffix("+"));
//! counter.observe_visibility(true);
//! counter.tick(Duration::ZERO);
//! counter.tick(Duration::from_millis(1000));
//! assert_eq!(counter.value(), 95);
//! counter.tick(Duration::from_millis(2000));
//! assert_eq!(counter.display(), "190+");
//! ```

pub mod content;
pub mod counter;
pub mod error;
pub mod logging;
pub mod motion;
pub mod page;
pub mod pricing;
pub mod subscribe;
pub mod visibility;

// Re-exports
pub use content::{CallToActionCopy, Feature, HeroCopy, SiteContent, Testimonial};
pub use counter::{
    run_frames, CountUp, CounterPhase, CounterSpec, CounterState, DEFAULT_DURATION, FRAME_INTERVAL,
};
pub use error::{SiteError, SiteResult};
pub use logging::LoggingBuilder;
pub use motion::Entrance;
pub use page::{HeaderState, VideoState, DEMO_VIDEO_ID};
pub use pricing::{BillingCycle, Price, PricingPlan};
pub use subscribe::{EmailAddress, SubscribeForm, SubscriptionNotice};
pub use visibility::{intersects, Span, VisibilityLatch};
