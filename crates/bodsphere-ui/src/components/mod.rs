//! Reusable landing page components
//!
//! Buttons, inputs and small decorative pieces shared by the page sections.

mod billing_toggle;
mod button;
mod icons;
mod input;
mod section_heading;
mod star_rating;

pub use billing_toggle::*;
pub use button::*;
pub use icons::*;
pub use input::*;
pub use section_heading::*;
pub use star_rating::*;
