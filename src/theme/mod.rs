//! Visual theme for the Bodsphere landing page.

mod styles;

pub use styles::GLOBAL_STYLES;
