//! Page components for the Bodsphere landing page.

mod landing;

pub use landing::Landing;
