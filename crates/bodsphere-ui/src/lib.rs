//! Bodsphere Landing UI Components
//!
//! Dioxus components for the Bodsphere landing page. They carry no page
//! state of their own beyond what their props describe; the page wires them
//! to `bodsphere-core` state.
//!
//! ## Palette
//!
//! - **Rose (#f43f5e)**: primary actions, highlights, stars
//! - **Blush (#fff1f2 → #fdf2f8)**: page background gradient
//! - **Ink (#111827)**: footer and body text

pub mod components;

pub use components::*;
