//! Star Rating Component
//!
//! Row of five stars, filled up to the rating.

use dioxus::prelude::*;

use crate::components::StarIcon;

/// Maximum number of stars shown
pub const MAX_STARS: u8 = 5;

#[component]
pub fn StarRating(rating: u8) -> Element {
    let filled = rating.min(MAX_STARS);

    rsx! {
        div {
            class: "star-rating",
            "aria-label": "{filled} out of {MAX_STARS} stars",
            for star in 0..MAX_STARS {
                StarIcon { key: "{star}", filled: star < filled }
            }
        }
    }
}
