//! Inline SVG icons
//!
//! Small stroke icons drawn inline so the page needs no icon font.

use dioxus::prelude::*;

/// Circle with a check mark (feature cards)
#[component]
pub fn CheckCircleIcon(#[props(default = 24)] size: u32) -> Element {
    rsx! {
        svg {
            class: "icon",
            view_box: "0 0 24 24",
            width: "{size}",
            height: "{size}",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            path { d: "M22 11.08V12a10 10 0 1 1-5.93-9.14" }
            polyline { points: "22 4 12 14.01 9 11.01" }
        }
    }
}

/// Right arrow for "Start Your Journey"
#[component]
pub fn ArrowRightIcon(#[props(default = 20)] size: u32) -> Element {
    rsx! {
        svg {
            class: "icon icon-trailing",
            view_box: "0 0 24 24",
            width: "{size}",
            height: "{size}",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            line { x1: "5", y1: "12", x2: "19", y2: "12" }
            polyline { points: "12 5 19 12 12 19" }
        }
    }
}

/// Rating star
#[component]
pub fn StarIcon(filled: bool) -> Element {
    let (class, fill) = if filled {
        ("icon star filled", "currentColor")
    } else {
        ("icon star", "none")
    };

    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 20 20",
            width: "20",
            height: "20",
            fill: "{fill}",
            stroke: "currentColor",
            "aria-hidden": "true",
            path { d: "M9.049 2.927c.3-.921 1.603-.921 1.902 0l1.07 3.292a1 1 0 00.95.69h3.462c.969 0 1.371 1.24.588 1.81l-2.8 2.034a1 1 0 00-.364 1.118l1.07 3.292c.3.921-.755 1.688-1.54 1.118l-2.8-2.034a1 1 0 00-1.175 0l-2.8 2.034c-.784.57-1.838-.197-1.539-1.118l1.07-3.292a1 1 0 00-.364-1.118L2.98 8.72c-.783-.57-.38-1.81.588-1.81h3.461a1 1 0 00.951-.69l1.07-3.292z" }
        }
    }
}

/// Speaker icon for the video mute toggle; crossed out when muted
#[component]
pub fn SpeakerIcon(muted: bool) -> Element {
    rsx! {
        svg {
            class: "icon",
            view_box: "0 0 24 24",
            width: "20",
            height: "20",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            polygon { points: "11 5 6 9 2 9 2 15 6 15 11 19 11 5" }
            if muted {
                line { x1: "23", y1: "9", x2: "17", y2: "15" }
                line { x1: "17", y1: "9", x2: "23", y2: "15" }
            } else {
                path { d: "M15.54 8.46a5 5 0 0 1 0 7.07" }
                path { d: "M19.07 4.93a10 10 0 0 1 0 14.14" }
            }
        }
    }
}
