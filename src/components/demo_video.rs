//! Demo Video - autoplaying, muted, looping clip with an unmute toggle.

use bodsphere_core::{Entrance, VideoState, DEMO_VIDEO_ID};
use bodsphere_ui::{Button, ButtonVariant, SectionHeading, SpeakerIcon};
use dioxus::prelude::*;

use crate::components::reveal::Reveal;
use crate::context::{use_page_anchors, use_site_content};

#[component]
pub fn DemoVideo() -> Element {
    let content = use_site_content();
    let anchors = use_page_anchors();
    let mut playback = use_signal(VideoState::default);

    let state = playback();
    let label = state.toggle_label();

    rsx! {
        section {
            class: "demo-section",
            onmounted: move |evt| {
                let mut demo = anchors.demo;
                demo.set(Some(evt.data()));
            },
            div { class: "container",
                SectionHeading {
                    title: "See".to_string(),
                    highlight: format!("{} in Motion", content.brand),
                }
                Reveal { name: "demo-video".to_string(), entrance: Entrance::ScaleIn, class: "video-frame".to_string(),
                    video {
                        id: DEMO_VIDEO_ID,
                        class: "demo-video",
                        src: "{content.demo_video_url}",
                        autoplay: state.autoplay,
                        // Initial state only; the toggle sets the property
                        muted: true,
                        r#loop: true,
                        playsinline: true,
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        class: "video-mute".to_string(),
                        onclick: move |_| {
                            let script = {
                                let mut state = playback.write();
                                state.toggle_mute();
                                state.mute_script(DEMO_VIDEO_ID)
                            };
                            document::eval(&script);
                        },
                        SpeakerIcon { muted: state.muted }
                        span { "{label}" }
                    }
                }
            }
        }
    }
}
