use std::rc::Rc;

use dioxus::prelude::*;

use crate::context::{get_launch_settings, SharedContent};
use crate::pages::Landing;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The landing page; there is no other route
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
}

/// Root application component.
///
/// Provides global styles, launch settings, page content and routing.
#[component]
pub fn App() -> Element {
    let settings = use_hook(get_launch_settings);
    let content: SharedContent = use_hook(|| Rc::new(settings.content.clone()));

    use_context_provider(|| settings.clone());
    use_context_provider(|| content.clone());

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
