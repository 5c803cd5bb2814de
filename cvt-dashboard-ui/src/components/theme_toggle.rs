//! Light/dark display mode switch.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn ThemeToggle() -> Element {
    let state = use_context::<AppState>();
    let dark = (state.dark_mode)();
    let (icon, label) = if dark {
        ("\u{2600}", "Switch to light mode")
    } else {
        ("\u{263E}", "Switch to dark mode")
    };

    rsx! {
        button {
            title: "{label}",
            style: "background: none; border: none; color: inherit; font-size: 20px; cursor: pointer; margin-right: 8px;",
            onclick: move |_| state.toggle_dark_mode(),
            "{icon}"
        }
    }
}
