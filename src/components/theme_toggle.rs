use dioxus::prelude::*;

use crate::stores::theme_store::{use_theme, BrowserStorage};

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_theme();
    let label = theme.read().toggle_label();

    rsx! {
        button {
            class: "theme-toggle-button",
            onclick: move |_| theme.write().toggle(&BrowserStorage),
            "{label}"
        }
    }
}
