use dioxus::prelude::*;

use crate::components::{ConnectButton, ThemeToggle};
use crate::hooks::use_viewport;
use crate::routes::Route;
use crate::utils::nav_style::{
    hamburger_bar_style, right_section_style, ACCENT, BACKGROUND, FONT_FAMILY, NAVBAR_HEIGHT,
};
use crate::utils::{nav_link_style, Viewport};

/// Fixed top navigation with desktop links and a mobile overlay menu
#[component]
pub fn Navbar() -> Element {
    let viewport = use_viewport();
    let mut menu_open = use_signal(|| false);
    let current_route = use_route::<Route>();
    let navigator = navigator();

    // Close the overlay once the window grows to desktop width
    use_effect(move || {
        if *viewport.read() == Viewport::Desktop && *menu_open.peek() {
            menu_open.set(false);
        }
    });

    let vp = *viewport.read();
    let is_open = *menu_open.read();
    let home_style = nav_link_style(matches!(current_route, Route::Home {}), vp).to_css();
    let mint_style = nav_link_style(matches!(current_route, Route::NftMint {}), vp).to_css();
    let right_style = right_section_style(vp);
    let bar_styles: Vec<String> = (0..3).map(|i| hamburger_bar_style(i, is_open)).collect();
    let overlay_top = NAVBAR_HEIGHT;

    rsx! {
        nav {
            style: "display: flex; justify-content: space-between; align-items: center; position: fixed; top: 0; left: 0; width: 100%; padding: 15px 20px; background-color: {BACKGROUND}; border-bottom: 3px solid {ACCENT}; z-index: 1001;",

            // Logo
            div {
                h2 {
                    style: "color: {ACCENT}; font-family: {FONT_FAMILY}; margin: 0; font-size: 1.8rem; cursor: pointer;",
                    onclick: move |_| {
                        navigator.push(Route::Home {});
                    },
                    "KOA"
                }
            }

            if vp == Viewport::Desktop {
                div {
                    style: "display: flex; justify-content: center; align-items: center; gap: 20px;",
                    NavLink { to: Route::Home {}, label: "Home", style: home_style.clone(), on_navigate: move |_| {} }
                    NavLink { to: Route::NftMint {}, label: "NFT Mint", style: mint_style.clone(), on_navigate: move |_| {} }
                }
            }

            div {
                style: "{right_style}",
                ConnectButton {}
                ThemeToggle {}

                if vp.is_mobile() {
                    div {
                        style: "display: flex; flex-direction: column; justify-content: space-between; width: 30px; height: 24px; cursor: pointer; position: absolute; right: 0; top: 50%; transform: translateY(-50%);",
                        "aria-label": "Menu",
                        onclick: move |_| {
                            let open = *menu_open.read();
                            menu_open.set(!open);
                        },
                        for (i, bar_style) in bar_styles.iter().enumerate() {
                            span { key: "{i}", style: "{bar_style}" }
                        }
                    }
                }
            }

            if vp.is_mobile() && is_open {
                div {
                    style: "position: fixed; top: {overlay_top}px; left: 0; width: 100%; height: calc(100vh - {overlay_top}px); background-color: {BACKGROUND}; z-index: 1000; display: flex; flex-direction: column; padding: 20px 0; overflow: auto; border-top: 1px solid rgba(255, 179, 0, 0.3); text-align: center;",

                    div {
                        style: "display: flex; justify-content: center; padding: 10px 20px 20px; border-bottom: 1px solid rgba(255, 179, 0, 0.2);",
                        button {
                            style: "background: transparent; border: 2px solid {ACCENT}; border-radius: 4px; color: {ACCENT}; padding: 8px 15px; font-size: 1rem; font-family: {FONT_FAMILY}; cursor: pointer; min-width: 120px;",
                            onclick: move |_| menu_open.set(false),
                            "Close Menu"
                        }
                    }

                    div {
                        style: "margin-top: 25px; display: flex; flex-direction: column; align-items: center; width: 100%;",
                        NavLink {
                            to: Route::Home {},
                            label: "Home",
                            style: home_style.clone(),
                            on_navigate: move |_| menu_open.set(false),
                        }
                        NavLink {
                            to: Route::NftMint {},
                            label: "NFT Mint",
                            style: mint_style.clone(),
                            on_navigate: move |_| menu_open.set(false),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NavLink(to: Route, label: &'static str, style: String, on_navigate: EventHandler<()>) -> Element {
    let navigator = navigator();
    let href = to.to_string();

    rsx! {
        a {
            href: "{href}",
            style: "{style}",
            onclick: move |evt: Event<MouseData>| {
                evt.prevent_default();
                navigator.push(to.clone());
                on_navigate.call(());
            },
            "{label}"
        }
    }
}
