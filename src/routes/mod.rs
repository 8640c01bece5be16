use dioxus::prelude::*;

pub mod home;
pub mod nft_mint;
pub mod not_found;

use home::Home;
use nft_mint::NftMint;
use not_found::PageNotFound;

use crate::components::{MusicPlayer, Navbar};

/// App routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        #[redirect("/home", || Route::Home {})]
        Home {},

        #[route("/nft-mint")]
        NftMint {},

        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

#[component]
fn Layout() -> Element {
    let current_route = use_route::<Route>();

    // Scroll to top on every route change
    use_effect(use_reactive(&current_route, move |_route| {
        if let Some(window) = web_sys::window() {
            let _ = window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }));

    rsx! {
        div {
            class: "App",
            Navbar {}
            div {
                class: "content-container",
                Outlet::<Route> {}
            }
            MusicPlayer {}
        }
    }
}
