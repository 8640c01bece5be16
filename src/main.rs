#![allow(non_snake_case)]

use dioxus::prelude::*;
use stores::{theme_store, wallet_store};

// Modules
mod components;
mod config;
mod hooks;
mod routes;
mod services;
mod stores;
mod utils;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting {} mint site", config::APP_NAME);

    // Launch the Dioxus web app
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    theme_store::use_theme_provider();

    // Initialize wallet session on mount
    use_effect(move || {
        wallet_store::init_wallet();
    });

    rsx! {
        Router::<routes::Route> {}
    }
}
