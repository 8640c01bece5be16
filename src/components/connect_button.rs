use dioxus::prelude::*;

use crate::stores::wallet_store::{BrowserWallet, WalletConnector, WALLET_SESSION};
use crate::utils::nav_style::{ACCENT, BACKGROUND, FONT_FAMILY};
use crate::utils::truncate_address;

/// Wallet status button: shortened address when connected, connect prompt otherwise
#[component]
pub fn ConnectButton() -> Element {
    let session = WALLET_SESSION.read().clone();

    let label = match session.address.as_deref() {
        Some(address) if session.connected => truncate_address(address),
        _ => "Connect Wallet".to_string(),
    };
    let title = if session.connected {
        "Manage wallet"
    } else {
        "Connect a wallet"
    };

    rsx! {
        button {
            style: "background-color: {ACCENT}; color: {BACKGROUND}; border: none; border-radius: 4px; padding: 8px 15px; font-family: {FONT_FAMILY}; font-size: 1rem; cursor: pointer;",
            title: title,
            onclick: move |_| BrowserWallet.open_connect(),
            "{label}"
        }
    }
}
