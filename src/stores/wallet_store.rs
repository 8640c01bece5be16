use dioxus::prelude::*;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::services::ethereum::InjectedProvider;
use crate::utils::parse_chain_id;

/// Connected wallet as seen by the page
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WalletSession {
    pub connected: bool,
    pub address: Option<String>,
    pub chain_id: Option<u64>,
}

impl WalletSession {
    pub fn is_on_chain(&self, chain_id: u64) -> bool {
        self.chain_id == Some(chain_id)
    }
}

/// Changes reported by the provider
#[derive(Clone, Debug, PartialEq)]
pub enum WalletEvent {
    AccountsChanged(Vec<String>),
    ChainChanged(Option<u64>),
    Disconnected,
}

/// Decoded `accountsChanged` payload; an undecodable one counts as no accounts
fn accounts_or_empty<E: std::fmt::Display>(parsed: Result<Vec<String>, E>) -> Vec<String> {
    match parsed {
        Ok(accounts) => accounts,
        Err(e) => {
            log::warn!("Unreadable accountsChanged payload, treating as disconnect: {}", e);
            Vec::new()
        }
    }
}

/// Fold a provider event into the session
pub fn apply_event(session: &mut WalletSession, event: WalletEvent) {
    match event {
        WalletEvent::AccountsChanged(accounts) => {
            session.address = accounts.into_iter().next();
            session.connected = session.address.is_some();
        }
        WalletEvent::ChainChanged(chain_id) => {
            session.chain_id = chain_id;
        }
        WalletEvent::Disconnected => {
            session.connected = false;
            session.address = None;
        }
    }
}

/// The wallet-connector seam the mint flow depends on
pub trait WalletConnector {
    fn session(&self) -> WalletSession;

    /// Show the wallet connection UI
    fn open_connect(&self);
}

/// Global wallet session
pub static WALLET_SESSION: GlobalSignal<WalletSession> = Signal::global(WalletSession::default);

// Provider event handlers live for the whole page
thread_local! {
    static EVENT_HANDLERS: RefCell<Vec<Closure<dyn FnMut(JsValue)>>> = RefCell::new(Vec::new());
}

fn dispatch(event: WalletEvent) {
    log::info!("Wallet event: {:?}", event);
    apply_event(&mut WALLET_SESSION.write(), event);
}

/// Wallet backed by the injected provider and, when the host page loads it,
/// the wallet-connector modal exposed as `window.appKit`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserWallet;

impl WalletConnector for BrowserWallet {
    fn session(&self) -> WalletSession {
        WALLET_SESSION.read().clone()
    }

    fn open_connect(&self) {
        if open_connect_modal() {
            return;
        }
        wasm_bindgen_futures::spawn_local(request_accounts());
    }
}

/// Read the current session from the provider and subscribe to its events
pub fn init_wallet() {
    let Some(provider) = InjectedProvider::detect() else {
        log::warn!("No injected provider found, wallet features limited to the connect modal");
        return;
    };

    subscribe(&provider, "accountsChanged", |value| {
        WalletEvent::AccountsChanged(accounts_or_empty(serde_wasm_bindgen::from_value(value)))
    });
    subscribe(&provider, "chainChanged", |value| {
        WalletEvent::ChainChanged(value.as_string().as_deref().and_then(parse_chain_id))
    });
    subscribe(&provider, "disconnect", |_| WalletEvent::Disconnected);

    wasm_bindgen_futures::spawn_local(async move {
        match provider
            .request_as::<Vec<String>>("eth_accounts", serde_json::json!([]))
            .await
        {
            Ok(accounts) => dispatch(WalletEvent::AccountsChanged(accounts)),
            Err(e) => log::warn!("Failed to read accounts: {}", e),
        }
        refresh_chain_id(&provider).await;
    });

    log::info!("Wallet session initialized");
}

fn subscribe(provider: &InjectedProvider, event: &str, map: fn(JsValue) -> WalletEvent) {
    let handler = Closure::wrap(Box::new(move |value: JsValue| dispatch(map(value)))
        as Box<dyn FnMut(JsValue)>);

    match provider.on(event, &handler) {
        Ok(()) => EVENT_HANDLERS.with(|handlers| handlers.borrow_mut().push(handler)),
        Err(e) => log::warn!("Failed to subscribe to {}: {}", event, e),
    }
}

async fn refresh_chain_id(provider: &InjectedProvider) {
    match provider
        .request_as::<String>("eth_chainId", serde_json::json!([]))
        .await
    {
        Ok(raw) => dispatch(WalletEvent::ChainChanged(parse_chain_id(&raw))),
        Err(e) => log::warn!("Failed to read chain id: {}", e),
    }
}

/// Open the connector modal if the host page provides one
fn open_connect_modal() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Ok(app_kit) = js_sys::Reflect::get(&window, &JsValue::from_str("appKit")) else {
        return false;
    };
    if app_kit.is_undefined() || app_kit.is_null() {
        return false;
    }

    let open = js_sys::Reflect::get(&app_kit, &JsValue::from_str("open"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
    match open.map(|f| f.call0(&app_kit)) {
        Some(Ok(_)) => {
            log::info!("Opened wallet connect modal");
            true
        }
        Some(Err(e)) => {
            log::error!("Failed to open wallet connect modal: {:?}", e);
            false
        }
        None => false,
    }
}

/// Fallback connect flow straight through the injected provider
async fn request_accounts() {
    let provider = match InjectedProvider::require() {
        Ok(provider) => provider,
        Err(e) => {
            log::warn!("Cannot connect without a connect modal: {}", e);
            return;
        }
    };

    match provider
        .request_as::<Vec<String>>("eth_requestAccounts", serde_json::json!([]))
        .await
    {
        Ok(accounts) => {
            dispatch(WalletEvent::AccountsChanged(accounts));
            refresh_chain_id(&provider).await;
        }
        Err(e) => log::warn!("Wallet connection declined: {}", e),
    }
}
