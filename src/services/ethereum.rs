//! EIP-1193 injected provider (`window.ethereum`) bindings

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Plain value transfer, the single parameter of `eth_sendTransaction`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRequest {
    pub from: String,
    pub to: String,
    /// 0x-prefixed hex amount in wei
    pub value: String,
}

/// Error type for provider operations
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderError {
    NotInstalled,
    /// The wallet or node refused the request; message kept as the provider sent it
    Rejected { code: Option<i64>, message: String },
}

impl ProviderError {
    pub fn rejected(message: impl Into<String>) -> Self {
        ProviderError::Rejected {
            code: None,
            message: message.into(),
        }
    }

    /// Build from whatever a rejected `request()` promise produced
    fn from_js(value: JsValue) -> Self {
        let message = rejection_message(
            js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string()),
            value.as_string(),
        );
        let code = js_sys::Reflect::get(&value, &JsValue::from_str("code"))
            .ok()
            .and_then(|c| c.as_f64())
            .map(|c| c as i64);

        ProviderError::Rejected { code, message }
    }
}

/// Pick the text shown for a rejection: the error's `message`, else a bare string
/// rejection, else "Unknown error". Empty strings count as missing.
fn rejection_message(message: Option<String>, raw: Option<String>) -> String {
    message
        .filter(|m| !m.is_empty())
        .or_else(|| raw.filter(|r| !r.is_empty()))
        .unwrap_or_else(|| "Unknown error".to_string())
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ProviderError::NotInstalled => {
                write!(f, "MetaMask or another Web3 provider is not installed")
            }
            ProviderError::Rejected { message, .. } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Anything that can submit a transaction on behalf of the connected account
#[async_trait(?Send)]
pub trait TransactionProvider {
    /// Returns the transaction hash
    async fn send_transaction(&self, tx: &TransactionRequest) -> Result<String, ProviderError>;
}

/// Handle to the browser-injected provider
#[derive(Clone, Debug)]
pub struct InjectedProvider {
    ethereum: JsValue,
}

impl InjectedProvider {
    /// Look up `window.ethereum`
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let ethereum = js_sys::Reflect::get(&window, &JsValue::from_str("ethereum")).ok()?;
        if ethereum.is_undefined() || ethereum.is_null() {
            return None;
        }
        Some(Self { ethereum })
    }

    /// Like `detect`, but absence is an error
    pub fn require() -> Result<Self, ProviderError> {
        Self::detect().ok_or(ProviderError::NotInstalled)
    }

    /// Raw EIP-1193 `request({ method, params })`
    pub async fn request(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<JsValue, ProviderError> {
        let args = js_sys::Object::new();
        let params = params
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| ProviderError::rejected(format!("Failed to encode params: {}", e)))?;
        js_sys::Reflect::set(&args, &JsValue::from_str("method"), &JsValue::from_str(method))
            .map_err(ProviderError::from_js)?;
        js_sys::Reflect::set(&args, &JsValue::from_str("params"), &params)
            .map_err(ProviderError::from_js)?;

        let request_fn = self.method("request")?;
        let promise = request_fn
            .call1(&self.ethereum, &args)
            .map_err(ProviderError::from_js)?
            .dyn_into::<js_sys::Promise>()
            .map_err(|_| ProviderError::rejected("Provider request did not return a promise"))?;

        JsFuture::from(promise).await.map_err(ProviderError::from_js)
    }

    /// `request` followed by deserialization of the result
    pub async fn request_as<T: DeserializeOwned>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<T, ProviderError> {
        let value = self.request(method, params).await?;
        serde_wasm_bindgen::from_value(value)
            .map_err(|e| ProviderError::rejected(format!("Unexpected {} response: {}", method, e)))
    }

    /// Subscribe to a provider event (`accountsChanged`, `chainChanged`, ...)
    pub fn on(&self, event: &str, handler: &Closure<dyn FnMut(JsValue)>) -> Result<(), ProviderError> {
        let on_fn = self.method("on")?;
        on_fn
            .call2(&self.ethereum, &JsValue::from_str(event), handler.as_ref().unchecked_ref())
            .map_err(ProviderError::from_js)?;
        Ok(())
    }

    fn method(&self, name: &str) -> Result<js_sys::Function, ProviderError> {
        js_sys::Reflect::get(&self.ethereum, &JsValue::from_str(name))
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
            .ok_or_else(|| ProviderError::rejected(format!("Provider does not support {}", name)))
    }
}

#[async_trait(?Send)]
impl TransactionProvider for InjectedProvider {
    async fn send_transaction(&self, tx: &TransactionRequest) -> Result<String, ProviderError> {
        log::info!("Requesting eth_sendTransaction: {} -> {} ({})", tx.from, tx.to, tx.value);
        self.request_as::<String>("eth_sendTransaction", serde_json::json!([tx]))
            .await
    }
}
