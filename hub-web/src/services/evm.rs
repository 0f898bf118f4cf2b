//! EVM Provider Integration via wasm-bindgen
//!
//! One well-known injected global (`window.ethereum`, EIP-1193). Connect is
//! a request-accounts call; the provider API offers no disconnect, so
//! teardown only clears the local session.

use hub_core::{Result, WalletError};
use wasm_bindgen::prelude::*;

use super::wallet::js_error_text;

#[wasm_bindgen(inline_js = "
export function evmProviderPresent() {
    return typeof window.ethereum !== 'undefined' && window.ethereum !== null;
}

export async function evmRequestAccounts() {
    if (!window.ethereum) {
        throw new Error('No provider: the EVM wallet extension is not installed.');
    }
    const accounts = await window.ethereum.request({ method: 'eth_requestAccounts' });
    return accounts || [];
}

export async function evmAuthorizedAccounts() {
    if (!window.ethereum) {
        return [];
    }
    try {
        // eth_accounts never prompts; it only reports prior authorization.
        const accounts = await window.ethereum.request({ method: 'eth_accounts' });
        return accounts || [];
    } catch (e) {
        return [];
    }
}

export async function evmSendSelfTransfer(from) {
    if (!window.ethereum) {
        throw new Error('No provider: the EVM wallet extension is not installed.');
    }
    // Demonstration transaction: a dust transfer back to the sender, so a
    // single real signing prompt happens without moving funds anywhere.
    const txHash = await window.ethereum.request({
        method: 'eth_sendTransaction',
        params: [{ from: from, to: from, value: '0x5af3107a4000' }],
    });
    return txHash;
}
")]
extern "C" {
    /// Synchronous probe for the injected global.
    fn evmProviderPresent() -> bool;

    #[wasm_bindgen(catch)]
    async fn evmRequestAccounts() -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn evmAuthorizedAccounts() -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn evmSendSelfTransfer(from: &str) -> std::result::Result<JsValue, JsValue>;
}

pub fn detect() -> bool {
    evmProviderPresent()
}

/// Request accounts, short-circuiting to already-authorized ones so no
/// second approval prompt appears.
pub async fn connect() -> Result<Vec<String>> {
    if !evmProviderPresent() {
        return Err(WalletError::ProviderUnavailable(
            "No EVM wallet extension detected in this browser.".to_string(),
        ));
    }

    let cached = authorized_accounts().await;
    if !cached.is_empty() {
        return Ok(cached);
    }

    match evmRequestAccounts().await {
        Ok(value) => Ok(decode_accounts(value)),
        Err(e) => Err(WalletError::classify(&js_error_text(&e))),
    }
}

/// Accounts the wallet already exposed without prompting.
pub async fn authorized_accounts() -> Vec<String> {
    match evmAuthorizedAccounts().await {
        Ok(value) => decode_accounts(value),
        Err(_) => Vec::new(),
    }
}

/// The one real signing call the EVM swap panel delegates here.
pub async fn send_demo_transfer(from: &str) -> Result<String> {
    match evmSendSelfTransfer(from).await {
        Ok(value) => value.as_string().ok_or_else(|| {
            WalletError::Unknown("provider returned a non-string transaction hash".to_string())
        }),
        Err(e) => Err(WalletError::classify(&js_error_text(&e))),
    }
}

fn decode_accounts(value: JsValue) -> Vec<String> {
    serde_wasm_bindgen::from_value::<Vec<String>>(value).unwrap_or_default()
}
