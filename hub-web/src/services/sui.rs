//! Sui Wallet-Standard Integration via wasm-bindgen
//!
//! Wallets register themselves through the wallet-standard event handshake
//! rather than a fixed global: the page announces itself and every
//! installed wallet calls back with a wallet object. The registry below
//! collects those objects; `listWallets` reads it synchronously at
//! modal-open time.

use hub_core::network::WalletDescriptor;
use hub_core::{Result, WalletError};
use wasm_bindgen::prelude::*;

use super::wallet::js_error_text;

#[wasm_bindgen(inline_js = "
const registry = [];
let activeWalletName = null;

export function suiRegistryInit() {
    if (window.__hubSuiRegistryReady) {
        return;
    }
    window.__hubSuiRegistryReady = true;

    const register = (wallet) => {
        if (wallet && wallet.name && !registry.some((w) => w.name === wallet.name)) {
            registry.push(wallet);
        }
    };

    // Wallets injected after page load announce themselves with this event.
    window.addEventListener('wallet-standard:register-wallet', (event) => {
        try {
            event.detail({ register });
        } catch (e) {
            // A wallet that throws during registration is simply skipped.
        }
    });

    // Wallets already present pick the registry up from the app-ready event.
    window.dispatchEvent(new CustomEvent('wallet-standard:app-ready', {
        detail: { register },
    }));
}

export function suiRegistryCount() {
    return registry.length;
}

export function suiListWallets() {
    return registry.map((w) => ({ name: w.name, icon: w.icon || '' }));
}

export async function suiConnect(walletName) {
    const wallet = registry.find((w) => w.name === walletName);
    if (!wallet) {
        throw new Error('Sui wallet not found: ' + walletName);
    }

    const currentAccounts = () => (wallet.accounts || []).map((a) => a.address);

    // Already-authorized wallets skip the interactive approval step.
    if (currentAccounts().length > 0) {
        activeWalletName = walletName;
        return currentAccounts();
    }

    const feature = wallet.features && wallet.features['standard:connect'];
    if (!feature || typeof feature.connect !== 'function') {
        throw new Error('Wallet \"' + walletName + '\" does not declare the standard connect feature.');
    }

    const result = await feature.connect();
    activeWalletName = walletName;
    if (result && result.accounts) {
        return result.accounts.map((a) => a.address);
    }
    return currentAccounts();
}

export async function suiDisconnect() {
    if (!activeWalletName) {
        return;
    }
    const wallet = registry.find((w) => w.name === activeWalletName);
    activeWalletName = null;
    const feature = wallet && wallet.features && wallet.features['standard:disconnect'];
    if (feature && typeof feature.disconnect === 'function') {
        try {
            await feature.disconnect();
        } catch (e) {
            // Nothing to do: the local session is gone either way.
        }
    }
}

export function suiAuthorizedAccounts() {
    for (const wallet of registry) {
        const accounts = (wallet.accounts || []).map((a) => a.address);
        if (accounts.length > 0) {
            activeWalletName = wallet.name;
            return accounts;
        }
    }
    return [];
}
")]
extern "C" {
    fn suiRegistryInit();
    fn suiRegistryCount() -> u32;
    fn suiListWallets() -> JsValue;

    #[wasm_bindgen(catch)]
    async fn suiConnect(wallet_name: &str) -> std::result::Result<JsValue, JsValue>;

    async fn suiDisconnect();

    fn suiAuthorizedAccounts() -> JsValue;
}

/// Idempotent; must run before any other call so late-injected wallets can
/// still announce themselves.
pub fn init_registry() {
    suiRegistryInit();
}

pub fn detect() -> bool {
    init_registry();
    suiRegistryCount() > 0
}

/// Snapshot of the registry for the wallet selector modal.
pub fn list_wallets() -> Vec<WalletDescriptor> {
    init_registry();
    serde_wasm_bindgen::from_value(suiListWallets()).unwrap_or_default()
}

/// Connect to the named wallet from the registry.
pub async fn connect(wallet_name: &str) -> Result<Vec<String>> {
    init_registry();
    match suiConnect(wallet_name).await {
        Ok(value) => {
            Ok(serde_wasm_bindgen::from_value::<Vec<String>>(value).unwrap_or_default())
        }
        Err(e) => Err(WalletError::classify(&js_error_text(&e))),
    }
}

pub async fn disconnect() {
    suiDisconnect().await;
}

/// Accounts some registered wallet already authorized on a previous visit;
/// adopting them needs no approval prompt.
pub fn authorized_accounts() -> Vec<String> {
    init_registry();
    serde_wasm_bindgen::from_value(suiAuthorizedAccounts()).unwrap_or_default()
}
