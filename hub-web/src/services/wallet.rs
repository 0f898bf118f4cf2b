//! Uniform Provider Adapter
//!
//! One dispatch type over the heterogeneous per-network mechanisms: the
//! injected EVM global, the Sui wallet-standard registry, and the IOTA demo
//! synthesizer. Everything above this layer (session context, panels)
//! speaks only this surface.

use hub_core::network::WalletDescriptor;
use hub_core::{ConnectKind, NetworkId, Result, WalletError};
use wasm_bindgen::JsValue;

use super::{evm, iota, sui};

/// Per-network translation layer implementing the uniform
/// list/connect/disconnect/detect contract.
#[derive(Clone, Copy, Debug)]
pub struct ProviderAdapter {
    network: NetworkId,
}

impl ProviderAdapter {
    pub fn new(network: NetworkId) -> Self {
        if network.connect_kind() == ConnectKind::Registry {
            // The registry handshake must be armed before wallets announce
            // themselves, not lazily at connect time.
            sui::init_registry();
        }
        Self { network }
    }

    pub fn network(&self) -> NetworkId {
        self.network
    }

    /// Synchronous presence probe. May go from `false` to `true` later for
    /// late-injected providers; see [`super::detect`].
    pub fn detect(&self) -> bool {
        match self.network {
            NetworkId::Evm => evm::detect(),
            NetworkId::Sui => sui::detect(),
            NetworkId::Iota => iota::detect(),
        }
    }

    /// Wallets the user can pick from. Single-provider networks report at
    /// most one descriptor.
    pub fn list_wallets(&self) -> Vec<WalletDescriptor> {
        match self.network {
            NetworkId::Sui => sui::list_wallets(),
            NetworkId::Evm => {
                if evm::detect() {
                    vec![WalletDescriptor {
                        name: "Browser Wallet".to_string(),
                        icon: "🦊".to_string(),
                    }]
                } else {
                    Vec::new()
                }
            }
            NetworkId::Iota => vec![WalletDescriptor {
                name: "Demo Wallet".to_string(),
                icon: "💡".to_string(),
            }],
        }
    }

    /// Resolve accounts for this network. Multi-wallet networks need a
    /// wallet name (from [`list_wallets`](Self::list_wallets)) unless the
    /// registry holds exactly one entry.
    pub async fn connect(&self, wallet_name: Option<&str>) -> Result<Vec<String>> {
        match self.network {
            NetworkId::Evm => evm::connect().await,
            NetworkId::Iota => iota::connect().await,
            NetworkId::Sui => {
                let name = match wallet_name {
                    Some(name) => name.to_string(),
                    None => {
                        let wallets = sui::list_wallets();
                        match wallets.as_slice() {
                            [] => {
                                return Err(WalletError::ProviderUnavailable(
                                    "No Sui wallet extension detected in this browser."
                                        .to_string(),
                                ))
                            }
                            [only] => only.name.clone(),
                            _ => {
                                return Err(WalletError::Unknown(
                                    "several wallets are installed; pick one first".to_string(),
                                ))
                            }
                        }
                    }
                };
                sui::connect(&name).await
            }
        }
    }

    /// Tear down the provider side of a session. The EVM provider API has
    /// no disconnect, so only the local session is cleared there.
    pub async fn disconnect(&self) {
        match self.network {
            NetworkId::Sui => sui::disconnect().await,
            NetworkId::Evm | NetworkId::Iota => {}
        }
    }

    /// Accounts already authorized without prompting, for silent adoption
    /// on dashboard mount. Only the registry mechanism exposes these.
    pub fn authorized_accounts(&self) -> Vec<String> {
        match self.network {
            NetworkId::Sui => sui::authorized_accounts(),
            NetworkId::Evm | NetworkId::Iota => Vec::new(),
        }
    }
}

/// Best-effort human-readable text for a JS error value. Wallet SDKs throw
/// strings, `Error` objects, and RPC-shaped objects interchangeably.
pub fn js_error_text(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(value, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{value:?}")
}
