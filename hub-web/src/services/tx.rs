//! Transaction Submission
//!
//! Panels submit through one capability with two implementations: a
//! simulated delay-then-receipt path and a real wallet signing path. Which
//! one runs is decided here, per `(network, feature)`, so the panels stay
//! oblivious to it.

use gloo_timers::future::TimeoutFuture;
use hub_core::{FeatureTab, NetworkId, Result};
use uuid::Uuid;

use super::evm;
use crate::utils::constants::SIMULATED_TX_DELAY_MS;

/// Local submission status every feature panel tracks the same way:
/// submit, pending (inputs disabled), then success (inputs cleared) or
/// error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TxStatus {
    Idle,
    Pending,
    /// Transaction hash for the explorer link.
    Success(String),
    Failed(String),
}

impl TxStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, TxStatus::Pending)
    }
}

/// How a panel's submit call is fulfilled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TxBackend {
    /// No chain call: wait out a fixed delay and fabricate a receipt.
    Simulated { delay_ms: u32 },
    /// Exactly one real signing call through the network's provider.
    Wallet(NetworkId),
}

impl TxBackend {
    /// The only place that knows which panels are real. Today only the EVM
    /// swap goes through a wallet; everything else is simulated.
    pub fn for_panel(network: NetworkId, feature: FeatureTab) -> TxBackend {
        match (network, feature) {
            (NetworkId::Evm, FeatureTab::Swap) => TxBackend::Wallet(NetworkId::Evm),
            _ => TxBackend::Simulated {
                delay_ms: SIMULATED_TX_DELAY_MS,
            },
        }
    }

    /// Submit on behalf of `address` and resolve to a transaction hash.
    pub async fn submit(&self, address: &str) -> Result<String> {
        match self {
            TxBackend::Simulated { delay_ms } => {
                TimeoutFuture::new(*delay_ms).await;
                Ok(synthetic_tx_hash())
            }
            TxBackend::Wallet(network) => match network {
                NetworkId::Evm => evm::send_demo_transfer(address).await,
                // No other network has a real signing path wired up.
                _ => {
                    TimeoutFuture::new(SIMULATED_TX_DELAY_MS).await;
                    Ok(synthetic_tx_hash())
                }
            },
        }
    }
}

/// A fabricated 32-byte transaction hash for simulated receipts.
pub fn synthetic_tx_hash() -> String {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    format!("0x{}{}", a.simple(), b.simple())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_hash_shape() {
        let hash = synthetic_tx_hash();
        assert!(hash.starts_with("0x"));
        assert_eq!(hash.len(), 66);
        assert!(hash[2..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_only_the_evm_swap_is_real() {
        for network in NetworkId::ALL {
            for feature in FeatureTab::ALL {
                let backend = TxBackend::for_panel(network, feature);
                if network == NetworkId::Evm && feature == FeatureTab::Swap {
                    assert_eq!(backend, TxBackend::Wallet(NetworkId::Evm));
                } else {
                    assert!(matches!(backend, TxBackend::Simulated { .. }));
                }
            }
        }
    }

    #[test]
    fn test_pending_guard() {
        assert!(TxStatus::Pending.is_pending());
        assert!(!TxStatus::Idle.is_pending());
        assert!(!TxStatus::Success("0xabc".to_string()).is_pending());
    }
}
