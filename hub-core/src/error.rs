//! # Wallet Error Taxonomy
//!
//! Every failure an adapter or the session controller can produce is one of
//! the variants below. Errors never cross the interaction boundary as
//! panics: the UI catches them at the point of the user action and turns
//! them into local state.
//!
//! ## Categories
//!
//! - [`ProviderUnavailable`](WalletError::ProviderUnavailable) — the wallet
//!   extension/SDK is not present. User-actionable: show install guidance.
//! - [`UserRejected`](WalletError::UserRejected) — the approval prompt was
//!   declined. Returns silently to the disconnected state, no alarm.
//! - [`ConfigurationMissing`](WalletError::ConfigurationMissing) — a
//!   required external credential is not set. The action is disabled and
//!   says so.
//! - [`TransactionFailed`](WalletError::TransactionFailed) — signing or
//!   broadcast failed; the reason is a best-effort human-readable string.
//! - [`Unknown`](WalletError::Unknown) — catch-all; logged, generic message
//!   shown.
//!
//! Raw provider errors arrive as free-form JS strings; [`WalletError::classify`]
//! maps them into the taxonomy by substring matching. Nothing is retried
//! automatically — the user re-triggers the action.

use thiserror::Error;

/// Convenience alias used across both workspace members.
pub type Result<T> = std::result::Result<T, WalletError>;

/// All wallet, session, and transaction failures surfaced to the UI.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WalletError {
    /// No provider for the selected network is installed or detectable.
    #[error("no wallet provider detected: {0}")]
    ProviderUnavailable(String),

    /// The user declined the approval prompt in the wallet UI.
    #[error("connection request rejected in the wallet")]
    UserRejected,

    /// A required external credential (project id, API key) is not set.
    #[error("missing configuration: {0}")]
    ConfigurationMissing(String),

    /// Signing or broadcasting a transaction failed.
    #[error("transaction failed: {0}")]
    TransactionFailed(String),

    /// Anything the taxonomy does not recognize.
    #[error("unexpected wallet error: {0}")]
    Unknown(String),
}

impl WalletError {
    /// Classify a raw provider/SDK error message.
    ///
    /// Wallet SDKs disagree wildly on error shapes, so this is deliberately
    /// substring matching on the lowered message, checked most-specific
    /// first. Unrecognized messages land in [`WalletError::Unknown`] with
    /// the original text preserved for logging.
    pub fn classify(raw: &str) -> WalletError {
        let lowered = raw.to_lowercase();

        // EIP-1193 user rejection is code 4001; wallet-standard wallets
        // spell it out instead.
        if lowered.contains("user rejected")
            || lowered.contains("user denied")
            || lowered.contains("rejected the request")
            || lowered.contains("4001")
        {
            return WalletError::UserRejected;
        }

        if lowered.contains("not installed")
            || lowered.contains("no provider")
            || lowered.contains("wallet not found")
        {
            return WalletError::ProviderUnavailable(raw.to_string());
        }

        if lowered.contains("gasbalancetoolow") || lowered.contains("insufficient funds") {
            return WalletError::TransactionFailed(
                "Insufficient balance to cover transaction fees.".to_string(),
            );
        }

        if lowered.contains("moveabort") {
            return WalletError::TransactionFailed(
                "The contract rejected the transaction parameters.".to_string(),
            );
        }

        if lowered.contains("failed to fetch") || lowered.contains("timeout") {
            return WalletError::TransactionFailed(
                "Could not reach the network. Check your connection and try again.".to_string(),
            );
        }

        WalletError::Unknown(raw.to_string())
    }

    /// Whether the user can resolve this themselves without retrying blindly
    /// (drives the install/setup guidance affordances).
    pub fn is_user_actionable(&self) -> bool {
        matches!(
            self,
            WalletError::ProviderUnavailable(_) | WalletError::ConfigurationMissing(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_user_rejection_variants() {
        assert_eq!(
            WalletError::classify("User rejected the request."),
            WalletError::UserRejected
        );
        assert_eq!(
            WalletError::classify("MetaMask Tx Signature: User denied transaction signature."),
            WalletError::UserRejected
        );
        assert_eq!(
            WalletError::classify("RPC error 4001"),
            WalletError::UserRejected
        );
    }

    #[test]
    fn test_classify_missing_provider() {
        let err = WalletError::classify("Sui wallet not found. Please install an extension.");
        assert!(matches!(err, WalletError::ProviderUnavailable(_)));
        assert!(err.is_user_actionable());
    }

    #[test]
    fn test_classify_chain_failures_get_readable_reasons() {
        match WalletError::classify("Dry run failed: GasBalanceTooLow") {
            WalletError::TransactionFailed(reason) => {
                assert!(reason.contains("Insufficient balance"))
            }
            other => panic!("unexpected classification: {other:?}"),
        }
        match WalletError::classify("MoveAbort(0x2::coin, 4)") {
            WalletError::TransactionFailed(reason) => assert!(reason.contains("contract")),
            other => panic!("unexpected classification: {other:?}"),
        }
    }

    #[test]
    fn test_classify_unknown_preserves_message() {
        match WalletError::classify("something exotic happened") {
            WalletError::Unknown(raw) => assert_eq!(raw, "something exotic happened"),
            other => panic!("unexpected classification: {other:?}"),
        }
    }

    #[test]
    fn test_rejection_is_not_user_actionable() {
        assert!(!WalletError::UserRejected.is_user_actionable());
        assert!(!WalletError::TransactionFailed("x".into()).is_user_actionable());
    }
}
