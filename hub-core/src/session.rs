//! # Wallet Session Lifecycle
//!
//! At most one `(network, address)` session exists process-wide. The
//! [`SessionController`] is the single writer: dashboards and feature
//! panels read session state but never mutate it directly.
//!
//! ## State machine
//!
//! ```text
//! Disconnected --select_network--> Disconnected   (selection updates; any
//!                                                  live session torn down first)
//! Disconnected --begin_connect---> Connecting
//! Connecting --resolve_connect---> Connected      (at least one account)
//! Connecting --fail_connect------> Error | Disconnected (user rejection)
//! Error --acknowledge_error------> Disconnected
//! any --disconnect---------------> Disconnected
//! ```
//!
//! Switching the selected network while connected always routes through
//! `Disconnected` synchronously: a session for network A is never
//! observable while the selected network is B.
//!
//! ## Epochs
//!
//! None of the underlying wallet operations can be cancelled, so teardown
//! works by generation counting instead: every teardown bumps the
//! controller `epoch`, and async results carry the epoch they started
//! under (via [`ConnectTicket`]). A result presented with a stale epoch is
//! discarded without touching state.

use serde::{Deserialize, Serialize};

use crate::error::WalletError;
use crate::network::NetworkId;

/// Observable session state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Disconnected,
    Connecting,
    Connected { network: NetworkId, address: String },
    /// A failed connect attempt awaiting user acknowledgement.
    Error(String),
}

impl SessionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, SessionState::Connected { .. })
    }

    pub fn is_connecting(&self) -> bool {
        matches!(self, SessionState::Connecting)
    }

    /// Connected address, if any. `Connected` never holds an empty address.
    pub fn address(&self) -> Option<&str> {
        match self {
            SessionState::Connected { address, .. } => Some(address),
            _ => None,
        }
    }

    /// Network of the live session, if any.
    pub fn network(&self) -> Option<NetworkId> {
        match self {
            SessionState::Connected { network, .. } => Some(*network),
            _ => None,
        }
    }
}

/// Ties an in-flight connect attempt to the controller generation that
/// started it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConnectTicket {
    epoch: u64,
    network: NetworkId,
}

impl ConnectTicket {
    /// Network this attempt targets.
    pub fn network(&self) -> NetworkId {
        self.network
    }

    /// Epoch the attempt started under; panels reuse this to guard their
    /// own late results.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

/// Owner and sole mutator of the active session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionController {
    selected: Option<NetworkId>,
    state: SessionState,
    epoch: u64,
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionController {
    pub fn new() -> Self {
        Self {
            selected: None,
            state: SessionState::Disconnected,
            epoch: 0,
        }
    }

    pub fn selected(&self) -> Option<NetworkId> {
        self.selected
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Current teardown generation.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Whether an async result started under `epoch` may still be applied.
    pub fn is_current_epoch(&self, epoch: u64) -> bool {
        self.epoch == epoch
    }

    /// Select a network. If the selection changes while a session or a
    /// connect attempt is live, it is torn down *before* the new selection
    /// becomes visible. Returns the network whose adapter should be told to
    /// disconnect, if one was live.
    pub fn select_network(&mut self, network: NetworkId) -> Option<NetworkId> {
        if self.selected == Some(network) {
            return None;
        }
        let teardown = self.live_network();
        if self.state != SessionState::Disconnected {
            self.state = SessionState::Disconnected;
            self.epoch += 1;
        }
        self.selected = Some(network);
        teardown
    }

    /// Clear the network selection (back to the landing page). Tears down
    /// like [`select_network`](Self::select_network).
    pub fn clear_selection(&mut self) -> Option<NetworkId> {
        let teardown = self.live_network();
        if self.state != SessionState::Disconnected {
            self.state = SessionState::Disconnected;
            self.epoch += 1;
        }
        self.selected = None;
        teardown
    }

    /// Start a connect attempt for the selected network.
    ///
    /// Connect is not reentrant: a second attempt while one is in flight is
    /// refused (the UI also disables the trigger while pending). An
    /// unacknowledged `Error` is implicitly dismissed by retrying.
    pub fn begin_connect(&mut self) -> Result<ConnectTicket, WalletError> {
        let network = self
            .selected
            .ok_or_else(|| WalletError::Unknown("no network selected".to_string()))?;
        match self.state {
            SessionState::Connecting => Err(WalletError::Unknown(
                "a connect attempt is already in flight".to_string(),
            )),
            SessionState::Connected { .. } => Err(WalletError::Unknown(
                "already connected; disconnect first".to_string(),
            )),
            _ => {
                self.state = SessionState::Connecting;
                Ok(ConnectTicket {
                    epoch: self.epoch,
                    network,
                })
            }
        }
    }

    /// Apply the accounts an adapter resolved for `ticket`.
    ///
    /// A stale ticket (the selection changed or a teardown happened since
    /// the attempt started) is discarded without a state change. Zero
    /// accounts can never produce `Connected`.
    pub fn resolve_connect(&mut self, ticket: ConnectTicket, accounts: &[String]) {
        if !self.ticket_is_live(ticket) {
            return;
        }
        match accounts.iter().find(|a| !a.is_empty()) {
            Some(address) => {
                self.state = SessionState::Connected {
                    network: ticket.network,
                    address: address.clone(),
                };
            }
            None => {
                self.state = SessionState::Error("The wallet returned no accounts.".to_string());
            }
        }
    }

    /// Record a failed connect attempt. User rejection returns silently to
    /// `Disconnected`; everything else becomes an acknowledgeable `Error`.
    pub fn fail_connect(&mut self, ticket: ConnectTicket, error: &WalletError) {
        if !self.ticket_is_live(ticket) {
            return;
        }
        self.state = match error {
            WalletError::UserRejected => SessionState::Disconnected,
            other => SessionState::Error(other.to_string()),
        };
    }

    /// Dismiss an `Error` back to `Disconnected`.
    pub fn acknowledge_error(&mut self) {
        if matches!(self.state, SessionState::Error(_)) {
            self.state = SessionState::Disconnected;
        }
    }

    /// Tear the session down from any state. Returns the network whose
    /// adapter should be told to disconnect, if one was live.
    pub fn disconnect(&mut self) -> Option<NetworkId> {
        let teardown = self.live_network();
        if self.state != SessionState::Disconnected {
            self.state = SessionState::Disconnected;
            self.epoch += 1;
        }
        teardown
    }

    /// Adopt accounts a wallet already authorized without a prompt (the
    /// registry-style reconnect on page load). Only applies while idle on
    /// the matching selected network; empty account lists are ignored.
    pub fn adopt_authorized(&mut self, network: NetworkId, accounts: &[String]) {
        if self.selected != Some(network) || self.state != SessionState::Disconnected {
            return;
        }
        if let Some(address) = accounts.iter().find(|a| !a.is_empty()) {
            self.state = SessionState::Connected {
                network,
                address: address.clone(),
            };
        }
    }

    /// Network with a live session or in-flight attempt, for adapter
    /// teardown notification.
    fn live_network(&self) -> Option<NetworkId> {
        match &self.state {
            SessionState::Connected { network, .. } => Some(*network),
            SessionState::Connecting => self.selected,
            _ => None,
        }
    }

    fn ticket_is_live(&self, ticket: ConnectTicket) -> bool {
        ticket.epoch == self.epoch
            && self.selected == Some(ticket.network)
            && self.state == SessionState::Connecting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connected_on(network: NetworkId) -> SessionController {
        let mut ctl = SessionController::new();
        ctl.select_network(network);
        let ticket = ctl.begin_connect().unwrap();
        ctl.resolve_connect(ticket, &["0xabc".to_string()]);
        assert!(ctl.state().is_connected());
        ctl
    }

    // ========== Network selection ==========

    #[test]
    fn test_switching_network_tears_down_before_connecting_begins() {
        let mut ctl = connected_on(NetworkId::Evm);

        let teardown = ctl.select_network(NetworkId::Sui);
        assert_eq!(teardown, Some(NetworkId::Evm));
        // Torn down synchronously: the Evm session is gone before anything
        // for Sui can start.
        assert_eq!(*ctl.state(), SessionState::Disconnected);
        assert_eq!(ctl.selected(), Some(NetworkId::Sui));

        let ticket = ctl.begin_connect().unwrap();
        assert_eq!(ticket.network(), NetworkId::Sui);
    }

    #[test]
    fn test_reselecting_same_network_keeps_session() {
        let mut ctl = connected_on(NetworkId::Sui);
        let epoch = ctl.epoch();
        assert_eq!(ctl.select_network(NetworkId::Sui), None);
        assert!(ctl.state().is_connected());
        assert_eq!(ctl.epoch(), epoch);
    }

    #[test]
    fn test_switching_while_connecting_invalidates_attempt() {
        let mut ctl = SessionController::new();
        ctl.select_network(NetworkId::Evm);
        let ticket = ctl.begin_connect().unwrap();

        let teardown = ctl.select_network(NetworkId::Iota);
        assert_eq!(teardown, Some(NetworkId::Evm));

        // Late resolution from the abandoned attempt is dropped.
        ctl.resolve_connect(ticket, &["0xdead".to_string()]);
        assert_eq!(*ctl.state(), SessionState::Disconnected);
        assert_eq!(ctl.selected(), Some(NetworkId::Iota));
    }

    #[test]
    fn test_clear_selection_tears_down() {
        let mut ctl = connected_on(NetworkId::Iota);
        assert_eq!(ctl.clear_selection(), Some(NetworkId::Iota));
        assert_eq!(ctl.selected(), None);
        assert_eq!(ctl.state().address(), None);
    }

    // ========== Connect ==========

    #[test]
    fn test_connect_requires_selection() {
        let mut ctl = SessionController::new();
        assert!(ctl.begin_connect().is_err());
    }

    #[test]
    fn test_connect_is_not_reentrant() {
        let mut ctl = SessionController::new();
        ctl.select_network(NetworkId::Sui);
        ctl.begin_connect().unwrap();
        assert!(ctl.begin_connect().is_err());
    }

    #[test]
    fn test_resolve_with_accounts_connects_first_account() {
        let mut ctl = SessionController::new();
        ctl.select_network(NetworkId::Sui);
        let ticket = ctl.begin_connect().unwrap();
        ctl.resolve_connect(ticket, &["0xabc".to_string(), "0xdef".to_string()]);
        assert_eq!(
            *ctl.state(),
            SessionState::Connected {
                network: NetworkId::Sui,
                address: "0xabc".to_string(),
            }
        );
    }

    #[test]
    fn test_zero_accounts_never_connects() {
        let mut ctl = SessionController::new();
        ctl.select_network(NetworkId::Evm);
        let ticket = ctl.begin_connect().unwrap();
        ctl.resolve_connect(ticket, &[]);
        assert!(matches!(ctl.state(), SessionState::Error(_)));
        assert_eq!(ctl.state().address(), None);
    }

    #[test]
    fn test_empty_string_accounts_never_connect() {
        let mut ctl = SessionController::new();
        ctl.select_network(NetworkId::Evm);
        let ticket = ctl.begin_connect().unwrap();
        ctl.resolve_connect(ticket, &[String::new()]);
        assert!(matches!(ctl.state(), SessionState::Error(_)));
    }

    #[test]
    fn test_user_rejection_returns_to_disconnected_without_error() {
        let mut ctl = SessionController::new();
        ctl.select_network(NetworkId::Evm);
        let ticket = ctl.begin_connect().unwrap();
        ctl.fail_connect(ticket, &WalletError::UserRejected);
        assert_eq!(*ctl.state(), SessionState::Disconnected);
    }

    #[test]
    fn test_failure_becomes_acknowledgeable_error() {
        let mut ctl = SessionController::new();
        ctl.select_network(NetworkId::Sui);
        let ticket = ctl.begin_connect().unwrap();
        ctl.fail_connect(
            ticket,
            &WalletError::ProviderUnavailable("no Sui wallet".to_string()),
        );
        assert!(matches!(ctl.state(), SessionState::Error(_)));
        ctl.acknowledge_error();
        assert_eq!(*ctl.state(), SessionState::Disconnected);
    }

    #[test]
    fn test_retry_from_error_is_allowed() {
        let mut ctl = SessionController::new();
        ctl.select_network(NetworkId::Sui);
        let ticket = ctl.begin_connect().unwrap();
        ctl.fail_connect(ticket, &WalletError::Unknown("boom".to_string()));
        let retry = ctl.begin_connect().unwrap();
        ctl.resolve_connect(retry, &["0xabc".to_string()]);
        assert!(ctl.state().is_connected());
    }

    // ========== Disconnect and epochs ==========

    #[test]
    fn test_disconnect_always_clears_address() {
        for network in NetworkId::ALL {
            let mut ctl = connected_on(network);
            assert_eq!(ctl.disconnect(), Some(network));
            assert_eq!(ctl.state().address(), None);
            assert_eq!(*ctl.state(), SessionState::Disconnected);
        }

        // Also from states with nothing live.
        let mut idle = SessionController::new();
        assert_eq!(idle.disconnect(), None);
        assert_eq!(idle.state().address(), None);
    }

    #[test]
    fn test_stale_ticket_after_disconnect_is_discarded() {
        let mut ctl = SessionController::new();
        ctl.select_network(NetworkId::Evm);
        let ticket = ctl.begin_connect().unwrap();
        ctl.disconnect();
        let epoch = ctl.epoch();

        ctl.resolve_connect(ticket, &["0xabc".to_string()]);
        assert_eq!(*ctl.state(), SessionState::Disconnected);
        assert_eq!(ctl.epoch(), epoch);

        ctl.fail_connect(ticket, &WalletError::Unknown("late".to_string()));
        assert_eq!(*ctl.state(), SessionState::Disconnected);
    }

    #[test]
    fn test_epoch_guard_for_panel_results() {
        let mut ctl = connected_on(NetworkId::Evm);
        let before = ctl.epoch();
        assert!(ctl.is_current_epoch(before));
        ctl.disconnect();
        assert!(!ctl.is_current_epoch(before));
    }

    // ========== Authorized adoption ==========

    #[test]
    fn test_adopts_already_authorized_accounts_when_idle() {
        let mut ctl = SessionController::new();
        ctl.select_network(NetworkId::Sui);
        ctl.adopt_authorized(NetworkId::Sui, &["0xabc".to_string()]);
        assert_eq!(ctl.state().address(), Some("0xabc"));
    }

    #[test]
    fn test_adoption_ignored_for_other_network_or_busy_state() {
        let mut ctl = SessionController::new();
        ctl.select_network(NetworkId::Evm);
        ctl.adopt_authorized(NetworkId::Sui, &["0xabc".to_string()]);
        assert_eq!(*ctl.state(), SessionState::Disconnected);

        let mut busy = SessionController::new();
        busy.select_network(NetworkId::Sui);
        busy.begin_connect().unwrap();
        busy.adopt_authorized(NetworkId::Sui, &["0xabc".to_string()]);
        assert!(busy.state().is_connecting());
    }
}
