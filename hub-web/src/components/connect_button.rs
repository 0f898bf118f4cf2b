//! Connect Wallet Button
//!
//! Header affordance driving the whole session lifecycle: network not
//! selected, provider missing, credential missing, connecting, connected
//! (address + disconnect) and failed (dismissable) all render here.

use hub_core::utils::truncate_address;
use hub_core::{ConnectKind, NetworkId, SessionState};
use leptos::prelude::*;

use crate::components::WalletModal;
use crate::state::session::use_session_context;
use crate::utils::config;

#[component]
pub fn ConnectButton() -> impl IntoView {
    let session = use_session_context();
    let show_wallet_modal = RwSignal::new(false);

    let on_connect = move |_| {
        let Some(network) = session.selected() else {
            return;
        };
        match network.connect_kind() {
            // Multi-wallet networks go through the selector modal.
            ConnectKind::Registry => show_wallet_modal.set(true),
            ConnectKind::Injected | ConnectKind::Demo => session.connect(None),
        }
    };

    view! {
        <div class="connect-area">
            {move || match session.state() {
                SessionState::Connected { address, .. } => view! {
                    <div class="session-chip">
                        <span class="session-address">{truncate_address(&address)}</span>
                        <button
                            class="disconnect-btn"
                            title="Disconnect"
                            on:click=move |_| session.disconnect()
                        >
                            "Disconnect"
                        </button>
                    </div>
                }.into_any(),

                SessionState::Error(reason) => view! {
                    <div class="session-error" title=reason>
                        <span>"Connection failed"</span>
                        <button
                            class="dismiss-btn"
                            on:click=move |_| session.acknowledge_error()
                        >
                            "Dismiss"
                        </button>
                    </div>
                }.into_any(),

                SessionState::Connecting => view! {
                    <button class="connect-btn" disabled=true>
                        "Connecting..."
                    </button>
                }.into_any(),

                SessionState::Disconnected => {
                    let (label, hint, enabled) = connect_affordance(
                        session.selected(),
                        session.provider_ready(),
                    );
                    view! {
                        <button
                            class="connect-btn"
                            title=hint
                            disabled={!enabled}
                            on:click=on_connect
                        >
                            {label}
                        </button>
                    }.into_any()
                }
            }}
            <WalletModal show=show_wallet_modal/>
        </div>
    }
}

/// Label, tooltip, and enablement for the idle connect button.
fn connect_affordance(
    selected: Option<NetworkId>,
    provider_ready: bool,
) -> (&'static str, &'static str, bool) {
    let Some(network) = selected else {
        return (
            "Connect Wallet",
            "Select a network first",
            false,
        );
    };

    if network == NetworkId::Evm && config::evm_project_id().is_none() {
        return (
            "Setup Required",
            "Configuration required: set an EVM wallet project id (build-time \
             EVM_PROJECT_ID or ?project_id=... in the URL) to enable connections.",
            false,
        );
    }

    // The injected mechanism has nothing to offer without its extension.
    // Registry networks stay clickable so the modal can show install
    // guidance, and the demo network always connects.
    if !provider_ready && network.connect_kind() == ConnectKind::Injected {
        return (
            "Wallet Not Detected",
            "Install a browser wallet extension for this network, then retry.",
            false,
        );
    }

    (
        "Connect Wallet",
        "Connect your wallet to the selected network",
        true,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_network_disables_connect() {
        let (_, hint, enabled) = connect_affordance(None, true);
        assert!(!enabled);
        assert!(hint.contains("Select a network"));
    }

    #[test]
    fn test_missing_injected_provider_reads_as_setup_affordance() {
        let (label, _, enabled) = connect_affordance(Some(NetworkId::Evm), false);
        assert!(!enabled);
        assert_ne!(label, "Connect Wallet");
    }

    #[test]
    fn test_demo_network_is_always_connectable() {
        let (label, _, enabled) = connect_affordance(Some(NetworkId::Iota), false);
        assert!(enabled);
        assert_eq!(label, "Connect Wallet");
    }

    #[test]
    fn test_registry_network_opens_modal_even_without_wallets() {
        let (_, _, enabled) = connect_affordance(Some(NetworkId::Sui), false);
        assert!(enabled);
    }
}
