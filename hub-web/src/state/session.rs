//! Session state management
//!
//! Thin Leptos layer over [`hub_core::SessionController`]: one `RwSignal`
//! holding the controller, provided as context at the app root. This is
//! the only place that mutates the session; panels read through the
//! accessors and guard their own async results with [`SessionContext::epoch`].

use hub_core::{ConnectKind, NetworkId, SessionController, SessionState};
use leptos::prelude::*;

use crate::services::detect::wait_for_provider;
use crate::services::ProviderAdapter;
use crate::utils::constants::{PROVIDER_POLL_ATTEMPTS, PROVIDER_POLL_INTERVAL_MS};

/// Global session context.
#[derive(Clone, Copy)]
pub struct SessionContext {
    controller: RwSignal<SessionController>,
    /// Whether the selected network's provider is currently detectable.
    provider_ready: RwSignal<bool>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            controller: RwSignal::new(SessionController::new()),
            provider_ready: RwSignal::new(false),
        }
    }

    // ----- read accessors (reactive) -----

    pub fn selected(&self) -> Option<NetworkId> {
        self.controller.with(|c| c.selected())
    }

    pub fn state(&self) -> SessionState {
        self.controller.with(|c| c.state().clone())
    }

    pub fn is_connected(&self) -> bool {
        self.controller.with(|c| c.state().is_connected())
    }

    pub fn is_connecting(&self) -> bool {
        self.controller.with(|c| c.state().is_connecting())
    }

    pub fn address(&self) -> Option<String> {
        self.controller
            .with(|c| c.state().address().map(|a| a.to_string()))
    }

    pub fn provider_ready(&self) -> bool {
        self.provider_ready.get()
    }

    /// Teardown generation for panel-side stale-result guards.
    pub fn epoch(&self) -> u64 {
        self.controller.with_untracked(|c| c.epoch())
    }

    /// Whether a result started under `epoch` for `network` may still be
    /// applied.
    pub fn still_current(&self, network: NetworkId, epoch: u64) -> bool {
        self.controller
            .with_untracked(|c| c.selected() == Some(network) && c.epoch() == epoch)
    }

    // ----- transitions -----

    /// Switch the selected network. Any live session is torn down
    /// synchronously before the new selection is visible; the old
    /// network's adapter is notified afterwards.
    pub fn select_network(&self, network: NetworkId) {
        if self.controller.with_untracked(|c| c.selected()) == Some(network) {
            return;
        }
        let teardown = self
            .controller
            .try_update(|c| c.select_network(network))
            .flatten();
        notify_adapter_teardown(teardown);
        self.refresh_provider(network);
    }

    /// Back to the landing page; tears down like a network switch.
    pub fn clear_selection(&self) {
        let teardown = self.controller.try_update(|c| c.clear_selection()).flatten();
        notify_adapter_teardown(teardown);
        self.provider_ready.set(false);
    }

    /// Start a connect attempt against the selected network's adapter.
    /// `wallet_name` picks an entry from the multi-wallet registry.
    pub fn connect(&self, wallet_name: Option<String>) {
        let ticket = match self.controller.try_update(|c| c.begin_connect()) {
            Some(Ok(ticket)) => ticket,
            // Nothing selected or an attempt already in flight; the UI
            // disables the trigger, so there is nothing to report here.
            _ => return,
        };

        let ctx = *self;
        leptos::task::spawn_local(async move {
            let adapter = ProviderAdapter::new(ticket.network());
            match adapter.connect(wallet_name.as_deref()).await {
                Ok(accounts) => {
                    ctx.controller
                        .update(|c| c.resolve_connect(ticket, &accounts));
                }
                Err(error) => {
                    log::warn!("connect on {} failed: {error}", ticket.network());
                    ctx.controller.update(|c| c.fail_connect(ticket, &error));
                }
            }
        });
    }

    /// Explicit disconnect from the header control.
    pub fn disconnect(&self) {
        let teardown = self.controller.try_update(|c| c.disconnect()).flatten();
        notify_adapter_teardown(teardown);
    }

    /// Dismiss a failed connect attempt.
    pub fn acknowledge_error(&self) {
        self.controller.update(|c| c.acknowledge_error());
    }

    // ----- provider detection -----

    /// Re-probe the selected network's provider, polling for a while if it
    /// is not there yet (extensions can inject after page evaluation). The
    /// poll dies with the selection that started it.
    fn refresh_provider(&self, network: NetworkId) {
        let adapter = ProviderAdapter::new(network);
        let ready = adapter.detect();
        self.provider_ready.set(ready);

        if ready {
            self.try_adopt_authorized(network);
            return;
        }

        let epoch = self.epoch();
        let ctx = *self;
        leptos::task::spawn_local(async move {
            let found = wait_for_provider(
                move || ProviderAdapter::new(network).detect(),
                move || !ctx.still_current(network, epoch),
                PROVIDER_POLL_ATTEMPTS,
                PROVIDER_POLL_INTERVAL_MS,
            )
            .await;
            if found && ctx.still_current(network, epoch) {
                ctx.provider_ready.set(true);
                ctx.try_adopt_authorized(network);
            }
        });
    }

    /// Adopt accounts a registry wallet authorized on a previous visit.
    /// No approval prompt is involved; other mechanisms never offer this.
    fn try_adopt_authorized(&self, network: NetworkId) {
        if network.connect_kind() != ConnectKind::Registry {
            return;
        }
        let accounts = ProviderAdapter::new(network).authorized_accounts();
        if !accounts.is_empty() {
            self.controller
                .update(|c| c.adopt_authorized(network, &accounts));
        }
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Fire-and-forget adapter teardown. The session state is already cleared
/// by the time this runs; failures only matter to the wallet itself.
fn notify_adapter_teardown(network: Option<NetworkId>) {
    if let Some(network) = network {
        leptos::task::spawn_local(async move {
            ProviderAdapter::new(network).disconnect().await;
        });
    }
}

pub fn provide_session_context() -> SessionContext {
    let context = SessionContext::new();
    provide_context(context);
    context
}

pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}
