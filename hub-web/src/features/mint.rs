//! Mint Panel
//!
//! Token creation form. Demonstration only: submission is always
//! simulated, and the notice at the top says so.

use hub_core::{FeatureTab, NetworkId};
use leptos::prelude::*;

use crate::services::tx::{TxBackend, TxStatus};
use crate::state::session::use_session_context;

#[component]
pub fn MintPanel(network: NetworkId) -> impl IntoView {
    let session = use_session_context();

    let name = RwSignal::new(String::new());
    let symbol = RwSignal::new(String::new());
    let supply = RwSignal::new(String::new());
    let status = RwSignal::new(TxStatus::Idle);

    let form_incomplete = move || {
        name.get().trim().is_empty()
            || symbol.get().trim().is_empty()
            || supply.get().trim().is_empty()
    };

    let mint = move |_| {
        if status.get_untracked().is_pending() {
            return;
        }
        if name.get_untracked().trim().is_empty()
            || symbol.get_untracked().trim().is_empty()
            || supply.get_untracked().trim().is_empty()
        {
            return;
        }
        let Some(address) = session.address() else {
            return;
        };

        status.set(TxStatus::Pending);
        let epoch = session.epoch();
        let backend = TxBackend::for_panel(network, FeatureTab::Mint);

        leptos::task::spawn_local(async move {
            let result = backend.submit(&address).await;
            if !session.still_current(network, epoch) {
                return;
            }
            match result {
                Ok(hash) => {
                    status.try_set(TxStatus::Success(hash));
                    name.try_set(String::new());
                    symbol.try_set(String::new());
                    supply.try_set(String::new());
                }
                Err(error) => {
                    status.try_set(TxStatus::Failed(error.to_string()));
                }
            }
        });
    };

    view! {
        <div class="panel mint-panel">
            <div class="demo-notice">
                <strong>"Note: "</strong>
                "This feature is for demonstration purposes only and does not \
                 create real transactions."
            </div>

            <h2 class="panel-title">"Create a new Token"</h2>

            <div class="form-fields">
                <div class="form-field">
                    <label>"Token Name"</label>
                    <input
                        type="text"
                        placeholder="e.g. My Awesome Token"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-field">
                    <label>"Token Symbol"</label>
                    <input
                        type="text"
                        placeholder="e.g. MAT"
                        prop:value=move || symbol.get()
                        on:input=move |ev| symbol.set(event_target_value(&ev).to_uppercase())
                    />
                </div>
                <div class="form-field">
                    <label>"Total Supply"</label>
                    <input
                        type="number"
                        placeholder="e.g. 1000000"
                        prop:value=move || supply.get()
                        on:input=move |ev| supply.set(event_target_value(&ev))
                    />
                </div>
            </div>

            <button
                class=format!("submit-btn {}", network.theme())
                disabled=move || {
                    status.get().is_pending() || !session.is_connected() || form_incomplete()
                }
                title=move || {
                    if session.is_connected() { "" } else { "Please connect your wallet first" }
                }
                on:click=mint
            >
                {move || match status.get() {
                    TxStatus::Pending => "Minting...".to_string(),
                    _ if session.is_connected() => "Mint Token".to_string(),
                    _ => "Connect Wallet".to_string(),
                }}
            </button>

            {move || match status.get() {
                TxStatus::Success(hash) => view! {
                    <div class="tx-success">
                        <p>"Token Minted Successfully!"</p>
                        <a
                            href=format!("{}{}", network.explorer_base(), hash)
                            target="_blank"
                            rel="noopener"
                        >
                            {format!("View on explorer: {}", &hash[..hash.len().min(20)])}
                        </a>
                    </div>
                }.into_any(),
                TxStatus::Failed(reason) => view! {
                    <div class="tx-error"><p>{reason}</p></div>
                }.into_any(),
                _ => view! { <></> }.into_any(),
            }}
        </div>
    }
}
