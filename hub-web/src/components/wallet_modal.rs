//! Wallet Selector Modal
//!
//! For networks with a multi-wallet registry: lists the wallets present at
//! open time and starts a connect for the one the user picks. An empty
//! registry shows install guidance instead.

use leptos::prelude::*;

use crate::services::ProviderAdapter;
use crate::state::session::use_session_context;

#[component]
pub fn WalletModal(show: RwSignal<bool>) -> impl IntoView {
    let session = use_session_context();

    view! {
        {move || {
            if !show.get() {
                return view! { <></> }.into_any();
            }
            let Some(network) = session.selected() else {
                return view! { <></> }.into_any();
            };

            // Snapshot of the registry, taken when the modal opens.
            let wallets = ProviderAdapter::new(network).list_wallets();

            view! {
                <div class="modal-overlay" on:click=move |_| show.set(false)>
                    <div class="modal-card modal-narrow" on:click=|ev| ev.stop_propagation()>
                        <div class="modal-head">
                            <h2>{format!("Select {} Wallet", network.name())}</h2>
                            <button class="modal-close" on:click=move |_| show.set(false)>
                                "×"
                            </button>
                        </div>
                        <div class="modal-body">
                            {if wallets.is_empty() {
                                view! {
                                    <p class="wallet-empty">
                                        {format!(
                                            "No {} wallets detected. Please install a wallet \
                                             extension and refresh the page.",
                                            network.name()
                                        )}
                                    </p>
                                }.into_any()
                            } else {
                                view! {
                                    <ul class="wallet-list">
                                        {wallets.into_iter().map(|wallet| {
                                            let name = wallet.name.clone();
                                            view! {
                                                <li>
                                                    <button
                                                        class="wallet-row"
                                                        on:click=move |_| {
                                                            session.connect(Some(name.clone()));
                                                            show.set(false);
                                                        }
                                                    >
                                                        <span class="wallet-icon">{wallet.icon}</span>
                                                        <span class="wallet-name">{wallet.name}</span>
                                                    </button>
                                                </li>
                                            }
                                        }).collect::<Vec<_>>()}
                                    </ul>
                                }.into_any()
                            }}
                        </div>
                    </div>
                </div>
            }.into_any()
        }}
    }
}
