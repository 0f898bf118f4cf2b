//! Liquidity Panel
//!
//! Add a two-sided position or remove the stub position. All submissions
//! are simulated for every network; the status bookkeeping is the shared
//! submit/pending/success-or-error pattern.

use hub_core::{FeatureTab, NetworkId};
use leptos::prelude::*;

use crate::services::tx::{TxBackend, TxStatus};
use crate::state::session::use_session_context;
use crate::utils::constants::DEMO_LP_TOKENS;

#[component]
pub fn LiquidityPanel(network: NetworkId) -> impl IntoView {
    let session = use_session_context();

    let amount_a = RwSignal::new(String::new());
    let amount_b = RwSignal::new(String::new());
    let has_position = RwSignal::new(false);
    let status = RwSignal::new(TxStatus::Idle);
    let notice = RwSignal::new(None::<String>);

    let add_liquidity = move |_| {
        if status.get_untracked().is_pending() {
            return;
        }
        if amount_a.get_untracked().trim().is_empty()
            || amount_b.get_untracked().trim().is_empty()
        {
            return;
        }
        let Some(address) = session.address() else {
            return;
        };

        status.set(TxStatus::Pending);
        notice.set(None);
        let epoch = session.epoch();
        let backend = TxBackend::for_panel(network, FeatureTab::Liquidity);

        leptos::task::spawn_local(async move {
            let result = backend.submit(&address).await;
            if !session.still_current(network, epoch) {
                return;
            }
            match result {
                Ok(_) => {
                    has_position.try_set(true);
                    amount_a.try_set(String::new());
                    amount_b.try_set(String::new());
                    notice.try_set(Some("Liquidity added successfully!".to_string()));
                    status.try_set(TxStatus::Idle);
                }
                Err(error) => {
                    status.try_set(TxStatus::Failed(error.to_string()));
                }
            }
        });
    };

    let remove_liquidity = move |_| {
        if status.get_untracked().is_pending() {
            return;
        }
        let Some(address) = session.address() else {
            return;
        };

        status.set(TxStatus::Pending);
        notice.set(None);
        let epoch = session.epoch();
        let backend = TxBackend::for_panel(network, FeatureTab::Liquidity);

        leptos::task::spawn_local(async move {
            let result = backend.submit(&address).await;
            if !session.still_current(network, epoch) {
                return;
            }
            match result {
                Ok(_) => {
                    has_position.try_set(false);
                    notice.try_set(Some("Liquidity removed successfully!".to_string()));
                    status.try_set(TxStatus::Idle);
                }
                Err(error) => {
                    status.try_set(TxStatus::Failed(error.to_string()));
                }
            }
        });
    };

    view! {
        <div class="panel liquidity-panel">
            <div class="panel-head">
                <h2>"Liquidity Pool"</h2>
                <span class="panel-network">{format!("on {}", network.name())}</span>
            </div>

            {move || {
                if !session.is_connected() {
                    return view! {
                        <p class="panel-hint">"Connect your wallet to manage liquidity."</p>
                    }.into_any();
                }

                if has_position.get() {
                    view! {
                        <div class="position-view">
                            <h3>"Your Position"</h3>
                            <div class="amount-box position-box">
                                <p class="amount-meta">"LP Tokens"</p>
                                <p class="position-amount">{DEMO_LP_TOKENS}</p>
                            </div>
                            <button
                                class="submit-btn danger"
                                disabled=move || status.get().is_pending()
                                on:click=remove_liquidity
                            >
                                {move || if status.get().is_pending() {
                                    "Removing..."
                                } else {
                                    "Remove Liquidity"
                                }}
                            </button>
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <div class="add-view">
                            <p class="panel-hint">"You don't have any liquidity positions."</p>
                            <div class="amount-box">
                                <label class="amount-meta">"Token A Amount"</label>
                                <input
                                    type="number"
                                    placeholder="0.0"
                                    prop:value=move || amount_a.get()
                                    on:input=move |ev| amount_a.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="flip-row">"+"</div>
                            <div class="amount-box">
                                <label class="amount-meta">"Token B Amount"</label>
                                <input
                                    type="number"
                                    placeholder="0.0"
                                    prop:value=move || amount_b.get()
                                    on:input=move |ev| amount_b.set(event_target_value(&ev))
                                />
                            </div>
                            <button
                                class=format!("submit-btn {}", network.theme())
                                disabled=move || {
                                    status.get().is_pending()
                                        || amount_a.get().trim().is_empty()
                                        || amount_b.get().trim().is_empty()
                                }
                                on:click=add_liquidity
                            >
                                {move || if status.get().is_pending() {
                                    "Adding..."
                                } else {
                                    "Add Liquidity"
                                }}
                            </button>
                        </div>
                    }.into_any()
                }
            }}

            {move || notice.get().map(|text| view! {
                <div class="tx-success"><p>{text}</p></div>
            })}
            {move || match status.get() {
                TxStatus::Failed(reason) => view! {
                    <div class="tx-error"><p>{reason}</p></div>
                }.into_any(),
                _ => view! { <></> }.into_any(),
            }}
        </div>
    }
}
