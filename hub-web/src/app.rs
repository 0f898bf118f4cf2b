//! DeFi Hub - application shell
//!
//! Header with the brand button, the network tab set, and the connect
//! button; below it either the landing page or the selected network's
//! dashboard.

use hub_core::NetworkId;
use leptos::prelude::*;

use crate::components::ConnectButton;
use crate::pages::{Dashboard, HomePage};
use crate::state::session::provide_session_context;

#[component]
pub fn App() -> impl IntoView {
    let session = provide_session_context();

    view! {
        <div class="app-shell">
            <header class="app-header">
                <button class="brand" on:click=move |_| session.clear_selection()>
                    <span class="brand-title">"DeFi Hub"</span>
                    {move || session.selected().map(|network| view! {
                        <span class=format!("brand-network {}", network.theme())>
                            {network.name()}
                        </span>
                    })}
                </button>

                <nav class="network-tabs">
                    {NetworkId::ALL
                        .into_iter()
                        .map(|network| {
                            view! {
                                <button
                                    class=move || {
                                        if session.selected() == Some(network) {
                                            format!("network-tab active {}", network.theme())
                                        } else {
                                            "network-tab".to_string()
                                        }
                                    }
                                    title=network.name()
                                    on:click=move |_| session.select_network(network)
                                >
                                    {network.name()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>

                <ConnectButton/>
            </header>

            <main>
                {move || match session.selected() {
                    None => view! { <HomePage/> }.into_any(),
                    Some(network) => view! {
                        <div class="dashboard-container">
                            <Dashboard network/>
                        </div>
                    }.into_any(),
                }}
            </main>
        </div>
    }
}
