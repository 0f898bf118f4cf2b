//! Network Dashboard
//!
//! Maps `(network, visible tab)` to exactly one feature panel. This
//! component holds no chain state at all, only the tab selection; all
//! chain interaction lives behind the provider adapters.

use hub_core::{FeatureTab, NetworkId};
use leptos::prelude::*;

use crate::features::{LaunchpadPanel, LiquidityPanel, MintPanel, SwapPanel};

#[component]
pub fn Dashboard(network: NetworkId) -> impl IntoView {
    let active_tab = RwSignal::new(FeatureTab::DEFAULT);

    view! {
        <div class="dashboard">
            <div class="feature-tabs">
                {FeatureTab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class=move || {
                                    if active_tab.get() == tab {
                                        format!("feature-tab active {}", network.theme())
                                    } else {
                                        "feature-tab".to_string()
                                    }
                                }
                                on:click=move |_| active_tab.set(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="feature-panel">
                {move || match active_tab.get() {
                    FeatureTab::Swap => view! { <SwapPanel network/> }.into_any(),
                    FeatureTab::Liquidity => view! { <LiquidityPanel network/> }.into_any(),
                    FeatureTab::Mint => view! { <MintPanel network/> }.into_any(),
                    FeatureTab::Launchpad => view! { <LaunchpadPanel network/> }.into_any(),
                }}
            </div>
        </div>
    }
}
