//! Swap Panel
//!
//! Pay/receive amount pair with a fixed demo quote. Submission goes
//! through the transaction backend selected for this network, which is a
//! real signing call only where one is wired up; the panel cannot tell.

use hub_core::market::demo_tokens;
use hub_core::{FeatureTab, NetworkId};
use leptos::prelude::*;

use crate::services::tx::{TxBackend, TxStatus};
use crate::state::session::use_session_context;
use crate::utils::constants::{DEMO_BALANCE_PAY, DEMO_BALANCE_RECEIVE, DEMO_QUOTE_RATE};

/// Demo quote: a fixed rate applied to any positive pay amount.
fn quote_receive(pay: &str) -> Option<String> {
    let amount: f64 = pay.trim().parse().ok()?;
    if amount > 0.0 && amount.is_finite() {
        Some(format!("{:.2}", amount * DEMO_QUOTE_RATE))
    } else {
        None
    }
}

fn is_positive_amount(value: &str) -> bool {
    value
        .trim()
        .parse::<f64>()
        .map(|v| v > 0.0 && v.is_finite())
        .unwrap_or(false)
}

#[component]
pub fn SwapPanel(network: NetworkId) -> impl IntoView {
    let session = use_session_context();
    let tokens = demo_tokens(network);

    let pay_token = RwSignal::new(tokens[0].clone());
    let receive_token = RwSignal::new(tokens[1].clone());
    let pay_amount = RwSignal::new(String::new());
    let receive_amount = RwSignal::new(String::new());
    let status = RwSignal::new(TxStatus::Idle);

    let on_amount = move |ev| {
        let value = event_target_value(&ev);
        receive_amount.set(quote_receive(&value).unwrap_or_default());
        pay_amount.set(value);
    };

    let flip = move |_| {
        let pay = pay_token.get_untracked();
        pay_token.set(receive_token.get_untracked());
        receive_token.set(pay);
        let amount = pay_amount.get_untracked();
        pay_amount.set(receive_amount.get_untracked());
        receive_amount.set(amount);
    };

    let pay_options = tokens.clone();
    let on_pay_token = move |ev| {
        let symbol = event_target_value(&ev);
        if let Some(token) = pay_options.iter().find(|t| t.symbol == symbol) {
            if token.symbol == receive_token.get_untracked().symbol {
                receive_token.set(pay_token.get_untracked());
            }
            pay_token.set(token.clone());
        }
    };

    let receive_options = tokens.clone();
    let on_receive_token = move |ev| {
        let symbol = event_target_value(&ev);
        if let Some(token) = receive_options.iter().find(|t| t.symbol == symbol) {
            if token.symbol == pay_token.get_untracked().symbol {
                pay_token.set(receive_token.get_untracked());
            }
            receive_token.set(token.clone());
        }
    };

    let submit = move |_| {
        if status.get_untracked().is_pending() {
            return;
        }
        if !is_positive_amount(&pay_amount.get_untracked()) {
            return;
        }
        let Some(address) = session.address() else {
            return;
        };

        status.set(TxStatus::Pending);
        let epoch = session.epoch();
        let backend = TxBackend::for_panel(network, FeatureTab::Swap);

        leptos::task::spawn_local(async move {
            let result = backend.submit(&address).await;
            // The session or network moved on while we were in flight;
            // a late receipt must not touch the fresh state.
            if !session.still_current(network, epoch) {
                return;
            }
            match result {
                Ok(hash) => {
                    status.try_set(TxStatus::Success(hash));
                    pay_amount.try_set(String::new());
                    receive_amount.try_set(String::new());
                }
                Err(error) => {
                    status.try_set(TxStatus::Failed(error.to_string()));
                }
            }
        });
    };

    let token_options = move |selected_symbol: String, tokens: Vec<hub_core::market::Token>| {
        tokens
            .into_iter()
            .map(|t| {
                let value = t.symbol.clone();
                view! {
                    <option value=value.clone() selected={value == selected_symbol}>
                        {format!("{} {}", t.logo, t.symbol)}
                    </option>
                }
            })
            .collect::<Vec<_>>()
    };

    let select_tokens = tokens.clone();
    let select_tokens_receive = tokens.clone();

    view! {
        <div class="panel swap-panel">
            <div class="panel-head">
                <h2>"Swap"</h2>
                <span class="panel-network">{format!("on {}", network.name())}</span>
            </div>

            <div class="amount-box">
                <div class="amount-meta">
                    <span>"You pay"</span>
                    <span>
                        {move || format!(
                            "Balance: {}",
                            if session.is_connected() { DEMO_BALANCE_PAY } else { "N/A" }
                        )}
                    </span>
                </div>
                <div class="amount-row">
                    <input
                        type="number"
                        placeholder="0.0"
                        prop:value=move || pay_amount.get()
                        on:input=on_amount
                    />
                    <select
                        aria-label="Select token to pay"
                        prop:value=move || pay_token.get().symbol
                        on:change=on_pay_token
                    >
                        {move || token_options(pay_token.get().symbol, select_tokens.clone())}
                    </select>
                </div>
            </div>

            <div class="flip-row">
                <button class="flip-btn" aria-label="Swap tokens" on:click=flip>
                    "↓"
                </button>
            </div>

            <div class="amount-box">
                <div class="amount-meta">
                    <span>"You receive"</span>
                    <span>
                        {move || format!(
                            "Balance: {}",
                            if session.is_connected() { DEMO_BALANCE_RECEIVE } else { "N/A" }
                        )}
                    </span>
                </div>
                <div class="amount-row">
                    <input
                        type="number"
                        placeholder="0.0"
                        readonly
                        prop:value=move || receive_amount.get()
                    />
                    <select
                        aria-label="Select token to receive"
                        prop:value=move || receive_token.get().symbol
                        on:change=on_receive_token
                    >
                        {move || token_options(receive_token.get().symbol, select_tokens_receive.clone())}
                    </select>
                </div>
            </div>

            <button
                class=format!("submit-btn {}", network.theme())
                disabled=move || {
                    status.get().is_pending()
                        || !session.is_connected()
                        || !is_positive_amount(&pay_amount.get())
                }
                title=move || {
                    if session.is_connected() { "" } else { "Please connect your wallet first" }
                }
                on:click=submit
            >
                {move || match status.get() {
                    TxStatus::Pending => "Swapping...".to_string(),
                    _ if session.is_connected() => "Swap".to_string(),
                    _ => "Connect Wallet".to_string(),
                }}
            </button>

            {move || match status.get() {
                TxStatus::Success(hash) => view! {
                    <div class="tx-success">
                        <p>"Swap Successful!"</p>
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
                    <div class="tx-error">
                        <p>{reason}</p>
                    </div>
                }.into_any(),
                _ => view! { <></> }.into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_applies_fixed_rate() {
        assert_eq!(quote_receive("2").as_deref(), Some("2469.12"));
        assert_eq!(quote_receive(" 1 ").as_deref(), Some("1234.56"));
    }

    #[test]
    fn test_quote_rejects_non_positive_input() {
        assert_eq!(quote_receive(""), None);
        assert_eq!(quote_receive("0"), None);
        assert_eq!(quote_receive("-3"), None);
        assert_eq!(quote_receive("abc"), None);
    }

    #[test]
    fn test_positive_amount_guard() {
        assert!(is_positive_amount("0.5"));
        assert!(!is_positive_amount("0"));
        assert!(!is_positive_amount("nan"));
        assert!(!is_positive_amount(""));
    }
}
