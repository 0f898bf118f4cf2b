//! DeFi Hub - Leptos Frontend
//!
//! Single-page multi-chain dashboard: per-network swap/liquidity/mint/
//! launchpad panels behind one wallet session.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod features;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Panic messages and logs go to the browser console.
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("DeFi Hub starting...");

    leptos::mount::mount_to_body(|| view! { <App/> });
}
