//! # DeFi Hub Core Library
//!
//! Chain-agnostic domain types for the DeFi Hub web application. This crate
//! owns everything that does not touch the browser: the network registry,
//! the wallet session state machine, the error taxonomy, and the demo
//! market/launchpad data the dashboards render.
//!
//! ## Structure
//!
//! - **[`network`]**: the closed set of supported networks and their display
//!   metadata
//! - **[`session`]**: the single active `(network, address)` session and the
//!   controller that is its only writer
//! - **[`error`]**: the wallet error taxonomy and raw-message classification
//! - **[`feature`]**: the fixed dashboard feature tab set
//! - **[`market`]**: demo tokens and launchpad project listings
//! - **[`utils`]**: address and amount formatting for display
//!
//! ## Design Notes
//!
//! Everything here is plain Rust with no wasm dependencies, so the whole
//! crate tests natively. The `hub-web` member layers Leptos signals and the
//! per-network provider adapters on top of these types.

pub mod error;
pub mod feature;
pub mod market;
pub mod network;
pub mod session;
pub mod utils;

// Re-export the types the web member reaches for constantly.
pub use error::{Result, WalletError};
pub use feature::FeatureTab;
pub use network::{ConnectKind, NetworkId, WalletDescriptor};
pub use session::{ConnectTicket, SessionController, SessionState};
