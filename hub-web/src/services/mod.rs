//! Browser-facing services: per-network provider adapters, transaction
//! submission, and the generative-analysis client.

pub mod analysis;
pub mod detect;
pub mod evm;
pub mod iota;
pub mod sui;
pub mod tx;
pub mod wallet;

pub use wallet::ProviderAdapter;
