//! Feature panels
//!
//! Each panel is a self-contained form sharing one status pattern:
//! submit, pending (controls disabled), then success (inputs cleared) or
//! error. Late results after a session teardown are discarded, not applied.

pub mod analysis_modal;
pub mod launchpad;
pub mod liquidity;
pub mod mint;
pub mod swap;

pub use launchpad::LaunchpadPanel;
pub use liquidity::LiquidityPanel;
pub use mint::MintPanel;
pub use swap::SwapPanel;
