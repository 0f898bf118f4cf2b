//! UI Components

pub mod connect_button;
pub mod project_card;
pub mod wallet_modal;

pub use connect_button::ConnectButton;
pub use project_card::ProjectCard;
pub use wallet_modal::WalletModal;
