//! # Network Registry
//!
//! The closed set of networks the hub can drive, plus the display metadata
//! the header tabs and dashboards need. Networks are defined at compile
//! time; there is no runtime registration.

use serde::{Deserialize, Serialize};

/// Identifier for a supported network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NetworkId {
    Sui,
    Evm,
    Iota,
}

/// User-facing description of one wallet implementing a network's
/// connection standard. Fetched from the browser registry at modal-open
/// time; only the multi-wallet networks ever list more than one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletDescriptor {
    pub name: String,
    /// Data URL or emoji for the selector row.
    #[serde(default)]
    pub icon: String,
}

/// How a wallet for a given network is discovered and connected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectKind {
    /// One well-known global injected by a browser extension
    /// (`window.ethereum`); connect is a request-accounts call.
    Injected,
    /// A discoverable registry of zero or more wallets implementing the
    /// network's wallet standard; connect requires picking one by name.
    Registry,
    /// No real SDK is wired up; connect synthesizes a demo address and no
    /// chain interaction ever happens.
    Demo,
}

impl NetworkId {
    /// Every supported network, in header-tab order.
    pub const ALL: [NetworkId; 3] = [NetworkId::Sui, NetworkId::Evm, NetworkId::Iota];

    /// Human-readable network name shown in tabs and panel headers.
    pub fn name(&self) -> &'static str {
        match self {
            NetworkId::Sui => "Sui",
            NetworkId::Evm => "EVM / Web3",
            NetworkId::Iota => "IOTA",
        }
    }

    /// Ticker of the network's native token.
    pub fn native_symbol(&self) -> &'static str {
        match self {
            NetworkId::Sui => "SUI",
            NetworkId::Evm => "BERA",
            NetworkId::Iota => "IOTA",
        }
    }

    /// Accent theme key used by the stylesheet for this network.
    pub fn theme(&self) -> &'static str {
        match self {
            NetworkId::Sui => "sui-blue",
            NetworkId::Evm => "berachain-orange",
            NetworkId::Iota => "iota-green",
        }
    }

    /// Base URL for linking a transaction hash to a block explorer.
    pub fn explorer_base(&self) -> &'static str {
        match self {
            NetworkId::Sui => "https://suiscan.xyz/mainnet/tx/",
            NetworkId::Evm => "https://artio.beratrail.io/tx/",
            NetworkId::Iota => "https://explorer.iota.org/mainnet/transaction/",
        }
    }

    /// Which connection mechanism this network's provider adapter uses.
    pub fn connect_kind(&self) -> ConnectKind {
        match self {
            NetworkId::Evm => ConnectKind::Injected,
            NetworkId::Sui => ConnectKind::Registry,
            NetworkId::Iota => ConnectKind::Demo,
        }
    }
}

impl std::fmt::Display for NetworkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_lists_every_network_once() {
        assert_eq!(NetworkId::ALL.len(), 3);
        for (i, a) in NetworkId::ALL.iter().enumerate() {
            for b in &NetworkId::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_serde_uses_uppercase_identifiers() {
        assert_eq!(serde_json::to_string(&NetworkId::Sui).unwrap(), "\"SUI\"");
        let parsed: NetworkId = serde_json::from_str("\"IOTA\"").unwrap();
        assert_eq!(parsed, NetworkId::Iota);
    }

    #[test]
    fn test_connect_kind_per_network() {
        assert_eq!(NetworkId::Evm.connect_kind(), ConnectKind::Injected);
        assert_eq!(NetworkId::Sui.connect_kind(), ConnectKind::Registry);
        assert_eq!(NetworkId::Iota.connect_kind(), ConnectKind::Demo);
    }

    #[test]
    fn test_display_matches_name() {
        for network in NetworkId::ALL {
            assert_eq!(network.to_string(), network.name());
        }
    }
}
