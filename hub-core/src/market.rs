//! # Demo Market Data
//!
//! Token lists and launchpad listings the dashboards render. All of it is
//! fixed demo content; nothing here is fetched from a chain.

use serde::{Deserialize, Serialize};

use crate::network::NetworkId;

/// A swappable token as shown in the swap panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub symbol: String,
    pub name: String,
    /// Emoji or image URL shown next to the symbol.
    pub logo: String,
}

impl Token {
    fn new(symbol: &str, name: &str, logo: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            logo: logo.to_string(),
        }
    }
}

/// Sale phase of a launchpad project.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Upcoming,
    Live,
    Ended,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Upcoming => "Upcoming",
            ProjectStatus::Live => "Live",
            ProjectStatus::Ended => "Ended",
        }
    }
}

/// A launchpad listing card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchpadProject {
    pub id: String,
    pub name: String,
    pub description: String,
    pub logo: String,
    pub raised: u64,
    pub goal: u64,
    pub token_symbol: String,
    pub status: ProjectStatus,
}

impl LaunchpadProject {
    /// Funding progress in percent, clamped to 100. A zero goal reads as
    /// no progress rather than dividing by zero.
    pub fn progress_pct(&self) -> f64 {
        if self.goal == 0 {
            return 0.0;
        }
        let pct = self.raised as f64 / self.goal as f64 * 100.0;
        pct.min(100.0)
    }

    /// Only live sales accept participation.
    pub fn is_open(&self) -> bool {
        self.status == ProjectStatus::Live
    }
}

fn project(
    id: &str,
    name: &str,
    description: &str,
    logo: &str,
    raised: u64,
    goal: u64,
    token_symbol: &str,
    status: ProjectStatus,
) -> LaunchpadProject {
    LaunchpadProject {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        logo: logo.to_string(),
        raised,
        goal,
        token_symbol: token_symbol.to_string(),
        status,
    }
}

/// The tradeable token set for a network's swap panel.
pub fn demo_tokens(network: NetworkId) -> Vec<Token> {
    match network {
        NetworkId::Sui => vec![
            Token::new("SUI", "Sui", "💧"),
            Token::new("USDC", "USD Coin", "💲"),
            Token::new("WETH", "Wrapped Ether", "🦄"),
        ],
        NetworkId::Evm => vec![
            Token::new("BERA", "Berachain", "🐻"),
            Token::new("HONEY", "Honey", "🍯"),
            Token::new("STGUSDC", "Stargate USDC", "⭐"),
        ],
        NetworkId::Iota => vec![
            Token::new("IOTA", "Iota", "💡"),
            Token::new("USDT", "Tether", "💲"),
            Token::new("WBTC", "Wrapped BTC", "₿"),
        ],
    }
}

/// Listings shown on every network's launchpad tab.
pub fn launchpad_projects() -> Vec<LaunchpadProject> {
    vec![
        project(
            "proj1",
            "Quantum Leap",
            "A decentralized protocol for cross-chain atomic swaps using \
             quantum-resistant cryptography, ensuring future-proof security \
             for asset transfers.",
            "⚛️",
            150_000,
            500_000,
            "QNTM",
            ProjectStatus::Live,
        ),
        project(
            "proj2",
            "DeFi Garden",
            "An automated yield farming aggregator that optimizes strategies \
             across multiple liquidity pools to maximize returns for users \
             with minimal effort.",
            "🌱",
            750_000,
            750_000,
            "GRDN",
            ProjectStatus::Ended,
        ),
        project(
            "proj3",
            "Nova Oracle",
            "A high-speed, decentralized oracle network providing reliable \
             real-world data to smart contracts, enabling complex dApps and \
             financial instruments.",
            "🔮",
            0,
            1_000_000,
            "NOVA",
            ProjectStatus::Upcoming,
        ),
    ]
}

/// Featured listings on the landing page, grouped per network. Networks
/// without a featured section are simply absent.
pub fn featured_projects() -> Vec<(NetworkId, Vec<LaunchpadProject>)> {
    vec![
        (
            NetworkId::Sui,
            vec![
                project(
                    "sui1",
                    "Aqua Protocol",
                    "A decentralized liquid staking protocol on Sui, allowing \
                     users to earn staking rewards while maintaining liquidity \
                     for their assets.",
                    "🌊",
                    250_000,
                    600_000,
                    "AQUA",
                    ProjectStatus::Live,
                ),
                project(
                    "sui2",
                    "Sui Scape",
                    "A metaverse project building a persistent virtual world \
                     on the Sui blockchain, focused on gaming and social \
                     experiences.",
                    "🏝️",
                    120_000,
                    1_000_000,
                    "SCAPE",
                    ProjectStatus::Upcoming,
                ),
            ],
        ),
        (
            NetworkId::Evm,
            vec![
                project(
                    "bera1",
                    "Honey Pot Finance",
                    "A gamified yield farming protocol on Berachain, where \
                     users can stake assets in \"Honey Pots\" to earn multiple \
                     token rewards.",
                    "🍯",
                    80_000,
                    400_000,
                    "POT",
                    ProjectStatus::Live,
                ),
                project(
                    "bera2",
                    "Cuboard Finance",
                    "A decentralized perpetuals exchange on Berachain offering \
                     leverage trading with low slippage and deep liquidity.",
                    "🐻",
                    0,
                    750_000,
                    "CUB",
                    ProjectStatus::Upcoming,
                ),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_is_clamped_to_100() {
        let mut p = launchpad_projects().remove(1);
        assert_eq!(p.progress_pct(), 100.0);
        p.raised = p.goal * 3;
        assert_eq!(p.progress_pct(), 100.0);
    }

    #[test]
    fn test_zero_goal_reads_as_zero_progress() {
        let mut p = launchpad_projects().remove(0);
        p.goal = 0;
        assert_eq!(p.progress_pct(), 0.0);
    }

    #[test]
    fn test_only_live_projects_are_open() {
        let projects = launchpad_projects();
        let open: Vec<_> = projects.iter().filter(|p| p.is_open()).collect();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].status, ProjectStatus::Live);
    }

    #[test]
    fn test_every_network_has_a_distinct_token_pair() {
        for network in NetworkId::ALL {
            let tokens = demo_tokens(network);
            assert!(tokens.len() >= 2, "{network} needs a swap pair");
            assert_ne!(tokens[0].symbol, tokens[1].symbol);
            assert_eq!(tokens[0].symbol, network.native_symbol());
        }
    }

    #[test]
    fn test_featured_projects_group_by_listed_networks() {
        let featured = featured_projects();
        assert!(!featured.is_empty());
        for (_, projects) in &featured {
            assert!(!projects.is_empty());
        }
    }
}
