//! Dashboard feature tabs.

use serde::{Deserialize, Serialize};

/// The fixed set of feature panels every network dashboard offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureTab {
    Mint,
    Liquidity,
    Swap,
    Launchpad,
}

impl FeatureTab {
    /// Tab-bar order.
    pub const ALL: [FeatureTab; 4] = [
        FeatureTab::Mint,
        FeatureTab::Liquidity,
        FeatureTab::Swap,
        FeatureTab::Launchpad,
    ];

    /// Tab shown when a dashboard first opens.
    pub const DEFAULT: FeatureTab = FeatureTab::Swap;

    pub fn label(&self) -> &'static str {
        match self {
            FeatureTab::Mint => "Mint",
            FeatureTab::Liquidity => "Liquidity",
            FeatureTab::Swap => "Swap",
            FeatureTab::Launchpad => "Launchpad",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_bar_covers_every_feature_once() {
        assert_eq!(FeatureTab::ALL.len(), 4);
        for (i, a) in FeatureTab::ALL.iter().enumerate() {
            for b in &FeatureTab::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_default_tab_is_in_the_bar() {
        assert!(FeatureTab::ALL.contains(&FeatureTab::DEFAULT));
    }
}
