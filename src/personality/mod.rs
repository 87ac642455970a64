//! Archetype classification
//!
//! Maps a wallet's balance, holdings and windowed statistics onto exactly one
//! [`Archetype`]. The decision table lives in [`rules::RULES`] as ordered data
//! and is evaluated first-match-wins; wallets matching no rule fall through
//! to [`Archetype::Mystery`].

pub mod rules;

pub use rules::{ArchetypeRule, RULES};

use serde::Serialize;

/// Behavioral label assigned to a wallet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    Ghost,
    Brokie,
    DegenTrader,
    DefiMaxi,
    NftDegen,
    BabyWhale,
    CryptoWhale,
    HoarderSupreme,
    PortfolioOptimizer,
    JpegEnjoyer,
    DiamondHands,
    Mystery,
}

impl Archetype {
    pub const ALL: [Archetype; 12] = [
        Archetype::Ghost,
        Archetype::Brokie,
        Archetype::DegenTrader,
        Archetype::DefiMaxi,
        Archetype::NftDegen,
        Archetype::BabyWhale,
        Archetype::CryptoWhale,
        Archetype::HoarderSupreme,
        Archetype::PortfolioOptimizer,
        Archetype::JpegEnjoyer,
        Archetype::DiamondHands,
        Archetype::Mystery,
    ];

    /// Display label shown to users
    pub fn label(&self) -> &'static str {
        match self {
            Archetype::Ghost => "Ghost Wallet 👻",
            Archetype::Brokie => "Certified Brokie 🤲",
            Archetype::DegenTrader => "Degen Trader 🎰",
            Archetype::DefiMaxi => "DeFi Maxi 🏦",
            Archetype::NftDegen => "NFT Degen 🎨",
            Archetype::BabyWhale => "Baby Whale 🐋",
            Archetype::CryptoWhale => "Crypto Whale 🐋",
            Archetype::HoarderSupreme => "Hoarder Supreme 📦",
            Archetype::PortfolioOptimizer => "Portfolio Optimizer 📊",
            Archetype::JpegEnjoyer => "JPEG Enjoyer 📸",
            Archetype::DiamondHands => "Diamond Hands 💎",
            Archetype::Mystery => "Mystery Wallet 👻",
        }
    }

    pub fn badges(&self) -> &'static [&'static str] {
        match self {
            Archetype::Ghost => &["Ghost", "Inactive"],
            Archetype::Brokie => &["Brokie", "Smol"],
            Archetype::DegenTrader => &["Degen", "Active", "Trader"],
            Archetype::DefiMaxi => &["DeFi", "Yield Farmer", "Advanced"],
            Archetype::NftDegen => &["NFT", "Collector", "Trader"],
            Archetype::BabyWhale => &["Whale", "HODLer", "Diamond Hands"],
            Archetype::CryptoWhale => &["Whale", "Big Money", "VIP"],
            Archetype::HoarderSupreme => &["Hoarder", "Collector", "Diversified"],
            Archetype::PortfolioOptimizer => &["Balanced", "Strategic", "Active"],
            Archetype::JpegEnjoyer => &["NFT", "Art Lover", "Optimistic"],
            Archetype::DiamondHands => &["HODLer", "Patient", "Long-term"],
            Archetype::Mystery => &[],
        }
    }

    /// Confidence score, 0-100
    pub fn confidence(&self) -> u8 {
        match self {
            Archetype::Ghost => 95,
            Archetype::Brokie => 90,
            Archetype::DegenTrader => 95,
            Archetype::DefiMaxi => 90,
            Archetype::NftDegen => 85,
            Archetype::BabyWhale => 88,
            Archetype::CryptoWhale => 95,
            Archetype::HoarderSupreme => 82,
            Archetype::PortfolioOptimizer => 78,
            Archetype::JpegEnjoyer => 75,
            Archetype::DiamondHands => 80,
            Archetype::Mystery => 50,
        }
    }
}

/// Everything the decision table looks at
///
/// `fungible_count` and `nft_count` are transfer counts from the long window,
/// `swaps_30d` comes from the short window, `token_count` from live balances.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifierInput {
    pub eth_balance: f64,
    pub token_count: usize,
    pub portfolio_value: f64,
    pub unique_contracts: usize,
    pub fungible_count: u32,
    pub nft_count: u32,
    pub swaps_30d: u32,
    pub defi_interactions: u32,
    pub nft_trades: u32,
}

impl ClassifierInput {
    /// Copy with NaN/infinite amounts replaced by zero
    fn sanitized(&self) -> ClassifierInput {
        let finite_or_zero = |v: f64| if v.is_finite() { v } else { 0.0 };
        ClassifierInput {
            eth_balance: finite_or_zero(self.eth_balance),
            portfolio_value: finite_or_zero(self.portfolio_value),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    #[serde(skip)]
    pub archetype: Archetype,
    pub personality: &'static str,
    pub badges: &'static [&'static str],
    pub confidence: u8,
}

impl From<Archetype> for Classification {
    fn from(archetype: Archetype) -> Self {
        Self {
            archetype,
            personality: archetype.label(),
            badges: archetype.badges(),
            confidence: archetype.confidence(),
        }
    }
}

/// Pick the first matching archetype; never fails
pub fn classify(input: &ClassifierInput) -> Classification {
    classify_with(RULES, input)
}

/// First-match-wins evaluation over an arbitrary rule table
pub fn classify_with(rules: &[ArchetypeRule], input: &ClassifierInput) -> Classification {
    let input = input.sanitized();
    rules
        .iter()
        .find(|rule| (rule.matches)(&input))
        .map(|rule| rule.archetype)
        .unwrap_or(Archetype::Mystery)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_empty_wallet_is_ghost() {
        let result = classify(&ClassifierInput::default());
        assert_eq!(result.personality, "Ghost Wallet 👻");
        assert_eq!(result.badges, &["Ghost", "Inactive"]);
        assert_eq!(result.confidence, 95);
    }

    #[test]
    fn test_half_eth_is_whale_regardless_of_stats() {
        let busy = ClassifierInput {
            eth_balance: 0.5,
            token_count: 40,
            portfolio_value: 1250.0,
            unique_contracts: 3,
            fungible_count: 50,
            nft_count: 10,
            swaps_30d: 2,
            defi_interactions: 2,
            nft_trades: 0,
        };
        let quiet = ClassifierInput {
            eth_balance: 0.5,
            ..ClassifierInput::default()
        };

        for input in [busy, quiet] {
            let result = classify(&input);
            assert_eq!(result.archetype, Archetype::CryptoWhale);
            assert_eq!(result.personality, "Crypto Whale 🐋");
            assert_eq!(result.confidence, 95);
        }
    }

    #[test]
    fn test_earlier_rule_wins_when_several_match() {
        // Ghost and whale literals cannot both hold for a real balance, so
        // drive the evaluator with a table where both always match
        let always: fn(&ClassifierInput) -> bool = |_| true;
        let table = [
            ArchetypeRule {
                archetype: Archetype::Ghost,
                matches: always,
            },
            ArchetypeRule {
                archetype: Archetype::CryptoWhale,
                matches: always,
            },
        ];
        let result = classify_with(&table, &ClassifierInput::default());
        assert_eq!(result.archetype, Archetype::Ghost);

        // Ghost and brokie both match a dust wallet; ghost is listed first
        let dust = ClassifierInput {
            eth_balance: 0.0005,
            portfolio_value: 1.0,
            ..ClassifierInput::default()
        };
        assert!(RULES.iter().filter(|r| (r.matches)(&dust)).count() >= 2);
        assert_eq!(classify(&dust).archetype, Archetype::Ghost);
    }

    #[test]
    fn test_empty_table_falls_back_to_mystery() {
        let result = classify_with(&[], &ClassifierInput::default());
        assert_eq!(result.archetype, Archetype::Mystery);
    }

    #[test]
    fn test_degen_trader_thresholds() {
        let base = ClassifierInput {
            eth_balance: 0.05,
            portfolio_value: 125.0,
            swaps_30d: 10,
            unique_contracts: 8,
            ..ClassifierInput::default()
        };
        assert_eq!(classify(&base).archetype, Archetype::DegenTrader);

        let fewer_swaps = ClassifierInput {
            swaps_30d: 9,
            ..base.clone()
        };
        assert_ne!(classify(&fewer_swaps).archetype, Archetype::DegenTrader);

        let fewer_contracts = ClassifierInput {
            unique_contracts: 7,
            ..base
        };
        assert_ne!(classify(&fewer_contracts).archetype, Archetype::DegenTrader);
    }

    #[test]
    fn test_non_finite_amounts_are_zero() {
        let input = ClassifierInput {
            eth_balance: f64::NAN,
            portfolio_value: f64::INFINITY,
            ..ClassifierInput::default()
        };
        assert_eq!(classify(&input).archetype, Archetype::Ghost);

        let input = ClassifierInput {
            eth_balance: f64::INFINITY,
            portfolio_value: 100.0,
            nft_count: 1,
            ..ClassifierInput::default()
        };
        assert_eq!(classify(&input).archetype, Archetype::JpegEnjoyer);
    }

    #[test]
    fn test_table_examples() {
        let cases = [
            (
                ClassifierInput {
                    eth_balance: 0.2,
                    defi_interactions: 5,
                    ..ClassifierInput::default()
                },
                Archetype::DefiMaxi,
            ),
            (
                ClassifierInput {
                    eth_balance: 0.05,
                    portfolio_value: 125.0,
                    nft_count: 4,
                    nft_trades: 3,
                    ..ClassifierInput::default()
                },
                Archetype::NftDegen,
            ),
            (
                ClassifierInput {
                    eth_balance: 0.4,
                    swaps_30d: 2,
                    ..ClassifierInput::default()
                },
                Archetype::BabyWhale,
            ),
            (
                ClassifierInput {
                    eth_balance: 0.05,
                    portfolio_value: 125.0,
                    fungible_count: 21,
                    nft_count: 3,
                    ..ClassifierInput::default()
                },
                Archetype::HoarderSupreme,
            ),
            (
                ClassifierInput {
                    eth_balance: 0.05,
                    portfolio_value: 125.0,
                    token_count: 5,
                    swaps_30d: 5,
                    ..ClassifierInput::default()
                },
                Archetype::PortfolioOptimizer,
            ),
            (
                ClassifierInput {
                    eth_balance: 0.0,
                    portfolio_value: 0.0,
                    nft_count: 2,
                    ..ClassifierInput::default()
                },
                Archetype::Brokie,
            ),
            (
                ClassifierInput {
                    eth_balance: 0.05,
                    portfolio_value: 125.0,
                    ..ClassifierInput::default()
                },
                Archetype::Mystery,
            ),
        ];

        for (input, expected) in cases {
            assert_eq!(classify(&input).archetype, expected, "{input:?}");
        }
    }

    #[test]
    fn test_mystery_has_no_badges() {
        let result = Classification::from(Archetype::Mystery);
        assert_eq!(result.personality, "Mystery Wallet 👻");
        assert!(result.badges.is_empty());
        assert_eq!(result.confidence, 50);
    }

    #[test]
    fn test_labels_unique_and_total() {
        let labels: HashSet<&str> = Archetype::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(labels.len(), 12);

        // Every rule archetype is distinct and the default is not a rule
        let ruled: HashSet<Archetype> = RULES.iter().map(|r| r.archetype).collect();
        assert_eq!(ruled.len(), RULES.len());
        assert!(!ruled.contains(&Archetype::Mystery));

        for archetype in Archetype::ALL {
            assert!(archetype.badges().len() <= 3);
            assert!(archetype.confidence() <= 100);
        }
    }
}
