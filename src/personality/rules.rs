/// Ordered archetype decision table
///
/// Rules are evaluated top to bottom and the first match wins, so the order
/// of [`RULES`] is part of the behavior. `eth` is the native balance in ether.
use super::{Archetype, ClassifierInput};

#[derive(Clone, Copy)]
pub struct ArchetypeRule {
    pub archetype: Archetype,
    pub matches: fn(&ClassifierInput) -> bool,
}

pub static RULES: &[ArchetypeRule] = &[
    ArchetypeRule {
        archetype: Archetype::Ghost,
        matches: |i| {
            i.eth_balance < 0.001 && i.fungible_count == 0 && i.nft_count == 0 && i.swaps_30d == 0
        },
    },
    ArchetypeRule {
        archetype: Archetype::Brokie,
        matches: |i| i.eth_balance < 0.01 && i.portfolio_value < 50.0,
    },
    ArchetypeRule {
        archetype: Archetype::DegenTrader,
        matches: |i| i.swaps_30d >= 10 && i.unique_contracts >= 8,
    },
    ArchetypeRule {
        archetype: Archetype::DefiMaxi,
        matches: |i| i.defi_interactions >= 5 && i.eth_balance >= 0.1,
    },
    ArchetypeRule {
        archetype: Archetype::NftDegen,
        matches: |i| i.nft_count >= 4 && i.nft_trades >= 3,
    },
    ArchetypeRule {
        archetype: Archetype::BabyWhale,
        matches: |i| i.eth_balance >= 0.1 && i.eth_balance <= 0.4 && i.swaps_30d < 3,
    },
    ArchetypeRule {
        archetype: Archetype::CryptoWhale,
        matches: |i| i.eth_balance >= 0.4,
    },
    ArchetypeRule {
        archetype: Archetype::HoarderSupreme,
        matches: |i| i.fungible_count > 20 && i.nft_count > 2,
    },
    ArchetypeRule {
        archetype: Archetype::PortfolioOptimizer,
        matches: |i| i.token_count >= 5 && i.swaps_30d >= 5,
    },
    ArchetypeRule {
        archetype: Archetype::JpegEnjoyer,
        matches: |i| i.nft_count > 0 && i.eth_balance < 0.001,
    },
    ArchetypeRule {
        archetype: Archetype::DiamondHands,
        matches: |i| i.swaps_30d == 0 && i.eth_balance > 0.1,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn matching(input: &ClassifierInput) -> Vec<Archetype> {
        RULES
            .iter()
            .filter(|rule| (rule.matches)(input))
            .map(|rule| rule.archetype)
            .collect()
    }

    #[test]
    fn test_table_order() {
        let order: Vec<Archetype> = RULES.iter().map(|r| r.archetype).collect();
        assert_eq!(order, Archetype::ALL[..11].to_vec());
    }

    #[test]
    fn test_whale_boundaries() {
        let at = |eth: f64| ClassifierInput {
            eth_balance: eth,
            ..ClassifierInput::default()
        };
        // 0.4 is both a baby whale and a crypto whale; the earlier rule decides
        assert_eq!(
            matching(&at(0.4)),
            vec![Archetype::BabyWhale, Archetype::CryptoWhale, Archetype::DiamondHands]
        );
        assert_eq!(matching(&at(0.1)), vec![Archetype::BabyWhale]);
        assert!(matching(&at(0.0999)).is_empty());
    }

    #[test]
    fn test_ghost_requires_no_activity() {
        let input = ClassifierInput {
            eth_balance: 0.0,
            portfolio_value: 100.0,
            swaps_30d: 1,
            ..ClassifierInput::default()
        };
        assert!(!matching(&input).contains(&Archetype::Ghost));
    }
}
