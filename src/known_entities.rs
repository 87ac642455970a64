/// Known contract addresses grouped by role
///
/// Static lookup tables used to classify transfer endpoints. The sets are
/// built once from the constants below and never mutated afterwards.
use crate::address::Address;
use once_cell::sync::Lazy;
use std::collections::HashSet;

// =============================================================================
// DEX ROUTERS
// =============================================================================

pub const UNISWAP_V2_ROUTER: &str = "0x7a250d5630b4cf539739df2c5dacb4c659f2488d";
pub const UNISWAP_V3_ROUTER: &str = "0xe592427a0aece92de3edee1f18e0157c05861564";
pub const UNISWAP_V3_ROUTER_2: &str = "0x68b3465833fb72a70ecdf485e0e4c7bd8665fc45";
pub const SUSHISWAP_ROUTER: &str = "0xd9e1ce17f2641f24ae83637ab66a2cca9c378b9f";
pub const ONEINCH_V5_ROUTER: &str = "0x1111111254eeb25477b68fb85ed929f73a960582";

// =============================================================================
// DEFI PROTOCOLS
// =============================================================================

pub const COMPOUND: &str = "0xa0b86a33e6c4ea71f30c7c2c8c16bb2eab55b9f1";
pub const COMPOUND_CDAI: &str = "0x5d3a536e4d6dbd6114cc1ead35777bab948e3643";
pub const COMPOUND_COMPTROLLER: &str = "0x3d9819210a31b4961b30ef54be2aed79b9c9cd3b";
pub const AAVE_V2_POOL: &str = "0x7d2768de32b0b80b7a3454c06bdac94a69ddc7a9";
pub const AAVE_V3_POOL: &str = "0x87870bca3f3fd6335c3f4ce8392d69350b4fa4e2";
pub const DAI: &str = "0x6b175474e89094c44da98b954eedeac495271d0f";

// =============================================================================
// NFT MARKETPLACES
// =============================================================================

pub const OPENSEA: &str = "0x7be8076f4ea4a4ad08075c2508e481d6c946d12b";
pub const OPENSEA_LEGACY: &str = "0x7f268357a8c2552623316e2562d90e642bb538e5";
pub const LOOKSRARE: &str = "0x59728544b08ab483533076417fbbb2fd0b17ce3a";
pub const X2Y2: &str = "0x74312363e45dcaba76c59ec49a7aa8a65a67eed3";

// =============================================================================
// MEME TOKENS
// =============================================================================

pub const SHIB: &str = "0x95ad61b0a150d79219dcf64e1e6cc01f0b64c4ce";
pub const APE: &str = "0x4d224452801aced8b2f0aebe155379bb5d594381";
pub const FRAX: &str = "0x853d955acef822db058eb8505911ed77f175b99e";

fn build_set(addresses: &[&str]) -> HashSet<Address> {
    addresses.iter().map(|a| Address::normalized(a)).collect()
}

static DEX_ROUTERS: Lazy<HashSet<Address>> = Lazy::new(|| {
    build_set(&[
        UNISWAP_V2_ROUTER,
        UNISWAP_V3_ROUTER,
        UNISWAP_V3_ROUTER_2,
        SUSHISWAP_ROUTER,
        ONEINCH_V5_ROUTER,
    ])
});

static DEFI_PROTOCOLS: Lazy<HashSet<Address>> = Lazy::new(|| {
    build_set(&[
        COMPOUND,
        COMPOUND_CDAI,
        COMPOUND_COMPTROLLER,
        AAVE_V2_POOL,
        AAVE_V3_POOL,
        DAI,
    ])
});

static NFT_MARKETPLACES: Lazy<HashSet<Address>> =
    Lazy::new(|| build_set(&[OPENSEA, OPENSEA_LEGACY, LOOKSRARE, X2Y2]));

static MEME_TOKENS: Lazy<HashSet<Address>> = Lazy::new(|| build_set(&[SHIB, APE, FRAX]));

pub fn is_dex_router(address: &Address) -> bool {
    DEX_ROUTERS.contains(address)
}

pub fn is_defi_protocol(address: &Address) -> bool {
    DEFI_PROTOCOLS.contains(address)
}

pub fn is_nft_marketplace(address: &Address) -> bool {
    NFT_MARKETPLACES.contains(address)
}

pub fn is_meme_token(address: &Address) -> bool {
    MEME_TOKENS.contains(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let checksummed = Address::normalized("0x7a250d5630B4cF539739dF2C5dAcb4c659F2488D");
        assert!(is_dex_router(&checksummed));
        assert!(!is_defi_protocol(&checksummed));
    }

    #[test]
    fn test_roles_are_disjoint() {
        assert!(is_defi_protocol(&Address::normalized(AAVE_V3_POOL)));
        assert!(!is_dex_router(&Address::normalized(AAVE_V3_POOL)));
        assert!(is_nft_marketplace(&Address::normalized(LOOKSRARE)));
        assert!(is_meme_token(&Address::normalized(SHIB)));
        assert!(!is_nft_marketplace(&Address::normalized(SHIB)));

        let unknown = Address::normalized("0x0000000000000000000000000000000000000001");
        assert!(!is_dex_router(&unknown));
        assert!(!is_defi_protocol(&unknown));
        assert!(!is_nft_marketplace(&unknown));
        assert!(!is_meme_token(&unknown));
    }

    #[test]
    fn test_set_sizes() {
        assert_eq!(DEX_ROUTERS.len(), 5);
        assert_eq!(DEFI_PROTOCOLS.len(), 6);
        assert_eq!(NFT_MARKETPLACES.len(), 4);
        assert_eq!(MEME_TOKENS.len(), 3);
    }
}
