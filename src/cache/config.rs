/// Cache configuration per cached value type
///
/// Entries live until read after their TTL; there is no capacity bound.
/// - Analysis results: 10 minutes (upstream calls are expensive)
/// - ETH price: 5 minutes
use crate::config::CacheSettings;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct CacheConfig {
    /// Time-to-live for cached entries
    pub ttl: Duration,
}

impl CacheConfig {
    /// Per-address analysis results
    pub fn analysis_results() -> Self {
        Self {
            ttl: Duration::from_secs(600), // 10 minutes
        }
    }

    /// Spot ETH/USD price
    pub fn eth_price() -> Self {
        Self {
            ttl: Duration::from_secs(300), // 5 minutes
        }
    }

    /// Custom configuration
    pub fn custom(ttl_secs: u64) -> Self {
        Self {
            ttl: Duration::from_secs(ttl_secs),
        }
    }

    /// Analysis and price presets with TTLs taken from the config file
    pub fn from_settings(settings: &CacheSettings) -> (Self, Self) {
        (
            Self::custom(settings.analysis_ttl_secs),
            Self::custom(settings.price_ttl_secs),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_match_defaults() {
        let (analysis, price) = CacheConfig::from_settings(&CacheSettings::default());
        assert_eq!(analysis, CacheConfig::analysis_results());
        assert_eq!(price, CacheConfig::eth_price());
    }
}
