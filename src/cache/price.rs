/// Single-value cache for the spot ETH/USD price
use super::config::CacheConfig;
use super::manager::{CacheManager, CacheStats};
use std::time::Instant;

/// Key under which the one global price is stored
pub const ETH_PRICE_KEY: &str = "eth_price";

pub struct PriceCache {
    inner: CacheManager<&'static str, f64>,
}

impl PriceCache {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            inner: CacheManager::new(config),
        }
    }

    pub fn get(&self) -> Option<f64> {
        self.get_at(Instant::now())
    }

    pub fn get_at(&self, now: Instant) -> Option<f64> {
        self.inner.get_at(&ETH_PRICE_KEY, now)
    }

    pub fn set(&self, price: f64) {
        self.set_at(price, Instant::now());
    }

    pub fn set_at(&self, price: f64, now: Instant) {
        self.inner.insert_at(ETH_PRICE_KEY, price, now);
    }

    pub fn clear(&self) {
        self.inner.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.inner.stats()
    }
}

impl Default for PriceCache {
    fn default() -> Self {
        Self::new(CacheConfig::eth_price())
    }
}
