/// Spot ETH/USD price with caching
///
/// Sources are pluggable behind [`PriceSource`]. [`PriceService`] never fails:
/// a source error falls back to the configured fixed price, which is not
/// cached so the next request tries the live source again.
use crate::cache::{CacheConfig, CacheStats, PriceCache};
use crate::config::PriceConfig;
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::logger::{self, LogTag};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

#[async_trait]
pub trait PriceSource: Send + Sync {
    fn name(&self) -> &'static str;

    async fn fetch_eth_usd(&self) -> AnalyzerResult<f64>;
}

/// Constant placeholder price
pub struct FixedPriceSource {
    price: f64,
}

impl FixedPriceSource {
    pub fn new(price: f64) -> Self {
        Self { price }
    }
}

#[async_trait]
impl PriceSource for FixedPriceSource {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn fetch_eth_usd(&self) -> AnalyzerResult<f64> {
        Ok(self.price)
    }
}

// ============================================================================
// COINGECKO
// ============================================================================

/// `/simple/price?ids=ethereum&vs_currencies=usd`
pub struct CoinGeckoPriceSource {
    client: Client,
    url: String,
}

#[derive(Debug, Deserialize)]
struct SimplePrice {
    usd: Option<f64>,
}

impl CoinGeckoPriceSource {
    pub fn new(url: &str, timeout_secs: u64) -> AnalyzerResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AnalyzerError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl PriceSource for CoinGeckoPriceSource {
    fn name(&self) -> &'static str {
        "coingecko"
    }

    async fn fetch_eth_usd(&self) -> AnalyzerResult<f64> {
        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .query(&[("ids", "ethereum"), ("vs_currencies", "usd")])
            .send()
            .await
            .map_err(|e| AnalyzerError::upstream("simple/price", e))?;

        if !response.status().is_success() {
            return Err(AnalyzerError::upstream(
                "simple/price",
                format!("HTTP {}", response.status()),
            ));
        }

        let prices: HashMap<String, SimplePrice> = response
            .json()
            .await
            .map_err(|e| AnalyzerError::upstream("simple/price", format!("invalid response: {}", e)))?;

        prices
            .get("ethereum")
            .and_then(|p| p.usd)
            .filter(|p| p.is_finite() && *p > 0.0)
            .ok_or_else(|| AnalyzerError::Parse("simple/price response had no ethereum.usd".to_string()))
    }
}

// ============================================================================
// SERVICE
// ============================================================================

pub struct PriceService {
    source: Box<dyn PriceSource>,
    cache: PriceCache,
    fallback: f64,
}

impl PriceService {
    pub fn new(source: Box<dyn PriceSource>, cache_config: CacheConfig, fallback: f64) -> Self {
        Self {
            source,
            cache: PriceCache::new(cache_config),
            fallback,
        }
    }

    /// Pick the source named in configuration ("fixed" or "coingecko")
    pub fn from_config(config: &PriceConfig, cache_config: CacheConfig) -> AnalyzerResult<Self> {
        let source: Box<dyn PriceSource> = match config.source.to_lowercase().as_str() {
            "fixed" => Box::new(FixedPriceSource::new(config.fixed_eth_usd)),
            "coingecko" => Box::new(CoinGeckoPriceSource::new(
                &config.coingecko_url,
                config.timeout_secs,
            )?),
            other => {
                return Err(AnalyzerError::Config(format!(
                    "Unknown price source '{}' (expected fixed or coingecko)",
                    other
                )))
            }
        };

        logger::info(
            LogTag::Price,
            &format!("Using {} price source", source.name()),
        );

        Ok(Self::new(source, cache_config, config.fixed_eth_usd))
    }

    /// Current ETH/USD price, from cache when fresh
    pub async fn eth_usd(&self) -> f64 {
        if let Some(price) = self.cache.get() {
            logger::debug(LogTag::Price, &format!("Price cache hit: {}", price));
            return price;
        }

        match self.source.fetch_eth_usd().await {
            Ok(price) => {
                self.cache.set(price);
                price
            }
            Err(e) => {
                logger::warning(
                    LogTag::Price,
                    &format!(
                        "{} price unavailable, using fallback {}: {}",
                        self.source.name(),
                        self.fallback,
                        e
                    ),
                );
                self.fallback
            }
        }
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    struct CountingSource {
        calls: Arc<AtomicU32>,
        fail: bool,
    }

    #[async_trait]
    impl PriceSource for CountingSource {
        fn name(&self) -> &'static str {
            "counting"
        }

        async fn fetch_eth_usd(&self) -> AnalyzerResult<f64> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if self.fail {
                Err(AnalyzerError::upstream("simple/price", "HTTP 503"))
            } else {
                Ok(3000.0 + n as f64)
            }
        }
    }

    #[tokio::test]
    async fn test_price_is_cached() {
        let calls = Arc::new(AtomicU32::new(0));
        let service = PriceService::new(
            Box::new(CountingSource {
                calls: calls.clone(),
                fail: false,
            }),
            CacheConfig::eth_price(),
            2500.0,
        );

        assert_eq!(service.eth_usd().await, 3001.0);
        assert_eq!(service.eth_usd().await, 3001.0);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        service.clear_cache();
        assert_eq!(service.eth_usd().await, 3002.0);
    }

    #[tokio::test]
    async fn test_failure_uses_fallback_without_caching() {
        let calls = Arc::new(AtomicU32::new(0));
        let service = PriceService::new(
            Box::new(CountingSource {
                calls: calls.clone(),
                fail: true,
            }),
            CacheConfig::eth_price(),
            2500.0,
        );

        assert_eq!(service.eth_usd().await, 2500.0);
        assert_eq!(service.eth_usd().await, 2500.0);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        let stats = service.cache_stats();
        assert_eq!(stats.entries, 0);
        assert_eq!(stats.inserts, 0);
        assert_eq!(stats.misses, 2);
    }

    #[test]
    fn test_unknown_source_rejected() {
        let config = PriceConfig {
            source: "oracle".to_string(),
            ..PriceConfig::default()
        };
        assert!(matches!(
            PriceService::from_config(&config, CacheConfig::eth_price()),
            Err(AnalyzerError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_fixed_source_default() {
        let service =
            PriceService::from_config(&PriceConfig::default(), CacheConfig::eth_price()).unwrap();
        assert_eq!(service.eth_usd().await, 2500.0);
    }
}
