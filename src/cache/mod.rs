//! In-memory TTL caches
//!
//! [`CacheManager`] is the generic store; the analyzer keys it by canonical
//! [`Address`](crate::address::Address). [`PriceCache`] is the single-slot
//! wrapper for the spot price. Both are constructed once at startup and
//! shared through the web state.

pub mod config;
pub mod manager;
pub mod price;

pub use config::CacheConfig;
pub use manager::{CacheManager, CacheMetrics, CacheStats};
pub use price::{PriceCache, ETH_PRICE_KEY};
