/// Generic in-memory cache with TTL
///
/// Thread-safe, generic over key/value types. Expiry is lazy: a stale entry
/// is dropped by the read that finds it, never by a background sweep.
/// Tracks metrics for monitoring.
use super::config::CacheConfig;
use parking_lot::RwLock;
use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// Cache entry with TTL tracking
struct CacheEntry<V> {
    value: V,
    inserted_at: Instant,
}

impl<V> CacheEntry<V> {
    fn new(value: V, now: Instant) -> Self {
        Self {
            value,
            inserted_at: now,
        }
    }

    fn is_expired(&self, ttl: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.inserted_at) >= ttl
    }
}

/// Cache metrics for monitoring
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheMetrics {
    pub hits: u64,
    pub misses: u64,
    pub expirations: u64,
    pub inserts: u64,
}

impl CacheMetrics {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Point-in-time view of a cache, reported by the health endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub expirations: u64,
    pub inserts: u64,
    pub hit_rate: f64,
}

/// Generic cache manager
pub struct CacheManager<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    config: CacheConfig,
    data: RwLock<HashMap<K, CacheEntry<V>>>,
    metrics: RwLock<CacheMetrics>,
}

impl<K, V> CacheManager<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    /// Create new cache with given configuration
    pub fn new(config: CacheConfig) -> Self {
        Self {
            config,
            data: RwLock::new(HashMap::new()),
            metrics: RwLock::new(CacheMetrics::default()),
        }
    }

    /// Get value from cache (returns None if expired or missing)
    pub fn get(&self, key: &K) -> Option<V> {
        self.get_at(key, Instant::now())
    }

    /// Same as [`get`](Self::get) with an explicit clock reading
    pub fn get_at(&self, key: &K, now: Instant) -> Option<V> {
        let mut data = self.data.write();

        let expired = match data.get(key) {
            Some(entry) if !entry.is_expired(self.config.ttl, now) => {
                self.metrics.write().hits += 1;
                return Some(entry.value.clone());
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            data.remove(key);
        }

        let mut metrics = self.metrics.write();
        metrics.misses += 1;
        if expired {
            metrics.expirations += 1;
        }
        None
    }

    /// Insert value into cache, replacing any existing entry
    pub fn insert(&self, key: K, value: V) {
        self.insert_at(key, value, Instant::now());
    }

    pub fn insert_at(&self, key: K, value: V, now: Instant) {
        self.data.write().insert(key, CacheEntry::new(value, now));
        self.metrics.write().inserts += 1;
    }

    /// Clear all entries
    pub fn clear(&self) {
        self.data.write().clear();
    }

    /// Get current metrics
    pub fn metrics(&self) -> CacheMetrics {
        self.metrics.read().clone()
    }

    pub fn stats(&self) -> CacheStats {
        let metrics = self.metrics();
        CacheStats {
            entries: self.len(),
            hits: metrics.hits,
            misses: metrics.misses,
            expirations: metrics.expirations,
            inserts: metrics.inserts,
            hit_rate: metrics.hit_rate(),
        }
    }

    /// Number of stored entries, including stale ones not yet read
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
