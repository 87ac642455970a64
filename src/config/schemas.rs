/// Configuration schemas - all config structures defined once with defaults
use crate::config_struct;

// ============================================================================
// WEBSERVER
// ============================================================================

config_struct! {
    /// HTTP listener configuration
    pub struct ServerConfig {
        /// IP to bind: 127.0.0.1 = localhost only, 0.0.0.0 = all interfaces
        host: String = "127.0.0.1".to_string(),
        port: u16 = 3000,
        /// Key rate limiting on the X-Forwarded-For header instead of the
        /// socket peer. Clients control that header, so only enable this
        /// behind a reverse proxy that overwrites it.
        trust_forwarded_for: bool = false,
    }
}

// ============================================================================
// UPSTREAM DATA PROVIDER
// ============================================================================

config_struct! {
    /// Alchemy JSON-RPC endpoint used for balances and transfer history
    pub struct ProviderConfig {
        /// Base URL without the trailing API key segment
        rpc_url: String = "https://eth-mainnet.g.alchemy.com/v2".to_string(),
        /// Usually supplied through ALCHEMY_API_KEY instead of the file
        api_key: String = String::new(),
        timeout_secs: u64 = 30,
        /// Per-direction cap passed as maxCount to alchemy_getAssetTransfers
        max_transfer_count: u32 = 1000,
    }
}

// ============================================================================
// PRICE
// ============================================================================

config_struct! {
    /// Spot ETH/USD price source
    pub struct PriceConfig {
        /// "fixed" or "coingecko"
        source: String = "fixed".to_string(),
        /// Used by the fixed source and as fallback when a live source fails
        fixed_eth_usd: f64 = 2500.0,
        coingecko_url: String = "https://api.coingecko.com/api/v3/simple/price".to_string(),
        timeout_secs: u64 = 10,
    }
}

// ============================================================================
// CACHES
// ============================================================================

config_struct! {
    /// Time bounds for the in-memory caches
    pub struct CacheSettings {
        analysis_ttl_secs: u64 = 600,
        price_ttl_secs: u64 = 300,
    }
}

// ============================================================================
// RATE LIMITING
// ============================================================================

config_struct! {
    /// Fixed-window limiter protecting the analyze endpoint
    pub struct RateLimitConfig {
        enabled: bool = true,
        max_requests: u32 = 30,
        window_secs: u64 = 60,
    }
}

// ============================================================================
// ANALYSIS
// ============================================================================

config_struct! {
    /// Window sizes and result shaping for the analysis pipeline
    pub struct AnalysisConfig {
        long_window_days: i64 = 90,
        short_window_days: i64 = 30,
        sample_transfer_count: usize = 6,
    }
}

// ============================================================================
// ROOT
// ============================================================================

config_struct! {
    pub struct Config {
        server: ServerConfig = ServerConfig::default(),
        provider: ProviderConfig = ProviderConfig::default(),
        price: PriceConfig = PriceConfig::default(),
        cache: CacheSettings = CacheSettings::default(),
        rate_limit: RateLimitConfig = RateLimitConfig::default(),
        analysis: AnalysisConfig = AnalysisConfig::default(),
    }
}
