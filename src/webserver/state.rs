/// Shared application state for the webserver
///
/// Built once at startup from the loaded configuration and cloned (cheaply,
/// behind `Arc`) into every handler. Nothing here is persisted.
use crate::analyzer::WalletAnalyzer;
use crate::config::ServerConfig;
use crate::rate_limit::FixedWindowRateLimiter;
use std::sync::Arc;

/// Shared application state passed to all route handlers
#[derive(Clone)]
pub struct AppState {
    /// Webserver configuration
    pub config: Arc<ServerConfig>,

    pub analyzer: Arc<WalletAnalyzer>,

    /// None when rate limiting is disabled in configuration
    pub rate_limiter: Option<Arc<FixedWindowRateLimiter>>,

    /// Server startup time
    pub startup_time: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    /// Create new application state
    pub fn new(
        config: ServerConfig,
        analyzer: Arc<WalletAnalyzer>,
        rate_limiter: Option<Arc<FixedWindowRateLimiter>>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            analyzer,
            rate_limiter,
            startup_time: chrono::Utc::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        (chrono::Utc::now() - self.startup_time)
            .num_seconds()
            .max(0) as u64
    }
}
