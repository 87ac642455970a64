// Service bootstrap: configuration, component wiring and the server lifecycle

use crate::{
    analyzer::WalletAnalyzer,
    arguments,
    cache::CacheConfig,
    config::{self, Config},
    logger::{self, LogTag},
    price::PriceService,
    provider::AlchemyProvider,
    rate_limit::FixedWindowRateLimiter,
    webserver::{self, AppState},
};
use std::sync::Arc;

/// Load configuration: file (`--config` or default path), then environment,
/// then `--port`
pub fn load_configuration() -> Result<Config, String> {
    let path = arguments::get_config_path().unwrap_or_else(|| config::CONFIG_FILE_PATH.to_string());
    let mut config = config::load_config_from_path(&path)?;

    config::apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    if let Some(port) = arguments::get_port_override() {
        config.server.port = port;
    }

    Ok(config)
}

/// Construct every long-lived component once and bundle them for the router
pub fn build_state(config: &Config) -> Result<Arc<AppState>, String> {
    let (analysis_cache, price_cache) = CacheConfig::from_settings(&config.cache);

    let provider = AlchemyProvider::new(&config.provider).map_err(|e| e.to_string())?;
    let prices = PriceService::from_config(&config.price, price_cache).map_err(|e| e.to_string())?;

    let analyzer = WalletAnalyzer::new(
        Arc::new(provider),
        prices,
        analysis_cache,
        config.analysis.clone(),
        config.provider.max_transfer_count,
    );

    let rate_limiter = if config.rate_limit.enabled {
        logger::info(
            LogTag::RateLimit,
            &format!(
                "Rate limiting analyze requests to {} per {}s per client",
                config.rate_limit.max_requests, config.rate_limit.window_secs
            ),
        );
        Some(Arc::new(FixedWindowRateLimiter::from_config(&config.rate_limit)))
    } else {
        logger::warning(LogTag::RateLimit, "Rate limiting disabled by configuration");
        None
    };

    Ok(Arc::new(AppState::new(
        config.server.clone(),
        Arc::new(analyzer),
        rate_limiter,
    )))
}

/// Full service lifecycle; returns once the webserver has shut down
pub async fn run() -> Result<(), String> {
    let config = load_configuration()?;
    let state = build_state(&config)?;

    logger::info(
        LogTag::System,
        &format!(
            "🌐 API available at http://{}:{}/api",
            config.server.host, config.server.port
        ),
    );

    webserver::start_server(state).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_state_from_defaults() {
        let state = build_state(&Config::default()).unwrap();
        assert!(state.rate_limiter.is_some());
        assert_eq!(state.analyzer.cache_size(), 0);
        assert_eq!(state.config.port, 3000);
    }

    #[test]
    fn test_rate_limit_can_be_disabled() {
        let mut config = Config::default();
        config.rate_limit.enabled = false;
        let state = build_state(&config).unwrap();
        assert!(state.rate_limiter.is_none());
    }
}
