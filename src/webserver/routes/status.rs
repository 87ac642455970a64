use axum::{extract::State, response::Response, routing::get, Router};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

use crate::{
    analyzer::CacheReport,
    arguments::is_debug_webserver_enabled,
    logger::{self, LogTag},
    rate_limit::RateLimitStatus,
    webserver::{state::AppState, utils::success_response},
};

/// Simple health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// Unix milliseconds
    pub timestamp: i64,
    /// Entries in the result cache
    pub cache_size: usize,
    pub cache_metrics: CacheReport,
    /// Absent when rate limiting is disabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit: Option<RateLimitStatus>,
    pub uptime_seconds: u64,
    pub version: String,
}

/// Create status routes
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health_check))
}

/// GET /api/health
async fn health_check(State(state): State<Arc<AppState>>) -> Response {
    if is_debug_webserver_enabled() {
        logger::debug(LogTag::Webserver, "Health check endpoint called");
    }

    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().timestamp_millis(),
        cache_size: state.analyzer.cache_size(),
        cache_metrics: state.analyzer.cache_report(),
        rate_limit: state.rate_limiter.as_ref().map(|limiter| limiter.status()),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    success_response(response)
}
