use axum::{extract::State, response::Response, routing::get, Router};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

use crate::webserver::{state::AppState, utils::success_response};

#[derive(Debug, Clone, Serialize)]
pub struct CacheClearedResponse {
    pub message: String,
    pub timestamp: i64,
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/cache/clear", get(clear_cache))
}

/// GET /api/cache/clear - drops cached results and the cached price
async fn clear_cache(State(state): State<Arc<AppState>>) -> Response {
    state.analyzer.clear_caches();

    success_response(CacheClearedResponse {
        message: "Cache cleared".to_string(),
        timestamp: Utc::now().timestamp_millis(),
    })
}
