use axum::{
    extract::{Query, State},
    middleware,
    response::Response,
    routing::get,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    address::Address,
    arguments::is_debug_webserver_enabled,
    logger::{self, LogTag},
    webserver::{
        middleware::rate_limit_gate,
        state::AppState,
        utils::{analyzer_error_response, success_response},
    },
};

#[derive(Debug, Deserialize)]
pub struct AnalyzeQuery {
    pub address: Option<String>,
}

/// Create analyze routes; the rate limit gate covers only these
pub fn routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/analyze", get(analyze_wallet))
        .route_layer(middleware::from_fn_with_state(state, rate_limit_gate))
}

/// GET /api/analyze?address=0x...
///
/// A query string that fails to deserialize (e.g. a repeated `address`) is
/// treated like a missing address.
async fn analyze_wallet(
    State(state): State<Arc<AppState>>,
    query: Option<Query<AnalyzeQuery>>,
) -> Response {
    let raw = query
        .and_then(|Query(query)| query.address)
        .unwrap_or_default();

    let address = match Address::parse(&raw) {
        Ok(address) => address,
        Err(e) => {
            if is_debug_webserver_enabled() {
                logger::debug(LogTag::Webserver, &format!("Rejected address {:?}", raw));
            }
            return analyzer_error_response(&e);
        }
    };

    match state.analyzer.analyze(&address).await {
        Ok(outcome) => success_response(outcome),
        Err(e) => analyzer_error_response(&e),
    }
}
