/// Webserver middleware
///
/// Request interceptors applied per route group
use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;
use std::sync::Arc;

use crate::{
    errors::AnalyzerError,
    logger::{self, LogTag},
    rate_limit::{client_key, retry_after_secs},
    webserver::{state::AppState, utils},
};

pub const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

/// Fixed-window rate limit gate
///
/// Runs before the handler so rejected requests never reach validation or
/// the analyzer. Clients are keyed by the socket peer address, or by the
/// first `X-Forwarded-For` entry when `trust_forwarded_for` is enabled.
pub async fn rate_limit_gate(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let Some(limiter) = state.rate_limiter.as_ref() else {
        return next.run(request).await;
    };

    let forwarded = if state.config.trust_forwarded_for {
        request
            .headers()
            .get(FORWARDED_FOR_HEADER)
            .and_then(|v| v.to_str().ok())
    } else {
        None
    };
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip());
    let client = client_key(forwarded, peer);

    match limiter.check(&client) {
        Ok(()) => next.run(request).await,
        Err(remaining) => {
            logger::warning(
                LogTag::RateLimit,
                &format!("Rate limit exceeded for {} on {}", client, request.uri().path()),
            );
            utils::analyzer_error_response(&AnalyzerError::RateLimited {
                retry_after_secs: retry_after_secs(remaining),
            })
        }
    }
}
