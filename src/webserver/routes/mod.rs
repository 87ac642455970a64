use crate::webserver::{
    state::AppState,
    utils::{error_response, ErrorBody},
};
use axum::{http::StatusCode, response::Response, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod analyze;
pub mod cache;
pub mod status;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", api_routes(state.clone()))
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn api_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .merge(analyze::routes(state))
        .merge(status::routes())
        .merge(cache::routes())
}

async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, ErrorBody::new("Endpoint not found"))
}
