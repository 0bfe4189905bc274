//! Router construction.

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;

/// Create the application router.
///
/// `max_body_bytes` caps request bodies; larger bodies are rejected with
/// `413` before any JSON is parsed.
pub fn create_router(state: Arc<AppState>, max_body_bytes: usize) -> Router {
    let api_routes = Router::new()
        .route("/api/convert", post(handlers::convert))
        .route("/api/convert-medium", post(handlers::convert_medium))
        .route("/api/platforms", get(handlers::list_platforms));

    Router::new()
        .merge(api_routes)
        .route("/health", get(handlers::health))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
