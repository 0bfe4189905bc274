//! HTTP surface for the content normalizer.
//!
//! ```text
//! client ──HTTP──► axum router
//!                      │
//!                      ├─► POST /api/convert          (platform from body or default)
//!                      ├─► POST /api/convert-medium   (platform fixed to medium)
//!                      ├─► GET  /api/platforms
//!                      └─► GET  /health
//!                              │
//!                              └─► ContentNormalizer::normalize_async (blocking pool)
//! ```

mod app;
mod error;
mod handlers;
mod state;

use std::sync::Arc;

use anyhow::{Context, Result};

pub use app::create_router;
pub use error::ApiError;
pub use state::AppState;

use crate::config::ServerConfig;
use crate::normalizer::ContentNormalizer;

/// Build the router for `config` and serve it until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the bind address is invalid or the listener cannot
/// be bound.
pub async fn run_server(config: ServerConfig) -> Result<()> {
    let state = Arc::new(AppState::new(ContentNormalizer::new(
        config.normalizer().clone(),
    )));
    let app = create_router(state, config.max_body_bytes());

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(
        address = %addr,
        default_platform = %config.normalizer().default_platform(),
        max_html_size = config.normalizer().max_html_size(),
        "Starting server"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}
