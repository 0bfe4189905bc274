//! HTTP request handlers.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use super::state::AppState;
use crate::error::NormalizeError;
use crate::normalizer::Platform;

/// Body of the convert endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct ConvertRequest {
    content: Option<String>,
    title: Option<String>,
    platform: Option<String>,
}

/// Successful conversion.
#[derive(Debug, Serialize)]
pub(crate) struct ConvertResponse {
    success: bool,
    title: String,
    content: String,
}

/// Response for GET /api/platforms.
#[derive(Debug, Serialize)]
pub(crate) struct PlatformsResponse {
    platforms: Vec<Platform>,
    default: Platform,
}

/// Handle POST /api/convert.
pub(crate) async fn convert(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ConvertRequest>, JsonRejection>,
) -> Result<Json<ConvertResponse>, ApiError> {
    let Json(request) = body?;
    let platform = state.normalizer.resolve_platform(request.platform.as_deref());
    convert_impl(&state, request, platform).await
}

/// Handle POST /api/convert-medium. Any `platform` field is ignored.
pub(crate) async fn convert_medium(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ConvertRequest>, JsonRejection>,
) -> Result<Json<ConvertResponse>, ApiError> {
    let Json(request) = body?;
    convert_impl(&state, request, Platform::Medium).await
}

async fn convert_impl(
    state: &AppState,
    request: ConvertRequest,
    platform: Platform,
) -> Result<Json<ConvertResponse>, ApiError> {
    let content = request
        .content
        .filter(|content| !content.trim().is_empty())
        .ok_or(NormalizeError::MissingInput)?;

    let input_bytes = content.len();
    let content = state.normalizer.normalize_async(content, platform).await?;
    tracing::info!(
        platform = %platform,
        input_bytes,
        output_bytes = content.len(),
        "Converted content"
    );

    Ok(Json(ConvertResponse {
        success: true,
        title: request.title.unwrap_or_default(),
        content,
    }))
}

/// Handle GET /api/platforms.
pub(crate) async fn list_platforms(State(state): State<Arc<AppState>>) -> Json<PlatformsResponse> {
    Json(PlatformsResponse {
        platforms: Platform::ALL.to_vec(),
        default: state.normalizer.config().default_platform(),
    })
}

/// Handle GET /health.
pub(crate) async fn health() -> &'static str {
    "ok"
}
