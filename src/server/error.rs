//! Error responses for the HTTP surface.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::error::NormalizeError;

/// Request failure rendered as `{"success": false, "error": "..."}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Body is not valid JSON for the request shape.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Body exceeds the request size limit.
    #[error("Request body too large: {0}")]
    BodyTooLarge(String),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::BodyTooLarge(_) | Self::Normalize(NormalizeError::InputTooLarge { .. }) => {
                StatusCode::PAYLOAD_TOO_LARGE
            }
            Self::Normalize(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            Self::Normalize(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::BodyTooLarge(rejection.body_text())
        } else {
            Self::InvalidBody(rejection.body_text())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Conversion failed");
        } else {
            tracing::debug!(error = %self, status = %status, "Rejected request");
        }

        (status, Json(json!({"success": false, "error": self.to_string()}))).into_response()
    }
}
