use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use types::errors::ValidationError;

use crate::upstream::SourceError;

/// Request-level failures of the gateway
///
/// Per-user lookup failures never show up here; they only leave a listing
/// without its embedded owner.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("{message}: {source}")]
    Upstream {
        message: String,
        #[source]
        source: SourceError,
    },
}

impl AppError {
    pub fn upstream(message: impl Into<String>, source: SourceError) -> Self {
        AppError::Upstream {
            message: message.into(),
            source,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            // The upstream cause is logged by the handler, not echoed to callers
            AppError::Upstream { message, .. } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}
