//! Unified API error handling.
//!
//! Maps the core error taxonomy onto wire responses:
//!
//! | Variant | Status | Body |
//! |---|---|---|
//! | `NotFound` | 404 | plain text |
//! | `Validation` | 400 | `{"error": "..."}` |
//! | `Database` | 500 | `{"error": "..."}` |
//! | `Internal` | 500 | `{"error": "..."}` |

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use payledger_core::RepoError;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested employee does not exist (404).
    #[error("Not Found")]
    NotFound,

    /// Missing/blank required field or unparsable value (400).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Storage-level failure propagated from the gateway (500).
    #[error("Database error: {0}")]
    Database(String),

    /// Anything else; the server keeps serving (500).
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        Self::Database(value.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => (StatusCode::NOT_FOUND, "Not Found").into_response(),
            Self::Validation(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": message })),
            )
                .into_response(),
            Self::Database(message) => {
                log::error!("event=api_error module=server status=error kind=database error={message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": message })),
                )
                    .into_response()
            }
            Self::Internal(message) => {
                log::error!("event=api_error module=server status=error kind=internal error={message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": message })),
                )
                    .into_response()
            }
        }
    }
}
