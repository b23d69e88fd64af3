use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use liftlog_core::error::StoreError;
use log::error;
use serde_json::json;
use thiserror::Error;

/// Request-level error taxonomy. `BadRequest` messages go to the caller
/// verbatim; `NotFound` carries a generic resource message and never leaks
/// internal error text; `Internal` keeps the underlying error text for
/// operability.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Replaces the generic not-found message with a resource-specific one.
    pub fn not_found(self, message: &str) -> Self {
        match self {
            ApiError::NotFound(_) => ApiError::NotFound(message.to_string()),
            other => other,
        }
    }

    /// Prefixes internal failures with what the request was doing.
    pub fn context(self, message: &str) -> Self {
        match self {
            ApiError::Internal(err) => ApiError::Internal(format!("{message}: {err}")),
            other => other,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound => ApiError::NotFound("Resource not found".to_string()),
            StoreError::Validation(msg) => ApiError::BadRequest(msg),
            StoreError::Database(err) => ApiError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(msg) => {
                error!("Internal error: {msg}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
