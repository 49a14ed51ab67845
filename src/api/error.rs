/// Error responses for the workflow API
///
/// The editor contract knows a single error shape: a JSON body with an
/// `error` message. A missing workflow maps to 404 with the fixed message;
/// anything else becomes a plain 500.

use crate::workflow::service::ServiceError;
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// API-level error, converted into the JSON error response
#[derive(Debug)]
pub enum ApiError {
    /// Referenced workflow does not exist (404)
    NotFound,
    /// Unexpected failure outside the defined contract (500)
    Internal(anyhow::Error),
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(id) => {
                tracing::warn!("Workflow not found: {}", id);
                ApiError::NotFound
            }
            ServiceError::Storage(err) => ApiError::Internal(err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Workflow not found"),
            ApiError::Internal(err) => {
                tracing::error!("Internal error: {:#}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
