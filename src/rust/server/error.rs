//! API error type with automatic JSON error responses.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug)]
pub enum ApiError {
    /// The request body could not be turned into the expected JSON payload
    Rejected(StatusCode, String),
    NotFound(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Rejected(status, msg) => (status, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };
        log::debug!("Request failed with {}: {}", status, message);
        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}
