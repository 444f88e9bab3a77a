//! Error types for the games API
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == API Error Enum ==
/// Unified error type for the games API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Upstream platform call failed (network, status, timeout or empty result)
    #[error("Upstream request failed: {0}")]
    Upstream(String),

    /// Requested place id has no catalog entry
    #[error("Unknown game: {0}")]
    UnknownGame(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Email provider is not configured
    #[error("Email service is not configured")]
    EmailNotConfigured,

    /// Email provider rejected or failed the delivery
    #[error("Email delivery failed: {0}")]
    EmailDelivery(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::UnknownGame(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::EmailNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::EmailDelivery(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "success": false,
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the games API.
pub type Result<T> = std::result::Result<T, ApiError>;
