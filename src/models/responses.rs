//! Response DTOs for the games API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

/// Envelope wrapping every API payload.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Payload, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error message, present on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Creates a success envelope around `data`.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Creates a failure envelope with an error message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Response body for the health endpoints (GET /health, GET /api/health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub success: bool,
    /// Health status (e.g., "online")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
    pub service: String,
    pub version: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with the current timestamp.
    pub fn online() -> Self {
        Self {
            success: true,
            status: "online".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            service: "games-api".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Payload for the contact endpoint on success (POST /api/contact)
#[derive(Debug, Clone, Serialize)]
pub struct ContactResponse {
    pub message: String,
}

impl ContactResponse {
    pub fn sent() -> Self {
        Self {
            message: "Message sent successfully! We will get back to you soon.".to_string(),
        }
    }
}

/// Payload for the contact health endpoint (GET /api/contact/health)
#[derive(Debug, Clone, Serialize)]
pub struct ContactHealthResponse {
    /// Whether an email provider key is configured
    pub configured: bool,
    /// "ready" or "not_configured"
    pub status: String,
}

impl ContactHealthResponse {
    pub fn new(configured: bool) -> Self {
        Self {
            configured,
            status: if configured { "ready" } else { "not_configured" }.to_string(),
        }
    }
}
