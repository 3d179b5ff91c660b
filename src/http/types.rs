//! API types for HTTP handlers.

use serde::{Deserialize, Serialize};

/// Unified response envelope for the contact and increment endpoints.
///
/// Exactly one of `message` (success) or `error` (failure) is present.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiResponse {
    /// Whether the request was accepted.
    pub ok: bool,
    /// Human-readable success note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Human-readable error description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    /// Success envelope with a note for the caller.
    pub fn success(message: impl Into<String>) -> Self {
        Self { ok: true, message: Some(message.into()), error: None }
    }

    /// Failure envelope with an error description.
    pub fn failure(error: impl Into<String>) -> Self {
        Self { ok: false, message: None, error: Some(error.into()) }
    }
}

/// Body of the visitor count endpoints.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CountResponse {
    /// Current visit count.
    pub count: u64,
}

/// Body of the health endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the server is up.
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    /// The healthy response.
    pub fn ok() -> Self {
        Self { status: "ok".to_string(), message: "Server is running".to_string() }
    }
}
