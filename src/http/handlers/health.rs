//! Health check and fallback handlers.

use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::http::types::HealthResponse;

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// JSON 404 for routes nothing else matched.
pub async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Endpoint not found" })))
}
