//! Error-to-response mapping for API handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::contact::ValidationError;
use crate::http::types::ApiResponse;
use crate::store::StoreError;

/// Errors surfaced to API callers.
///
/// Validation failures are client-caused and map to 400 with the rule's
/// message; counter write failures map to 500 with a generic description
/// (details go to the log, not the caller).
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Failed to increment count")]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(ApiResponse::failure(self.to_string()))).into_response()
    }
}
