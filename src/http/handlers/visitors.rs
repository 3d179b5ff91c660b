//! Visitor counter handlers.

use axum::extract::State;
use axum::Json;
use tracing::error;

use crate::http::error::ApiError;
use crate::http::state::AppState;
use crate::http::types::CountResponse;

/// Read the current visit count without mutating it.
///
/// Read failures are masked: the endpoint prioritizes availability and
/// answers `count = 0`, logging the underlying error. The write path is
/// the one that surfaces store failures.
pub async fn visitors(State(state): State<AppState>) -> Json<CountResponse> {
    let count = match state.counter.read() {
        Ok(count) => count,
        Err(err) => {
            error!(%err, "failed to read visitor count, answering zero");
            0
        }
    };
    Json(CountResponse { count })
}

/// Increment the visit count by one and return the new value.
///
/// # Errors
///
/// Returns [`ApiError::Store`] (HTTP 500) when the counter state cannot
/// be read or written.
pub async fn increment_visitors(
    State(state): State<AppState>,
) -> Result<Json<CountResponse>, ApiError> {
    let count = state.counter.increment_and_get().map_err(|err| {
        error!(%err, "failed to increment visitor count");
        ApiError::from(err)
    })?;
    Ok(Json(CountResponse { count }))
}
