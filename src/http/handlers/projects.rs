//! Project catalog handler.

use axum::extract::State;
use axum::Json;

use crate::http::state::AppState;
use crate::projects::Project;

/// Serve the static project catalog as a bare JSON array.
pub async fn projects_list(State(state): State<AppState>) -> Json<Vec<Project>> {
    Json(state.catalog.projects().to_vec())
}
