//! HTTP routing configuration for all API endpoints.

use axum::http::header::{self, HeaderName, HeaderValue};
use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::http::handlers::*;
use crate::http::state::AppState;

/// Build the Axum router with all API endpoints and CORS open to any
/// origin.
///
/// # Parameters
///
/// - `state` - Application state containing configuration and dependencies
///
/// # Returns
///
/// Returns configured Axum `Router` with all portfolio API endpoints.
pub fn build_router(state: AppState) -> Router {
    router_with_origin(state, None)
}

/// Build the router restricting CORS to one allowed origin.
///
/// An unparseable origin falls back to allowing any origin, with a warning.
pub fn router_with_origin(state: AppState, client_url: Option<&str>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/contact", post(contact))
        .route("/api/visitors", get(visitors))
        .route("/api/visitors/increment", post(increment_visitors))
        .route("/api/projects", get(projects_list))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(client_url))
        .with_state(state)
}

fn cors_layer(client_url: Option<&str>) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::OPTIONS,
            Method::PATCH,
            Method::DELETE,
            Method::POST,
            Method::PUT,
        ])
        // Standard header allowlist for browser clients
        .allow_headers([
            header::ACCEPT,
            header::CONTENT_LENGTH,
            header::CONTENT_TYPE,
            header::DATE,
            HeaderName::from_static("accept-version"),
            HeaderName::from_static("content-md5"),
            HeaderName::from_static("x-api-version"),
            HeaderName::from_static("x-csrf-token"),
            HeaderName::from_static("x-requested-with"),
        ]);

    match client_url {
        Some(url) => match url.parse::<HeaderValue>() {
            Ok(origin) => cors.allow_origin(origin),
            Err(e) => {
                warn!("Invalid CORS origin {url:?}: {e}, allowing any origin");
                cors.allow_origin(Any)
            }
        },
        None => cors.allow_origin(Any),
    }
}
