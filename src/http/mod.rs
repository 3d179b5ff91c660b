//! HTTP server exposing the portfolio API endpoints.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod types;

pub use routes::{build_router, router_with_origin};
pub use state::AppState;
