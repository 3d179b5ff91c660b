//! HTTP handlers for different API endpoints.

pub mod contact;
pub mod health;
pub mod projects;
pub mod visitors;

// Re-export handlers for easier access
pub use contact::contact;
pub use health::{health, not_found};
pub use projects::projects_list;
pub use visitors::{increment_visitors, visitors};
