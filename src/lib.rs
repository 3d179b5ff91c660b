//! # Portfolio API Library
//!
//! A small backend for a personal portfolio site, exposing the two flows the
//! site actually needs server-side plus a few supporting endpoints.
//!
//! This library provides components for:
//! - **Contact Relay**: validates a name/email/message submission and relays
//!   it through a pluggable email-delivery capability
//! - **Visitor Counter**: a durable, monotonically incrementing visit count
//!   persisted as a single JSON file
//! - **Project Catalog**: static project metadata served over HTTP
//! - **HTTP Front Door**: Axum router with CORS, request tracing, and a JSON
//!   404 fallback
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use portfolio_api_rs::{store::FileCounterStore, http::build_router};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Open (or initialize) the counter file
//! let store = Arc::new(FileCounterStore::open("visitor-count.json")?);
//!
//! // Build HTTP router with state; no email sender means contact
//! // submissions are accepted and logged, delivery is skipped
//! let state = portfolio_api_rs::http::AppState::builder()
//!     .with_counter(store)
//!     .build()?;
//! let app = build_router(state);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod contact;
pub mod delivery;
pub mod http;
pub mod projects;
pub mod store;

// Re-export commonly used types for convenience
pub use config::Config;
pub use contact::{ContactForm, ContactSubmission, ValidationError};
pub use delivery::{DeliveryError, EmailSender, OutboundEmail, ResendSender};
pub use projects::{Catalog, Project};
pub use store::{CounterStore, FileCounterStore, MemoryCounterStore, StoreError, VisitorCount};
