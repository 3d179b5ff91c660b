//! Visitor counter storage implementations and abstractions.
//!
//! This module provides the storage abstraction for the site's single
//! global visit count. The trait exposes only `read` and
//! `increment_and_get`, hiding the storage mechanism so a file-backed
//! store can be swapped for a real database without changing callers.

pub mod file;
pub mod memory;

// Re-export main implementations
pub use file::FileCounterStore;
pub use memory::MemoryCounterStore;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;

/// Errors that can occur when reading or writing the counter state.
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O error while reading or writing the backing file.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    /// The persisted record could not be parsed or serialized.
    #[error("counter record: {0}")]
    Record(#[from] serde_json::Error),
}

/// The singleton record persisted as the entire content of the counter file.
///
/// Wire format: `{"count": N, "lastUpdated": "<RFC 3339>"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitorCount {
    /// Total number of counted visits. Never decreases.
    pub count: u64,
    /// Timestamp of the last successful increment.
    #[serde(rename = "lastUpdated", with = "time::serde::rfc3339")]
    pub last_updated: OffsetDateTime,
}

impl VisitorCount {
    /// The initial record written when no state exists yet.
    pub fn zero() -> Self {
        Self { count: 0, last_updated: OffsetDateTime::now_utc() }
    }
}

/// Storage abstraction for the global visit count.
///
/// Implementations must serialize concurrent increments: `K` concurrent
/// `increment_and_get` calls starting from `N` leave the count at exactly
/// `N + K`.
pub trait CounterStore: Send + Sync {
    /// Current count without mutating it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing state cannot be read.
    fn read(&self) -> Result<u64, StoreError>;

    /// Increment the count by one and return the new value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing state cannot be read or the
    /// updated record cannot be written.
    fn increment_and_get(&self) -> Result<u64, StoreError>;
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    /// Test the persisted record round-trips with the expected JSON keys.
    #[test]
    fn test_visitor_count_wire_shape() {
        let record =
            VisitorCount { count: 42, last_updated: datetime!(2025-08-03 00:00:00 UTC) };

        let json = serde_json::to_string(&record).expect("valid structure");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
        assert_eq!(value["count"], 42);
        assert_eq!(value["lastUpdated"], "2025-08-03T00:00:00Z");

        let parsed: VisitorCount = serde_json::from_str(&json).expect("round trip");
        assert_eq!(parsed, record);
    }

    /// Test the initial record starts at zero.
    #[test]
    fn test_zero_record() {
        assert_eq!(VisitorCount::zero().count, 0);
    }
}
