//! Static project catalog served by the projects endpoint.
//!
//! The catalog is fixed data, not state: a built-in default list that can
//! be replaced wholesale by loading a JSON file at startup.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// I/O error while reading the catalog file.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    /// JSON parsing error.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

/// One portfolio project entry.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub desc: String,
    pub tech: Vec<String>,
    pub github: String,
    /// Free-form status label, e.g. "Ongoing" or "Completed".
    pub status: String,
}

/// The list of projects served by the catalog endpoint.
///
/// Serializes as a bare JSON array, matching the endpoint body.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Catalog(pub Vec<Project>);

impl Default for Catalog {
    fn default() -> Self {
        Self(vec![
            Project {
                id: 1,
                title: "Route Planner".to_string(),
                desc: "Multi-stop route optimization with live traffic data.".to_string(),
                tech: vec!["Rust".to_string(), "Axum".to_string(), "PostGIS".to_string()],
                github: "https://github.com/example/route-planner".to_string(),
                status: "Ongoing".to_string(),
            },
            Project {
                id: 2,
                title: "Log Triage".to_string(),
                desc: "Clusters production log lines and surfaces anomalies.".to_string(),
                tech: vec!["Rust".to_string(), "Tokio".to_string()],
                github: "https://github.com/example/log-triage".to_string(),
                status: "Completed".to_string(),
            },
        ])
    }
}

impl Catalog {
    /// Load a catalog from a JSON file holding an array of projects.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the file cannot be read or parsed.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// The catalog entries.
    pub fn projects(&self) -> &[Project] {
        &self.0
    }
}
