//! Command-line interface definitions for the portfolio API server.

use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for the portfolio API server.
///
/// Every flag overrides the corresponding environment variable; unset
/// flags fall back to the environment and then to built-in defaults.
#[derive(Debug, Parser)]
#[command(name = "portfolio-api")]
#[command(author, version, about = "Portfolio backend: contact relay and visitor counter")]
pub struct Cli {
    /// Address to listen on (e.g. 0.0.0.0:5000); overrides PORT
    #[arg(long)]
    pub listen: Option<String>,

    /// Path to the visitor counter JSON file; overrides VISITOR_COUNT_FILE
    #[arg(long)]
    pub counter_file: Option<PathBuf>,

    /// Allowed CORS origin; overrides CLIENT_URL. All origins when unset
    #[arg(long)]
    pub client_url: Option<String>,

    /// Path to a JSON file replacing the built-in project catalog
    #[arg(long)]
    pub projects: Option<PathBuf>,

    /// Timeout for the outbound delivery call (e.g. 10s, 500ms);
    /// overrides DELIVERY_TIMEOUT
    #[arg(long, value_parser = humantime::parse_duration)]
    pub delivery_timeout: Option<std::time::Duration>,
}
