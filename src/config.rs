//! Environment configuration.
//!
//! All options come from environment variables, each with a logged default.
//! Command-line flags on the binary override what the environment provides.

use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::{env, time::Duration};

use tracing::{info, warn};

use crate::delivery::DEFAULT_DELIVERY_TIMEOUT;

/// Default listen port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 5000;

/// Default path of the visitor counter file.
pub const DEFAULT_COUNTER_FILE: &str = "visitor-count.json";

/// Default sender identity for contact notifications.
pub const DEFAULT_CONTACT_FROM: &str = "Portfolio Contact <onboarding@resend.dev>";

/// Runtime configuration assembled from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen port (`PORT`).
    pub port: u16,
    /// Allowed CORS origin (`CLIENT_URL`); all origins when unset.
    pub client_url: Option<String>,
    /// Email provider credential (`RESEND_API_KEY`); delivery is skipped
    /// when unset.
    pub resend_api_key: Option<String>,
    /// Sender identity for notifications (`CONTACT_FROM`).
    pub contact_from: String,
    /// Notification recipients (`CONTACT_TO`, comma-separated).
    pub contact_to: Vec<String>,
    /// Path of the counter file (`VISITOR_COUNT_FILE`).
    pub counter_file: PathBuf,
    /// Bound on the outbound delivery call (`DELIVERY_TIMEOUT`, humantime).
    pub delivery_timeout: Duration,
    /// Recognized for deployment parity (`MONGODB_URI`); this build has no
    /// database persistence and ignores it.
    pub mongodb_uri: Option<String>,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        let config = Self {
            port: parse_or_default("PORT", DEFAULT_PORT),
            client_url: var("CLIENT_URL"),
            resend_api_key: var("RESEND_API_KEY"),
            contact_from: var("CONTACT_FROM")
                .unwrap_or_else(|| DEFAULT_CONTACT_FROM.to_string()),
            contact_to: var("CONTACT_TO").map(|v| split_list(&v)).unwrap_or_default(),
            counter_file: var("VISITOR_COUNT_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_COUNTER_FILE)),
            delivery_timeout: var("DELIVERY_TIMEOUT")
                .and_then(|v| match humantime::parse_duration(&v) {
                    Ok(timeout) => Some(timeout),
                    Err(e) => {
                        warn!("Invalid DELIVERY_TIMEOUT value: {e}, using default");
                        None
                    }
                })
                .unwrap_or(DEFAULT_DELIVERY_TIMEOUT),
            mongodb_uri: var("MONGODB_URI"),
        };

        if config.mongodb_uri.is_some() {
            warn!("MONGODB_URI is set but database persistence is not part of this build, ignoring");
        }

        config
    }
}

/// Read a variable, treating empty values as unset.
fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_or_default<T>(key: &str, default: T) -> T
where
    T: FromStr + Display + Copy,
    T::Err: Display,
{
    let Some(raw) = var(key) else {
        info!("{key} not set, using default: {default}");
        return default;
    };
    match raw.parse() {
        Ok(value) => value,
        Err(e) => {
            warn!("Invalid {key} value: {e}, using default: {default}");
            default
        }
    }
}

/// Split a comma-separated list, dropping empty segments.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test recipient list splitting tolerates spacing and trailing commas.
    #[test]
    fn test_split_list() {
        assert_eq!(
            split_list("a@x.com, b@x.com ,,c@x.com,"),
            vec!["a@x.com", "b@x.com", "c@x.com"]
        );
        assert!(split_list("").is_empty());
        assert!(split_list(" , ").is_empty());
    }
}
