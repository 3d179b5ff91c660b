//! Pluggable email delivery for contact notifications.
//!
//! The [`EmailSender`] capability hides which provider is wired in; the
//! contact flow only depends on the trait, so tests can substitute doubles
//! that succeed, fail, or time out deterministically. The shipped
//! implementation talks to the Resend transactional email HTTP API.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Resend transactional email endpoint.
pub const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";

/// Default bound on the outbound delivery call.
pub const DEFAULT_DELIVERY_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors that can occur when delivering a notification email.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The delivery call exceeded its bounded timeout.
    #[error("delivery timed out")]
    Timeout,
    /// The provider could not be reached or the connection failed.
    #[error("transport: {0}")]
    Transport(String),
    /// The provider answered with a non-success status.
    #[error("provider returned {status}: {message}")]
    Provider { status: u16, message: String },
}

/// An email ready for delivery.
///
/// Serializes directly as the Resend request body.
#[derive(Debug, Clone, Serialize)]
pub struct OutboundEmail {
    /// Sender identity, e.g. `Portfolio Contact <onboarding@resend.dev>`.
    pub from: String,
    /// Recipient addresses.
    pub to: Vec<String>,
    /// Address replies should go to (the submitter).
    pub reply_to: String,
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub html: String,
}

/// Capability for sending a notification email.
///
/// Exactly one attempt per call; retry and queueing are the caller's
/// concern (and out of scope here).
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Deliver the email, classifying the outcome as a [`DeliveryError`]
    /// on failure.
    async fn send(&self, email: &OutboundEmail) -> Result<(), DeliveryError>;
}

/// [`EmailSender`] backed by the Resend HTTP API.
pub struct ResendSender {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
    timeout: Duration,
}

impl ResendSender {
    /// Create a sender with the default delivery timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_timeout(api_key, DEFAULT_DELIVERY_TIMEOUT)
    }

    /// Create a sender with an explicit bound on the delivery call.
    pub fn with_timeout(api_key: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            endpoint: RESEND_ENDPOINT.to_string(),
            timeout,
        }
    }

    /// Override the provider endpoint. Used to point at a local stand-in.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl EmailSender for ResendSender {
    async fn send(&self, email: &OutboundEmail) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .timeout(self.timeout)
            .json(email)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DeliveryError::Timeout
                } else {
                    DeliveryError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        // Resend error bodies carry a "message" field; fall back to the
        // status text when the body is not parseable.
        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| body.get("message").and_then(|m| m.as_str()).map(str::to_owned))
            .unwrap_or_else(|| {
                status.canonical_reason().unwrap_or("unknown provider error").to_string()
            });

        Err(DeliveryError::Provider { status: status.as_u16(), message })
    }
}
