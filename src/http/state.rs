//! Application state and configuration for the HTTP server.

use std::io;
use std::sync::Arc;

use crate::config::DEFAULT_CONTACT_FROM;
use crate::delivery::EmailSender;
use crate::projects::Catalog;
use crate::store::CounterStore;

/// Contact relay configuration and dependencies.
///
/// `sender` is `None` when no delivery credential is configured; the
/// contact flow then accepts submissions without attempting delivery.
#[derive(Clone)]
pub struct ContactConfig {
    /// Delivery capability, when configured.
    pub sender: Option<Arc<dyn EmailSender>>,
    /// Sender identity for notification emails.
    pub from: String,
    /// Notification recipients.
    pub recipients: Vec<String>,
}

/// Application state shared across all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Visit counter storage.
    pub counter: Arc<dyn CounterStore>,
    /// Contact relay configuration.
    pub contact: ContactConfig,
    /// Static project catalog.
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// Get a builder for configuring application state step by step.
    pub fn builder() -> AppStateBuilder {
        AppStateBuilder::new()
    }
}

/// Builder for constructing [`AppState`] with a fluent interface.
#[derive(Default)]
pub struct AppStateBuilder {
    counter: Option<Arc<dyn CounterStore>>,
    sender: Option<Arc<dyn EmailSender>>,
    from: Option<String>,
    recipients: Vec<String>,
    catalog: Option<Catalog>,
}

impl AppStateBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the counter store implementation.
    pub fn with_counter(mut self, counter: Arc<dyn CounterStore>) -> Self {
        self.counter = Some(counter);
        self
    }

    /// Set the email delivery capability.
    pub fn with_sender(mut self, sender: Arc<dyn EmailSender>) -> Self {
        self.sender = Some(sender);
        self
    }

    /// Set the sender identity for notification emails.
    pub fn with_contact_from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Set the notification recipients.
    pub fn with_recipients(mut self, recipients: Vec<String>) -> Self {
        self.recipients = recipients;
        self
    }

    /// Set the project catalog.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Build the final [`AppState`] with validation.
    ///
    /// # Errors
    ///
    /// Returns an error if the counter store is missing, or if a sender is
    /// configured without any recipients to notify.
    pub fn build(self) -> io::Result<AppState> {
        let counter = self.counter.ok_or(io::Error::new(
            io::ErrorKind::InvalidInput,
            "Counter store is required for AppState",
        ))?;

        if self.sender.is_some() && self.recipients.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "Contact recipients are required when an email sender is configured",
            ));
        }

        Ok(AppState {
            counter,
            contact: ContactConfig {
                sender: self.sender,
                from: self.from.unwrap_or_else(|| DEFAULT_CONTACT_FROM.to_string()),
                recipients: self.recipients,
            },
            catalog: Arc::new(self.catalog.unwrap_or_default()),
        })
    }
}
