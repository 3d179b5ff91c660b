//! Contact form domain: validation rules and notification rendering.
//!
//! A submission passes three checks in a fixed order (presence, email shape,
//! message length) before anything else happens. Validation failures carry
//! the exact message shown to the submitter.

use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

/// Minimum accepted message length after trimming surrounding whitespace.
pub const MIN_MESSAGE_LEN: usize = 10;

/// Validation failures for a contact submission.
///
/// The `Display` impl is the user-facing error string returned with HTTP 400.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more of name/email/message is empty or missing.
    #[error("All fields are required")]
    MissingFields,
    /// Email does not look like `something@host.tld`.
    #[error("Invalid email address")]
    InvalidEmail,
    /// Trimmed message is shorter than [`MIN_MESSAGE_LEN`].
    #[error("Message too short")]
    MessageTooShort,
}

/// Raw contact form body as submitted by the client.
///
/// Fields default to empty strings when absent so the presence check can
/// answer with the field-level 400 instead of a generic decode rejection.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// A submission that passed validation, ready to relay.
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Permissive email shape: non-whitespace, an `@`, and a dotted domain.
fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"))
}

impl ContactForm {
    /// Validate the form, producing a [`ContactSubmission`] on success.
    ///
    /// Checks run in order: presence of all fields, email shape, message
    /// length. The first failing rule wins.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] for the first rule that failed.
    pub fn validate(self) -> Result<ContactSubmission, ValidationError> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.message.trim().is_empty()
        {
            return Err(ValidationError::MissingFields);
        }

        if !email_pattern().is_match(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }

        if self.message.trim().chars().count() < MIN_MESSAGE_LEN {
            return Err(ValidationError::MessageTooShort);
        }

        Ok(ContactSubmission { name: self.name, email: self.email, message: self.message })
    }
}

impl ContactSubmission {
    /// Subject line for the owner notification email.
    pub fn subject(&self) -> String {
        format!("New contact form submission from {}", self.name)
    }

    /// HTML body for the owner notification email.
    ///
    /// Submitted values are escaped before interpolation.
    pub fn html_body(&self) -> String {
        format!(
            "<h2>New message from your portfolio</h2>\
             <p><strong>Name:</strong> {}</p>\
             <p><strong>Email:</strong> {}</p>\
             <p><strong>Message:</strong></p>\
             <p>{}</p>\
             <hr />\
             <p><small>Sent from the portfolio contact form</small></p>",
            escape_html(&self.name),
            escape_html(&self.email),
            escape_html(&self.message),
        )
    }
}

/// Minimal HTML escaping for user-provided text.
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    /// Test that any empty field fails with the "required" error.
    #[test]
    fn test_missing_fields() {
        let cases = [
            form("", "jane@x.com", "Hello there, this is a test."),
            form("Jane", "", "Hello there, this is a test."),
            form("Jane", "jane@x.com", ""),
            form("   ", "jane@x.com", "Hello there, this is a test."),
            form("", "", ""),
        ];
        for case in cases {
            assert_eq!(case.validate().unwrap_err(), ValidationError::MissingFields);
        }
    }

    /// Test that missing JSON keys deserialize to empty fields.
    #[test]
    fn test_absent_fields_deserialize_empty() {
        let parsed: ContactForm = serde_json::from_str(r#"{"name": "Jane"}"#).expect("valid JSON");
        assert_eq!(parsed.name, "Jane");
        assert!(parsed.email.is_empty());
        assert!(parsed.message.is_empty());
        assert_eq!(parsed.validate().unwrap_err(), ValidationError::MissingFields);
    }

    /// Test email shape rejection for values without an `@` or domain dot.
    #[test]
    fn test_invalid_email() {
        for email in ["a@b", "noatsign.com", "jane@", "@x.com"] {
            let case = form("Jane", email, "Hello there, this is a test.");
            assert_eq!(case.validate().unwrap_err(), ValidationError::InvalidEmail, "{email}");
        }
    }

    /// Test the presence check runs before the email shape check.
    #[test]
    fn test_validation_order() {
        let case = form("Jane", "", "hi");
        assert_eq!(case.validate().unwrap_err(), ValidationError::MissingFields);

        // Email shape beats message length when both are wrong
        let case = form("Jane", "a@b", "hi");
        assert_eq!(case.validate().unwrap_err(), ValidationError::InvalidEmail);
    }

    /// Test short messages, including ones padded with whitespace.
    #[test]
    fn test_message_too_short() {
        for message in ["hi", "short msg", "   hi there   "] {
            let case = form("Jane", "jane@x.com", message);
            assert_eq!(case.validate().unwrap_err(), ValidationError::MessageTooShort, "{message:?}");
        }
    }

    /// Test a well-formed submission passes with fields preserved.
    #[test]
    fn test_valid_submission() {
        let submission = form("Jane", "jane@x.com", "Hello there, this is a test.")
            .validate()
            .expect("valid submission");
        assert_eq!(submission.name, "Jane");
        assert_eq!(submission.email, "jane@x.com");
        assert_eq!(submission.message, "Hello there, this is a test.");
    }

    /// Test a message of exactly the minimum length is accepted.
    #[test]
    fn test_message_at_minimum_length() {
        let message = "a".repeat(MIN_MESSAGE_LEN);
        assert!(form("Jane", "jane@x.com", &message).validate().is_ok());
    }

    /// Test notification rendering escapes markup in submitted values.
    #[test]
    fn test_notification_rendering() {
        let submission = form("Jane <script>", "jane@x.com", "Hello there, this is a test.")
            .validate()
            .expect("valid submission");

        assert_eq!(submission.subject(), "New contact form submission from Jane <script>");

        let body = submission.html_body();
        assert!(body.contains("Jane &lt;script&gt;"));
        assert!(body.contains("jane@x.com"));
        assert!(body.contains("Hello there, this is a test."));
        assert!(!body.contains("<script>"));
    }
}
