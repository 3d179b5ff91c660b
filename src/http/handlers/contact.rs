//! Contact form submission handler.
//!
//! Policy: once validation passes, the submitter always gets HTTP 200.
//! Delivery failures are an operational concern; they are logged and only
//! reflected as a could-not-notify note in the success message. Every
//! accepted submission is recorded in the log before delivery is attempted.

use axum::extract::State;
use axum::Json;
use tracing::{error, info};

use crate::contact::ContactForm;
use crate::delivery::OutboundEmail;
use crate::http::error::ApiError;
use crate::http::state::AppState;
use crate::http::types::ApiResponse;

/// Success note when no delivery capability is configured.
pub const RECEIVED_DELIVERY_SKIPPED: &str =
    "Message received. Email notifications are not configured, so no notification was sent.";

/// Success note when the owner notification went out.
pub const RECEIVED_AND_NOTIFIED: &str =
    "Message received successfully! I will get back to you soon.";

/// Success note when delivery was attempted but failed.
pub const RECEIVED_NOT_NOTIFIED: &str =
    "Message received, but the owner could not be notified. No action is needed on your part.";

/// Handle a contact form submission.
///
/// Validates the body, records the submission, then attempts delivery
/// exactly once through the configured [`crate::delivery::EmailSender`].
///
/// # Errors
///
/// Returns [`ApiError::Validation`] (HTTP 400) when a validation rule
/// fails; no delivery attempt occurs in that case.
pub async fn contact(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Result<Json<ApiResponse>, ApiError> {
    let submission = form.validate()?;

    info!(
        name = %submission.name,
        email = %submission.email,
        message = %submission.message,
        "contact form submission received"
    );

    let Some(sender) = &state.contact.sender else {
        return Ok(Json(ApiResponse::success(RECEIVED_DELIVERY_SKIPPED)));
    };

    let email = OutboundEmail {
        from: state.contact.from.clone(),
        to: state.contact.recipients.clone(),
        reply_to: submission.email.clone(),
        subject: submission.subject(),
        html: submission.html_body(),
    };

    match sender.send(&email).await {
        Ok(()) => Ok(Json(ApiResponse::success(RECEIVED_AND_NOTIFIED))),
        Err(err) => {
            error!(%err, email = %submission.email, "contact notification delivery failed");
            Ok(Json(ApiResponse::success(RECEIVED_NOT_NOTIFIED)))
        }
    }
}
