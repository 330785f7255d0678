//! Booking cancellation flow
//!
//! Ask for confirmation, POST the cancel request, then turn the outcome into
//! an alert for the user.

use crate::api::{ApiClient, ApiError};
use crate::error::AirbookError;
use crate::notification::AlertKind;

pub const CANCELLED_MESSAGE: &str = "Booking cancelled";
pub const CANCEL_REJECTED_MESSAGE: &str = "Failed to cancel booking";
pub const CANCEL_ERROR_MESSAGE: &str = "Could not cancel booking";

/// Result of one cancellation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelOutcome {
    /// The user did not confirm; no request was sent
    Declined,
    Cancelled,
    /// The backend refused, optionally saying why
    Rejected(Option<String>),
    Failed(ApiError),
}

impl CancelOutcome {
    /// Alert to show for this outcome, if any
    pub fn alert(&self) -> Option<(String, AlertKind)> {
        match self {
            CancelOutcome::Declined => None,
            CancelOutcome::Cancelled => Some((CANCELLED_MESSAGE.to_string(), AlertKind::Success)),
            CancelOutcome::Rejected(message) => Some((
                message
                    .as_deref()
                    .filter(|m| !m.is_empty())
                    .unwrap_or(CANCEL_REJECTED_MESSAGE)
                    .to_string(),
                AlertKind::Danger,
            )),
            CancelOutcome::Failed(_) => Some((CANCEL_ERROR_MESSAGE.to_string(), AlertKind::Danger)),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, CancelOutcome::Cancelled)
    }
}

pub fn confirm_prompt(reference: &str) -> String {
    format!("Cancel booking {reference}?")
}

/// Check a booking reference before it is placed into a URL path
///
/// Only ASCII letters, digits, `-` and `_` are accepted.
pub fn validate_reference(reference: &str) -> Result<&str, AirbookError> {
    let reference = reference.trim();
    if reference.is_empty() {
        return Err(AirbookError::Validation(
            "booking reference is empty".to_string(),
        ));
    }
    if !reference
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AirbookError::Validation(format!(
            "invalid booking reference: {reference}"
        )));
    }
    Ok(reference)
}

/// Run the cancellation flow for `reference`
///
/// `confirm` receives the prompt text and decides whether to go ahead.
pub async fn cancel_booking<F>(client: &ApiClient, reference: &str, confirm: F) -> CancelOutcome
where
    F: FnOnce(&str) -> bool,
{
    if !confirm(&confirm_prompt(reference)) {
        log::debug!("cancellation of {reference} declined");
        return CancelOutcome::Declined;
    }

    match client.cancel_booking(reference).await {
        Ok(response) if response.success => {
            log::info!("booking {reference} cancelled");
            CancelOutcome::Cancelled
        }
        Ok(response) => {
            log::warn!("backend refused to cancel {reference}: {:?}", response.message);
            CancelOutcome::Rejected(response.message)
        }
        Err(e) => {
            log::error!("cancel request for {reference} failed: {e}");
            CancelOutcome::Failed(e)
        }
    }
}

#[cfg(test)]
#[path = "booking_tests.rs"]
mod booking_tests;
