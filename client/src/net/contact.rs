//! Contact form submission.
//!
//! Client-side (hydrate): a JSON `POST` via `gloo-net`.
//! Server-side (SSR) and native tests: always [`ContactError::Unavailable`],
//! since the form can only be sent from the browser.
//!
//! ERROR HANDLING
//! ==============
//! There is no retry, timeout or cancellation. Any transport failure or
//! non-2xx status is reported once and the caller keeps the form contents.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::{Deserialize, Serialize};

/// JSON body accepted by the form endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("contact request failed: {0}")]
    Network(String),
    #[error("contact endpoint returned status {0}")]
    Status(u16),
    #[error("failed to encode contact submission: {0}")]
    Encode(String),
    #[error("contact form is only available in the browser")]
    Unavailable,
}

/// Classify an HTTP status from the form endpoint.
#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16) -> Result<(), ContactError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ContactError::Status(status))
    }
}

/// Post `submission` as JSON to `endpoint`.
///
/// # Errors
///
/// Returns [`ContactError::Network`] when the request cannot be sent,
/// [`ContactError::Status`] for a non-2xx response, and
/// [`ContactError::Unavailable`] outside the browser.
pub async fn submit_contact_form(endpoint: &str, submission: &ContactSubmission) -> Result<(), ContactError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post(endpoint)
            .header("Accept", "application/json")
            .json(submission)
            .map_err(|e| ContactError::Encode(e.to_string()))?;
        let resp = request
            .send()
            .await
            .map_err(|e| ContactError::Network(e.to_string()))?;
        check_status(resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, submission);
        Err(ContactError::Unavailable)
    }
}
