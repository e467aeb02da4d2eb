use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::ACCEPT;
use thiserror::Error;
use url::Url;

use crate::models::{ContactForm, ContactPayload};
use crate::validation::{ValidationError, validate_contact_form};

pub const SUCCESS_MESSAGE: &str =
    "Thank you! Your message has been sent successfully. We'll get back to you within 24 hours.";
pub const ERROR_MESSAGE: &str =
    "Sorry, there was an error sending your message. Please try again or contact us directly.";

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Invalid contact form: {0}")]
    Invalid(#[from] ValidationError),
    #[error("This message is already being sent")]
    Duplicate,
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Contact service rejected the message with status {0}")]
    Rejected(StatusCode),
}

/// Forwards contact messages to the school's messaging endpoint.
///
/// Each distinct message may have one request in flight; a resubmission of
/// the same form while it is pending is refused without reaching upstream.
pub struct ContactRelay {
    client: reqwest::Client,
    url: Arc<Url>,
    timeout: Duration,
    pending: Mutex<HashSet<ContactPayload>>,
}

struct PendingSend<'a> {
    pending: &'a Mutex<HashSet<ContactPayload>>,
    payload: ContactPayload,
}

impl Drop for PendingSend<'_> {
    fn drop(&mut self) {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.payload);
    }
}

impl ContactRelay {
    pub fn new(url: Url, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: Arc::new(url),
            timeout,
            pending: Mutex::new(HashSet::new()),
        }
    }

    pub fn is_pending(&self, form: &ContactForm) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&ContactPayload::from(form))
    }

    fn reserve(&self, payload: ContactPayload) -> Option<PendingSend<'_>> {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if !pending.insert(payload.clone()) {
            return None;
        }
        Some(PendingSend {
            pending: &self.pending,
            payload,
        })
    }

    pub async fn submit(&self, form: &ContactForm) -> Result<(), ContactError> {
        validate_contact_form(form)?;
        let send = self
            .reserve(ContactPayload::from(form))
            .ok_or(ContactError::Duplicate)?;

        let response = self
            .client
            .post(self.url.as_str())
            .header(ACCEPT, "application/json")
            .timeout(self.timeout)
            .json(&send.payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContactError::Rejected(status));
        }
        tracing::info!(%status, "contact message relayed");
        Ok(())
    }
}
