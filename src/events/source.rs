use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, CACHE_CONTROL, CONTENT_TYPE, PRAGMA};
use serde_json::Value;
use thiserror::Error;
use url::Url;

use super::normalize::NormalizeError;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Unexpected status: {0}")]
    Status(StatusCode),
    #[error("Invalid JSON body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Shape(#[from] NormalizeError),
}

/// Where raw event payloads come from.
pub trait EventSource: Send + Sync {
    fn fetch(&self) -> impl Future<Output = Result<Value, FetchError>> + Send;
}

#[derive(Clone)]
pub struct HttpEventSource {
    client: reqwest::Client,
    url: Arc<Url>,
    timeout: Duration,
}

impl HttpEventSource {
    pub fn new(url: Url, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: Arc::new(url),
            timeout,
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    async fn fetch_json(&self) -> Result<Value, FetchError> {
        let response = self
            .client
            .get(self.url.as_str())
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(%status, "calendar API responded");
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl EventSource for HttpEventSource {
    async fn fetch(&self) -> Result<Value, FetchError> {
        // Dropping the request future on timeout aborts the connection.
        tokio::time::timeout(self.timeout, self.fetch_json())
            .await
            .map_err(|_| FetchError::Timeout(self.timeout))?
    }
}
