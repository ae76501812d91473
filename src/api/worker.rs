//! HTTP client for the schedule worker.
//!
//! The worker answers `GET <url>` with the schedule snapshot as JSON. Adding
//! `force=1` asks it to bypass its own cache. The client performs exactly one
//! request per call: no retry, no backoff. The next timer tick or user
//! action is the retry.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use schedboard::api::worker::Worker;
//! use schedboard::libs::config::SourceConfig;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let worker = Worker::new(&SourceConfig::default())?;
//! let payload = worker.fetch(false).await?;
//! println!("{} items", payload.items.map(|items| items.len()).unwrap_or(0));
//! # Ok(())
//! # }
//! ```

use crate::libs::config::SourceConfig;
use crate::libs::data_storage::{APP_NAME, APP_VERSION};
use crate::libs::snapshot::RawPayload;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

/// Why a fetch produced no payload.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The worker answered with a non-2xx status.
    #[error("HTTP {0}")]
    Status(u16),
    /// The request never produced a response (DNS, connect, timeout, body read).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The body was not the expected JSON document.
    #[error("malformed response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl SourceError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            SourceError::Status(code) => StatusCode::from_u16(*code).ok(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Worker {
    client: Client,
    url: String,
}

impl Worker {
    pub fn new(config: &SourceConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(format!("{}/{}", APP_NAME, APP_VERSION))
            .build()?;
        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetches one snapshot; `force` bypasses the worker's cache.
    pub async fn fetch(&self, force: bool) -> Result<RawPayload, SourceError> {
        let mut request = self.client.get(&self.url);
        if force {
            request = request.query(&[("force", "1")]);
        }

        debug!(url = %self.url, force, "fetching snapshot");
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let payload: RawPayload = serde_json::from_str(&body)?;
        debug!(status = status.as_u16(), bytes = body.len(), "snapshot received");
        Ok(payload)
    }
}
