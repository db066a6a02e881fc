//! HTTP fetcher implementation
//!
//! This module handles the fetch stage:
//! - Building the HTTP client with timeouts
//! - Retrieving a page body and persisting it to a local path
//! - Classifying transport errors into failure messages
//!
//! The stage is injected into the engine behind the [`PageFetcher`]
//! trait so tests can substitute deterministic fakes without touching the
//! worker-loop logic.

use crate::PipelineError;
use async_trait::async_trait;
use reqwest::Client;
use std::path::Path;
use std::time::Duration;

/// Capability of retrieving a remote resource into a local file
///
/// Implementations must truncate any existing file at `dest` so reruns
/// over the same output directory overwrite rather than append, and must
/// not leave partial content that a retry could not safely overwrite.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_to_file(&self, url: &str, dest: &Path) -> Result<(), PipelineError>;
}

/// Production fetcher backed by a shared `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds the fetcher with the given per-request timeout
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = build_http_client(timeout)?;
        Ok(Self { client })
    }
}

/// Builds an HTTP client with proper configuration
///
/// The input lists this tool consumes are plain domains fetched over
/// `http://`, so unlike a polite crawler the client follows redirects and
/// does not enforce HTTPS.
pub fn build_http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(concat!("pagegrep/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .connect_timeout(timeout)
        .gzip(true)
        .brotli(true)
        .build()
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_to_file(&self, url: &str, dest: &Path) -> Result<(), PipelineError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(PipelineError::Fetch(format!("HTTP {}", status.as_u16())));
        }

        let body = response
            .bytes()
            .await
            .map_err(classify_transport_error)?;

        tokio::fs::write(dest, &body)
            .await
            .map_err(|e| PipelineError::Fetch(format!("write to {}: {}", dest.display(), e)))?;

        Ok(())
    }
}

/// Maps a reqwest error to a fetch failure message
fn classify_transport_error(error: reqwest::Error) -> PipelineError {
    if error.is_timeout() {
        PipelineError::Fetch("Request timeout".to_string())
    } else if error.is_connect() {
        PipelineError::Fetch(format!("Connection error: {}", error))
    } else {
        PipelineError::Fetch(error.to_string())
    }
}
