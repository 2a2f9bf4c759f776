// src/fetch/http.rs
// =============================================================================
// This module retrieves raw page content over HTTP.
//
// Contract:
// - GET with a per-request timeout
// - a non-success status code is a FetchError, not a response
// - transport failures (timeout, DNS, refused connection) map to typed
//   variants; the call never panics and never raises anything fatal
//
// Every FetchError is absorbed per-URL by the callers; one unreachable host
// never aborts the crawl.
// =============================================================================

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

// A fetched page: the response body plus the content-type header value.
// The extractor only reads the body; the classifier also needs the header.
#[derive(Debug, Clone)]
pub struct Page {
    pub body: String,
    pub content_type: String,
}

// Ways a fetch can fail
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("transport error: {0}")]
    Transport(String),
}

// Categorizes reqwest failures into our taxonomy
impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            FetchError::Timeout
        } else if error.is_builder() {
            // Request never left the process - the URL didn't parse
            FetchError::InvalidUrl(error.to_string())
        } else if error.is_connect() {
            FetchError::Connect(error.to_string())
        } else {
            FetchError::Transport(error.to_string())
        }
    }
}

// Retrieves content for a URL. Object-safe so the orchestrator and the
// classifier can share one implementation behind an Arc.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Page, FetchError>;
}

// Production fetcher backed by a shared reqwest client.
// Cloning reqwest's Client is cheap, so one instance serves every worker.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Builds the fetcher with the per-request timeout from configuration
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Page, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        // Read the header before text() consumes the response
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        let body = response.text().await?;

        Ok(Page { body, content_type })
    }
}
