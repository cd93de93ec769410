//! Remote catalog client
//!
//! Fetches the catalog document (a JSON object keyed by content id) and
//! parses it into an in-memory [`Catalog`]. Every call repeats the full
//! fetch and parse; nothing is cached and no timeout is enforced, so a call
//! can stay pending for as long as the network does.

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::Catalog;

/// Catalog URL used when the deployment does not configure its own
pub const DEFAULT_CATALOG_URL: &str =
    "https://storage.googleapis.com/cpe-sample-media/content.json";

/// Catalog fetch error types
#[derive(Error, Debug)]
pub enum TransportError {
    /// The server answered with a non-success HTTP status
    #[error("catalog fetch failed: HTTP {status} {status_text}")]
    Status { status: u16, status_text: String },

    /// The request failed before any HTTP status was available
    #[error("catalog fetch failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body is not the expected JSON document
    #[error("invalid catalog response: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

/// Remote catalog client
pub struct CatalogClient {
    catalog_url: String,
    client: reqwest::Client,
}

impl CatalogClient {
    /// Create a client for the default catalog URL
    pub fn new() -> Self {
        Self::with_url(DEFAULT_CATALOG_URL)
    }

    /// Create a client for a custom catalog URL (deployments, testing)
    pub fn with_url(catalog_url: impl Into<String>) -> Self {
        Self {
            catalog_url: catalog_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// The URL this client fetches
    pub fn catalog_url(&self) -> &str {
        &self.catalog_url
    }

    /// Fetch and parse one fresh catalog snapshot
    pub async fn fetch(&self) -> Result<Catalog, TransportError> {
        self.get_json(&self.catalog_url).await
    }

    /// GET `url` and parse the body as JSON
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, TransportError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        let body = response.text().await?;
        let parsed: T = serde_json::from_str(&body)?;
        Ok(parsed)
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}
