//! HTTP source: a single GET for a static cards document.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde_json::Value;
use std::time::Duration;

use crate::source::provider::parse_body;
use crate::source::{DeckSource, LoadError};

pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build HTTP client with timeout ({}), using defaults", e);
                reqwest::Client::new()
            });
        Self { url, client }
    }
}

#[async_trait]
impl DeckSource for HttpSource {
    fn describe(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<Value, LoadError> {
        info!("Fetching deck from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        debug!("Deck response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .status()
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string();
            warn!("Deck fetch failed: {} {}", status, message);
            return Err(LoadError::Status { status, message });
        }

        let body = response
            .text()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;
        parse_body(&body)
    }
}
