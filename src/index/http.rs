//! HTTP package-index client.
//!
//! Queries the index API for the latest published version of a package and
//! the files belonging to it.

use super::IndexClient;
use crate::config::DEFAULT_INDEX_URL;
use crate::error::{ChansyncError, Result};
use crate::types::PackageMetadata;
use async_trait::async_trait;
use std::time::Duration;

/// HTTP client for the package-index API
pub struct HttpIndexClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpIndexClient {
    /// Create a new client against the default index
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_INDEX_URL)
    }

    /// Create a new client with a custom base URL
    /// (useful for self-hosted indexes or testing)
    pub fn with_base_url(base_url: &str) -> Self {
        let http = reqwest::Client::builder()
            .user_agent("chansync/0.2")
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for HttpIndexClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IndexClient for HttpIndexClient {
    async fn latest(&self, channel: &str, package: &str) -> Result<Option<PackageMetadata>> {
        let url = format!(
            "{}/package/{}/{}",
            self.base_url,
            urlencoding::encode(channel),
            urlencoding::encode(package),
        );

        let resp = self.http.get(&url).send().await?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ChansyncError::IndexApi {
                status: status.as_u16(),
                message: body,
            });
        }

        let metadata: PackageMetadata = resp.json().await?;
        Ok(Some(metadata))
    }
}
