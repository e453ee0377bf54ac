//! Mock IndexClient implementation for testing
//!
//! Configurable per-(channel, package) responses, allowing tests to drive
//! the sync driver without making network calls.

use super::IndexClient;
use crate::error::{ChansyncError, Result};
use crate::types::PackageMetadata;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Default)]
struct MockIndexConfig {
    /// Metadata to return per (channel, package)
    packages: HashMap<(String, String), PackageMetadata>,
    /// API errors to return instead, per (channel, package)
    errors: HashMap<(String, String), (u16, String)>,
}

/// A mock implementation of IndexClient for testing purposes
///
/// Lookups of unconfigured references return `Ok(None)`, matching an index
/// that has never seen the package.
pub struct MockIndexClient {
    config: Arc<Mutex<MockIndexConfig>>,
    /// Track lookups for verification
    call_log: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockIndexClient {
    pub fn new() -> Self {
        Self {
            config: Arc::new(Mutex::new(MockIndexConfig::default())),
            call_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Configure metadata to return for a (channel, package) pair
    pub fn with_package(self, channel: &str, package: &str, metadata: PackageMetadata) -> Self {
        self.config
            .lock()
            .unwrap()
            .packages
            .insert((channel.to_string(), package.to_string()), metadata);
        self
    }

    /// Configure an API error to return for a (channel, package) pair
    pub fn with_error(self, channel: &str, package: &str, status: u16, message: &str) -> Self {
        self.config
            .lock()
            .unwrap()
            .errors
            .insert(
                (channel.to_string(), package.to_string()),
                (status, message.to_string()),
            );
        self
    }

    /// Get the lookup log for verification
    pub fn calls(&self) -> Vec<(String, String)> {
        self.call_log.lock().unwrap().clone()
    }
}

impl Default for MockIndexClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IndexClient for MockIndexClient {
    async fn latest(&self, channel: &str, package: &str) -> Result<Option<PackageMetadata>> {
        let key = (channel.to_string(), package.to_string());
        self.call_log.lock().unwrap().push(key.clone());

        let config = self.config.lock().unwrap();
        if let Some((status, message)) = config.errors.get(&key) {
            return Err(ChansyncError::IndexApi {
                status: *status,
                message: message.clone(),
            });
        }

        Ok(config.packages.get(&key).cloned())
    }
}
