//! Package-index query clients
//!
//! Unified interface for looking up latest-version metadata on the
//! package-index service, one (channel, package) pair at a time.

pub mod http;
pub mod mock;

pub use http::HttpIndexClient;
pub use mock::MockIndexClient;

use crate::error::Result;
use crate::types::PackageMetadata;
use async_trait::async_trait;

/// Package-index client trait
#[async_trait]
pub trait IndexClient: Send + Sync {
    /// Latest-version metadata for a package on a channel
    ///
    /// Returns `Ok(None)` when the index has no such package.
    async fn latest(&self, channel: &str, package: &str) -> Result<Option<PackageMetadata>>;
}
