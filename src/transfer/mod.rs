//! Artifact transfer tools
//!
//! Unified interface over the external command-line tools that move
//! artifacts between the index and the working directory.

pub mod command;
pub mod mock;

pub use command::CommandTransfer;
pub use mock::{MockTransfer, TransferCall};

use crate::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Artifact transfer trait
#[async_trait]
pub trait ArtifactTransfer: Send + Sync {
    /// Download a single artifact by URL to a local file
    async fn download(&self, url: &str, dest: &Path) -> Result<()>;

    /// Upload a local file to a channel, authenticating with the token
    /// when one is available
    async fn upload(&self, channel: &str, file: &Path, token: Option<&str>) -> Result<()>;
}
