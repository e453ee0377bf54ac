//! Chansync - channel-to-channel package artifact mirroring
//!
//! Chansync compares the latest published version of each configured package
//! between its source channel and a destination channel on a package-index
//! service, and republishes the newest artifacts wherever the two differ.

pub mod config;
pub mod error;
pub mod index;
pub mod services;
pub mod storage;
pub mod transfer;
pub mod types;

// Re-exports for convenience
pub use config::ChansyncConfig;
pub use error::{ChansyncError, Result};
pub use index::{HttpIndexClient, IndexClient, MockIndexClient};
pub use services::{ChannelSyncService, PackageOp, SyncOp, SyncPlan, SyncReport};
pub use storage::ChansyncPaths;
pub use transfer::{ArtifactTransfer, CommandTransfer, MockTransfer, TransferCall};
pub use types::{PackageFile, PackageMetadata, PackageRef};
