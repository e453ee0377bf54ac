//! Services for channel mirroring

pub mod channel_sync;

pub use channel_sync::{ChannelSyncService, PackageOp, SyncOp, SyncPlan, SyncReport};
