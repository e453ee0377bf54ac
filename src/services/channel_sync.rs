//! ChannelSyncService - source-to-destination channel mirroring
//!
//! This service implements the per-package check-and-mirror pass:
//! - look up the latest version on the source channel
//! - look up the latest version on the destination channel ("0" when absent)
//! - when the version strings differ, download the latest files and
//!   republish each to the destination
//!
//! References are processed sequentially. A failing reference is logged and
//! skipped, never aborting the run.

use std::sync::Arc;

use crate::error::Result;
use crate::index::IndexClient;
use crate::storage::ChansyncPaths;
use crate::transfer::ArtifactTransfer;
use crate::types::{PackageFile, PackageRef};

/// Version reported for a package the destination has never seen.
/// Never equal to a real version string, so the first sync always proceeds.
pub const ABSENT_VERSION: &str = "0";

/// Sync decision for one package reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOp {
    /// Versions differ: mirror the source's latest files to the destination
    Mirror {
        source_version: String,
        dest_version: String,
        files: Vec<PackageFile>,
    },
    /// Identical version strings, no action needed
    InSync { version: String },
    /// Source lookup failed or found nothing; reference skipped
    Skipped { reason: String },
}

/// Package reference with its sync decision
#[derive(Debug, Clone)]
pub struct PackageOp {
    pub package: PackageRef,
    pub op: SyncOp,
}

/// Decisions for one full pass over the configured references
#[derive(Debug, Clone)]
pub struct SyncPlan {
    /// Channel receiving mirrored artifacts
    pub destination: String,
    /// Per-reference decisions, in configuration order
    pub ops: Vec<PackageOp>,
}

impl SyncPlan {
    /// References that need mirroring
    pub fn to_mirror(&self) -> Vec<&PackageOp> {
        self.ops
            .iter()
            .filter(|entry| matches!(entry.op, SyncOp::Mirror { .. }))
            .collect()
    }

    /// References already in sync
    pub fn in_sync(&self) -> Vec<&PackageOp> {
        self.ops
            .iter()
            .filter(|entry| matches!(entry.op, SyncOp::InSync { .. }))
            .collect()
    }

    /// Check if any transfers are needed
    pub fn has_changes(&self) -> bool {
        !self.to_mirror().is_empty()
    }
}

/// Outcome counts for one pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub mirrored: usize,
    pub in_sync: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Service for mirroring packages from their source channels to one
/// destination channel
pub struct ChannelSyncService {
    index: Arc<dyn IndexClient>,
    transfer: Arc<dyn ArtifactTransfer>,
    paths: ChansyncPaths,
}

impl ChannelSyncService {
    /// Create a new sync service
    pub fn new(
        index: Arc<dyn IndexClient>,
        transfer: Arc<dyn ArtifactTransfer>,
        paths: ChansyncPaths,
    ) -> Self {
        Self {
            index,
            transfer,
            paths,
        }
    }

    /// Compute the sync decision for every reference
    pub async fn plan(&self, packages: &[PackageRef], destination: &str) -> SyncPlan {
        let mut ops = Vec::new();

        for package in packages {
            let op = self.plan_one(package, destination).await;
            ops.push(PackageOp {
                package: package.clone(),
                op,
            });
        }

        SyncPlan {
            destination: destination.to_string(),
            ops,
        }
    }

    async fn plan_one(&self, package: &PackageRef, destination: &str) -> SyncOp {
        let source = match self.index.latest(&package.channel, &package.name).await {
            Ok(Some(metadata)) => metadata,
            Ok(None) => {
                tracing::warn!("{package} not found on source channel, skipping");
                return SyncOp::Skipped {
                    reason: format!("not found on {}", package.channel),
                };
            }
            Err(e) => {
                tracing::warn!("source lookup for {package} failed, skipping: {e}");
                return SyncOp::Skipped {
                    reason: e.to_string(),
                };
            }
        };

        let dest_version = match self.index.latest(destination, &package.name).await {
            Ok(Some(metadata)) => metadata.latest_version,
            Ok(None) => ABSENT_VERSION.to_string(),
            Err(e) => {
                tracing::debug!(
                    "destination lookup for {} failed, treating as unpublished: {e}",
                    package.name
                );
                ABSENT_VERSION.to_string()
            }
        };

        // Plain string inequality: any difference triggers a mirror, even a
        // semantically older source version.
        if source.latest_version == dest_version {
            return SyncOp::InSync {
                version: dest_version,
            };
        }

        let files = source.latest_files().into_iter().cloned().collect();
        SyncOp::Mirror {
            source_version: source.latest_version,
            dest_version,
            files,
        }
    }

    /// Run a full check-and-mirror pass over the references
    ///
    /// Each reference runs to completion (lookups, then transfers) before the
    /// next one starts. With `dry_run`, decisions are computed and logged but
    /// nothing is downloaded or uploaded.
    pub async fn sync(
        &self,
        packages: &[PackageRef],
        destination: &str,
        token: Option<&str>,
        dry_run: bool,
    ) -> SyncReport {
        let mut report = SyncReport::default();

        for package in packages {
            let op = self.plan_one(package, destination).await;
            let entry = PackageOp {
                package: package.clone(),
                op,
            };
            self.apply(&entry, destination, token, dry_run, &mut report)
                .await;
        }

        report
    }

    /// Execute a previously computed plan
    pub async fn execute(&self, plan: &SyncPlan, token: Option<&str>, dry_run: bool) -> SyncReport {
        let mut report = SyncReport::default();

        for entry in &plan.ops {
            self.apply(entry, &plan.destination, token, dry_run, &mut report)
                .await;
        }

        report
    }

    async fn apply(
        &self,
        entry: &PackageOp,
        destination: &str,
        token: Option<&str>,
        dry_run: bool,
        report: &mut SyncReport,
    ) {
        match &entry.op {
            SyncOp::InSync { version } => {
                tracing::debug!("{} already at {version} on {destination}", entry.package);
                report.in_sync += 1;
            }
            SyncOp::Skipped { .. } => {
                report.skipped += 1;
            }
            SyncOp::Mirror {
                source_version,
                dest_version,
                files,
            } => {
                tracing::info!(
                    "Syncing {} {source_version} -> {destination} (destination has {dest_version})",
                    entry.package,
                );

                if dry_run {
                    report.mirrored += 1;
                    return;
                }

                match self.mirror_files(destination, files, token).await {
                    Ok(()) => report.mirrored += 1,
                    Err(e) => {
                        tracing::warn!("sync of {} failed, continuing: {e}", entry.package);
                        report.failed += 1;
                    }
                }
            }
        }
    }

    /// Download every file of the latest version and push each to the
    /// destination, one upload invocation per file
    async fn mirror_files(
        &self,
        destination: &str,
        files: &[PackageFile],
        token: Option<&str>,
    ) -> Result<()> {
        for file in files {
            let dest = self.paths.artifact_file(&file.basename);

            // A leftover from a previous run may share the basename.
            let _ = tokio::fs::remove_file(&dest).await;

            self.transfer.download(&file.download_url, &dest).await?;
            self.transfer.upload(destination, &dest, token).await?;
        }

        Ok(())
    }
}
