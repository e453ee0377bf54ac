//! Mock ArtifactTransfer implementation for testing
//!
//! Records every download and upload, and can be configured to fail any
//! transfer touching a given basename.

use super::ArtifactTransfer;
use crate::error::{ChansyncError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Record of a call made to the mock transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferCall {
    Download {
        url: String,
        dest: PathBuf,
    },
    Upload {
        channel: String,
        file: PathBuf,
        token: Option<String>,
    },
}

/// A mock implementation of ArtifactTransfer for testing purposes
pub struct MockTransfer {
    fail_basenames: Arc<Mutex<Vec<String>>>,
    /// Track calls for verification
    call_log: Arc<Mutex<Vec<TransferCall>>>,
}

impl MockTransfer {
    pub fn new() -> Self {
        Self {
            fail_basenames: Arc::new(Mutex::new(Vec::new())),
            call_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Fail any transfer whose file matches this basename
    pub fn with_failure(self, basename: &str) -> Self {
        self.fail_basenames
            .lock()
            .unwrap()
            .push(basename.to_string());
        self
    }

    /// Get the call log for verification
    pub fn calls(&self) -> Vec<TransferCall> {
        self.call_log.lock().unwrap().clone()
    }

    /// Download calls only
    pub fn downloads(&self) -> Vec<TransferCall> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, TransferCall::Download { .. }))
            .collect()
    }

    /// Upload calls only
    pub fn uploads(&self) -> Vec<TransferCall> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, TransferCall::Upload { .. }))
            .collect()
    }

    fn should_fail(&self, file: &Path) -> bool {
        let basename = file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        self.fail_basenames.lock().unwrap().contains(&basename)
    }
}

impl Default for MockTransfer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArtifactTransfer for MockTransfer {
    async fn download(&self, url: &str, dest: &Path) -> Result<()> {
        self.call_log.lock().unwrap().push(TransferCall::Download {
            url: url.to_string(),
            dest: dest.to_path_buf(),
        });

        if self.should_fail(dest) {
            return Err(ChansyncError::Tool {
                tool: "mock-download".to_string(),
                message: format!("configured failure for {}", dest.display()),
            });
        }

        Ok(())
    }

    async fn upload(&self, channel: &str, file: &Path, token: Option<&str>) -> Result<()> {
        self.call_log.lock().unwrap().push(TransferCall::Upload {
            channel: channel.to_string(),
            file: file.to_path_buf(),
            token: token.map(ToString::to_string),
        });

        if self.should_fail(file) {
            return Err(ChansyncError::Tool {
                tool: "mock-upload".to_string(),
                message: format!("configured failure for {}", file.display()),
            });
        }

        Ok(())
    }
}
