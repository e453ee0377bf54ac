//! Shell-out transfer implementation.
//!
//! Invokes the configured download tool (`curl`-compatible) once per URL
//! and the configured upload tool (`anaconda`-compatible) once per file.

use super::ArtifactTransfer;
use crate::error::{ChansyncError, Result};
use async_trait::async_trait;
use std::path::Path;

/// Transfer implementation backed by external command-line tools
pub struct CommandTransfer {
    download_tool: String,
    upload_tool: String,
}

impl CommandTransfer {
    pub fn new(download_tool: &str, upload_tool: &str) -> Self {
        Self {
            download_tool: download_tool.to_string(),
            upload_tool: upload_tool.to_string(),
        }
    }
}

#[async_trait]
impl ArtifactTransfer for CommandTransfer {
    async fn download(&self, url: &str, dest: &Path) -> Result<()> {
        let output = tokio::process::Command::new(&self.download_tool)
            .arg("-L")
            .arg("-sf")
            .arg("-o")
            .arg(dest)
            .arg(url)
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ChansyncError::Tool {
                tool: self.download_tool.clone(),
                message: stderr.trim().to_string(),
            });
        }

        Ok(())
    }

    async fn upload(&self, channel: &str, file: &Path, token: Option<&str>) -> Result<()> {
        let mut cmd = tokio::process::Command::new(&self.upload_tool);

        // Token is a global flag and has to precede the subcommand.
        // When it is absent the upload runs unauthenticated.
        if let Some(token) = token {
            cmd.arg("-t").arg(token);
        }

        cmd.arg("upload")
            .arg("--force")
            .arg("-u")
            .arg(channel)
            .arg(file);

        let output = cmd.output().await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            return Err(ChansyncError::Tool {
                tool: self.upload_tool.clone(),
                message: format!("{}\n{}", stderr.trim(), stdout.trim())
                    .trim()
                    .to_string(),
            });
        }

        Ok(())
    }
}
