//! Configuration management for chansync

use crate::error::{ChansyncError, Result};
use crate::types::PackageRef;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default base URL of the package-index API
pub const DEFAULT_INDEX_URL: &str = "https://api.anaconda.org";

/// Tool configuration (config.yaml)
///
/// A missing config file yields the defaults; the default package list is
/// empty, which makes a bare run a no-op.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChansyncConfig {
    /// Base URL of the package-index API
    #[serde(default = "default_index_url")]
    pub index_url: String,

    /// Channel that receives mirrored artifacts
    #[serde(default)]
    pub destination: String,

    /// Working directory downloads land in
    #[serde(default = "default_workdir")]
    pub workdir: PathBuf,

    /// Per-platform subdirectories pre-created under the workdir
    #[serde(default = "default_platforms")]
    pub platforms: Vec<String>,

    /// Download tool, invoked as `<tool> -L -sf -o <dest> <url>`
    #[serde(default = "default_download_tool")]
    pub download_tool: String,

    /// Upload tool, invoked as `<tool> [-t <token>] upload --force -u <channel> <file>`
    #[serde(default = "default_upload_tool")]
    pub upload_tool: String,

    /// Packages to mirror, in order
    #[serde(default)]
    pub packages: Vec<PackageRef>,
}

fn default_index_url() -> String {
    DEFAULT_INDEX_URL.to_string()
}

fn default_workdir() -> PathBuf {
    std::env::temp_dir().join("chansync")
}

fn default_platforms() -> Vec<String> {
    ["linux-64", "osx-64", "win-64", "noarch"]
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

fn default_download_tool() -> String {
    "curl".to_string()
}

fn default_upload_tool() -> String {
    "anaconda".to_string()
}

impl Default for ChansyncConfig {
    fn default() -> Self {
        Self {
            index_url: default_index_url(),
            destination: String::new(),
            workdir: default_workdir(),
            platforms: default_platforms(),
            download_tool: default_download_tool(),
            upload_tool: default_upload_tool(),
            packages: Vec::new(),
        }
    }
}

impl ChansyncConfig {
    /// Load config from a YAML file
    /// Returns defaults if the file doesn't exist
    pub async fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = tokio::fs::read_to_string(path).await?;
        let config: Self = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints the deserializer can't express
    pub fn validate(&self) -> Result<()> {
        if !self.packages.is_empty() && self.destination.is_empty() {
            return Err(ChansyncError::Config(
                "destination channel is required when packages are configured".to_string(),
            ));
        }
        Ok(())
    }

    /// Default config file path, ~/.config/chansync/config.yaml
    pub fn default_path() -> PathBuf {
        let home = std::env::var("HOME").expect("HOME environment variable not set");
        PathBuf::from(home)
            .join(".config")
            .join("chansync")
            .join("config.yaml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_missing_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = ChansyncConfig::load(&temp_dir.path().join("config.yaml"))
            .await
            .unwrap();

        assert_eq!(config.index_url, DEFAULT_INDEX_URL);
        assert_eq!(config.download_tool, "curl");
        assert_eq!(config.upload_tool, "anaconda");
        assert!(config.packages.is_empty());
        assert!(config.platforms.contains(&"noarch".to_string()));
    }

    #[tokio::test]
    async fn test_load_full_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        let yaml = r#"
index_url: "https://index.example.com"
destination: "mirror"
workdir: "/var/tmp/mirror-work"
platforms: ["linux-64"]
download_tool: "wget"
upload_tool: "publish"
packages:
  - channel: upstream
    name: demo
  - channel: upstream
    name: other
"#;
        tokio::fs::write(&path, yaml).await.unwrap();

        let config = ChansyncConfig::load(&path).await.unwrap();
        assert_eq!(config.index_url, "https://index.example.com");
        assert_eq!(config.destination, "mirror");
        assert_eq!(config.workdir, PathBuf::from("/var/tmp/mirror-work"));
        assert_eq!(config.platforms, vec!["linux-64".to_string()]);
        assert_eq!(config.packages.len(), 2);
        assert_eq!(config.packages[0], PackageRef::new("upstream", "demo"));
    }

    #[tokio::test]
    async fn test_load_partial_config_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        let yaml = r#"
destination: "mirror"
packages:
  - channel: upstream
    name: demo
"#;
        tokio::fs::write(&path, yaml).await.unwrap();

        let config = ChansyncConfig::load(&path).await.unwrap();
        assert_eq!(config.index_url, DEFAULT_INDEX_URL);
        assert_eq!(config.download_tool, "curl");
        assert_eq!(config.packages.len(), 1);
    }

    #[tokio::test]
    async fn test_load_rejects_packages_without_destination() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        let yaml = r#"
packages:
  - channel: upstream
    name: demo
"#;
        tokio::fs::write(&path, yaml).await.unwrap();

        let result = ChansyncConfig::load(&path).await;
        assert!(matches!(result, Err(ChansyncError::Config(_))));
    }

    #[tokio::test]
    async fn test_load_surfaces_parse_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        tokio::fs::write(&path, "packages: {not a list}").await.unwrap();

        let result = ChansyncConfig::load(&path).await;
        assert!(matches!(result, Err(ChansyncError::Yaml(_))));
    }
}
