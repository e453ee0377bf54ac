//! Core types for chansync

use serde::{Deserialize, Serialize};
use std::fmt;

/// A (channel, package) pair to mirror from
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageRef {
    /// Channel the package is published on
    pub channel: String,
    /// Package name within the channel
    pub name: String,
}

impl PackageRef {
    pub fn new(channel: &str, name: &str) -> Self {
        Self {
            channel: channel.to_string(),
            name: name.to_string(),
        }
    }
}

impl fmt::Display for PackageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.channel, self.name)
    }
}

/// Latest-version metadata reported by the index for one package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageMetadata {
    /// Most recently published version string
    pub latest_version: String,
    /// Every file the index knows for the package, across versions
    #[serde(default)]
    pub files: Vec<PackageFile>,
}

impl PackageMetadata {
    /// Files belonging to the latest version
    pub fn latest_files(&self) -> Vec<&PackageFile> {
        self.files
            .iter()
            .filter(|f| f.version == self.latest_version)
            .collect()
    }
}

/// One downloadable artifact belonging to a package version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageFile {
    /// Version the file belongs to
    pub version: String,
    /// File name, unique within the version
    pub basename: String,
    /// Direct download URL for the artifact
    pub download_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(version: &str, basename: &str) -> PackageFile {
        PackageFile {
            version: version.to_string(),
            basename: basename.to_string(),
            download_url: format!("https://index.invalid/download/{basename}"),
        }
    }

    #[test]
    fn test_package_ref_display() {
        let pkg = PackageRef::new("upstream", "demo");
        assert_eq!(pkg.to_string(), "upstream/demo");
    }

    #[test]
    fn test_latest_files_filters_by_version() {
        let metadata = PackageMetadata {
            latest_version: "2.0".to_string(),
            files: vec![
                file("1.0", "demo-1.0-linux-64.tar.bz2"),
                file("2.0", "demo-2.0-linux-64.tar.bz2"),
                file("2.0", "demo-2.0-osx-64.tar.bz2"),
            ],
        };

        let latest = metadata.latest_files();
        assert_eq!(latest.len(), 2);
        assert!(latest.iter().all(|f| f.version == "2.0"));
    }

    #[test]
    fn test_metadata_deserializes_without_files() {
        let metadata: PackageMetadata =
            serde_json::from_str(r#"{"latest_version": "0.3.1"}"#).unwrap();
        assert_eq!(metadata.latest_version, "0.3.1");
        assert!(metadata.files.is_empty());
    }
}
