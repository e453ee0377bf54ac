use std::path::PathBuf;

/// Manages the working directory layout for downloaded artifacts
#[derive(Debug, Clone)]
pub struct ChansyncPaths {
    pub workdir: PathBuf,
    platforms: Vec<String>,
}

impl ChansyncPaths {
    /// Create a new ChansyncPaths instance over the given working directory
    pub fn new(workdir: PathBuf, platforms: Vec<String>) -> Self {
        Self { workdir, platforms }
    }

    /// Create the working directory and its per-platform subdirectories
    /// if they don't exist
    pub async fn ensure_dirs(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.workdir).await?;
        for platform in &self.platforms {
            tokio::fs::create_dir_all(self.platform_dir(platform)).await?;
        }
        Ok(())
    }

    /// Path to a per-platform subdirectory
    pub fn platform_dir(&self, platform: &str) -> PathBuf {
        self.workdir.join(platform)
    }

    /// Download target for an artifact. Files land in the workdir root;
    /// the platform directories are not used to route them.
    pub fn artifact_file(&self, basename: &str) -> PathBuf {
        self.workdir.join(basename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_paths(temp_dir: &TempDir) -> ChansyncPaths {
        ChansyncPaths::new(
            temp_dir.path().join("work"),
            vec!["linux-64".to_string(), "noarch".to_string()],
        )
    }

    #[tokio::test]
    async fn test_ensure_dirs_creates_layout() {
        let temp_dir = TempDir::new().unwrap();
        let paths = test_paths(&temp_dir);

        paths.ensure_dirs().await.unwrap();

        assert!(paths.workdir.is_dir());
        assert!(paths.platform_dir("linux-64").is_dir());
        assert!(paths.platform_dir("noarch").is_dir());
    }

    #[tokio::test]
    async fn test_ensure_dirs_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let paths = test_paths(&temp_dir);

        // Repeated invocation with existing directories must succeed
        paths.ensure_dirs().await.unwrap();
        paths.ensure_dirs().await.unwrap();

        assert!(paths.workdir.is_dir());
    }

    #[test]
    fn test_artifact_file_lands_in_workdir_root() {
        let temp_dir = TempDir::new().unwrap();
        let paths = test_paths(&temp_dir);

        let target = paths.artifact_file("demo-2.0-linux-64.tar.bz2");
        assert_eq!(target.parent(), Some(paths.workdir.as_path()));
    }
}
