use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Manages paths for drnu configuration and cached responses
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory (~/.drnu)
    pub root: PathBuf,
    /// Configuration file path (~/.drnu/config.toml)
    pub config_file: PathBuf,
    /// Default cache directory (~/.drnu/cache)
    pub cache_dir: PathBuf,
}

impl Paths {
    /// Create a new Paths instance using the user's home directory
    pub fn new() -> Result<Self> {
        let home = std::env::var("HOME")?;
        Ok(Self::with_root(PathBuf::from(home).join(".drnu")))
    }

    /// Create a Paths instance rooted at an explicit directory
    pub fn with_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            config_file: root.join("config.toml"),
            cache_dir: root.join("cache"),
            root,
        }
    }

    /// Ensure the root directory exists
    pub fn ensure_dirs(&self) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        Ok(())
    }

    /// Check if the config file exists
    pub fn config_exists(&self) -> bool {
        self.config_file.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_root_layout() {
        let paths = Paths::with_root("/tmp/drnu-test");
        assert_eq!(paths.config_file, PathBuf::from("/tmp/drnu-test/config.toml"));
        assert_eq!(paths.cache_dir, PathBuf::from("/tmp/drnu-test/cache"));
    }
}
