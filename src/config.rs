//! Configuration for the accession store.
//!
//! Store root resolution order:
//! 1. Explicit path passed to Config::with_root()
//! 2. ACRE_ROOT environment variable
//! 3. Default: platform data directory (~/.local/share/acre)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Accession store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Root directory for all store data.
    pub store_root: PathBuf,
}

impl Config {
    /// Create a new config with the given store root.
    pub fn with_root(store_root: impl Into<PathBuf>) -> Self {
        Self {
            store_root: store_root.into(),
        }
    }

    /// Load config from the resolved store root, or create a default.
    pub fn load() -> Result<Self> {
        let store_root = resolve_store_root()?;
        Self::load_from(&store_root)
    }

    /// Load config from a specific store root.
    pub fn load_from(store_root: &Path) -> Result<Self> {
        let config_path = store_root.join("config.toml");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let mut config: Config = toml::from_str(&contents)
                .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
            // Ensure store_root matches the actual location
            config.store_root = store_root.to_path_buf();
            Ok(config)
        } else {
            Ok(Self::with_root(store_root))
        }
    }

    /// Save config to <store_root>/config.toml.
    pub fn save(&self) -> Result<()> {
        let config_path = self.store_root.join("config.toml");
        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(config_path, contents)?;
        Ok(())
    }

    /// Path to the DuckDB database file.
    pub fn db_path(&self) -> PathBuf {
        self.store_root.join("db/acre.duckdb")
    }
}

/// Resolve the store root using the standard resolution order.
fn resolve_store_root() -> Result<PathBuf> {
    // 1. Environment variable
    if let Ok(path) = std::env::var("ACRE_ROOT") {
        return Ok(PathBuf::from(path));
    }

    // 2. XDG data directory (via directories crate)
    if let Some(proj_dirs) = ProjectDirs::from("", "", "acre") {
        return Ok(proj_dirs.data_dir().to_path_buf());
    }

    // 3. Fallback to ~/.local/share/acre
    let home = std::env::var("HOME")
        .map_err(|_| Error::Config("Could not determine home directory".to_string()))?;
    Ok(PathBuf::from(home).join(".local/share/acre"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_with_root() {
        let config = Config::with_root("/tmp/test-acre");
        assert_eq!(config.store_root, PathBuf::from("/tmp/test-acre"));
        assert_eq!(
            config.db_path(),
            PathBuf::from("/tmp/test-acre/db/acre.duckdb")
        );
    }

    #[test]
    fn test_config_save_load() {
        let tmp = TempDir::new().unwrap();
        let store_root = tmp.path().to_path_buf();

        let config = Config::with_root(&store_root);
        config.save().unwrap();

        let loaded = Config::load_from(&store_root).unwrap();
        assert_eq!(loaded.store_root, config.store_root);
    }

    #[test]
    fn test_load_from_missing_file_uses_default() {
        let tmp = TempDir::new().unwrap();
        let loaded = Config::load_from(tmp.path()).unwrap();
        assert_eq!(loaded.store_root, tmp.path());
    }
}
