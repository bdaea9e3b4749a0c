use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths;

/// Settings from `config.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to apt-get; looked up in PATH when unset
    pub apt_get: Option<String>,
    /// Run `apt-get update` before `upgrades`
    pub refresh_upgrades: bool,
    /// Run `apt-get update` before `install`
    pub refresh_install: bool,
    /// Print raw apt-get output when a report has diagnostics
    pub show_raw: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            apt_get: None,
            refresh_upgrades: true,
            refresh_install: false,
            show_raw: false,
        }
    }
}

impl Config {
    /// Load the config file, or defaults if there is none
    pub fn load() -> Result<Self> {
        let path = paths::config_file()?;
        Self::load_from(&path)
    }

    /// Load from an explicit path, or defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Invalid config format in {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Configured apt-get path, with ~ and variables expanded
    pub fn apt_get_path(&self) -> Option<PathBuf> {
        self.apt_get.as_deref().map(paths::expand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.refresh_upgrades);
        assert!(!config.refresh_install);
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "apt_get = \"/usr/bin/apt-get\"\nrefresh_upgrades = false\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.apt_get_path(), Some(PathBuf::from("/usr/bin/apt-get")));
        assert!(!config.refresh_upgrades);
        assert!(!config.show_raw);
    }

    #[test]
    fn test_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "refresh_upgrades = \"sometimes\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid config format"));
    }
}
