//! Path resolution for aptsim
//!
//! # Environment Variables
//!
//! - `APTSIM_CONFIG_DIR` - Override config directory
//!
//! # Path Resolution Priority
//!
//! For config_dir():
//! 1. `APTSIM_CONFIG_DIR` environment variable
//! 2. `XDG_CONFIG_HOME/aptsim` (if set)
//! 3. `~/.config/aptsim`

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Environment variable for config directory override
pub const ENV_CONFIG_DIR: &str = "APTSIM_CONFIG_DIR";

/// Name of the config file inside the config directory
pub const CONFIG_FILE: &str = "config.toml";

/// Get the aptsim config directory path
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir();
    resolve_config_dir(
        std::env::var(ENV_CONFIG_DIR).ok().as_deref(),
        std::env::var("XDG_CONFIG_HOME").ok().as_deref(),
        home.as_deref(),
    )
}

/// Get the path of the config file
pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE))
}

/// Pick the config directory from the override, XDG and home candidates.
fn resolve_config_dir(
    override_dir: Option<&str>,
    xdg_config: Option<&str>,
    home: Option<&Path>,
) -> Result<PathBuf> {
    if let Some(dir) = override_dir.filter(|d| !d.is_empty()) {
        let path = expand(dir);
        log::debug!("Using config dir from {}: {}", ENV_CONFIG_DIR, path.display());
        return Ok(path);
    }

    if let Some(xdg) = xdg_config.filter(|d| !d.is_empty()) {
        let path = PathBuf::from(xdg).join("aptsim");
        log::debug!("Using XDG_CONFIG_HOME: {}", path.display());
        return Ok(path);
    }

    let home = home.context("Could not determine home directory")?;
    let path = home.join(".config").join("aptsim");
    log::debug!("Using default config dir: {}", path.display());
    Ok(path)
}

/// Expand ~ and environment variables in a path string.
pub fn expand(path: &str) -> PathBuf {
    let expanded = shellexpand::full(path).unwrap_or(std::borrow::Cow::Borrowed(path));
    PathBuf::from(expanded.as_ref())
}
