//! Detect whether the host is a Debian-family system.

use crate::error::Result;
use std::path::Path;

const OS_RELEASE_PATHS: [&str; 2] = ["/etc/os-release", "/usr/lib/os-release"];

/// The fields of os-release(5) this crate cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OsRelease {
    /// `ID`, e.g. `debian`, `ubuntu`
    pub id: String,
    /// `ID_LIKE`, split on whitespace
    pub id_like: Vec<String>,
    /// `PRETTY_NAME`, if present
    pub pretty_name: Option<String>,
}

impl OsRelease {
    /// Whether this is Debian or derived from it.
    pub fn is_debian_family(&self) -> bool {
        self.id == "debian" || self.id_like.iter().any(|id| id == "debian")
    }
}

/// Parse the contents of an os-release file.
pub fn parse_os_release(content: &str) -> OsRelease {
    let mut release = OsRelease::default();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim().trim_matches(|c: char| c == '"' || c == '\'');

        match key.trim() {
            "ID" => release.id = value.to_lowercase(),
            "ID_LIKE" => {
                release.id_like = value.split_whitespace().map(str::to_lowercase).collect();
            }
            "PRETTY_NAME" => release.pretty_name = Some(value.to_string()),
            _ => {}
        }
    }

    release
}

/// Read and parse an os-release file.
pub fn read_os_release(path: &Path) -> Result<OsRelease> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_os_release(&content))
}

/// Read the host's os-release, if any.
pub fn detect() -> Option<OsRelease> {
    OS_RELEASE_PATHS.iter().find_map(|path| {
        let path = Path::new(path);
        if !path.exists() {
            return None;
        }
        match read_os_release(path) {
            Ok(release) => Some(release),
            Err(e) => {
                log::debug!("Cannot read {}: {e}", path.display());
                None
            }
        }
    })
}

/// Whether the host is a Debian-family system.
pub fn is_debian_family() -> bool {
    detect().is_some_and(|r| r.is_debian_family())
}
