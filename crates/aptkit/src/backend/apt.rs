//! Real apt-get backend.

use crate::backend::Backend;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Backend that executes the real `apt-get`.
pub struct AptBackend {
    /// Path to the apt-get executable
    apt_get: PathBuf,
}

impl AptBackend {
    /// Create a new AptBackend using `apt-get` from PATH.
    ///
    /// Returns an error if apt-get is not installed.
    pub fn new() -> Result<Self> {
        let apt_get = which::which("apt-get").map_err(|_| Error::AptNotFound)?;
        log::debug!("Using apt-get at {}", apt_get.display());
        Ok(Self { apt_get })
    }

    /// Create a backend for an explicit apt-get path.
    pub fn with_path(path: impl Into<PathBuf>) -> Result<Self> {
        let apt_get = path.into();
        if !apt_get.exists() {
            return Err(Error::AptNotFound);
        }
        Ok(Self { apt_get })
    }

    /// Path to the apt-get executable in use.
    pub fn path(&self) -> &Path {
        &self.apt_get
    }

    fn run(&self, args: &[String]) -> Result<Output> {
        log::debug!("Running {} {}", self.apt_get.display(), args.join(" "));
        // Summary line phrasing is only stable in the C locale
        Command::new(&self.apt_get)
            .args(args)
            .env("LC_ALL", "C")
            .env("LANG", "C")
            .output()
            .map_err(|e| Error::CommandFailed {
                message: format!("failed to execute {}: {}", self.apt_get.display(), e),
                stderr: String::new(),
            })
    }
}

impl Backend for AptBackend {
    fn is_available(&self) -> bool {
        self.run(&["--version".to_string()])
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    fn refresh_index(&self) -> Result<()> {
        let output = self.run(&["update".to_string()])?;
        if !output.status.success() {
            return Err(Error::RefreshFailed {
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }

    fn run_simulated(&self, args: &[String]) -> Result<String> {
        let output = self.run(args)?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::from_apt_output(args, &stderr));
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        log::debug!("apt-get printed {} lines", stdout.lines().count());
        Ok(stdout)
    }
}
