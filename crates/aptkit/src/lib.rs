//! # aptkit
//!
//! Find out what apt-get would do, without doing it.
//!
//! This crate runs `apt-get --just-print` and turns its report into a
//! [`SimulationReport`]:
//! - Summary counts (upgraded, newly installed, to remove, kept back)
//! - Per-package old/new versions from the `Inst`/`Remv` lines
//! - Diagnostics when the two disagree
//!
//! ## Example
//!
//! ```no_run
//! use aptkit::Client;
//!
//! let client = Client::new().expect("apt-get not available");
//!
//! // Everything dist-upgrade would touch, after `apt-get update`
//! let report = client.list_upgrades(true).expect("simulation failed");
//! for (name, t) in &report.packages {
//!     println!("{name}: {:?} -> {:?}", t.old_version, t.new_version);
//! }
//!
//! // What installing two packages would pull in
//! let pkgs = vec!["bash".to_string(), "apt".to_string()];
//! let report = client.list_install(None, false, Some(pkgs.as_slice())).unwrap();
//! if let Some(problems) = &report.diagnostics {
//!     eprintln!("{problems}");
//! }
//! ```
//!
//! Output that is only partly understood never fails an operation; it sets
//! [`SimulationReport::diagnostics`]. Only a bad request or a failing
//! apt-get returns an [`Error`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod error;
pub mod operation;
pub mod parser;
pub mod platform;
pub mod reconcile;
pub mod types;

pub use error::{Error, ErrorCategory, Result};
pub use operation::Operation;
pub use reconcile::{Mismatch, analyze};
pub use types::{PackageTransition, SimulationReport, Summary, SummaryCounts, TransitionKind};

use backend::{Backend, apt::AptBackend};
use std::path::Path;

/// High-level client for simulated apt operations.
pub struct Client {
    backend: Box<dyn Backend>,
}

impl Client {
    /// Create a new Client backed by `apt-get` from PATH.
    ///
    /// Returns an error if apt-get is not installed.
    pub fn new() -> Result<Self> {
        let backend = AptBackend::new()?;
        Ok(Self {
            backend: Box::new(backend),
        })
    }

    /// Create a client for an explicit apt-get path.
    pub fn with_apt_get(path: &Path) -> Result<Self> {
        let backend = AptBackend::with_path(path)?;
        Ok(Self {
            backend: Box::new(backend),
        })
    }

    /// Create a client with a custom backend (useful for testing).
    pub fn with_backend(backend: Box<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Check if apt-get is available.
    pub fn is_available(&self) -> bool {
        self.backend.is_available()
    }

    /// Refresh the package index.
    pub fn refresh(&self) -> Result<()> {
        log::info!("Refreshing package index");
        self.backend.refresh_index()
    }

    /// List everything a dist-upgrade would change.
    pub fn list_upgrades(&self, refresh: bool) -> Result<SimulationReport> {
        if refresh {
            self.refresh()?;
        }
        self.simulate(&Operation::DistUpgrade)
    }

    /// List what installing `pkgs` (or `name`) would change.
    ///
    /// Fails with [`Error::InvalidArgument`] before touching apt-get when
    /// neither identifies a package.
    pub fn list_install(
        &self,
        name: Option<&str>,
        refresh: bool,
        pkgs: Option<&[String]>,
    ) -> Result<SimulationReport> {
        let operation = Operation::from_request(name, pkgs)?;
        if refresh {
            self.refresh()?;
        }
        self.simulate(&operation)
    }

    /// Run one simulated operation and analyze its output.
    pub fn simulate(&self, operation: &Operation) -> Result<SimulationReport> {
        log::debug!("Simulating {}", operation.describe());
        let output = self.backend.run_simulated(&operation.args())?;
        Ok(analyze(&output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backend::MockBackend;

    const BOOKWORM: &str = "\
Reading package lists...
Building dependency tree...
Reading state information...
Calculating upgrade...
The following packages will be upgraded:
  apt libapt-pkg6.0
2 upgraded, 1 newly installed, 1 to remove and 0 not upgraded.
Remv wget [1.21.3-1+b2]
Inst libapt-pkg6.0 [2.6.0] (2.6.1 Debian:12.5/stable [amd64])
Inst apt [2.6.0] (2.6.1 Debian:12.5/stable [amd64])
Inst curl (7.88.1-10+deb12u5 Debian:12.5/stable [amd64])
Conf libapt-pkg6.0 (2.6.1 Debian:12.5/stable [amd64])
Conf apt (2.6.1 Debian:12.5/stable [amd64])
Conf curl (7.88.1-10+deb12u5 Debian:12.5/stable [amd64])
";

    fn client(mock: &MockBackend) -> Client {
        Client::with_backend(Box::new(mock.clone()))
    }

    #[test]
    fn test_list_upgrades_refreshes_then_simulates() {
        let mock = MockBackend::with_output(BOOKWORM);
        let report = client(&mock).list_upgrades(true).unwrap();

        assert_eq!(mock.refresh_calls(), 1);
        assert_eq!(mock.simulate_calls(), 1);
        assert_eq!(
            mock.last_args(),
            Some(vec!["--just-print".to_string(), "dist-upgrade".to_string()])
        );
        assert_eq!(report.packages.len(), 4);
        assert!(report.diagnostics.is_none());
    }

    #[test]
    fn test_list_upgrades_without_refresh() {
        let mock = MockBackend::with_output(BOOKWORM);
        client(&mock).list_upgrades(false).unwrap();
        assert_eq!(mock.refresh_calls(), 0);
        assert_eq!(mock.simulate_calls(), 1);
    }

    #[test]
    fn test_list_install_needs_a_name() {
        let mock = MockBackend::with_output(BOOKWORM);
        let err = client(&mock).list_install(None, true, None).unwrap_err();

        assert_eq!(err.category(), ErrorCategory::InvalidArgument);
        assert_eq!(mock.refresh_calls(), 0);
        assert_eq!(mock.simulate_calls(), 0);
    }

    #[test]
    fn test_list_install_passes_names_in_order() {
        let mock = MockBackend::with_output(BOOKWORM);
        let pkgs = vec!["curl".to_string(), "apt".to_string()];
        client(&mock).list_install(None, false, Some(pkgs.as_slice())).unwrap();

        assert_eq!(mock.refresh_calls(), 0);
        assert_eq!(
            mock.last_args(),
            Some(vec![
                "--just-print".to_string(),
                "install".to_string(),
                "curl".to_string(),
                "apt".to_string(),
            ])
        );
    }

    #[test]
    fn test_refresh_failure_is_fatal() {
        let mock = MockBackend::with_output(BOOKWORM);
        mock.fail_refresh();
        let err = client(&mock).list_upgrades(true).unwrap_err();

        assert!(matches!(err, Error::RefreshFailed { .. }));
        assert_eq!(mock.simulate_calls(), 0);
    }

    #[test]
    fn test_simulate_failure_is_fatal() {
        let mock = MockBackend::new();
        mock.fail_simulate();
        let err = client(&mock).list_install(Some("nope"), false, None).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Collaborator);
    }

    #[test]
    fn test_unparseable_output_still_returns_report() {
        let mock = MockBackend::with_output("E: something odd but exit 0\n");
        let report = client(&mock).list_upgrades(false).unwrap();

        assert!(report.summary.counts().is_none());
        assert!(report.packages.is_empty());
        assert!(report.has_diagnostics());
    }
}
