//! Backend abstraction for the package manager.
//!
//! The [`Backend`] trait is the only way this crate reaches the outside
//! world: refresh the package index, and run apt-get in simulate mode.
//!
//! # Testing
//!
//! Use [`MockBackend`] to feed canned output and count calls:
//!
//! ```
//! use aptkit::backend::{Backend, MockBackend};
//!
//! let mock = MockBackend::with_output("0 upgraded, 0 newly installed, 0 to remove and 0 not upgraded.");
//! let out = mock.run_simulated(&["--just-print".to_string(), "dist-upgrade".to_string()]).unwrap();
//! assert!(out.contains("0 upgraded"));
//! assert_eq!(mock.simulate_calls(), 1);
//! ```

pub mod apt;

use crate::error::{Error, Result};
use std::sync::{Arc, Mutex};

/// Backend trait for package manager operations.
pub trait Backend: Send + Sync {
    /// Check if the package manager is available.
    fn is_available(&self) -> bool;

    /// Refresh the local package index (`apt-get update`).
    fn refresh_index(&self) -> Result<()>;

    /// Run apt-get with `args` and return its standard output.
    fn run_simulated(&self, args: &[String]) -> Result<String>;
}

#[derive(Debug, Default)]
struct MockState {
    output: String,
    fail_refresh: bool,
    fail_simulate: bool,
    refresh_calls: usize,
    simulate_calls: usize,
    last_args: Option<Vec<String>>,
}

/// In-memory backend that returns canned output and records calls.
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    state: Arc<Mutex<MockState>>,
}

impl MockBackend {
    /// Create a mock that returns empty output.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that returns `output` from every simulation.
    #[must_use]
    pub fn with_output(output: impl Into<String>) -> Self {
        let mock = Self::new();
        mock.lock().output = output.into();
        mock
    }

    /// Make `refresh_index` fail.
    pub fn fail_refresh(&self) {
        self.lock().fail_refresh = true;
    }

    /// Make `run_simulated` fail.
    pub fn fail_simulate(&self) {
        self.lock().fail_simulate = true;
    }

    /// Number of `refresh_index` calls so far.
    pub fn refresh_calls(&self) -> usize {
        self.lock().refresh_calls
    }

    /// Number of `run_simulated` calls so far.
    pub fn simulate_calls(&self) -> usize {
        self.lock().simulate_calls
    }

    /// Arguments of the most recent `run_simulated` call.
    pub fn last_args(&self) -> Option<Vec<String>> {
        self.lock().last_args.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        // A panicking test must not poison the counters for the next assertion
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Backend for MockBackend {
    fn is_available(&self) -> bool {
        true
    }

    fn refresh_index(&self) -> Result<()> {
        let mut state = self.lock();
        state.refresh_calls += 1;
        if state.fail_refresh {
            return Err(Error::RefreshFailed {
                stderr: "E: mock refresh failure".to_string(),
            });
        }
        Ok(())
    }

    fn run_simulated(&self, args: &[String]) -> Result<String> {
        let mut state = self.lock();
        state.simulate_calls += 1;
        state.last_args = Some(args.to_vec());
        if state.fail_simulate {
            return Err(Error::from_apt_output(args, "E: mock simulate failure"));
        }
        Ok(state.output.clone())
    }
}
