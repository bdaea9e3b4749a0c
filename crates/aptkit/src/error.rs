//! Error types for apt simulation.
//!
//! Only two kinds of failure abort an operation: the caller asked for
//! something malformed, or the package manager itself could not be run.
//! Anything odd about the *output* of a successful run is reported on the
//! [`SimulationReport`](crate::SimulationReport) instead.

use thiserror::Error;

/// Categories of fatal errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The request was rejected before apt-get was touched
    InvalidArgument,
    /// Refreshing the index or running the simulation failed
    Collaborator,
}

impl ErrorCategory {
    /// Whether no external command was started before this error was raised.
    pub fn is_fatal_before_execution(&self) -> bool {
        matches!(self, Self::InvalidArgument)
    }

    /// Get a user-friendly description of this error category.
    pub fn description(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "Invalid request",
            Self::Collaborator => "Package manager failure",
        }
    }

    /// Get actionable advice for resolving this error category.
    pub fn advice(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "Pass at least one package name",
            Self::Collaborator => {
                "Check that apt-get works on this host (try `apt-get --just-print dist-upgrade`)"
            }
        }
    }
}

/// Errors that can occur while simulating an apt operation.
#[derive(Debug, Error)]
pub enum Error {
    /// The caller did not identify the packages to install
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// apt-get is not installed or not found in PATH
    #[error("apt-get not found. This tool requires a Debian-family system")]
    AptNotFound,

    /// The simulate-mode command failed
    #[error("command failed: {message}")]
    CommandFailed {
        /// Description of what command failed
        message: String,
        /// Standard error output from the failed command
        stderr: String,
    },

    /// Refreshing the package index failed
    #[error("package index refresh failed: {stderr}")]
    RefreshFailed {
        /// Standard error output from `apt-get update`
        stderr: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Get the error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::InvalidArgument(_) => ErrorCategory::InvalidArgument,
            Error::AptNotFound
            | Error::CommandFailed { .. }
            | Error::RefreshFailed { .. }
            | Error::Io(_) => ErrorCategory::Collaborator,
        }
    }

    /// Build a [`Error::CommandFailed`] from apt-get's stderr.
    pub fn from_apt_output(args: &[String], stderr: &str) -> Self {
        Error::CommandFailed {
            message: format!("apt-get {} exited with an error", args.join(" ")),
            stderr: stderr.trim().to_string(),
        }
    }
}

/// Result type for apt simulation.
pub type Result<T> = std::result::Result<T, Error>;
