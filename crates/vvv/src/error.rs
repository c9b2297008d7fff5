//! Error types for VVV backend operations.

use std::path::PathBuf;
use thiserror::Error;

/// Categories of backend errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The site registry could not be read or written
    Registry,
    /// A vagrant command exited unsuccessfully
    CommandFailed,
    /// Vagrant is not installed
    VagrantNotFound,
    /// Other IO failures
    Io,
}

impl ErrorCategory {
    /// Get a user-friendly description of this error category.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Registry => "Site registry problem",
            Self::CommandFailed => "Vagrant command failed",
            Self::VagrantNotFound => "Vagrant not installed",
            Self::Io => "Filesystem error",
        }
    }

    /// Get actionable advice for resolving this error category.
    pub fn advice(&self) -> &'static str {
        match self {
            Self::Registry => "Fix or remove the registry file and try again",
            Self::CommandFailed => "Run 'tj vm status' to inspect the virtual machine",
            Self::VagrantNotFound => "Install Vagrant from https://www.vagrantup.com",
            Self::Io => "Check the VVV path and its permissions",
        }
    }
}

/// Errors that can occur while talking to the VVV environment.
#[derive(Debug, Error)]
pub enum Error {
    /// VVV installation directory does not exist
    #[error("VVV not found at {0}")]
    VvvNotFound(PathBuf),

    /// Registry document is not valid YAML or has the wrong shape
    #[error("invalid site registry {path}: {message}")]
    Registry {
        /// Registry file
        path: PathBuf,
        /// Description of the problem
        message: String,
    },

    /// Vagrant is not installed or not in PATH
    #[error("Vagrant not found. Install it from https://www.vagrantup.com")]
    VagrantNotFound,

    /// Command execution failed
    #[error("command failed: {message}")]
    CommandFailed {
        /// Description of what command failed
        message: String,
        /// Standard error output from the failed command
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
            Error::Registry { .. } => ErrorCategory::Registry,
            Error::CommandFailed { .. } => ErrorCategory::CommandFailed,
            Error::VagrantNotFound => ErrorCategory::VagrantNotFound,
            Error::VvvNotFound(_) | Error::Io(_) => ErrorCategory::Io,
        }
    }
}

/// Result type for backend operations.
pub type Result<T> = std::result::Result<T, Error>;
