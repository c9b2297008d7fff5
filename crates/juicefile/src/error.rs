//! Error types for Juicefile loading and command resolution.
//!
//! Loading problems, unknown command names and unsatisfied placeholders are
//! kept as distinct variants so callers can tell a broken Juicefile apart from
//! a command that simply is not configured.

use std::path::PathBuf;
use thiserror::Error;

/// Categories of Juicefile errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The Juicefile is not well-formed
    Syntax,
    /// The requested command has no template
    NotImplemented,
    /// A template references an argument the caller did not supply
    Argument,
    /// The Juicefile could not be found or read
    Io,
}

impl ErrorCategory {
    /// Get a user-friendly description of this error category.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Syntax => "Invalid Juicefile",
            Self::NotImplemented => "Command not implemented",
            Self::Argument => "Missing argument",
            Self::Io => "Juicefile unavailable",
        }
    }

    /// Get actionable advice for resolving this error category.
    pub fn advice(&self) -> &'static str {
        match self {
            Self::Syntax => "Each command must map to a string or a list of strings",
            Self::NotImplemented => "Add the command to your Juicefile to make it available",
            Self::Argument => "Pass every argument the command template references",
            Self::Io => "Check the path or run the command from inside your project",
        }
    }
}

/// Errors that can occur while loading or resolving command templates.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration document is not well-formed
    #[error("invalid Juicefile{}: {message}", path_suffix(.path))]
    ConfigSyntax {
        /// File the document was read from, if any
        path: Option<PathBuf>,
        /// What was wrong with the document
        message: String,
    },

    /// No template is registered under the requested name
    #[error("command not implemented: {name}")]
    UnknownCommand {
        /// The requested command name
        name: String,
    },

    /// A template references a positional argument that was not supplied
    #[error("missing argument {index} for `{template}` ({supplied} supplied)")]
    MissingArgument {
        /// 1-based index of the first unsatisfied placeholder
        index: usize,
        /// Number of arguments the caller supplied
        supplied: usize,
        /// The template that could not be resolved
        template: String,
    },

    /// No Juicefile at the given path or in any parent directory
    #[error("Juicefile not found: {0}")]
    NotFound(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Get the error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::ConfigSyntax { .. } => ErrorCategory::Syntax,
            Error::UnknownCommand { .. } => ErrorCategory::NotImplemented,
            Error::MissingArgument { .. } => ErrorCategory::Argument,
            Error::NotFound(_) | Error::Io(_) => ErrorCategory::Io,
        }
    }

    /// Whether the requested command is simply not configured.
    pub fn is_not_implemented(&self) -> bool {
        self.category() == ErrorCategory::NotImplemented
    }

    pub(crate) fn syntax(message: impl Into<String>) -> Self {
        Error::ConfigSyntax {
            path: None,
            message: message.into(),
        }
    }

    /// Attach the file path to a syntax error.
    pub(crate) fn at_path(self, path: PathBuf) -> Self {
        match self {
            Error::ConfigSyntax { message, .. } => Error::ConfigSyntax {
                path: Some(path),
                message,
            },
            other => other,
        }
    }
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

/// Result type for Juicefile operations.
pub type Result<T> = std::result::Result<T, Error>;
