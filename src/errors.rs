//! Error types for the tooling around chains.
//!
//! A chain itself never fails with an error: a step declining to produce a
//! value is represented as `None`. These errors cover what surrounds a run,
//! such as reading configuration, validating it and writing reports.
//!
//! # Example
//!
//! ```rust
//! use shortchain::errors::ChainError;
//!
//! let err = ChainError::validation("repeat must be at least 1");
//! assert_eq!(err.to_string(), "Validation error: repeat must be at least 1");
//!
//! let anyhow_err = err.into_anyhow();
//! assert!(anyhow_err.to_string().contains("repeat"));
//! ```

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Unified error type for configuration, validation and I/O failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    /// File system I/O errors (read, write, permissions, etc.)
    #[error("I/O error: {message}{}", display_path(.path))]
    Io {
        message: String,
        path: Option<PathBuf>,
    },
    /// Configuration file could not be parsed
    #[error("Config error: {message}{}", display_path(.path))]
    Config {
        message: String,
        path: Option<PathBuf>,
    },
    /// A single validation finding
    #[error("Validation error: {message}")]
    Validation { message: String },
    /// A step name that is not in the catalogue
    #[error("Unknown step '{0}'")]
    UnknownStep(String),
    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" (path: {})", p.display()),
        None => String::new(),
    }
}

impl ChainError {
    /// Create an I/O error with a message.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: None,
        }
    }

    /// Create an I/O error with a message and path context.
    pub fn io_with_path(message: impl Into<String>, path: impl AsRef<Path>) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.as_ref().to_path_buf()),
        }
    }

    /// Create a config error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: None,
        }
    }

    /// Create a config error with a message and path context.
    pub fn config_with_path(message: impl Into<String>, path: impl AsRef<Path>) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path.as_ref().to_path_buf()),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }

    /// Convert this error to an anyhow::Error.
    pub fn into_anyhow(self) -> anyhow::Error {
        anyhow::Error::from(self)
    }
}

impl From<io::Error> for ChainError {
    fn from(err: io::Error) -> Self {
        Self::io(err.to_string())
    }
}

/// Format a list of errors for display, one numbered error per line.
///
/// # Example
///
/// ```rust
/// use shortchain::errors::{format_error_list, ChainError};
///
/// let errors = vec![
///     ChainError::UnknownStep("double".into()),
///     ChainError::validation("repeat must be at least 1"),
/// ];
/// let formatted = format_error_list(&errors);
/// assert!(formatted.contains("1. Unknown step 'double'"));
/// assert!(formatted.contains("2. Validation error"));
/// ```
pub fn format_error_list(errors: &[ChainError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, e)| format!("  {}. {}", i + 1, e))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Convert a list of errors to an anyhow::Error with a formatted message.
pub fn errors_to_anyhow(errors: Vec<ChainError>) -> anyhow::Error {
    let mut iter = errors.into_iter();
    match (iter.next(), iter.len()) {
        (None, _) => anyhow::anyhow!("Unknown error (no errors provided)"),
        (Some(only), 0) => only.into_anyhow(),
        (Some(first), _) => {
            let all: Vec<ChainError> = std::iter::once(first).chain(iter).collect();
            anyhow::anyhow!("Multiple errors occurred:\n{}", format_error_list(&all))
        }
    }
}
