//! Error types for the theming system.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading theme data.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Scheme configuration file was not found.
    #[error("Scheme file not found: {path:?}")]
    SchemeFileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Error parsing a scheme configuration file.
    #[error("Failed to parse scheme file {path:?}: {details}")]
    SchemeParseError {
        /// The path of the file that failed to parse.
        path: PathBuf,
        /// Details about the parse error.
        details: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;
