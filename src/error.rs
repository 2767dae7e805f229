//! Error type shared by every pipeline stage
//!
//! All failures are terminal: the binary prints the message once and exits
//! with [`crate::exit_codes::FAILURE`]. Nothing is retried.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, PermeationError>;

#[derive(Debug, Error)]
pub enum PermeationError {
    /// Input path does not resolve to an existing file
    #[error("The file '{}' does not exist.", .path.display())]
    NotFound { path: PathBuf },

    /// File exists but has no header, lacks a required column, or holds a broken row
    #[error("The file '{}' is empty or not a valid CSV file: {reason}", .path.display())]
    EmptyOrInvalidFormat { path: PathBuf, reason: String },

    /// Command-line value rejected after parsing
    #[error("{message}")]
    Usage { message: String },

    #[error("Failed to write '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Plot could not be drawn or encoded
    #[error("Failed to render plot '{}': {message}", .path.display())]
    Render { path: PathBuf, message: String },

    /// SVG to PDF conversion failed
    #[error("Failed to convert plot to PDF '{}': {message}", .path.display())]
    Pdf { path: PathBuf, message: String },
}

impl PermeationError {
    pub(crate) fn invalid(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::EmptyOrInvalidFormat {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the command help should follow the diagnostic.
    ///
    /// Argument-level problems (missing input, empty flag) show the help text,
    /// failures deeper in the pipeline do not.
    pub fn shows_help(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Usage { .. })
    }
}
