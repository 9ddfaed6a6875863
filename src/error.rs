//! Errors surfaced while starting the consult application.

use thiserror::Error;

use crate::directory::DirectoryError;
use crate::notify::TemplateError;

/// Errors that stop the application before or while the TUI runs.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConsultError {
    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The configured directory file could not be used.
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// A configured acknowledgment template is invalid.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// The terminal program failed.
    #[error("TUI error: {message}")]
    Tui {
        /// Error detail reported by the terminal program.
        message: String,
    },
}
