//! Errors raised while building a professional directory.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a professional directory.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DirectoryError {
    /// The directory contains no professionals.
    #[error("professional directory is empty")]
    Empty,

    /// Two professionals share the same identifier.
    #[error("duplicate professional id {id}")]
    DuplicateId {
        /// The repeated identifier.
        id: u32,
    },

    /// A professional's rating is not a finite value in `0.0..=5.0`.
    #[error("professional {id} has rating {rating}, expected a value between 0.0 and 5.0")]
    RatingOutOfRange {
        /// Identifier of the offending professional.
        id: u32,
        /// The rejected rating.
        rating: f64,
    },

    /// The directory file could not be read.
    #[error("failed to read professional directory '{path}': {message}")]
    Read {
        /// Path that was being read.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        message: String,
    },

    /// The directory file is not valid JSON for a list of professionals.
    #[error("failed to parse professional directory '{path}': {message}")]
    Parse {
        /// Path that was being parsed.
        path: Utf8PathBuf,
        /// Parser failure from `serde_json`.
        message: String,
    },
}
