//! The immutable list of professionals offered for consultation.
//!
//! A [`Directory`] is built once at startup, either from the built-in
//! records or from a JSON file, and never changes afterwards. Construction
//! validates that identifiers are unique and ratings are in range so the
//! screen can rely on both.

use std::collections::HashSet;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

mod error;
mod professional;

pub use error::DirectoryError;
pub use professional::{
    DEFAULT_IMAGE_SIZE, ImageRef, MAX_RATING, Professional, builtin_professionals,
};

/// Ordered, validated collection of professionals.
#[derive(Debug, Clone, PartialEq)]
pub struct Directory {
    professionals: Vec<Professional>,
}

impl Default for Directory {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Directory {
    /// Returns the built-in directory.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            professionals: builtin_professionals(),
        }
    }

    /// Creates a directory from the given professionals, preserving order.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Empty`] when `professionals` is empty,
    /// [`DirectoryError::DuplicateId`] when an identifier repeats, or
    /// [`DirectoryError::RatingOutOfRange`] when a rating is not a finite
    /// value between 0.0 and 5.0.
    pub fn new(professionals: Vec<Professional>) -> Result<Self, DirectoryError> {
        if professionals.is_empty() {
            return Err(DirectoryError::Empty);
        }

        let mut seen = HashSet::with_capacity(professionals.len());
        for professional in &professionals {
            if !seen.insert(professional.id) {
                return Err(DirectoryError::DuplicateId {
                    id: professional.id,
                });
            }
            if !(0.0..=MAX_RATING).contains(&professional.rating) {
                return Err(DirectoryError::RatingOutOfRange {
                    id: professional.id,
                    rating: professional.rating,
                });
            }
        }

        Ok(Self { professionals })
    }

    /// Parses a JSON array of professionals.
    ///
    /// `origin` is only used to label errors.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Parse`] when `source` is not a JSON array
    /// of professionals, or any validation error from [`Directory::new`].
    pub fn from_json(source: &str, origin: &Utf8Path) -> Result<Self, DirectoryError> {
        let professionals: Vec<Professional> =
            serde_json::from_str(source).map_err(|error| DirectoryError::Parse {
                path: origin.to_owned(),
                message: error.to_string(),
            })?;
        Self::new(professionals)
    }

    /// Reads and validates a JSON directory file.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Read`] when the file cannot be opened or
    /// read, and otherwise the errors of [`Directory::from_json`].
    pub fn load(path: &Utf8Path) -> Result<Self, DirectoryError> {
        let read_error = |message: String| DirectoryError::Read {
            path: path.to_owned(),
            message,
        };

        let parent = path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let file_name = path
            .file_name()
            .ok_or_else(|| read_error("path has no file name".to_owned()))?;

        let dir = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(|error| read_error(error.to_string()))?;
        let contents = dir
            .read_to_string(file_name)
            .map_err(|error| read_error(error.to_string()))?;

        let directory = Self::from_json(&contents, path)?;
        tracing::debug!(
            "loaded {} professionals from '{path}'",
            directory.professionals.len()
        );
        Ok(directory)
    }

    /// Returns the professionals in display order.
    #[must_use]
    pub fn professionals(&self) -> &[Professional] {
        &self.professionals
    }

    /// Returns the professional with the given identifier.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Professional> {
        self.professionals.iter().find(|professional| professional.id == id)
    }

    /// Returns the display position of the professional with the given
    /// identifier.
    #[must_use]
    pub fn position(&self, id: u32) -> Option<usize> {
        self.professionals
            .iter()
            .position(|professional| professional.id == id)
    }

    /// Returns the professional at a display position.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&Professional> {
        self.professionals.get(index)
    }

    /// Returns the number of professionals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.professionals.len()
    }

    /// Returns whether the directory is empty.
    ///
    /// Validated directories are never empty; this exists for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.professionals.is_empty()
    }
}

#[cfg(test)]
mod tests;
