//! Star ratings: the read-only indicator on each card and the interactive
//! control for the selected professional.

use thiserror::Error;

/// Number of stars in every indicator and rating control.
pub const STAR_COUNT: usize = 5;

/// Returns which of the five stars are filled for `rating`.
///
/// Star `index` is filled iff `index < rating`. The comparison is strict and
/// made against the raw value, so a fractional rating fills the star that
/// contains its fraction (4.8 fills all five).
#[must_use]
pub fn star_fill(rating: f64) -> [bool; STAR_COUNT] {
    std::array::from_fn(|index| u32::try_from(index).is_ok_and(|index| f64::from(index) < rating))
}

/// Errors raised when a star value is outside the control.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum RatingError {
    /// The requested star count is not between 1 and 5.
    #[error("rating must be between 1 and {STAR_COUNT} stars, got {value}")]
    OutOfRange {
        /// The rejected star count.
        value: usize,
    },
}

/// A star count chosen on the rating control, between 1 and 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Stars(u8);

impl Stars {
    /// Creates a star count.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::OutOfRange`] unless `value` is 1 to 5.
    pub fn new(value: u8) -> Result<Self, RatingError> {
        if (1..=5).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RatingError::OutOfRange {
                value: usize::from(value),
            })
        }
    }

    /// Creates the star count for clicking the star at a 0-based position.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::OutOfRange`] unless `index` is 0 to 4.
    pub fn from_index(index: usize) -> Result<Self, RatingError> {
        let value = index.saturating_add(1);
        u8::try_from(value)
            .map_err(|_| RatingError::OutOfRange { value })
            .and_then(Self::new)
    }

    /// Returns the star count.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the 0-based position of the highest filled star.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0).saturating_sub(1)
    }
}
