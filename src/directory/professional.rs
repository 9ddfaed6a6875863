//! Professional records shown on the consult screen.

use serde::{Deserialize, Serialize};

/// Default edge length, in pixels, of a professional's portrait.
pub const DEFAULT_IMAGE_SIZE: u32 = 200;

/// Highest rating a professional can carry.
pub const MAX_RATING: f64 = 5.0;

const fn default_image_size() -> u32 {
    DEFAULT_IMAGE_SIZE
}

/// Reference to a static portrait asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Asset path, e.g. `/images/1.png`.
    pub path: String,
    /// Display width in pixels.
    #[serde(default = "default_image_size")]
    pub width: u32,
    /// Display height in pixels.
    #[serde(default = "default_image_size")]
    pub height: u32,
}

impl ImageRef {
    /// Creates an image reference with the default portrait dimensions.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            width: DEFAULT_IMAGE_SIZE,
            height: DEFAULT_IMAGE_SIZE,
        }
    }

    /// Returns a one-line caption describing the asset, e.g.
    /// `/images/1.png (200x200)`.
    #[must_use]
    pub fn caption(&self) -> String {
        format!("{} ({}x{})", self.path, self.width, self.height)
    }
}

/// A consultable specialist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Professional {
    /// Unique identifier within a directory.
    pub id: u32,
    /// Display name, e.g. "Dr. Emily Johnson".
    pub name: String,
    /// Specialty label, e.g. "Child Psychiatrist".
    pub specialty: String,
    /// Average rating between 0.0 and 5.0.
    pub rating: f64,
    /// Portrait asset.
    pub image: ImageRef,
    /// Free-text practice location.
    pub location: String,
}

impl Professional {
    /// Returns the rating formatted with one decimal place.
    #[must_use]
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.rating)
    }
}

/// Builds one of the built-in directory entries.
fn entry(
    id: u32,
    name: &str,
    specialty: &str,
    rating: f64,
    image: &str,
    location: &str,
) -> Professional {
    Professional {
        id,
        name: name.to_owned(),
        specialty: specialty.to_owned(),
        rating,
        image: ImageRef::new(image),
        location: location.to_owned(),
    }
}

/// Returns the built-in professionals in display order.
#[must_use]
pub fn builtin_professionals() -> Vec<Professional> {
    vec![
        entry(
            1,
            "Dr. Emily Johnson",
            "Child Psychiatrist",
            4.8,
            "/images/1.png",
            "123 Main St, Anytown, USA",
        ),
        entry(
            2,
            "Dr. Michael Lee",
            "Developmental Pediatrician",
            4.6,
            "/images/3.jpeg",
            "456 Oak Ave, Somewhere, USA",
        ),
        entry(
            3,
            "Dr. Sarah Thompson",
            "Child Psychologist",
            4.9,
            "/images/2.jpeg",
            "789 Pine Rd, Elsewhere, USA",
        ),
    ]
}
