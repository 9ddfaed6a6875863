//! Consult library crate for browsing and contacting professionals.
//!
//! The library holds the directory of professionals, the consult screen
//! view-model (selection, contact form, rating), acknowledgment delivery,
//! and the terminal application that presents them.

pub mod config;
pub mod directory;
pub mod error;
pub mod logging;
pub mod notify;
pub mod screen;
pub mod tui;

pub use config::ConsultConfig;
pub use directory::{Directory, DirectoryError, Professional};
pub use error::ConsultError;
pub use notify::{Acknowledgment, AcknowledgmentKind, AcknowledgmentTemplates, Notifier};
pub use screen::{ConsultScreen, FormField, FormValidationError};
