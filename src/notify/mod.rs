//! User-facing acknowledgments and the sinks that receive them.
//!
//! The consult screen confirms two actions: a consultation request and a
//! star rating. Each produces an [`Acknowledgment`] that is handed to a
//! [`Notifier`]. The terminal application additionally shows the text in a
//! modal dialog; tests substitute a recording notifier.

use std::fmt;

mod template;

pub use template::{
    AcknowledgmentTemplates, DEFAULT_CONSULTATION_TEMPLATE, DEFAULT_RATING_TEMPLATE, TemplateError,
};

/// What an acknowledgment confirms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcknowledgmentKind {
    /// The contact form was submitted for a professional.
    ConsultationRequested {
        /// Identifier of the selected professional.
        professional_id: u32,
        /// Display name of the selected professional.
        professional: String,
    },
    /// The user rated a professional.
    RatingSubmitted {
        /// Identifier of the selected professional.
        professional_id: u32,
        /// Display name of the selected professional.
        professional: String,
        /// Number of stars given, between 1 and 5.
        stars: u8,
    },
}

impl AcknowledgmentKind {
    /// Returns a short, stable label for logging.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ConsultationRequested { .. } => "consultation_requested",
            Self::RatingSubmitted { .. } => "rating_submitted",
        }
    }

    /// Returns the display name of the professional concerned.
    #[must_use]
    pub fn professional(&self) -> &str {
        match self {
            Self::ConsultationRequested { professional, .. }
            | Self::RatingSubmitted { professional, .. } => professional,
        }
    }
}

/// A confirmation shown to the user after submitting the form or a rating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgment {
    kind: AcknowledgmentKind,
    text: String,
}

impl Acknowledgment {
    /// Creates an acknowledgment with pre-rendered text.
    #[must_use]
    pub fn new(kind: AcknowledgmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Returns what this acknowledgment confirms.
    #[must_use]
    pub const fn kind(&self) -> &AcknowledgmentKind {
        &self.kind
    }

    /// Returns the user-facing text.
    #[must_use]
    pub const fn text(&self) -> &str {
        self.text.as_str()
    }
}

impl fmt::Display for Acknowledgment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A sink that presents acknowledgments to the user.
pub trait Notifier: fmt::Debug + Send + Sync {
    /// Presents an acknowledgment.
    fn notify(&self, acknowledgment: &Acknowledgment);
}

/// Notifier that drops all acknowledgments.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _acknowledgment: &Acknowledgment) {}
}

/// Records acknowledgments through `tracing`.
///
/// The terminal application renders the dialog itself, so this sink only
/// leaves an audit trail in the log file when one is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, acknowledgment: &Acknowledgment) {
        let kind = acknowledgment.kind();
        tracing::info!(
            kind = kind.label(),
            professional = kind.professional(),
            "{}",
            acknowledgment.text()
        );
    }
}

/// Test helpers for capturing acknowledgments.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use std::sync::Mutex;

    use super::{Acknowledgment, Notifier};

    /// Notifier that stores every acknowledgment it receives.
    #[derive(Debug, Default)]
    pub struct RecordingNotifier {
        acknowledgments: Mutex<Vec<Acknowledgment>>,
    }

    impl RecordingNotifier {
        /// Removes and returns the recorded acknowledgments.
        #[must_use]
        pub fn take(&self) -> Vec<Acknowledgment> {
            self.acknowledgments
                .lock()
                .map(|mut recorded| recorded.drain(..).collect())
                .unwrap_or_default()
        }

        /// Returns the text of every recorded acknowledgment.
        #[must_use]
        pub fn texts(&self) -> Vec<String> {
            self.acknowledgments
                .lock()
                .map(|recorded| {
                    recorded
                        .iter()
                        .map(|acknowledgment| acknowledgment.text().to_owned())
                        .collect()
                })
                .unwrap_or_default()
        }

        /// Returns how many acknowledgments were recorded.
        #[must_use]
        pub fn count(&self) -> usize {
            self.acknowledgments
                .lock()
                .map(|recorded| recorded.len())
                .unwrap_or_default()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, acknowledgment: &Acknowledgment) {
            if let Ok(mut recorded) = self.acknowledgments.lock() {
                recorded.push(acknowledgment.clone());
            }
        }
    }
}
