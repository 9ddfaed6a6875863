//! Acknowledgment wording rendered with `MiniJinja`.
//!
//! Templates can use the following variables:
//! - `professional`: display name of the selected professional
//! - `stars`: number of stars given (rating template only)

use minijinja::{Environment, Value, context};
use thiserror::Error;

use super::{Acknowledgment, AcknowledgmentKind};
use crate::directory::Professional;

/// Default wording for a submitted contact form.
pub const DEFAULT_CONSULTATION_TEMPLATE: &str = "Consultation request sent to {{ professional }}";

/// Default wording for a submitted rating.
pub const DEFAULT_RATING_TEMPLATE: &str =
    "Thank you for rating {{ professional }} {{ stars }} stars!";

const CONSULTATION_TEMPLATE_NAME: &str = "consultation";
const RATING_TEMPLATE_NAME: &str = "rating";

/// Errors raised while parsing or rendering acknowledgment templates.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TemplateError {
    /// The template source failed to parse.
    #[error("invalid {name} template syntax: {message}")]
    InvalidSyntax {
        /// Which template failed.
        name: &'static str,
        /// Human-readable parser message from `MiniJinja`.
        message: String,
    },
    /// Rendering failed after successful parsing.
    #[error("{name} template rendering failed: {message}")]
    RenderFailed {
        /// Which template failed.
        name: &'static str,
        /// Human-readable rendering failure from `MiniJinja`.
        message: String,
    },
}

/// The pair of templates used to word acknowledgments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcknowledgmentTemplates {
    consultation: String,
    rating: String,
}

impl Default for AcknowledgmentTemplates {
    fn default() -> Self {
        Self {
            consultation: DEFAULT_CONSULTATION_TEMPLATE.to_owned(),
            rating: DEFAULT_RATING_TEMPLATE.to_owned(),
        }
    }
}

impl AcknowledgmentTemplates {
    /// Creates templates after checking that both parse.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::InvalidSyntax`] naming the first template
    /// that fails to parse.
    pub fn new(
        consultation: impl Into<String>,
        rating: impl Into<String>,
    ) -> Result<Self, TemplateError> {
        let templates = Self {
            consultation: consultation.into(),
            rating: rating.into(),
        };
        templates.validate()?;
        Ok(templates)
    }

    fn validate(&self) -> Result<(), TemplateError> {
        let mut environment = new_environment();
        add_template(
            &mut environment,
            CONSULTATION_TEMPLATE_NAME,
            &self.consultation,
        )?;
        add_template(&mut environment, RATING_TEMPLATE_NAME, &self.rating)
    }

    /// Returns the consultation template source.
    #[must_use]
    pub const fn consultation(&self) -> &str {
        self.consultation.as_str()
    }

    /// Returns the rating template source.
    #[must_use]
    pub const fn rating(&self) -> &str {
        self.rating.as_str()
    }

    /// Words the acknowledgment for a submitted contact form.
    #[must_use]
    pub fn consultation_requested(&self, professional: &Professional) -> Acknowledgment {
        let text = render(
            CONSULTATION_TEMPLATE_NAME,
            &self.consultation,
            context! { professional => professional.name.as_str() },
        )
        .unwrap_or_else(|error| {
            tracing::warn!("{error}; using default wording");
            format!("Consultation request sent to {}", professional.name)
        });

        Acknowledgment::new(
            AcknowledgmentKind::ConsultationRequested {
                professional_id: professional.id,
                professional: professional.name.clone(),
            },
            text,
        )
    }

    /// Words the acknowledgment for a submitted rating.
    #[must_use]
    pub fn rating_submitted(&self, professional: &Professional, stars: u8) -> Acknowledgment {
        let text = render(
            RATING_TEMPLATE_NAME,
            &self.rating,
            context! { professional => professional.name.as_str(), stars => stars },
        )
        .unwrap_or_else(|error| {
            tracing::warn!("{error}; using default wording");
            format!("Thank you for rating {} {stars} stars!", professional.name)
        });

        Acknowledgment::new(
            AcknowledgmentKind::RatingSubmitted {
                professional_id: professional.id,
                professional: professional.name.clone(),
                stars,
            },
            text,
        )
    }
}

fn new_environment<'source>() -> Environment<'source> {
    let mut environment = Environment::new();
    environment.set_auto_escape_callback(|_| minijinja::AutoEscape::None);
    environment
}

fn add_template<'source>(
    environment: &mut Environment<'source>,
    name: &'static str,
    source: &'source str,
) -> Result<(), TemplateError> {
    environment
        .add_template(name, source)
        .map_err(|error| TemplateError::InvalidSyntax {
            name,
            message: error.to_string(),
        })
}

fn render(name: &'static str, source: &str, values: Value) -> Result<String, TemplateError> {
    let mut environment = new_environment();
    add_template(&mut environment, name, source)?;

    let template = environment
        .get_template(name)
        .map_err(|error| TemplateError::RenderFailed {
            name,
            message: error.to_string(),
        })?;

    template
        .render(values)
        .map_err(|error| TemplateError::RenderFailed {
            name,
            message: error.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::directory::Directory;

    #[fixture]
    fn emily() -> Professional {
        Directory::builtin()
            .get(1)
            .cloned()
            .expect("built-in professional 1 should exist")
    }

    #[rstest]
    fn default_consultation_wording(emily: Professional) {
        let acknowledgment = AcknowledgmentTemplates::default().consultation_requested(&emily);

        assert_eq!(
            acknowledgment.text(),
            "Consultation request sent to Dr. Emily Johnson"
        );
        assert_eq!(
            acknowledgment.kind(),
            &AcknowledgmentKind::ConsultationRequested {
                professional_id: 1,
                professional: "Dr. Emily Johnson".to_owned(),
            }
        );
    }

    #[rstest]
    fn default_rating_wording(emily: Professional) {
        let acknowledgment = AcknowledgmentTemplates::default().rating_submitted(&emily, 3);

        assert_eq!(
            acknowledgment.text(),
            "Thank you for rating Dr. Emily Johnson 3 stars!"
        );
    }

    #[rstest]
    fn custom_templates_are_rendered(emily: Professional) {
        let templates = AcknowledgmentTemplates::new(
            "Sent to {{ professional | upper }}",
            "{{ stars }}/5 for {{ professional }}",
        )
        .expect("templates should parse");

        assert_eq!(
            templates.consultation_requested(&emily).text(),
            "Sent to DR. EMILY JOHNSON"
        );
        assert_eq!(
            templates.rating_submitted(&emily, 5).text(),
            "5/5 for Dr. Emily Johnson"
        );
    }

    #[rstest]
    fn invalid_template_is_rejected() {
        let result = AcknowledgmentTemplates::new("{{ professional", DEFAULT_RATING_TEMPLATE);

        assert!(
            matches!(
                result,
                Err(TemplateError::InvalidSyntax {
                    name: "consultation",
                    ..
                })
            ),
            "expected syntax error, got {result:?}"
        );
    }

    #[rstest]
    fn render_failure_falls_back_to_default_wording(emily: Professional) {
        // Parses, but fails at render time because the filter is unknown.
        let templates =
            AcknowledgmentTemplates::new(DEFAULT_CONSULTATION_TEMPLATE, "{{ stars | nope }}")
                .expect("template should parse");

        let acknowledgment = templates.rating_submitted(&emily, 4);

        assert_eq!(
            acknowledgment.text(),
            "Thank you for rating Dr. Emily Johnson 4 stars!"
        );
    }
}
