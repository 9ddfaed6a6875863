//! View-model for the "Consult Professionals" screen.
//!
//! [`ConsultScreen`] owns the three pieces of screen state: the selected
//! professional, the draft contact form, and the rating the user gave. The
//! form and rating control only exist while a professional is selected, so
//! handlers called without a selection do nothing.
//!
//! Selecting a different professional does not reset the rating the user
//! already gave; the control keeps showing the previous value.

use crate::directory::{Directory, Professional};
use crate::notify::{Acknowledgment, AcknowledgmentTemplates, Notifier};

mod contact_form;
mod rating;

pub use contact_form::{ContactFormState, FormField, FormValidationError};
pub use rating::{RatingError, STAR_COUNT, Stars, star_fill};

/// State and handlers of one consult screen instance.
#[derive(Debug, Clone)]
pub struct ConsultScreen {
    directory: Directory,
    templates: AcknowledgmentTemplates,
    selected_id: Option<u32>,
    form: ContactFormState,
    user_rating: u8,
}

impl ConsultScreen {
    /// Creates a screen with nothing selected and an empty form.
    #[must_use]
    pub fn new(directory: Directory) -> Self {
        Self {
            directory,
            templates: AcknowledgmentTemplates::default(),
            selected_id: None,
            form: ContactFormState::new(),
            user_rating: 0,
        }
    }

    /// Replaces the acknowledgment wording.
    #[must_use]
    pub fn with_templates(mut self, templates: AcknowledgmentTemplates) -> Self {
        self.templates = templates;
        self
    }

    /// Returns the professionals in display order.
    #[must_use]
    pub fn professionals(&self) -> &[Professional] {
        self.directory.professionals()
    }

    /// Returns the directory backing this screen.
    #[must_use]
    pub const fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Selects the professional with the given identifier.
    ///
    /// Selecting the current selection again keeps it selected. Unknown
    /// identifiers leave the selection unchanged and return `false`.
    pub fn select(&mut self, id: u32) -> bool {
        if self.directory.get(id).is_none() {
            tracing::debug!("ignoring selection of unknown professional {id}");
            return false;
        }
        self.selected_id = Some(id);
        true
    }

    /// Returns the identifier of the selected professional.
    #[must_use]
    pub const fn selected_id(&self) -> Option<u32> {
        self.selected_id
    }

    /// Returns the selected professional.
    #[must_use]
    pub fn selected_professional(&self) -> Option<&Professional> {
        self.selected_id.and_then(|id| self.directory.get(id))
    }

    /// Returns whether the card for `id` is highlighted.
    #[must_use]
    pub fn is_selected(&self, id: u32) -> bool {
        self.selected_id == Some(id)
    }

    /// Returns whether the contact form is shown.
    #[must_use]
    pub const fn is_form_visible(&self) -> bool {
        self.selected_id.is_some()
    }

    /// Returns whether the rating control is shown.
    #[must_use]
    pub const fn is_rating_visible(&self) -> bool {
        self.selected_id.is_some()
    }

    /// Returns the contact form.
    #[must_use]
    pub const fn form(&self) -> &ContactFormState {
        &self.form
    }

    /// Returns the contact form for editing.
    pub const fn form_mut(&mut self) -> &mut ContactFormState {
        &mut self.form
    }

    /// Sets the requester's name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.set(FormField::Name, name);
    }

    /// Sets the requester's email.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.form.set(FormField::Email, email);
    }

    /// Sets the draft message.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.form.set(FormField::Message, message);
    }

    /// Returns the draft message.
    #[must_use]
    pub const fn message(&self) -> &str {
        self.form.value(FormField::Message)
    }

    /// Returns the rating the user gave, or 0 before any rating.
    #[must_use]
    pub const fn user_rating(&self) -> u8 {
        self.user_rating
    }

    /// Submits the contact form for the selected professional.
    ///
    /// On success the notifier receives the acknowledgment and the message
    /// is cleared; name and email are kept. Without a selection nothing
    /// happens and `Ok(None)` is returned.
    ///
    /// # Errors
    ///
    /// Returns a [`FormValidationError`] when a required field is empty or
    /// the email is malformed. The form is left unchanged and nothing is
    /// sent to the notifier.
    pub fn submit(
        &mut self,
        notifier: &dyn Notifier,
    ) -> Result<Option<Acknowledgment>, FormValidationError> {
        let Some(professional) = self.selected_professional() else {
            tracing::debug!("form submitted without a selected professional");
            return Ok(None);
        };

        self.form.validate()?;

        let acknowledgment = self.templates.consultation_requested(professional);
        notifier.notify(&acknowledgment);
        self.form.clear_message();
        Ok(Some(acknowledgment))
    }

    /// Rates the selected professional.
    ///
    /// Without a selection nothing happens and `None` is returned.
    pub fn rate(&mut self, stars: Stars, notifier: &dyn Notifier) -> Option<Acknowledgment> {
        let Some(professional) = self.selected_professional() else {
            tracing::debug!("rating given without a selected professional");
            return None;
        };

        let acknowledgment = self.templates.rating_submitted(professional, stars.get());
        self.user_rating = stars.get();
        notifier.notify(&acknowledgment);
        Some(acknowledgment)
    }
}

#[cfg(test)]
mod tests;
