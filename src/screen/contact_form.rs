//! Contact form state for requesting a consultation.
//!
//! The form has three required inputs. Only the message is reset after a
//! successful submit; name and email keep whatever the user typed.

use std::fmt;

use thiserror::Error;

/// An input on the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// The requester's name.
    Name,
    /// The requester's email address.
    Email,
    /// The free-text message for the professional.
    Message,
}

impl FormField {
    /// All fields in tab order.
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// Returns the placeholder label shown next to the input.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Your Email",
            Self::Message => "Your Message",
        }
    }

    /// Returns the next field in tab order, or `None` after the message.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Name => Some(Self::Email),
            Self::Email => Some(Self::Message),
            Self::Message => None,
        }
    }

    /// Returns the previous field in tab order, or `None` before the name.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Name => None,
            Self::Email => Some(Self::Name),
            Self::Message => Some(Self::Email),
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validation failures that block a form submission.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormValidationError {
    /// A required field is empty.
    #[error("{field}: Please fill out this field.")]
    MissingField {
        /// The empty field.
        field: FormField,
    },
    /// The email address is not of the form `local@domain`.
    #[error("Your Email: Please include an '@' in the email address. '{value}' is missing an '@' or a part around it.")]
    InvalidEmail {
        /// The rejected value.
        value: String,
    },
}

impl FormValidationError {
    /// Returns the field that failed validation.
    #[must_use]
    pub const fn field(&self) -> FormField {
        match self {
            Self::MissingField { field } => *field,
            Self::InvalidEmail { .. } => FormField::Email,
        }
    }
}

/// Current values of the contact form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    name: String,
    email: String,
    message: String,
}

impl ContactFormState {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value of a field.
    #[must_use]
    pub const fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => self.name.as_str(),
            FormField::Email => self.email.as_str(),
            FormField::Message => self.message.as_str(),
        }
    }

    /// Replaces the value of a field.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
    }

    /// Appends one character to a field.
    pub fn push_char(&mut self, field: FormField, character: char) {
        self.value_mut(field).push(character);
    }

    /// Removes the last character of a field, if any.
    pub fn backspace(&mut self, field: FormField) {
        let _ = self.value_mut(field).pop();
    }

    /// Clears the message, leaving name and email untouched.
    pub fn clear_message(&mut self) {
        self.message.clear();
    }

    /// Checks the required fields in tab order.
    ///
    /// # Errors
    ///
    /// Returns [`FormValidationError::MissingField`] for the first empty
    /// field, or [`FormValidationError::InvalidEmail`] when the email is not
    /// of the form `local@domain`.
    pub fn validate(&self) -> Result<(), FormValidationError> {
        if let Some(field) = FormField::ALL
            .into_iter()
            .find(|field| self.is_missing(*field))
        {
            return Err(FormValidationError::MissingField { field });
        }

        if !is_valid_email(self.email.trim()) {
            return Err(FormValidationError::InvalidEmail {
                value: self.email.clone(),
            });
        }

        Ok(())
    }

    /// Returns whether a required field counts as empty. The email is
    /// trimmed first, as an email input strips surrounding whitespace.
    fn is_missing(&self, field: FormField) -> bool {
        match field {
            FormField::Email => self.email.trim().is_empty(),
            FormField::Name | FormField::Message => self.value(field).is_empty(),
        }
    }

    const fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }
}

/// Accepts `local@domain` with non-empty parts, a single `@`, and no
/// whitespace.
fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
}
