//! Routes and keyboard focus for the consult TUI.

use crate::screen::FormField;

/// The screen currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// The landing screen linking to the consult screen.
    #[default]
    Home,
    /// The "Consult Professionals" screen.
    Consult,
}

/// Which section of the consult screen receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The professional cards.
    #[default]
    List,
    /// One of the contact form inputs.
    Form(FormField),
    /// The star rating control.
    Rating,
}

impl Focus {
    /// Returns the next section in tab order:
    /// list, name, email, message, rating, then back to the list.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::List => Self::Form(FormField::Name),
            Self::Form(field) => match field.next() {
                Some(next) => Self::Form(next),
                None => Self::Rating,
            },
            Self::Rating => Self::List,
        }
    }

    /// Returns the previous section in tab order.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::List => Self::Rating,
            Self::Form(field) => match field.previous() {
                Some(previous) => Self::Form(previous),
                None => Self::List,
            },
            Self::Rating => Self::Form(FormField::Message),
        }
    }

    /// Returns the focused form field, if any.
    #[must_use]
    pub const fn form_field(self) -> Option<FormField> {
        match self {
            Self::Form(field) => Some(field),
            Self::List | Self::Rating => None,
        }
    }
}
