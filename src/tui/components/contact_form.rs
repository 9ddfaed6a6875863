//! Contact form rendering.

use crate::screen::{ContactFormState, FormField};

/// Width of the label column, wide enough for "Your Message:".
const LABEL_WIDTH: usize = 14;

/// Lines rendered by the form: one per field plus the submit hint.
pub const FORM_HEIGHT: usize = FormField::ALL.len() + 1;

/// Context for rendering the contact form.
#[derive(Debug, Clone)]
pub struct ContactFormViewContext<'a> {
    /// Current field values.
    pub form: &'a ContactFormState,
    /// The field being edited, if the form has focus.
    pub focused: Option<FormField>,
}

/// Component for the consultation request form.
#[derive(Debug, Clone, Default)]
pub struct ContactFormComponent;

impl ContactFormComponent {
    /// Creates a new contact form component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the three inputs and the submit hint.
    ///
    /// Empty inputs show `(required)`. The focused input is prefixed with
    /// `>` and shows a trailing `_` caret.
    #[must_use]
    pub fn view(&self, ctx: &ContactFormViewContext<'_>) -> String {
        let mut output: String = FormField::ALL
            .into_iter()
            .map(|field| Self::format_field(ctx.form.value(field), field, ctx.focused == Some(field)))
            .collect();
        output.push_str("  [Enter] Request Consultation\n");
        output
    }

    fn format_field(value: &str, field: FormField, is_focused: bool) -> String {
        let marker = if is_focused { ">" } else { " " };
        let label = format!("{}:", field.label());
        let shown = match (value.is_empty(), is_focused) {
            (true, true) => "_".to_owned(),
            (true, false) => "(required)".to_owned(),
            (false, true) => format!("{value}_"),
            (false, false) => value.to_owned(),
        };
        format!("{marker} {label:<LABEL_WIDTH$} {shown}\n")
    }
}
