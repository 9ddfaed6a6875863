//! Modal acknowledgment dialog.
//!
//! The dialog replaces the screen until the user presses a key, the way a
//! browser alert blocks the page underneath.

use unicode_width::UnicodeWidthStr;

use crate::notify::Acknowledgment;

const DISMISS_HINT: &str = "Press any key to continue";

/// Context for rendering the dialog.
#[derive(Debug, Clone)]
pub struct AcknowledgmentDialogViewContext<'a> {
    /// The acknowledgment to show.
    pub acknowledgment: &'a Acknowledgment,
    /// Available terminal width.
    pub max_width: usize,
}

/// Component for the boxed acknowledgment dialog.
#[derive(Debug, Clone, Default)]
pub struct AcknowledgmentDialogComponent;

impl AcknowledgmentDialogComponent {
    /// Creates a new dialog component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the acknowledgment text and dismiss hint inside a box.
    ///
    /// The box grows with the text but never exceeds `max_width`; longer
    /// text is left to the viewport normaliser to clip.
    #[must_use]
    pub fn view(&self, ctx: &AcknowledgmentDialogViewContext<'_>) -> String {
        let text = ctx.acknowledgment.text();
        let content_width = text
            .width()
            .max(DISMISS_HINT.width())
            .min(ctx.max_width.saturating_sub(4).max(1));
        let border = format!("+{}+\n", "-".repeat(content_width.saturating_add(2)));

        let mut output = String::new();
        output.push('\n');
        output.push_str(&border);
        output.push_str(&Self::boxed_line(text, content_width));
        output.push_str(&Self::boxed_line("", content_width));
        output.push_str(&Self::boxed_line(DISMISS_HINT, content_width));
        output.push_str(&border);
        output
    }

    fn boxed_line(text: &str, content_width: usize) -> String {
        let padding = content_width.saturating_sub(text.width());
        format!("| {text}{} |\n", " ".repeat(padding))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::notify::AcknowledgmentKind;

    fn rating_acknowledgment() -> Acknowledgment {
        Acknowledgment::new(
            AcknowledgmentKind::RatingSubmitted {
                professional_id: 1,
                professional: "Dr. Emily Johnson".to_owned(),
                stars: 3,
            },
            "Thank you for rating Dr. Emily Johnson 3 stars!",
        )
    }

    #[rstest]
    fn dialog_boxes_text_and_hint() {
        let acknowledgment = rating_acknowledgment();
        let ctx = AcknowledgmentDialogViewContext {
            acknowledgment: &acknowledgment,
            max_width: 80,
        };

        let output = AcknowledgmentDialogComponent::new().view(&ctx);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            lines,
            vec![
                "",
                "+-------------------------------------------------+",
                "| Thank you for rating Dr. Emily Johnson 3 stars! |",
                "|                                                 |",
                "| Press any key to continue                       |",
                "+-------------------------------------------------+",
            ]
        );
    }

    #[rstest]
    fn lines_share_one_width() {
        let acknowledgment = rating_acknowledgment();
        let ctx = AcknowledgmentDialogViewContext {
            acknowledgment: &acknowledgment,
            max_width: 80,
        };

        let output = AcknowledgmentDialogComponent::new().view(&ctx);
        let widths: Vec<usize> = output
            .lines()
            .skip(1)
            .map(UnicodeWidthStr::width)
            .collect();

        assert!(widths.windows(2).all(|pair| pair.first() == pair.last()));
    }
}
