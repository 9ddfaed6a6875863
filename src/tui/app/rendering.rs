//! Rendering logic for the consult TUI application.
//!
//! These are pure query methods that read state without modification.

use super::{ConsultApp, Focus, Route};
use crate::screen::ConsultScreen;
use crate::tui::components::{
    AcknowledgmentDialogComponent, AcknowledgmentDialogViewContext, ContactFormComponent,
    ContactFormViewContext, ProfessionalListComponent, ProfessionalListViewContext,
    StarRatingComponent, StarRatingViewContext,
};

const CONSULT_TITLE: &str = "Consult Professionals";
const CONSULT_DESCRIPTION: &str =
    "Get expert advice from psychiatrists and doctors specializing in autism";

impl ConsultApp {
    /// Renders the home screen with its single link.
    pub(super) fn render_home(&self) -> String {
        format!(
            "Autism Support\n\n> {CONSULT_TITLE}\n  {CONSULT_DESCRIPTION}\n\n{}",
            self.render_status_bar()
        )
    }

    /// Renders the consult screen: header, cards, then the form and rating
    /// control once a professional is selected, then the footer.
    pub(super) fn render_consult(&self, screen: &ConsultScreen) -> String {
        let mut output = Self::render_header();

        let list_ctx = ProfessionalListViewContext {
            professionals: screen.professionals(),
            cursor_position: self.cursor_position,
            scroll_offset: self.scroll_offset,
            visible_cards: self.visible_card_count(),
            selected_id: screen.selected_id(),
            focused: self.focus == Focus::List,
        };
        output.push_str(&ProfessionalListComponent::new().view(&list_ctx));
        output.push('\n');

        if let Some(professional) = screen.selected_professional() {
            let form_ctx = ContactFormViewContext {
                form: screen.form(),
                focused: self.focus.form_field(),
            };
            output.push_str(&ContactFormComponent::new().view(&form_ctx));
            output.push('\n');

            let rating_ctx = StarRatingViewContext {
                professional_name: &professional.name,
                user_rating: screen.user_rating(),
                star_cursor: (self.focus == Focus::Rating).then_some(self.star_cursor),
            };
            output.push_str(&StarRatingComponent::new().view(&rating_ctx));
        }

        output.push_str("  [b] Back to Home\n");
        output.push_str(&self.render_status_bar());
        output
    }

    /// Renders the acknowledgment dialog under the consult header.
    pub(super) fn render_dialog(&self) -> Option<String> {
        let acknowledgment = self.acknowledgment.as_ref()?;
        let ctx = AcknowledgmentDialogViewContext {
            acknowledgment,
            max_width: usize::from(self.width),
        };
        let mut output = Self::render_header();
        output.push_str(&AcknowledgmentDialogComponent::new().view(&ctx));
        Some(output)
    }

    fn render_header() -> String {
        format!("{CONSULT_TITLE}\n{CONSULT_DESCRIPTION}\n\n")
    }

    /// Renders the status bar: the validation hint when a submit was
    /// blocked, otherwise key hints for whatever has focus.
    pub(super) fn render_status_bar(&self) -> String {
        if let Some(hint) = &self.validation_hint {
            return format!("{hint}\n");
        }

        let hints = match (self.route, self.focus) {
            (Route::Home, _) => "Enter:consult  ?:help  q:quit",
            (Route::Consult, _) if !self.has_selection() => {
                "j/k:move  Enter:select  b:home  ?:help  q:quit"
            }
            (Route::Consult, Focus::List) => {
                "j/k:move  Enter:select  Tab:form  b:home  ?:help  q:quit"
            }
            (Route::Consult, Focus::Form(_)) => {
                "type to edit  Enter:send  Tab:next  Esc:list"
            }
            (Route::Consult, Focus::Rating) => "h/l:move  1-5/Enter:rate  Tab:next  Esc:list",
        };
        format!("{hints}\n")
    }

    /// Renders the help overlay.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Professionals:
  j, Down    Move cursor down
  k, Up      Move cursor up
  Home, g    Go to first professional
  End, G     Go to last professional
  Enter      Select professional
  Tab        Move to the contact form

Contact form:
  text keys  Edit the focused field
  Backspace  Delete one character
  Tab        Next field
  Enter      Request consultation
  Esc        Return to professionals

Rating:
  h, Left    Previous star
  l, Right   Next star
  1-5        Rate directly
  Enter      Rate with the highlighted star

Other:
  b          Back to Home
  ?          Toggle this help
  q          Quit

Press any key to close this help.
";
        help_text.to_owned()
    }
}
