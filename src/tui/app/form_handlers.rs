//! Contact form editing and submission handlers.

use bubbletea_rs::Cmd;

use super::{ConsultApp, Focus};
use crate::tui::messages::AppMsg;

impl ConsultApp {
    /// Dispatches contact form messages to their handlers.
    pub(super) fn handle_form_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::InsertChar(character) => self.handle_insert_char(*character),
            AppMsg::Backspace => self.handle_backspace(),
            AppMsg::SubmitForm => self.handle_submit(),
            _ => {}
        }
        None
    }

    fn handle_insert_char(&mut self, character: char) {
        let Some(field) = self.focus.form_field() else {
            return;
        };
        self.validation_hint = None;
        if let Some(screen) = self.screen.as_mut() {
            screen.form_mut().push_char(field, character);
        }
    }

    fn handle_backspace(&mut self) {
        let Some(field) = self.focus.form_field() else {
            return;
        };
        self.validation_hint = None;
        if let Some(screen) = self.screen.as_mut() {
            screen.form_mut().backspace(field);
        }
    }

    /// Submits the form. A blocked submit leaves the form as typed, shows
    /// the validation message, and focuses the offending field.
    fn handle_submit(&mut self) {
        let Some(screen) = self.screen.as_mut() else {
            return;
        };

        match screen.submit(self.notifier.as_ref()) {
            Ok(Some(acknowledgment)) => {
                self.validation_hint = None;
                self.acknowledgment = Some(acknowledgment);
            }
            Ok(None) => {}
            Err(error) => {
                tracing::debug!(field = %error.field(), "consultation request blocked: {error}");
                self.focus = Focus::Form(error.field());
                self.validation_hint = Some(error.to_string());
            }
        }
    }
}
