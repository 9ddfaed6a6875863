//! Transitions between the home screen and the consult screen.
//!
//! Opening the consult screen always builds a fresh [`ConsultScreen`]; going
//! back home drops it. Nothing typed or rated survives a round trip, and
//! leaving the screen never sends an acknowledgment.

use bubbletea_rs::Cmd;

use super::{ConsultApp, Focus, Route};
use crate::screen::ConsultScreen;
use crate::tui::messages::AppMsg;

impl ConsultApp {
    /// Dispatches routing messages to their handlers.
    pub(super) fn handle_routing_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::OpenConsult if self.route == Route::Consult => {
                tracing::debug!("consult screen already open");
            }
            AppMsg::OpenConsult => self.open_consult(),
            AppMsg::BackToHome => self.go_home(),
            _ => {}
        }
        None
    }

    pub(super) fn open_consult(&mut self) {
        let screen =
            ConsultScreen::new(self.directory.clone()).with_templates(self.templates.clone());
        self.screen = Some(screen);
        self.route = Route::Consult;
        self.reset_consult_view();
        tracing::debug!(professionals = self.directory.len(), "opened consult screen");
    }

    pub(super) fn go_home(&mut self) {
        if self.screen.take().is_some() {
            tracing::debug!("left consult screen");
        }
        self.route = Route::Home;
        self.reset_consult_view();
    }

    fn reset_consult_view(&mut self) {
        self.cursor_position = 0;
        self.scroll_offset = 0;
        self.focus = Focus::List;
        self.star_cursor = 0;
        self.validation_hint = None;
    }
}
