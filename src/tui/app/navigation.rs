//! Card cursor and selection handlers.
//!
//! The cursor only marks which card Enter would select. Selecting a card
//! hands the id to the consult screen, which reveals the form and rating
//! control for that professional.

use bubbletea_rs::Cmd;

use super::{ConsultApp, Focus};
use crate::tui::messages::AppMsg;

impl ConsultApp {
    /// Dispatches cursor and selection messages to their handlers.
    pub(super) fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::CursorUp => self.move_cursor_up(),
            AppMsg::CursorDown => self.move_cursor_down(),
            AppMsg::Home => self.set_cursor(0),
            AppMsg::End => self.set_cursor(self.professional_count().saturating_sub(1)),
            AppMsg::SelectAtCursor => self.select_at_cursor(),
            AppMsg::Select(id) => self.select_professional(*id),
            _ => {}
        }
        None
    }

    pub(super) fn professional_count(&self) -> usize {
        self.screen
            .as_ref()
            .map_or(0, |screen| screen.professionals().len())
    }

    fn move_cursor_up(&mut self) {
        self.set_cursor(self.cursor_position.saturating_sub(1));
    }

    fn move_cursor_down(&mut self) {
        let max_index = self.professional_count().saturating_sub(1);
        self.set_cursor(self.cursor_position.saturating_add(1).min(max_index));
    }

    fn set_cursor(&mut self, position: usize) {
        self.cursor_position = position;
        self.adjust_scroll_to_cursor();
    }

    fn select_at_cursor(&mut self) {
        let id = self
            .screen
            .as_ref()
            .and_then(|screen| screen.directory().at(self.cursor_position))
            .map(|professional| professional.id);
        if let Some(id) = id {
            self.select_professional(id);
        }
    }

    /// Selects a professional and moves the cursor onto its card.
    ///
    /// The revealed form and rating control shrink the card window, so the
    /// scroll offset is recomputed. Unknown ids leave the selection, cursor,
    /// and focus untouched.
    fn select_professional(&mut self, id: u32) {
        let Some(screen) = self.screen.as_mut() else {
            return;
        };
        if !screen.select(id) {
            return;
        }
        if let Some(position) = screen.directory().position(id) {
            self.cursor_position = position;
        }
        self.focus = Focus::List;
        self.validation_hint = None;
        self.adjust_scroll_to_cursor();
    }
}
