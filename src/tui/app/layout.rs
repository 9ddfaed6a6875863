//! Layout helpers for the consult TUI model.
//!
//! The card list gets whatever rows the header, the form, the rating
//! control, and the footer leave over, so the sections revealed by a
//! selection always stay on screen. The list scrolls to keep the cursor
//! inside that window.

use super::ConsultApp;
use crate::tui::components::{CARD_HEIGHT, FORM_HEIGHT, RATING_HEIGHT};

/// Rows above the list: title, description, and a blank line.
const HEADER_HEIGHT: usize = 3;

/// Rows below the list: a blank line, the Back to Home link, and the
/// status bar.
const FOOTER_HEIGHT: usize = 3;

/// Rows for the form and rating control, including the blank line
/// between them.
const DETAIL_HEIGHT: usize = FORM_HEIGHT + 1 + RATING_HEIGHT;

/// Cards shown even when the terminal is too short for the full layout.
const MIN_VISIBLE_CARDS: usize = 1;

impl ConsultApp {
    /// Returns the number of cards that fit between the header and the
    /// sections below the list.
    pub(super) fn visible_card_count(&self) -> usize {
        let detail = if self.has_selection() { DETAIL_HEIGHT } else { 0 };
        let list_rows = usize::from(self.height)
            .saturating_sub(HEADER_HEIGHT)
            .saturating_sub(FOOTER_HEIGHT)
            .saturating_sub(detail);

        list_rows
            .checked_div(CARD_HEIGHT)
            .unwrap_or(0)
            .max(MIN_VISIBLE_CARDS)
    }

    /// Adjusts the scroll offset so the cursor stays visible and the window
    /// does not run past the last card.
    pub(super) fn adjust_scroll_to_cursor(&mut self) {
        let visible = self.visible_card_count();
        let cursor = self.cursor_position;

        if cursor < self.scroll_offset {
            self.scroll_offset = cursor;
        } else if cursor >= self.scroll_offset.saturating_add(visible) {
            self.scroll_offset = cursor.saturating_sub(visible.saturating_sub(1));
        }

        let max_offset = self.professional_count().saturating_sub(visible);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }
}
