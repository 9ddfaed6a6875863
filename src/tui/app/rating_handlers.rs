//! Star rating handlers.

use bubbletea_rs::Cmd;

use super::ConsultApp;
use crate::screen::{STAR_COUNT, Stars};
use crate::tui::messages::AppMsg;

impl ConsultApp {
    /// Dispatches rating messages to their handlers.
    pub(super) fn handle_rating_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::StarLeft => {
                self.star_cursor = self.star_cursor.saturating_sub(1);
            }
            AppMsg::StarRight => {
                self.star_cursor = self
                    .star_cursor
                    .saturating_add(1)
                    .min(STAR_COUNT.saturating_sub(1));
            }
            AppMsg::RateAtCursor => {
                if let Ok(stars) = Stars::from_index(self.star_cursor) {
                    self.apply_rating(stars);
                }
            }
            AppMsg::Rate(value) => {
                let Ok(stars) = Stars::new(*value) else {
                    tracing::debug!(value, "ignoring out-of-range rating");
                    return None;
                };
                self.star_cursor = stars.index();
                self.apply_rating(stars);
            }
            _ => {}
        }
        None
    }

    fn apply_rating(&mut self, stars: Stars) {
        let Some(screen) = self.screen.as_mut() else {
            return;
        };
        if let Some(acknowledgment) = screen.rate(stars, self.notifier.as_ref()) {
            self.acknowledgment = Some(acknowledgment);
        }
    }
}
