//! Lifecycle and window handlers for the consult TUI.
//!
//! This module handles startup, terminal resize events, the acknowledgment
//! dialog, and high-level messages such as quit and help toggling.

use bubbletea_rs::Cmd;

use super::ConsultApp;
use crate::tui::messages::AppMsg;

impl ConsultApp {
    /// Dispatches lifecycle and window messages to their handlers.
    ///
    /// Consult-screen messages that reach this point arrived on the home
    /// route and are ignored.
    pub(super) fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Initialized => {
                tracing::debug!(route = ?self.route, "consult TUI started");
                None
            }
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::DismissAcknowledgment => {
                self.acknowledgment = None;
                None
            }
            AppMsg::WindowResized { width, height } => {
                self.width = *width;
                self.height = *height;
                self.adjust_scroll_to_cursor();
                None
            }
            _ => None,
        }
    }
}
