//! Main TUI application model implementing the MVU pattern.
//!
//! [`ConsultApp`] routes between the home screen and the consult screen.
//! The consult screen's state lives in a [`ConsultScreen`] that is created
//! when the user follows the link from home and dropped when they follow the
//! footer link back, so every visit starts fresh.
//!
//! # Module Structure
//!
//! - `focus`: routes and focus order
//! - `layout`: card window height and scrolling
//! - `navigation`: card cursor and selection
//! - `form_handlers`: contact form editing and submission
//! - `rating_handlers`: star cursor and rating
//! - `routing`: home/consult transitions
//! - `lifecycle_handlers`: startup, dialog, help, quit, resize
//! - `rendering`: view rendering for both routes
//! - `model_impl`: the `bubbletea_rs::Model` implementation

use std::sync::Arc;

use bubbletea_rs::Cmd;

use crate::directory::Directory;
use crate::notify::{Acknowledgment, AcknowledgmentTemplates, Notifier, TracingNotifier};
use crate::screen::ConsultScreen;

use super::messages::AppMsg;

mod focus;
mod form_handlers;
mod layout;
mod lifecycle_handlers;
mod model_impl;
mod navigation;
mod rating_handlers;
mod rendering;
mod routing;

pub use focus::{Focus, Route};

/// Main application model for the consult TUI.
#[derive(Debug, Clone)]
pub struct ConsultApp {
    /// Screen currently shown.
    route: Route,
    /// Professionals handed to each new consult screen.
    directory: Directory,
    /// Acknowledgment wording handed to each new consult screen.
    templates: AcknowledgmentTemplates,
    /// Consult screen state; `Some` only on the consult route.
    screen: Option<ConsultScreen>,
    /// Sink for acknowledgments.
    notifier: Arc<dyn Notifier>,
    /// Position of the card cursor.
    cursor_position: usize,
    /// Index of the first card in the scroll window.
    scroll_offset: usize,
    /// Section receiving keys.
    focus: Focus,
    /// Position of the star cursor on the rating control.
    star_cursor: usize,
    /// Acknowledgment shown in the modal dialog.
    acknowledgment: Option<Acknowledgment>,
    /// Validation message from the last blocked submit.
    validation_hint: Option<String>,
    /// Whether the help overlay is visible.
    show_help: bool,
    /// Terminal dimensions.
    width: u16,
    height: u16,
}

impl ConsultApp {
    /// Creates an application on the home route.
    #[must_use]
    pub fn new(directory: Directory) -> Self {
        Self {
            route: Route::Home,
            directory,
            templates: AcknowledgmentTemplates::default(),
            screen: None,
            notifier: Arc::new(TracingNotifier),
            cursor_position: 0,
            scroll_offset: 0,
            focus: Focus::List,
            star_cursor: 0,
            acknowledgment: None,
            validation_hint: None,
            show_help: false,
            width: 80,
            height: 24,
        }
    }

    /// Replaces the acknowledgment sink.
    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Replaces the acknowledgment wording.
    ///
    /// Applies to consult screens opened afterwards, including one opened
    /// by [`ConsultApp::with_start_route`].
    #[must_use]
    pub fn with_templates(mut self, templates: AcknowledgmentTemplates) -> Self {
        self.templates = templates;
        self
    }

    /// Opens the given route immediately.
    #[must_use]
    pub fn with_start_route(mut self, route: Route) -> Self {
        match route {
            Route::Home => self.go_home(),
            Route::Consult => self.open_consult(),
        }
        self
    }

    /// Returns the route currently shown.
    #[must_use]
    pub const fn route(&self) -> Route {
        self.route
    }

    /// Returns the consult screen state while on the consult route.
    #[must_use]
    pub const fn screen(&self) -> Option<&ConsultScreen> {
        self.screen.as_ref()
    }

    /// Returns the section receiving keys.
    #[must_use]
    pub const fn focus(&self) -> Focus {
        self.focus
    }

    /// Returns the card cursor position.
    #[must_use]
    pub const fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Returns the index of the first card in the scroll window.
    #[must_use]
    pub const fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Returns the star cursor position.
    #[must_use]
    pub const fn star_cursor(&self) -> usize {
        self.star_cursor
    }

    /// Returns the acknowledgment shown in the dialog, if open.
    #[must_use]
    pub const fn acknowledgment(&self) -> Option<&Acknowledgment> {
        self.acknowledgment.as_ref()
    }

    /// Returns the validation message from the last blocked submit.
    #[must_use]
    pub fn validation_hint(&self) -> Option<&str> {
        self.validation_hint.as_deref()
    }

    /// Returns whether the help overlay is visible.
    #[must_use]
    pub const fn is_help_visible(&self) -> bool {
        self.show_help
    }

    /// Returns whether a professional is selected, which reveals the form
    /// and rating control.
    fn has_selection(&self) -> bool {
        self.screen
            .as_ref()
            .is_some_and(|screen| screen.selected_id().is_some())
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This is the core update function. While the acknowledgment dialog is
    /// open, only dismissal and lifecycle messages get through. Everything
    /// else is delegated to a handler per message category.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if self.acknowledgment.is_some() && !msg.passes_modal() {
            return None;
        }
        if msg.is_routing() {
            return self.handle_routing_msg(msg);
        }

        match self.route {
            Route::Consult if msg.is_navigation() || msg.is_selection() => {
                self.handle_navigation_msg(msg)
            }
            Route::Consult if msg.is_focus() => self.handle_focus_msg(msg),
            Route::Consult if msg.is_form() => self.handle_form_msg(msg),
            Route::Consult if msg.is_rating() => self.handle_rating_msg(msg),
            _ => self.handle_lifecycle_msg(msg),
        }
    }

    /// Moves focus between sections. The form and rating control can only
    /// take focus while a professional is selected. Any focus change drops
    /// the hint from the last blocked submit.
    fn handle_focus_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        self.validation_hint = None;
        if !self.has_selection() {
            self.focus = Focus::List;
            return None;
        }
        self.focus = match msg {
            AppMsg::FocusNext => self.focus.next(),
            AppMsg::FocusPrevious => self.focus.previous(),
            _ => Focus::List,
        };
        None
    }
}
