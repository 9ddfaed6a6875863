//! `Model` trait implementation for the consult TUI application.
//!
//! This module contains the `bubbletea_rs::Model` trait implementation for
//! `ConsultApp`, handling initialisation, update dispatch, and view rendering.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};
use unicode_width::UnicodeWidthChar;

use super::{ConsultApp, Focus, Route};
use crate::tui::input::{InputContext, map_key_to_message_with_context};
use crate::tui::messages::AppMsg;

impl Model for ConsultApp {
    fn init() -> (Self, Option<Cmd>) {
        let context = crate::tui::get_startup_context();
        let model = Self::new(context.directory)
            .with_templates(context.templates)
            .with_notifier(context.notifier)
            .with_start_route(context.start_route);

        (model, Some(Self::immediate_init_cmd()))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            let context = self.input_context();
            if let Some(mapped) = map_key_to_message_with_context(key_msg, context) {
                return self.handle_message(&mapped);
            }
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            return self.normalise_viewport(&self.render_help_overlay());
        }
        if let Some(dialog) = self.render_dialog() {
            return self.normalise_viewport(&dialog);
        }

        let output = match (self.route, self.screen.as_ref()) {
            (Route::Consult, Some(screen)) => self.render_consult(screen),
            _ => self.render_home(),
        };
        self.normalise_viewport(&output)
    }
}

impl ConsultApp {
    /// Emits the startup message that triggers the first render cycle.
    fn immediate_init_cmd() -> Cmd {
        Box::pin(async { Some(Box::new(AppMsg::Initialized) as Box<dyn Any + Send>) })
    }

    /// Returns the current input context for context-aware key mapping.
    pub(super) const fn input_context(&self) -> InputContext {
        if self.acknowledgment.is_some() {
            return InputContext::Dialog;
        }
        match (self.route, self.focus) {
            (Route::Home, _) => InputContext::Home,
            (Route::Consult, Focus::List) => InputContext::List,
            (Route::Consult, Focus::Form(_)) => InputContext::Form,
            (Route::Consult, Focus::Rating) => InputContext::Rating,
        }
    }

    /// Normalises the rendered frame to terminal dimensions.
    ///
    /// Rows are clamped to one column less than the terminal width to avoid
    /// autowrap, and padded with spaces so shorter rows clear stale cells
    /// left by the previous frame.
    fn normalise_viewport(&self, output: &str) -> String {
        let safe_width = usize::from(self.width).saturating_sub(1).max(1);
        let height = usize::from(self.height.max(1));

        let mut lines: Vec<String> = output
            .lines()
            .map(|line| pad_or_truncate_line(line, safe_width))
            .collect();
        lines.truncate(height);

        let missing = height.saturating_sub(lines.len());
        let blank = " ".repeat(safe_width);
        lines.extend(std::iter::repeat_with(|| blank.clone()).take(missing));

        let mut normalised = lines.join("\n");
        normalised.push('\n');
        normalised
    }
}

fn pad_or_truncate_line(line: &str, width: usize) -> String {
    let mut output = String::new();
    let mut visible_width = 0usize;

    for ch in line.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if visible_width.saturating_add(char_width) > width {
            break;
        }
        output.push(ch);
        visible_width = visible_width.saturating_add(char_width);
    }

    output.push_str(&" ".repeat(width.saturating_sub(visible_width)));
    output
}
