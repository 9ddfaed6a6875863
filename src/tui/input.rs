//! Input handling for the TUI application.
//!
//! Keys mean different things depending on what has focus: in a form field
//! every printable character is text, while on the card list letters are
//! commands. [`map_key_to_message_with_context`] resolves a key against the
//! current [`InputContext`].

use crossterm::event::{KeyCode, KeyModifiers};

use super::messages::AppMsg;

/// What currently receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// The home screen.
    Home,
    /// The professional card list.
    List,
    /// A contact form field.
    Form,
    /// The star rating control.
    Rating,
    /// The modal acknowledgment dialog.
    Dialog,
}

/// Maps a key event to an application message for the given context.
///
/// Returns `None` for keys that mean nothing in that context.
#[must_use]
pub fn map_key_to_message_with_context(
    key: &bubbletea_rs::event::KeyMsg,
    context: InputContext,
) -> Option<AppMsg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return map_control_key(key.key);
    }

    match context {
        InputContext::Dialog => Some(AppMsg::DismissAcknowledgment),
        InputContext::Home => map_home_key(key.key),
        InputContext::List => map_list_key(key.key),
        InputContext::Form => map_form_key(key.key),
        InputContext::Rating => map_rating_key(key.key),
    }
}

fn map_control_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char('c') => Some(AppMsg::Quit),
        _ => None,
    }
}

fn map_home_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Enter | KeyCode::Char('c') => Some(AppMsg::OpenConsult),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        KeyCode::Char('q') => Some(AppMsg::Quit),
        _ => None,
    }
}

fn map_list_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::Home | KeyCode::Char('g') => Some(AppMsg::Home),
        KeyCode::End | KeyCode::Char('G') => Some(AppMsg::End),
        KeyCode::Enter | KeyCode::Char(' ') => Some(AppMsg::SelectAtCursor),
        KeyCode::Tab => Some(AppMsg::FocusNext),
        KeyCode::BackTab => Some(AppMsg::FocusPrevious),
        KeyCode::Char('b') => Some(AppMsg::BackToHome),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        KeyCode::Char('q') => Some(AppMsg::Quit),
        _ => None,
    }
}

fn map_form_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Enter => Some(AppMsg::SubmitForm),
        KeyCode::Backspace => Some(AppMsg::Backspace),
        KeyCode::Tab => Some(AppMsg::FocusNext),
        KeyCode::BackTab => Some(AppMsg::FocusPrevious),
        KeyCode::Esc => Some(AppMsg::FocusList),
        KeyCode::Char(character) => Some(AppMsg::InsertChar(character)),
        _ => None,
    }
}

fn map_rating_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Left | KeyCode::Char('h') => Some(AppMsg::StarLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(AppMsg::StarRight),
        KeyCode::Enter | KeyCode::Char(' ') => Some(AppMsg::RateAtCursor),
        KeyCode::Char(digit @ '1'..='5') => digit
            .to_digit(10)
            .and_then(|value| u8::try_from(value).ok())
            .map(AppMsg::Rate),
        KeyCode::Tab => Some(AppMsg::FocusNext),
        KeyCode::BackTab => Some(AppMsg::FocusPrevious),
        KeyCode::Esc => Some(AppMsg::FocusList),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        KeyCode::Char('q') => Some(AppMsg::Quit),
        _ => None,
    }
}
