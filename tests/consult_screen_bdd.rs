//! Behavioural tests for the consult professionals screen.

#![expect(clippy::expect_used, reason = "Test setup invariants")]

#[path = "consult_screen_bdd/mod.rs"]
mod consult_screen_support;

use std::sync::Arc;

use bubbletea_rs::Model;
use bubbletea_rs::event::KeyMsg;
use consult::directory::Directory;
use consult::notify::Notifier;
use consult::notify::test_support::RecordingNotifier;
use consult::screen::FormField;
use consult::tui::messages::AppMsg;
use consult::tui::{ConsultApp, Route};
use consult_screen_support::ConsultState;
use crossterm::event::{KeyCode, KeyModifiers};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[fixture]
fn consult_state() -> ConsultState {
    ConsultState::default()
}

/// Error type for BDD test step failures.
type StepError = &'static str;

/// Result type for BDD test steps.
type StepResult = Result<(), StepError>;

impl ConsultState {
    fn handle(&self, msg: &AppMsg) -> StepResult {
        self.app
            .with_mut(|app| {
                app.handle_message(msg);
            })
            .ok_or("app should be initialised before handling message")
    }

    fn press(&self, code: KeyCode) -> StepResult {
        let key = KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        };
        self.app
            .with_mut(|app| {
                app.update(Box::new(key));
            })
            .ok_or("app should be initialised before pressing keys")
    }

    fn type_text(&self, text: &str) -> StepResult {
        text.chars()
            .try_for_each(|character| self.press(KeyCode::Char(character)))
    }

    fn render_view(&self) -> Result<String, StepError> {
        let view = self
            .app
            .with_ref(ConsultApp::view)
            .ok_or("app should be initialised before rendering view")?;
        self.rendered_view.set(view.clone());
        Ok(view)
    }

    fn recorded_texts(&self) -> Vec<String> {
        self.notifier
            .with_ref(|notifier| notifier.texts())
            .expect("notifier should be initialised")
    }

    fn form_value(&self, field: FormField) -> String {
        self.app
            .with_ref(|app| {
                app.screen()
                    .map(|screen| screen.form().value(field).to_owned())
            })
            .flatten()
            .expect("consult screen should be open")
    }

    fn user_rating(&self) -> u8 {
        self.app
            .with_ref(|app| app.screen().map(consult::ConsultScreen::user_rating))
            .flatten()
            .expect("consult screen should be open")
    }
}

fn unquote(text: &str) -> &str {
    text.trim_matches('"')
}

// Given steps

#[given("the consult screen is open")]
fn given_consult_screen_open(consult_state: &ConsultState) {
    let notifier = Arc::new(RecordingNotifier::default());
    let app = ConsultApp::new(Directory::builtin())
        .with_notifier(Arc::clone(&notifier) as Arc<dyn Notifier>)
        .with_start_route(Route::Consult);
    consult_state.notifier.set(notifier);
    consult_state.app.set(app);
}

#[given("professional {id:u32} is selected")]
fn given_professional_selected(consult_state: &ConsultState, id: u32) -> StepResult {
    consult_state.handle(&AppMsg::Select(id))
}

// When steps

#[when("the user selects professional {id:u32}")]
fn when_user_selects(consult_state: &ConsultState, id: u32) -> StepResult {
    consult_state.handle(&AppMsg::Select(id))
}

#[when("the user fills in name {name}, email {email} and message {message}")]
fn when_user_fills_form(
    consult_state: &ConsultState,
    name: String,
    email: String,
    message: String,
) -> StepResult {
    consult_state.press(KeyCode::Tab)?;
    consult_state.type_text(unquote(&name))?;
    consult_state.press(KeyCode::Tab)?;
    consult_state.type_text(unquote(&email))?;
    consult_state.press(KeyCode::Tab)?;
    consult_state.type_text(unquote(&message))
}

#[when("the user presses Enter")]
fn when_user_presses_enter(consult_state: &ConsultState) -> StepResult {
    consult_state.press(KeyCode::Enter)
}

#[when("the user submits the form")]
fn when_user_submits(consult_state: &ConsultState) -> StepResult {
    consult_state.handle(&AppMsg::SubmitForm)
}

#[when("the user clicks star {index:usize}")]
fn when_user_clicks_star(consult_state: &ConsultState, index: usize) -> StepResult {
    consult_state.press(KeyCode::BackTab)?;
    for _ in 0..index {
        consult_state.press(KeyCode::Right)?;
    }
    consult_state.press(KeyCode::Enter)
}

#[when("the user rates {stars:u8} stars")]
fn when_user_rates(consult_state: &ConsultState, stars: u8) -> StepResult {
    consult_state.handle(&AppMsg::Rate(stars))
}

#[when("the user dismisses the acknowledgment")]
fn when_user_dismisses(consult_state: &ConsultState) -> StepResult {
    consult_state.press(KeyCode::Char(' '))
}

#[when("the user follows the Back to Home link")]
fn when_user_goes_home(consult_state: &ConsultState) -> StepResult {
    consult_state.press(KeyCode::Char('b'))
}

// Then steps

#[then("the view shows {text}")]
fn then_view_shows(consult_state: &ConsultState, text: String) -> StepResult {
    let view = consult_state.render_view()?;
    let expected = unquote(&text);
    assert!(view.contains(expected), "expected {expected:?} in view:\n{view}");
    Ok(())
}

#[then("the view does not show {text}")]
fn then_view_does_not_show(consult_state: &ConsultState, text: String) -> StepResult {
    let view = consult_state.render_view()?;
    let unexpected = unquote(&text);
    assert!(
        !view.contains(unexpected),
        "did not expect {unexpected:?} in view:\n{view}"
    );
    Ok(())
}

#[then("only professional {id:u32} is marked as selected")]
fn then_only_professional_marked(consult_state: &ConsultState, id: u32) -> StepResult {
    let selected = consult_state
        .app
        .with_ref(|app| app.screen().and_then(consult::ConsultScreen::selected_id))
        .flatten();
    assert_eq!(selected, Some(id));

    let view = consult_state.render_view()?;
    let marked = view
        .lines()
        .filter(|line| line.chars().nth(1) == Some('*'))
        .count();
    assert_eq!(marked, 1, "expected exactly one marked card:\n{view}");
    Ok(())
}

#[then("an acknowledgment reads {text}")]
fn then_acknowledgment_reads(consult_state: &ConsultState, text: String) {
    let texts = consult_state.recorded_texts();
    assert_eq!(texts, vec![unquote(&text).to_owned()]);
}

#[then("no acknowledgment is sent")]
fn then_no_acknowledgment(consult_state: &ConsultState) {
    assert!(consult_state.recorded_texts().is_empty());
}

#[then("the message field is empty")]
fn then_message_empty(consult_state: &ConsultState) {
    assert_eq!(consult_state.form_value(FormField::Message), "");
}

#[then("the name field reads {name}")]
fn then_name_reads(consult_state: &ConsultState, name: String) {
    assert_eq!(consult_state.form_value(FormField::Name), unquote(&name));
}

#[then("the user rating is {stars:u8}")]
fn then_user_rating_is(consult_state: &ConsultState, stars: u8) {
    assert_eq!(consult_state.user_rating(), stars);
}

#[then("the home screen is shown")]
fn then_home_screen_shown(consult_state: &ConsultState) {
    let (route, has_screen) = consult_state
        .app
        .with_ref(|app| (app.route(), app.screen().is_some()))
        .expect("app should be initialised");
    assert_eq!(route, Route::Home);
    assert!(!has_screen, "consult screen state should be dropped");
}

// Scenario bindings

#[scenario(path = "tests/features/consult_screen.feature", index = 0)]
fn selecting_reveals_form_and_rating(consult_state: ConsultState) {
    let _ = consult_state;
}

#[scenario(path = "tests/features/consult_screen.feature", index = 1)]
fn consultation_request_acknowledged(consult_state: ConsultState) {
    let _ = consult_state;
}

#[scenario(path = "tests/features/consult_screen.feature", index = 2)]
fn blank_field_blocks_request(consult_state: ConsultState) {
    let _ = consult_state;
}

#[scenario(path = "tests/features/consult_screen.feature", index = 3)]
fn third_star_rates_three(consult_state: ConsultState) {
    let _ = consult_state;
}

#[scenario(path = "tests/features/consult_screen.feature", index = 4)]
fn rating_carries_over(consult_state: ConsultState) {
    let _ = consult_state;
}

#[scenario(path = "tests/features/consult_screen.feature", index = 5)]
fn dialog_blocks_until_key(consult_state: ConsultState) {
    let _ = consult_state;
}

#[scenario(path = "tests/features/consult_screen.feature", index = 6)]
fn back_to_home_is_silent(consult_state: ConsultState) {
    let _ = consult_state;
}
