//! Tests for the consult screen view-model.

use mockall::mock;
use rstest::{fixture, rstest};

use super::*;
use crate::notify::test_support::RecordingNotifier;
use crate::notify::{AcknowledgmentKind, NoopNotifier};

mock! {
    pub Acknowledger {}

    impl std::fmt::Debug for Acknowledger {
        fn fmt<'a>(&self, f: &mut std::fmt::Formatter<'a>) -> std::fmt::Result;
    }

    impl Notifier for Acknowledger {
        fn notify(&self, acknowledgment: &Acknowledgment);
    }
}

#[fixture]
fn screen() -> ConsultScreen {
    ConsultScreen::new(Directory::builtin())
}

fn fill_form(screen: &mut ConsultScreen, message: &str) {
    screen.set_name("Alex Parent");
    screen.set_email("alex@example.com");
    screen.set_message(message);
}

#[rstest]
fn nothing_is_selected_initially(screen: ConsultScreen) {
    assert!(screen.selected_professional().is_none());
    assert!(!screen.is_form_visible());
    assert!(!screen.is_rating_visible());
    assert_eq!(screen.user_rating(), 0);
    assert_eq!(screen.professionals().len(), 3);
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
fn selecting_a_card_reveals_form_and_rating_for_it(mut screen: ConsultScreen, #[case] id: u32) {
    assert!(screen.select(id));

    assert!(screen.is_form_visible());
    assert!(screen.is_rating_visible());
    assert_eq!(screen.selected_professional().map(|p| p.id), Some(id));

    let highlighted: Vec<u32> = screen
        .professionals()
        .iter()
        .map(|professional| professional.id)
        .filter(|candidate| screen.is_selected(*candidate))
        .collect();
    assert_eq!(highlighted, vec![id], "only the chosen card is highlighted");
}

#[rstest]
fn reselecting_the_selected_card_keeps_it_selected(mut screen: ConsultScreen) {
    screen.select(2);
    screen.select(2);

    assert_eq!(screen.selected_id(), Some(2));
}

#[rstest]
fn unknown_id_leaves_selection_unchanged(mut screen: ConsultScreen) {
    screen.select(1);

    assert!(!screen.select(42));
    assert_eq!(screen.selected_id(), Some(1));
}

#[rstest]
fn submit_acknowledges_selected_professional_and_clears_message(mut screen: ConsultScreen) {
    let notifier = RecordingNotifier::default();
    screen.select(1);
    fill_form(&mut screen, "Hello");

    let acknowledgment = screen
        .submit(&notifier)
        .expect("form should be valid")
        .expect("a professional is selected");

    assert!(acknowledgment.text().contains("Dr. Emily Johnson"));
    assert_eq!(
        notifier.texts(),
        vec!["Consultation request sent to Dr. Emily Johnson".to_owned()]
    );
    assert_eq!(screen.message(), "");
}

#[rstest]
fn submit_keeps_name_and_email(mut screen: ConsultScreen) {
    screen.select(3);
    fill_form(&mut screen, "Hello");

    screen
        .submit(&NoopNotifier)
        .expect("form should be valid");

    assert_eq!(screen.form().value(FormField::Name), "Alex Parent");
    assert_eq!(screen.form().value(FormField::Email), "alex@example.com");
}

#[rstest]
fn submit_calls_notifier_exactly_once(mut screen: ConsultScreen) {
    let mut notifier = MockAcknowledger::new();
    notifier
        .expect_notify()
        .withf(|acknowledgment| {
            matches!(
                acknowledgment.kind(),
                AcknowledgmentKind::ConsultationRequested {
                    professional_id: 2,
                    ..
                }
            )
        })
        .times(1)
        .return_const(());
    screen.select(2);
    fill_form(&mut screen, "Can we talk next week?");

    let result = screen.submit(&notifier);

    assert!(matches!(result, Ok(Some(_))));
}

#[rstest]
fn invalid_form_blocks_submission_without_acknowledgment(mut screen: ConsultScreen) {
    let mut notifier = MockAcknowledger::new();
    notifier.expect_notify().never();
    screen.select(1);
    screen.set_name("Alex Parent");
    screen.set_message("Hello");

    let result = screen.submit(&notifier);

    assert_eq!(
        result,
        Err(FormValidationError::MissingField {
            field: FormField::Email
        })
    );
    assert_eq!(screen.message(), "Hello", "message survives a blocked submit");
}

#[rstest]
fn submit_without_selection_does_nothing(mut screen: ConsultScreen) {
    let notifier = RecordingNotifier::default();
    fill_form(&mut screen, "Hello");

    assert_eq!(screen.submit(&notifier), Ok(None));
    assert_eq!(notifier.count(), 0);
    assert_eq!(screen.message(), "Hello");
}

#[rstest]
fn clicking_third_star_rates_three(mut screen: ConsultScreen) {
    let notifier = RecordingNotifier::default();
    screen.select(1);

    let stars = Stars::from_index(2).expect("index 2 is a valid star");
    let acknowledgment = screen
        .rate(stars, &notifier)
        .expect("a professional is selected");

    assert_eq!(screen.user_rating(), 3);
    assert!(acknowledgment.text().contains("3 stars"));
    assert_eq!(
        notifier.texts(),
        vec!["Thank you for rating Dr. Emily Johnson 3 stars!".to_owned()]
    );
}

#[rstest]
fn rating_without_selection_does_nothing(mut screen: ConsultScreen) {
    let notifier = RecordingNotifier::default();
    let stars = Stars::new(4).expect("4 is a valid rating");

    assert!(screen.rate(stars, &notifier).is_none());
    assert_eq!(screen.user_rating(), 0);
    assert_eq!(notifier.count(), 0);
}

#[rstest]
fn switching_selection_keeps_previous_rating(mut screen: ConsultScreen) {
    screen.select(1);
    let stars = Stars::new(4).expect("4 is a valid rating");
    let _ = screen.rate(stars, &NoopNotifier);

    screen.select(2);

    assert_eq!(screen.user_rating(), 4);
    assert_eq!(
        screen.selected_professional().map(|p| p.name.as_str()),
        Some("Dr. Michael Lee")
    );
}

#[rstest]
fn custom_templates_word_acknowledgments(screen: ConsultScreen) {
    let templates = AcknowledgmentTemplates::new(
        "Request queued for {{ professional }}",
        "{{ professional }}: {{ stars }}",
    )
    .expect("templates should parse");
    let mut screen = screen.with_templates(templates);
    let notifier = RecordingNotifier::default();
    screen.select(3);
    fill_form(&mut screen, "Hello");

    let _ = screen.submit(&notifier);
    let _ = screen.rate(Stars::new(5).expect("5 is a valid rating"), &notifier);

    assert_eq!(
        notifier.texts(),
        vec![
            "Request queued for Dr. Sarah Thompson".to_owned(),
            "Dr. Sarah Thompson: 5".to_owned(),
        ]
    );
}
