//! Pitching form tests: validation, AI assist and submission.

mod common;

use chrono::{TimeZone, Utc};
use common::{RecordingIntake, brief_file, filled_form, reference_file, tor_file};
use pitchdeck::form::{
    Field, FileField, Notification, Notifications, PitchingForm, RawInput, REQUIREMENTS_PLACEHOLDER,
    SubmitBlocked, SubmitOutcome, SubmitStatus,
};

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn test_new_form_is_invalid_but_shows_no_errors() {
    let form = PitchingForm::new();
    assert!(!form.is_valid());
    for field in Field::ALL {
        assert!(form.visible_error(field).is_none(), "{field:?} should be hidden");
    }
}

#[test]
fn test_every_required_field_is_checked() {
    let form = PitchingForm::new();
    let errors = form.errors();
    assert!(errors.contains(Field::PresentationTime));
    assert!(errors.contains(Field::Notes));
    assert!(errors.contains(Field::CustomerRequirements));
    assert!(errors.contains(Field::TorDocument));
    assert!(errors.contains(Field::ReferenceSlide));
    assert!(!errors.contains(Field::SlideBrief));
    assert_eq!(errors.len(), 5);
}

#[test]
fn test_filled_form_is_valid_without_slide_brief() {
    let form = filled_form();
    assert!(form.is_valid());
    assert!(form.state().slide_brief.is_none());
}

#[test]
fn test_presentation_time_values() {
    let mut form = filled_form();

    form.set_presentation_time("0");
    assert_eq!(
        form.visible_error(Field::PresentationTime),
        Some("Presentation time must be at least 1 minute")
    );

    form.set_presentation_time("abc");
    assert_eq!(
        form.visible_error(Field::PresentationTime),
        Some("Presentation time must be at least 1 minute")
    );

    for word in ["inf", "Infinity"] {
        form.set_presentation_time(word);
        assert_eq!(
            form.visible_error(Field::PresentationTime),
            Some("Presentation time must be at least 1 minute"),
            "{word} is not a number of minutes"
        );
    }

    form.set_presentation_time("");
    assert_eq!(form.visible_error(Field::PresentationTime), Some("Presentation time is required"));

    form.set_presentation_time("30");
    assert!(form.visible_error(Field::PresentationTime).is_none());
    assert!(form.is_valid());
}

#[test]
fn test_presentation_time_coercion() {
    let mut form = filled_form();

    form.set_presentation_time(45.0);
    assert_eq!(form.state().presentation_time, "45");
    assert!(form.is_valid());

    form.set_presentation_time(RawInput::Null);
    assert_eq!(form.state().presentation_time, "");
    assert_eq!(form.visible_error(Field::PresentationTime), Some("Presentation time is required"));

    form.set_presentation_time(RawInput::Undefined);
    assert_eq!(form.errors().get(Field::PresentationTime), Some("Presentation time is required"));
}

#[test]
fn test_errors_follow_each_change() {
    let mut form = filled_form();
    form.set_notes("");
    assert_eq!(form.visible_error(Field::Notes), Some("Sales notes is required"));
    form.set_notes("ok");
    assert!(form.visible_error(Field::Notes).is_none());

    form.set_file(FileField::ReferenceSlide, None);
    assert_eq!(form.visible_error(Field::ReferenceSlide), Some("Reference slide is required"));
}

#[test]
fn test_untouched_errors_appear_after_submit_attempt() {
    let mut form = PitchingForm::new();
    form.set_notes("Some notes");
    assert!(form.visible_error(Field::CustomerRequirements).is_none());

    let blocked = form.prepare_submit(Utc::now());
    assert!(matches!(blocked, Err(SubmitBlocked::Invalid(_))));
    assert_eq!(
        form.visible_error(Field::CustomerRequirements),
        Some("Customer requirements is required")
    );
    assert!(form.visible_error(Field::Notes).is_none());
}

#[test]
fn test_restore_keeps_errors_hidden() {
    let mut form = PitchingForm::new();
    let mut draft = filled_form().state().clone();
    draft.notes.clear();
    form.restore(draft);
    assert!(form.errors().contains(Field::Notes));
    assert!(form.visible_error(Field::Notes).is_none());
}

// ---------------------------------------------------------------------------
// File fields through controlled uploads
// ---------------------------------------------------------------------------

#[test]
fn test_file_control_writes_into_form_state() {
    let mut form = PitchingForm::new();
    form.file_control(FileField::TorDocument).input_change(vec![tor_file()]);
    assert_eq!(form.state().tor_document, Some(tor_file()));

    form.file_control(FileField::TorDocument).drop(vec![brief_file()]);
    assert_eq!(form.state().tor_document, Some(brief_file()));

    form.file_control(FileField::TorDocument).remove();
    assert!(form.state().tor_document.is_none());
}

#[test]
fn test_file_control_props() {
    let mut form = PitchingForm::new();
    let brief = form.file_control(FileField::SlideBrief);
    assert!(brief.props().optional);
    assert!(!brief.props().required);
    assert_eq!(brief.hint(), "Accepted files: .pdf, .ppt, .pptx");
    drop(brief);

    form.set_file(FileField::ReferenceSlide, None);
    let reference = form.file_control(FileField::ReferenceSlide);
    assert!(reference.props().required);
    assert_eq!(reference.error(), Some("Reference slide is required"));
}

#[test]
fn test_slide_brief_is_never_validated() {
    let mut form = filled_form();
    form.set_file(FileField::SlideBrief, Some(brief_file()));
    assert!(form.is_valid());
    form.set_file(FileField::SlideBrief, None);
    assert!(form.is_valid());
}

// ---------------------------------------------------------------------------
// AI assist
// ---------------------------------------------------------------------------

#[test]
fn test_generate_requires_tor_file() {
    let mut form = PitchingForm::new();
    form.set_customer_requirements("typed by hand");
    assert!(!form.can_generate_requirements());
    assert!(!form.generate_requirements());
    assert_eq!(form.state().customer_requirements, "typed by hand");
}

#[test]
fn test_generate_overwrites_requirements() {
    let mut form = PitchingForm::new();
    form.set_customer_requirements("typed by hand");
    form.set_file(FileField::TorDocument, Some(tor_file()));
    assert!(form.can_generate_requirements());
    assert!(form.generate_requirements());
    assert_eq!(form.state().customer_requirements, REQUIREMENTS_PLACEHOLDER);
    assert!(form.visible_error(Field::CustomerRequirements).is_none());
}

#[test]
fn test_generate_disabled_again_after_tor_removed() {
    let mut form = PitchingForm::new();
    form.set_file(FileField::TorDocument, Some(tor_file()));
    form.file_control(FileField::TorDocument).remove();
    assert!(!form.can_generate_requirements());
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

#[test]
fn test_payload_snapshot() {
    let mut form = filled_form();
    let now = Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap();
    let payload = form.prepare_submit(now).expect("valid form");

    assert_eq!(payload.presentation_time, "30");
    assert!(payload.has_tor_file);
    assert_eq!(payload.timestamp, "2026-10-17T09:30:00.000Z");
    assert_eq!(payload.reference_slide, Some(reference_file()));
    assert!(payload.slide_brief.is_none());

    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["hasTorFile"], true);
    assert_eq!(json["customerRequirements"], "Cloud migration in two phases");
    assert_eq!(json["torDocument"]["name"], "tor.pdf");
    assert_eq!(json["torDocument"]["type"], "application/pdf");
    assert!(json["slideBrief"].is_null());
}

#[test]
fn test_pending_blocks_second_submit() {
    let mut form = filled_form();
    assert_eq!(form.submit_label(), SubmitStatus::Idle.label());
    assert_eq!(form.submit_label(), "Generate Pitch Deck");

    form.prepare_submit(Utc::now()).expect("first submit");
    assert!(form.is_submitting());
    assert_eq!(form.submit_label(), SubmitStatus::Pending.label());
    assert_eq!(form.submit_label(), "Generating...");
    assert_eq!(form.prepare_submit(Utc::now()), Err(SubmitBlocked::AlreadyPending));

    let mut notifications = Notifications::new();
    form.complete_submit(Ok(serde_json::json!({ "received": {} })), &mut notifications);
    assert!(!form.is_submitting());
    assert!(form.prepare_submit(Utc::now()).is_ok());
}

#[tokio::test]
async fn test_invalid_submit_sends_nothing() {
    let mut form = PitchingForm::new();
    let intake = RecordingIntake::default();
    let mut notifications = Notifications::new();

    let outcome = form.submit(&intake, &mut notifications).await;

    assert!(matches!(outcome, SubmitOutcome::Blocked(SubmitBlocked::Invalid(ref e)) if e.len() == 5));
    assert_eq!(intake.sent_count(), 0);
    assert!(notifications.is_empty());
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn test_successful_submit_notifies_and_keeps_state() {
    let mut form = filled_form();
    let before = form.state().clone();
    let intake = RecordingIntake::default();
    let mut notifications = Notifications::new();

    let outcome = form.submit(&intake, &mut notifications).await;

    let response = match outcome {
        SubmitOutcome::Sent(response) => response,
        other => panic!("expected Sent, got {other:?}"),
    };
    assert_eq!(response["received"]["notes"], "Customer cares about delivery dates");
    assert_eq!(intake.sent_count(), 1);
    assert_eq!(notifications.len(), 1);
    assert!(notifications.last().unwrap().is_success());
    assert_eq!(form.state(), &before);
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn test_failed_submit_keeps_state_and_allows_retry() {
    let mut form = filled_form();
    let before = form.state().clone();
    let failing = RecordingIntake::failing(502);
    let mut notifications = Notifications::new();

    let outcome = form.submit(&failing, &mut notifications).await;

    assert_eq!(outcome, SubmitOutcome::Failed("Request failed with status 502".to_string()));
    assert_eq!(failing.sent_count(), 1, "no automatic retry");
    assert!(matches!(notifications.last(), Some(Notification::Failed { .. })));
    assert_eq!(form.state(), &before);
    assert!(!form.is_submitting());

    let working = RecordingIntake::default();
    let retry = form.submit(&working, &mut notifications).await;
    assert!(matches!(retry, SubmitOutcome::Sent(_)));
    assert_eq!(notifications.len(), 2);
}
