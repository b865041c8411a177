use super::*;

fn filled() -> ContactFormState {
    let mut state = ContactFormState::default();
    state.set_field(Field::Name, "Sari".to_owned());
    state.set_field(Field::Email, "sari@example.test".to_owned());
    state.set_field(Field::Subject, "Rubber parts".to_owned());
    state.set_field(Field::Message, "Do you make custom seals?".to_owned());
    state
}

#[test]
fn whitespace_only_field_is_still_sent() {
    let mut state = filled();
    state.set_field(Field::Subject, " ".to_owned());
    let payload = state.begin_submit().expect("submit always proceeds when idle");
    assert_eq!(payload.subject, " ");
    assert_eq!(payload.name, "Sari");
    assert_eq!(state.status, SubmitStatus::Sending);
}

#[test]
fn begin_submit_enters_sending_once() {
    let mut state = filled();
    let payload = state.begin_submit().expect("complete form submits");
    assert_eq!(payload.name, "Sari");
    assert!(state.is_sending());
    assert_eq!(state.begin_submit(), None);
}

#[test]
fn success_clears_fields_and_shows_banner() {
    let mut state = filled();
    state.begin_submit();
    state.on_success();
    assert_eq!(state.status, SubmitStatus::Succeeded);
    assert_eq!(state.fields, ContactSubmission::default());
}

#[test]
fn failure_keeps_fields_and_shows_banner() {
    let mut state = filled();
    let before = state.fields.clone();
    state.begin_submit();
    state.on_failure();
    assert_eq!(state.status, SubmitStatus::Failed);
    assert_eq!(state.fields, before);
    assert!(state.begin_submit().is_some());
}

#[test]
fn dismiss_hides_only_latest_banner() {
    let mut state = filled();
    state.begin_submit();
    let first = state.on_failure();
    state.begin_submit();
    let second = state.on_failure();
    state.dismiss(first);
    assert_eq!(state.status, SubmitStatus::Failed);
    state.dismiss(second);
    assert_eq!(state.status, SubmitStatus::Idle);
}

#[test]
fn dismiss_never_interrupts_sending() {
    let mut state = filled();
    state.begin_submit();
    let seq = state.on_failure();
    state.begin_submit();
    state.dismiss(seq);
    assert!(state.is_sending());
}

#[test]
fn banner_timeout_is_five_seconds() {
    assert_eq!(BANNER_DISMISS_MS, 5_000);
}
