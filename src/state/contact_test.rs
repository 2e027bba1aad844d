use super::*;
use crate::util::validation::{EMAIL_INVALID, EMAIL_REQUIRED, MESSAGE_REQUIRED, NAME_REQUIRED};
use futures::FutureExt;
use futures::executor::block_on;

fn form_with(name: &str, email: &str, message: &str) -> ContactForm {
    ContactForm {
        values: FieldValues::new(name, email, message),
        ..ContactForm::default()
    }
}

fn ada() -> ContactForm {
    form_with("Ada", "ada@example.com", "Hello")
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_form_is_idle_and_empty() {
    let form = ContactForm::default();
    assert_eq!(form.state, SubmissionState::Idle);
    assert_eq!(form.status_text(), "");
    assert_eq!(form.values, FieldValues::default());
    assert!(form.errors.is_empty());
}

#[test]
fn field_ids_match_form_markup() {
    let ids: Vec<_> = FormField::ALL.iter().map(|f| f.id()).collect();
    assert_eq!(ids, vec!["name", "email", "message"]);
}

#[test]
fn set_value_targets_one_field() {
    let mut form = ContactForm::default();
    form.set_value(FormField::Email, "x@y.z".to_owned());
    assert_eq!(form.values.get(FormField::Email), "x@y.z");
    assert_eq!(form.values.get(FormField::Name), "");
}

// =============================================================
// begin_submit: invalid path
// =============================================================

#[test]
fn each_missing_field_yields_one_error_and_invalid_status() {
    for field in FormField::ALL {
        let mut form = ada();
        form.set_value(field, String::new());

        assert_eq!(form.begin_submit(), SubmitOutcome::Invalid);
        assert_eq!(form.state, SubmissionState::Invalid);
        assert_eq!(form.status_text(), STATUS_INVALID);

        let shown: Vec<_> = FormField::ALL.iter().filter(|f| form.errors.get(**f).is_some()).collect();
        assert_eq!(shown, vec![&field]);
    }
}

#[test]
fn missing_field_messages_land_in_their_slots() {
    let mut form = ContactForm::default();
    form.begin_submit();
    assert_eq!(form.errors.get(FormField::Name), Some(NAME_REQUIRED));
    assert_eq!(form.errors.get(FormField::Email), Some(EMAIL_REQUIRED));
    assert_eq!(form.errors.get(FormField::Message), Some(MESSAGE_REQUIRED));
}

#[test]
fn invalid_submit_keeps_field_values() {
    let mut form = form_with("Ada", "ada@", "Hello");
    form.begin_submit();
    assert_eq!(form.values, FieldValues::new("Ada", "ada@", "Hello"));
    assert_eq!(form.errors.get(FormField::Email), Some(EMAIL_INVALID));
}

#[test]
fn stale_errors_are_cleared_before_next_pass() {
    let mut form = ContactForm::default();
    form.begin_submit();
    form.set_value(FormField::Name, "Ada".to_owned());
    form.set_value(FormField::Message, "Hello".to_owned());

    form.begin_submit();
    assert_eq!(form.errors.get(FormField::Name), None);
    assert_eq!(form.errors.get(FormField::Email), Some(EMAIL_REQUIRED));
    assert_eq!(form.errors.get(FormField::Message), None);
}

#[test]
fn resubmitting_unchanged_input_reproduces_errors() {
    let mut form = form_with("", "a@b", "");
    form.begin_submit();
    let first = form.clone();
    form.begin_submit();
    assert_eq!(form, first);
}

// =============================================================
// clear_errors
// =============================================================

#[test]
fn clear_errors_is_idempotent() {
    let mut form = ContactForm::default();
    form.begin_submit();

    form.clear_errors();
    let once = form.clone();
    form.clear_errors();
    assert_eq!(form, once);
    assert!(form.errors.is_empty());
}

#[test]
fn clear_errors_on_clean_form_is_noop() {
    let mut form = ada();
    form.clear_errors();
    assert_eq!(form, ada());
}

// =============================================================
// begin_submit / finish_send: valid path
// =============================================================

#[test]
fn valid_submit_moves_to_sending_without_errors() {
    let mut form = ada();
    assert_eq!(form.begin_submit(), SubmitOutcome::Sending);
    assert!(form.is_sending());
    assert_eq!(form.status_text(), STATUS_SENDING);
    assert!(form.errors.is_empty());
}

#[test]
fn valid_submit_clears_errors_from_earlier_failure() {
    let mut form = form_with("Ada", "", "Hello");
    form.begin_submit();
    form.set_value(FormField::Email, "ada@example.com".to_owned());
    assert_eq!(form.begin_submit(), SubmitOutcome::Sending);
    assert!(form.errors.is_empty());
}

#[test]
fn finish_send_clears_fields_and_marks_sent() {
    let mut form = ada();
    form.begin_submit();
    assert!(form.finish_send(form.attempt()));
    assert_eq!(form.state, SubmissionState::Sent);
    assert_eq!(form.status_text(), STATUS_SENT);
    assert_eq!(form.values, FieldValues::default());
}

#[test]
fn finish_send_outside_sending_does_nothing() {
    let mut form = ada();
    assert!(!form.finish_send(form.attempt()));
    assert_eq!(form, ada());
}

#[test]
fn second_submit_while_sending_is_rejected() {
    let mut form = ada();
    form.begin_submit();
    form.set_value(FormField::Name, String::new());
    let before = form.clone();

    assert_eq!(form.begin_submit(), SubmitOutcome::Busy);
    assert_eq!(form, before);
}

#[test]
fn form_can_be_resubmitted_after_sent() {
    let mut form = ada();
    form.begin_submit();
    form.finish_send(form.attempt());

    assert_eq!(form.begin_submit(), SubmitOutcome::Invalid);
    assert_eq!(form.status_text(), STATUS_INVALID);
}

#[test]
fn finish_send_ignores_other_attempts() {
    let mut form = ada();
    form.begin_submit();
    let attempt = form.attempt();
    assert!(!form.finish_send(attempt + 1));
    assert!(!form.finish_send(attempt - 1));
    assert!(form.is_sending());
    assert!(form.finish_send(attempt));
}

#[test]
fn reset_keeps_attempt_numbering() {
    let mut form = ada();
    form.begin_submit();
    let first = form.attempt();
    form.reset();
    form.values = FieldValues::new("Ada", "ada@example.com", "Hello");
    form.begin_submit();
    assert!(form.attempt() > first);
    assert!(!form.finish_send(first));
}

#[test]
fn reset_returns_to_idle() {
    let mut form = ContactForm::default();
    form.begin_submit();
    form.reset();
    assert_eq!(form, ContactForm::default());
}

// =============================================================
// handle_submit
// =============================================================

#[test]
fn handle_submit_valid_passes_through_sending_then_sent() {
    let host = RefCell::new(ada());
    let mut seen_during_delay = Vec::new();

    let outcome = block_on(handle_submit(&host, || {
        seen_during_delay.push(host.borrow().status_text());
        std::future::ready(())
    }));

    assert_eq!(outcome, SubmitOutcome::Sent);
    assert_eq!(seen_during_delay, vec![STATUS_SENDING]);
    let form = host.borrow();
    assert_eq!(form.status_text(), STATUS_SENT);
    assert_eq!(form.values, FieldValues::default());
    assert!(form.errors.is_empty());
}

#[test]
fn handle_submit_invalid_never_waits() {
    let host = RefCell::new(ContactForm::default());
    let mut waited = false;

    let outcome = block_on(handle_submit(&host, || {
        waited = true;
        std::future::ready(())
    }));

    assert_eq!(outcome, SubmitOutcome::Invalid);
    assert!(!waited);
    assert_eq!(host.borrow().status_text(), STATUS_INVALID);
}

#[test]
fn handle_submit_rejects_overlapping_submission() {
    let host = RefCell::new(ada());
    let mut overlapping = None;

    let outcome = block_on(handle_submit(&host, || {
        overlapping = handle_submit(&host, || std::future::ready(())).now_or_never();
        std::future::ready(())
    }));

    assert_eq!(overlapping, Some(SubmitOutcome::Busy));
    assert_eq!(outcome, SubmitOutcome::Sent);
}

#[test]
fn handle_submit_reset_during_delay_is_abandoned() {
    let host = RefCell::new(ada());

    let outcome = block_on(handle_submit(&host, || {
        host.borrow_mut().reset();
        std::future::ready(())
    }));

    assert_eq!(outcome, SubmitOutcome::Abandoned);
    let form = host.borrow();
    assert_eq!(form.state, SubmissionState::Idle);
    assert_eq!(form.values, FieldValues::default());
}

#[test]
fn handle_submit_stale_delay_does_not_finish_newer_attempt() {
    let host = RefCell::new(ada());
    let mut newer = None;

    let outcome = block_on(handle_submit(&host, || {
        {
            let mut form = host.borrow_mut();
            form.reset();
            form.values = FieldValues::new("Ada", "ada@example.com", "Hello");
        }
        newer = handle_submit(&host, std::future::pending::<()>).now_or_never();
        std::future::ready(())
    }));

    assert_eq!(outcome, SubmitOutcome::Abandoned);
    assert_eq!(newer, None);
    let form = host.borrow();
    assert_eq!(form.state, SubmissionState::Sending);
    assert_eq!(form.values, FieldValues::new("Ada", "ada@example.com", "Hello"));
}
