//! Contact form model and submission state machine.
//!
//! DESIGN
//! ======
//! The form is a plain value (`ContactForm`) mutated through explicit
//! transitions. Validation itself is pure (`util::validation`); this module
//! only decides what a validation result does to the form:
//!
//! ```text
//! Idle | Invalid | Sent --begin_submit--> Invalid   (errors rendered)
//!                       --begin_submit--> Sending   (no errors)
//! Sending               --begin_submit--> Sending   (rejected, Busy)
//! Sending               --finish_send---> Sent      (fields cleared)
//! any                   --reset---------> Idle      (Clear button)
//! ```
//!
//! Every entry into `Sending` starts a new numbered attempt. `finish_send`
//! only completes the attempt it was handed, so a delay left over from a
//! reset attempt cannot finish a later one.
//!
//! `handle_submit` drives one full attempt against any [`FormHost`], so the
//! same code runs against a Leptos signal in the browser and a `RefCell` in
//! tests.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::cell::RefCell;
use std::future::Future;

use leptos::prelude::{RwSignal, Update};

use crate::util::validation::validate;

pub const STATUS_INVALID: &str = "Please fix the highlighted fields.";
pub const STATUS_SENDING: &str = "Sending...";
pub const STATUS_SENT: &str = "Thanks! I will get back to you soon.";

/// One input slot of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    /// All fields in declaration order. Errors are reported in this order.
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// DOM id of the input control.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }
}

/// Current text of each field, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldValues {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FieldValues {
    #[must_use]
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.to_owned(),
            email: email.to_owned(),
            message: message.to_owned(),
        }
    }

    #[must_use]
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

/// A failed rule for one field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidationError {
    pub field: FormField,
    pub message: &'static str,
}

/// The error slot beside each field. Empty slots render nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    name: Option<&'static str>,
    email: Option<&'static str>,
    message: Option<&'static str>,
}

impl FieldErrors {
    #[must_use]
    pub fn get(&self, field: FormField) -> Option<&'static str> {
        match field {
            FormField::Name => self.name,
            FormField::Email => self.email,
            FormField::Message => self.message,
        }
    }

    fn slot_mut(&mut self, field: FormField) -> &mut Option<&'static str> {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }

    /// Write `error` into its field's slot.
    pub fn show(&mut self, error: ValidationError) {
        *self.slot_mut(error.field) = Some(error.message);
    }

    pub fn clear(&mut self) {
        for field in FormField::ALL {
            *self.slot_mut(field) = None;
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|f| self.get(*f).is_none())
    }
}

/// Where the current submission attempt stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Invalid,
    Sending,
    Sent,
}

impl SubmissionState {
    /// Status line shown under the form.
    #[must_use]
    pub fn status_text(self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::Invalid => STATUS_INVALID,
            Self::Sending => STATUS_SENDING,
            Self::Sent => STATUS_SENT,
        }
    }
}

/// Result of a submit transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; errors are in the field slots.
    Invalid,
    /// Validation passed; the simulated send is in flight.
    Sending,
    /// The simulated send completed and the fields were cleared.
    Sent,
    /// A send was already in flight; nothing changed.
    Busy,
    /// The form was reset or dropped while the send was in flight.
    Abandoned,
}

/// Contact form values, error slots, and submission state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub values: FieldValues,
    pub errors: FieldErrors,
    pub state: SubmissionState,
    attempt: u64,
}

impl ContactForm {
    pub fn set_value(&mut self, field: FormField, value: String) {
        self.values.set(field, value);
    }

    /// Empty every error slot. Safe to call repeatedly.
    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Validate the current values and move to `Invalid` or `Sending`.
    ///
    /// Rejected with [`SubmitOutcome::Busy`] while a send is in flight.
    pub fn begin_submit(&mut self) -> SubmitOutcome {
        if self.state == SubmissionState::Sending {
            log::warn!("contact form: submit ignored, send already in flight");
            return SubmitOutcome::Busy;
        }

        let previous = self.state;
        self.clear_errors();
        let errors = validate(&self.values);
        if errors.is_empty() {
            self.state = SubmissionState::Sending;
            self.attempt += 1;
            log::debug!("contact form: {previous:?} -> Sending (attempt {})", self.attempt);
            return SubmitOutcome::Sending;
        }

        for error in &errors {
            self.errors.show(*error);
        }
        self.state = SubmissionState::Invalid;
        log::debug!("contact form: {previous:?} -> Invalid ({} field error(s))", errors.len());
        SubmitOutcome::Invalid
    }

    /// Number of the latest attempt that entered `Sending`.
    #[must_use]
    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    /// Complete the simulated send of `attempt`: clear the fields and move
    /// to `Sent`.
    ///
    /// Returns `false` (and changes nothing) unless that attempt is the one
    /// in flight.
    pub fn finish_send(&mut self, attempt: u64) -> bool {
        if self.state != SubmissionState::Sending || self.attempt != attempt {
            return false;
        }
        self.values.clear();
        self.state = SubmissionState::Sent;
        log::debug!("contact form: Sending -> Sent");
        true
    }

    /// Back to an empty, idle form. Any send in flight is abandoned.
    pub fn reset(&mut self) {
        *self = Self {
            attempt: self.attempt,
            ..Self::default()
        };
    }

    #[must_use]
    pub fn status_text(&self) -> &'static str {
        self.state.status_text()
    }

    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.state == SubmissionState::Sending
    }
}

/// Owner of a [`ContactForm`] that `handle_submit` can mutate in place.
///
/// Returns `None` when the form is no longer reachable (e.g. a disposed
/// signal after the component unmounted).
pub trait FormHost {
    fn with_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R>;
}

impl FormHost for RwSignal<ContactForm> {
    fn with_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl FormHost for RefCell<ContactForm> {
    fn with_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Run one submission attempt: validate, then simulate the send.
///
/// `delay` builds the latency future; it is only called when validation
/// passes. The host is released while the delay is pending so other events
/// (including a rejected second submit) can touch the form.
pub async fn handle_submit<H, D, Fut>(host: &H, delay: D) -> SubmitOutcome
where
    H: FormHost,
    D: FnOnce() -> Fut,
    Fut: Future<Output = ()>,
{
    let Some((outcome, attempt)) = host.with_form(|form| (form.begin_submit(), form.attempt())) else {
        return SubmitOutcome::Abandoned;
    };
    if outcome != SubmitOutcome::Sending {
        return outcome;
    }

    delay().await;

    match host.with_form(|form| form.finish_send(attempt)) {
        Some(true) => {
            log::info!("contact form: message sent");
            SubmitOutcome::Sent
        }
        _ => {
            log::debug!("contact form: attempt {attempt} abandoned");
            SubmitOutcome::Abandoned
        }
    }
}
