//! Contact form state and submission.
//!
//! Fields are plain signals so the page re-composes as the visitor types.
//! Validation runs on submit; after a rejected submit every edit
//! re-validates, so a message disappears as soon as its field is fixed.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use folio_core::*;
use folio_platform::relay::{self, FormRelay};
use folio_ui::{Toast, Toaster};

/// The JSON body posted to the relay.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            Field::Name => "Your name",
            Field::Email => "Your email",
            Field::Subject => "Subject",
            Field::Message => "Your message",
        }
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name must be at least 2 characters.")]
    NameTooShort,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Subject must be at least 5 characters.")]
    SubjectTooShort,
    #[error("Message must be at least 10 characters.")]
    MessageTooShort,
}

impl FieldError {
    pub fn field(self) -> Field {
        match self {
            FieldError::NameTooShort => Field::Name,
            FieldError::InvalidEmail => Field::Email,
            FieldError::SubjectTooShort => Field::Subject,
            FieldError::MessageTooShort => Field::Message,
        }
    }
}

// Local part of letters, digits and `_'+-.`, ending in a non-dot; a dotted
// domain with a 2+ letter TLD. Leading and doubled dots are checked by hand
// because the regex crate has no lookaround.
const EMAIL_PATTERN: &str = r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$";

static EMAIL_RE: OnceLock<Option<Regex>> = OnceLock::new();

fn email_re() -> Option<&'static Regex> {
    EMAIL_RE
        .get_or_init(|| {
            Regex::new(EMAIL_PATTERN)
                .map_err(|e| log::error!("email pattern does not compile: {e}"))
                .ok()
        })
        .as_ref()
}

pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.')
        && !email.contains("..")
        && email_re().is_some_and(|re| re.is_match(email))
}

impl ContactMessage {
    /// Every rule the message breaks, in field order. Lengths count
    /// characters as typed; surrounding whitespace is not trimmed.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.name.chars().count() < 2 {
            errors.push(FieldError::NameTooShort);
        }
        if !is_valid_email(&self.email) {
            errors.push(FieldError::InvalidEmail);
        }
        if self.subject.chars().count() < 5 {
            errors.push(FieldError::SubjectTooShort);
        }
        if self.message.chars().count() < 10 {
            errors.push(FieldError::MessageTooShort);
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// What a call to [`ContactForm::submit`] ended with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Rejected,
    /// A previous submission is still in flight.
    Busy,
    Sent,
    Failed,
}

pub struct ContactForm {
    name: Signal<String>,
    email: Signal<String>,
    subject: Signal<String>,
    message: Signal<String>,
    errors: Signal<Vec<FieldError>>,
    submitting: Signal<bool>,
    attempted: Cell<bool>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: signal(String::new()),
            email: signal(String::new()),
            subject: signal(String::new()),
            message: signal(String::new()),
            errors: signal(Vec::new()),
            submitting: signal(false),
            attempted: Cell::new(false),
        }
    }

    fn signal_for(&self, field: Field) -> &Signal<String> {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn value(&self, field: Field) -> String {
        self.signal_for(field).get()
    }

    pub fn set(&self, field: Field, value: String) {
        self.signal_for(field).set(value);
        if self.attempted.get() {
            let errors = self.values().validate().err().unwrap_or_default();
            if self.errors.with(|e| *e != errors) {
                self.errors.set(errors);
            }
        }
    }

    pub fn values(&self) -> ContactMessage {
        ContactMessage {
            name: self.name.get(),
            email: self.email.get(),
            subject: self.subject.get(),
            message: self.message.get(),
        }
    }

    pub fn error_for(&self, field: Field) -> Option<FieldError> {
        self.errors
            .with(|errs| errs.iter().copied().find(|e| e.field() == field))
    }

    pub fn errors(&self) -> Vec<FieldError> {
        self.errors.get()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.get()
    }

    /// Empties every field and forgets earlier validation.
    pub fn reset(&self) {
        for f in Field::ALL {
            self.signal_for(f).set(String::new());
        }
        self.errors.set(Vec::new());
        self.attempted.set(false);
    }

    /// Validates, posts once through `relay`, and reports the result as a
    /// toast. Fields are cleared only when the relay accepted the message.
    pub async fn submit<R>(&self, relay: &R, toaster: &Rc<Toaster>) -> SubmitOutcome
    where
        R: FormRelay + ?Sized,
    {
        if self.submitting.get() {
            return SubmitOutcome::Busy;
        }
        let payload = self.values();
        self.attempted.set(true);
        if let Err(errors) = payload.validate() {
            log::debug!("contact form rejected: {errors:?}");
            self.errors.set(errors);
            return SubmitOutcome::Rejected;
        }
        self.errors.set(Vec::new());

        self.submitting.set(true);
        let result = relay::submit(relay, &payload).await;
        self.submitting.set(false);

        match result {
            Ok(()) => {
                self.reset();
                toaster.show(Toast::info(
                    "Message sent!",
                    "Thank you for your message. I'll get back to you soon.",
                ));
                SubmitOutcome::Sent
            }
            Err(e) => {
                log::warn!("contact form submission failed: {e}");
                toaster.show(Toast::destructive(
                    "Error",
                    "Failed to send message. Please try again.",
                ));
                SubmitOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::time::Duration;

    use folio_core::ManualScheduler;
    use folio_platform::RelayError;
    use folio_ui::ToastKind;

    /// Answers every post with a fixed status and records the bodies.
    struct StubRelay {
        status: u16,
        bodies: RefCell<Vec<serde_json::Value>>,
    }

    impl StubRelay {
        fn answering(status: u16) -> Self {
            Self {
                status,
                bodies: RefCell::new(Vec::new()),
            }
        }
    }

    impl FormRelay for StubRelay {
        async fn post_json(&self, payload: &serde_json::Value) -> Result<(), RelayError> {
            self.bodies.borrow_mut().push(payload.clone());
            relay::check_status(self.status)
        }
    }

    struct Unreachable;

    impl FormRelay for Unreachable {
        async fn post_json(&self, _: &serde_json::Value) -> Result<(), RelayError> {
            Err(RelayError::Transport("connection refused".into()))
        }
    }

    fn toaster() -> Rc<Toaster> {
        Toaster::new(Rc::new(ManualScheduler::new()), Duration::from_secs(5))
    }

    fn filled() -> ContactForm {
        let form = ContactForm::new();
        form.set(Field::Name, "Ada Lovelace".into());
        form.set(Field::Email, "ada@example.com".into());
        form.set(Field::Subject, "Engines".into());
        form.set(Field::Message, "About the analytical engine.".into());
        form
    }

    #[test]
    fn short_name_is_rejected_before_any_request() {
        let relay = StubRelay::answering(200);
        let toasts = toaster();
        let form = filled();
        form.set(Field::Name, "A".into());

        let outcome = pollster::block_on(form.submit(&relay, &toasts));

        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert!(relay.bodies.borrow().is_empty());
        assert_eq!(form.error_for(Field::Name), Some(FieldError::NameTooShort));
        assert_eq!(
            form.error_for(Field::Name).map(|e| e.to_string()).as_deref(),
            Some("Name must be at least 2 characters.")
        );
        assert_eq!(toasts.shown_count(), 0);
        assert_eq!(form.value(Field::Name), "A");
    }

    #[test]
    fn accepted_submission_clears_fields_and_toasts_once() {
        let relay = StubRelay::answering(200);
        let toasts = toaster();
        let form = filled();

        let outcome = pollster::block_on(form.submit(&relay, &toasts));

        assert_eq!(outcome, SubmitOutcome::Sent);
        assert_eq!(
            relay.bodies.borrow().as_slice(),
            &[serde_json::json!({
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "subject": "Engines",
                "message": "About the analytical engine.",
            })]
        );
        assert_eq!(form.values(), ContactMessage::default());
        assert_eq!(toasts.shown_count(), 1);
        let toast = toasts.current().expect("toast shown");
        assert_eq!(toast.title, "Message sent!");
        assert_eq!(toast.kind, ToastKind::Info);
        assert!(!form.is_submitting());
    }

    #[test]
    fn server_error_keeps_fields_and_toasts_once() {
        let relay = StubRelay::answering(500);
        let toasts = toaster();
        let form = filled();
        let before = form.values();

        let outcome = pollster::block_on(form.submit(&relay, &toasts));

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(relay.bodies.borrow().len(), 1);
        assert_eq!(form.values(), before);
        assert_eq!(toasts.shown_count(), 1);
        let toast = toasts.current().expect("toast shown");
        assert_eq!(toast.title, "Error");
        assert_eq!(toast.description, "Failed to send message. Please try again.");
        assert_eq!(toast.kind, ToastKind::Destructive);
    }

    #[test]
    fn transport_failure_is_reported_like_a_bad_status() {
        let toasts = toaster();
        let form = filled();
        let outcome = pollster::block_on(form.submit(&Unreachable, &toasts));
        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(form.value(Field::Email), "ada@example.com");
        assert_eq!(toasts.shown_count(), 1);
    }

    #[test]
    fn submitting_flag_blocks_a_second_submit() {
        let relay = StubRelay::answering(200);
        let toasts = toaster();
        let form = filled();
        form.submitting.set(true);

        let outcome = pollster::block_on(form.submit(&relay, &toasts));

        assert_eq!(outcome, SubmitOutcome::Busy);
        assert!(relay.bodies.borrow().is_empty());
    }

    #[test]
    fn every_broken_rule_is_reported_in_field_order() {
        let errors = ContactMessage::default().validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                FieldError::NameTooShort,
                FieldError::InvalidEmail,
                FieldError::SubjectTooShort,
                FieldError::MessageTooShort,
            ]
        );
    }

    #[test]
    fn edits_after_a_rejected_submit_revalidate() {
        let relay = StubRelay::answering(200);
        let toasts = toaster();
        let form = filled();
        form.set(Field::Subject, "Hey".into());
        pollster::block_on(form.submit(&relay, &toasts));
        assert_eq!(form.errors(), vec![FieldError::SubjectTooShort]);

        form.set(Field::Subject, "Hey there".into());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn lengths_count_characters() {
        let msg = ContactMessage {
            name: "Zé".into(),
            email: "ze@example.com".into(),
            subject: "Olá!!".into(),
            message: "ção ção çã".into(),
        };
        assert_eq!(msg.validate(), Ok(()));
    }

    #[test]
    fn email_shapes() {
        for ok in ["ada@example.com", "a.b+c@mail.example.co", "o'neil@x.io"] {
            assert!(is_valid_email(ok), "{ok}");
        }
        for bad in [
            "",
            "ada",
            "ada@",
            "@example.com",
            "ada@example",
            ".ada@example.com",
            "ad..a@example.com",
            "ada.@example.com",
            "ada@-example.com",
            "ada @example.com",
        ] {
            assert!(!is_valid_email(bad), "{bad}");
        }
    }
}
