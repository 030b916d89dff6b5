//! Contact form state
//!
//! Exactly one status holds at a time. While a submission is pending the form
//! refuses another one, which is what keeps the submit button disabled.

use std::cell::RefCell;

use serde::Serialize;
use thiserror::Error;

use super::relay::{Relay, RelayError};

/// Form inputs, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// `name` attribute of the input
    pub fn name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{} is required", .0.label())]
    MissingField(Field),
    #[error("email address is not valid")]
    InvalidEmail,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("a message is already being sent")]
    AlreadyPending,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Raw field values as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Check required fields and the email shape
    pub fn validate(&self) -> Result<ContactMessage, ValidationError> {
        for field in Field::ALL {
            if self.get(field).trim().is_empty() {
                return Err(ValidationError::MissingField(field));
            }
        }
        let email = self.email.trim();
        if !looks_like_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(ContactMessage {
            name: self.name.trim().to_string(),
            email: email.to_string(),
            message: self.message.clone(),
        })
    }
}

/// `local@domain` with a non-empty local part and a dotted domain
fn looks_like_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !s.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

/// A validated message, ready for the relay
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Where the form is in its submit cycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    /// Relay call outstanding
    Pending,
    /// Delivered; fields were cleared
    Sent,
    /// Delivery failed; fields kept for retry
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: ContactFields,
    status: SubmissionStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == SubmissionStatus::Pending
    }

    pub fn succeeded(&self) -> bool {
        self.status == SubmissionStatus::Sent
    }

    pub fn failed(&self) -> bool {
        matches!(self.status, SubmissionStatus::Failed(_))
    }

    /// Submit control is disabled while a message is in flight
    pub fn submit_enabled(&self) -> bool {
        !self.is_pending()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_pending() {
            "Sending..."
        } else {
            "Send Message"
        }
    }

    /// Inline banner text for the current status
    pub fn status_message(&self) -> Option<&'static str> {
        match self.status {
            SubmissionStatus::Sent => Some("Message sent successfully!"),
            SubmissionStatus::Failed(_) => Some("Something went wrong. Please try again."),
            _ => None,
        }
    }

    /// Validate and enter `Pending`. Nothing changes on error.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, SubmitError> {
        if self.is_pending() {
            return Err(SubmitError::AlreadyPending);
        }
        let message = self.fields.validate()?;
        self.status = SubmissionStatus::Pending;
        Ok(message)
    }

    /// Record the relay outcome of the pending submission
    pub fn finish(&mut self, result: Result<(), RelayError>) {
        if !self.is_pending() {
            log::warn!("Relay result arrived with no submission pending; ignoring");
            return;
        }
        match result {
            Ok(()) => {
                log::info!("Contact message delivered");
                self.fields.clear();
                self.status = SubmissionStatus::Sent;
            }
            Err(e) => {
                log::warn!("Contact message failed: {}", e);
                self.status = SubmissionStatus::Failed(e.to_string());
            }
        }
    }
}

/// Run one submission against `relay`.
///
/// The form is only borrowed around the relay call, never across it, so other
/// handlers can read the pending state while the request is in flight.
pub async fn submit<R: Relay>(
    form: &RefCell<ContactForm>,
    relay: &R,
) -> Result<SubmissionStatus, SubmitError> {
    let message = form.borrow_mut().begin_submit()?;
    Ok(deliver(form, relay, message).await)
}

/// Send an already accepted message and record the outcome.
///
/// Callers that need to redraw between validation and delivery call
/// [`ContactForm::begin_submit`] themselves and hand the message over here.
pub async fn deliver<R: Relay>(
    form: &RefCell<ContactForm>,
    relay: &R,
    message: ContactMessage,
) -> SubmissionStatus {
    let result = relay.send(&message).await;
    let mut form = form.borrow_mut();
    form.finish(result);
    form.status().clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::future::Future;
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    /// Relay that answers immediately and counts calls
    struct StubRelay {
        fail: bool,
        calls: Cell<u32>,
    }

    impl StubRelay {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                calls: Cell::new(0),
            }
        }
    }

    impl Relay for StubRelay {
        async fn send(&self, _message: &ContactMessage) -> Result<(), RelayError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                Err(RelayError::Rejected {
                    status: 400,
                    body: "The service ID is invalid".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    /// Drive a future that never actually suspends
    fn run_ready<F: Future>(fut: F) -> F::Output {
        let mut fut = pin!(fut);
        let mut cx = Context::from_waker(Waker::noop());
        match fut.as_mut().poll(&mut cx) {
            Poll::Ready(out) => out,
            Poll::Pending => panic!("stub relay should resolve immediately"),
        }
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(Field::Name, "Ada");
        form.set(Field::Email, "ada@example.com");
        form.set(Field::Message, "Hello there");
        form
    }

    #[test]
    fn test_submit_success_clears_fields() {
        let form = RefCell::new(filled());
        let relay = StubRelay::new(false);

        let status = run_ready(submit(&form, &relay)).expect("submission accepted");
        let form = form.borrow();
        assert_eq!(status, SubmissionStatus::Sent);
        assert!(form.succeeded());
        assert!(!form.failed());
        assert!(!form.is_pending());
        assert!(form.fields().is_empty());
        assert_eq!(relay.calls.get(), 1);
    }

    #[test]
    fn test_submit_failure_keeps_fields() {
        let form = RefCell::new(filled());
        let relay = StubRelay::new(true);

        let status = run_ready(submit(&form, &relay)).expect("submission accepted");
        let form = form.borrow();
        assert!(matches!(status, SubmissionStatus::Failed(_)));
        assert!(form.failed());
        assert!(!form.succeeded());
        assert!(!form.is_pending());
        assert!(form.submit_enabled());
        assert_eq!(form.fields().name, "Ada");
        assert_eq!(form.fields().message, "Hello there");
    }

    #[test]
    fn test_empty_field_blocks_relay_call() {
        let mut inner = filled();
        inner.set(Field::Message, "   ");
        let form = RefCell::new(inner);
        let relay = StubRelay::new(false);

        let err = run_ready(submit(&form, &relay)).unwrap_err();
        assert_eq!(err, SubmitError::Invalid(ValidationError::MissingField(Field::Message)));
        assert_eq!(relay.calls.get(), 0);
        assert_eq!(form.borrow().status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn test_pending_blocks_resubmission() {
        let mut form = filled();
        form.begin_submit().expect("first submit");
        assert!(!form.submit_enabled());
        assert_eq!(form.submit_label(), "Sending...");
        assert_eq!(form.begin_submit(), Err(SubmitError::AlreadyPending));

        form.finish(Ok(()));
        assert!(form.submit_enabled());
        assert_eq!(form.status_message(), Some("Message sent successfully!"));
    }

    #[test]
    fn test_retry_after_failure() {
        let mut form = filled();
        form.begin_submit().expect("submit");
        form.finish(Err(RelayError::Network("offline".to_string())));
        assert!(form.failed());

        form.begin_submit().expect("retry");
        assert!(form.is_pending());
        assert!(!form.failed());
        form.finish(Ok(()));
        assert!(form.succeeded());
    }

    #[test]
    fn test_stray_result_is_ignored() {
        let mut form = filled();
        form.finish(Ok(()));
        assert_eq!(form.status(), &SubmissionStatus::Idle);
        assert_eq!(form.fields().name, "Ada");
    }

    #[test]
    fn test_email_validation() {
        let mut fields = filled().fields().clone();
        for bad in ["ada", "ada@", "@example.com", "ada@example", "a b@example.com", "a@b@c.com"] {
            fields.email = bad.to_string();
            assert_eq!(fields.validate(), Err(ValidationError::InvalidEmail), "{}", bad);
        }
        fields.email = "  ada.lovelace@mail.example.org ".to_string();
        let message = fields.validate().expect("valid");
        assert_eq!(message.email, "ada.lovelace@mail.example.org");
    }

    #[test]
    fn test_message_body_is_sent_verbatim() {
        let mut fields = filled().fields().clone();
        fields.name = "  Ada ".to_string();
        fields.message = "\n  indented line\n\nsigned, Ada  \n".to_string();
        let message = fields.validate().expect("valid");
        assert_eq!(message.name, "Ada");
        assert_eq!(message.message, "\n  indented line\n\nsigned, Ada  \n");

        fields.message = " \n\t ".to_string();
        assert_eq!(fields.validate(), Err(ValidationError::MissingField(Field::Message)));
    }

    #[test]
    fn test_deliver_after_begin() {
        let form = RefCell::new(filled());
        let relay = StubRelay::new(true);

        let message = form.borrow_mut().begin_submit().expect("accepted");
        assert_eq!(form.borrow().submit_label(), "Sending...");
        assert!(!form.borrow().submit_enabled());

        let status = run_ready(deliver(&form, &relay, message));
        assert!(matches!(status, SubmissionStatus::Failed(_)));
        assert_eq!(form.borrow().fields().message, "Hello there");
        assert_eq!(relay.calls.get(), 1);
    }
}
