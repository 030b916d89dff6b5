//! Contact form
//!
//! - `form`: field values, validation and the submission status machine
//! - `relay`: delivery through the third-party email relay

pub mod form;
pub mod relay;

pub use form::{
    ContactFields, ContactForm, ContactMessage, Field, SubmissionStatus, SubmitError,
    ValidationError, deliver, submit,
};
pub use relay::{EMAILJS_ENDPOINT, EmailJsRelay, Relay, RelayConfig, RelayError, RelayRequest};
