//! Waitlist signup for Trovul
//!
//! A form state machine for the signup button and a client for the hosted
//! form relay the signups are posted to.

mod form;
mod relay;

pub use form::{FormState, WaitlistForm, FAILURE_RESET, SUCCESS_RESET};
pub use relay::{spawn_submit, validate_email, RelayClient, SubmitError, DEFAULT_RELAY_ENDPOINT, SUBJECT};
