//! Waitlist form state
//!
//! The submit button is disabled from the moment a signup is sent until the
//! success or failure message has been shown for its full duration.

use std::time::Duration;

use crate::relay::{validate_email, SubmitError};

/// How long the success message stays before the form resets
pub const SUCCESS_RESET: Duration = Duration::from_secs(4);
/// How long the failure message stays before the form resets
pub const FAILURE_RESET: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Sending,
    Succeeded,
    Failed,
}

/// Email input plus submit button
#[derive(Debug, Clone, Default)]
pub struct WaitlistForm {
    email: String,
    state: FormState,
    reset_in: Duration,
    hint: Option<&'static str>,
}

impl WaitlistForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// Validation message for the current input, if any
    pub fn hint(&self) -> Option<&'static str> {
        self.hint
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.state == FormState::Idle
    }

    pub fn button_label(&self) -> &'static str {
        match self.state {
            FormState::Idle => "Entrar na lista",
            FormState::Sending => "Enviando...",
            FormState::Succeeded => "✓ Você está na lista!",
            FormState::Failed => "Erro. Tente novamente.",
        }
    }

    pub fn push_char(&mut self, c: char) {
        if self.state != FormState::Sending && !c.is_control() {
            self.email.push(c);
            self.hint = None;
        }
    }

    pub fn backspace(&mut self) {
        if self.state != FormState::Sending {
            self.email.pop();
            self.hint = None;
        }
    }

    /// Try to start a submission
    ///
    /// Returns the email to send, `Ok(None)` if the button is disabled, or
    /// `InvalidEmail` (leaving the form idle) when the input is malformed.
    pub fn begin_submit(&mut self) -> Result<Option<String>, SubmitError> {
        if !self.is_submit_enabled() {
            return Ok(None);
        }

        let email = self.email.trim().to_string();
        if let Err(e) = validate_email(&email) {
            self.hint = Some("Digite um e-mail válido.");
            return Err(e);
        }

        self.hint = None;
        self.state = FormState::Sending;
        Ok(Some(email))
    }

    /// Record the relay's answer; returns true on success
    pub fn finish(&mut self, result: &Result<(), SubmitError>) -> bool {
        if self.state != FormState::Sending {
            return false;
        }

        match result {
            Ok(()) => {
                self.state = FormState::Succeeded;
                self.reset_in = SUCCESS_RESET;
                true
            }
            Err(_) => {
                self.state = FormState::Failed;
                self.reset_in = FAILURE_RESET;
                false
            }
        }
    }

    /// Count down the result message and return to idle when it expires
    pub fn advance(&mut self, elapsed: Duration) {
        if !matches!(self.state, FormState::Succeeded | FormState::Failed) {
            return;
        }

        self.reset_in = self.reset_in.saturating_sub(elapsed);
        if self.reset_in.is_zero() {
            if self.state == FormState::Succeeded {
                self.email.clear();
            }
            self.state = FormState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> WaitlistForm {
        let mut form = WaitlistForm::new();
        text.chars().for_each(|c| form.push_char(c));
        form
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut form = typed("ana@x.io");
        form.backspace();
        assert_eq!(form.email(), "ana@x.i");
        form.push_char('\n');
        assert_eq!(form.email(), "ana@x.i");
    }

    #[test]
    fn test_invalid_email_stays_idle() {
        let mut form = typed("ana");
        assert!(matches!(form.begin_submit(), Err(SubmitError::InvalidEmail)));
        assert_eq!(form.state(), FormState::Idle);
        assert!(form.hint().is_some());

        form.push_char('@');
        assert!(form.hint().is_none());
    }

    #[test]
    fn test_resubmit_ignored_while_sending() {
        let mut form = typed("ana@trovul.app");
        assert_eq!(form.begin_submit().unwrap(), Some("ana@trovul.app".to_string()));
        assert_eq!(form.state(), FormState::Sending);
        assert!(!form.is_submit_enabled());
        assert_eq!(form.button_label(), "Enviando...");

        assert_eq!(form.begin_submit().unwrap(), None);

        form.push_char('x');
        assert_eq!(form.email(), "ana@trovul.app");
    }

    #[test]
    fn test_success_resets_after_four_seconds() {
        let mut form = typed("ana@trovul.app");
        form.begin_submit().unwrap();
        assert!(form.finish(&Ok(())));
        assert_eq!(form.state(), FormState::Succeeded);
        assert!(!form.is_submit_enabled());

        form.advance(Duration::from_millis(3900));
        assert_eq!(form.state(), FormState::Succeeded);
        form.advance(Duration::from_millis(100));
        assert_eq!(form.state(), FormState::Idle);
        assert_eq!(form.email(), "");
        assert!(form.is_submit_enabled());
    }

    #[test]
    fn test_failure_resets_after_three_seconds() {
        let mut form = typed("ana@trovul.app");
        form.begin_submit().unwrap();
        assert!(!form.finish(&Err(SubmitError::Status(500))));
        assert_eq!(form.button_label(), "Erro. Tente novamente.");

        form.advance(Duration::from_secs(3));
        assert_eq!(form.state(), FormState::Idle);
        assert_eq!(form.email(), "ana@trovul.app");
    }

    #[test]
    fn test_finish_without_send_ignored() {
        let mut form = WaitlistForm::new();
        assert!(!form.finish(&Ok(())));
        assert_eq!(form.state(), FormState::Idle);
    }
}
