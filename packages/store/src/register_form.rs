//! # Registration form state
//!
//! [`RegistrationForm`] holds the three fields and the local error of the
//! registration screen, and drives its two-step submit protocol:
//!
//! 1. [`begin_submit`](RegistrationForm::begin_submit) validates email, then
//!    password, then confirmation. The first failure becomes the local error
//!    and nothing is sent. Otherwise it hands back the [`RegisterRequest`] to
//!    dispatch.
//! 2. [`finish_submit`](RegistrationForm::finish_submit) runs once the
//!    dispatch has completed and looks at the fresh remote state.
//!
//! Local and remote errors are kept apart. The alert shows one
//! [`AlertMessage`] at a time, local first, and dismissing it clears only the
//! local side.

use api::validation::{
    first_failure, validate_email, validate_password, validate_password_confirmation,
};
use api::{RegisterRequest, UserRecord};

use crate::user::RemoteAuthState;

/// What the error alert should display.
#[derive(Debug, Clone, PartialEq)]
pub enum AlertMessage {
    /// A validation failure owned by the form.
    Local(String),
    /// An error reported by the store after a registration attempt.
    Remote(String),
}

impl AlertMessage {
    pub fn text(&self) -> &str {
        match self {
            AlertMessage::Local(msg) | AlertMessage::Remote(msg) => msg,
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, AlertMessage::Local(_))
    }
}

/// Outcome of [`RegistrationForm::begin_submit`].
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitStep {
    /// A registration is already in flight.
    Busy,
    /// Validation failed; the message is now the local error.
    Blocked(String),
    /// Everything checks out; dispatch this request.
    Dispatch(RegisterRequest),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    email: String,
    password: String,
    password_confirmation: String,
    local_error: Option<String>,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn password_confirmation(&self) -> &str {
        &self.password_confirmation
    }

    pub fn local_error(&self) -> Option<&str> {
        self.local_error.as_deref()
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn set_password_confirmation(&mut self, confirmation: impl Into<String>) {
        self.password_confirmation = confirmation.into();
    }

    /// Guidance for the email field; empty when the value is fine.
    pub fn email_hint(&self) -> String {
        validate_email(&self.email)
    }

    pub fn password_hint(&self) -> String {
        validate_password(&self.email, &self.password)
    }

    pub fn confirmation_hint(&self) -> String {
        validate_password_confirmation(&self.password, &self.password_confirmation)
    }

    /// True when all three fields pass validation.
    pub fn is_valid(&self) -> bool {
        first_failure(&self.email, &self.password, &self.password_confirmation).is_none()
    }

    /// Start a submit attempt against the current remote state.
    pub fn begin_submit(&mut self, remote: &RemoteAuthState) -> SubmitStep {
        if remote.loading {
            return SubmitStep::Busy;
        }
        self.local_error = None;

        if let Some(msg) = first_failure(&self.email, &self.password, &self.password_confirmation)
        {
            self.local_error = Some(msg.clone());
            return SubmitStep::Blocked(msg);
        }

        SubmitStep::Dispatch(RegisterRequest::new(
            self.email.clone(),
            self.password.clone(),
            self.password_confirmation.clone(),
        ))
    }

    /// Finish a submit attempt once the dispatch has resolved.
    ///
    /// Returns the user to adopt as current user when the store now holds one.
    /// A remote error, if any, is left in the store for the alert to show.
    pub fn finish_submit(&mut self, remote: &RemoteAuthState) -> Option<UserRecord> {
        if remote.loading {
            return None;
        }
        let user = remote.user_info.clone()?;
        self.local_error = None;
        Some(user)
    }

    /// Close the alert. Only the local error is cleared.
    pub fn dismiss_alert(&mut self) {
        self.local_error = None;
    }

    pub fn alert(&self, remote: &RemoteAuthState) -> Option<AlertMessage> {
        if let Some(local) = &self.local_error {
            return Some(AlertMessage::Local(local.clone()));
        }
        remote.error.clone().map(AlertMessage::Remote)
    }
}
