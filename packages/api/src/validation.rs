//! # Registration field validators
//!
//! Each validator maps field values to a human-readable message, or to an
//! empty string when the value is acceptable. They are pure and cheap, so the
//! form runs them on every keystroke to drive per-field hints and again on
//! submit to decide whether to call the server at all.
//!
//! | Function | Checks |
//! |----------|--------|
//! | [`validate_email`] | present, `local@domain.tld` shape, no whitespace |
//! | [`validate_password`] | present, at least [`MIN_PASSWORD_LEN`] chars, a letter and a digit, does not contain the email |
//! | [`validate_password_confirmation`] | present, equal to the password |
//! | [`first_failure`] | the three above in order, first message wins |

pub const MIN_PASSWORD_LEN: usize = 8;

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const PASSWORD_TOO_WEAK: &str = "Password must contain a letter and a number";
pub const PASSWORD_CONTAINS_EMAIL: &str = "Password must not contain your email";
pub const CONFIRMATION_REQUIRED: &str = "Please confirm your password";
pub const CONFIRMATION_MISMATCH: &str = "Passwords do not match";

/// Validate an email address. Returns an empty string when valid.
pub fn validate_email(email: &str) -> String {
    let email = email.trim();
    if email.is_empty() {
        return EMAIL_REQUIRED.to_string();
    }
    if !is_email_shaped(email) {
        return EMAIL_INVALID.to_string();
    }
    String::new()
}

fn is_email_shaped(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || !domain.contains('.') {
        return false;
    }
    domain.split('.').all(|label| !label.is_empty())
}

/// Validate a password for the given email. Returns an empty string when valid.
pub fn validate_password(email: &str, password: &str) -> String {
    if password.is_empty() {
        return PASSWORD_REQUIRED.to_string();
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return PASSWORD_TOO_SHORT.to_string();
    }
    let has_letter = password.chars().any(char::is_alphabetic);
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if !has_letter || !has_digit {
        return PASSWORD_TOO_WEAK.to_string();
    }
    if contains_email(email, password) {
        return PASSWORD_CONTAINS_EMAIL.to_string();
    }
    String::new()
}

fn contains_email(email: &str, password: &str) -> bool {
    let email = email.trim().to_lowercase();
    if email.is_empty() {
        return false;
    }
    let password = password.to_lowercase();
    if password.contains(&email) {
        return true;
    }
    // Local parts shorter than three chars would reject too many passwords.
    match email.split_once('@') {
        Some((local, _)) if local.chars().count() >= 3 => password.contains(local),
        _ => false,
    }
}

/// Validate the confirmation field against the password. Returns an empty
/// string when valid.
pub fn validate_password_confirmation(password: &str, confirmation: &str) -> String {
    if confirmation.is_empty() {
        return CONFIRMATION_REQUIRED.to_string();
    }
    if password != confirmation {
        return CONFIRMATION_MISMATCH.to_string();
    }
    String::new()
}

/// Run all three validators in order (email, password, confirmation) and
/// return the first failure message.
pub fn first_failure(email: &str, password: &str, confirmation: &str) -> Option<String> {
    [
        validate_email(email),
        validate_password(email, password),
        validate_password_confirmation(password, confirmation),
    ]
    .into_iter()
    .find(|msg| !msg.is_empty())
}
