//! Shared form validation.
//!
//! Field validators are pure and return a [`FieldValidation`]. Form
//! validators collect every failing field as a [`ValidationError`].

use crate::account::{EmailAccountDraft, ServerConfig};
use crate::user::UserInvite;

/// Minimum password length.
const MIN_PASSWORD_LEN: usize = 8;

/// Digit bounds for a phone number (E.164 allows at most 15).
const MIN_PHONE_DIGITS: usize = 7;
const MAX_PHONE_DIGITS: usize = 15;

/// Upper bound for the per-account daily sending limit.
pub const MAX_DAILY_LIMIT: u32 = 2_000;

/// Outcome of validating one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidation {
    /// Whether the value is acceptable.
    pub is_valid: bool,
    /// Human-readable reason; empty when valid.
    pub message: String,
}

impl FieldValidation {
    /// A passing result.
    #[must_use]
    pub const fn valid() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
        }
    }

    /// A failing result with `message`.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
        }
    }
}

/// Checks an email address.
#[must_use]
pub fn validate_email(email: &str) -> FieldValidation {
    let email = email.trim();
    if email.is_empty() {
        return FieldValidation::invalid("Email is required");
    }
    if is_valid_email(email) {
        FieldValidation::valid()
    } else {
        FieldValidation::invalid("Please enter a valid email address")
    }
}

/// Checks a phone number.
///
/// Accepts an optional leading `+`, digits, spaces, dashes, dots and
/// parentheses, with 7 to 15 digits in total.
#[must_use]
pub fn validate_phone(phone: &str) -> FieldValidation {
    let phone = phone.trim();
    if phone.is_empty() {
        return FieldValidation::invalid("Phone number is required");
    }
    let rest = phone.strip_prefix('+').unwrap_or(phone);
    if !rest
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '.' | '(' | ')'))
    {
        return FieldValidation::invalid(
            "Phone number may only contain digits, spaces, dashes, dots and parentheses",
        );
    }
    let digits = rest.chars().filter(char::is_ascii_digit).count();
    if (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits) {
        FieldValidation::valid()
    } else {
        FieldValidation::invalid("Phone number must have 7 to 15 digits")
    }
}

/// Checks password strength.
///
/// The message names the first rule that is not met.
#[must_use]
pub fn validate_password(password: &str) -> FieldValidation {
    if password.is_empty() {
        return FieldValidation::invalid("Password is required");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return FieldValidation::invalid("Password must be at least 8 characters");
    }
    if !password.chars().any(char::is_uppercase) {
        return FieldValidation::invalid("Password must contain an uppercase letter");
    }
    if !password.chars().any(char::is_lowercase) {
        return FieldValidation::invalid("Password must contain a lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return FieldValidation::invalid("Password must contain a number");
    }
    if password.chars().all(char::is_alphanumeric) {
        return FieldValidation::invalid("Password must contain a special character");
    }
    FieldValidation::valid()
}

/// Checks that `value` is not blank.
#[must_use]
pub fn validate_required(label: &str, value: &str) -> FieldValidation {
    if value.trim().is_empty() {
        FieldValidation::invalid(format!("{label} is required"))
    } else {
        FieldValidation::valid()
    }
}

/// Validation error for a form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Field name the error relates to.
    pub field: &'static str,
    /// Human-readable message.
    pub message: String,
}

impl ValidationError {
    fn check(field: &'static str, result: FieldValidation, errors: &mut Vec<Self>) {
        if !result.is_valid {
            errors.push(Self {
                field,
                message: result.message,
            });
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Result of validating a form.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate the connect-account form.
///
/// OAuth providers need no server settings; SMTP accounts need both IMAP
/// and SMTP.
///
/// # Errors
///
/// Returns every invalid field.
pub fn validate_email_account(draft: &EmailAccountDraft) -> ValidationResult {
    let mut errors = Vec::new();

    ValidationError::check("name", validate_required("Sender name", &draft.name), &mut errors);
    ValidationError::check("email", validate_email(&draft.email), &mut errors);

    if draft.provider.needs_servers() {
        check_server("imap", "IMAP", &draft.imap, &mut errors);
        check_server("smtp", "SMTP", &draft.smtp, &mut errors);
    }

    if draft.daily_limit == 0 || draft.daily_limit > MAX_DAILY_LIMIT {
        errors.push(ValidationError {
            field: "daily_limit",
            message: format!("Daily limit must be 1-{MAX_DAILY_LIMIT}"),
        });
    }

    finish(errors)
}

fn check_server(
    prefix: &'static str,
    label: &str,
    server: &ServerConfig,
    errors: &mut Vec<ValidationError>,
) {
    let (host, port, username, password) = match prefix {
        "imap" => ("imap_host", "imap_port", "imap_username", "imap_password"),
        _ => ("smtp_host", "smtp_port", "smtp_username", "smtp_password"),
    };
    ValidationError::check(
        host,
        validate_required(&format!("{label} server"), &server.host),
        errors,
    );
    if server.port == 0 {
        errors.push(ValidationError {
            field: port,
            message: format!("{label} port must be 1-65535"),
        });
    }
    ValidationError::check(
        username,
        validate_required(&format!("{label} username"), &server.username),
        errors,
    );
    if server.password.is_empty() {
        errors.push(ValidationError {
            field: password,
            message: format!("{label} password is required"),
        });
    }
}

/// Validate the sign-in form.
///
/// Only presence is checked for the password; strength rules apply when
/// a password is chosen, not when it is entered.
///
/// # Errors
///
/// Returns every invalid field.
pub fn validate_login(email: &str, password: &str) -> ValidationResult {
    let mut errors = Vec::new();
    ValidationError::check("email", validate_email(email), &mut errors);
    ValidationError::check("password", validate_required("Password", password), &mut errors);
    finish(errors)
}

/// Validate the invite-user form.
///
/// The phone number is optional; the initial password must be strong.
///
/// # Errors
///
/// Returns every invalid field.
pub fn validate_user_invite(invite: &UserInvite) -> ValidationResult {
    let mut errors = Vec::new();
    ValidationError::check("name", validate_required("Name", &invite.name), &mut errors);
    ValidationError::check("email", validate_email(&invite.email), &mut errors);
    if !invite.phone.trim().is_empty() {
        ValidationError::check("phone", validate_phone(&invite.phone), &mut errors);
    }
    ValidationError::check("password", validate_password(&invite.password), &mut errors);
    finish(errors)
}

/// Basic email validation.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    // Exactly one @ and a non-empty local part
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // Domain needs a dot and no empty labels
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}
