//! Sign-in form state.

use outreach_core::{FieldValidation, validate_email};

/// Fields of the sign-in screen.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    /// Email address as typed.
    pub email: String,
    /// Password as typed.
    pub password: String,
    /// Whether submit was pressed; hints show after that.
    pub submitted: bool,
}

impl LoginForm {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inline hint for the email field.
    #[must_use]
    pub fn email_hint(&self) -> Option<String> {
        if !self.submitted {
            return None;
        }
        let FieldValidation { is_valid, message } = validate_email(&self.email);
        (!is_valid).then_some(message)
    }

    /// Whether the submit button is enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }

    /// Drops the password after a sign-in attempt.
    pub fn clear_password(&mut self) {
        self.password.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_hint_until_submitted() {
        let mut form = LoginForm {
            email: "nope".into(),
            ..LoginForm::new()
        };
        assert_eq!(form.email_hint(), None);
        form.submitted = true;
        assert_eq!(
            form.email_hint().as_deref(),
            Some("Please enter a valid email address")
        );
        form.email = "ana@acme.io".into();
        assert_eq!(form.email_hint(), None);
    }

    #[test]
    fn submit_needs_both_fields() {
        let mut form = LoginForm::new();
        assert!(!form.can_submit());
        form.email = "ana@acme.io".into();
        assert!(!form.can_submit());
        form.password = "hunter22".into();
        assert!(form.can_submit());
        form.clear_password();
        assert!(!form.can_submit());
    }
}
