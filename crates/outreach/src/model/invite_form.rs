//! Invite-user form state.

use std::collections::HashMap;

use outreach_core::{UserInvite, validate_user_invite};

use super::account_form::collect_errors;
use crate::message::InviteFormMessage;

/// State for the invite-user form.
#[derive(Debug, Clone, Default)]
pub struct InviteFormState {
    /// Values sent to the backend.
    pub invite: UserInvite,
    /// Validation errors by field name.
    pub errors: HashMap<&'static str, String>,
    /// Error from the save request.
    pub save_error: Option<String>,
    /// Whether save is in progress.
    pub is_saving: bool,
}

impl InviteFormState {
    /// Empty form inviting a member.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a field edit. Returns `true` when the form should be saved.
    pub fn update(&mut self, message: InviteFormMessage) -> bool {
        match message {
            InviteFormMessage::NameChanged(name) => self.invite.name = name,
            InviteFormMessage::EmailChanged(email) => self.invite.email = email,
            InviteFormMessage::PhoneChanged(phone) => self.invite.phone = phone,
            InviteFormMessage::RoleChanged(role) => self.invite.role = role,
            InviteFormMessage::PasswordChanged(password) => self.invite.password = password,
            InviteFormMessage::Save => return !self.is_saving,
            InviteFormMessage::Cancel => {}
        }
        false
    }

    /// Validates the form, returning the trimmed invite to submit.
    pub fn validate(&mut self) -> Option<UserInvite> {
        self.errors.clear();
        match validate_user_invite(&self.invite) {
            Ok(()) => Some(UserInvite {
                name: self.invite.name.trim().to_string(),
                email: self.invite.email.trim().to_string(),
                phone: self.invite.phone.trim().to_string(),
                ..self.invite.clone()
            }),
            Err(errors) => {
                self.errors = collect_errors(errors);
                None
            }
        }
    }

    /// Error for `field`, if any.
    #[must_use]
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use outreach_core::Role;

    use super::*;

    fn filled() -> InviteFormState {
        let mut state = InviteFormState::new();
        for message in [
            InviteFormMessage::NameChanged(" Ana Ruiz ".into()),
            InviteFormMessage::EmailChanged("ana@acme.io ".into()),
            InviteFormMessage::RoleChanged(Role::Admin),
            InviteFormMessage::PasswordChanged("Secret123!".into()),
        ] {
            state.update(message);
        }
        state
    }

    #[test]
    fn valid_invite_is_trimmed() {
        let mut state = filled();
        let invite = state.validate().unwrap();
        assert_eq!(invite.name, "Ana Ruiz");
        assert_eq!(invite.email, "ana@acme.io");
        assert_eq!(invite.role, Role::Admin);
        assert!(invite.phone.is_empty());
    }

    #[test]
    fn weak_password_blocks_save() {
        let mut state = filled();
        state.update(InviteFormMessage::PasswordChanged("password".into()));
        assert!(state.validate().is_none());
        assert_eq!(
            state.error("password"),
            Some("Password must contain an uppercase letter")
        );
        assert_eq!(state.errors.len(), 1);
    }

    #[test]
    fn bad_phone_is_reported_when_given() {
        let mut state = filled();
        state.update(InviteFormMessage::PhoneChanged("12ab".into()));
        assert!(state.validate().is_none());
        assert!(state.error("phone").is_some());
    }

    #[test]
    fn errors_clear_once_fixed() {
        let mut state = InviteFormState::new();
        assert!(state.validate().is_none());
        assert!(state.error("name").is_some());
        state = filled();
        assert!(state.validate().is_some());
        assert!(state.errors.is_empty());
    }
}
