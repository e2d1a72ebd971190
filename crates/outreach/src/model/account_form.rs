//! Connect-account form state.

use std::collections::HashMap;

use outreach_core::{
    EmailAccountDraft, Provider, Security, ServerConfig, ValidationError, validate_email_account,
};

use crate::message::AccountFormMessage;

/// State for the connect-account form.
///
/// Numeric fields are kept as typed so a half-entered port is not lost;
/// they are parsed on save.
#[derive(Debug, Clone)]
pub struct AccountFormState {
    /// Values sent to the backend.
    pub draft: EmailAccountDraft,
    /// IMAP port as typed.
    pub imap_port: String,
    /// SMTP port as typed.
    pub smtp_port: String,
    /// Daily sending limit as typed.
    pub daily_limit: String,
    /// Validation errors by field name.
    pub errors: HashMap<&'static str, String>,
    /// Error from the save request.
    pub save_error: Option<String>,
    /// Whether save is in progress.
    pub is_saving: bool,
}

impl Default for AccountFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountFormState {
    /// Empty form with standard TLS ports.
    #[must_use]
    pub fn new() -> Self {
        let mut draft = EmailAccountDraft::default();
        draft.imap.port = ServerConfig::imap_port(Security::Tls);
        draft.smtp.port = ServerConfig::smtp_port(Security::Tls);
        Self {
            imap_port: draft.imap.port.to_string(),
            smtp_port: draft.smtp.port.to_string(),
            daily_limit: draft.daily_limit.to_string(),
            draft,
            errors: HashMap::new(),
            save_error: None,
            is_saving: false,
        }
    }

    /// Applies a field edit. Returns `true` when the form should be saved.
    pub fn update(&mut self, message: AccountFormMessage) -> bool {
        match message {
            AccountFormMessage::NameChanged(name) => self.draft.name = name,
            AccountFormMessage::EmailChanged(email) => self.set_email(email),
            AccountFormMessage::ProviderChanged(provider) => self.draft.provider = provider,
            AccountFormMessage::ImapHostChanged(host) => self.draft.imap.host = host,
            AccountFormMessage::ImapPortChanged(port) => self.imap_port = port,
            AccountFormMessage::ImapSecurityChanged(security) => {
                self.draft.imap.security = security;
                self.imap_port = ServerConfig::imap_port(security).to_string();
            }
            AccountFormMessage::ImapUsernameChanged(username) => {
                self.draft.imap.username = username;
            }
            AccountFormMessage::ImapPasswordChanged(password) => {
                self.draft.imap.password = password;
            }
            AccountFormMessage::SmtpHostChanged(host) => self.draft.smtp.host = host,
            AccountFormMessage::SmtpPortChanged(port) => self.smtp_port = port,
            AccountFormMessage::SmtpSecurityChanged(security) => {
                self.draft.smtp.security = security;
                self.smtp_port = ServerConfig::smtp_port(security).to_string();
            }
            AccountFormMessage::SmtpUsernameChanged(username) => {
                self.draft.smtp.username = username;
            }
            AccountFormMessage::SmtpPasswordChanged(password) => {
                self.draft.smtp.password = password;
            }
            AccountFormMessage::DailyLimitChanged(limit) => self.daily_limit = limit,
            AccountFormMessage::Save => return !self.is_saving,
            AccountFormMessage::Cancel => {}
        }
        false
    }

    /// Sets the address, filling provider and servers for well-known domains.
    ///
    /// Usernames still equal to the previous address follow the new one.
    fn set_email(&mut self, email: String) {
        let preset = EmailAccountDraft::with_email(&email);
        let previous = std::mem::replace(&mut self.draft.email, email);

        if preset.provider != Provider::Smtp || !preset.imap.host.is_empty() {
            self.draft.provider = preset.provider;
            for (server, preset) in [
                (&mut self.draft.imap, &preset.imap),
                (&mut self.draft.smtp, &preset.smtp),
            ] {
                server.host.clone_from(&preset.host);
                server.port = preset.port;
                server.security = preset.security;
            }
            self.imap_port = self.draft.imap.port.to_string();
            self.smtp_port = self.draft.smtp.port.to_string();
        }

        for server in [&mut self.draft.imap, &mut self.draft.smtp] {
            if server.username.is_empty() || server.username == previous {
                server.username.clone_from(&self.draft.email);
            }
        }
    }

    /// Parses the typed numbers and validates the form.
    ///
    /// Returns the draft to submit, or records every field error.
    pub fn validate(&mut self) -> Option<EmailAccountDraft> {
        // Unparseable numbers become 0, which the validator rejects
        self.draft.imap.port = self.imap_port.trim().parse().unwrap_or(0);
        self.draft.smtp.port = self.smtp_port.trim().parse().unwrap_or(0);
        self.draft.daily_limit = self.daily_limit.trim().parse().unwrap_or(0);

        self.errors.clear();
        match validate_email_account(&self.draft) {
            Ok(()) => Some(self.draft.clone()),
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

/// Keeps the first message per field.
pub(super) fn collect_errors(errors: Vec<ValidationError>) -> HashMap<&'static str, String> {
    let mut by_field = HashMap::new();
    for error in errors {
        by_field.entry(error.field).or_insert(error.message);
    }
    by_field
}
