//! Email account model types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Daily sending limit suggested for a freshly connected mailbox.
pub const DEFAULT_DAILY_LIMIT: u32 = 50;

/// Unique identifier for an email account, assigned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub String);

impl AccountId {
    /// Create a new account ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How the mailbox is connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Any mailbox reached over IMAP and SMTP with a password.
    #[default]
    Smtp,
    /// Google Workspace / Gmail via OAuth.
    Gmail,
    /// Microsoft 365 / Outlook via OAuth.
    Outlook,
}

impl Provider {
    /// Every provider, for pickers.
    pub const ALL: [Self; 3] = [Self::Smtp, Self::Gmail, Self::Outlook];

    /// Get display name for the provider.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Smtp => "SMTP / IMAP",
            Self::Gmail => "Google",
            Self::Outlook => "Microsoft",
        }
    }

    /// Whether the account is connected with server settings and a password.
    #[must_use]
    pub const fn needs_servers(&self) -> bool {
        matches!(self, Self::Smtp)
    }
}

/// Security/encryption mode for connections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Security {
    /// No encryption (not recommended).
    None,
    /// Implicit TLS (connect directly with TLS).
    #[default]
    Tls,
    /// STARTTLS upgrade after plaintext connect.
    StartTls,
}

impl Security {
    /// Every mode, most secure first.
    pub const ALL: [Self; 3] = [Self::Tls, Self::StartTls, Self::None];

    /// Get display name for the security mode.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::None => "None (insecure)",
            Self::Tls => "SSL/TLS",
            Self::StartTls => "STARTTLS",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::fmt::Display for Security {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Incoming or outgoing server settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    /// Server hostname.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Security mode.
    pub security: Security,
    /// Username for authentication.
    pub username: String,
    /// Password for authentication.
    pub password: String,
}

impl ServerConfig {
    /// Default IMAP port for the security mode.
    #[must_use]
    pub const fn imap_port(security: Security) -> u16 {
        match security {
            Security::None | Security::StartTls => 143,
            Security::Tls => 993,
        }
    }

    /// Default SMTP port for the security mode.
    #[must_use]
    pub const fn smtp_port(security: Security) -> u16 {
        match security {
            Security::None => 25,
            Security::StartTls => 587,
            Security::Tls => 465,
        }
    }

    fn preset(host: &str, port: u16, security: Security) -> Self {
        Self {
            host: host.to_string(),
            port,
            security,
            ..Self::default()
        }
    }
}

/// Warmup state of a sending account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarmupStatus {
    /// Warmup emails are being exchanged.
    Active,
    /// Warmup was paused by the user.
    Paused,
    /// Warmup was never started.
    #[default]
    Inactive,
}

impl WarmupStatus {
    /// Label shown in tables and filters.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Paused => "Paused",
            Self::Inactive => "Inactive",
        }
    }
}

/// A connected sending account as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailAccount {
    /// Unique identifier; empty when the backend omitted it.
    #[serde(default)]
    pub id: AccountId,
    /// Sender display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Connection type.
    pub provider: Provider,
    /// Warmup state.
    #[serde(default)]
    pub warmup_status: WarmupStatus,
    /// Maximum emails sent per day.
    pub daily_limit: u32,
    /// Emails sent today.
    #[serde(default)]
    pub sent_today: u32,
    /// Deliverability score 0-100, absent until the first warmup report.
    #[serde(default)]
    pub health_score: Option<u8>,
    /// When the account was connected.
    pub created_at: DateTime<Utc>,
}

impl EmailAccount {
    /// Remaining sends for today.
    #[must_use]
    pub const fn remaining_today(&self) -> u32 {
        self.daily_limit.saturating_sub(self.sent_today)
    }
}

/// Input of the connect-account form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailAccountDraft {
    /// Sender display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Connection type.
    pub provider: Provider,
    /// Incoming server, for SMTP accounts.
    pub imap: ServerConfig,
    /// Outgoing server, for SMTP accounts.
    pub smtp: ServerConfig,
    /// Maximum emails sent per day.
    pub daily_limit: u32,
}

impl Default for EmailAccountDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            provider: Provider::default(),
            imap: ServerConfig::default(),
            smtp: ServerConfig::default(),
            daily_limit: DEFAULT_DAILY_LIMIT,
        }
    }
}

impl EmailAccountDraft {
    /// Create a draft with common defaults for well-known providers.
    ///
    /// Google and Microsoft domains switch to their OAuth provider; other
    /// well-known domains get server presets.
    #[must_use]
    pub fn with_email(email: &str) -> Self {
        let mut draft = Self {
            email: email.to_string(),
            ..Self::default()
        };

        if let Some(domain) = email.split('@').nth(1) {
            match domain.to_lowercase().as_str() {
                "gmail.com" | "googlemail.com" => {
                    draft.provider = Provider::Gmail;
                    draft.imap = ServerConfig::preset("imap.gmail.com", 993, Security::Tls);
                    draft.smtp = ServerConfig::preset("smtp.gmail.com", 465, Security::Tls);
                }
                "outlook.com" | "hotmail.com" | "live.com" => {
                    draft.provider = Provider::Outlook;
                    draft.imap =
                        ServerConfig::preset("outlook.office365.com", 993, Security::Tls);
                    draft.smtp =
                        ServerConfig::preset("smtp.office365.com", 587, Security::StartTls);
                }
                "yahoo.com" | "ymail.com" => {
                    draft.imap = ServerConfig::preset("imap.mail.yahoo.com", 993, Security::Tls);
                    draft.smtp = ServerConfig::preset("smtp.mail.yahoo.com", 465, Security::Tls);
                }
                "icloud.com" | "me.com" | "mac.com" => {
                    draft.imap = ServerConfig::preset("imap.mail.me.com", 993, Security::Tls);
                    draft.smtp =
                        ServerConfig::preset("smtp.mail.me.com", 587, Security::StartTls);
                }
                _ => {}
            }
        }

        // Set username to email by default
        draft.imap.username = email.to_string();
        draft.smtp.username = email.to_string();

        draft
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod enum_tests {
        use super::*;

        #[test]
        fn defaults() {
            assert_eq!(Security::default(), Security::Tls);
            assert_eq!(Provider::default(), Provider::Smtp);
            assert_eq!(WarmupStatus::default(), WarmupStatus::Inactive);
        }

        #[test]
        fn only_smtp_needs_servers() {
            assert!(Provider::Smtp.needs_servers());
            assert!(!Provider::Gmail.needs_servers());
            assert!(!Provider::Outlook.needs_servers());
        }

        #[test]
        fn default_ports() {
            assert_eq!(ServerConfig::imap_port(Security::Tls), 993);
            assert_eq!(ServerConfig::imap_port(Security::StartTls), 143);
            assert_eq!(ServerConfig::smtp_port(Security::StartTls), 587);
            assert_eq!(ServerConfig::smtp_port(Security::None), 25);
        }
    }

    mod draft_tests {
        use super::*;

        #[test]
        fn with_email_gmail() {
            let draft = EmailAccountDraft::with_email("user@gmail.com");
            assert_eq!(draft.provider, Provider::Gmail);
            assert_eq!(draft.imap.host, "imap.gmail.com");
            assert_eq!(draft.smtp.port, 465);
            assert_eq!(draft.smtp.username, "user@gmail.com");
        }

        #[test]
        fn with_email_outlook() {
            let draft = EmailAccountDraft::with_email("user@Hotmail.com");
            assert_eq!(draft.provider, Provider::Outlook);
            assert_eq!(draft.smtp.host, "smtp.office365.com");
            assert_eq!(draft.smtp.security, Security::StartTls);
        }

        #[test]
        fn with_email_icloud_stays_smtp() {
            let draft = EmailAccountDraft::with_email("user@me.com");
            assert_eq!(draft.provider, Provider::Smtp);
            assert_eq!(draft.imap.host, "imap.mail.me.com");
        }

        #[test]
        fn with_email_unknown_domain() {
            let draft = EmailAccountDraft::with_email("user@example.org");
            assert_eq!(draft.provider, Provider::Smtp);
            assert!(draft.imap.host.is_empty());
            assert_eq!(draft.imap.username, "user@example.org");
            assert_eq!(draft.daily_limit, DEFAULT_DAILY_LIMIT);
        }
    }

    mod account_tests {
        use super::*;

        #[test]
        fn deserializes_backend_shape() {
            let json = r#"{
                "id": "acc_1",
                "name": "Dana",
                "email": "dana@acme.io",
                "provider": "gmail",
                "warmupStatus": "active",
                "dailyLimit": 40,
                "sentToday": 12,
                "healthScore": 92,
                "createdAt": "2024-03-01T10:00:00Z"
            }"#;
            let account: EmailAccount = serde_json::from_str(json).unwrap();
            assert_eq!(account.id, AccountId::new("acc_1"));
            assert_eq!(account.provider, Provider::Gmail);
            assert_eq!(account.warmup_status, WarmupStatus::Active);
            assert_eq!(account.remaining_today(), 28);
        }

        #[test]
        fn optional_fields_default() {
            let json = r#"{
                "id": "acc_2",
                "name": "Lee",
                "email": "lee@acme.io",
                "provider": "smtp",
                "dailyLimit": 10,
                "createdAt": "2024-03-01T10:00:00Z"
            }"#;
            let account: EmailAccount = serde_json::from_str(json).unwrap();
            assert_eq!(account.warmup_status, WarmupStatus::Inactive);
            assert_eq!(account.health_score, None);
            assert_eq!(account.sent_today, 0);
        }
    }
}
