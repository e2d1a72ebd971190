//! Message types for application events.
//!
//! In the Elm architecture, Messages are events that trigger state changes.

use std::path::PathBuf;

use outreach_core::store::RequestSeq;
use outreach_core::{
    ApiError, EmailAccount, OrgUser, Page, Provider, Role, Security, Session, VerificationBatch,
};
use outreach_table::{RowId, TableEvent};

use crate::model::{AppSettings, TableId};

/// Application messages (events).
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    /// Show another list screen.
    NavigateTo(View),
    /// Switch between light and dark mode.
    ToggleTheme,

    // Session
    /// Sign-in form messages.
    Login(LoginMessage),
    /// Sign-in finished.
    SignedIn(Result<Session, String>),
    /// Stored token lookup at startup finished.
    SessionRestored(Result<Option<String>, String>),
    /// Sign out and forget the token.
    SignOut,
    /// Stored token removed.
    SignedOut(Result<(), String>),

    // Data
    /// Reload the current screen.
    Refresh,
    /// Accounts list response.
    AccountsLoaded(RequestSeq, Result<Vec<EmailAccount>, Failure>),
    /// Users list response.
    UsersLoaded(RequestSeq, Result<Vec<OrgUser>, Failure>),
    /// Verification page response.
    BatchesLoaded(RequestSeq, Result<Page<VerificationBatch>, Failure>),
    /// Interaction with one of the tables.
    Table(TableId, TableEvent),
    /// Delete requests finished.
    RowsDeleted(DeleteOutcome),

    // Forms
    /// Show the connect-account form.
    OpenAccountForm,
    /// Connect-account form messages.
    AccountForm(AccountFormMessage),
    /// Account created on the server.
    AccountCreated(Result<EmailAccount, Failure>),
    /// Show the invite-user form.
    OpenInviteForm,
    /// Invite-user form messages.
    InviteForm(InviteFormMessage),
    /// User invited on the server.
    UserInvited(Result<OrgUser, Failure>),

    // Export
    /// Export the filtered accounts as CSV.
    ExportAccounts,
    /// CSV file written.
    Exported(Result<PathBuf, String>),

    // Toasts
    /// Hide a notification.
    DismissToast(u64),
    /// Periodic check for expired notifications.
    ToastTick,

    // Settings
    /// Settings loaded.
    SettingsLoaded(Result<AppSettings, String>),
    /// Settings saved.
    SettingsSaved(Result<(), String>),

    // Keyboard
    /// Keyboard shortcut pressed.
    KeyPressed(KeyboardAction),
    /// Event with no effect.
    Ignore,
}

/// List screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Sending accounts.
    #[default]
    Accounts,
    /// Organization users.
    Users,
    /// Email verification batches.
    Verification,
}

impl View {
    /// All screens in navigation order.
    pub const ALL: [Self; 3] = [Self::Accounts, Self::Users, Self::Verification];

    /// Navigation label.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Accounts => "Email Accounts",
            Self::Users => "Users",
            Self::Verification => "Verification",
        }
    }

    /// Table shown on this screen.
    #[must_use]
    pub const fn table(self) -> TableId {
        match self {
            Self::Accounts => TableId::Accounts,
            Self::Users => TableId::Users,
            Self::Verification => TableId::Verification,
        }
    }
}

/// Sign-in form messages.
#[derive(Debug, Clone)]
pub enum LoginMessage {
    /// Email changed.
    EmailChanged(String),
    /// Password changed.
    PasswordChanged(String),
    /// Submit pressed.
    Submit,
}

/// Connect-account form messages.
#[derive(Debug, Clone)]
pub enum AccountFormMessage {
    /// Sender name changed.
    NameChanged(String),
    /// Email address changed.
    EmailChanged(String),
    /// Provider picked.
    ProviderChanged(Provider),
    /// IMAP host changed.
    ImapHostChanged(String),
    /// IMAP port changed.
    ImapPortChanged(String),
    /// IMAP security picked.
    ImapSecurityChanged(Security),
    /// IMAP username changed.
    ImapUsernameChanged(String),
    /// IMAP password changed.
    ImapPasswordChanged(String),
    /// SMTP host changed.
    SmtpHostChanged(String),
    /// SMTP port changed.
    SmtpPortChanged(String),
    /// SMTP security picked.
    SmtpSecurityChanged(Security),
    /// SMTP username changed.
    SmtpUsernameChanged(String),
    /// SMTP password changed.
    SmtpPasswordChanged(String),
    /// Daily limit changed.
    DailyLimitChanged(String),
    /// Save pressed.
    Save,
    /// Cancel pressed.
    Cancel,
}

/// Invite-user form messages.
#[derive(Debug, Clone)]
pub enum InviteFormMessage {
    /// Name changed.
    NameChanged(String),
    /// Email changed.
    EmailChanged(String),
    /// Phone changed.
    PhoneChanged(String),
    /// Role picked.
    RoleChanged(Role),
    /// Initial password changed.
    PasswordChanged(String),
    /// Save pressed.
    Save,
    /// Cancel pressed.
    Cancel,
}

/// Keyboard shortcut actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardAction {
    /// F5: reload the current screen.
    Refresh,
    /// Escape: clear the current table's selection.
    ClearSelection,
    /// Ctrl+E: export accounts.
    Export,
}

/// An API failure carried through a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Text shown to the user.
    pub message: String,
    /// The backend rejected the session token.
    pub unauthorized: bool,
}

impl From<ApiError> for Failure {
    fn from(err: ApiError) -> Self {
        Self {
            unauthorized: err.is_unauthorized(),
            message: err.to_string(),
        }
    }
}

/// Result of deleting one or more rows.
#[derive(Debug, Clone)]
pub struct DeleteOutcome {
    /// Table the rows belong to.
    pub table: TableId,
    /// Rows the server deleted.
    pub removed: Vec<RowId>,
    /// First failure; later rows were not attempted.
    pub error: Option<Failure>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_view_has_its_table() {
        let tables: Vec<TableId> = View::ALL.iter().map(|v| v.table()).collect();
        assert_eq!(
            tables,
            vec![TableId::Accounts, TableId::Users, TableId::Verification]
        );
    }

    #[test]
    fn failure_from_unauthenticated() {
        let failure = Failure::from(ApiError::Unauthenticated);
        assert!(failure.unauthorized);
        let failure = Failure::from(ApiError::http(500, "boom"));
        assert!(!failure.unauthorized);
        assert!(failure.message.contains("boom"));
    }
}
