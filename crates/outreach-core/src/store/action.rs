//! Actions: the only way to change [`AppState`](super::AppState).

use chrono::{DateTime, Utc};
use outreach_table::RowId;

use super::state::{RequestSeq, ToastKind};
use crate::account::{AccountId, EmailAccount};
use crate::api::{Page, Session};
use crate::user::{OrgUser, UserId};
use crate::verification::{BatchId, BatchStatus, VerificationBatch};

/// A state transition request.
///
/// Async failures arrive as strings, matching how they are shown.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Session
    /// A stored token was found at startup.
    SessionRestored(String),
    /// Sign-in request sent.
    SignInStarted,
    /// Sign-in succeeded.
    SignedIn(Session),
    /// Sign-in failed.
    SignInFailed(String),
    /// The user signed out or the token was rejected; clears everything.
    SignedOut,

    // Accounts
    /// Accounts list request sent.
    AccountsRequested,
    /// Accounts list response.
    AccountsLoaded {
        /// Request this answers.
        request: RequestSeq,
        /// Accounts or failure message.
        result: Result<Vec<EmailAccount>, String>,
    },
    /// Accounts table selection changed.
    AccountsSelected(Vec<RowId>),
    /// Accounts were deleted on the server.
    AccountsRemoved(Vec<AccountId>),

    // Users
    /// Users list request sent.
    UsersRequested,
    /// Users list response.
    UsersLoaded {
        /// Request this answers.
        request: RequestSeq,
        /// Users or failure message.
        result: Result<Vec<OrgUser>, String>,
    },
    /// Users table selection changed.
    UsersSelected(Vec<RowId>),
    /// Users were deleted on the server.
    UsersRemoved(Vec<UserId>),

    // Verification
    /// A verification page request sent.
    VerificationRequested {
        /// 1-indexed page.
        page: usize,
        /// Rows per page.
        page_size: usize,
        /// Server-side search query.
        search: String,
        /// Server-side status filter; empty accepts all.
        statuses: Vec<BatchStatus>,
    },
    /// Verification page response.
    VerificationLoaded {
        /// Request this answers.
        request: RequestSeq,
        /// Page or failure message.
        result: Result<Page<VerificationBatch>, String>,
    },
    /// Verification table selection changed.
    VerificationSelected(Vec<RowId>),
    /// Batches were deleted on the server.
    BatchesRemoved(Vec<BatchId>),

    // Toasts
    /// Show a notification.
    ToastPushed {
        /// Severity.
        kind: ToastKind,
        /// Text.
        message: String,
        /// Current time.
        at: DateTime<Utc>,
    },
    /// Hide one notification.
    ToastDismissed(u64),
    /// Drop notifications older than the display time.
    ToastsExpired(DateTime<Utc>),
}

impl Action {
    /// Short name for logging; payloads may hold tokens.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SessionRestored(_) => "session/restored",
            Self::SignInStarted => "session/signInStarted",
            Self::SignedIn(_) => "session/signedIn",
            Self::SignInFailed(_) => "session/signInFailed",
            Self::SignedOut => "session/signedOut",
            Self::AccountsRequested => "accounts/requested",
            Self::AccountsLoaded { .. } => "accounts/loaded",
            Self::AccountsSelected(_) => "accounts/selected",
            Self::AccountsRemoved(_) => "accounts/removed",
            Self::UsersRequested => "users/requested",
            Self::UsersLoaded { .. } => "users/loaded",
            Self::UsersSelected(_) => "users/selected",
            Self::UsersRemoved(_) => "users/removed",
            Self::VerificationRequested { .. } => "verification/requested",
            Self::VerificationLoaded { .. } => "verification/loaded",
            Self::VerificationSelected(_) => "verification/selected",
            Self::BatchesRemoved(_) => "verification/removed",
            Self::ToastPushed { .. } => "toasts/pushed",
            Self::ToastDismissed(_) => "toasts/dismissed",
            Self::ToastsExpired(_) => "toasts/expired",
        }
    }
}
