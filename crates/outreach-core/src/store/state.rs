//! Application state slices.

use chrono::{DateTime, Utc};
use outreach_table::RowId;

use crate::account::EmailAccount;
use crate::user::OrgUser;
use crate::verification::{BatchStatus, VerificationBatch};

/// Default rows per server page on the verification screen.
pub const DEFAULT_VERIFICATION_PAGE_SIZE: usize = 10;

/// Sequence number of an in-flight list request.
///
/// Each new request bumps the slice's counter; a response is applied only
/// when it carries the current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, PartialOrd, Ord)]
pub struct RequestSeq(pub u64);

impl RequestSeq {
    /// The next sequence number.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Signed-in user and token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSlice {
    /// Bearer token, when signed in or restored.
    pub token: Option<String>,
    /// Signed-in user; absent for a restored token until the next sign-in.
    pub user: Option<OrgUser>,
    /// Sign-in request in flight.
    pub signing_in: bool,
    /// Last sign-in failure.
    pub error: Option<String>,
}

/// A locally held list loaded in one request.
#[derive(Debug, Clone, PartialEq)]
pub struct ListSlice<T> {
    /// Items from the last successful load.
    pub items: Vec<T>,
    /// Load in flight.
    pub loading: bool,
    /// At least one load finished successfully.
    pub loaded: bool,
    /// Current request.
    pub request: RequestSeq,
    /// Selected table rows.
    pub selected: Vec<RowId>,
    /// Last load failure.
    pub error: Option<String>,
}

impl<T> Default for ListSlice<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            loaded: false,
            request: RequestSeq::default(),
            selected: Vec::new(),
            error: None,
        }
    }
}

/// Sending accounts.
pub type AccountsSlice = ListSlice<EmailAccount>;

/// Organization users.
pub type UsersSlice = ListSlice<OrgUser>;

/// Verification batches, paginated on the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationSlice {
    /// Items of the current server page.
    pub items: Vec<VerificationBatch>,
    /// Batches across all pages.
    pub total: usize,
    /// 1-indexed page being shown or requested.
    pub page: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Server-side search query.
    pub search: String,
    /// Server-side status filter.
    pub statuses: Vec<BatchStatus>,
    /// Load in flight.
    pub loading: bool,
    /// Current request.
    pub request: RequestSeq,
    /// Selected table rows.
    pub selected: Vec<RowId>,
    /// Last load failure.
    pub error: Option<String>,
}

impl Default for VerificationSlice {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: 1,
            page_size: DEFAULT_VERIFICATION_PAGE_SIZE,
            search: String::new(),
            statuses: Vec::new(),
            loading: false,
            request: RequestSeq::default(),
            selected: Vec::new(),
            error: None,
        }
    }
}

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Operation succeeded.
    Success,
    /// Neutral notice.
    Info,
    /// Operation failed.
    Error,
}

/// A transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Identifier for dismissal.
    pub id: u64,
    /// Severity.
    pub kind: ToastKind,
    /// Text shown.
    pub message: String,
    /// When it was raised.
    pub raised_at: DateTime<Utc>,
}

/// Notification stack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastSlice {
    /// Visible toasts, oldest first.
    pub toasts: Vec<Toast>,
    /// Identifier for the next toast.
    pub next_id: u64,
}

/// The whole application state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Session.
    pub session: SessionSlice,
    /// Sending accounts.
    pub accounts: AccountsSlice,
    /// Organization users.
    pub users: UsersSlice,
    /// Verification batches.
    pub verification: VerificationSlice,
    /// Notifications.
    pub toasts: ToastSlice,
}
