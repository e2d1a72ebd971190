//! Read access to [`AppState`].

use chrono::{DateTime, Utc};
use outreach_table::Row;

use super::reducer::is_expired;
use super::state::{AppState, Toast};
use crate::account::WarmupStatus;
use crate::rows::to_rows;
use crate::user::OrgUser;

/// Whether a session token is held.
#[must_use]
pub const fn is_authenticated(state: &AppState) -> bool {
    state.session.token.is_some()
}

/// The session token, if any.
#[must_use]
pub fn session_token(state: &AppState) -> Option<&str> {
    state.session.token.as_deref()
}

/// The signed-in user, if known.
#[must_use]
pub const fn current_user(state: &AppState) -> Option<&OrgUser> {
    state.session.user.as_ref()
}

/// Rows of the accounts table.
#[must_use]
pub fn account_rows(state: &AppState) -> Vec<Row> {
    to_rows(&state.accounts.items)
}

/// Rows of the users table.
#[must_use]
pub fn user_rows(state: &AppState) -> Vec<Row> {
    to_rows(&state.users.items)
}

/// Rows of the current verification page.
#[must_use]
pub fn batch_rows(state: &AppState) -> Vec<Row> {
    to_rows(&state.verification.items)
}

/// Current verification page and the server's total count.
#[must_use]
pub const fn verification_page(state: &AppState) -> (usize, usize) {
    (state.verification.page, state.verification.total)
}

/// Accounts per warmup state: `(active, paused, inactive)`.
#[must_use]
pub fn warmup_counts(state: &AppState) -> (usize, usize, usize) {
    state
        .accounts
        .items
        .iter()
        .fold((0, 0, 0), |(active, paused, inactive), account| {
            match account.warmup_status {
                WarmupStatus::Active => (active + 1, paused, inactive),
                WarmupStatus::Paused => (active, paused + 1, inactive),
                WarmupStatus::Inactive => (active, paused, inactive + 1),
            }
        })
}

/// Toasts still within their display time at `now`.
#[must_use]
pub fn active_toasts(state: &AppState, now: DateTime<Utc>) -> Vec<&Toast> {
    state
        .toasts
        .toasts
        .iter()
        .filter(|toast| !is_expired(toast, now))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeDelta;

    use super::*;
    use crate::account::{AccountId, EmailAccount, Provider};
    use crate::store::{Action, ToastKind, reduce};

    fn account(id: &str, warmup: WarmupStatus) -> EmailAccount {
        EmailAccount {
            id: AccountId::new(id),
            name: id.into(),
            email: format!("{id}@acme.io"),
            provider: Provider::Outlook,
            warmup_status: warmup,
            daily_limit: 20,
            sent_today: 0,
            health_score: Some(70),
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    #[test]
    fn authentication() {
        let mut state = AppState::default();
        assert!(!is_authenticated(&state));
        reduce(&mut state, Action::SessionRestored("tok".into()));
        assert!(is_authenticated(&state));
        assert_eq!(session_token(&state), Some("tok"));
        assert!(current_user(&state).is_none());
    }

    #[test]
    fn rows_and_counts() {
        let mut state = AppState::default();
        state.accounts.items = vec![
            account("a", WarmupStatus::Active),
            account("b", WarmupStatus::Active),
            account("c", WarmupStatus::Paused),
        ];
        let rows = account_rows(&state);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].id().as_str(), "c");
        assert_eq!(warmup_counts(&state), (2, 1, 0));
    }

    #[test]
    fn toasts_filtered_by_age() {
        let start = DateTime::<Utc>::UNIX_EPOCH;
        let mut state = AppState::default();
        reduce(
            &mut state,
            Action::ToastPushed {
                kind: ToastKind::Success,
                message: "Saved".into(),
                at: start,
            },
        );
        assert_eq!(active_toasts(&state, start + TimeDelta::seconds(1)).len(), 1);
        assert!(active_toasts(&state, start + TimeDelta::seconds(10)).is_empty());
    }
}
