//! Pure reducers, one per slice.

use chrono::{DateTime, TimeDelta, Utc};
use outreach_table::RowId;
use tracing::debug;

use super::action::Action;
use super::state::{
    AppState, ListSlice, RequestSeq, SessionSlice, Toast, ToastSlice, VerificationSlice,
};

/// How long a toast stays visible.
pub const TOAST_TTL: TimeDelta = TimeDelta::seconds(5);

/// Most toasts kept at once; older ones are dropped first.
const MAX_TOASTS: usize = 4;

/// Applies `action` to `state`.
pub fn reduce(state: &mut AppState, action: Action) {
    match action {
        Action::SignedOut => *state = AppState::default(),
        Action::SessionRestored(_)
        | Action::SignInStarted
        | Action::SignedIn(_)
        | Action::SignInFailed(_) => reduce_session(&mut state.session, action),

        Action::AccountsRequested => request_list(&mut state.accounts),
        Action::AccountsLoaded { request, result } => {
            load_list(&mut state.accounts, request, result);
        }
        Action::AccountsSelected(ids) => state.accounts.selected = ids,
        Action::AccountsRemoved(ids) => {
            let ids: Vec<&str> = ids.iter().map(|id| id.0.as_str()).collect();
            remove_items(&mut state.accounts, &ids, |a| a.id.0.as_str());
        }

        Action::UsersRequested => request_list(&mut state.users),
        Action::UsersLoaded { request, result } => load_list(&mut state.users, request, result),
        Action::UsersSelected(ids) => state.users.selected = ids,
        Action::UsersRemoved(ids) => {
            let ids: Vec<&str> = ids.iter().map(|id| id.0.as_str()).collect();
            remove_items(&mut state.users, &ids, |u| u.id.0.as_str());
        }

        Action::VerificationRequested { .. }
        | Action::VerificationLoaded { .. }
        | Action::VerificationSelected(_)
        | Action::BatchesRemoved(_) => reduce_verification(&mut state.verification, action),

        Action::ToastPushed { .. } | Action::ToastDismissed(_) | Action::ToastsExpired(_) => {
            reduce_toasts(&mut state.toasts, action);
        }
    }
}

fn reduce_session(session: &mut SessionSlice, action: Action) {
    match action {
        Action::SessionRestored(token) => {
            session.token = Some(token);
            session.error = None;
        }
        Action::SignInStarted => {
            session.signing_in = true;
            session.error = None;
        }
        Action::SignedIn(signed_in) => {
            *session = SessionSlice {
                token: Some(signed_in.token),
                user: Some(signed_in.user),
                signing_in: false,
                error: None,
            };
        }
        Action::SignInFailed(message) => {
            session.signing_in = false;
            session.error = Some(message);
        }
        _ => {}
    }
}

fn request_list<T>(slice: &mut ListSlice<T>) {
    slice.request = slice.request.next();
    slice.loading = true;
    slice.error = None;
}

fn load_list<T>(slice: &mut ListSlice<T>, request: RequestSeq, result: Result<Vec<T>, String>) {
    if request != slice.request {
        debug!("Dropping stale response {request:?}, current {:?}", slice.request);
        return;
    }
    slice.loading = false;
    match result {
        Ok(items) => {
            slice.items = items;
            slice.loaded = true;
            slice.error = None;
        }
        Err(message) => slice.error = Some(message),
    }
}

fn remove_items<T>(slice: &mut ListSlice<T>, ids: &[&str], id_of: impl Fn(&T) -> &str) {
    slice.items.retain(|item| !ids.contains(&id_of(item)));
    prune_selection(&mut slice.selected, ids);
}

fn prune_selection(selected: &mut Vec<RowId>, ids: &[&str]) {
    selected.retain(|id| !ids.contains(&id.as_str()));
}

fn reduce_verification(slice: &mut VerificationSlice, action: Action) {
    match action {
        Action::VerificationRequested {
            page,
            page_size,
            search,
            statuses,
        } => {
            slice.page = page.max(1);
            slice.page_size = page_size.max(1);
            slice.search = search;
            slice.statuses = statuses;
            slice.request = slice.request.next();
            slice.loading = true;
            slice.error = None;
        }
        Action::VerificationLoaded { request, result } => {
            if request != slice.request {
                debug!("Dropping stale response {request:?}, current {:?}", slice.request);
                return;
            }
            slice.loading = false;
            match result {
                Ok(page) => {
                    slice.items = page.items;
                    slice.total = page.total;
                    slice.error = None;
                }
                Err(message) => slice.error = Some(message),
            }
        }
        Action::VerificationSelected(ids) => slice.selected = ids,
        Action::BatchesRemoved(ids) => {
            let ids: Vec<&str> = ids.iter().map(|id| id.0.as_str()).collect();
            let before = slice.items.len();
            slice.items.retain(|b| !ids.contains(&b.id.0.as_str()));
            slice.total = slice.total.saturating_sub(before - slice.items.len());
            prune_selection(&mut slice.selected, &ids);
        }
        _ => {}
    }
}

fn reduce_toasts(slice: &mut ToastSlice, action: Action) {
    match action {
        Action::ToastPushed { kind, message, at } => {
            slice.toasts.push(Toast {
                id: slice.next_id,
                kind,
                message,
                raised_at: at,
            });
            slice.next_id += 1;
            if slice.toasts.len() > MAX_TOASTS {
                let excess = slice.toasts.len() - MAX_TOASTS;
                slice.toasts.drain(..excess);
            }
        }
        Action::ToastDismissed(id) => slice.toasts.retain(|t| t.id != id),
        Action::ToastsExpired(now) => slice.toasts.retain(|t| !is_expired(t, now)),
        _ => {}
    }
}

/// Whether `toast` has outlived [`TOAST_TTL`] at `now`.
#[must_use]
pub fn is_expired(toast: &Toast, now: DateTime<Utc>) -> bool {
    now.signed_duration_since(toast.raised_at) >= TOAST_TTL
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::account::{AccountId, EmailAccount, Provider, WarmupStatus};
    use crate::api::{Page, Session};
    use crate::store::state::ToastKind;
    use crate::user::{OrgUser, Role, UserId};
    use crate::verification::{BatchId, BatchStatus, VerificationBatch};

    fn account(id: &str) -> EmailAccount {
        EmailAccount {
            id: AccountId::new(id),
            name: "Dana".into(),
            email: format!("{id}@acme.io"),
            provider: Provider::Smtp,
            warmup_status: WarmupStatus::Active,
            daily_limit: 30,
            sent_today: 0,
            health_score: None,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    fn user(id: &str) -> OrgUser {
        OrgUser {
            id: UserId(id.into()),
            name: "Ana".into(),
            email: "ana@acme.io".into(),
            phone: None,
            role: Role::Admin,
            active: true,
            last_login_at: None,
        }
    }

    fn batch(id: &str) -> VerificationBatch {
        VerificationBatch {
            id: BatchId(id.into()),
            file_name: format!("{id}.csv"),
            status: BatchStatus::Queued,
            total: 10,
            valid: 0,
            invalid: 0,
            risky: 0,
            unknown: 0,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    mod session_tests {
        use super::*;

        #[test]
        fn sign_in_flow() {
            let mut state = AppState::default();
            reduce(&mut state, Action::SignInStarted);
            assert!(state.session.signing_in);
            reduce(&mut state, Action::SignInFailed("Invalid credentials".into()));
            assert!(!state.session.signing_in);
            assert_eq!(state.session.error.as_deref(), Some("Invalid credentials"));

            reduce(
                &mut state,
                Action::SignedIn(Session {
                    token: "tok".into(),
                    user: user("u1"),
                }),
            );
            assert_eq!(state.session.token.as_deref(), Some("tok"));
            assert!(state.session.error.is_none());
        }

        #[test]
        fn sign_out_clears_everything() {
            let mut state = AppState::default();
            reduce(&mut state, Action::SessionRestored("tok".into()));
            reduce(&mut state, Action::AccountsRequested);
            reduce(&mut state, Action::SignedOut);
            assert_eq!(state, AppState::default());
        }
    }

    mod list_tests {
        use super::*;

        #[test]
        fn stale_response_dropped() {
            let mut state = AppState::default();
            reduce(&mut state, Action::AccountsRequested);
            let first = state.accounts.request;
            reduce(&mut state, Action::AccountsRequested);
            let second = state.accounts.request;

            reduce(
                &mut state,
                Action::AccountsLoaded {
                    request: first,
                    result: Ok(vec![account("old")]),
                },
            );
            assert!(state.accounts.loading);
            assert!(state.accounts.items.is_empty());

            reduce(
                &mut state,
                Action::AccountsLoaded {
                    request: second,
                    result: Ok(vec![account("new")]),
                },
            );
            assert!(!state.accounts.loading);
            assert!(state.accounts.loaded);
            assert_eq!(state.accounts.items[0].id, AccountId::new("new"));
        }

        #[test]
        fn failure_keeps_previous_items() {
            let mut state = AppState::default();
            reduce(&mut state, Action::UsersRequested);
            let request = state.users.request;
            reduce(
                &mut state,
                Action::UsersLoaded {
                    request,
                    result: Ok(vec![user("u1")]),
                },
            );
            reduce(&mut state, Action::UsersRequested);
            let request = state.users.request;
            reduce(
                &mut state,
                Action::UsersLoaded {
                    request,
                    result: Err("HTTP 500: boom".into()),
                },
            );
            assert_eq!(state.users.items.len(), 1);
            assert_eq!(state.users.error.as_deref(), Some("HTTP 500: boom"));
        }

        #[test]
        fn removal_prunes_selection() {
            let mut state = AppState::default();
            state.accounts.items = vec![account("a"), account("b"), account("c")];
            reduce(
                &mut state,
                Action::AccountsSelected(vec!["a".into(), "b".into()]),
            );
            reduce(&mut state, Action::AccountsRemoved(vec![AccountId::new("a")]));
            assert_eq!(state.accounts.items.len(), 2);
            assert_eq!(state.accounts.selected, vec![RowId::from("b")]);

            state.users.items = vec![user("u1")];
            reduce(&mut state, Action::UsersRemoved(vec![UserId("u1".into())]));
            assert!(state.users.items.is_empty());
        }
    }

    mod verification_tests {
        use super::*;

        #[test]
        fn request_then_load() {
            let mut state = AppState::default();
            reduce(
                &mut state,
                Action::VerificationRequested {
                    page: 3,
                    page_size: 25,
                    search: "leads".into(),
                    statuses: vec![BatchStatus::Failed],
                },
            );
            let slice = &state.verification;
            assert_eq!((slice.page, slice.page_size, slice.search.as_str()), (3, 25, "leads"));
            assert_eq!(slice.statuses, vec![BatchStatus::Failed]);
            assert!(slice.loading);

            let request = slice.request;
            reduce(
                &mut state,
                Action::VerificationLoaded {
                    request,
                    result: Ok(Page {
                        items: vec![batch("b1"), batch("b2")],
                        total: 52,
                    }),
                },
            );
            assert_eq!(state.verification.total, 52);
            assert!(!state.verification.loading);
        }

        #[test]
        fn removal_adjusts_total() {
            let mut state = AppState::default();
            state.verification.items = vec![batch("b1"), batch("b2")];
            state.verification.total = 12;
            state.verification.selected = vec!["b1".into(), "b2".into()];
            reduce(&mut state, Action::BatchesRemoved(vec![BatchId("b1".into())]));
            assert_eq!(state.verification.total, 11);
            assert_eq!(state.verification.selected, vec![RowId::from("b2")]);
        }
    }

    mod toast_tests {
        use super::*;

        fn push(state: &mut AppState, message: &str, at: DateTime<Utc>) {
            reduce(
                state,
                Action::ToastPushed {
                    kind: ToastKind::Error,
                    message: message.into(),
                    at,
                },
            );
        }

        #[test]
        fn expire_and_dismiss() {
            let start = DateTime::<Utc>::UNIX_EPOCH;
            let mut state = AppState::default();
            push(&mut state, "first", start);
            push(&mut state, "second", start + TimeDelta::seconds(3));

            reduce(&mut state, Action::ToastsExpired(start + TOAST_TTL));
            assert_eq!(state.toasts.toasts.len(), 1);
            assert_eq!(state.toasts.toasts[0].message, "second");

            reduce(&mut state, Action::ToastDismissed(1));
            assert!(state.toasts.toasts.is_empty());
        }

        #[test]
        fn stack_is_bounded() {
            let now = DateTime::<Utc>::UNIX_EPOCH;
            let mut state = AppState::default();
            for i in 0..6 {
                push(&mut state, &format!("toast {i}"), now);
            }
            assert_eq!(state.toasts.toasts.len(), MAX_TOASTS);
            assert_eq!(state.toasts.toasts[0].message, "toast 2");
        }
    }
}
