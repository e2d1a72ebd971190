//! Application state container.
//!
//! A single [`AppState`] is changed only by dispatching [`Action`]s through
//! [`Store::dispatch`], which runs the pure [`reduce`] function. Views read
//! through the functions in [`selectors`].

mod action;
mod reducer;
pub mod selectors;
mod state;

use tracing::debug;

pub use action::Action;
pub use reducer::{TOAST_TTL, reduce};
pub use state::{
    AccountsSlice, AppState, DEFAULT_VERIFICATION_PAGE_SIZE, ListSlice, RequestSeq, SessionSlice,
    Toast, ToastKind, ToastSlice, UsersSlice, VerificationSlice,
};

/// Owner of the application state.
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: AppState,
}

impl Store {
    /// Creates a store with empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the state.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Applies an action.
    pub fn dispatch(&mut self, action: Action) {
        debug!("dispatch {}", action.name());
        reduce(&mut self.state, action);
    }

    /// Runs a selector against the state.
    pub fn select<'a, T>(&'a self, selector: impl FnOnce(&'a AppState) -> T) -> T {
        selector(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_and_select() {
        let mut store = Store::new();
        store.dispatch(Action::SessionRestored("tok".into()));
        assert!(store.select(selectors::is_authenticated));
        store.dispatch(Action::AccountsRequested);
        assert_eq!(store.state().accounts.request, RequestSeq(1));
        assert!(store.state().accounts.loading);
    }
}
