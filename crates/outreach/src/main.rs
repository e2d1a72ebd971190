//! Outreach - desktop front end for the email deliverability platform
//!
//! Sending accounts, organization users and verification batches, each shown
//! through an `outreach_table::DataTable` and backed by the REST API.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod message;
mod model;
mod style;
mod view;

use std::path::PathBuf;
use std::time::Duration;

use chrono::Utc;
use iced::keyboard::{self, Key, Modifiers};
use iced::widget::{column, stack};
use iced::{Element, Length, Subscription, Task};
use outreach_core::store::{Action, RequestSeq, ToastKind, selectors};
use outreach_core::{
    AccountId, ApiClient, BatchId, EmailAccount, OrgUser, Store, UserId, export_csv, session,
    sign_in,
};
use outreach_table::{RowId, TableEvent, TableOutput};
use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use message::{
    AccountFormMessage, DeleteOutcome, Failure, InviteFormMessage, KeyboardAction, LoginMessage,
    Message, View,
};
use model::{
    API_URL_ENV, AccountFormState, AppSettings, EXPORT_SELECTED, InviteFormState, LoginForm,
    SHOW_PROGRESS, TableId, Tables,
};

fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "outreach=debug,outreach_core=debug,outreach_table=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Outreach");

    let tables = match Tables::new() {
        Ok(tables) => tables,
        Err(e) => {
            error!("Invalid table configuration: {e}");
            return Ok(());
        }
    };

    iced::application(
        move || Outreach::new(tables.clone()),
        Outreach::update,
        Outreach::view,
    )
    .title("Outreach")
    .subscription(Outreach::subscription)
    .run()
}

/// Main application state.
struct Outreach {
    /// Screen shown after sign-in.
    current_view: View,
    /// Session, lists, selections and toasts.
    store: Store,
    /// One presenter per list screen.
    tables: Tables,
    /// Sign-in form fields.
    login: LoginForm,
    /// Open connect-account form, shown over the accounts screen.
    account_form: Option<AccountFormState>,
    /// Open invite-user form, shown over the users screen.
    invite_form: Option<InviteFormState>,
    /// Persisted settings.
    settings: AppSettings,
    /// Backend client without a token; `None` when the URL is unusable.
    client: Option<ApiClient>,
}

impl Outreach {
    /// Create application with initial state and load settings.
    fn new(tables: Tables) -> (Self, Task<Message>) {
        let app = Self {
            current_view: View::default(),
            store: Store::new(),
            tables,
            login: LoginForm::new(),
            account_form: None,
            invite_form: None,
            settings: AppSettings::default(),
            client: None,
        };
        app.apply_theme();
        (app, Task::perform(load_settings(), Message::SettingsLoaded))
    }

    /// Applies the current theme mode to the global palette.
    fn apply_theme(&self) {
        style::widgets::palette::set_theme(self.settings.theme_mode);
    }

    /// Applies the stored page size to every table.
    fn apply_page_size(&mut self) {
        let size = self.settings.effective_page_size();
        for id in [TableId::Accounts, TableId::Users, TableId::Verification] {
            let table = self.tables.get_mut(id);
            if table.page_size() != size
                && let Some(output) = table.update(TableEvent::PageSizeSelected(size))
            {
                debug!("Applied stored page size to {id:?}: {output:?}");
            }
        }
    }

    /// Builds the API client from the settings URL.
    fn connect(&mut self) {
        match ApiClient::new(self.settings.api_url.clone()) {
            Ok(client) => {
                info!("Using API at {}", client.base_url());
                self.client = Some(client);
            }
            Err(e) => {
                warn!("Unusable API URL {:?}: {e}", self.settings.api_url);
                self.client = None;
                self.toast(ToastKind::Error, format!("Cannot reach the API: {e}"));
            }
        }
    }

    /// Client carrying the session token, when signed in.
    fn authorized_client(&self) -> Option<ApiClient> {
        let token = selectors::session_token(self.store.state())?;
        self.client.clone().map(|client| client.with_token(token))
    }

    fn toast(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.store.dispatch(Action::ToastPushed {
            kind,
            message: message.into(),
            at: Utc::now(),
        });
    }

    /// Pushes store state into the tables.
    fn sync_tables(&mut self) {
        let state = self.store.state();

        let accounts = &mut self.tables.accounts;
        accounts.set_data(selectors::account_rows(state));
        accounts.set_loading(state.accounts.loading);
        accounts.set_selection(state.accounts.selected.clone());

        let users = &mut self.tables.users;
        users.set_data(selectors::user_rows(state));
        users.set_loading(state.users.loading);
        users.set_selection(state.users.selected.clone());

        let verification = &mut self.tables.verification;
        let (page, total) = selectors::verification_page(state);
        verification.set_data(selectors::batch_rows(state));
        verification.sync_external_page(page, total);
        verification.set_loading(state.verification.loading);
        verification.set_selection(state.verification.selected.clone());
    }

    fn select(&mut self, table: TableId, ids: Vec<RowId>) {
        self.store.dispatch(match table {
            TableId::Accounts => Action::AccountsSelected(ids),
            TableId::Users => Action::UsersSelected(ids),
            TableId::Verification => Action::VerificationSelected(ids),
        });
        self.sync_tables();
    }

    // ---------------------------------------------------------------------
    // Requests
    // ---------------------------------------------------------------------

    fn request_accounts(&mut self) -> Task<Message> {
        let Some(client) = self.authorized_client() else {
            return Task::none();
        };
        self.store.dispatch(Action::AccountsRequested);
        self.sync_tables();
        let request = self.store.state().accounts.request;
        Task::perform(
            async move { client.list_accounts().await.map_err(Failure::from) },
            move |result| Message::AccountsLoaded(request, result),
        )
    }

    fn request_users(&mut self) -> Task<Message> {
        let Some(client) = self.authorized_client() else {
            return Task::none();
        };
        self.store.dispatch(Action::UsersRequested);
        self.sync_tables();
        let request = self.store.state().users.request;
        Task::perform(
            async move { client.list_users().await.map_err(Failure::from) },
            move |result| Message::UsersLoaded(request, result),
        )
    }

    fn request_verification(&mut self, page: usize) -> Task<Message> {
        let Some(client) = self.authorized_client() else {
            return Task::none();
        };
        let query = self.tables.batch_query(page);
        self.store.dispatch(Action::VerificationRequested {
            page: query.page,
            page_size: query.page_size,
            search: query.search.clone(),
            statuses: query.statuses.clone(),
        });
        self.sync_tables();
        let request = self.store.state().verification.request;
        Task::perform(
            async move {
                client
                    .list_verification_batches(&query)
                    .await
                    .map_err(Failure::from)
            },
            move |result| Message::BatchesLoaded(request, result),
        )
    }

    fn refresh_current(&mut self) -> Task<Message> {
        match self.current_view {
            View::Accounts => self.request_accounts(),
            View::Users => self.request_users(),
            View::Verification => {
                let page = self.tables.verification.current_page();
                self.request_verification(page)
            }
        }
    }

    fn refresh_all(&mut self) -> Task<Message> {
        let page = self.tables.verification.current_page();
        Task::batch([
            self.request_accounts(),
            self.request_users(),
            self.request_verification(page),
        ])
    }

    /// Whether the current screen has never been requested.
    fn needs_load(&self, view: View) -> bool {
        let state = self.store.state();
        match view {
            View::Accounts => !state.accounts.loaded && !state.accounts.loading,
            View::Users => !state.users.loaded && !state.users.loading,
            View::Verification => state.verification.request == RequestSeq::default(),
        }
    }

    fn is_current_loading(&self) -> bool {
        let state = self.store.state();
        match self.current_view {
            View::Accounts => state.accounts.loading,
            View::Users => state.users.loading,
            View::Verification => state.verification.loading,
        }
    }

    /// Toasts a failed request; a rejected token ends the session.
    fn report_failure(&mut self, failure: Failure) -> Task<Message> {
        if failure.unauthorized {
            warn!("Session rejected by the server");
            return self.expire_session();
        }
        self.toast(ToastKind::Error, failure.message);
        Task::none()
    }

    fn expire_session(&mut self) -> Task<Message> {
        self.close_forms();
        self.store.dispatch(Action::SignedOut);
        self.store.dispatch(Action::SignInFailed(
            "Your session has expired. Please sign in again.".into(),
        ));
        self.current_view = View::default();
        self.sync_tables();
        Task::perform(forget_session(), Message::SignedOut)
    }

    // ---------------------------------------------------------------------
    // Forms
    // ---------------------------------------------------------------------

    fn close_forms(&mut self) {
        self.account_form = None;
        self.invite_form = None;
    }

    fn handle_account_form(&mut self, message: AccountFormMessage) -> Task<Message> {
        let client = self.authorized_client();
        let Some(form) = self.account_form.as_mut() else {
            return Task::none();
        };
        if matches!(message, AccountFormMessage::Cancel) {
            self.account_form = None;
            return Task::none();
        }
        if !form.update(message) {
            return Task::none();
        }
        let Some(draft) = form.validate() else {
            debug!("Account form has {} invalid fields", form.errors.len());
            return Task::none();
        };
        let Some(client) = client else {
            return Task::none();
        };
        form.is_saving = true;
        form.save_error = None;
        info!("Connecting account {}", draft.email);
        Task::perform(
            async move { client.create_account(&draft).await.map_err(Failure::from) },
            Message::AccountCreated,
        )
    }

    fn handle_invite_form(&mut self, message: InviteFormMessage) -> Task<Message> {
        let client = self.authorized_client();
        let Some(form) = self.invite_form.as_mut() else {
            return Task::none();
        };
        if matches!(message, InviteFormMessage::Cancel) {
            self.invite_form = None;
            return Task::none();
        }
        if !form.update(message) {
            return Task::none();
        }
        let Some(invite) = form.validate() else {
            debug!("Invite form has {} invalid fields", form.errors.len());
            return Task::none();
        };
        let Some(client) = client else {
            return Task::none();
        };
        form.is_saving = true;
        form.save_error = None;
        info!("Inviting {}", invite.email);
        Task::perform(
            async move { client.invite_user(&invite).await.map_err(Failure::from) },
            Message::UserInvited,
        )
    }

    fn account_created(&mut self, result: Result<EmailAccount, Failure>) -> Task<Message> {
        match result {
            Ok(account) => {
                self.account_form = None;
                self.toast(ToastKind::Success, format!("Connected {}", account.email));
                self.request_accounts()
            }
            Err(failure) if failure.unauthorized => self.report_failure(failure),
            Err(failure) => {
                error!("Failed to connect account: {}", failure.message);
                if let Some(form) = self.account_form.as_mut() {
                    form.is_saving = false;
                    form.save_error = Some(failure.message);
                }
                Task::none()
            }
        }
    }

    fn user_invited(&mut self, result: Result<OrgUser, Failure>) -> Task<Message> {
        match result {
            Ok(user) => {
                self.invite_form = None;
                self.toast(ToastKind::Success, format!("Invited {}", user.name));
                self.request_users()
            }
            Err(failure) if failure.unauthorized => self.report_failure(failure),
            Err(failure) => {
                error!("Failed to invite user: {}", failure.message);
                if let Some(form) = self.invite_form.as_mut() {
                    form.is_saving = false;
                    form.save_error = Some(failure.message);
                }
                Task::none()
            }
        }
    }

    // ---------------------------------------------------------------------
    // Table outputs
    // ---------------------------------------------------------------------

    fn handle_table_output(&mut self, table: TableId, output: TableOutput) -> Task<Message> {
        match output {
            TableOutput::SelectionChanged(ids) => {
                self.select(table, ids);
                Task::none()
            }
            TableOutput::PageChanged(page) => {
                if table == TableId::Verification {
                    self.request_verification(page)
                } else {
                    Task::none()
                }
            }
            TableOutput::QueryChanged if table == TableId::Verification => {
                self.request_verification(1)
            }
            TableOutput::PageSizeChanged(size) => {
                self.settings.page_size = size;
                let save = Task::perform(save_settings(self.settings.clone()), Message::SettingsSaved);
                if table == TableId::Verification {
                    Task::batch([save, self.request_verification(1)])
                } else {
                    save
                }
            }
            TableOutput::RowClicked(id) if table == TableId::Verification => {
                self.show_progress(&id);
                Task::none()
            }
            TableOutput::RowAction { action, id } if action == SHOW_PROGRESS => {
                self.show_progress(&id);
                Task::none()
            }
            TableOutput::Delete(id) => self.delete_rows(table, vec![id]),
            TableOutput::BulkDelete(ids) => self.delete_rows(table, ids),
            TableOutput::BulkAction { action, ids }
                if action == EXPORT_SELECTED && table == TableId::Accounts =>
            {
                self.export_accounts(Some(&ids))
            }
            other => {
                debug!("Unhandled output on {table:?}: {other:?}");
                Task::none()
            }
        }
    }

    fn show_progress(&mut self, id: &RowId) {
        let batch = self
            .store
            .state()
            .verification
            .items
            .iter()
            .find(|batch| batch.id.0 == id.as_str());
        let Some(batch) = batch else {
            return;
        };
        let message = format!(
            "{}: {}% processed ({} of {} emails)",
            batch.file_name,
            batch.progress_percent(),
            batch.processed(),
            batch.total
        );
        self.toast(ToastKind::Info, message);
    }

    fn delete_rows(&mut self, table: TableId, ids: Vec<RowId>) -> Task<Message> {
        if ids.is_empty() {
            return Task::none();
        }
        let Some(client) = self.authorized_client() else {
            return Task::none();
        };
        info!("Deleting {} row(s) from {table:?}", ids.len());
        Task::perform(delete_remote(client, table, ids), Message::RowsDeleted)
    }

    fn rows_deleted(&mut self, outcome: DeleteOutcome) -> Task<Message> {
        let DeleteOutcome {
            table,
            removed,
            error,
        } = outcome;
        let mut tasks = Vec::new();

        if !removed.is_empty() {
            let count = removed.len();
            let ids = removed.iter().map(|id| id.as_str().to_string());
            self.store.dispatch(match table {
                TableId::Accounts => Action::AccountsRemoved(ids.map(AccountId).collect()),
                TableId::Users => Action::UsersRemoved(ids.map(UserId).collect()),
                TableId::Verification => Action::BatchesRemoved(ids.map(BatchId).collect()),
            });
            self.sync_tables();
            let noun = match (table, count) {
                (TableId::Accounts, 1) => "account",
                (TableId::Accounts, _) => "accounts",
                (TableId::Users, 1) => "user",
                (TableId::Users, _) => "users",
                (TableId::Verification, 1) => "batch",
                (TableId::Verification, _) => "batches",
            };
            self.toast(ToastKind::Success, format!("Deleted {count} {noun}"));

            if table == TableId::Verification {
                let verification = &self.tables.verification;
                let page = verification
                    .current_page()
                    .min(verification.total_pages().max(1));
                tasks.push(self.request_verification(page));
            }
        }

        if let Some(failure) = error {
            tasks.push(self.report_failure(failure));
        }
        Task::batch(tasks)
    }

    /// Exports the given accounts, or every filtered and sorted one.
    fn export_accounts(&mut self, only: Option<&[RowId]>) -> Task<Message> {
        let table = &self.tables.accounts;
        let rows: Vec<_> = match only {
            Some(ids) => table
                .data()
                .iter()
                .filter(|row| ids.contains(row.id()))
                .collect(),
            None => table.derived_rows().collect(),
        };
        if rows.is_empty() {
            self.toast(ToastKind::Info, "Nothing to export");
            return Task::none();
        }
        let csv = export_csv(table.columns(), rows);
        Task::perform(write_export(csv), Message::Exported)
    }

    // ---------------------------------------------------------------------
    // Update
    // ---------------------------------------------------------------------

    /// Handle messages and update state.
    #[allow(clippy::too_many_lines)]
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NavigateTo(view) => {
                self.close_forms();
                self.current_view = view;
                if self.needs_load(view) {
                    return self.refresh_current();
                }
            }
            Message::ToggleTheme => {
                self.settings.theme_mode = self.settings.theme_mode.toggled();
                self.apply_theme();
                return Task::perform(save_settings(self.settings.clone()), Message::SettingsSaved);
            }

            Message::Login(login) => match login {
                LoginMessage::EmailChanged(email) => self.login.email = email,
                LoginMessage::PasswordChanged(password) => self.login.password = password,
                LoginMessage::Submit => {
                    self.login.submitted = true;
                    if self.store.state().session.signing_in || !self.login.can_submit() {
                        return Task::none();
                    }
                    let Some(client) = self.client.clone() else {
                        self.toast(ToastKind::Error, "No API URL configured");
                        return Task::none();
                    };
                    self.store.dispatch(Action::SignInStarted);
                    let email = self.login.email.clone();
                    let password = self.login.password.clone();
                    return Task::perform(
                        async move {
                            sign_in(&client, &email, &password)
                                .await
                                .map_err(|e| e.to_string())
                        },
                        Message::SignedIn,
                    );
                }
            },
            Message::SignedIn(result) => {
                self.login.clear_password();
                match result {
                    Ok(session) => {
                        let greeting = format!("Welcome back, {}", session.user.name);
                        self.login.submitted = false;
                        self.store.dispatch(Action::SignedIn(session));
                        self.toast(ToastKind::Success, greeting);
                        return self.refresh_all();
                    }
                    Err(e) => {
                        warn!("Sign-in failed: {e}");
                        self.store.dispatch(Action::SignInFailed(e));
                    }
                }
            }
            Message::SessionRestored(result) => match result {
                Ok(Some(token)) => {
                    info!("Restored stored session");
                    self.store.dispatch(Action::SessionRestored(token));
                    return self.refresh_all();
                }
                Ok(None) => debug!("No stored session"),
                Err(e) => warn!("Failed to read stored session: {e}"),
            },
            Message::SignOut => {
                info!("Signing out");
                self.close_forms();
                self.store.dispatch(Action::SignedOut);
                self.current_view = View::default();
                self.sync_tables();
                return Task::perform(forget_session(), Message::SignedOut);
            }
            Message::SignedOut(result) => {
                if let Err(e) = result {
                    warn!("Failed to clear stored session: {e}");
                }
            }

            Message::Refresh => return self.refresh_current(),
            Message::AccountsLoaded(request, result) => {
                let current = request == self.store.state().accounts.request;
                let failure = result.as_ref().err().cloned();
                self.store.dispatch(Action::AccountsLoaded {
                    request,
                    result: result.map_err(|f| f.message),
                });
                self.sync_tables();
                if let Some(failure) = failure.filter(|_| current) {
                    return self.report_failure(failure);
                }
            }
            Message::UsersLoaded(request, result) => {
                let current = request == self.store.state().users.request;
                let failure = result.as_ref().err().cloned();
                self.store.dispatch(Action::UsersLoaded {
                    request,
                    result: result.map_err(|f| f.message),
                });
                self.sync_tables();
                if let Some(failure) = failure.filter(|_| current) {
                    return self.report_failure(failure);
                }
            }
            Message::BatchesLoaded(request, result) => {
                let current = request == self.store.state().verification.request;
                let failure = result.as_ref().err().cloned();
                self.store.dispatch(Action::VerificationLoaded {
                    request,
                    result: result.map_err(|f| f.message),
                });
                self.sync_tables();
                if let Some(failure) = failure.filter(|_| current) {
                    return self.report_failure(failure);
                }
            }
            Message::Table(table, event) => {
                debug!("Table event on {table:?}: {event:?}");
                let output = self.tables.get_mut(table).update(event);
                return output.map_or_else(Task::none, |output| {
                    self.handle_table_output(table, output)
                });
            }
            Message::RowsDeleted(outcome) => return self.rows_deleted(outcome),

            Message::OpenAccountForm => self.account_form = Some(AccountFormState::new()),
            Message::AccountForm(form) => return self.handle_account_form(form),
            Message::AccountCreated(result) => return self.account_created(result),
            Message::OpenInviteForm => self.invite_form = Some(InviteFormState::new()),
            Message::InviteForm(form) => return self.handle_invite_form(form),
            Message::UserInvited(result) => return self.user_invited(result),

            Message::ExportAccounts => return self.export_accounts(None),
            Message::Exported(result) => match result {
                Ok(path) => {
                    info!("Exported accounts to {}", path.display());
                    self.toast(
                        ToastKind::Success,
                        format!("Exported to {}", path.display()),
                    );
                }
                Err(e) => {
                    warn!("Export failed: {e}");
                    self.toast(ToastKind::Error, format!("Export failed: {e}"));
                }
            },

            Message::DismissToast(id) => self.store.dispatch(Action::ToastDismissed(id)),
            Message::ToastTick => self.store.dispatch(Action::ToastsExpired(Utc::now())),

            Message::SettingsLoaded(result) => {
                let settings = result.unwrap_or_else(|e| {
                    warn!("Failed to load settings: {e}");
                    AppSettings::default()
                });
                self.settings = settings.with_env_override(std::env::var(API_URL_ENV).ok());
                self.apply_theme();
                self.apply_page_size();
                self.connect();
                return Task::perform(restore_session(), Message::SessionRestored);
            }
            Message::SettingsSaved(result) => {
                if let Err(e) = result {
                    warn!("Failed to save settings: {e}");
                }
            }

            Message::KeyPressed(action) => return self.handle_keyboard_action(action),
            Message::Ignore => {}
        }
        Task::none()
    }

    fn handle_keyboard_action(&mut self, action: KeyboardAction) -> Task<Message> {
        if !selectors::is_authenticated(self.store.state()) {
            return Task::none();
        }
        match action {
            KeyboardAction::Refresh => self.refresh_current(),
            KeyboardAction::ClearSelection => {
                let table = self.current_view.table();
                if !self.tables.get(table).selected().is_empty() {
                    self.select(table, Vec::new());
                }
                Task::none()
            }
            KeyboardAction::Export => self.export_accounts(None),
        }
    }

    // ---------------------------------------------------------------------
    // View
    // ---------------------------------------------------------------------

    /// Render current state as UI.
    fn view(&self) -> Element<'_, Message> {
        let state = self.store.state();

        let content = if selectors::is_authenticated(state) {
            self.view_main()
        } else {
            view::view_login(
                &self.login,
                state.session.signing_in,
                state.session.error.as_deref(),
            )
        };

        let toasts = selectors::active_toasts(state, Utc::now());
        if toasts.is_empty() {
            content
        } else {
            stack![content, view::view_toasts(&toasts)].into()
        }
    }

    /// Header plus the current screen.
    fn view_main(&self) -> Element<'_, Message> {
        let state = self.store.state();

        let header = view::view_header(
            self.current_view,
            selectors::current_user(state).map(|user| user.name.as_str()),
            self.settings.theme_mode,
            self.is_current_loading(),
        );

        let form = match self.current_view {
            View::Accounts => self.account_form.as_ref().map(view::view_account_form),
            View::Users => self.invite_form.as_ref().map(view::view_invite_form),
            View::Verification => None,
        };
        if let Some(form) = form {
            return column![header, form]
                .width(Length::Fill)
                .height(Length::Fill)
                .into();
        }

        let table = self.current_view.table();
        let (summary, warmup, error) = match self.current_view {
            View::Accounts => (
                format!("{} connected sending accounts", state.accounts.items.len()),
                Some(selectors::warmup_counts(state)),
                state.accounts.error.as_deref(),
            ),
            View::Users => (
                format!("{} members in your organization", state.users.items.len()),
                None,
                state.users.error.as_deref(),
            ),
            View::Verification => (
                format!("{} verification batches", state.verification.total),
                None,
                state.verification.error.as_deref(),
            ),
        };

        let page = view::view_page(
            self.current_view,
            summary,
            warmup,
            error,
            view::view_table(table, self.tables.get(table).layout()),
        );

        column![header, page]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Keyboard shortcuts, plus a toast expiry tick while toasts are shown.
    fn subscription(&self) -> Subscription<Message> {
        let keys = keyboard::listen().map(|event| {
            if let keyboard::Event::KeyPressed { key, modifiers, .. } = event {
                handle_key_press(key, modifiers).unwrap_or(Message::Ignore)
            } else {
                Message::Ignore
            }
        });

        if self.store.state().toasts.toasts.is_empty() {
            keys
        } else {
            Subscription::batch([
                keys,
                iced::time::every(Duration::from_secs(1)).map(|_| Message::ToastTick),
            ])
        }
    }
}

/// Handle keyboard shortcuts and return appropriate message.
fn handle_key_press(key: Key, modifiers: Modifiers) -> Option<Message> {
    let ctrl = modifiers.command(); // Ctrl on Linux/Windows, Cmd on macOS

    match key {
        // F5: Refresh
        Key::Named(keyboard::key::Named::F5) => Some(Message::KeyPressed(KeyboardAction::Refresh)),
        // Escape: Clear selection
        Key::Named(keyboard::key::Named::Escape) => {
            Some(Message::KeyPressed(KeyboardAction::ClearSelection))
        }
        // Ctrl+E: Export accounts
        Key::Character(c) if ctrl && c.as_str() == "e" => {
            Some(Message::KeyPressed(KeyboardAction::Export))
        }
        _ => None,
    }
}

/// Deletes rows one by one, stopping at the first failure.
async fn delete_remote(client: ApiClient, table: TableId, ids: Vec<RowId>) -> DeleteOutcome {
    let mut removed = Vec::with_capacity(ids.len());
    for id in ids {
        let raw = id.as_str().to_string();
        let result = match table {
            TableId::Accounts => client.delete_account(&AccountId(raw)).await,
            TableId::Users => client.delete_user(&UserId(raw)).await,
            TableId::Verification => client.delete_verification_batch(&BatchId(raw)).await,
        };
        if let Err(e) = result {
            return DeleteOutcome {
                table,
                removed,
                error: Some(e.into()),
            };
        }
        removed.push(id);
    }
    DeleteOutcome {
        table,
        removed,
        error: None,
    }
}

/// Reads the stored session token off the UI thread.
async fn restore_session() -> Result<Option<String>, String> {
    tokio::task::spawn_blocking(session::load_token)
        .await
        .map_err(|e| e.to_string())?
        .map_err(|e| e.to_string())
}

/// Removes the stored session token.
async fn forget_session() -> Result<(), String> {
    tokio::task::spawn_blocking(session::clear_token)
        .await
        .map_err(|e| e.to_string())?
        .map_err(|e| e.to_string())
}

/// Writes an accounts CSV into the downloads folder.
async fn write_export(csv: String) -> Result<PathBuf, String> {
    let dir = dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    let path = dir.join(format!(
        "email-accounts-{}.csv",
        Utc::now().format("%Y%m%d-%H%M%S")
    ));

    tokio::fs::write(&path, csv)
        .await
        .map_err(|e| e.to_string())?;

    Ok(path)
}

/// Load application settings from file.
async fn load_settings() -> Result<AppSettings, String> {
    let settings_path = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("outreach")
        .join("settings.json");

    if !settings_path.exists() {
        return Ok(AppSettings::default());
    }

    let contents = tokio::fs::read_to_string(&settings_path)
        .await
        .map_err(|e| e.to_string())?;

    serde_json::from_str(&contents).map_err(|e| e.to_string())
}

/// Save application settings to file.
async fn save_settings(settings: AppSettings) -> Result<(), String> {
    let config_dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("outreach");

    tokio::fs::create_dir_all(&config_dir)
        .await
        .map_err(|e| e.to_string())?;

    let settings_path = config_dir.join("settings.json");
    let contents = serde_json::to_string_pretty(&settings).map_err(|e| e.to_string())?;

    tokio::fs::write(&settings_path, contents)
        .await
        .map_err(|e| e.to_string())?;

    info!("Settings saved to {:?}", settings_path);
    Ok(())
}
