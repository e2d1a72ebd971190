//! Data models for the application.

mod account_form;
mod invite_form;
mod login;
mod settings;
mod tables;

pub use account_form::AccountFormState;
pub use invite_form::InviteFormState;
pub use login::LoginForm;
pub use settings::{API_URL_ENV, AppSettings};
pub use tables::{EXPORT_SELECTED, SHOW_PROGRESS, TableId, Tables};
