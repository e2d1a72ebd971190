//! # outreach-core
//!
//! Core business logic for the Outreach desktop client.
//!
//! This crate provides:
//! - Shared field validators returning `{ is_valid, message }`
//! - Domain models: email accounts, organization users, verification batches
//! - Conversion of models into table rows, column sets and CSV export
//! - A typed REST client with validation at the response boundary
//! - Session token storage in the system keyring
//! - **Application store** - typed slices, actions, a reducer and selectors

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod account;
pub mod api;
mod error;
pub mod export;
pub mod rows;
pub mod session;
pub mod store;
pub mod user;
pub mod validation;
pub mod verification;

pub use account::{
    AccountId, EmailAccount, EmailAccountDraft, Provider, Security, ServerConfig, WarmupStatus,
};
pub use api::{ApiClient, ApiError, BatchQuery, Credentials, Page, Session, Validate};
pub use error::{Error, Result};
pub use export::export_csv;
pub use rows::{IntoRow, account_columns, batch_columns, user_columns};
pub use session::{SessionError, SessionResult, sign_in};
pub use store::{Action, AppState, Store};
pub use user::{OrgUser, Role, UserId, UserInvite};
pub use validation::{
    FieldValidation, ValidationError, ValidationResult, validate_email, validate_email_account,
    validate_login, validate_password, validate_phone, validate_required, validate_user_invite,
};
pub use verification::{BatchId, BatchStatus, VerificationBatch};
