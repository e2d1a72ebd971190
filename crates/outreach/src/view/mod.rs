//! View components for the application.

mod data_table;
mod forms;
mod header;
mod login;
mod page;
mod toasts;

pub use data_table::view_table;
pub use forms::{view_account_form, view_invite_form};
pub use header::view_header;
pub use login::view_login;
pub use page::view_page;
pub use toasts::view_toasts;
