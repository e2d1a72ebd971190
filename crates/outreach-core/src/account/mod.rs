//! Sending accounts.
//!
//! Connected mailboxes used for outreach campaigns and warmup.

mod model;

pub use model::{
    AccountId, DEFAULT_DAILY_LIMIT, EmailAccount, EmailAccountDraft, Provider, Security,
    ServerConfig, WarmupStatus,
};
