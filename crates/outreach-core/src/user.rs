//! Organization members.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for an organization user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Permission level within the organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full control including billing.
    Owner,
    /// Manages users and accounts.
    Admin,
    /// Runs campaigns.
    #[default]
    Member,
}

impl Role {
    /// Every role, least privileged first.
    pub const ALL: [Self; 3] = [Self::Member, Self::Admin, Self::Owner];

    /// Label shown in tables and filters.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Owner => "Owner",
            Self::Admin => "Admin",
            Self::Member => "Member",
        }
    }
}

/// A user of the organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgUser {
    /// Unique identifier; empty when the backend omitted it.
    #[serde(default)]
    pub id: UserId,
    /// Full name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Contact phone, if given.
    #[serde(default)]
    pub phone: Option<String>,
    /// Permission level.
    #[serde(default)]
    pub role: Role,
    /// Whether the user can sign in.
    #[serde(default = "default_active")]
    pub active: bool,
    /// Last successful sign-in.
    #[serde(default)]
    pub last_login_at: Option<DateTime<Utc>>,
}

const fn default_active() -> bool {
    true
}

/// Invite-user form payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInvite {
    /// Full name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Contact phone; blank when not given.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub phone: String,
    /// Permission level.
    pub role: Role,
    /// Initial password, changed by the user on first sign-in.
    pub password: String,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
