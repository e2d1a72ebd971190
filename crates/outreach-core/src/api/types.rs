//! Request and response types with boundary validation.

use serde::{Deserialize, Serialize};

use crate::account::EmailAccount;
use crate::user::OrgUser;
use crate::verification::{BatchStatus, VerificationBatch};

/// Domain checks run on every decoded response body.
///
/// Decoding guarantees the shape; `validate` guarantees what the rest of the
/// application assumes, so callers never re-check.
pub trait Validate {
    /// Returns a description of the first broken rule.
    ///
    /// # Errors
    ///
    /// Returns the reason the value is unusable.
    fn validate(&self) -> Result<(), String>;
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), String> {
        self.iter()
            .enumerate()
            .try_for_each(|(i, item)| item.validate().map_err(|e| format!("item {i}: {e}")))
    }
}

impl Validate for () {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl Validate for EmailAccount {
    fn validate(&self) -> Result<(), String> {
        if self.id.0.is_empty() {
            return Err("email account without id".to_string());
        }
        if !self.email.contains('@') {
            return Err(format!("email account {} has no valid address", self.id));
        }
        if self.health_score.is_some_and(|score| score > 100) {
            return Err(format!("email account {} health score above 100", self.id));
        }
        Ok(())
    }
}

impl Validate for OrgUser {
    fn validate(&self) -> Result<(), String> {
        if self.id.0.is_empty() {
            return Err("user without id".to_string());
        }
        if self.email.is_empty() {
            return Err(format!("user {} without email", self.id));
        }
        Ok(())
    }
}

impl Validate for VerificationBatch {
    fn validate(&self) -> Result<(), String> {
        if self.id.0.is_empty() {
            return Err("verification batch without id".to_string());
        }
        if self.processed() > self.total {
            return Err(format!(
                "verification batch {} reports more verdicts than emails",
                self.id
            ));
        }
        Ok(())
    }
}

/// `{ "data": ... }` success envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: T,
}

impl<T: Validate> Validate for Envelope<T> {
    fn validate(&self) -> Result<(), String> {
        self.data.validate()
    }
}

/// `{ "message": ... }` error envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub message: Option<String>,
}

/// `{ "data": [...], "total": n }` paginated envelope as sent on the wire.
#[derive(Debug, Deserialize)]
pub(crate) struct PageEnvelope<T> {
    pub data: Vec<T>,
    pub total: i64,
}

impl<T: Validate> Validate for PageEnvelope<T> {
    fn validate(&self) -> Result<(), String> {
        let total = usize::try_from(self.total)
            .map_err(|_| format!("negative total {}", self.total))?;
        if self.data.len() > total {
            return Err(format!(
                "page holds {} items but total is {total}",
                self.data.len()
            ));
        }
        self.data.validate()
    }
}

/// One server-side page of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items of the requested page.
    pub items: Vec<T>,
    /// Number of items across all pages.
    pub total: usize,
}

impl<T> Page<T> {
    /// Converts a validated envelope.
    pub(crate) fn from_envelope(envelope: PageEnvelope<T>) -> Self {
        Self {
            total: usize::try_from(envelope.total).unwrap_or(0),
            items: envelope.data,
        }
    }
}

/// Query for one page of verification batches.
///
/// Search and status filtering happen on the server, so the page and the
/// total both reflect them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchQuery {
    /// 1-indexed page.
    pub page: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Free-text search over file names.
    pub search: String,
    /// Accepted statuses; empty accepts all.
    pub statuses: Vec<BatchStatus>,
}

impl BatchQuery {
    /// URL query parameters, with one `status` entry per accepted status.
    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.max(1).to_string()),
            ("limit", self.page_size.max(1).to_string()),
        ];
        let search = self.search.trim();
        if !search.is_empty() {
            params.push(("search", search.to_string()));
        }
        params.extend(
            self.statuses
                .iter()
                .map(|status| ("status", status.as_param().to_string())),
        );
        params
    }
}

/// Sign-in form payload.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    /// Login email.
    pub email: String,
    /// Plain password, sent over TLS only.
    pub password: String,
}

/// Result of a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Session {
    /// Bearer token for subsequent calls.
    pub token: String,
    /// The signed-in user.
    pub user: OrgUser,
}

impl Validate for Session {
    fn validate(&self) -> Result<(), String> {
        if self.token.trim().is_empty() {
            return Err("empty session token".to_string());
        }
        self.user.validate()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn negative_total_rejected() {
        let page: PageEnvelope<VerificationBatch> =
            serde_json::from_str(r#"{"data":[],"total":-1}"#).unwrap();
        assert_eq!(page.validate().unwrap_err(), "negative total -1");
    }

    #[test]
    fn oversized_page_rejected() {
        let json = r#"{"data":[{"id":"u1","name":"A","email":"a@b.co"}],"total":0}"#;
        let page: PageEnvelope<OrgUser> = serde_json::from_str(json).unwrap();
        assert!(page.validate().is_err());
    }

    #[test]
    fn missing_id_rejected_with_position() {
        let json = r#"{"data":[
            {"id":"u1","name":"A","email":"a@b.co"},
            {"name":"B","email":"b@b.co"}
        ]}"#;
        let users: Envelope<Vec<OrgUser>> = serde_json::from_str(json).unwrap();
        assert_eq!(users.validate().unwrap_err(), "item 1: user without id");
    }

    #[test]
    fn session_needs_token() {
        let json = r#"{"token":" ","user":{"id":"u1","name":"A","email":"a@b.co"}}"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert!(session.validate().is_err());
    }

    #[test]
    fn batch_query_sends_search_and_every_status() {
        let query = BatchQuery {
            page: 2,
            page_size: 25,
            search: " leads ".into(),
            statuses: vec![BatchStatus::Failed, BatchStatus::Queued],
        };
        assert_eq!(
            query.params(),
            vec![
                ("page", "2".to_string()),
                ("limit", "25".to_string()),
                ("search", "leads".to_string()),
                ("status", "failed".to_string()),
                ("status", "queued".to_string()),
            ]
        );
    }

    #[test]
    fn batch_query_omits_empty_filters() {
        let query = BatchQuery {
            page: 1,
            page_size: 10,
            search: String::new(),
            statuses: Vec::new(),
        };
        let keys: Vec<_> = query.params().into_iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["page", "limit"]);
    }
}
