//! Email list verification batches.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a verification batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BatchId(pub String);

impl std::fmt::Display for BatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Processing state of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchStatus {
    /// Uploaded, waiting for a worker.
    Queued,
    /// Addresses are being checked.
    Processing,
    /// Every address has a verdict.
    Completed,
    /// Processing stopped with an error.
    Failed,
}

impl BatchStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 4] = [Self::Queued, Self::Processing, Self::Completed, Self::Failed];

    /// Parses a table or filter label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.label() == label)
    }

    /// Value of the `status` query parameter.
    #[must_use]
    pub const fn as_param(&self) -> &'static str {
        match self {
            Self::Queued => "queued",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }

    /// Label shown in tables and filters.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Queued => "Queued",
            Self::Processing => "Processing",
            Self::Completed => "Completed",
            Self::Failed => "Failed",
        }
    }
}

/// An uploaded list of addresses being verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationBatch {
    /// Unique identifier; empty when the backend omitted it.
    #[serde(default)]
    pub id: BatchId,
    /// Uploaded file name.
    pub file_name: String,
    /// Processing state.
    pub status: BatchStatus,
    /// Number of addresses in the upload.
    pub total: u32,
    /// Deliverable addresses.
    #[serde(default)]
    pub valid: u32,
    /// Undeliverable addresses.
    #[serde(default)]
    pub invalid: u32,
    /// Catch-all or disposable addresses.
    #[serde(default)]
    pub risky: u32,
    /// Addresses the mail server did not answer for.
    #[serde(default)]
    pub unknown: u32,
    /// Upload time.
    pub created_at: DateTime<Utc>,
}

impl VerificationBatch {
    /// Addresses with a verdict so far.
    #[must_use]
    pub const fn processed(&self) -> u32 {
        self.valid
            .saturating_add(self.invalid)
            .saturating_add(self.risky)
            .saturating_add(self.unknown)
    }

    /// Whole-number completion percentage, capped at 100.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        if self.total == 0 {
            return if self.status == BatchStatus::Completed { 100 } else { 0 };
        }
        let percent = u64::from(self.processed()) * 100 / u64::from(self.total);
        u8::try_from(percent.min(100)).unwrap_or(100)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn batch(total: u32, valid: u32, invalid: u32) -> VerificationBatch {
        VerificationBatch {
            id: BatchId("b1".into()),
            file_name: "leads.csv".into(),
            status: BatchStatus::Processing,
            total,
            valid,
            invalid,
            risky: 0,
            unknown: 0,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    #[test]
    fn progress_rounds_down() {
        assert_eq!(batch(3, 1, 0).progress_percent(), 33);
        assert_eq!(batch(200, 150, 50).progress_percent(), 100);
    }

    #[test]
    fn progress_is_capped() {
        assert_eq!(batch(10, 20, 0).progress_percent(), 100);
    }

    #[test]
    fn empty_upload() {
        let mut empty = batch(0, 0, 0);
        assert_eq!(empty.progress_percent(), 0);
        empty.status = BatchStatus::Completed;
        assert_eq!(empty.progress_percent(), 100);
    }

    #[test]
    fn status_labels_round_trip_to_params() {
        assert_eq!(BatchStatus::from_label("Failed"), Some(BatchStatus::Failed));
        assert_eq!(BatchStatus::from_label("failed"), None);
        let params: Vec<_> = BatchStatus::ALL.iter().map(BatchStatus::as_param).collect();
        assert_eq!(params, vec!["queued", "processing", "completed", "failed"]);
    }
}
