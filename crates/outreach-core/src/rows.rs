//! Table rows and column sets for the domain models.

use outreach_table::{Align, CellContent, CellValue, Column, Row, Tone};

use crate::account::{EmailAccount, WarmupStatus};
use crate::user::OrgUser;
use crate::verification::{BatchStatus, VerificationBatch};

/// Fields searched on the accounts page.
pub const ACCOUNT_SEARCH_KEYS: [&str; 2] = ["email", "name"];

/// Fields searched on the users page.
pub const USER_SEARCH_KEYS: [&str; 3] = ["name", "email", "phone"];

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Converts a model into a table row keyed by its identifier.
pub trait IntoRow {
    /// Builds the row.
    fn to_row(&self) -> Row;
}

/// Converts a slice of models into rows.
#[must_use]
pub fn to_rows<T: IntoRow>(items: &[T]) -> Vec<Row> {
    items.iter().map(IntoRow::to_row).collect()
}

impl IntoRow for EmailAccount {
    fn to_row(&self) -> Row {
        Row::new(self.id.0.as_str())
            .with("name", self.name.as_str())
            .with("email", self.email.as_str())
            .with("provider", self.provider.display_name())
            .with("warmup_status", self.warmup_status.label())
            .with("daily_limit", self.daily_limit)
            .with("sent_today", self.sent_today)
            .with("health_score", self.health_score.map(u32::from))
            .with("created_at", self.created_at.format(DATE_FORMAT).to_string())
    }
}

impl IntoRow for OrgUser {
    fn to_row(&self) -> Row {
        Row::new(self.id.0.as_str())
            .with("name", self.name.as_str())
            .with("email", self.email.as_str())
            .with("phone", self.phone.clone())
            .with("role", self.role.label())
            .with("status", if self.active { "Active" } else { "Disabled" })
            .with(
                "last_login_at",
                self.last_login_at
                    .map(|at| at.format(DATE_TIME_FORMAT).to_string()),
            )
    }
}

impl IntoRow for VerificationBatch {
    fn to_row(&self) -> Row {
        Row::new(self.id.0.as_str())
            .with("file_name", self.file_name.as_str())
            .with("status", self.status.label())
            .with("total", self.total)
            .with("valid", self.valid)
            .with("invalid", self.invalid)
            .with("risky", self.risky)
            .with("progress", u32::from(self.progress_percent()))
            .with("created_at", self.created_at.format(DATE_FORMAT).to_string())
    }
}

fn warmup_tone(label: &str) -> Tone {
    match label {
        l if l == WarmupStatus::Active.label() => Tone::Success,
        l if l == WarmupStatus::Paused.label() => Tone::Warning,
        _ => Tone::Neutral,
    }
}

fn batch_tone(label: &str) -> Tone {
    match label {
        l if l == BatchStatus::Completed.label() => Tone::Success,
        l if l == BatchStatus::Processing.label() => Tone::Info,
        l if l == BatchStatus::Failed.label() => Tone::Danger,
        _ => Tone::Neutral,
    }
}

fn health_tone(score: f64) -> Tone {
    if score >= 80.0 {
        Tone::Success
    } else if score >= 50.0 {
        Tone::Warning
    } else {
        Tone::Danger
    }
}

/// Columns of the email accounts table.
#[must_use]
pub fn account_columns() -> Vec<Column> {
    vec![
        Column::new("email", "Email").width(240.0),
        Column::new("name", "Sender"),
        Column::new("provider", "Provider").filterable(),
        Column::new("warmup_status", "Warmup")
            .filter_options(["Active", "Paused", "Inactive"])
            .render(|value, _, _| {
                let label = value.to_string();
                CellContent::badge(label.clone(), warmup_tone(&label))
            }),
        Column::new("sent_today", "Sent today")
            .align(Align::Right)
            .render(|value, row, _| {
                CellContent::Text(format!("{value} / {}", row.get("daily_limit")))
            }),
        Column::new("health_score", "Health")
            .align(Align::Right)
            .render(|value, _, _| match value {
                CellValue::Number(score) => {
                    CellContent::badge(format!("{value}%"), health_tone(*score))
                }
                _ => CellContent::Placeholder,
            }),
        Column::new("created_at", "Connected"),
    ]
}

/// Columns of the users table.
#[must_use]
pub fn user_columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name"),
        Column::new("email", "Email").width(240.0),
        Column::new("phone", "Phone").sortable(false),
        Column::new("role", "Role")
            .filterable()
            .render(|value, _, _| CellContent::badge(value.to_string(), Tone::Info)),
        Column::new("status", "Status")
            .filter_options(["Active", "Disabled"])
            .render(|value, _, _| {
                let label = value.to_string();
                let tone = if label == "Active" {
                    Tone::Success
                } else {
                    Tone::Neutral
                };
                CellContent::badge(label, tone)
            }),
        Column::new("last_login_at", "Last sign-in"),
    ]
}

/// Columns of the verification batches table.
#[must_use]
pub fn batch_columns() -> Vec<Column> {
    vec![
        Column::new("file_name", "File").width(220.0),
        Column::new("status", "Status")
            .filter_options(BatchStatus::ALL.map(|status| status.label()))
            .render(|value, _, _| {
                let label = value.to_string();
                CellContent::badge(label.clone(), batch_tone(&label))
            }),
        Column::new("total", "Emails").align(Align::Right),
        Column::new("valid", "Valid").align(Align::Right),
        Column::new("invalid", "Invalid").align(Align::Right),
        Column::new("risky", "Risky").align(Align::Right),
        Column::new("progress", "Progress")
            .align(Align::Right)
            .render(|value, _, _| CellContent::Text(format!("{value}%"))),
        Column::new("created_at", "Uploaded"),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};

    use super::*;
    use crate::account::{AccountId, Provider};
    use crate::user::{Role, UserId};
    use crate::verification::BatchId;

    fn account(health: Option<u8>) -> EmailAccount {
        EmailAccount {
            id: AccountId::new("a1"),
            name: "Dana".into(),
            email: "dana@acme.io".into(),
            provider: Provider::Gmail,
            warmup_status: WarmupStatus::Paused,
            daily_limit: 40,
            sent_today: 12,
            health_score: health,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap(),
        }
    }

    fn cell(columns: &[Column], key: &str, row: &Row) -> CellContent {
        columns
            .iter()
            .find(|c| c.key == key)
            .unwrap()
            .render_cell(row, 0)
    }

    mod account_tests {
        use super::*;

        #[test]
        fn row_fields() {
            let row = account(Some(92)).to_row();
            assert_eq!(row.id().as_str(), "a1");
            assert_eq!(row.get("provider"), &CellValue::from("Google"));
            assert_eq!(row.get("created_at"), &CellValue::from("2024-03-01"));
            assert_eq!(row.get("health_score"), &CellValue::Number(92.0));
        }

        #[test]
        fn rendered_cells() {
            let columns = account_columns();
            let row = account(Some(42)).to_row();
            assert_eq!(
                cell(&columns, "warmup_status", &row),
                CellContent::badge("Paused", Tone::Warning)
            );
            assert_eq!(
                cell(&columns, "sent_today", &row),
                CellContent::Text("12 / 40".into())
            );
            assert_eq!(
                cell(&columns, "health_score", &row),
                CellContent::badge("42%", Tone::Danger)
            );
        }

        #[test]
        fn missing_health_is_placeholder() {
            let columns = account_columns();
            let row = account(None).to_row();
            assert_eq!(cell(&columns, "health_score", &row), CellContent::Placeholder);
        }
    }

    #[test]
    fn user_row() {
        let user = OrgUser {
            id: UserId("u1".into()),
            name: "Ana".into(),
            email: "ana@acme.io".into(),
            phone: None,
            role: Role::Admin,
            active: false,
            last_login_at: None,
        };
        let row = user.to_row();
        assert!(row.get("phone").is_null());
        assert!(row.get("last_login_at").is_null());
        assert_eq!(
            cell(&user_columns(), "status", &row),
            CellContent::badge("Disabled", Tone::Neutral)
        );
    }

    #[test]
    fn batch_row() {
        let batch = VerificationBatch {
            id: BatchId("b1".into()),
            file_name: "leads.csv".into(),
            status: BatchStatus::Completed,
            total: 4,
            valid: 2,
            invalid: 1,
            risky: 1,
            unknown: 0,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        };
        let rows = to_rows(&[batch]);
        assert_eq!(rows[0].get("progress"), &CellValue::Number(100.0));
        assert_eq!(
            cell(&batch_columns(), "status", &rows[0]),
            CellContent::badge("Completed", Tone::Success)
        );
        assert_eq!(
            cell(&batch_columns(), "progress", &rows[0]),
            CellContent::Text("100%".into())
        );
    }
}
