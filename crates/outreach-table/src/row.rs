//! Row records.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::CellValue;

/// Field name holding the row identifier.
const ID_FIELD: &str = "id";

static NULL: CellValue = CellValue::Null;

/// Stable unique identifier of a row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(String);

impl RowId {
    /// Create a new row ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RowId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RowId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Error returned when a field map cannot become a [`Row`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    /// The record has no usable `id` field.
    #[error("Row is missing an `id` field")]
    MissingId,
}

/// One record displayed as a table line.
///
/// A row always carries an `id`; it is also visible as the `id` field so a
/// column may display it. Rows are never mutated by the presenter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, CellValue>",
    into = "BTreeMap<String, CellValue>"
)]
pub struct Row {
    id: RowId,
    fields: BTreeMap<String, CellValue>,
}

impl Row {
    /// Creates a row with the given identifier and no other fields.
    #[must_use]
    pub fn new(id: impl Into<RowId>) -> Self {
        let id = id.into();
        let mut fields = BTreeMap::new();
        fields.insert(ID_FIELD.to_string(), CellValue::Text(id.0.clone()));
        Self { id, fields }
    }

    /// Adds a field value.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets a field value. The `id` field cannot be overwritten.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<CellValue>) {
        let key = key.into();
        if key != ID_FIELD {
            self.fields.insert(key, value.into());
        }
    }

    /// Returns the row identifier.
    #[must_use]
    pub const fn id(&self) -> &RowId {
        &self.id
    }

    /// Returns the value of a field, treating absent fields as null.
    #[must_use]
    pub fn get(&self, key: &str) -> &CellValue {
        self.fields.get(key).unwrap_or(&NULL)
    }

    /// Iterates over all fields, including `id`.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl TryFrom<BTreeMap<String, CellValue>> for Row {
    type Error = RowError;

    fn try_from(fields: BTreeMap<String, CellValue>) -> Result<Self, Self::Error> {
        let id = match fields.get(ID_FIELD) {
            Some(value @ (CellValue::Text(_) | CellValue::Number(_))) => {
                let id = value.to_string();
                if id.is_empty() {
                    return Err(RowError::MissingId);
                }
                RowId(id)
            }
            _ => return Err(RowError::MissingId),
        };
        Ok(Self { id, fields })
    }
}

impl From<Row> for BTreeMap<String, CellValue> {
    fn from(row: Row) -> Self {
        row.fields
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_exposes_id_as_field() {
        let row = Row::new("42").with("name", "Bob");
        assert_eq!(row.id().as_str(), "42");
        assert_eq!(row.get("id"), &CellValue::Text("42".into()));
        assert_eq!(row.get("name"), &CellValue::Text("Bob".into()));
    }

    #[test]
    fn absent_field_is_null() {
        let row = Row::new("1");
        assert!(row.get("missing").is_null());
    }

    #[test]
    fn id_cannot_be_overwritten() {
        let row = Row::new("1").with("id", "2");
        assert_eq!(row.id().as_str(), "1");
        assert_eq!(row.get("id").to_string(), "1");
    }

    #[test]
    fn deserialize_requires_id() {
        let err = serde_json::from_str::<Row>(r#"{"name": "Bob"}"#).unwrap_err();
        assert!(err.to_string().contains("id"));

        let err = serde_json::from_str::<Row>(r#"{"id": null}"#).unwrap_err();
        assert!(err.to_string().contains("id"));
    }

    #[test]
    fn deserialize_accepts_numeric_id() {
        let row: Row = serde_json::from_str(r#"{"id": 7, "age": 30}"#).unwrap();
        assert_eq!(row.id().as_str(), "7");
        assert_eq!(row.get("age"), &CellValue::Number(30.0));
    }
}
