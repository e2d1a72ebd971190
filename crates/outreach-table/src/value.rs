//! Cell values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single field value of a [`Row`](crate::Row).
///
/// Mirrors the JSON scalar types the backend returns. An absent field is
/// treated exactly like [`CellValue::Null`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Null or missing value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Numeric value.
    Number(f64),
    /// Text value.
    Text(String),
}

impl CellValue {
    /// Returns `true` for null values.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Stringified form used for search, filtering and mixed-type sorting.
    ///
    /// Returns `None` for null values, which never match a search or a filter.
    #[must_use]
    pub fn key(&self) -> Option<String> {
        if self.is_null() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write_number(f, *n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Writes a number the way a JSON front end would print it: integral values
/// without a fractional part, `-0` as `0`, infinities spelled out.
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        f.write_str("0")
    } else {
        write!(f, "{n}")
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl<T: Into<Self>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn integral_numbers_print_without_fraction() {
        assert_eq!(CellValue::from(30).to_string(), "30");
        assert_eq!(CellValue::from(2.5).to_string(), "2.5");
        assert_eq!(CellValue::from(-0.0).to_string(), "0");
        assert_eq!(CellValue::from(f64::INFINITY).to_string(), "Infinity");
    }

    #[test]
    fn booleans_print_lowercase() {
        assert_eq!(CellValue::from(true).to_string(), "true");
        assert_eq!(CellValue::from(false).key().as_deref(), Some("false"));
    }

    #[test]
    fn null_has_no_key() {
        assert_eq!(CellValue::Null.key(), None);
        assert_eq!(CellValue::from(None::<&str>), CellValue::Null);
    }

    #[test]
    fn deserializes_json_scalars() {
        let values: Vec<CellValue> =
            serde_json::from_str(r#"[null, true, 42, 1.5, "text"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                CellValue::Null,
                CellValue::Bool(true),
                CellValue::Number(42.0),
                CellValue::Number(1.5),
                CellValue::Text("text".into()),
            ]
        );
    }
}
