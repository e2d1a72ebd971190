//! Free-text search and per-column facet filters.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::column::Column;
use crate::row::Row;

/// Checks whether `row` matches `query` on any of `search_keys`.
///
/// Matching is a case-insensitive substring test against the stringified
/// field value. Null fields never match. An empty query or an empty key list
/// matches every row.
#[must_use]
pub fn matches_search(row: &Row, query: &str, search_keys: &[String]) -> bool {
    if query.is_empty() || search_keys.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    search_keys.iter().any(|key| {
        row.get(key)
            .key()
            .is_some_and(|text| text.to_lowercase().contains(&query))
    })
}

/// Accepted values per column.
///
/// Values within one column combine with OR, columns combine with AND. A
/// column with no accepted values imposes no restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    accepted: BTreeMap<String, BTreeSet<String>>,
}

impl FilterSet {
    /// Creates an empty filter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a filter set from `(key, values)` pairs.
    #[must_use]
    pub fn from_pairs<K, I, V>(pairs: impl IntoIterator<Item = (K, I)>) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let mut set = Self::new();
        for (key, values) in pairs {
            let key = key.into();
            for value in values {
                set.insert(&key, value);
            }
        }
        set
    }

    /// Accepts `value` for column `key`.
    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.accepted
            .entry(key.to_string())
            .or_default()
            .insert(value.into());
    }

    /// Toggles acceptance of `value` for column `key`.
    pub fn toggle(&mut self, key: &str, value: &str) {
        let values = self.accepted.entry(key.to_string()).or_default();
        if !values.remove(value) {
            values.insert(value.to_string());
        }
        if values.is_empty() {
            self.accepted.remove(key);
        }
    }

    /// Removes every accepted value of column `key`.
    pub fn clear_column(&mut self, key: &str) {
        self.accepted.remove(key);
    }

    /// Removes all restrictions.
    pub fn clear(&mut self) {
        self.accepted.clear();
    }

    /// Whether `value` is accepted for `key`.
    #[must_use]
    pub fn is_selected(&self, key: &str, value: &str) -> bool {
        self.accepted.get(key).is_some_and(|v| v.contains(value))
    }

    /// Accepted values of column `key`, in sorted order.
    pub fn values(&self, key: &str) -> impl Iterator<Item = &str> {
        self.accepted
            .get(key)
            .into_iter()
            .flat_map(|values| values.iter().map(String::as_str))
    }

    /// Number of accepted values across all columns.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.accepted.values().map(BTreeSet::len).sum()
    }

    /// Whether no column is restricted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accepted.values().all(BTreeSet::is_empty)
    }

    /// Checks whether `row` passes every non-empty column restriction.
    #[must_use]
    pub fn accepts(&self, row: &Row) -> bool {
        self.accepted
            .iter()
            .filter(|(_, values)| !values.is_empty())
            .all(|(key, values)| row.get(key).key().is_some_and(|v| values.contains(&v)))
    }
}

/// Candidate facet values for `column`.
///
/// Explicit `filter_options` win. Otherwise the distinct stringified values
/// of the entire unfiltered `data` are returned in first-seen order, skipping
/// nulls, so selecting one value never hides the others.
#[must_use]
pub fn filter_options(data: &[Row], column: &Column) -> Vec<String> {
    if let Some(options) = &column.filter_options {
        return options.clone();
    }
    let mut seen = HashSet::new();
    data.iter()
        .filter_map(|row| row.get(&column.key).key())
        .filter(|value| seen.insert(value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(keys: &[&str]) -> Vec<String> {
        keys.iter().map(ToString::to_string).collect()
    }

    mod search_tests {
        use super::*;

        #[test]
        fn case_insensitive_substring() {
            let row = Row::new("1").with("name", "Alice");
            assert!(matches_search(&row, "ali", &keys(&["name"])));
            assert!(matches_search(&row, "LIC", &keys(&["name"])));
            assert!(!matches_search(&row, "bob", &keys(&["name"])));
        }

        #[test]
        fn only_named_keys_are_searched() {
            let row = Row::new("1").with("name", "Alice").with("email", "x@y.io");
            assert!(!matches_search(&row, "y.io", &keys(&["name"])));
            assert!(matches_search(&row, "y.io", &keys(&["name", "email"])));
        }

        #[test]
        fn numbers_are_searched_as_text() {
            let row = Row::new("1").with("age", 30);
            assert!(matches_search(&row, "3", &keys(&["age"])));
        }

        #[test]
        fn null_never_matches() {
            let row = Row::new("1");
            assert!(!matches_search(&row, "null", &keys(&["name"])));
        }

        #[test]
        fn empty_query_or_keys_match_all() {
            let row = Row::new("1");
            assert!(matches_search(&row, "", &keys(&["name"])));
            assert!(matches_search(&row, "anything", &[]));
        }
    }

    mod filter_set_tests {
        use super::*;

        #[test]
        fn or_within_column() {
            let filters = FilterSet::from_pairs([("age", ["30", "25"])]);
            assert!(filters.accepts(&Row::new("1").with("age", 30)));
            assert!(filters.accepts(&Row::new("2").with("age", 25)));
            assert!(!filters.accepts(&Row::new("3").with("age", 40)));
        }

        #[test]
        fn and_across_columns() {
            let filters = FilterSet::from_pairs([("age", ["30"]), ("name", ["Bob"])]);
            assert!(filters.accepts(&Row::new("1").with("age", 30).with("name", "Bob")));
            assert!(!filters.accepts(&Row::new("2").with("age", 30).with("name", "Eve")));
        }

        #[test]
        fn toggle_adds_then_removes() {
            let mut filters = FilterSet::new();
            filters.toggle("role", "admin");
            assert!(filters.is_selected("role", "admin"));
            assert_eq!(filters.active_count(), 1);
            filters.toggle("role", "admin");
            assert!(filters.is_empty());
        }

        #[test]
        fn values_lists_one_column() {
            let filters = FilterSet::from_pairs([("status", vec!["Queued", "Failed"]), ("x", vec!["1"])]);
            assert_eq!(filters.values("status").collect::<Vec<_>>(), vec!["Failed", "Queued"]);
            assert_eq!(filters.values("missing").count(), 0);
        }

        #[test]
        fn null_rejected_when_column_restricted() {
            let filters = FilterSet::from_pairs([("age", ["30"])]);
            assert!(!filters.accepts(&Row::new("1")));
        }

        #[test]
        fn clear_column_lifts_restriction() {
            let mut filters = FilterSet::from_pairs([("age", ["30"]), ("name", ["Bob"])]);
            filters.clear_column("age");
            assert!(filters.accepts(&Row::new("1").with("name", "Bob")));
            filters.clear();
            assert!(filters.is_empty());
        }
    }

    mod option_tests {
        use super::*;

        #[test]
        fn distinct_values_in_first_seen_order() {
            let data = vec![
                Row::new("1").with("status", "active"),
                Row::new("2").with("status", "paused"),
                Row::new("3").with("status", "active"),
                Row::new("4"),
            ];
            let column = Column::new("status", "Status").filterable();
            assert_eq!(filter_options(&data, &column), vec!["active", "paused"]);
        }

        #[test]
        fn explicit_options_win() {
            let data = vec![Row::new("1").with("status", "active")];
            let column = Column::new("status", "Status").filter_options(["x", "y"]);
            assert_eq!(filter_options(&data, &column), vec!["x", "y"]);
        }
    }
}
