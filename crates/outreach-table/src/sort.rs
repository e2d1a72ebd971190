//! Single-column sorting.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::value::CellValue;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Header indicator glyph.
    #[must_use]
    pub const fn indicator(self) -> &'static str {
        match self {
            Self::Ascending => "\u{25B2}",
            Self::Descending => "\u{25BC}",
        }
    }
}

/// The active sort column, at most one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    /// Column key.
    pub key: String,
    /// Direction.
    pub direction: SortDirection,
}

impl SortState {
    /// Ascending sort on `key`.
    #[must_use]
    pub fn ascending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Descending sort on `key`.
    #[must_use]
    pub fn descending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Descending,
        }
    }

    /// Next state after a header click on `key`.
    ///
    /// Clicking the active ascending column flips it to descending; any other
    /// click starts an ascending sort on `key`.
    #[must_use]
    pub fn toggled(current: Option<&Self>, key: &str) -> Self {
        match current {
            Some(state) if state.key == key && state.direction == SortDirection::Ascending => {
                Self::descending(key)
            }
            _ => Self::ascending(key),
        }
    }

    /// Compares two cells of the sort column.
    ///
    /// Nulls sort last in both directions; only the non-null ordering is
    /// reversed for descending sorts.
    #[must_use]
    pub fn compare(&self, a: &CellValue, b: &CellValue) -> Ordering {
        match (a.is_null(), b.is_null()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                let ordering = compare_cells(a, b);
                match self.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            }
        }
    }
}

/// Ascending comparison of two non-null cells.
///
/// Numbers compare numerically, everything else compares by locale-style
/// collation of the stringified values. Incomparable numbers (NaN) and
/// signed zeros compare equal so a stable sort keeps their order.
#[must_use]
pub fn compare_cells(a: &CellValue, b: &CellValue) -> Ordering {
    match (a, b) {
        (CellValue::Number(x), CellValue::Number(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        (CellValue::Text(x), CellValue::Text(y)) => collate(x, y),
        _ => collate(&a.to_string(), &b.to_string()),
    }
}

/// Three-level collation of two strings.
///
/// Base letters are compared first with accents and case removed, then
/// accents, then case with lowercase first.
fn collate(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented(a).cmp(accented(b)))
        .then_with(|| b.cmp(a))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|&c| !is_combining_mark(c))
        .flat_map(char::to_lowercase)
}

fn accented(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    mod toggle_tests {
        use super::*;

        #[test]
        fn first_click_sorts_ascending() {
            assert_eq!(
                SortState::toggled(None, "age"),
                SortState::ascending("age")
            );
        }

        #[test]
        fn second_click_sorts_descending() {
            let asc = SortState::ascending("age");
            assert_eq!(
                SortState::toggled(Some(&asc), "age"),
                SortState::descending("age")
            );
        }

        #[test]
        fn third_click_sorts_ascending_again() {
            let desc = SortState::descending("age");
            assert_eq!(
                SortState::toggled(Some(&desc), "age"),
                SortState::ascending("age")
            );
        }

        #[test]
        fn other_column_starts_ascending() {
            let desc = SortState::descending("age");
            assert_eq!(
                SortState::toggled(Some(&desc), "name"),
                SortState::ascending("name")
            );
        }
    }

    mod compare_tests {
        use super::*;

        #[test]
        fn numbers_compare_numerically() {
            assert_eq!(
                compare_cells(&CellValue::from(9), &CellValue::from(10)),
                Ordering::Less
            );
        }

        #[test]
        fn text_ignores_case() {
            assert_eq!(
                compare_cells(&CellValue::from("alice"), &CellValue::from("Bob")),
                Ordering::Less
            );
            assert_eq!(
                compare_cells(&CellValue::from("a"), &CellValue::from("A")),
                Ordering::Less
            );
        }

        #[test]
        fn accents_sort_with_their_base_letter() {
            let mut names: Vec<CellValue> = ["Zoe", "\u{c9}mile", "Alice", "eve"]
                .into_iter()
                .map(CellValue::from)
                .collect();
            names.sort_by(compare_cells);
            let names: Vec<String> = names.iter().map(ToString::to_string).collect();
            assert_eq!(names, vec!["Alice", "\u{c9}mile", "eve", "Zoe"]);
        }

        #[test]
        fn unaccented_letter_sorts_before_accented() {
            assert_eq!(
                compare_cells(&CellValue::from("resume"), &CellValue::from("r\u{e9}sum\u{e9}")),
                Ordering::Less
            );
            assert_eq!(
                compare_cells(&CellValue::from("r\u{e9}sum\u{e9}"), &CellValue::from("resumes")),
                Ordering::Less
            );
        }

        #[test]
        fn signed_zero_and_nan_compare_equal() {
            assert_eq!(
                compare_cells(&CellValue::from(-0.0), &CellValue::from(0.0)),
                Ordering::Equal
            );
            assert_eq!(
                compare_cells(&CellValue::from(f64::NAN), &CellValue::from(1.0)),
                Ordering::Equal
            );
        }

        #[test]
        fn mixed_types_compare_as_text() {
            // "10" < "9" as text
            assert_eq!(
                compare_cells(&CellValue::from(10), &CellValue::from("9")),
                Ordering::Less
            );
            assert_eq!(
                compare_cells(&CellValue::from(true), &CellValue::from("abc")),
                Ordering::Greater
            );
        }

        #[test]
        fn nulls_last_in_both_directions() {
            let asc = SortState::ascending("k");
            let desc = SortState::descending("k");
            let one = CellValue::from(1);
            assert_eq!(asc.compare(&CellValue::Null, &one), Ordering::Greater);
            assert_eq!(desc.compare(&CellValue::Null, &one), Ordering::Greater);
            assert_eq!(desc.compare(&one, &CellValue::Null), Ordering::Less);
        }

        #[test]
        fn descending_reverses_values() {
            let desc = SortState::descending("k");
            assert_eq!(
                desc.compare(&CellValue::from(1), &CellValue::from(2)),
                Ordering::Greater
            );
        }
    }
}
