//! Selection toggles over caller-owned row ids.
//!
//! The table never stores the selection itself; these functions compute the
//! next selection, which is handed back to the owner.

use crate::row::RowId;

/// Visual state of the header checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    /// No visible row is selected.
    Unchecked,
    /// Some but not all visible rows are selected.
    Indeterminate,
    /// Every visible row is selected.
    Checked,
}

impl CheckState {
    /// Checkbox glyph for text-based rendering.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Unchecked => "\u{2610}",
            Self::Indeterminate => "\u{229F}",
            Self::Checked => "\u{2611}",
        }
    }
}

/// Adds or removes exactly `id`.
#[must_use]
pub fn toggle_row(selected: &[RowId], id: &RowId) -> Vec<RowId> {
    if selected.contains(id) {
        selected.iter().filter(|s| *s != id).cloned().collect()
    } else {
        let mut next = selected.to_vec();
        next.push(id.clone());
        next
    }
}

/// "Select all" over the rows visible on the current page.
///
/// When every visible id is already selected, exactly those ids are removed.
/// Otherwise all visible ids are added. Selections made on other pages are
/// kept either way.
#[must_use]
pub fn toggle_all_visible(selected: &[RowId], visible: &[RowId]) -> Vec<RowId> {
    let all_selected = visible.iter().all(|id| selected.contains(id));
    if all_selected {
        selected
            .iter()
            .filter(|id| !visible.contains(id))
            .cloned()
            .collect()
    } else {
        let mut next = selected.to_vec();
        for id in visible {
            if !next.contains(id) {
                next.push(id.clone());
            }
        }
        next
    }
}

/// Header checkbox state for the current page.
#[must_use]
pub fn header_check_state(selected: &[RowId], visible: &[RowId]) -> CheckState {
    let count = visible.iter().filter(|id| selected.contains(id)).count();
    if count == 0 {
        CheckState::Unchecked
    } else if count == visible.len() {
        CheckState::Checked
    } else {
        CheckState::Indeterminate
    }
}
