//! Toolkit-neutral render plan.
//!
//! [`DataTable::layout`](crate::DataTable::layout) produces a [`TableLayout`]
//! that a view layer turns into widgets without re-deriving anything.

use crate::column::{Align, CellContent};
use crate::config::{BulkAction, EmptyState, RowAction};
use crate::pagination::PageItem;
use crate::row::RowId;
use crate::selection::CheckState;
use crate::sort::SortDirection;

/// Everything needed to draw one table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    /// Search box, filter toggle and bulk bar.
    pub toolbar: Toolbar,
    /// Facets of the filter panel; empty when the panel is closed.
    pub filter_panel: Vec<Facet>,
    /// Column headers.
    pub header: HeaderRow,
    /// Rows, skeleton or empty state.
    pub body: Body,
    /// Pagination controls, when paginated.
    pub pagination: Option<PaginationBar>,
}

/// Controls above the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolbar {
    /// Search box, when searchable.
    pub search: Option<SearchBox>,
    /// Filter toggle with the number of active filter values, when filterable.
    pub filter_toggle: Option<usize>,
    /// Bulk action bar, when at least one row is selected.
    pub bulk: Option<BulkBar>,
}

/// Free-text search input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBox {
    /// Current query.
    pub query: String,
    /// Placeholder text.
    pub placeholder: String,
}

/// Actions on the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkBar {
    /// Number of selected rows (across all pages).
    pub selected_count: usize,
    /// Whether bulk delete is offered.
    pub delete: bool,
    /// Extra bulk actions.
    pub actions: Vec<BulkAction>,
}

/// One column's group of filter checkboxes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Facet {
    /// Column key.
    pub key: String,
    /// Column label.
    pub label: String,
    /// Candidate values.
    pub options: Vec<FacetOption>,
}

/// One filter checkbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetOption {
    /// Raw value string.
    pub value: String,
    /// Whether the value is accepted.
    pub checked: bool,
}

/// Header line.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderRow {
    /// Select-all checkbox, when selectable.
    pub checkbox: Option<CheckState>,
    /// Column headers.
    pub cells: Vec<HeaderCell>,
    /// Whether a trailing action column exists.
    pub actions: bool,
}

/// One column header.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    /// Column key.
    pub key: String,
    /// Header text.
    pub label: String,
    /// Width hint.
    pub width: Option<f32>,
    /// Alignment hint.
    pub align: Align,
    /// Whether clicking toggles sorting.
    pub sortable: bool,
    /// Direction, when this column is the active sort.
    pub sorted: Option<SortDirection>,
}

/// Table body.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Placeholder rows shaped like real ones.
    Loading {
        /// Number of skeleton rows.
        rows: usize,
        /// Number of data columns.
        columns: usize,
        /// Whether a checkbox column is reserved.
        checkbox: bool,
        /// Whether an action column is reserved.
        actions: bool,
    },
    /// Nothing to show after search and filters.
    Empty(EmptyState),
    /// Rows of the current page.
    Rows(Vec<RenderedRow>),
}

impl Body {
    /// Number of real data rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        match self {
            Self::Rows(rows) => rows.len(),
            Self::Loading { .. } | Self::Empty(_) => 0,
        }
    }
}

/// One rendered data row.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRow {
    /// Row identifier.
    pub id: RowId,
    /// Position on the current page.
    pub index: usize,
    /// Checkbox state, when selectable.
    pub selected: Option<bool>,
    /// Cells, one per column.
    pub cells: Vec<(Align, Option<f32>, CellContent)>,
    /// Whether the row reacts to clicks.
    pub clickable: bool,
    /// Whether edit is offered.
    pub edit: bool,
    /// Whether delete is offered.
    pub delete: bool,
    /// Custom actions.
    pub actions: Vec<RowAction>,
}

/// Pagination controls below the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationBar {
    /// 1-indexed current page.
    pub current_page: usize,
    /// Number of pages.
    pub total_pages: usize,
    /// Row count used for page math.
    pub total_count: usize,
    /// 1-indexed first row shown ("Showing 11 to 20 of 95").
    pub first_row: usize,
    /// 1-indexed last row shown.
    pub last_row: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Page-size selector choices.
    pub page_size_options: Vec<usize>,
    /// Page-number strip.
    pub items: Vec<PageItem>,
    /// Whether "previous" is enabled.
    pub can_previous: bool,
    /// Whether "next" is enabled.
    pub can_next: bool,
}

impl PaginationBar {
    /// "Showing X to Y of Z results" summary.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Showing {} to {} of {} results",
            self.first_row, self.last_row, self.total_count
        )
    }
}
