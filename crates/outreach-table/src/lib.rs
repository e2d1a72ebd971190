//! # outreach-table
//!
//! The tabular data presenter behind every list screen of the Outreach front
//! end: email accounts, organization users, verification batches.
//!
//! This crate provides:
//! - **Rows and cells** - opaque field maps with a mandatory stable `id`
//! - **Column descriptors** - labels, layout hints, sort/filter flags, custom renderers
//! - **View derivation** - search, faceted filters, stable sort, pagination as a pure function
//! - **Selection** - per-row and current-page "select all" toggles over caller-owned ids
//! - **Presenter** - [`DataTable`], an Elm-style component that turns [`TableEvent`]s
//!   into local state changes and [`TableOutput`]s for the owning page
//! - **Layout** - [`TableLayout`], a toolkit-neutral render plan
//!
//! ## Quick Start
//!
//! ```ignore
//! use outreach_table::{Column, DataTable, Row, TableConfig, TableEvent};
//!
//! let rows = vec![
//!     Row::new("1").with("name", "Bob").with("age", 30),
//!     Row::new("2").with("name", "Alice").with("age", 25),
//! ];
//! let columns = vec![Column::new("name", "Name"), Column::new("age", "Age")];
//! let config = TableConfig::builder().search_keys(["name"]).build()?;
//!
//! let mut table = DataTable::new(columns, config)?;
//! table.set_data(rows);
//! table.update(TableEvent::SearchChanged("ali".into()));
//! assert_eq!(table.visible_ids(), vec!["2".into()]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod column;
mod config;
mod error;
mod filter;
mod layout;
mod pagination;
mod row;
mod selection;
mod sort;
mod table;
mod value;
mod view;

pub use column::{Align, CellContent, CellRenderer, Column, PLACEHOLDER, Tone};
pub use config::{BulkAction, EmptyState, RowAction, TableConfig, TableConfigBuilder};
pub use error::{ConfigError, Result};
pub use filter::{FilterSet, filter_options, matches_search};
pub use layout::{
    Body, BulkBar, Facet, FacetOption, HeaderCell, HeaderRow, PaginationBar, RenderedRow,
    SearchBox, TableLayout, Toolbar,
};
pub use pagination::{PageControl, PageItem, page_items, total_pages};
pub use row::{Row, RowError, RowId};
pub use selection::{CheckState, header_check_state, toggle_all_visible, toggle_row};
pub use sort::{SortDirection, SortState, compare_cells};
pub use table::{DataTable, SKELETON_ROWS, TableEvent, TableOutput};
pub use value::CellValue;
pub use view::{DerivedView, ViewQuery, derive_view};
