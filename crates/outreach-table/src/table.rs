//! The `DataTable` presenter.
//!
//! Elm-style: the owning page forwards [`TableEvent`]s to [`DataTable::update`]
//! and maps the returned [`TableOutput`] into its own messages. Data, loading
//! state and selection stay owned by the page and are pushed in through
//! setters; search, filters, sort and (self-managed) paging live here.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::column::Column;
use crate::config::TableConfig;
use crate::error::{ConfigError, Result};
use crate::filter::{FilterSet, filter_options};
use crate::layout::{
    Body, BulkBar, Facet, FacetOption, HeaderCell, HeaderRow, PaginationBar, RenderedRow,
    SearchBox, TableLayout, Toolbar,
};
use crate::pagination::{PageControl, page_items};
use crate::row::{Row, RowId};
use crate::selection::{header_check_state, toggle_all_visible, toggle_row};
use crate::sort::SortState;
use crate::view::{DerivedView, ViewQuery, derive_view};

/// Number of placeholder rows drawn while loading.
pub const SKELETON_ROWS: usize = 5;

/// User interactions with a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// Search box text changed.
    SearchChanged(String),
    /// A filter checkbox was toggled.
    FilterToggled {
        /// Column key.
        key: String,
        /// Raw value string.
        value: String,
    },
    /// All filter values of one column were cleared.
    FilterCleared(String),
    /// All filters were cleared.
    FiltersCleared,
    /// The filter panel was opened or closed.
    FilterPanelToggled,
    /// A column header was clicked.
    SortClicked(String),
    /// A page number was clicked.
    PageSelected(usize),
    /// "Next" was clicked.
    NextPage,
    /// "Previous" was clicked.
    PreviousPage,
    /// A page size was chosen.
    PageSizeSelected(usize),
    /// A row checkbox was toggled.
    RowToggled(RowId),
    /// The header checkbox was toggled.
    AllToggled,
    /// A row was clicked outside its checkbox and action cells.
    RowClicked(RowId),
    /// The edit button of a row was clicked.
    EditClicked(RowId),
    /// The delete button of a row was clicked.
    DeleteClicked(RowId),
    /// A custom row action was clicked.
    RowActionClicked {
        /// Action identifier.
        action: String,
        /// Row identifier.
        id: RowId,
    },
    /// Bulk delete was clicked.
    BulkDeleteClicked,
    /// A bulk action was clicked.
    BulkActionClicked(String),
}

/// Notifications for the owning page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableOutput {
    /// The selection should become this list of ids.
    SelectionChanged(Vec<RowId>),
    /// The page should change (externally driven pagination only).
    PageChanged(usize),
    /// The search query or filters changed (externally driven pagination
    /// only). The owner should fetch page 1 with the new query.
    QueryChanged,
    /// The page size changed; the table is back on page 1.
    PageSizeChanged(usize),
    /// A row was clicked.
    RowClicked(RowId),
    /// Edit was requested for a row.
    Edit(RowId),
    /// Delete was requested for a row.
    Delete(RowId),
    /// A custom row action was requested.
    RowAction {
        /// Action identifier.
        action: String,
        /// Row identifier.
        id: RowId,
    },
    /// Delete was requested for all selected rows.
    BulkDelete(Vec<RowId>),
    /// A bulk action was requested for all selected rows.
    BulkAction {
        /// Action identifier.
        action: String,
        /// Selected row identifiers.
        ids: Vec<RowId>,
    },
}

/// A searchable, filterable, sortable, paginated, selectable table.
#[derive(Debug, Clone)]
pub struct DataTable {
    columns: Vec<Column>,
    config: TableConfig,
    data: Vec<Row>,
    selected: Vec<RowId>,
    loading: bool,
    search: String,
    filters: FilterSet,
    sort: Option<SortState>,
    page_size: usize,
    page: PageControl,
    filter_panel_open: bool,
    view: DerivedView,
}

impl DataTable {
    /// Creates an empty table.
    ///
    /// # Errors
    ///
    /// Returns an error for duplicate column keys, a default sort on an
    /// unknown column, or an invalid configuration.
    pub fn new(columns: Vec<Column>, config: TableConfig) -> Result<Self> {
        config.validate()?;

        let mut keys = HashSet::new();
        for column in &columns {
            if !keys.insert(column.key.as_str()) {
                return Err(ConfigError::DuplicateColumn(column.key.clone()));
            }
        }
        if let Some(sort) = &config.default_sort
            && !keys.contains(sort.key.as_str())
        {
            return Err(ConfigError::UnknownSortColumn(sort.key.clone()));
        }

        let mut table = Self {
            sort: config.default_sort.clone(),
            page_size: config.page_size,
            page: config.page_control,
            columns,
            config,
            data: Vec::new(),
            selected: Vec::new(),
            loading: false,
            search: String::new(),
            filters: FilterSet::new(),
            filter_panel_open: false,
            view: DerivedView::default(),
        };
        table.refresh();
        Ok(table)
    }

    // ---------------------------------------------------------------------
    // Owner-controlled inputs
    // ---------------------------------------------------------------------

    /// Replaces the rows.
    ///
    /// In self-managed mode a current page past the new last page is pulled
    /// back to the last page.
    pub fn set_data(&mut self, data: Vec<Row>) {
        self.data = data;
        self.refresh();
        if let PageControl::SelfManaged { current_page } = self.page {
            let last = self.view.total_pages.max(1);
            if current_page > last {
                self.page = PageControl::SelfManaged { current_page: last };
                self.refresh();
            }
        }
    }

    /// Sets the loading flag.
    pub const fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Sets the caller-owned selection.
    pub fn set_selection(&mut self, selected: Vec<RowId>) {
        self.selected = selected;
    }

    /// Hands paging to the owner with the given page and total row count.
    pub fn sync_external_page(&mut self, current_page: usize, total_items: usize) {
        self.page = PageControl::ExternallyDriven {
            current_page: current_page.max(1),
            total_items,
        };
        self.refresh();
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    /// Column descriptors.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Configuration.
    #[must_use]
    pub const fn config(&self) -> &TableConfig {
        &self.config
    }

    /// All rows, unfiltered.
    #[must_use]
    pub fn data(&self) -> &[Row] {
        &self.data
    }

    /// Current search query.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Active filters.
    #[must_use]
    pub const fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// Active sort.
    #[must_use]
    pub const fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Rows per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// 1-indexed current page.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.page.current_page()
    }

    /// Page ownership.
    #[must_use]
    pub const fn page_control(&self) -> PageControl {
        self.page
    }

    /// Number of pages.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.view.total_pages
    }

    /// Caller-owned selection as last pushed in.
    #[must_use]
    pub fn selected(&self) -> &[RowId] {
        &self.selected
    }

    /// Whether the table shows its loading skeleton.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the filter panel is open.
    #[must_use]
    pub const fn is_filter_panel_open(&self) -> bool {
        self.filter_panel_open
    }

    /// The derived view.
    #[must_use]
    pub const fn view(&self) -> &DerivedView {
        &self.view
    }

    /// Rows on the current page, in display order.
    pub fn visible_rows(&self) -> impl Iterator<Item = &Row> {
        self.view.visible().iter().map(|&i| &self.data[i])
    }

    /// Identifiers of the rows on the current page.
    #[must_use]
    pub fn visible_ids(&self) -> Vec<RowId> {
        self.visible_rows().map(|row| row.id().clone()).collect()
    }

    /// All rows passing search and filters, sorted, ignoring pagination.
    pub fn derived_rows(&self) -> impl Iterator<Item = &Row> {
        self.view.matched.iter().map(|&i| &self.data[i])
    }

    // ---------------------------------------------------------------------
    // Update
    // ---------------------------------------------------------------------

    /// Applies a user interaction.
    ///
    /// Returns the notification for the owning page, if any.
    pub fn update(&mut self, event: TableEvent) -> Option<TableOutput> {
        debug!("Table event: {event:?}");
        match event {
            TableEvent::SearchChanged(query) => {
                self.search = query;
                self.reset_page()
            }
            TableEvent::FilterToggled { key, value } => {
                self.filters.toggle(&key, &value);
                self.reset_page()
            }
            TableEvent::FilterCleared(key) => {
                self.filters.clear_column(&key);
                self.reset_page()
            }
            TableEvent::FiltersCleared => {
                self.filters.clear();
                self.reset_page()
            }
            TableEvent::FilterPanelToggled => {
                self.filter_panel_open = !self.filter_panel_open;
                None
            }
            TableEvent::SortClicked(key) => {
                let sortable = self
                    .columns
                    .iter()
                    .any(|c| c.key == key && c.is_sortable(self.config.sortable));
                if sortable {
                    self.sort = Some(SortState::toggled(self.sort.as_ref(), &key));
                    self.refresh();
                } else {
                    warn!("Ignoring sort on non-sortable column {key}");
                }
                None
            }
            TableEvent::PageSelected(page) => self.go_to_page(page),
            TableEvent::NextPage => self.go_to_page(self.current_page() + 1),
            TableEvent::PreviousPage => self.go_to_page(self.current_page().saturating_sub(1)),
            TableEvent::PageSizeSelected(size) => {
                if size == 0 {
                    return None;
                }
                self.page_size = size;
                self.page = match self.page {
                    PageControl::SelfManaged { .. } => PageControl::SelfManaged { current_page: 1 },
                    PageControl::ExternallyDriven { total_items, .. } => {
                        PageControl::ExternallyDriven {
                            current_page: 1,
                            total_items,
                        }
                    }
                };
                self.refresh();
                Some(TableOutput::PageSizeChanged(size))
            }
            TableEvent::RowToggled(id) => {
                if !self.config.selectable || !self.data.iter().any(|r| *r.id() == id) {
                    return None;
                }
                Some(TableOutput::SelectionChanged(toggle_row(
                    &self.selected,
                    &id,
                )))
            }
            TableEvent::AllToggled => {
                if !self.config.selectable {
                    return None;
                }
                let visible = self.visible_ids();
                Some(TableOutput::SelectionChanged(toggle_all_visible(
                    &self.selected,
                    &visible,
                )))
            }
            TableEvent::RowClicked(id) => self
                .config
                .row_click_enabled
                .then_some(TableOutput::RowClicked(id)),
            TableEvent::EditClicked(id) => {
                self.config.edit_enabled.then_some(TableOutput::Edit(id))
            }
            TableEvent::DeleteClicked(id) => {
                self.config.delete_enabled.then_some(TableOutput::Delete(id))
            }
            TableEvent::RowActionClicked { action, id } => self
                .config
                .row_actions
                .iter()
                .any(|a| a.id == action)
                .then_some(TableOutput::RowAction { action, id }),
            TableEvent::BulkDeleteClicked => (self.config.bulk_delete_enabled
                && !self.selected.is_empty())
            .then(|| TableOutput::BulkDelete(self.selected.clone())),
            TableEvent::BulkActionClicked(action) => {
                let known = self.config.bulk_actions.iter().any(|a| a.id == action);
                (known && !self.selected.is_empty()).then(|| TableOutput::BulkAction {
                    action,
                    ids: self.selected.clone(),
                })
            }
        }
    }

    /// Moves to `page`, clamped to the existing pages.
    fn go_to_page(&mut self, page: usize) -> Option<TableOutput> {
        let page = page.clamp(1, self.view.total_pages.max(1));
        if page == self.current_page() {
            return None;
        }
        match self.page {
            PageControl::SelfManaged { .. } => {
                self.page = PageControl::SelfManaged { current_page: page };
                self.refresh();
                None
            }
            PageControl::ExternallyDriven { .. } => Some(TableOutput::PageChanged(page)),
        }
    }

    /// Returns to page 1 after the search or filters changed.
    fn reset_page(&mut self) -> Option<TableOutput> {
        let output = match self.page {
            PageControl::SelfManaged { .. } => {
                self.page = PageControl::SelfManaged { current_page: 1 };
                None
            }
            PageControl::ExternallyDriven { .. } => Some(TableOutput::QueryChanged),
        };
        self.refresh();
        output
    }

    /// Re-derives the cached view from the current inputs.
    fn refresh(&mut self) {
        self.view = derive_view(
            &self.data,
            &ViewQuery {
                search: &self.search,
                search_keys: &self.config.search_keys,
                filters: &self.filters,
                sort: self.sort.as_ref(),
                paginated: self.config.paginated,
                page_size: self.page_size,
                page: self.page,
            },
        );
    }

    // ---------------------------------------------------------------------
    // Layout
    // ---------------------------------------------------------------------

    /// Facets of the filter panel, derived from the unfiltered data.
    #[must_use]
    pub fn facets(&self) -> Vec<Facet> {
        self.columns
            .iter()
            .filter(|c| c.filterable)
            .map(|column| Facet {
                key: column.key.clone(),
                label: column.label.clone(),
                options: filter_options(&self.data, column)
                    .into_iter()
                    .map(|value| FacetOption {
                        checked: self.filters.is_selected(&column.key, &value),
                        value,
                    })
                    .collect(),
            })
            .collect()
    }

    /// Builds the render plan for the current state.
    #[must_use]
    pub fn layout(&self) -> TableLayout {
        let config = &self.config;
        let visible = self.visible_ids();
        let has_facets = self.columns.iter().any(|c| c.filterable);

        let bulk = (config.selectable
            && !self.selected.is_empty()
            && (config.bulk_delete_enabled || !config.bulk_actions.is_empty()))
        .then(|| BulkBar {
            selected_count: self.selected.len(),
            delete: config.bulk_delete_enabled,
            actions: config.bulk_actions.clone(),
        });

        let toolbar = Toolbar {
            search: config.searchable.then(|| SearchBox {
                query: self.search.clone(),
                placeholder: config.search_placeholder.clone(),
            }),
            filter_toggle: (config.filterable && has_facets)
                .then(|| self.filters.active_count()),
            bulk,
        };

        let filter_panel = if config.filterable && self.filter_panel_open {
            self.facets()
        } else {
            Vec::new()
        };

        let header = HeaderRow {
            checkbox: config
                .selectable
                .then(|| header_check_state(&self.selected, &visible)),
            cells: self
                .columns
                .iter()
                .map(|column| HeaderCell {
                    key: column.key.clone(),
                    label: column.label.clone(),
                    width: column.width,
                    align: column.align,
                    sortable: column.is_sortable(config.sortable),
                    sorted: self
                        .sort
                        .as_ref()
                        .filter(|s| s.key == column.key)
                        .map(|s| s.direction),
                })
                .collect(),
            actions: config.has_row_actions(),
        };

        TableLayout {
            toolbar,
            filter_panel,
            header,
            body: self.body(),
            pagination: self.pagination_bar(),
        }
    }

    fn body(&self) -> Body {
        let config = &self.config;
        if self.loading {
            return Body::Loading {
                rows: SKELETON_ROWS,
                columns: self.columns.len(),
                checkbox: config.selectable,
                actions: config.has_row_actions(),
            };
        }
        if self.view.visible().is_empty() {
            return Body::Empty(config.empty.clone());
        }

        let show_actions = config.has_row_actions();
        let rows = self
            .visible_rows()
            .enumerate()
            .map(|(index, row)| RenderedRow {
                id: row.id().clone(),
                index,
                selected: config
                    .selectable
                    .then(|| self.selected.contains(row.id())),
                cells: self
                    .columns
                    .iter()
                    .map(|c| (c.align, c.width, c.render_cell(row, index)))
                    .collect(),
                clickable: config.row_click_enabled,
                edit: show_actions && config.edit_enabled,
                delete: show_actions && config.delete_enabled,
                actions: if show_actions {
                    config.row_actions.clone()
                } else {
                    Vec::new()
                },
            })
            .collect();
        Body::Rows(rows)
    }

    fn pagination_bar(&self) -> Option<PaginationBar> {
        let view = &self.view;
        if !self.config.paginated || view.total_count == 0 {
            return None;
        }
        let current_page = self.current_page();
        let first_row = (current_page - 1) * self.page_size + 1;
        let page_end = match self.page {
            // A short server page ends where its rows end.
            PageControl::ExternallyDriven { .. } if !view.visible().is_empty() => {
                first_row - 1 + view.visible().len()
            }
            _ => current_page * self.page_size,
        };
        let last_row = page_end.min(view.total_count);
        Some(PaginationBar {
            current_page,
            total_pages: view.total_pages,
            total_count: view.total_count,
            first_row: first_row.min(view.total_count),
            last_row,
            page_size: self.page_size,
            page_size_options: self.config.page_size_options.clone(),
            items: page_items(current_page, view.total_pages),
            can_previous: current_page > 1,
            can_next: current_page < view.total_pages,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::column::CellContent;
    use crate::config::{BulkAction, RowAction};
    use crate::selection::CheckState;
    use crate::sort::SortDirection;

    fn columns() -> Vec<Column> {
        vec![
            Column::new("name", "Name"),
            Column::new("status", "Status").filterable(),
            Column::new("sent", "Sent"),
        ]
    }

    fn rows(count: usize) -> Vec<Row> {
        (1..=count)
            .map(|i| {
                Row::new(i.to_string())
                    .with("name", format!("account-{i}"))
                    .with("status", if i % 2 == 0 { "paused" } else { "active" })
                    .with("sent", u32::try_from(i * 10).unwrap())
            })
            .collect()
    }

    fn table(config: TableConfig, count: usize) -> DataTable {
        let mut table = DataTable::new(columns(), config).unwrap();
        table.set_data(rows(count));
        table
    }

    fn ids(table: &DataTable) -> Vec<String> {
        table.visible_ids().iter().map(ToString::to_string).collect()
    }

    mod construction_tests {
        use super::*;

        #[test]
        fn duplicate_keys_rejected() {
            let columns = vec![Column::new("a", "A"), Column::new("a", "Again")];
            let err = DataTable::new(columns, TableConfig::default()).unwrap_err();
            assert_eq!(err, ConfigError::DuplicateColumn("a".into()));
        }

        #[test]
        fn unknown_default_sort_rejected() {
            let config = TableConfig::builder()
                .default_sort(SortState::ascending("missing"))
                .build()
                .unwrap();
            let err = DataTable::new(columns(), config).unwrap_err();
            assert_eq!(err, ConfigError::UnknownSortColumn("missing".into()));
        }

        #[test]
        fn default_sort_applied() {
            let config = TableConfig::builder()
                .default_sort(SortState::descending("sent"))
                .build()
                .unwrap();
            let table = table(config, 3);
            assert_eq!(ids(&table), vec!["3", "2", "1"]);
        }
    }

    mod paging_tests {
        use super::*;

        #[test]
        fn self_managed_navigation() {
            let mut table = table(TableConfig::default(), 25);
            assert_eq!(table.total_pages(), 3);
            assert_eq!(table.update(TableEvent::NextPage), None);
            assert_eq!(table.current_page(), 2);
            assert_eq!(ids(&table).first().map(String::as_str), Some("11"));
            table.update(TableEvent::PageSelected(99));
            assert_eq!(table.current_page(), 3);
            assert_eq!(table.visible_ids().len(), 5);
            table.update(TableEvent::PreviousPage);
            assert_eq!(table.current_page(), 2);
        }

        #[test]
        fn search_resets_page() {
            let mut table = table(TableConfig::default(), 25);
            table.update(TableEvent::PageSelected(3));
            table.update(TableEvent::SearchChanged("account".into()));
            assert_eq!(table.current_page(), 1);
        }

        #[test]
        fn filter_resets_page() {
            let mut table = table(TableConfig::default(), 25);
            table.update(TableEvent::PageSelected(2));
            table.update(TableEvent::FilterToggled {
                key: "status".into(),
                value: "active".into(),
            });
            assert_eq!(table.current_page(), 1);
            assert_eq!(table.view().filtered_count(), 13);
        }

        #[test]
        fn page_size_change_resets_page() {
            let mut table = table(TableConfig::default(), 25);
            table.update(TableEvent::PageSelected(2));
            assert_eq!(
                table.update(TableEvent::PageSizeSelected(25)),
                Some(TableOutput::PageSizeChanged(25))
            );
            assert_eq!(table.current_page(), 1);
            assert_eq!(table.total_pages(), 1);
        }

        #[test]
        fn shrinking_data_clamps_page() {
            let mut table = table(TableConfig::default(), 25);
            table.update(TableEvent::PageSelected(3));
            table.set_data(rows(12));
            assert_eq!(table.current_page(), 2);
            assert_eq!(ids(&table), vec!["11", "12"]);
        }

        #[test]
        fn external_mode_reports_instead_of_moving() {
            let config = TableConfig::builder()
                .external_pagination(1, 95)
                .build()
                .unwrap();
            let mut table = table(config, 10);
            assert_eq!(table.total_pages(), 10);
            assert_eq!(
                table.update(TableEvent::NextPage),
                Some(TableOutput::PageChanged(2))
            );
            assert_eq!(table.current_page(), 1);

            table.sync_external_page(2, 95);
            assert_eq!(table.current_page(), 2);
            assert_eq!(
                table.update(TableEvent::SearchChanged("x".into())),
                Some(TableOutput::QueryChanged)
            );
        }

        #[test]
        fn external_mode_reports_query_changes_on_first_page() {
            let config = TableConfig::builder()
                .search_keys(["name"])
                .external_pagination(1, 95)
                .build()
                .unwrap();
            let mut table = table(config, 10);
            assert_eq!(
                table.update(TableEvent::SearchChanged("x".into())),
                Some(TableOutput::QueryChanged)
            );
            assert_eq!(table.visible_ids().len(), 10);
            assert_eq!(table.update(TableEvent::FilterPanelToggled), None);
        }

        #[test]
        fn pagination_bar_summary() {
            let mut table = table(TableConfig::default(), 25);
            table.update(TableEvent::PageSelected(3));
            let bar = table.layout().pagination.unwrap();
            assert_eq!(bar.summary(), "Showing 21 to 25 of 25 results");
            assert!(bar.can_previous);
            assert!(!bar.can_next);
        }
    }

    mod sort_tests {
        use super::*;

        #[test]
        fn header_click_cycles_direction() {
            let mut table = table(TableConfig::default(), 3);
            table.update(TableEvent::SortClicked("sent".into()));
            assert_eq!(ids(&table), vec!["1", "2", "3"]);
            table.update(TableEvent::SortClicked("sent".into()));
            assert_eq!(ids(&table), vec!["3", "2", "1"]);
            let header = table.layout().header;
            assert_eq!(header.cells[2].sorted, Some(SortDirection::Descending));
        }

        #[test]
        fn non_sortable_column_ignored() {
            let columns = vec![Column::new("name", "Name").sortable(false)];
            let mut table = DataTable::new(columns, TableConfig::default()).unwrap();
            table.update(TableEvent::SortClicked("name".into()));
            assert!(table.sort().is_none());
        }
    }

    mod selection_tests {
        use super::*;

        fn selectable() -> TableConfig {
            TableConfig::builder()
                .selectable(true)
                .page_size(2)
                .on_bulk_delete()
                .bulk_action(BulkAction::new("pause", "Pause warmup"))
                .build()
                .unwrap()
        }

        #[test]
        fn select_all_only_touches_current_page() {
            let mut table = table(selectable(), 5);
            table.set_selection(vec![RowId::from("5")]);
            let Some(TableOutput::SelectionChanged(next)) = table.update(TableEvent::AllToggled)
            else {
                panic!("expected selection change");
            };
            assert_eq!(next, vec!["5".into(), "1".into(), "2".into()]);
            table.set_selection(next);
            assert_eq!(
                table.layout().header.checkbox,
                Some(CheckState::Checked)
            );
        }

        #[test]
        fn unknown_row_toggle_ignored() {
            let mut table = table(selectable(), 2);
            assert_eq!(table.update(TableEvent::RowToggled("99".into())), None);
        }

        #[test]
        fn selection_disabled_emits_nothing() {
            let mut table = table(TableConfig::default(), 2);
            assert_eq!(table.update(TableEvent::AllToggled), None);
            assert_eq!(table.update(TableEvent::RowToggled("1".into())), None);
        }

        #[test]
        fn bulk_bar_only_with_selection() {
            let mut table = table(selectable(), 3);
            assert!(table.layout().toolbar.bulk.is_none());
            assert_eq!(table.update(TableEvent::BulkDeleteClicked), None);

            table.set_selection(vec!["1".into(), "3".into()]);
            let bulk = table.layout().toolbar.bulk.unwrap();
            assert_eq!(bulk.selected_count, 2);
            assert!(bulk.delete);
            assert_eq!(
                table.update(TableEvent::BulkDeleteClicked),
                Some(TableOutput::BulkDelete(vec!["1".into(), "3".into()]))
            );
            assert_eq!(
                table.update(TableEvent::BulkActionClicked("pause".into())),
                Some(TableOutput::BulkAction {
                    action: "pause".into(),
                    ids: vec!["1".into(), "3".into()],
                })
            );
            assert_eq!(
                table.update(TableEvent::BulkActionClicked("unknown".into())),
                None
            );
        }
    }

    mod action_tests {
        use super::*;

        #[test]
        fn outputs_need_handlers() {
            let mut table = table(TableConfig::default(), 1);
            assert_eq!(table.update(TableEvent::RowClicked("1".into())), None);
            assert_eq!(table.update(TableEvent::EditClicked("1".into())), None);
            assert_eq!(table.update(TableEvent::DeleteClicked("1".into())), None);
        }

        #[test]
        fn row_actions_emitted() {
            let config = TableConfig::builder()
                .show_row_actions(true)
                .on_edit()
                .on_delete()
                .on_row_click()
                .row_action(RowAction::new("warmup", "Start warmup"))
                .build()
                .unwrap();
            let mut table = table(config, 1);
            assert_eq!(
                table.update(TableEvent::RowClicked("1".into())),
                Some(TableOutput::RowClicked("1".into()))
            );
            assert_eq!(
                table.update(TableEvent::EditClicked("1".into())),
                Some(TableOutput::Edit("1".into()))
            );
            assert_eq!(
                table.update(TableEvent::RowActionClicked {
                    action: "warmup".into(),
                    id: "1".into(),
                }),
                Some(TableOutput::RowAction {
                    action: "warmup".into(),
                    id: "1".into(),
                })
            );
            let Body::Rows(rows) = table.layout().body else {
                panic!("expected rows");
            };
            assert!(rows[0].edit && rows[0].delete && rows[0].clickable);
            assert_eq!(rows[0].actions.len(), 1);
        }
    }

    mod layout_tests {
        use super::*;

        #[test]
        fn loading_beats_empty() {
            let config = TableConfig::builder()
                .selectable(true)
                .show_row_actions(true)
                .on_edit()
                .build()
                .unwrap();
            let mut table = table(config, 0);
            table.set_loading(true);
            assert_eq!(
                table.layout().body,
                Body::Loading {
                    rows: SKELETON_ROWS,
                    columns: 3,
                    checkbox: true,
                    actions: true,
                }
            );
        }

        #[test]
        fn empty_keeps_controls() {
            let config = TableConfig::builder()
                .filterable(true)
                .empty_state("No accounts", "Connect a mailbox to begin.", "@")
                .build()
                .unwrap();
            let table = table(config, 0);
            let layout = table.layout();
            let Body::Empty(empty) = &layout.body else {
                panic!("expected empty state");
            };
            assert_eq!(empty.title, "No accounts");
            assert!(layout.toolbar.search.is_some());
            assert_eq!(layout.toolbar.filter_toggle, Some(0));
            assert_eq!(layout.header.cells.len(), 3);
            assert!(layout.pagination.is_none());
        }

        #[test]
        fn filter_panel_lists_unfiltered_options() {
            let config = TableConfig::builder().filterable(true).build().unwrap();
            let mut table = table(config, 4);
            table.update(TableEvent::FilterPanelToggled);
            table.update(TableEvent::FilterToggled {
                key: "status".into(),
                value: "paused".into(),
            });
            let panel = table.layout().filter_panel;
            assert_eq!(panel.len(), 1);
            let options: Vec<_> = panel[0]
                .options
                .iter()
                .map(|o| (o.value.as_str(), o.checked))
                .collect();
            assert_eq!(options, vec![("active", false), ("paused", true)]);
        }

        #[test]
        fn cells_render_placeholders() {
            let mut table = DataTable::new(columns(), TableConfig::default()).unwrap();
            table.set_data(vec![Row::new("1").with("name", "solo")]);
            let Body::Rows(rows) = table.layout().body else {
                panic!("expected rows");
            };
            assert_eq!(rows[0].cells[0].2, CellContent::Text("solo".into()));
            assert_eq!(rows[0].cells[1].2, CellContent::Placeholder);
        }
    }
}
