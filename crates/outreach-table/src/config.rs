//! Table behavior configuration.

use crate::column::Tone;
use crate::error::{ConfigError, Result};
use crate::pagination::PageControl;
use crate::sort::SortState;

/// Default rows per page.
const DEFAULT_PAGE_SIZE: usize = 10;

/// Default page size choices.
const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

/// A custom per-row action button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowAction {
    /// Identifier reported back in [`TableOutput::RowAction`](crate::TableOutput::RowAction).
    pub id: String,
    /// Button label.
    pub label: String,
    /// Button color.
    pub tone: Tone,
}

impl RowAction {
    /// Creates a neutral row action.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            tone: Tone::Neutral,
        }
    }

    /// Sets the button color.
    #[must_use]
    pub const fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }
}

/// A bulk action shown while rows are selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkAction {
    /// Identifier reported back in [`TableOutput::BulkAction`](crate::TableOutput::BulkAction).
    pub id: String,
    /// Button label.
    pub label: String,
}

impl BulkAction {
    /// Creates a bulk action.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Content of the empty-state block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Headline.
    pub title: String,
    /// Explanation below the headline.
    pub message: String,
    /// Icon glyph.
    pub icon: String,
}

impl Default for EmptyState {
    fn default() -> Self {
        Self {
            title: "No data found".to_string(),
            message: "There are no items to display.".to_string(),
            icon: "\u{1F4ED}".to_string(),
        }
    }
}

/// Behavior flags of a [`DataTable`](crate::DataTable).
///
/// Presence of a callback in a component framework maps to an `*_enabled`
/// flag here: the table only emits the matching output when it is set.
#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::struct_excessive_bools)] // One flag per optional feature
pub struct TableConfig {
    /// Show the free-text search box.
    pub searchable: bool,
    /// Fields matched by free-text search.
    pub search_keys: Vec<String>,
    /// Search box placeholder.
    pub search_placeholder: String,
    /// Show the filter panel for columns marked filterable.
    pub filterable: bool,
    /// Show row checkboxes and the select-all header checkbox.
    pub selectable: bool,
    /// Table-level sortable default.
    pub sortable: bool,
    /// Sort applied on creation.
    pub default_sort: Option<SortState>,
    /// Enable pagination.
    pub paginated: bool,
    /// Rows per page.
    pub page_size: usize,
    /// Choices offered by the page-size selector.
    pub page_size_options: Vec<usize>,
    /// Initial page ownership.
    pub page_control: PageControl,
    /// Show the per-row action column.
    pub show_row_actions: bool,
    /// Emit [`TableOutput::Edit`](crate::TableOutput::Edit).
    pub edit_enabled: bool,
    /// Emit [`TableOutput::Delete`](crate::TableOutput::Delete).
    pub delete_enabled: bool,
    /// Extra per-row actions.
    pub row_actions: Vec<RowAction>,
    /// Emit [`TableOutput::BulkDelete`](crate::TableOutput::BulkDelete).
    pub bulk_delete_enabled: bool,
    /// Extra bulk actions.
    pub bulk_actions: Vec<BulkAction>,
    /// Emit [`TableOutput::RowClicked`](crate::TableOutput::RowClicked).
    pub row_click_enabled: bool,
    /// Empty-state content.
    pub empty: EmptyState,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            searchable: true,
            search_keys: Vec::new(),
            search_placeholder: "Search...".to_string(),
            filterable: false,
            selectable: false,
            sortable: true,
            default_sort: None,
            paginated: true,
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            page_control: PageControl::default(),
            show_row_actions: false,
            edit_enabled: false,
            delete_enabled: false,
            row_actions: Vec::new(),
            bulk_delete_enabled: false,
            bulk_actions: Vec::new(),
            row_click_enabled: false,
            empty: EmptyState::default(),
        }
    }
}

impl TableConfig {
    /// Starts a builder with default settings.
    #[must_use]
    pub fn builder() -> TableConfigBuilder {
        TableConfigBuilder::default()
    }

    /// Whether the action column is rendered.
    #[must_use]
    pub fn has_row_actions(&self) -> bool {
        self.show_row_actions
            && (self.edit_enabled || self.delete_enabled || !self.row_actions.is_empty())
    }

    /// Checks internal consistency.
    ///
    /// # Errors
    ///
    /// Returns an error for zero page sizes or page zero.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if self.page_size_options.contains(&0) {
            return Err(ConfigError::ZeroPageSizeOption);
        }
        if self.page_control.current_page() == 0 {
            return Err(ConfigError::ZeroPage);
        }
        Ok(())
    }
}

/// Builder for [`TableConfig`].
#[derive(Debug, Clone, Default)]
pub struct TableConfigBuilder {
    config: TableConfig,
}

impl TableConfigBuilder {
    /// Enables or disables the search box.
    #[must_use]
    pub const fn searchable(mut self, searchable: bool) -> Self {
        self.config.searchable = searchable;
        self
    }

    /// Fields matched by free-text search.
    #[must_use]
    pub fn search_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.search_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Search box placeholder.
    #[must_use]
    pub fn search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.config.search_placeholder = placeholder.into();
        self
    }

    /// Enables the filter panel.
    #[must_use]
    pub const fn filterable(mut self, filterable: bool) -> Self {
        self.config.filterable = filterable;
        self
    }

    /// Enables row selection.
    #[must_use]
    pub const fn selectable(mut self, selectable: bool) -> Self {
        self.config.selectable = selectable;
        self
    }

    /// Table-level sortable default.
    #[must_use]
    pub const fn sortable(mut self, sortable: bool) -> Self {
        self.config.sortable = sortable;
        self
    }

    /// Initial sort.
    #[must_use]
    pub fn default_sort(mut self, sort: SortState) -> Self {
        self.config.default_sort = Some(sort);
        self
    }

    /// Enables or disables pagination.
    #[must_use]
    pub const fn paginated(mut self, paginated: bool) -> Self {
        self.config.paginated = paginated;
        self
    }

    /// Rows per page.
    #[must_use]
    pub const fn page_size(mut self, page_size: usize) -> Self {
        self.config.page_size = page_size;
        self
    }

    /// Page-size selector choices.
    #[must_use]
    pub fn page_size_options(mut self, options: impl Into<Vec<usize>>) -> Self {
        self.config.page_size_options = options.into();
        self
    }

    /// Hands page ownership to the caller (server-side paging).
    #[must_use]
    pub const fn external_pagination(mut self, current_page: usize, total_items: usize) -> Self {
        self.config.page_control = PageControl::ExternallyDriven {
            current_page,
            total_items,
        };
        self
    }

    /// Shows the per-row action column.
    #[must_use]
    pub const fn show_row_actions(mut self, show: bool) -> Self {
        self.config.show_row_actions = show;
        self
    }

    /// Enables the edit row action.
    #[must_use]
    pub const fn on_edit(mut self) -> Self {
        self.config.edit_enabled = true;
        self
    }

    /// Enables the delete row action.
    #[must_use]
    pub const fn on_delete(mut self) -> Self {
        self.config.delete_enabled = true;
        self
    }

    /// Adds a custom row action.
    #[must_use]
    pub fn row_action(mut self, action: RowAction) -> Self {
        self.config.row_actions.push(action);
        self
    }

    /// Enables bulk delete.
    #[must_use]
    pub const fn on_bulk_delete(mut self) -> Self {
        self.config.bulk_delete_enabled = true;
        self
    }

    /// Adds a bulk action.
    #[must_use]
    pub fn bulk_action(mut self, action: BulkAction) -> Self {
        self.config.bulk_actions.push(action);
        self
    }

    /// Enables whole-row clicks.
    #[must_use]
    pub const fn on_row_click(mut self) -> Self {
        self.config.row_click_enabled = true;
        self
    }

    /// Empty-state content.
    #[must_use]
    pub fn empty_state(
        mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        self.config.empty = EmptyState {
            title: title.into(),
            message: message.into(),
            icon: icon.into(),
        };
        self
    }

    /// Validates and returns the configuration.
    ///
    /// # Errors
    ///
    /// See [`TableConfig::validate`].
    pub fn build(self) -> Result<TableConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
