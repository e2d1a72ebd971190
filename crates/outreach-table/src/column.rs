//! Column descriptors and cell rendering.

use std::fmt;
use std::sync::Arc;

use crate::row::Row;
use crate::value::CellValue;

/// Glyph shown for null or missing values.
pub const PLACEHOLDER: &str = "\u{2014}";

/// Horizontal alignment hint for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Left aligned (default).
    #[default]
    Left,
    /// Centered.
    Center,
    /// Right aligned.
    Right,
}

/// Semantic color of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    /// No particular meaning.
    #[default]
    Neutral,
    /// Healthy / completed / valid.
    Success,
    /// Needs attention.
    Warning,
    /// Failed / invalid / destructive.
    Danger,
    /// In progress or informational.
    Info,
}

/// Renderable content of one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent {
    /// Plain text.
    Text(String),
    /// A colored status pill.
    Badge {
        /// Badge text.
        label: String,
        /// Badge color.
        tone: Tone,
    },
    /// Placeholder for missing values.
    Placeholder,
}

impl CellContent {
    /// Convenience constructor for badges.
    #[must_use]
    pub fn badge(label: impl Into<String>, tone: Tone) -> Self {
        Self::Badge {
            label: label.into(),
            tone,
        }
    }

    /// Text to display for this content.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) | Self::Badge { label: text, .. } => text,
            Self::Placeholder => PLACEHOLDER,
        }
    }
}

/// Custom cell renderer: `(value, row, index on page) -> content`.
pub type CellRenderer = Arc<dyn Fn(&CellValue, &Row, usize) -> CellContent + Send + Sync>;

/// Describes how one field of a row is labeled, rendered, sorted and filtered.
#[derive(Clone)]
pub struct Column {
    /// Field name, unique within the column set.
    pub key: String,
    /// Header text.
    pub label: String,
    /// Width hint in logical pixels.
    pub width: Option<f32>,
    /// Alignment hint.
    pub align: Align,
    /// Per-column sortable override; `None` inherits the table flag.
    pub sortable: Option<bool>,
    /// Whether the column contributes a facet to the filter panel.
    pub filterable: bool,
    /// Explicit facet values; derived from the data when absent.
    pub filter_options: Option<Vec<String>>,
    render: Option<CellRenderer>,
}

impl Column {
    /// Create a new column.
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            width: None,
            align: Align::Left,
            sortable: None,
            filterable: false,
            filter_options: None,
            render: None,
        }
    }

    /// Set column width.
    #[must_use]
    pub const fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set text alignment.
    #[must_use]
    pub const fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Override the table-level sortable flag for this column.
    #[must_use]
    pub const fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = Some(sortable);
        self
    }

    /// Add this column to the filter panel.
    #[must_use]
    pub const fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    /// Add this column to the filter panel with a fixed set of values.
    #[must_use]
    pub fn filter_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filterable = true;
        self.filter_options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    /// Use a custom cell renderer.
    #[must_use]
    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(&CellValue, &Row, usize) -> CellContent + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    /// Whether clicking this header toggles sorting.
    #[must_use]
    pub fn is_sortable(&self, table_sortable: bool) -> bool {
        self.sortable.unwrap_or(table_sortable)
    }

    /// Renders the cell of `row` for this column.
    ///
    /// Renderer panics are not caught.
    #[must_use]
    pub fn render_cell(&self, row: &Row, index: usize) -> CellContent {
        let value = row.get(&self.key);
        match &self.render {
            Some(render) => render(value, row, index),
            None if value.is_null() => CellContent::Placeholder,
            None => CellContent::Text(value.to_string()),
        }
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("width", &self.width)
            .field("align", &self.align)
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .field("filter_options", &self.filter_options)
            .field("render", &self.render.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
