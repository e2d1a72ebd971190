//! Error types for table configuration.

use thiserror::Error;

/// Result type alias for table configuration.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised when a table configuration or column set is inconsistent.
///
/// View derivation itself never fails; every problem the presenter can detect
/// is rejected up front when the table is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Page size must be at least one row.
    #[error("Page size must be greater than zero")]
    ZeroPageSize,

    /// A page size option of zero was supplied.
    #[error("Page size options must all be greater than zero")]
    ZeroPageSizeOption,

    /// Two columns share the same key.
    #[error("Duplicate column key: {0}")]
    DuplicateColumn(String),

    /// The default sort names a column that does not exist.
    #[error("Default sort references unknown column: {0}")]
    UnknownSortColumn(String),

    /// Externally driven pagination was given page zero.
    #[error("Page numbers start at 1")]
    ZeroPage,
}
