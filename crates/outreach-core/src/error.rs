//! Error types for the core library.

use thiserror::Error;

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Backend request failed.
    #[error("API error: {0}")]
    Api(#[from] crate::api::ApiError),

    /// Session storage failed.
    #[error("Session error: {0}")]
    Session(#[from] crate::session::SessionError),

    /// Form input was rejected.
    #[error("Validation failed: {}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join(", "))]
    Validation(Vec<crate::validation::ValidationError>),
}

impl From<Vec<crate::validation::ValidationError>> for Error {
    fn from(errors: Vec<crate::validation::ValidationError>) -> Self {
        Self::Validation(errors)
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
