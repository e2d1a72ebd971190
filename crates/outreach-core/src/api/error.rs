//! API error types.

/// Errors that can occur during API calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP error response from the backend.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Message from the error envelope, or the raw body.
        message: String,
    },

    /// Network error during the call.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Body was not the expected JSON shape.
    #[error("Response parse error: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
        /// Raw response body.
        body: Option<String>,
    },

    /// Body parsed but broke a domain rule (missing id, negative total).
    #[error("Invalid response: {0}")]
    Invalid(String),

    /// Invalid base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The call needs a session token and none is set.
    #[error("Not signed in")]
    Unauthenticated,
}

impl ApiError {
    /// Creates a new HTTP error.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// Creates a new parse error with the raw response body.
    pub fn parse_with_body(message: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            body: Some(body.into()),
        }
    }

    /// Returns the HTTP status code if this is an HTTP error.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` when the session is missing or rejected.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthenticated | Self::Http { status: 401, .. })
    }

    /// Returns `true` if this error is potentially retryable.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Http { status, .. } => matches!(status, 429 | 500 | 502 | 503 | 504),
            Self::Network(_) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            ApiError::http(404, "Account not found").to_string(),
            "HTTP 404: Account not found"
        );
        assert_eq!(ApiError::Unauthenticated.to_string(), "Not signed in");
    }

    #[test]
    fn classification() {
        assert!(ApiError::http(401, "expired").is_unauthorized());
        assert!(ApiError::Unauthenticated.is_unauthorized());
        assert!(!ApiError::http(403, "forbidden").is_unauthorized());
        assert!(ApiError::http(503, "busy").is_retryable());
        assert!(!ApiError::Invalid("x".into()).is_retryable());
        assert_eq!(ApiError::http(500, "x").status_code(), Some(500));
    }
}
