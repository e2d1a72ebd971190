//! Session token storage using the system keyring.
//!
//! The bearer token survives restarts in the platform's native credential
//! store:
//! - Linux: Secret Service (GNOME Keyring, `KWallet`)
//! - macOS: Keychain
//! - Windows: Credential Manager

use keyring::Entry;
use tracing::{debug, info, warn};

use crate::api::{ApiClient, Credentials, Session};
use crate::error::Result;
use crate::validation::validate_login;

/// Service name used for keyring entries.
const SERVICE_NAME: &str = "outreach";

/// Keyring user under which the session token is stored.
const TOKEN_ENTRY: &str = "session_token";

/// Error type for session storage.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Failed to access keyring.
    #[error("Keyring error: {0}")]
    Keyring(#[from] keyring::Error),
}

/// Result type for session storage.
pub type SessionResult<T> = std::result::Result<T, SessionError>;

fn entry() -> SessionResult<Entry> {
    Ok(Entry::new(SERVICE_NAME, TOKEN_ENTRY)?)
}

/// Stores the session token.
///
/// # Errors
///
/// Returns an error if the keyring operation fails.
pub fn store_token(token: &str) -> SessionResult<()> {
    entry()?.set_password(token)?;
    debug!("Stored session token");
    Ok(())
}

/// Loads the stored session token, if any.
///
/// # Errors
///
/// Returns an error if the keyring operation fails.
pub fn load_token() -> SessionResult<Option<String>> {
    match entry()?.get_password() {
        Ok(token) => Ok(Some(token)),
        Err(keyring::Error::NoEntry) => {
            debug!("No stored session token");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Removes the stored session token.
///
/// A missing entry is not an error.
///
/// # Errors
///
/// Returns an error if the keyring operation fails.
pub fn clear_token() -> SessionResult<()> {
    match entry()?.delete_credential() {
        Ok(()) => debug!("Cleared session token"),
        Err(keyring::Error::NoEntry) => debug!("No session token to clear"),
        Err(e) => {
            warn!("Failed to clear session token: {e}");
            return Err(e.into());
        }
    }
    Ok(())
}

/// Validates the sign-in form, signs in and persists the token.
///
/// # Errors
///
/// Returns [`Error::Validation`](crate::Error::Validation) for bad input,
/// [`Error::Api`](crate::Error::Api) when the backend rejects the
/// credentials, and [`Error::Session`](crate::Error::Session) when the
/// token cannot be stored.
pub async fn sign_in(client: &ApiClient, email: &str, password: &str) -> Result<Session> {
    validate_login(email, password)?;
    let credentials = Credentials {
        email: email.trim().to_string(),
        password: password.to_string(),
    };
    let session = client.login(&credentials).await?;
    store_token(&session.token)?;
    info!("Signed in as {}", session.user.email);
    Ok(session)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::Error;

    #[tokio::test]
    async fn sign_in_rejects_invalid_form_before_network() {
        // Port 9 (discard) is never contacted: validation fails first.
        let client = ApiClient::new("http://127.0.0.1:9").unwrap();
        let err = sign_in(&client, "not-an-email", "").await.unwrap_err();
        let Error::Validation(errors) = err else {
            panic!("expected validation error, got {err}");
        };
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "email");
    }

    #[test]
    fn keyring_error_display() {
        let err = SessionError::from(keyring::Error::NoEntry);
        assert!(err.to_string().starts_with("Keyring error"));
    }
}
