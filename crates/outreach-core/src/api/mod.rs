//! REST client for the Outreach backend.
//!
//! Every response is decoded into an explicit type and passed through
//! [`Validate`] before it is returned, so callers get either a value that
//! satisfies the domain rules or an [`ApiError`].

mod error;
mod types;

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

pub use error::ApiError;
pub use types::{BatchQuery, Credentials, Page, Session, Validate};

use crate::account::{AccountId, EmailAccount, EmailAccountDraft};
use crate::user::{OrgUser, UserId, UserInvite};
use crate::verification::{BatchId, VerificationBatch};
use types::{Envelope, ErrorEnvelope, PageEnvelope};

/// Result type for API calls.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Cloneable handle to the backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    http_client: Client,
}

impl ApiClient {
    /// Creates a client for `base_url` with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not http(s) or the HTTP client cannot
    /// be built.
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Creates a client with a custom request timeout.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::new`].
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(ApiError::InvalidUrl(base_url));
        }
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url,
            token: None,
            http_client,
        })
    }

    /// Attaches a session token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Drops the session token.
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether a session token is attached.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorized(&self, request: RequestBuilder) -> ApiResult<RequestBuilder> {
        let token = self.token.as_deref().ok_or(ApiError::Unauthenticated)?;
        Ok(request.bearer_auth(token))
    }

    // ---------------------------------------------------------------------
    // Auth
    // ---------------------------------------------------------------------

    /// Exchanges credentials for a session.
    ///
    /// # Errors
    ///
    /// Returns an error on rejected credentials or an invalid response.
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<Session> {
        let url = self.endpoint("auth/login");
        debug!("POST {url}");
        let request = self.http_client.post(&url).json(credentials);
        send(request).await
    }

    // ---------------------------------------------------------------------
    // Email accounts
    // ---------------------------------------------------------------------

    /// Lists connected sending accounts.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is invalid.
    pub async fn list_accounts(&self) -> ApiResult<Vec<EmailAccount>> {
        let url = self.endpoint("email-accounts");
        debug!("GET {url}");
        let request = self.authorized(self.http_client.get(&url))?;
        let envelope: Envelope<Vec<EmailAccount>> = send(request).await?;
        Ok(envelope.data)
    }

    /// Connects a sending account.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the draft or the response is
    /// invalid.
    pub async fn create_account(&self, draft: &EmailAccountDraft) -> ApiResult<EmailAccount> {
        let url = self.endpoint("email-accounts");
        debug!("POST {url} provider={:?}", draft.provider);
        let request = self.authorized(self.http_client.post(&url).json(draft))?;
        let envelope: Envelope<EmailAccount> = send(request).await?;
        Ok(envelope.data)
    }

    /// Disconnects a sending account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_account(&self, id: &AccountId) -> ApiResult<()> {
        self.delete(&format!("email-accounts/{id}")).await
    }

    // ---------------------------------------------------------------------
    // Users
    // ---------------------------------------------------------------------

    /// Lists organization users.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is invalid.
    pub async fn list_users(&self) -> ApiResult<Vec<OrgUser>> {
        let url = self.endpoint("users");
        debug!("GET {url}");
        let request = self.authorized(self.http_client.get(&url))?;
        let envelope: Envelope<Vec<OrgUser>> = send(request).await?;
        Ok(envelope.data)
    }

    /// Invites a user to the organization.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the invite or the response is
    /// invalid.
    pub async fn invite_user(&self, invite: &UserInvite) -> ApiResult<OrgUser> {
        let url = self.endpoint("users");
        debug!("POST {url} role={:?}", invite.role);
        let request = self.authorized(self.http_client.post(&url).json(invite))?;
        let envelope: Envelope<OrgUser> = send(request).await?;
        Ok(envelope.data)
    }

    /// Removes a user from the organization.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_user(&self, id: &UserId) -> ApiResult<()> {
        self.delete(&format!("users/{id}")).await
    }

    // ---------------------------------------------------------------------
    // Verification
    // ---------------------------------------------------------------------

    /// Fetches one page of verification batches.
    ///
    /// The search query and status filter are applied server-side.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is invalid.
    pub async fn list_verification_batches(
        &self,
        query: &BatchQuery,
    ) -> ApiResult<Page<VerificationBatch>> {
        let url = self.endpoint("verifications");
        debug!(
            "GET {url} page={} limit={} statuses={}",
            query.page,
            query.page_size,
            query.statuses.len()
        );
        let request = self.authorized(self.http_client.get(&url).query(&query.params()))?;
        let envelope: PageEnvelope<VerificationBatch> = send(request).await?;
        Ok(Page::from_envelope(envelope))
    }

    /// Deletes a verification batch and its results.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_verification_batch(&self, id: &BatchId) -> ApiResult<()> {
        self.delete(&format!("verifications/{id}")).await
    }

    async fn delete(&self, path: &str) -> ApiResult<()> {
        let url = self.endpoint(path);
        debug!("DELETE {url}");
        let request = self.authorized(self.http_client.delete(&url))?;
        let response = request.send().await?;
        let status = response.status().as_u16();
        if response.status().is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(http_error(status, &body))
    }
}

/// Sends a request and decodes a validated body.
async fn send<T>(request: RequestBuilder) -> ApiResult<T>
where
    T: DeserializeOwned + Validate,
{
    let response = request.send().await?;
    let status = response.status().as_u16();
    let body = response.text().await?;
    decode(status, &body)
}

/// Decodes a response body for `status`.
fn decode<T>(status: u16, body: &str) -> ApiResult<T>
where
    T: DeserializeOwned + Validate,
{
    if !(200..300).contains(&status) {
        return Err(http_error(status, body));
    }
    let value: T = serde_json::from_str(body)
        .map_err(|e| ApiError::parse_with_body(e.to_string(), body))?;
    value.validate().map_err(|reason| {
        warn!("Rejected response: {reason}");
        ApiError::Invalid(reason)
    })?;
    Ok(value)
}

/// Builds an HTTP error, preferring the backend's `{ "message" }` envelope.
fn http_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.message)
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                format!("request failed with status {status}")
            } else {
                body.trim().to_string()
            }
        });
    warn!("API request failed: HTTP {status}: {message}");
    ApiError::http(status, message)
}
