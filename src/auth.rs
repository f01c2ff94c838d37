//! Service authentication — token acquisition and the session credential.
//!
//! [`Authenticator`] exchanges a client id/secret pair for a bearer token at
//! the service's `/token` endpoint. The result is an immutable
//! [`SessionCredential`] value read by every downstream call; refreshing
//! means asking the authenticator for a new value, never mutating a shared
//! session in place, so concurrent pipeline runs can each hold a consistent
//! snapshot.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

/// Production token endpoint.
pub const TOKEN_URL: &str = "https://pdf-services.adobe.io/token";

/// Failures while acquiring a token.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The token endpoint returned a non-success status (e.g. 401 for bad
    /// client credentials). Contains the status and raw body.
    #[error("token request rejected (status {status}): {body}")]
    Rejected { status: u16, body: String },

    /// The token response body did not decode.
    #[error("failed to decode token response: {0}")]
    MalformedResponse(String),

    /// Network-level failure reaching the token endpoint.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Immutable snapshot of an authenticated session.
///
/// The access token may be empty, meaning "unauthenticated": every network
/// call treats that as a precondition failure and returns
/// [`ServiceError::Unauthenticated`](crate::service::ServiceError::Unauthenticated)
/// without touching the network. The client id doubles as the `X-API-Key`
/// header value.
#[derive(Debug, Clone)]
pub struct SessionCredential {
    access_token: String,
    token_type: String,
    client_id: String,
    expires_in: Option<u64>,
    obtained_at: DateTime<Utc>,
}

impl SessionCredential {
    /// Build a credential from an already-acquired token.
    ///
    /// Lifetime metadata is unknown for tokens obtained out-of-band, so
    /// [`expires_at`](Self::expires_at) reports `None` for these.
    pub fn new(access_token: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: "bearer".to_string(),
            client_id: client_id.into(),
            expires_in: None,
            obtained_at: Utc::now(),
        }
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// The API key sent as `X-API-Key` on every authorized call.
    pub fn api_key(&self) -> &str {
        &self.client_id
    }

    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    /// Whether a token is present at all. Expiry is deliberately not part
    /// of this check: an expired-but-present token is still sent, and the
    /// service's 401 surfaces through the normal error path. Callers that
    /// want to refresh proactively can consult [`is_expired`](Self::is_expired).
    pub fn is_authenticated(&self) -> bool {
        !self.access_token.is_empty()
    }

    /// When the token stops being valid, if the lifetime is known.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_in
            .map(|secs| self.obtained_at + chrono::Duration::seconds(secs as i64))
    }

    /// True only when the lifetime is known and `now` is past it.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        matches!(self.expires_at(), Some(deadline) if now >= deadline)
    }
}

/// Wire shape of the token endpoint's response.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    token_type: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

/// Acquires fresh [`SessionCredential`] values from the token endpoint.
pub struct Authenticator {
    http: Client,
    token_url: String,
}

impl Authenticator {
    pub fn new() -> Self {
        Self::with_token_url(TOKEN_URL.to_string())
    }

    /// Create an authenticator pointing at a custom token endpoint
    /// (useful for testing).
    pub fn with_token_url(token_url: String) -> Self {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");
        Self { http, token_url }
    }

    /// Exchange client credentials for a bearer token.
    pub async fn authenticate(
        &self,
        client_id: &str,
        client_secret: &str,
    ) -> Result<SessionCredential, AuthError> {
        let response = self
            .http
            .post(&self.token_url)
            .form(&[("client_id", client_id), ("client_secret", client_secret)])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let token: TokenResponse =
            serde_json::from_str(&body).map_err(|e| AuthError::MalformedResponse(e.to_string()))?;

        Ok(SessionCredential {
            access_token: token.access_token,
            token_type: token.token_type,
            client_id: client_id.to_string(),
            expires_in: token.expires_in,
            obtained_at: Utc::now(),
        })
    }
}

impl Default for Authenticator {
    fn default() -> Self {
        Self::new()
    }
}
