use serde::{Deserialize, Serialize};
use std::fmt;

/// Bearer credential presented on every catalog request.
///
/// The token is opaque: it is never parsed, stored or refreshed. An empty
/// token is rejected by the catalog client before any request is made.
///
/// # Security
///
/// The `Debug` implementation redacts the value so tokens never reach logs.
///
/// # Examples
///
/// ```
/// use core_auth::AccessToken;
///
/// let token = AccessToken::new("BQDx...");
/// assert_eq!(token.as_str(), "BQDx...");
/// assert_eq!(format!("{:?}", token), "AccessToken([REDACTED])");
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` when the token is empty or whitespace only
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for AccessToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for AccessToken {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

/// Application credentials registered with the accounts service.
#[derive(Clone)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: String,
    /// Sent with the grant when the application registered one
    pub redirect_uri: Option<String>,
}

impl ClientCredentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: None,
        }
    }

    pub fn with_redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(redirect_uri.into());
        self
    }
}

// Custom Debug implementation to avoid logging the secret
impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("redirect_uri", &self.redirect_uri)
            .finish()
    }
}

/// Token issued by the client-credentials grant.
///
/// `expires_in` is reported as received; nothing tracks or acts on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientToken {
    pub access_token: AccessToken,
    pub token_type: String,
    pub expires_in: i64,
}
