//! Client-Credentials Token Flow
//!
//! Implements the OAuth 2.0 client-credentials grant (RFC 6749 §4.4) against
//! the accounts service token endpoint.
//!
//! # Overview
//!
//! The flow posts `grant_type=client_credentials` as a form body, with the
//! application credentials sent as HTTP Basic authentication. The returned
//! token grants app-level access to the catalog (no user scopes).
//!
//! The flow makes one request per call. It does not cache, refresh or retry;
//! callers decide when to ask for a new token.
//!
//! # Security
//!
//! - The client secret only ever leaves the process inside the Basic header
//! - Tokens and secrets are never logged
//!
//! # Example
//!
//! ```no_run
//! use core_auth::{ClientCredentials, ClientCredentialsFlow};
//! use std::sync::Arc;
//!
//! # async fn example() -> core_auth::Result<()> {
//! # use bridge_traits::http::HttpClient;
//! # let http_client: Arc<dyn HttpClient> = todo!();
//! let credentials = ClientCredentials::new("your-client-id", "your-client-secret");
//! let flow = ClientCredentialsFlow::new(
//!     credentials,
//!     "https://accounts.spotify.com/api/token",
//!     http_client,
//! );
//!
//! let token = flow.request_token().await?;
//! println!("Token expires in {}s", token.expires_in);
//! # Ok(())
//! # }
//! ```

use crate::error::{AuthError, Result};
use crate::types::{AccessToken, ClientCredentials, ClientToken};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use bridge_traits::http::{HttpClient, HttpMethod, HttpRequest};
use bytes::Bytes;
use core_runtime::ClientConfig;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{instrument, warn};

/// Client-credentials grant against a token endpoint.
pub struct ClientCredentialsFlow {
    credentials: ClientCredentials,
    token_url: String,
    http_client: Arc<dyn HttpClient>,
}

impl ClientCredentialsFlow {
    /// Create a flow posting to `token_url`.
    pub fn new(
        credentials: ClientCredentials,
        token_url: impl Into<String>,
        http_client: Arc<dyn HttpClient>,
    ) -> Self {
        Self {
            credentials,
            token_url: token_url.into(),
            http_client,
        }
    }

    /// Create a flow posting to the token endpoint named in `config`.
    pub fn from_config(
        credentials: ClientCredentials,
        config: &ClientConfig,
        http_client: Arc<dyn HttpClient>,
    ) -> Self {
        Self::new(credentials, config.token_url.clone(), http_client)
    }

    /// The token endpoint this flow posts to.
    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    /// Request an app access token.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The transport fails ([`AuthError::NetworkError`])
    /// - The token endpoint answers non-2xx ([`AuthError::Remote`])
    /// - A 2xx response carries no usable token ([`AuthError::InvalidTokenResponse`])
    #[instrument(skip(self), fields(client_id = %self.credentials.client_id))]
    pub async fn request_token(&self) -> Result<ClientToken> {
        let mut params = vec![("grant_type", "client_credentials")];
        if let Some(ref redirect_uri) = self.credentials.redirect_uri {
            params.push(("redirect_uri", redirect_uri.as_str()));
        }

        let encoded_body = serde_urlencoded::to_string(&params)
            .map_err(|e| AuthError::Other(format!("Failed to encode token request: {}", e)))?;

        tracing::debug!("Requesting client-credentials token");

        let request = HttpRequest::new(HttpMethod::Post, self.token_url.clone())
            .basic_auth(self.basic_credentials())
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(Bytes::from(encoded_body));

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|e| AuthError::NetworkError(e.to_string()))?;

        if !response.is_success() {
            let status = response.status;
            let error_body = response
                .text()
                .unwrap_or_else(|_| "Unable to read error response".to_string());

            warn!(
                status = status,
                error = %error_body,
                "Token endpoint rejected client-credentials grant"
            );

            return Err(AuthError::Remote {
                status,
                body: error_body,
            });
        }

        let token_response: TokenResponse = response
            .json()
            .map_err(|e| AuthError::InvalidTokenResponse(e.to_string()))?;

        let access_token = AccessToken::new(token_response.access_token);
        if access_token.is_empty() {
            return Err(AuthError::InvalidTokenResponse(
                "access_token is empty".to_string(),
            ));
        }

        tracing::info!(
            "Obtained client-credentials token (expires in {}s)",
            token_response.expires_in
        );

        Ok(ClientToken {
            access_token,
            token_type: token_response.token_type,
            expires_in: token_response.expires_in,
        })
    }

    fn basic_credentials(&self) -> String {
        STANDARD.encode(format!(
            "{}:{}",
            self.credentials.client_id, self.credentials.client_secret
        ))
    }
}

/// Token response from the accounts service.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_token_type")]
    token_type: String,
    #[serde(default = "default_expires_in")]
    expires_in: i64,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

fn default_expires_in() -> i64 {
    3600
}
