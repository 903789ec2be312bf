//! Spotify Web API client
//!
//! Resource operations are defined in [`crate::endpoints`] as `impl`
//! blocks on [`SpotifyClient`]; this module holds the shared plumbing.

use bridge_traits::http::{HttpClient, HttpResponse};
use core_auth::AccessToken;
use core_runtime::logging::redact_if_sensitive;
use core_runtime::ClientConfig;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::{Result, SpotifyError};
use crate::request::ApiRequest;
use crate::types::StatusMessage;

/// Statuses a write operation reports as success.
const WRITE_SUCCESS_STATUSES: [u16; 4] = [200, 201, 202, 204];

/// Spotify Web API client
///
/// Holds only the transport and configuration, so it is cheap to clone and
/// safe to share across tasks. Credentials are passed to every call and
/// never retained.
///
/// # Example
///
/// ```ignore
/// use provider_spotify::SpotifyClient;
///
/// let client = SpotifyClient::new(http_client);
/// let markets = client.get_available_markets(&token).await?;
/// ```
#[derive(Clone)]
pub struct SpotifyClient {
    /// HTTP client for API requests
    http_client: Arc<dyn HttpClient>,

    /// Base URL and timeout
    config: Arc<ClientConfig>,
}

impl SpotifyClient {
    /// Create a client against the public Spotify endpoints
    pub fn new(http_client: Arc<dyn HttpClient>) -> Self {
        Self::with_config(http_client, ClientConfig::default())
    }

    /// Create a client with an explicit configuration
    ///
    /// # Arguments
    ///
    /// * `http_client` - HTTP client implementation
    /// * `config` - Base URL, token URL and request timeout
    pub fn with_config(http_client: Arc<dyn HttpClient>, config: ClientConfig) -> Self {
        Self {
            http_client,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send one request and return the raw response, whatever its status
    async fn execute(&self, token: &AccessToken, request: ApiRequest) -> Result<HttpResponse> {
        let http_request = request.into_http_request(&self.config, token)?;
        debug!(
            method = %http_request.method,
            url = %http_request.url,
            headers = ?loggable_headers(&http_request.headers),
            "Sending API request"
        );

        let response = self.http_client.execute(http_request).await?;
        debug!(status = response.status, "API request completed");

        Ok(response)
    }

    /// Execute a read operation and return the decoded body verbatim.
    ///
    /// An empty 2xx body (e.g. `204 No Content` from the player) yields
    /// `Value::Null`.
    pub(crate) async fn fetch_json(&self, token: &AccessToken, request: ApiRequest) -> Result<Value> {
        let response = self.execute(token, request).await?;

        if !response.is_success() {
            return Err(remote_error(&response));
        }

        if response.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }

        response
            .json()
            .map_err(|e| SpotifyError::ParseError(e.to_string()))
    }

    /// Execute a write operation, mapping an accepted status to `message`.
    pub(crate) async fn send_command(
        &self,
        token: &AccessToken,
        request: ApiRequest,
        message: impl Into<String>,
    ) -> Result<StatusMessage> {
        let response = self.execute(token, request).await?;

        if WRITE_SUCCESS_STATUSES.contains(&response.status) {
            return Ok(StatusMessage::new(response.status, message));
        }

        Err(remote_error(&response))
    }
}

/// Request headers with credentials masked, sorted for stable output.
fn loggable_headers(headers: &HashMap<String, String>) -> BTreeMap<&str, String> {
    headers
        .iter()
        .map(|(name, value)| (name.as_str(), redact_if_sensitive(name, value)))
        .collect()
}

fn remote_error(response: &HttpResponse) -> SpotifyError {
    let body = String::from_utf8_lossy(&response.body).into_owned();
    warn!(status = response.status, body = %body, "Spotify API returned an error");

    SpotifyError::Remote {
        status: response.status,
        body,
    }
}
