//! Core service façade and bootstrap helpers.
//!
//! This crate wires a host-provided [`HttpClient`] and a [`ClientConfig`]
//! into the catalog client and the client-credentials token flow, so both
//! share one transport and one set of endpoints. Desktop apps typically
//! enable the `desktop-shims` feature (which depends on `bridge-desktop`)
//! and call [`bootstrap_desktop`].

pub mod error;

pub use error::{CoreError, Result};

pub use core_auth::{AccessToken, AuthError, ClientCredentials, ClientCredentialsFlow, ClientToken};
pub use core_runtime::{logging, ClientConfig, ClientConfigBuilder};
pub use provider_spotify::{
    FollowType, PlaylistDetails, PlaylistItemsUpdate, RecentlyPlayedParams, RepeatState,
    SearchType, SpotifyClient, SpotifyError, StatusMessage, TopItemType,
};

use bridge_traits::http::HttpClient;
use std::sync::Arc;
use tracing::{debug, info};

/// Primary façade exposed to host applications.
#[derive(Clone)]
pub struct SpotifyService {
    http_client: Arc<dyn HttpClient>,
    config: Arc<ClientConfig>,
    catalog: SpotifyClient,
}

impl SpotifyService {
    /// Create a new service from a transport and a validated configuration.
    pub fn new(http_client: Arc<dyn HttpClient>, config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let catalog = SpotifyClient::with_config(Arc::clone(&http_client), config.clone());
        debug!(api_base_url = %config.api_base_url, "Spotify service created");

        Ok(Self {
            http_client,
            config: Arc::new(config),
            catalog,
        })
    }

    /// Catalog client sharing this service's transport.
    pub fn catalog(&self) -> &SpotifyClient {
        &self.catalog
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Token flow for `credentials` against the configured token endpoint.
    pub fn client_credentials(&self, credentials: ClientCredentials) -> ClientCredentialsFlow {
        ClientCredentialsFlow::from_config(credentials, &self.config, Arc::clone(&self.http_client))
    }

    /// Request an app token and return it ready for catalog calls.
    pub async fn authenticate(&self, credentials: ClientCredentials) -> Result<AccessToken> {
        let token = self.client_credentials(credentials).request_token().await?;
        info!(expires_in = token.expires_in, "Obtained app access token");
        Ok(token.access_token)
    }
}

/// Convenience bootstrapper for desktop hosts using the reqwest transport.
///
/// ```ignore
/// use core_service::{bootstrap_desktop, ClientConfig};
///
/// let service = bootstrap_desktop(ClientConfig::default())?;
/// let markets = service.catalog().get_available_markets(&token).await?;
/// ```
#[cfg(all(feature = "desktop-shims", not(target_arch = "wasm32")))]
pub fn bootstrap_desktop(config: ClientConfig) -> Result<SpotifyService> {
    let http_client =
        bridge_desktop::ReqwestHttpClient::try_with_config(config.request_timeout, &config.user_agent)
            .map_err(|err| CoreError::InitializationFailed(err.to_string()))?;

    SpotifyService::new(Arc::new(http_client), config)
}
