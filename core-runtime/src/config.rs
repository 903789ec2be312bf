//! # Client Configuration Module
//!
//! Provides configuration for the Spotify client crates.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct a
//! `ClientConfig` that every catalog call and token exchange reads its
//! endpoints from. The builder validates fail-fast so a malformed base URL is
//! reported at startup rather than on the first request.
//!
//! ## Usage
//!
//! ### Public Spotify endpoints
//!
//! ```
//! use core_runtime::config::ClientConfig;
//!
//! let config = ClientConfig::default();
//! assert_eq!(config.api_base_url, "https://api.spotify.com/v1/");
//! ```
//!
//! ### Custom endpoints (proxies, test servers)
//!
//! ```
//! use core_runtime::config::ClientConfig;
//! use std::time::Duration;
//!
//! let config = ClientConfig::builder()
//!     .api_base_url("http://localhost:8080/v1")
//!     .token_url("http://localhost:8080/api/token")
//!     .request_timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//!
//! // The base URL is normalised to end with a slash
//! assert_eq!(config.api_base_url, "http://localhost:8080/v1/");
//! ```
//!
//! ## Error Handling
//!
//! ```
//! use core_runtime::config::ClientConfig;
//!
//! let result = ClientConfig::builder().api_base_url("not a url").build();
//! assert!(result.is_err());
//! ```

use crate::error::{Error, Result};
use std::time::Duration;
use url::Url;

/// Base URL of the Spotify Web API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.spotify.com/v1/";

/// Token endpoint of the Spotify accounts service.
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("spotify-wrapper/", env!("CARGO_PKG_VERSION"));

/// Client configuration shared by every catalog call and token exchange.
///
/// Use [`ClientConfigBuilder`] to construct validated instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Catalog base URL; always ends with `/`
    pub api_base_url: String,

    /// Client-credentials token endpoint
    pub token_url: String,

    /// Per-request timeout forwarded to the transport (`None` = transport default)
    pub request_timeout: Option<Duration>,

    /// User agent for the desktop transport
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            request_timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Validates the configuration and returns an error if invalid.
    ///
    /// This checks:
    /// - Both URLs parse and use `http` or `https`
    /// - The API base URL carries no query string or fragment
    /// - The timeout, when set, is non-zero
    /// - The user agent is not blank
    pub fn validate(&self) -> Result<()> {
        let base = parse_http_url("API base URL", &self.api_base_url)?;
        if base.query().is_some() || base.fragment().is_some() {
            return Err(Error::Config(format!(
                "API base URL must not contain a query string or fragment: {}",
                self.api_base_url
            )));
        }

        parse_http_url("Token URL", &self.token_url)?;

        if self.request_timeout == Some(Duration::ZERO) {
            return Err(Error::Config(
                "Request timeout must be greater than zero. \
                 Omit .request_timeout() to use the transport default."
                    .to_string(),
            ));
        }

        if self.user_agent.trim().is_empty() {
            return Err(Error::Config("User agent cannot be empty".to_string()));
        }

        Ok(())
    }

    /// Joins a catalog path (e.g. `albums/abc`) onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

fn parse_http_url(name: &str, value: &str) -> Result<Url> {
    let url = Url::parse(value)
        .map_err(|e| Error::Config(format!("{} is invalid ({}): {}", name, e, value)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::Config(format!(
            "{} must use http or https, got '{}'",
            name, other
        ))),
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    api_base_url: Option<String>,
    token_url: Option<String>,
    request_timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ClientConfigBuilder {
    /// Sets the catalog base URL (default: the public Spotify Web API).
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    /// Sets the token endpoint (default: the Spotify accounts service).
    pub fn token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = Some(url.into());
        self
    }

    /// Sets a per-request timeout.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Sets the user agent used by the desktop transport.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Builds the final `ClientConfig` instance.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if any value fails [`ClientConfig::validate`].
    pub fn build(self) -> Result<ClientConfig> {
        let mut api_base_url = self
            .api_base_url
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        if !api_base_url.ends_with('/') {
            api_base_url.push('/');
        }

        let config = ClientConfig {
            api_base_url,
            token_url: self
                .token_url
                .unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string()),
            request_timeout: self.request_timeout,
            user_agent: self
                .user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        };

        config.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ClientConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.token_url, DEFAULT_TOKEN_URL);
        assert_eq!(config.request_timeout, None);
    }

    #[test]
    fn test_builder_defaults_match_default() {
        let built = ClientConfig::builder().build().unwrap();
        assert_eq!(built, ClientConfig::default());
    }

    #[test]
    fn test_builder_normalises_trailing_slash() {
        let config = ClientConfig::builder()
            .api_base_url("http://127.0.0.1:3000/v1")
            .build()
            .unwrap();

        assert_eq!(config.api_base_url, "http://127.0.0.1:3000/v1/");
        assert_eq!(
            config.endpoint("albums/abc"),
            "http://127.0.0.1:3000/v1/albums/abc"
        );
        assert_eq!(
            config.endpoint("/markets"),
            "http://127.0.0.1:3000/v1/markets"
        );
    }

    #[test]
    fn test_builder_rejects_invalid_base_url() {
        let result = ClientConfig::builder().api_base_url("not a url").build();

        let err = result.unwrap_err().to_string();
        assert!(err.contains("API base URL is invalid"), "got: {}", err);
    }

    #[test]
    fn test_builder_rejects_non_http_scheme() {
        let result = ClientConfig::builder()
            .token_url("ftp://accounts.example.com/token")
            .build();

        let err = result.unwrap_err().to_string();
        assert!(err.contains("must use http or https"), "got: {}", err);
    }

    #[test]
    fn test_builder_rejects_base_url_with_query() {
        let result = ClientConfig::builder()
            .api_base_url("https://api.spotify.com/v1/?market=US")
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn test_builder_rejects_zero_timeout() {
        let result = ClientConfig::builder()
            .request_timeout(Duration::ZERO)
            .build();

        let err = result.unwrap_err().to_string();
        assert!(err.contains("Request timeout"), "got: {}", err);
    }

    #[test]
    fn test_builder_rejects_blank_user_agent() {
        let result = ClientConfig::builder().user_agent("   ").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_keeps_timeout_and_user_agent() {
        let config = ClientConfig::builder()
            .request_timeout(Duration::from_secs(15))
            .user_agent("my-app/2.0")
            .build()
            .unwrap();

        assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.user_agent, "my-app/2.0");
    }
}
