//! Following `next` links of paged responses

use core_auth::AccessToken;
use serde_json::Value;
use tracing::{instrument, warn};
use url::Url;

use crate::client::SpotifyClient;
use crate::error::{Result, SpotifyError};
use crate::request::ApiRequest;

impl SpotifyClient {
    /// Fetch the page behind a `next` (or `previous`) link.
    ///
    /// The link is used exactly as returned by the API. It must be an
    /// absolute http or https URL on the same origin (scheme, host and
    /// port) as the configured API base, so the bearer token never leaves
    /// that origin.
    #[instrument(skip(self, token))]
    pub async fn get_next(&self, token: &AccessToken, next_url: &str) -> Result<Value> {
        let url = Url::parse(next_url).map_err(|e| {
            SpotifyError::validation(format!("Invalid next URL '{}': {}", next_url, e))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(SpotifyError::validation(format!(
                "Invalid next URL '{}': scheme must be http or https",
                next_url
            )));
        }

        let base = Url::parse(&self.config().api_base_url).map_err(|e| {
            SpotifyError::validation(format!("Invalid API base URL: {}", e))
        })?;

        if url.origin() != base.origin() {
            warn!(next_url, "Refusing to follow a link to a foreign origin");
            return Err(SpotifyError::validation(format!(
                "Invalid next URL '{}': origin must match {}",
                next_url,
                base.origin().ascii_serialization()
            )));
        }

        self.fetch_json(token, ApiRequest::get_absolute(next_url))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{client, no_call, respond_url, token, MockTransport};
    use crate::SpotifyClient;
    use bridge_traits::http::HttpMethod;
    use core_runtime::ClientConfig;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_get_next_uses_link_verbatim() {
        let next = "https://api.spotify.com/v1/me/albums?offset=20&limit=20";
        let client = client(respond_url(
            HttpMethod::Get,
            next,
            200,
            r#"{"offset":20,"next":null}"#,
        ));

        let page = client.get_next(&token(), next).await.unwrap();

        assert_eq!(page["offset"], 20);
        assert!(page["next"].is_null());
    }

    #[tokio::test]
    async fn test_get_next_rejects_relative_link() {
        let err = client(no_call())
            .get_next(&token(), "me/albums?offset=20")
            .await
            .unwrap_err();

        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_get_next_rejects_other_schemes() {
        let err = client(no_call())
            .get_next(&token(), "ftp://api.spotify.com/v1/me/albums")
            .await
            .unwrap_err();

        assert!(err.to_string().contains("http or https"));
    }

    #[tokio::test]
    async fn test_get_next_refuses_foreign_host() {
        for link in [
            "https://attacker.example/steal",
            "http://api.spotify.com/v1/me/albums?offset=20",
            "https://api.spotify.com:8443/v1/me/albums?offset=20",
            "https://api.spotify.com.attacker.example/v1/me/albums",
        ] {
            let err = client(no_call())
                .get_next(&token(), link)
                .await
                .unwrap_err();

            assert!(err.is_validation(), "{} was not refused", link);
            assert!(err.to_string().contains("origin must match"));
        }
    }

    #[tokio::test]
    async fn test_get_next_follows_configured_origin() {
        let config = ClientConfig::builder()
            .api_base_url("http://127.0.0.1:8080/v1/")
            .build()
            .unwrap();
        let next = "http://127.0.0.1:8080/v1/browse/new-releases?offset=20";

        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .times(1)
            .withf(move |request| request.url == next)
            .returning(|_| Ok(bridge_traits::http::HttpResponse::new(200, r#"{"albums":{}}"#)));
        let client = SpotifyClient::with_config(Arc::new(transport), config);

        let page = client.get_next(&token(), next).await.unwrap();
        assert!(page["albums"].is_object());

        let err = client
            .get_next(&token(), "https://api.spotify.com/v1/browse/new-releases")
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }
}
