use core_auth::AccessToken;
use serde_json::Value;
use tracing::instrument;

use crate::client::SpotifyClient;
use crate::error::Result;
use crate::request::ApiRequest;

impl SpotifyClient {
    /// Markets where Spotify is available.
    #[instrument(skip(self, token))]
    pub async fn get_available_markets(&self, token: &AccessToken) -> Result<Value> {
        self.fetch_json(token, ApiRequest::get("markets")).await
    }
}
