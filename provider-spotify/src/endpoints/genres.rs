use core_auth::AccessToken;
use serde_json::Value;
use tracing::instrument;

use crate::client::SpotifyClient;
use crate::error::Result;
use crate::request::ApiRequest;

impl SpotifyClient {
    /// Genres usable as `seed_genres` in recommendations.
    #[instrument(skip(self, token))]
    pub async fn get_available_genre_seeds(&self, token: &AccessToken) -> Result<Value> {
        self.fetch_json(token, ApiRequest::get("recommendations/available-genre-seeds"))
            .await
    }
}
