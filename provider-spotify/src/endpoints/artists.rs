//! Artists

use core_auth::AccessToken;
use serde_json::Value;
use tracing::instrument;

use crate::batch::ARTIST_IDS;
use crate::client::SpotifyClient;
use crate::error::Result;
use crate::query::QueryString;
use crate::request::{segment, ApiRequest};

impl SpotifyClient {
    #[instrument(skip(self, token))]
    pub async fn get_artist(&self, token: &AccessToken, artist_id: &str) -> Result<Value> {
        self.fetch_json(token, ApiRequest::get(format!("artists/{}", segment(artist_id))))
            .await
    }

    /// Get catalog information for up to 50 artists.
    #[instrument(skip(self, token, artist_ids), fields(count = artist_ids.len()))]
    pub async fn get_several_artists<S: AsRef<str>>(
        &self,
        token: &AccessToken,
        artist_ids: &[S],
    ) -> Result<Value> {
        let query = ARTIST_IDS.query(artist_ids)?;
        self.fetch_json(token, ApiRequest::get("artists").query(query))
            .await
    }

    #[instrument(skip(self, token))]
    pub async fn get_artists_albums(&self, token: &AccessToken, artist_id: &str) -> Result<Value> {
        self.fetch_json(
            token,
            ApiRequest::get(format!("artists/{}/albums", segment(artist_id))),
        )
        .await
    }

    /// Get an artist's top tracks in `market` (ISO 3166-1 alpha-2 country code).
    #[instrument(skip(self, token))]
    pub async fn get_artist_top_tracks(
        &self,
        token: &AccessToken,
        artist_id: &str,
        market: &str,
    ) -> Result<Value> {
        self.fetch_json(
            token,
            ApiRequest::get(format!("artists/{}/top-tracks", segment(artist_id)))
                .query(QueryString::new().push("market", market)),
        )
        .await
    }

    #[instrument(skip(self, token))]
    pub async fn get_artists_related_artists(
        &self,
        token: &AccessToken,
        artist_id: &str,
    ) -> Result<Value> {
        self.fetch_json(
            token,
            ApiRequest::get(format!("artists/{}/related-artists", segment(artist_id))),
        )
        .await
    }
}
