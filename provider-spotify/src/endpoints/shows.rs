//! Podcast shows

use core_auth::AccessToken;
use serde_json::Value;
use tracing::instrument;

use crate::batch::SHOW_IDS;
use crate::client::SpotifyClient;
use crate::error::Result;
use crate::request::{segment, ApiRequest};
use crate::types::StatusMessage;

impl SpotifyClient {
    #[instrument(skip(self, token))]
    pub async fn get_show(&self, token: &AccessToken, show_id: &str) -> Result<Value> {
        self.fetch_json(token, ApiRequest::get(format!("shows/{}", segment(show_id))))
            .await
    }

    /// Get catalog information for up to 50 shows.
    #[instrument(skip(self, token, show_ids), fields(count = show_ids.len()))]
    pub async fn get_several_shows<S: AsRef<str>>(
        &self,
        token: &AccessToken,
        show_ids: &[S],
    ) -> Result<Value> {
        let query = SHOW_IDS.query(show_ids)?;
        self.fetch_json(token, ApiRequest::get("shows").query(query))
            .await
    }

    #[instrument(skip(self, token))]
    pub async fn get_show_episodes(&self, token: &AccessToken, show_id: &str) -> Result<Value> {
        self.fetch_json(
            token,
            ApiRequest::get(format!("shows/{}/episodes", segment(show_id))),
        )
        .await
    }

    #[instrument(skip(self, token))]
    pub async fn get_users_saved_shows(&self, token: &AccessToken) -> Result<Value> {
        self.fetch_json(token, ApiRequest::get("me/shows")).await
    }

    #[instrument(skip(self, token, show_ids), fields(count = show_ids.len()))]
    pub async fn save_shows_for_current_user<S: AsRef<str>>(
        &self,
        token: &AccessToken,
        show_ids: &[S],
    ) -> Result<StatusMessage> {
        let query = SHOW_IDS.query(show_ids)?;
        self.send_command(
            token,
            ApiRequest::put("me/shows").query(query),
            "The shows were successfully saved.",
        )
        .await
    }

    #[instrument(skip(self, token, show_ids), fields(count = show_ids.len()))]
    pub async fn remove_users_saved_shows<S: AsRef<str>>(
        &self,
        token: &AccessToken,
        show_ids: &[S],
    ) -> Result<StatusMessage> {
        let query = SHOW_IDS.query(show_ids)?;
        self.send_command(
            token,
            ApiRequest::delete("me/shows").query(query),
            "The shows were successfully removed.",
        )
        .await
    }

    #[instrument(skip(self, token, show_ids), fields(count = show_ids.len()))]
    pub async fn check_users_saved_shows<S: AsRef<str>>(
        &self,
        token: &AccessToken,
        show_ids: &[S],
    ) -> Result<Value> {
        let query = SHOW_IDS.query(show_ids)?;
        self.fetch_json(token, ApiRequest::get("me/shows/contains").query(query))
            .await
    }
}
