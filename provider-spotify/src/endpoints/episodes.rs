//! Podcast episodes
//!
//! Saving and removing episodes sends the comma-joined identifiers as a JSON
//! string body rather than as a query parameter.

use core_auth::AccessToken;
use serde_json::Value;
use tracing::instrument;

use crate::batch::EPISODE_IDS;
use crate::client::SpotifyClient;
use crate::error::Result;
use crate::request::{segment, ApiRequest};
use crate::types::StatusMessage;

impl SpotifyClient {
    #[instrument(skip(self, token))]
    pub async fn get_episode(&self, token: &AccessToken, episode_id: &str) -> Result<Value> {
        self.fetch_json(token, ApiRequest::get(format!("episodes/{}", segment(episode_id))))
            .await
    }

    /// Get catalog information for up to 50 episodes.
    #[instrument(skip(self, token, episode_ids), fields(count = episode_ids.len()))]
    pub async fn get_several_episodes<S: AsRef<str>>(
        &self,
        token: &AccessToken,
        episode_ids: &[S],
    ) -> Result<Value> {
        let query = EPISODE_IDS.query(episode_ids)?;
        self.fetch_json(token, ApiRequest::get("episodes").query(query))
            .await
    }

    #[instrument(skip(self, token))]
    pub async fn get_users_saved_episodes(&self, token: &AccessToken) -> Result<Value> {
        self.fetch_json(token, ApiRequest::get("me/episodes")).await
    }

    /// Save up to 50 episodes to the current user's library.
    #[instrument(skip(self, token, episode_ids), fields(count = episode_ids.len()))]
    pub async fn save_episodes_for_current_user<S: AsRef<str>>(
        &self,
        token: &AccessToken,
        episode_ids: &[S],
    ) -> Result<StatusMessage> {
        let body = joined_ids_body(episode_ids)?;
        self.send_command(
            token,
            ApiRequest::put("me/episodes").json(body),
            "The episodes were successfully saved.",
        )
        .await
    }

    /// Remove up to 50 episodes from the current user's library.
    #[instrument(skip(self, token, episode_ids), fields(count = episode_ids.len()))]
    pub async fn remove_users_saved_episodes<S: AsRef<str>>(
        &self,
        token: &AccessToken,
        episode_ids: &[S],
    ) -> Result<StatusMessage> {
        let body = joined_ids_body(episode_ids)?;
        self.send_command(
            token,
            ApiRequest::delete("me/episodes").json(body),
            "The episodes were successfully removed.",
        )
        .await
    }

    #[instrument(skip(self, token, episode_ids), fields(count = episode_ids.len()))]
    pub async fn check_users_saved_episodes<S: AsRef<str>>(
        &self,
        token: &AccessToken,
        episode_ids: &[S],
    ) -> Result<Value> {
        let query = EPISODE_IDS.query(episode_ids)?;
        self.fetch_json(token, ApiRequest::get("me/episodes/contains").query(query))
            .await
    }
}

fn joined_ids_body<S: AsRef<str>>(episode_ids: &[S]) -> Result<Value> {
    EPISODE_IDS.check(episode_ids)?;
    let joined = episode_ids
        .iter()
        .map(|id| id.as_ref())
        .collect::<Vec<_>>()
        .join(",");
    Ok(Value::String(joined))
}
