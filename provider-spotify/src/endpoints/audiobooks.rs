//! Audiobooks: catalog lookups, chapters and the user's saved audiobooks

use core_auth::AccessToken;
use serde_json::Value;
use tracing::instrument;

use crate::batch::AUDIOBOOK_IDS;
use crate::client::SpotifyClient;
use crate::error::Result;
use crate::request::{segment, ApiRequest};
use crate::types::StatusMessage;

impl SpotifyClient {
    #[instrument(skip(self, token))]
    pub async fn get_audiobook(&self, token: &AccessToken, audiobook_id: &str) -> Result<Value> {
        self.fetch_json(
            token,
            ApiRequest::get(format!("audiobooks/{}", segment(audiobook_id))),
        )
        .await
    }

    /// Get catalog information for up to 50 audiobooks.
    #[instrument(skip(self, token, audiobook_ids), fields(count = audiobook_ids.len()))]
    pub async fn get_several_audiobooks<S: AsRef<str>>(
        &self,
        token: &AccessToken,
        audiobook_ids: &[S],
    ) -> Result<Value> {
        let query = AUDIOBOOK_IDS.query(audiobook_ids)?;
        self.fetch_json(token, ApiRequest::get("audiobooks").query(query))
            .await
    }

    #[instrument(skip(self, token))]
    pub async fn get_audiobook_chapters(
        &self,
        token: &AccessToken,
        audiobook_id: &str,
    ) -> Result<Value> {
        self.fetch_json(
            token,
            ApiRequest::get(format!("audiobooks/{}/chapters", segment(audiobook_id))),
        )
        .await
    }

    #[instrument(skip(self, token))]
    pub async fn get_users_saved_audiobooks(&self, token: &AccessToken) -> Result<Value> {
        self.fetch_json(token, ApiRequest::get("me/audiobooks")).await
    }

    #[instrument(skip(self, token, audiobook_ids), fields(count = audiobook_ids.len()))]
    pub async fn save_audiobooks_for_current_user<S: AsRef<str>>(
        &self,
        token: &AccessToken,
        audiobook_ids: &[S],
    ) -> Result<StatusMessage> {
        let query = AUDIOBOOK_IDS.query(audiobook_ids)?;
        self.send_command(
            token,
            ApiRequest::put("me/audiobooks").query(query),
            "The audiobooks were successfully saved.",
        )
        .await
    }

    #[instrument(skip(self, token, audiobook_ids), fields(count = audiobook_ids.len()))]
    pub async fn remove_users_saved_audiobooks<S: AsRef<str>>(
        &self,
        token: &AccessToken,
        audiobook_ids: &[S],
    ) -> Result<StatusMessage> {
        let query = AUDIOBOOK_IDS.query(audiobook_ids)?;
        self.send_command(
            token,
            ApiRequest::delete("me/audiobooks").query(query),
            "The audiobooks were successfully removed.",
        )
        .await
    }

    #[instrument(skip(self, token, audiobook_ids), fields(count = audiobook_ids.len()))]
    pub async fn check_users_saved_audiobooks<S: AsRef<str>>(
        &self,
        token: &AccessToken,
        audiobook_ids: &[S],
    ) -> Result<Value> {
        let query = AUDIOBOOK_IDS.query(audiobook_ids)?;
        self.fetch_json(token, ApiRequest::get("me/audiobooks/contains").query(query))
            .await
    }
}
