//! Audiobook chapters

use core_auth::AccessToken;
use serde_json::Value;
use tracing::instrument;

use crate::batch::CHAPTER_IDS;
use crate::client::SpotifyClient;
use crate::error::Result;
use crate::request::{segment, ApiRequest};

impl SpotifyClient {
    #[instrument(skip(self, token))]
    pub async fn get_single_chapter(&self, token: &AccessToken, chapter_id: &str) -> Result<Value> {
        self.fetch_json(token, ApiRequest::get(format!("chapters/{}", segment(chapter_id))))
            .await
    }

    /// Get catalog information for up to 50 chapters.
    #[instrument(skip(self, token, chapter_ids), fields(count = chapter_ids.len()))]
    pub async fn get_several_chapters<S: AsRef<str>>(
        &self,
        token: &AccessToken,
        chapter_ids: &[S],
    ) -> Result<Value> {
        let query = CHAPTER_IDS.query(chapter_ids)?;
        self.fetch_json(token, ApiRequest::get("chapters").query(query))
            .await
    }
}
