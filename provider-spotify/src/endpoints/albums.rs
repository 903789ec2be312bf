//! Albums: catalog lookups and the user's saved albums

use core_auth::AccessToken;
use serde_json::Value;
use tracing::instrument;

use crate::batch::ALBUM_IDS;
use crate::client::SpotifyClient;
use crate::error::Result;
use crate::request::{segment, ApiRequest};
use crate::types::StatusMessage;

impl SpotifyClient {
    /// Get catalog information for a single album.
    #[instrument(skip(self, token))]
    pub async fn get_album(&self, token: &AccessToken, album_id: &str) -> Result<Value> {
        self.fetch_json(token, ApiRequest::get(format!("albums/{}", segment(album_id))))
            .await
    }

    /// Get catalog information for up to 20 albums.
    #[instrument(skip(self, token, album_ids), fields(count = album_ids.len()))]
    pub async fn get_several_albums<S: AsRef<str>>(
        &self,
        token: &AccessToken,
        album_ids: &[S],
    ) -> Result<Value> {
        let query = ALBUM_IDS.query(album_ids)?;
        self.fetch_json(token, ApiRequest::get("albums").query(query))
            .await
    }

    /// Get an album's tracks.
    #[instrument(skip(self, token))]
    pub async fn get_album_tracks(&self, token: &AccessToken, album_id: &str) -> Result<Value> {
        self.fetch_json(
            token,
            ApiRequest::get(format!("albums/{}/tracks", segment(album_id))),
        )
        .await
    }

    /// Get the albums saved in the current user's library.
    #[instrument(skip(self, token))]
    pub async fn get_users_saved_albums(&self, token: &AccessToken) -> Result<Value> {
        self.fetch_json(token, ApiRequest::get("me/albums")).await
    }

    /// Save up to 20 albums to the current user's library.
    #[instrument(skip(self, token, album_ids), fields(count = album_ids.len()))]
    pub async fn save_albums_for_current_user<S: AsRef<str>>(
        &self,
        token: &AccessToken,
        album_ids: &[S],
    ) -> Result<StatusMessage> {
        let query = ALBUM_IDS.query(album_ids)?;
        self.send_command(
            token,
            ApiRequest::put("me/albums").query(query),
            "The albums were successfully saved.",
        )
        .await
    }

    /// Remove up to 20 albums from the current user's library.
    #[instrument(skip(self, token, album_ids), fields(count = album_ids.len()))]
    pub async fn remove_users_saved_albums<S: AsRef<str>>(
        &self,
        token: &AccessToken,
        album_ids: &[S],
    ) -> Result<StatusMessage> {
        let query = ALBUM_IDS.query(album_ids)?;
        self.send_command(
            token,
            ApiRequest::delete("me/albums").query(query),
            "The albums were successfully removed.",
        )
        .await
    }

    /// Check which of up to 20 albums are saved; returns an array of booleans.
    #[instrument(skip(self, token, album_ids), fields(count = album_ids.len()))]
    pub async fn check_users_saved_albums<S: AsRef<str>>(
        &self,
        token: &AccessToken,
        album_ids: &[S],
    ) -> Result<Value> {
        let query = ALBUM_IDS.query(album_ids)?;
        self.fetch_json(token, ApiRequest::get("me/albums/contains").query(query))
            .await
    }

    /// Get new album releases featured on the Browse tab.
    #[instrument(skip(self, token))]
    pub async fn get_new_releases(&self, token: &AccessToken) -> Result<Value> {
        self.fetch_json(token, ApiRequest::get("browse/new-releases"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{client, no_call, respond, token};
    use crate::types::StatusMessage;
    use bridge_traits::http::HttpMethod;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_album() {
        let client = client(respond(
            HttpMethod::Get,
            "albums/4aawyAB9vmqN3uQ7FjRGTy",
            200,
            r#"{"id":"4aawyAB9vmqN3uQ7FjRGTy","name":"Global Warming"}"#,
        ));

        let album = client
            .get_album(&token(), "4aawyAB9vmqN3uQ7FjRGTy")
            .await
            .unwrap();

        assert_eq!(album["name"], "Global Warming");
    }

    #[tokio::test]
    async fn test_get_several_albums_joins_ids() {
        let client = client(respond(
            HttpMethod::Get,
            "albums?ids=a,b,c",
            200,
            r#"{"albums":[]}"#,
        ));

        let value = client
            .get_several_albums(&token(), &["a", "b", "c"])
            .await
            .unwrap();

        assert_eq!(value, json!({ "albums": [] }));
    }

    #[tokio::test]
    async fn test_get_several_albums_bounds() {
        let client = client(no_call());

        let err = client
            .get_several_albums::<&str>(&token(), &[])
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "You passed in no album IDs in the array.");

        let ids: Vec<String> = (0..21).map(|i| format!("album{}", i)).collect();
        let err = client.get_several_albums(&token(), &ids).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "You have too many album IDs in your array. Max: 20 Albums."
        );
    }

    #[tokio::test]
    async fn test_get_album_tracks() {
        let client = client(respond(HttpMethod::Get, "albums/x/tracks", 200, r#"{"items":[]}"#));
        assert!(client.get_album_tracks(&token(), "x").await.is_ok());
    }

    #[tokio::test]
    async fn test_save_albums() {
        let client = client(respond(HttpMethod::Put, "me/albums?ids=a,b", 200, ""));

        let result = client
            .save_albums_for_current_user(&token(), &["a", "b"])
            .await
            .unwrap();

        assert_eq!(
            result,
            StatusMessage::new(200, "The albums were successfully saved.")
        );
    }

    #[tokio::test]
    async fn test_remove_albums() {
        let client = client(respond(HttpMethod::Delete, "me/albums?ids=a", 200, ""));

        let result = client
            .remove_users_saved_albums(&token(), &["a"])
            .await
            .unwrap();

        assert_eq!(result.message, "The albums were successfully removed.");
    }

    #[tokio::test]
    async fn test_check_saved_albums() {
        let client = client(respond(
            HttpMethod::Get,
            "me/albums/contains?ids=a,b",
            200,
            "[true,false]",
        ));

        let value = client
            .check_users_saved_albums(&token(), &["a", "b"])
            .await
            .unwrap();

        assert_eq!(value, json!([true, false]));
    }

    #[tokio::test]
    async fn test_get_users_saved_albums() {
        let client = client(respond(HttpMethod::Get, "me/albums", 200, r#"{"total":0}"#));

        let value = client.get_users_saved_albums(&token()).await.unwrap();
        assert_eq!(value["total"], 0);
    }

    #[tokio::test]
    async fn test_get_new_releases() {
        let client = client(respond(
            HttpMethod::Get,
            "browse/new-releases",
            200,
            r#"{"albums":{"items":[]}}"#,
        ));

        assert!(client.get_new_releases(&token()).await.is_ok());
    }
}
