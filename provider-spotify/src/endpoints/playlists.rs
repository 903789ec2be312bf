//! Playlists: details, items, cover images and browse listings

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use core_auth::AccessToken;
use serde_json::{json, Value};
use tracing::instrument;

use crate::batch::PLAYLIST_ITEM_URIS;
use crate::client::SpotifyClient;
use crate::error::{Result, SpotifyError};
use crate::request::{segment, ApiRequest};
use crate::types::{PlaylistDetails, PlaylistItemsUpdate, StatusMessage};

impl SpotifyClient {
    #[instrument(skip(self, token))]
    pub async fn get_playlist(&self, token: &AccessToken, playlist_id: &str) -> Result<Value> {
        self.fetch_json(token, ApiRequest::get(playlist_path(playlist_id, "")))
            .await
    }

    /// Change name, visibility, collaboration or description of a playlist.
    #[instrument(skip(self, token, details))]
    pub async fn change_playlist_details(
        &self,
        token: &AccessToken,
        playlist_id: &str,
        details: &PlaylistDetails,
    ) -> Result<StatusMessage> {
        let body = to_body(details)?;
        self.send_command(
            token,
            ApiRequest::put(playlist_path(playlist_id, "")).json(body),
            "Playlist details updated successfully.",
        )
        .await
    }

    #[instrument(skip(self, token))]
    pub async fn get_playlist_items(&self, token: &AccessToken, playlist_id: &str) -> Result<Value> {
        self.fetch_json(token, ApiRequest::get(playlist_path(playlist_id, "/tracks")))
            .await
    }

    /// Reorder or replace the items of a playlist.
    #[instrument(skip(self, token, update))]
    pub async fn update_playlist_items(
        &self,
        token: &AccessToken,
        playlist_id: &str,
        update: &PlaylistItemsUpdate,
    ) -> Result<StatusMessage> {
        let body = to_body(update)?;
        self.send_command(
            token,
            ApiRequest::put(playlist_path(playlist_id, "/tracks")).json(body),
            "Playlist items updated successfully.",
        )
        .await
    }

    /// Add 1 to 100 item URIs, appended or inserted at `position`.
    #[instrument(skip(self, token, uris), fields(count = uris.len()))]
    pub async fn add_items_to_playlist<S: AsRef<str>>(
        &self,
        token: &AccessToken,
        playlist_id: &str,
        uris: &[S],
        position: Option<u32>,
    ) -> Result<StatusMessage> {
        PLAYLIST_ITEM_URIS.check(uris)?;

        let mut body = json!({ "uris": uri_list(uris) });
        if let Some(position) = position {
            body["position"] = json!(position);
        }

        self.send_command(
            token,
            ApiRequest::post(playlist_path(playlist_id, "/tracks")).json(body),
            "Items added to the playlist successfully.",
        )
        .await
    }

    /// Remove every occurrence of the given item URIs.
    ///
    /// `snapshot_id` pins the removal to a playlist version.
    #[instrument(skip(self, token, uris), fields(count = uris.len()))]
    pub async fn remove_playlist_items<S: AsRef<str>>(
        &self,
        token: &AccessToken,
        playlist_id: &str,
        uris: &[S],
        snapshot_id: Option<&str>,
    ) -> Result<StatusMessage> {
        PLAYLIST_ITEM_URIS.check(uris)?;

        let tracks: Vec<Value> = uris
            .iter()
            .map(|uri| json!({ "uri": uri.as_ref() }))
            .collect();
        let mut body = json!({ "tracks": tracks });
        if let Some(snapshot_id) = snapshot_id {
            body["snapshot_id"] = json!(snapshot_id);
        }

        self.send_command(
            token,
            ApiRequest::delete(playlist_path(playlist_id, "/tracks")).json(body),
            "Items removed from the playlist successfully.",
        )
        .await
    }

    #[instrument(skip(self, token))]
    pub async fn get_current_user_playlists(&self, token: &AccessToken) -> Result<Value> {
        self.fetch_json(token, ApiRequest::get("me/playlists")).await
    }

    #[instrument(skip(self, token))]
    pub async fn get_user_playlists(&self, token: &AccessToken, user_id: &str) -> Result<Value> {
        self.fetch_json(
            token,
            ApiRequest::get(format!("users/{}/playlists", segment(user_id))),
        )
        .await
    }

    /// Create a playlist owned by `user_id`. `details.name` is required.
    #[instrument(skip(self, token, details))]
    pub async fn create_playlist(
        &self,
        token: &AccessToken,
        user_id: &str,
        details: &PlaylistDetails,
    ) -> Result<StatusMessage> {
        let has_name = details
            .name
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty());
        if !has_name {
            return Err(SpotifyError::validation("A playlist name is required."));
        }

        let body = to_body(details)?;
        self.send_command(
            token,
            ApiRequest::post(format!("users/{}/playlists", segment(user_id))).json(body),
            "Playlist created successfully.",
        )
        .await
    }

    #[instrument(skip(self, token))]
    pub async fn get_featured_playlists(&self, token: &AccessToken) -> Result<Value> {
        self.fetch_json(token, ApiRequest::get("browse/featured-playlists"))
            .await
    }

    #[instrument(skip(self, token))]
    pub async fn get_category_playlists(
        &self,
        token: &AccessToken,
        category_id: &str,
    ) -> Result<Value> {
        self.fetch_json(
            token,
            ApiRequest::get(format!("browse/categories/{}/playlists", segment(category_id))),
        )
        .await
    }

    #[instrument(skip(self, token))]
    pub async fn get_playlist_cover_image(
        &self,
        token: &AccessToken,
        playlist_id: &str,
    ) -> Result<Value> {
        self.fetch_json(token, ApiRequest::get(playlist_path(playlist_id, "/images")))
            .await
    }

    /// Upload a JPEG cover image. The bytes are sent base64-encoded.
    #[instrument(skip(self, token, jpeg), fields(bytes = jpeg.len()))]
    pub async fn add_custom_playlist_cover_image(
        &self,
        token: &AccessToken,
        playlist_id: &str,
        jpeg: &[u8],
    ) -> Result<StatusMessage> {
        if jpeg.is_empty() {
            return Err(SpotifyError::validation("No image data provided."));
        }

        let encoded = STANDARD.encode(jpeg);
        self.send_command(
            token,
            ApiRequest::put(playlist_path(playlist_id, "/images")).raw("image/jpeg", encoded),
            "Custom playlist cover image added successfully.",
        )
        .await
    }
}

fn playlist_path(playlist_id: &str, suffix: &str) -> String {
    format!("playlists/{}{}", segment(playlist_id), suffix)
}

fn uri_list<S: AsRef<str>>(uris: &[S]) -> Vec<String> {
    uris.iter().map(|uri| uri.as_ref().to_string()).collect()
}

fn to_body<T: serde::Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value)
        .map_err(|e| SpotifyError::ParseError(format!("Failed to serialize request body: {}", e)))
}
