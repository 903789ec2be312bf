//! Playback state and player commands
//!
//! Every command takes an optional `device_id`; when it is `None` the
//! command targets the user's currently active device and no `device_id`
//! parameter is sent.

use core_auth::AccessToken;
use serde_json::{json, Value};
use tracing::instrument;

use crate::client::SpotifyClient;
use crate::error::{Result, SpotifyError};
use crate::query::QueryString;
use crate::request::ApiRequest;
use crate::types::{RecentlyPlayedParams, RepeatState, StatusMessage};

impl SpotifyClient {
    /// Current playback state; `Value::Null` when nothing is playing.
    #[instrument(skip(self, token))]
    pub async fn get_playback_state(&self, token: &AccessToken) -> Result<Value> {
        self.fetch_json(token, ApiRequest::get("me/player")).await
    }

    /// Transfer playback to `device_id`.
    #[instrument(skip(self, token))]
    pub async fn transfer_playback(
        &self,
        token: &AccessToken,
        device_id: &str,
    ) -> Result<StatusMessage> {
        self.send_command(
            token,
            ApiRequest::put("me/player").json(json!({ "device_ids": [device_id] })),
            "Playback transferred successfully.",
        )
        .await
    }

    #[instrument(skip(self, token))]
    pub async fn get_available_devices(&self, token: &AccessToken) -> Result<Value> {
        self.fetch_json(token, ApiRequest::get("me/player/devices"))
            .await
    }

    #[instrument(skip(self, token))]
    pub async fn get_currently_playing_track(&self, token: &AccessToken) -> Result<Value> {
        self.fetch_json(token, ApiRequest::get("me/player/currently-playing"))
            .await
    }

    #[instrument(skip(self, token))]
    pub async fn start_playback(
        &self,
        token: &AccessToken,
        device_id: Option<&str>,
    ) -> Result<StatusMessage> {
        self.send_command(
            token,
            ApiRequest::put("me/player/play").query(device_query(device_id)),
            "Playback started/resumed successfully.",
        )
        .await
    }

    #[instrument(skip(self, token))]
    pub async fn pause_playback(
        &self,
        token: &AccessToken,
        device_id: Option<&str>,
    ) -> Result<StatusMessage> {
        self.send_command(
            token,
            ApiRequest::put("me/player/pause").query(device_query(device_id)),
            "Playback paused successfully.",
        )
        .await
    }

    #[instrument(skip(self, token))]
    pub async fn skip_to_next_track(
        &self,
        token: &AccessToken,
        device_id: Option<&str>,
    ) -> Result<StatusMessage> {
        self.send_command(
            token,
            ApiRequest::post("me/player/next").query(device_query(device_id)),
            "Skipped to the next track successfully.",
        )
        .await
    }

    #[instrument(skip(self, token))]
    pub async fn skip_to_previous_track(
        &self,
        token: &AccessToken,
        device_id: Option<&str>,
    ) -> Result<StatusMessage> {
        self.send_command(
            token,
            ApiRequest::post("me/player/previous").query(device_query(device_id)),
            "Skipped to the previous track successfully.",
        )
        .await
    }

    /// Seek to `position_ms` in the current track.
    #[instrument(skip(self, token))]
    pub async fn seek_to_position(
        &self,
        token: &AccessToken,
        position_ms: u64,
        device_id: Option<&str>,
    ) -> Result<StatusMessage> {
        let query = QueryString::new()
            .push("position_ms", position_ms)
            .push_opt("device_id", device_id);

        self.send_command(
            token,
            ApiRequest::put("me/player/seek").query(query),
            "Seeked to the specified position successfully.",
        )
        .await
    }

    #[instrument(skip(self, token))]
    pub async fn set_repeat_mode(
        &self,
        token: &AccessToken,
        state: RepeatState,
        device_id: Option<&str>,
    ) -> Result<StatusMessage> {
        let query = QueryString::new()
            .push("state", state)
            .push_opt("device_id", device_id);

        self.send_command(
            token,
            ApiRequest::put("me/player/repeat").query(query),
            format!("Repeat mode set to '{}' successfully.", state),
        )
        .await
    }

    /// Set the volume to `volume_percent` (0 to 100).
    #[instrument(skip(self, token))]
    pub async fn set_playback_volume(
        &self,
        token: &AccessToken,
        volume_percent: u8,
        device_id: Option<&str>,
    ) -> Result<StatusMessage> {
        if volume_percent > 100 {
            return Err(SpotifyError::validation(
                "Invalid volume percentage. Allowed values are between 0 and 100.",
            ));
        }

        let query = QueryString::new()
            .push("volume_percent", volume_percent)
            .push_opt("device_id", device_id);

        self.send_command(
            token,
            ApiRequest::put("me/player/volume").query(query),
            format!("Playback volume set to {}% successfully.", volume_percent),
        )
        .await
    }

    #[instrument(skip(self, token))]
    pub async fn toggle_playback_shuffle(
        &self,
        token: &AccessToken,
        state: bool,
        device_id: Option<&str>,
    ) -> Result<StatusMessage> {
        let query = QueryString::new()
            .push("state", state)
            .push_opt("device_id", device_id);

        self.send_command(
            token,
            ApiRequest::put("me/player/shuffle").query(query),
            format!("Playback shuffle set to '{}' successfully.", state),
        )
        .await
    }

    #[instrument(skip(self, token))]
    pub async fn get_recently_played_tracks(
        &self,
        token: &AccessToken,
        params: RecentlyPlayedParams,
    ) -> Result<Value> {
        let query = QueryString::new()
            .push("limit", params.limit)
            .push_opt("before", params.before)
            .push_opt("after", params.after);

        self.fetch_json(token, ApiRequest::get("me/player/recently-played").query(query))
            .await
    }

    #[instrument(skip(self, token))]
    pub async fn get_user_queue(&self, token: &AccessToken) -> Result<Value> {
        self.fetch_json(token, ApiRequest::get("me/player/queue")).await
    }

    /// Append a track or episode URI to the playback queue.
    #[instrument(skip(self, token))]
    pub async fn add_item_to_playback_queue(
        &self,
        token: &AccessToken,
        uri: &str,
        device_id: Option<&str>,
    ) -> Result<StatusMessage> {
        let query = QueryString::new()
            .push("uri", uri)
            .push_opt("device_id", device_id);

        self.send_command(
            token,
            ApiRequest::post("me/player/queue")
                .query(query)
                .json(json!({ "uri": uri })),
            "Item added to playback queue successfully.",
        )
        .await
    }
}

fn device_query(device_id: Option<&str>) -> QueryString {
    QueryString::new().push_opt("device_id", device_id)
}
