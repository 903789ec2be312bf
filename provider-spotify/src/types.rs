//! Spotify API parameter and result types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a write operation the API answers without a body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub status: u16,
    pub message: String,
}

impl StatusMessage {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

/// Repeat mode accepted by `me/player/repeat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatState {
    /// Repeat the current track
    Track,
    /// Repeat the current context (album, playlist)
    Context,
    Off,
}

impl RepeatState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepeatState::Track => "track",
            RepeatState::Context => "context",
            RepeatState::Off => "off",
        }
    }
}

impl fmt::Display for RepeatState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Item types searchable through `search`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    Album,
    Artist,
    Playlist,
    Track,
    Show,
    Episode,
    Audiobook,
}

impl SearchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::Album => "album",
            SearchType::Artist => "artist",
            SearchType::Playlist => "playlist",
            SearchType::Track => "track",
            SearchType::Show => "show",
            SearchType::Episode => "episode",
            SearchType::Audiobook => "audiobook",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Collections available under `me/top/{type}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopItemType {
    Artists,
    Tracks,
}

impl TopItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TopItemType::Artists => "artists",
            TopItemType::Tracks => "tracks",
        }
    }
}

impl fmt::Display for TopItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of identifiers passed to the `me/following` operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FollowType {
    Artist,
    User,
}

impl FollowType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FollowType::Artist => "artist",
            FollowType::User => "user",
        }
    }
}

impl fmt::Display for FollowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Playlist attributes for `create_playlist` and `change_playlist_details`.
///
/// Unset fields are omitted from the request body so the API keeps their
/// current values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collaborative: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PlaylistDetails {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn public(mut self, public: bool) -> Self {
        self.public = Some(public);
        self
    }

    pub fn collaborative(mut self, collaborative: bool) -> Self {
        self.collaborative = Some(collaborative);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Reorder or replace request for `playlists/{id}/tracks`.
///
/// Set `uris` to replace the playlist contents, or the range fields to move
/// a block of items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistItemsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uris: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_start: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_before: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
}

impl PlaylistItemsUpdate {
    /// Replace every item of the playlist with `uris`.
    pub fn replace<S: AsRef<str>>(uris: &[S]) -> Self {
        Self {
            uris: Some(uris.iter().map(|uri| uri.as_ref().to_string()).collect()),
            ..Self::default()
        }
    }

    /// Move `range_length` items starting at `range_start` before `insert_before`.
    pub fn reorder(range_start: u32, insert_before: u32, range_length: u32) -> Self {
        Self {
            range_start: Some(range_start),
            insert_before: Some(insert_before),
            range_length: Some(range_length),
            ..Self::default()
        }
    }

    pub fn snapshot_id(mut self, snapshot_id: impl Into<String>) -> Self {
        self.snapshot_id = Some(snapshot_id.into());
        self
    }
}

/// Cursor parameters for `me/player/recently-played`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecentlyPlayedParams {
    /// Number of items to return (API default and maximum apply)
    pub limit: u32,
    /// Unix timestamp in milliseconds; items played before it
    pub before: Option<u64>,
    /// Unix timestamp in milliseconds; items played after it
    pub after: Option<u64>,
}

impl Default for RecentlyPlayedParams {
    fn default() -> Self {
        Self {
            limit: 20,
            before: None,
            after: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(RepeatState::Context.to_string(), "context");
        assert_eq!(SearchType::Audiobook.as_str(), "audiobook");
        assert_eq!(TopItemType::Tracks.to_string(), "tracks");
        assert_eq!(FollowType::User.as_str(), "user");

        assert_eq!(
            serde_json::to_string(&RepeatState::Off).unwrap(),
            "\"off\""
        );
    }

    #[test]
    fn test_playlist_details_omits_unset_fields() {
        let details = PlaylistDetails::named("Road Trip").public(false);
        let json = serde_json::to_value(&details).unwrap();

        assert_eq!(json, serde_json::json!({ "name": "Road Trip", "public": false }));
    }

    #[test]
    fn test_playlist_items_update_shapes() {
        let replace = PlaylistItemsUpdate::replace(&["spotify:track:a", "spotify:track:b"]);
        assert_eq!(
            serde_json::to_value(&replace).unwrap(),
            serde_json::json!({ "uris": ["spotify:track:a", "spotify:track:b"] })
        );

        let reorder = PlaylistItemsUpdate::reorder(1, 3, 2).snapshot_id("snap");
        assert_eq!(
            serde_json::to_value(&reorder).unwrap(),
            serde_json::json!({
                "range_start": 1,
                "insert_before": 3,
                "range_length": 2,
                "snapshot_id": "snap"
            })
        );
    }

    #[test]
    fn test_recently_played_defaults() {
        let params = RecentlyPlayedParams::default();
        assert_eq!(params.limit, 20);
        assert!(params.before.is_none());
        assert!(params.after.is_none());
    }
}
