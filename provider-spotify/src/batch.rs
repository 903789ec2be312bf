//! Identifier batch bounds
//!
//! Every batch operation validates its identifier list against a
//! [`BatchLimit`] before building a request. Violations return
//! [`SpotifyError::Validation`] and never reach the transport.

use crate::error::{Result, SpotifyError};
use crate::query::QueryString;

/// Bounds and wording for one batch parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchLimit {
    pub min: usize,
    pub max: usize,
    /// Query parameter carrying the joined list
    pub param: &'static str,
    /// Plural noun used in messages, e.g. "album IDs"
    pub label: &'static str,
    /// Unit shown after the maximum, e.g. "Albums"
    pub unit: &'static str,
}

impl BatchLimit {
    pub const fn new(
        max: usize,
        param: &'static str,
        label: &'static str,
        unit: &'static str,
    ) -> Self {
        Self {
            min: 1,
            max,
            param,
            label,
            unit,
        }
    }

    /// Reject lists shorter than `min` or longer than `max`.
    pub fn check<S: AsRef<str>>(&self, ids: &[S]) -> Result<()> {
        if ids.len() < self.min {
            return Err(SpotifyError::validation(format!(
                "You passed in no {} in the array.",
                self.label
            )));
        }

        if ids.len() > self.max {
            return Err(SpotifyError::validation(format!(
                "You have too many {} in your array. Max: {} {}.",
                self.label, self.max, self.unit
            )));
        }

        Ok(())
    }

    /// Validate `ids` and encode them as this limit's list parameter.
    pub fn query<S: AsRef<str>>(&self, ids: &[S]) -> Result<QueryString> {
        self.check(ids)?;
        Ok(QueryString::new().push_list(self.param, ids))
    }
}

pub const ALBUM_IDS: BatchLimit = BatchLimit::new(20, "ids", "album IDs", "Albums");
pub const ARTIST_IDS: BatchLimit = BatchLimit::new(50, "ids", "artist IDs", "Artists");
pub const AUDIOBOOK_IDS: BatchLimit = BatchLimit::new(50, "ids", "audiobook IDs", "Audiobooks");
pub const CHAPTER_IDS: BatchLimit = BatchLimit::new(50, "ids", "chapter IDs", "Chapters");
pub const EPISODE_IDS: BatchLimit = BatchLimit::new(50, "ids", "episode IDs", "Episodes");
pub const SHOW_IDS: BatchLimit = BatchLimit::new(50, "ids", "show IDs", "Shows");
pub const TRACK_IDS: BatchLimit = BatchLimit::new(50, "ids", "track IDs", "Tracks");
pub const AUDIO_FEATURE_IDS: BatchLimit = BatchLimit::new(100, "ids", "track IDs", "Tracks");
pub const FOLLOW_IDS: BatchLimit = BatchLimit::new(50, "ids", "artist or user IDs", "IDs");
pub const PLAYLIST_FOLLOWER_IDS: BatchLimit = BatchLimit::new(5, "ids", "user IDs", "Users");
pub const PLAYLIST_ITEM_URIS: BatchLimit = BatchLimit::new(100, "uris", "item URIs", "Items");
