//! # Spotify Provider
//!
//! Async client for every resource of the Spotify Web API.
//!
//! ## Overview
//!
//! This module provides:
//! - [`SpotifyClient`], one async method per catalog operation
//! - Batch validation of identifier lists before any request is made
//! - Ordered, percent-encoded query strings
//! - Typed errors separating local validation, remote failures and transport
//!   failures
//!
//! Read operations return the response body as [`serde_json::Value`],
//! exactly as the API sent it. Write operations return a [`StatusMessage`]
//! carrying the HTTP status and a fixed confirmation message.
//!
//! ## Example
//!
//! ```ignore
//! use provider_spotify::SpotifyClient;
//! use core_auth::AccessToken;
//!
//! let client = SpotifyClient::new(http_client);
//! let token = AccessToken::new("BQDx...");
//!
//! let album = client.get_album(&token, "4aawyAB9vmqN3uQ7FjRGTy").await?;
//! let saved = client
//!     .save_tracks_for_current_user(&token, &["11dFghVXANMlKmJXsNCbNl"])
//!     .await?;
//! assert_eq!(saved.message, "The tracks were successfully saved.");
//! ```

pub mod batch;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod query;
pub mod request;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use batch::BatchLimit;
pub use client::SpotifyClient;
pub use error::{Result, SpotifyError};
pub use query::QueryString;
pub use request::{ApiRequest, RequestBody};
pub use types::{
    FollowType, PlaylistDetails, PlaylistItemsUpdate, RecentlyPlayedParams, RepeatState,
    SearchType, StatusMessage, TopItemType,
};
