//! Users: profiles, top items and follows

use core_auth::AccessToken;
use serde_json::{json, Value};
use tracing::instrument;

use crate::batch::{FOLLOW_IDS, PLAYLIST_FOLLOWER_IDS};
use crate::client::SpotifyClient;
use crate::error::Result;
use crate::query::QueryString;
use crate::request::{segment, ApiRequest};
use crate::types::{FollowType, StatusMessage, TopItemType};

impl SpotifyClient {
    /// Profile of the user the token belongs to.
    #[instrument(skip(self, token))]
    pub async fn get_current_user_profile(&self, token: &AccessToken) -> Result<Value> {
        self.fetch_json(token, ApiRequest::get("me")).await
    }

    #[instrument(skip(self, token))]
    pub async fn get_users_top_items(
        &self,
        token: &AccessToken,
        item_type: TopItemType,
    ) -> Result<Value> {
        self.fetch_json(token, ApiRequest::get(format!("me/top/{}", item_type)))
            .await
    }

    #[instrument(skip(self, token))]
    pub async fn get_user_profile(&self, token: &AccessToken, user_id: &str) -> Result<Value> {
        self.fetch_json(token, ApiRequest::get(format!("users/{}", segment(user_id))))
            .await
    }

    /// Follow a playlist, publicly or privately.
    #[instrument(skip(self, token))]
    pub async fn follow_playlist(
        &self,
        token: &AccessToken,
        playlist_id: &str,
        public: bool,
    ) -> Result<StatusMessage> {
        self.send_command(
            token,
            ApiRequest::put(followers_path(playlist_id)).json(json!({ "public": public })),
            "Successfully followed the playlist.",
        )
        .await
    }

    #[instrument(skip(self, token))]
    pub async fn unfollow_playlist(
        &self,
        token: &AccessToken,
        playlist_id: &str,
    ) -> Result<StatusMessage> {
        self.send_command(
            token,
            ApiRequest::delete(followers_path(playlist_id)),
            "Successfully unfollowed the playlist.",
        )
        .await
    }

    #[instrument(skip(self, token))]
    pub async fn get_followed_artists(&self, token: &AccessToken) -> Result<Value> {
        self.fetch_json(
            token,
            ApiRequest::get("me/following").query(QueryString::new().push("type", FollowType::Artist)),
        )
        .await
    }

    /// Follow up to 50 artists or users.
    #[instrument(skip(self, token, ids), fields(count = ids.len()))]
    pub async fn follow_artists_or_users<S: AsRef<str>>(
        &self,
        token: &AccessToken,
        follow_type: FollowType,
        ids: &[S],
    ) -> Result<StatusMessage> {
        let query = follow_query(follow_type, ids)?;
        self.send_command(
            token,
            ApiRequest::put("me/following").query(query),
            "Successfully followed artists or users.",
        )
        .await
    }

    /// Unfollow up to 50 artists or users.
    #[instrument(skip(self, token, ids), fields(count = ids.len()))]
    pub async fn unfollow_artists_or_users<S: AsRef<str>>(
        &self,
        token: &AccessToken,
        follow_type: FollowType,
        ids: &[S],
    ) -> Result<StatusMessage> {
        let query = follow_query(follow_type, ids)?;
        self.send_command(
            token,
            ApiRequest::delete("me/following").query(query),
            "Successfully unfollowed artists or users.",
        )
        .await
    }

    /// Check which of up to 50 artists or users the current user follows.
    #[instrument(skip(self, token, ids), fields(count = ids.len()))]
    pub async fn check_user_follows_artists_or_users<S: AsRef<str>>(
        &self,
        token: &AccessToken,
        follow_type: FollowType,
        ids: &[S],
    ) -> Result<Value> {
        let query = follow_query(follow_type, ids)?;
        self.fetch_json(token, ApiRequest::get("me/following/contains").query(query))
            .await
    }

    /// Check whether up to 5 users follow a playlist.
    #[instrument(skip(self, token, user_ids), fields(count = user_ids.len()))]
    pub async fn check_users_follow_playlist<S: AsRef<str>>(
        &self,
        token: &AccessToken,
        playlist_id: &str,
        user_ids: &[S],
    ) -> Result<Value> {
        let query = PLAYLIST_FOLLOWER_IDS.query(user_ids)?;
        self.fetch_json(
            token,
            ApiRequest::get(format!("{}/contains", followers_path(playlist_id))).query(query),
        )
        .await
    }
}

fn followers_path(playlist_id: &str) -> String {
    format!("playlists/{}/followers", segment(playlist_id))
}

fn follow_query<S: AsRef<str>>(follow_type: FollowType, ids: &[S]) -> Result<QueryString> {
    FOLLOW_IDS.check(ids)?;
    Ok(QueryString::new()
        .push("type", follow_type)
        .push_list(FOLLOW_IDS.param, ids))
}
