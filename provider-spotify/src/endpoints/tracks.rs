//! Tracks: catalog lookups, saved tracks, audio analysis and recommendations

use core_auth::AccessToken;
use serde_json::Value;
use tracing::instrument;

use crate::batch::{AUDIO_FEATURE_IDS, TRACK_IDS};
use crate::client::SpotifyClient;
use crate::error::Result;
use crate::query::QueryString;
use crate::request::{segment, ApiRequest};
use crate::types::StatusMessage;

impl SpotifyClient {
    #[instrument(skip(self, token))]
    pub async fn get_track(&self, token: &AccessToken, track_id: &str) -> Result<Value> {
        self.fetch_json(token, ApiRequest::get(format!("tracks/{}", segment(track_id))))
            .await
    }

    /// Get catalog information for up to 50 tracks.
    #[instrument(skip(self, token, track_ids), fields(count = track_ids.len()))]
    pub async fn get_several_tracks<S: AsRef<str>>(
        &self,
        token: &AccessToken,
        track_ids: &[S],
    ) -> Result<Value> {
        let query = TRACK_IDS.query(track_ids)?;
        self.fetch_json(token, ApiRequest::get("tracks").query(query))
            .await
    }

    #[instrument(skip(self, token))]
    pub async fn get_users_saved_tracks(&self, token: &AccessToken) -> Result<Value> {
        self.fetch_json(token, ApiRequest::get("me/tracks")).await
    }

    #[instrument(skip(self, token, track_ids), fields(count = track_ids.len()))]
    pub async fn save_tracks_for_current_user<S: AsRef<str>>(
        &self,
        token: &AccessToken,
        track_ids: &[S],
    ) -> Result<StatusMessage> {
        let query = TRACK_IDS.query(track_ids)?;
        self.send_command(
            token,
            ApiRequest::put("me/tracks").query(query),
            "The tracks were successfully saved.",
        )
        .await
    }

    #[instrument(skip(self, token, track_ids), fields(count = track_ids.len()))]
    pub async fn remove_users_saved_tracks<S: AsRef<str>>(
        &self,
        token: &AccessToken,
        track_ids: &[S],
    ) -> Result<StatusMessage> {
        let query = TRACK_IDS.query(track_ids)?;
        self.send_command(
            token,
            ApiRequest::delete("me/tracks").query(query),
            "The tracks were successfully removed.",
        )
        .await
    }

    #[instrument(skip(self, token, track_ids), fields(count = track_ids.len()))]
    pub async fn check_users_saved_tracks<S: AsRef<str>>(
        &self,
        token: &AccessToken,
        track_ids: &[S],
    ) -> Result<Value> {
        let query = TRACK_IDS.query(track_ids)?;
        self.fetch_json(token, ApiRequest::get("me/tracks/contains").query(query))
            .await
    }

    /// Get audio features for up to 100 tracks.
    #[instrument(skip(self, token, track_ids), fields(count = track_ids.len()))]
    pub async fn get_tracks_audio_features<S: AsRef<str>>(
        &self,
        token: &AccessToken,
        track_ids: &[S],
    ) -> Result<Value> {
        let query = AUDIO_FEATURE_IDS.query(track_ids)?;
        self.fetch_json(token, ApiRequest::get("audio-features").query(query))
            .await
    }

    #[instrument(skip(self, token))]
    pub async fn get_track_audio_features(
        &self,
        token: &AccessToken,
        track_id: &str,
    ) -> Result<Value> {
        self.fetch_json(
            token,
            ApiRequest::get(format!("audio-features/{}", segment(track_id))),
        )
        .await
    }

    #[instrument(skip(self, token))]
    pub async fn get_track_audio_analysis(
        &self,
        token: &AccessToken,
        track_id: &str,
    ) -> Result<Value> {
        self.fetch_json(
            token,
            ApiRequest::get(format!("audio-analysis/{}", segment(track_id))),
        )
        .await
    }

    /// Get recommendations for caller-supplied seeds and tunables.
    ///
    /// Parameters are sent in the given order, e.g.
    /// `[("seed_artists", "4NHQUGzhtTLFvgF5SZesLK"), ("min_energy", "0.4")]`.
    #[instrument(skip(self, token, params), fields(count = params.len()))]
    pub async fn get_recommendations<K, V>(
        &self,
        token: &AccessToken,
        params: &[(K, V)],
    ) -> Result<Value>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let query = params
            .iter()
            .fold(QueryString::new(), |query, (key, value)| {
                query.push(key.as_ref(), value.as_ref())
            });

        self.fetch_json(token, ApiRequest::get("recommendations").query(query))
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
    async fn test_get_track() {
        let track = client(respond(
            HttpMethod::Get,
            "tracks/11dFghVXANMlKmJXsNCbNl",
            200,
            r#"{"name":"Cut To The Feeling","popularity":60}"#,
        ))
        .get_track(&token(), "11dFghVXANMlKmJXsNCbNl")
        .await
        .unwrap();

        assert_eq!(track["popularity"], 60);
    }

    #[tokio::test]
    async fn test_get_several_tracks() {
        let value = client(respond(HttpMethod::Get, "tracks?ids=t1,t2,t1", 200, r#"{"tracks":[]}"#))
            .get_several_tracks(&token(), &["t1", "t2", "t1"])
            .await
            .unwrap();

        assert_eq!(value, json!({ "tracks": [] }));
    }

    #[tokio::test]
    async fn test_save_remove_check_tracks() {
        let saved = client(respond(HttpMethod::Put, "me/tracks?ids=t1", 200, ""))
            .save_tracks_for_current_user(&token(), &["t1"])
            .await
            .unwrap();
        assert_eq!(saved, StatusMessage::new(200, "The tracks were successfully saved."));

        let removed = client(respond(HttpMethod::Delete, "me/tracks?ids=t1", 200, ""))
            .remove_users_saved_tracks(&token(), &["t1"])
            .await
            .unwrap();
        assert_eq!(removed.message, "The tracks were successfully removed.");

        let contains = client(respond(HttpMethod::Get, "me/tracks/contains?ids=t1", 200, "[true]"))
            .check_users_saved_tracks(&token(), &["t1"])
            .await
            .unwrap();
        assert_eq!(contains, json!([true]));

        let listed = client(respond(HttpMethod::Get, "me/tracks", 200, r#"{"items":[]}"#))
            .get_users_saved_tracks(&token())
            .await
            .unwrap();
        assert_eq!(listed["items"], json!([]));
    }

    #[tokio::test]
    async fn test_audio_features_allows_100() {
        let ids: Vec<String> = (0..100).map(|i| format!("t{}", i)).collect();
        let expected = format!("audio-features?ids={}", ids.join(","));

        let value = client(respond(HttpMethod::Get, &expected, 200, r#"{"audio_features":[]}"#))
            .get_tracks_audio_features(&token(), &ids)
            .await
            .unwrap();
        assert!(value["audio_features"].is_array());

        let mut too_many = ids.clone();
        too_many.push("t100".to_string());
        let err = client(no_call())
            .get_tracks_audio_features(&token(), &too_many)
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "You have too many track IDs in your array. Max: 100 Tracks."
        );
    }

    #[tokio::test]
    async fn test_several_tracks_capped_at_50() {
        let ids: Vec<String> = (0..51).map(|i| format!("t{}", i)).collect();

        let err = client(no_call())
            .save_tracks_for_current_user(&token(), &ids)
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "You have too many track IDs in your array. Max: 50 Tracks."
        );
    }

    #[tokio::test]
    async fn test_single_track_analysis() {
        let features = client(respond(HttpMethod::Get, "audio-features/t1", 200, r#"{"energy":0.8}"#))
            .get_track_audio_features(&token(), "t1")
            .await
            .unwrap();
        assert_eq!(features["energy"], 0.8);

        let analysis = client(respond(HttpMethod::Get, "audio-analysis/t1", 200, r#"{"bars":[]}"#))
            .get_track_audio_analysis(&token(), "t1")
            .await
            .unwrap();
        assert_eq!(analysis["bars"], json!([]));
    }

    #[tokio::test]
    async fn test_get_recommendations_keeps_order() {
        let value = client(respond(
            HttpMethod::Get,
            "recommendations?seed_genres=classical%2Ccountry&seed_artists=4NHQUGzhtTLFvgF5SZesLK&min_energy=0.4",
            200,
            r#"{"tracks":[],"seeds":[]}"#,
        ))
        .get_recommendations(
            &token(),
            &[
                ("seed_genres", "classical,country"),
                ("seed_artists", "4NHQUGzhtTLFvgF5SZesLK"),
                ("min_energy", "0.4"),
            ],
        )
        .await
        .unwrap();

        assert!(value["tracks"].is_array());
    }
}
