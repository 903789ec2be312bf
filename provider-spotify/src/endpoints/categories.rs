//! Browse categories

use core_auth::AccessToken;
use serde_json::Value;
use tracing::instrument;

use crate::client::SpotifyClient;
use crate::error::Result;
use crate::request::{segment, ApiRequest};

impl SpotifyClient {
    #[instrument(skip(self, token))]
    pub async fn get_several_browse_categories(&self, token: &AccessToken) -> Result<Value> {
        self.fetch_json(token, ApiRequest::get("browse/categories"))
            .await
    }

    #[instrument(skip(self, token))]
    pub async fn get_single_browse_category(
        &self,
        token: &AccessToken,
        category_id: &str,
    ) -> Result<Value> {
        self.fetch_json(
            token,
            ApiRequest::get(format!("browse/categories/{}", segment(category_id))),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{client, respond, token};
    use bridge_traits::http::HttpMethod;

    #[tokio::test]
    async fn test_get_several_browse_categories() {
        let client = client(respond(
            HttpMethod::Get,
            "browse/categories",
            200,
            r#"{"categories":{"items":[{"id":"dinner"}]}}"#,
        ));

        let value = client.get_several_browse_categories(&token()).await.unwrap();
        assert_eq!(value["categories"]["items"][0]["id"], "dinner");
    }

    #[tokio::test]
    async fn test_get_single_browse_category() {
        let client = client(respond(
            HttpMethod::Get,
            "browse/categories/dinner",
            200,
            r#"{"id":"dinner","name":"Dinner"}"#,
        ));

        let value = client
            .get_single_browse_category(&token(), "dinner")
            .await
            .unwrap();
        assert_eq!(value["name"], "Dinner");
    }
}
