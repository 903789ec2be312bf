use core_auth::AccessToken;
use serde_json::Value;
use tracing::instrument;

use crate::client::SpotifyClient;
use crate::error::{Result, SpotifyError};
use crate::query::QueryString;
use crate::request::ApiRequest;
use crate::types::SearchType;

impl SpotifyClient {
    /// Search the catalog for `query` across one or more item types.
    ///
    /// The query supports the API's field filters (`artist:`, `year:`,
    /// `genre:` ...) and is percent-encoded as a whole.
    #[instrument(skip(self, token))]
    pub async fn search_for_item(
        &self,
        token: &AccessToken,
        query: &str,
        types: &[SearchType],
    ) -> Result<Value> {
        if types.is_empty() {
            return Err(SpotifyError::validation(
                "You passed in no search types in the array.",
            ));
        }

        let type_names: Vec<&str> = types.iter().map(SearchType::as_str).collect();
        let query = QueryString::new()
            .push("q", query)
            .push_list("type", &type_names);

        self.fetch_json(token, ApiRequest::get("search").query(query))
            .await
    }
}
