//! Request descriptor
//!
//! An [`ApiRequest`] describes one catalog call independently of the base
//! URL and credential. It is turned into a transport request per call.

use bridge_traits::http::{HttpMethod, HttpRequest};
use bytes::Bytes;
use core_auth::AccessToken;
use core_runtime::ClientConfig;
use serde_json::Value;

use crate::error::{Result, SpotifyError};
use crate::query::QueryString;

/// Request body payload.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Serialized as JSON with `Content-Type: application/json`
    Json(Value),
    /// Sent as-is with an explicit content type
    Raw {
        content_type: &'static str,
        bytes: Bytes,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Target {
    /// Relative to the configured API base URL
    Path(String),
    /// Fully qualified, used for pagination links
    Absolute(String),
}

/// A single catalog call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    method: HttpMethod,
    target: Target,
    query: QueryString,
    body: Option<RequestBody>,
}

impl ApiRequest {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            target: Target::Path(path.into()),
            query: QueryString::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// GET an absolute URL, bypassing the configured base.
    pub fn get_absolute(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            target: Target::Absolute(url.into()),
            query: QueryString::new(),
            body: None,
        }
    }

    pub fn query(mut self, query: QueryString) -> Self {
        self.query = query;
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(RequestBody::Json(body));
        self
    }

    pub fn raw(mut self, content_type: &'static str, bytes: impl Into<Bytes>) -> Self {
        self.body = Some(RequestBody::Raw {
            content_type,
            bytes: bytes.into(),
        });
        self
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn body(&self) -> Option<&RequestBody> {
        self.body.as_ref()
    }

    /// Full URL including the query string.
    pub fn url(&self, config: &ClientConfig) -> String {
        let base = match &self.target {
            Target::Path(path) => config.endpoint(path),
            Target::Absolute(url) => url.clone(),
        };

        if self.query.is_empty() {
            base
        } else if base.contains('?') {
            format!("{}&{}", base, self.query)
        } else {
            format!("{}?{}", base, self.query)
        }
    }

    /// Build the transport request for `token`.
    ///
    /// # Errors
    ///
    /// Returns [`SpotifyError::Validation`] if the token is empty, and
    /// [`SpotifyError::ParseError`] if the JSON body cannot be serialized.
    pub fn into_http_request(self, config: &ClientConfig, token: &AccessToken) -> Result<HttpRequest> {
        if token.is_empty() {
            return Err(SpotifyError::validation("No access token provided."));
        }

        let mut request = HttpRequest::new(self.method, self.url(config)).bearer_token(token);

        if let Some(timeout) = config.request_timeout {
            request = request.timeout(timeout);
        }

        match self.body {
            Some(RequestBody::Json(value)) => {
                let bytes = serde_json::to_vec(&value).map_err(|e| {
                    SpotifyError::ParseError(format!("Failed to serialize request body: {}", e))
                })?;
                request = request
                    .header("Content-Type", "application/json")
                    .body(Bytes::from(bytes));
            }
            Some(RequestBody::Raw {
                content_type,
                bytes,
            }) => {
                request = request.header("Content-Type", content_type).body(bytes);
            }
            None => {}
        }

        Ok(request)
    }
}

/// Percent-encode one path segment.
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
