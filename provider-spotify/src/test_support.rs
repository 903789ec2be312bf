//! Mock transport helpers shared by the unit tests

use bridge_traits::error::Result as BridgeResult;
use bridge_traits::http::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use core_auth::AccessToken;
use mockall::mock;
use std::sync::{Arc, Mutex};

use crate::client::SpotifyClient;

mock! {
    pub Transport {}

    #[async_trait::async_trait]
    impl HttpClient for Transport {
        async fn execute(&self, request: HttpRequest) -> BridgeResult<HttpResponse>;
    }
}

pub const BASE: &str = "https://api.spotify.com/v1/";

pub fn token() -> AccessToken {
    AccessToken::new("test_token")
}

pub fn client(transport: MockTransport) -> SpotifyClient {
    SpotifyClient::new(Arc::new(transport))
}

/// Expect exactly one `method` request to `BASE + path`, answered with `status`/`body`.
pub fn respond(method: HttpMethod, path: &str, status: u16, body: &str) -> MockTransport {
    respond_url(method, &format!("{}{}", BASE, path), status, body)
}

/// Like [`respond`] with a fully qualified URL.
pub fn respond_url(method: HttpMethod, url: &str, status: u16, body: &str) -> MockTransport {
    let url = url.to_string();
    let body = body.to_string();

    let mut transport = MockTransport::new();
    transport
        .expect_execute()
        .times(1)
        .withf(move |request| {
            request.method == method
                && request.url == url
                && request.headers.get("Authorization") == Some(&"Bearer test_token".to_string())
        })
        .returning(move |_| Ok(HttpResponse::new(status, body.clone())));
    transport
}

/// Expect no request at all.
pub fn no_call() -> MockTransport {
    let mut transport = MockTransport::new();
    transport.expect_execute().times(0);
    transport
}

/// Answer one request with `status`/`body` and keep it for inspection.
pub fn capture(status: u16, body: &str) -> (MockTransport, Arc<Mutex<Option<HttpRequest>>>) {
    let captured = Arc::new(Mutex::new(None));
    let slot = Arc::clone(&captured);
    let body = body.to_string();

    let mut transport = MockTransport::new();
    transport.expect_execute().times(1).returning(move |request| {
        *slot.lock().unwrap() = Some(request);
        Ok(HttpResponse::new(status, body.clone()))
    });

    (transport, captured)
}

/// Decode the JSON body of a captured request.
pub fn json_body(captured: &Arc<Mutex<Option<HttpRequest>>>) -> serde_json::Value {
    let guard = captured.lock().unwrap();
    let request = guard.as_ref().expect("no request captured");
    serde_json::from_slice(request.body.as_ref().expect("request has no body")).unwrap()
}

/// URL of a captured request.
pub fn captured_url(captured: &Arc<Mutex<Option<HttpRequest>>>) -> String {
    let guard = captured.lock().unwrap();
    guard.as_ref().expect("no request captured").url.clone()
}
