//! Shared stub transport for the integration tests

#![allow(dead_code)]

use bridge_traits::error::Result as BridgeResult;
use bridge_traits::{HttpClient, HttpRequest, HttpResponse};
use core_auth::AccessToken;
use provider_spotify::SpotifyClient;
use std::sync::{Arc, Mutex};
use std::time::Duration;

type Responder = dyn Fn(&HttpRequest) -> HttpResponse + Send + Sync;

/// Transport that records every request and answers from a closure
pub struct RecordingHttpClient {
    requests: Mutex<Vec<HttpRequest>>,
    responder: Box<Responder>,
    delay: Option<Duration>,
}

impl RecordingHttpClient {
    /// Answer every request with the same status and body
    pub fn fixed(status: u16, body: &str) -> Self {
        let body = body.to_string();
        Self::with_responder(move |_| HttpResponse::new(status, body.clone()))
    }

    pub fn with_responder<F>(responder: F) -> Self
    where
        F: Fn(&HttpRequest) -> HttpResponse + Send + Sync + 'static,
    {
        Self {
            requests: Mutex::new(Vec::new()),
            responder: Box::new(responder),
            delay: None,
        }
    }

    /// Sleep before answering, so concurrent calls overlap
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request recorded")
    }
}

#[async_trait::async_trait]
impl HttpClient for RecordingHttpClient {
    async fn execute(&self, request: HttpRequest) -> BridgeResult<HttpResponse> {
        let response = (self.responder)(&request);
        self.requests.lock().unwrap().push(request);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        Ok(response)
    }
}

pub fn client_with(transport: &Arc<RecordingHttpClient>) -> SpotifyClient {
    SpotifyClient::new(Arc::clone(transport) as Arc<dyn HttpClient>)
}

pub fn token() -> AccessToken {
    AccessToken::new("integration_token")
}

pub fn ids(prefix: &str, count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{}{}", prefix, i)).collect()
}
