//! # Host Bridge Traits
//!
//! Platform abstraction traits that each host must implement.
//!
//! ## Overview
//!
//! This crate defines the contract between the Spotify client crates and a
//! platform-specific transport. The catalog client never talks to a socket
//! directly: it hands a fully built [`HttpRequest`](http::HttpRequest) to an
//! [`HttpClient`](http::HttpClient) and interprets the returned
//! [`HttpResponse`](http::HttpResponse).
//!
//! ## Implementations
//!
//! | Platform | Implementation Crate |
//! |----------|---------------------|
//! | Desktop  | `bridge-desktop` (reqwest) |
//! | Tests    | `mockall` mocks / recording stubs |
//!
//! ## Error Handling
//!
//! Transport failures (DNS, TLS, timeouts, refused connections) surface as
//! [`BridgeError`](error::BridgeError). A response with a non-2xx status is
//! *not* a transport failure; interpreting it is the caller's job.
//!
//! ## Thread Safety
//!
//! `HttpClient` requires `Send + Sync` so a single client can be shared by
//! concurrent calls behind an `Arc`.
//!
//! ## Example
//!
//! ```ignore
//! use bridge_traits::http::{HttpClient, HttpRequest, HttpResponse};
//! use bridge_traits::error::Result;
//! use async_trait::async_trait;
//!
//! pub struct MyHttpClient {
//!     client: reqwest::Client,
//! }
//!
//! #[async_trait]
//! impl HttpClient for MyHttpClient {
//!     async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
//!         // Implementation
//!         todo!()
//!     }
//! }
//! ```

pub mod error;
pub mod http;

pub use error::BridgeError;

pub use http::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
