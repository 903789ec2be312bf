//! # Authentication Module
//!
//! Credential types and the client-credentials token flow.
//!
//! ## Overview
//!
//! Catalog calls take an [`AccessToken`] per call; this crate never stores,
//! refreshes or validates tokens beyond checking they are present. Hosts
//! that only need app-level access can obtain a token from the accounts
//! service with [`ClientCredentialsFlow`].
//!
//! ## Features
//!
//! - Redacted `Debug` output for every secret-bearing type
//! - Client-credentials grant (`grant_type=client_credentials`) with HTTP
//!   Basic client authentication
//! - Token endpoint taken from [`ClientConfig`](core_runtime::ClientConfig)

pub mod client_credentials;
pub mod error;
pub mod types;

pub use client_credentials::ClientCredentialsFlow;
pub use error::{AuthError, Result};
pub use types::{AccessToken, ClientCredentials, ClientToken};
