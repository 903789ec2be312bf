//! # Core Runtime Module
//!
//! Provides foundational runtime infrastructure for the Spotify client crates:
//! - Logging and tracing infrastructure
//! - Client configuration (endpoints, timeouts, user agent)
//!
//! ## Overview
//!
//! This crate contains the runtime utilities the other crates depend on. The
//! catalog client and the token flow both receive their endpoints from a
//! single [`ClientConfig`](config::ClientConfig) instead of hardcoding them.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, Result};
