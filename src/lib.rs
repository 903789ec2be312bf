//! Workspace umbrella crate.
//!
//! This crate exposes the feature flags that map to the individual workspace
//! crates (`core-service`, `provider-spotify`, `bridge-desktop`). Host
//! applications can depend on `spotify-wrapper` and enable the documented
//! features without wiring each crate individually.

#[cfg(feature = "desktop-shims")]
pub use core_service::*;
