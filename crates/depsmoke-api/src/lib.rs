//! # depsmoke-api
//!
//! Builds an axum request router and registers it as the root handler of
//! an HTTP server that is never started.

#![warn(clippy::all)]

pub mod router;

pub use router::{ROOT_PATH, app, mount_root, routes};
