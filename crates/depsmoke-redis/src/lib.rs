//! # depsmoke-redis
//!
//! Builds a Redis client handle from an address, an optional password and
//! a logical database index. Nothing here talks to a server.

#![warn(clippy::all)]

pub mod client;
pub mod error;
pub mod settings;

pub use client::CacheClient;
pub use error::{Error, Result};
pub use settings::{CacheSettings, DEFAULT_ADDR, DEFAULT_DB, DEFAULT_PORT};
