//! depsmoke Core — the record type, its YAML rendering, and shared errors.
//!
//! This crate has no internal depsmoke dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`person`]: The person record serialized by the smoke run

#![warn(clippy::all)]

pub mod error;
pub mod person;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use person::{Person, SAMPLE_AGE, SAMPLE_NAME};
