//! # depsmoke-cli
//!
//! Configuration and the smoke run behind the `depsmoke` binary.
//!
//! - [`cli`]: command-line arguments
//! - [`config`]: layered configuration
//! - [`smoke`]: the run itself

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod smoke;

pub use cli::Args;
pub use config::{Overrides, SmokeConfig};
pub use smoke::{SmokeReport, run};
