//! The smoke run: one call into each exercised dependency.

use std::io::Write;

use anyhow::{Context, Result};
use depsmoke_api::ROOT_PATH;
use depsmoke_redis::CacheClient;

use crate::config::SmokeConfig;

/// What each step produced.
#[derive(Debug)]
pub struct SmokeReport {
    /// YAML text of the record.
    pub yaml: String,
    /// Printable description of the cache client handle.
    pub cache: String,
    /// Path the router was mounted at.
    pub mounted_at: &'static str,
}

/// Runs every step in order and writes the results to `out`.
pub fn run<W: Write>(config: &SmokeConfig, out: &mut W) -> Result<SmokeReport> {
    let person = config.person.to_person();
    tracing::info!(name = %person.name, age = person.age, "Serializing person record");
    let yaml = person.to_yaml().context("serializing person record to YAML")?;
    write!(out, "{yaml}").context("writing YAML to output")?;

    tracing::info!(addr = %config.redis.addr, db = config.redis.db, "Opening cache client");
    let client = CacheClient::new(&config.redis).context("opening Redis client handle")?;
    writeln!(out, "{client}").context("writing cache client to output")?;

    tracing::info!(path = ROOT_PATH, "Registering router");
    let _app = depsmoke_api::app();
    writeln!(out, "router mounted at {ROOT_PATH}").context("writing router to output")?;

    Ok(SmokeReport {
        yaml,
        cache: client.to_string(),
        mounted_at: ROOT_PATH,
    })
}
