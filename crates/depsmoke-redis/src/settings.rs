//! Connection settings for the cache client.

use std::fmt;

use redis::{ConnectionAddr, ConnectionInfo, IntoConnectionInfo, RedisConnectionInfo};
use serde::Deserialize;

use crate::{Error, Result};

/// Default server address.
pub const DEFAULT_ADDR: &str = "localhost:6379";

/// Default logical database index.
pub const DEFAULT_DB: i64 = 0;

/// Port used when the address names only a host.
pub const DEFAULT_PORT: u16 = 6379;

/// Address, credential and database index for a Redis server.
///
/// Deserializes from a `[redis]` table; every field is optional.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    /// `host:port` of the server.
    pub addr: String,

    /// Password, or `None` when the server has no password set.
    pub password: Option<String>,

    /// Logical database index.
    pub db: i64,
}

impl CacheSettings {
    /// Settings for the given address with no password and the default DB.
    pub fn new(addr: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            ..Self::default()
        }
    }

    /// Sets the password.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Sets the logical database index.
    pub fn with_db(mut self, db: i64) -> Self {
        self.db = db;
        self
    }

    /// Checks the settings without contacting the server.
    pub fn validate(&self) -> Result<()> {
        self.host_port()?;
        if self.db < 0 {
            return Err(Error::invalid_settings(format!(
                "database index must be non-negative, got {}",
                self.db
            )));
        }
        Ok(())
    }

    /// Splits `addr` into host and port.
    ///
    /// Accepts `host`, `host:port` and `[v6addr]:port`. A missing port
    /// falls back to [`DEFAULT_PORT`].
    pub fn host_port(&self) -> Result<(String, u16)> {
        let addr = self.addr.trim();
        if addr.is_empty() {
            return Err(Error::invalid_settings("address must not be empty"));
        }

        let (host, port) = match addr.rsplit_once(':') {
            Some((host, port)) if !host.contains(':') || host.ends_with(']') => {
                let port = port.parse::<u16>().map_err(|_| {
                    Error::invalid_settings(format!("invalid port '{port}' in address '{addr}'"))
                })?;
                (host, port)
            }
            _ => (addr, DEFAULT_PORT),
        };

        let host = host.trim_start_matches('[').trim_end_matches(']');
        if host.is_empty() {
            return Err(Error::invalid_settings(format!(
                "address '{addr}' has no host"
            )));
        }
        Ok((host.to_string(), port))
    }

    /// Builds the connection info handed to the client library.
    ///
    /// The password is passed through as-is; an empty password is treated
    /// the same as no password.
    pub fn connection_info(&self) -> Result<ConnectionInfo> {
        self.validate()?;
        let (host, port) = self.host_port()?;

        let mut redis_settings = RedisConnectionInfo::default().set_db(self.db);
        if let Some(password) = self.password.as_deref().filter(|p| !p.is_empty()) {
            redis_settings = redis_settings.set_password(password);
        }

        let info = ConnectionAddr::Tcp(host, port)
            .into_connection_info()?
            .set_redis_settings(redis_settings);
        Ok(info)
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            password: None,
            db: DEFAULT_DB,
        }
    }
}

impl fmt::Debug for CacheSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheSettings")
            .field("addr", &self.addr)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("db", &self.db)
            .finish()
    }
}
