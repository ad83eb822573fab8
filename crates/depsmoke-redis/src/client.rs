//! Cache client handle.

use std::fmt;

use crate::{CacheSettings, Result};

/// An opened, unconnected Redis client.
///
/// Opening only validates the connection settings. No socket is
/// created until a connection is requested from [`CacheClient::inner`].
#[derive(Clone)]
pub struct CacheClient {
    inner: redis::Client,
    addr: String,
    db: i64,
}

impl CacheClient {
    /// Opens a client for the given settings.
    pub fn new(settings: &CacheSettings) -> Result<Self> {
        let info = settings.connection_info()?;
        let inner = redis::Client::open(info)?;
        log::debug!(
            "Opened Redis client handle for {} (db {})",
            settings.addr,
            settings.db
        );
        Ok(Self {
            inner,
            addr: settings.addr.clone(),
            db: settings.db,
        })
    }

    /// Server address the handle points at.
    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// Logical database index.
    pub fn db(&self) -> i64 {
        self.db
    }

    /// The underlying client library handle.
    pub fn inner(&self) -> &redis::Client {
        &self.inner
    }
}

impl fmt::Display for CacheClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Redis<{} db:{}>", self.addr, self.db)
    }
}

impl fmt::Debug for CacheClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheClient")
            .field("addr", &self.addr)
            .field("db", &self.db)
            .finish_non_exhaustive()
    }
}
