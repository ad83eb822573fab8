//! Smoke run configuration.
//!
//! Layered as defaults, then an optional TOML file, then command-line and
//! environment overrides:
//!
//! ```toml
//! [person]
//! name = "John"
//! age = 30
//!
//! [redis]
//! addr = "localhost:6379"
//! db = 0
//! ```

use std::path::Path;

use depsmoke_core::{Error, Person, Result, SAMPLE_AGE, SAMPLE_NAME};
use depsmoke_redis::CacheSettings;
use serde::Deserialize;

/// The `[person]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PersonSection {
    /// Name written into the record.
    pub name: String,
    /// Age written into the record.
    pub age: i64,
}

impl Default for PersonSection {
    fn default() -> Self {
        Self {
            name: SAMPLE_NAME.to_string(),
            age: SAMPLE_AGE,
        }
    }
}

impl PersonSection {
    /// Builds the record this section describes.
    pub fn to_person(&self) -> Person {
        Person::new(self.name.clone(), self.age)
    }
}

/// Values supplied on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Replaces `redis.addr`.
    pub redis_addr: Option<String>,
    /// Replaces `redis.password`.
    pub redis_password: Option<String>,
    /// Replaces `redis.db`.
    pub redis_db: Option<i64>,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SmokeConfig {
    /// Record to serialize.
    pub person: PersonSection,
    /// Cache client settings.
    pub redis: CacheSettings,
}

impl SmokeConfig {
    /// Loads configuration from `path`, or returns defaults when `path` is `None`.
    ///
    /// An explicitly named file that cannot be read is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            log::debug!("No config file given, using defaults");
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config = Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e.to_string()))
    }

    /// Applies command-line and environment overrides.
    pub fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(addr) = overrides.redis_addr {
            self.redis.addr = addr;
        }
        if let Some(password) = overrides.redis_password {
            self.redis.password = Some(password);
        }
        if let Some(db) = overrides.redis_db {
            self.redis.db = db;
        }
        self
    }
}
