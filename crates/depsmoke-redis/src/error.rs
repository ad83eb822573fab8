//! Error types for depsmoke-redis

use thiserror::Error;

/// Result type alias for depsmoke-redis operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in depsmoke-redis
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Redis client error
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// Settings rejected before reaching the client library
    #[error("Invalid cache settings: {message}")]
    InvalidSettings {
        /// Which setting is wrong and why
        message: String,
    },
}

impl Error {
    /// Creates an invalid-settings error with a message.
    pub fn invalid_settings<S: Into<String>>(message: S) -> Self {
        Error::InvalidSettings {
            message: message.into(),
        }
    }
}
