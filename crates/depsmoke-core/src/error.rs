//! Error types for depsmoke-core

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for depsmoke-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in depsmoke-core
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// I/O error tied to a specific file
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// File the operation was acting on
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

impl Error {
    /// Creates a configuration error with a message.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps an I/O error together with the path it occurred on.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
