//! Error types.
//!
//! Only file I/O and configuration loading can fail. Everything that takes a
//! coordinate clamps it or turns into a no-op instead of erroring.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for buffer I/O.
pub type Result<T, E = BufferError> = std::result::Result<T, E>;

/// Errors from loading or saving a buffer.
#[derive(Debug, Error)]
pub enum BufferError {
    /// The file exists but could not be read (permissions, a directory,
    /// invalid UTF-8). A missing file is not an error.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl BufferError {
    /// The path the failed operation targeted.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } => path,
        }
    }
}

/// Errors from loading a [`Config`](crate::config::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
