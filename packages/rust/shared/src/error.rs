//! Errors raised while loading configuration and site snapshots.
//!
//! Rendering never fails: a missing or one-post series renders nothing. Only
//! the inputs the renderer is built from can be rejected. The CLI reports
//! these through `color-eyre`.

use std::path::PathBuf;

/// Why a config file or site snapshot was rejected.
#[derive(Debug, thiserror::Error)]
pub enum PostSeriesError {
    /// A config value the host would refuse to register.
    #[error("invalid config: {message}")]
    Config { message: String },

    /// `postseries.toml` is not valid TOML or does not match the schema.
    #[error("failed to parse config file {path:?}: {message}")]
    ConfigFile { path: PathBuf, message: String },

    /// A site snapshot is not valid JSON or does not match the schema.
    /// `origin` is the file path, or `<inline>` for snapshots parsed from text.
    #[error("invalid site snapshot {origin}: {message}")]
    Snapshot { origin: String, message: String },

    /// A snapshot parsed but its content is inconsistent (duplicate ids,
    /// unknown series, bad permalinks).
    #[error("inconsistent site snapshot: {message}")]
    Validation { message: String },

    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PostSeriesError>;

impl PostSeriesError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn config_file(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        Self::ConfigFile {
            path: path.into(),
            message: err.to_string(),
        }
    }

    pub fn snapshot(origin: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Snapshot {
            origin: origin.into(),
            message: err.to_string(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
