//! Error types for configuration loading.

use std::path::PathBuf;

use thiserror::Error;

use crate::reader::ConfigFormat;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // I/O errors
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Config parsing errors
    #[error("invalid {format} in config file {}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        format: ConfigFormat,
        message: String,
    },

    #[error("config root must be an object, found {found}")]
    NotAnObject { found: &'static str },
}

impl ConfigError {
    /// Whether the error means the config file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
