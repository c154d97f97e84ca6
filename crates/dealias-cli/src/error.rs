//! Error handling for the dealias CLI.
//!
//! Resolution itself almost never fails: missing aliases produce a best-effort
//! path. What can fail is reading the config file, layering settings, and
//! writing output. Those cases are collected in [`CliError`] and rendered with
//! miette at the binary boundary (see [`report`]).

pub mod report;

use thiserror::Error;

use dealias::ResolveError;
use dealias_config::ConfigError;

pub use report::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Config file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Resolution rejected its inputs
    #[error("Resolution error: {0}")]
    Resolve(ResolveError),

    /// CLI / environment settings could not be combined
    #[error("Invalid settings: {0}")]
    Settings(#[from] Box<figment::Error>),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

impl From<ResolveError> for CliError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::Config(config) => CliError::Config(config),
            other => CliError::Resolve(other),
        }
    }
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        CliError::Settings(Box::new(err))
    }
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Add a helpful hint to the error.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use dealias_cli::error::{CliError, Result, ResultExt};
    /// let result: Result<()> = Err(CliError::Custom("bad value".into()));
    /// let err = result.with_hint("Check DEALIAS_DIRECTORY").unwrap_err();
    /// assert!(err.to_string().ends_with("Hint: Check DEALIAS_DIRECTORY"));
    /// ```
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T>;

    /// Prefix the error with what was being attempted.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}\n\nHint: {}", err, hint))
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}
