//! Reading loader configs from files.
//!
//! Resolution only needs "give me the config at this path". That narrow
//! contract is the [`ConfigReader`] trait, so callers can swap the filesystem
//! for in-memory fixtures.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::config::{LoaderConfig, value_kind};
use crate::error::{ConfigError, Result};
use crate::js_object::config_object;

/// Source a [`LoaderConfig`] by path.
pub trait ConfigReader {
    /// # Errors
    ///
    /// Returns `ConfigError::Io` when the file cannot be read and
    /// `ConfigError::Parse` when its contents are not a valid config.
    fn read(&self, path: &Path) -> Result<LoaderConfig>;
}

impl<R: ConfigReader + ?Sized> ConfigReader for &R {
    fn read(&self, path: &Path) -> Result<LoaderConfig> {
        (**self).read(path)
    }
}

impl<R: ConfigReader + ?Sized> ConfigReader for Box<R> {
    fn read(&self, path: &Path) -> Result<LoaderConfig> {
        (**self).read(path)
    }
}

/// Syntax of a config file, decided by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
    /// CommonJS or AMD script holding a config object literal.
    Script,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Script,
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConfigFormat::Json => "JSON",
            ConfigFormat::Toml => "TOML",
            ConfigFormat::Script => "JavaScript",
        })
    }
}

/// Reads config files from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsConfigReader;

impl ConfigReader for FsConfigReader {
    fn read(&self, path: &Path) -> Result<LoaderConfig> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let format = ConfigFormat::from_path(path);
        debug!(path = %path.display(), %format, "read loader config");
        parse_str(&content, format, path)
    }
}

/// Parse config file contents.
///
/// `path` is only used for error messages.
pub fn parse_str(content: &str, format: ConfigFormat, path: &Path) -> Result<LoaderConfig> {
    let parse_error = |message: String| ConfigError::Parse {
        path: path.to_path_buf(),
        format,
        message,
    };

    let value: Value = match format {
        ConfigFormat::Json => serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?,
        ConfigFormat::Toml => {
            let toml_val: toml::Value =
                toml::from_str(content).map_err(|e| parse_error(format!("Invalid TOML syntax: {e}")))?;
            serde_json::to_value(toml_val)
                .map_err(|e| parse_error(format!("TOML to JSON conversion failed: {e}")))?
        }
        ConfigFormat::Script => config_object(content, path).map_err(parse_error)?,
    };

    if !value.is_object() {
        return Err(parse_error(format!(
            "expected an object at the top level, found {}",
            value_kind(&value)
        )));
    }

    LoaderConfig::from_value(value)
}

/// In-memory configs keyed by path.
///
/// # Example
///
/// ```
/// use dealias_config::{ConfigReader, LoaderConfig, MemoryConfigReader};
/// use std::path::Path;
///
/// let reader = MemoryConfigReader::new()
///     .with("/app/config.json", LoaderConfig::new().with_base_url("js"));
///
/// let config = reader.read(Path::new("/app/config.json")).unwrap();
/// assert_eq!(config.base_url.as_deref(), Some("js"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigReader {
    configs: HashMap<PathBuf, LoaderConfig>,
}

impl MemoryConfigReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, config: LoaderConfig) {
        self.configs.insert(path.into(), config);
    }

    pub fn with(mut self, path: impl Into<PathBuf>, config: LoaderConfig) -> Self {
        self.insert(path, config);
        self
    }
}

impl ConfigReader for MemoryConfigReader {
    fn read(&self, path: &Path) -> Result<LoaderConfig> {
        self.configs
            .get(path)
            .cloned()
            .ok_or_else(|| ConfigError::Io {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "no config registered for path"),
            })
    }
}
