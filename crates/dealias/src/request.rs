//! Inputs of a single resolution.

use std::path::PathBuf;

use dealias_config::LoaderConfig;

/// Where the loader config comes from.
#[derive(Debug, Clone, Default)]
pub enum ConfigSource {
    /// No config: no aliases, `baseUrl` derived from the request.
    #[default]
    None,
    /// Read through the resolver's [`ConfigReader`](dealias_config::ConfigReader).
    File(PathBuf),
    /// Already parsed by the caller.
    Parsed(LoaderConfig),
}

impl From<LoaderConfig> for ConfigSource {
    fn from(config: LoaderConfig) -> Self {
        ConfigSource::Parsed(config)
    }
}

impl From<PathBuf> for ConfigSource {
    fn from(path: PathBuf) -> Self {
        ConfigSource::File(path)
    }
}

#[derive(Debug, Clone)]
pub struct ResolveRequest {
    pub config: ConfigSource,

    /// Location of the config file when `config` is already parsed. Used to
    /// derive the base directory when the config has no `baseUrl`.
    pub config_path: Option<PathBuf>,

    /// The dependency as written, e.g. `text!templates/a.html`
    pub partial: String,

    /// The file containing the dependency
    pub filename: String,

    /// Root used instead of the requester's directory when no config is given
    pub directory: Option<String>,
}

impl ResolveRequest {
    pub fn new(partial: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            config: ConfigSource::None,
            config_path: None,
            partial: partial.into(),
            filename: filename.into(),
            directory: None,
        }
    }

    pub fn with_config(mut self, config: LoaderConfig) -> Self {
        self.config = ConfigSource::Parsed(config);
        self
    }

    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config = ConfigSource::File(path.into());
        self
    }

    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn with_directory(mut self, directory: impl Into<String>) -> Self {
        self.directory = Some(directory.into());
        self
    }
}
