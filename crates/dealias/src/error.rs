use dealias_config::ConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ResolveError>;

/// Errors that can stop a resolution.
///
/// Missing aliases, a missing `baseUrl` or a target file that does not exist
/// are not errors; they resolve to a best-effort path.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The config file could not be read or parsed
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A required input was empty
    #[error("{0} must not be empty")]
    EmptyInput(&'static str),
}
