//! Settings that may come from flags or the environment.
//!
//! Priority: CLI args > environment variables (`DEALIAS_*`) > defaults

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::{Result, ResultExt};

/// Prefix of the environment variables read by [`Settings::load`].
pub const ENV_PREFIX: &str = "DEALIAS_";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Loader config file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<PathBuf>,

    /// Root directory used when no config is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
}

impl Settings {
    /// Combine CLI flags with `DEALIAS_CONFIG` / `DEALIAS_DIRECTORY`.
    pub fn load(args: &Cli) -> Result<Self> {
        let from_args = Settings {
            config: args.config.clone(),
            directory: args.directory.clone(),
        };

        let settings: Settings = Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Env::prefixed(ENV_PREFIX).only(&["config", "directory"]))
            .merge(Serialized::defaults(from_args))
            .extract()
            .with_hint("DEALIAS_CONFIG and DEALIAS_DIRECTORY must be plain paths")?;

        Ok(settings.without_empty())
    }

    /// An empty environment variable counts as unset.
    fn without_empty(self) -> Self {
        Self {
            config: self.config.filter(|path| !path.as_os_str().is_empty()),
            directory: self.directory.filter(|dir| !dir.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn empty_values_are_dropped() {
        let settings = Settings {
            config: Some(PathBuf::new()),
            directory: Some(String::new()),
        }
        .without_empty();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn flags_are_carried_over() {
        figment::Jail::expect_with(|_jail| {
            let cli = Cli::parse_from(["dealias", "a", "-f", "a.js", "-c", "cfg.json", "-d", "lib"]);
            let settings = Settings::load(&cli).unwrap();
            assert_eq!(settings.config, Some(PathBuf::from("cfg.json")));
            assert_eq!(settings.directory.as_deref(), Some("lib"));
            Ok(())
        });
    }

    #[test]
    fn environment_fills_missing_flags() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("DEALIAS_CONFIG", "env-config.json");
            jail.set_env("DEALIAS_DIRECTORY", "env-root");

            let cli = Cli::parse_from(["dealias", "a", "-f", "a.js"]);
            let settings = Settings::load(&cli).unwrap();
            assert_eq!(settings.config, Some(PathBuf::from("env-config.json")));
            assert_eq!(settings.directory.as_deref(), Some("env-root"));
            Ok(())
        });
    }

    #[test]
    fn flags_override_environment() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("DEALIAS_CONFIG", "env-config.json");

            let cli = Cli::parse_from(["dealias", "a", "-f", "a.js", "--config", "flag.json"]);
            let settings = Settings::load(&cli).unwrap();
            assert_eq!(settings.config, Some(PathBuf::from("flag.json")));
            Ok(())
        });
    }
}
