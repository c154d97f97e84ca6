//! Miette diagnostic conversion for CLI errors.

use dealias_config::{ConfigError, ConfigFormat};
use miette::Report;

use crate::error::CliError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        CliError::Settings(e) => miette::miette!(
            help = "DEALIAS_CONFIG and DEALIAS_DIRECTORY must be plain paths",
            "Invalid settings: {}",
            e
        ),
        _ => miette::miette!("{}", err),
    }
}

/// Convert ConfigError to miette Report
pub fn config_error_to_miette(err: ConfigError) -> Report {
    match &err {
        e if e.is_not_found() => miette::miette!(
            help = "Check the --config path (or DEALIAS_CONFIG)",
            "{}",
            err
        ),
        ConfigError::Parse {
            format: ConfigFormat::Script,
            ..
        } => miette::miette!(
            help = "Script configs are parsed, not run: pass a literal object to require.config(), module.exports, var require or define()",
            "{}",
            err
        ),
        ConfigError::Parse { format, .. } => miette::miette!(
            help = format!("Check the {format} syntax of the config file"),
            "{}",
            err
        ),
        _ => miette::miette!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn not_found_gets_config_hint() {
        let report = config_error_to_miette(ConfigError::Io {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        });
        assert!(report.to_string().contains("missing.json"));
        let help = report.help().map(|h| h.to_string()).unwrap_or_default();
        assert!(help.contains("--config"));
    }

    #[test]
    fn parse_error_gets_syntax_hint() {
        let report = config_error_to_miette(ConfigError::Parse {
            path: PathBuf::from("config.js"),
            format: ConfigFormat::Script,
            message: "expected value".to_string(),
        });
        let help = report.help().map(|h| h.to_string()).unwrap_or_default();
        assert!(help.contains("require.config()"));

        let report = config_error_to_miette(ConfigError::Parse {
            path: PathBuf::from("config.toml"),
            format: ConfigFormat::Toml,
            message: "expected `=`".to_string(),
        });
        let help = report.help().map(|h| h.to_string()).unwrap_or_default();
        assert!(help.contains("TOML syntax"));
    }

    #[test]
    fn other_errors_keep_their_message() {
        let report = cli_error_to_miette(CliError::Custom("boom".to_string()));
        assert_eq!(report.to_string(), "boom");
    }
}
