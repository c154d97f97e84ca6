//! Logging infrastructure for the dealias CLI.
//!
//! Logs go to stderr so that stdout carries only the resolved path. By
//! default only warnings are shown; `--verbose` traces every resolution step.
//!
//! # Example
//!
//! ```rust,no_run
//! use dealias_cli::logger::init_logger;
//! use tracing::debug;
//!
//! init_logger(true, false, false);
//!
//! debug!("resolving {}", "jquery");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used for `--verbose`.
pub const VERBOSE_FILTER: &str = "dealias=debug,dealias_config=debug,dealias_cli=debug";

/// Filter used for `--quiet`.
pub const QUIET_FILTER: &str = "dealias=error,dealias_config=error,dealias_cli=error";

/// Filter used when neither flag nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "dealias=warn,dealias_config=warn,dealias_cli=warn";

/// Initialize the tracing subscriber with the specified options.
///
/// The logging level is determined in this order:
/// 1. `--verbose` flag: DEBUG for dealias crates
/// 2. `--quiet` flag: ERROR only
/// 3. `RUST_LOG` environment variable: custom filter
/// 4. Default: WARN for dealias crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(filter_for(verbose, quiet), no_color);
}

/// Initialize logger with custom environment filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    // A subscriber may already be installed when embedded or under test.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Check if colored output should be enabled.
///
/// # Environment Variables
///
/// - `NO_COLOR`: If set, disables colors
/// - `FORCE_COLOR`: If set, forces colors even in non-TTY
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    // Logs are written to stderr, so that is the terminal that matters
    console::Term::stderr().features().colors_supported()
}
