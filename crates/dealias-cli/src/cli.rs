//! Command-line interface definition.

use clap::Parser;
use clap::builder::NonEmptyStringValueParser;
use std::path::PathBuf;

/// dealias - find the file an AMD dependency resolves to
#[derive(Parser, Debug)]
#[command(
    name = "dealias",
    version,
    about = "Resolve an aliased AMD module reference to a file path",
    long_about = "Resolves a dependency as written in a define()/require() call to the file the\n\
                  loader would fetch, honoring baseUrl, paths and map from a loader config.\n\
                  Plugin prefixes such as text! or hgn! are ignored. The resolved file does\n\
                  not have to exist."
)]
pub struct Cli {
    /// Dependency to resolve, as written in the source
    ///
    /// Examples:
    ///   dealias jquery -f js/app.js -c config.json
    ///   dealias 'text!templates/a.html' -f js/views/home.js
    #[arg(value_name = "DEPENDENCY", value_parser = NonEmptyStringValueParser::new())]
    pub dependency: String,

    /// Loader config file (JSON, TOML, or a script with a config object)
    ///
    /// Falls back to the DEALIAS_CONFIG environment variable.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// File that contains the dependency
    #[arg(short, long, value_name = "FILE", value_parser = NonEmptyStringValueParser::new())]
    pub filename: String,

    /// Root directory to resolve against when no config is given
    ///
    /// Falls back to the DEALIAS_DIRECTORY environment variable.
    #[arg(short, long, value_name = "DIR")]
    pub directory: Option<String>,

    /// Print a JSON object instead of the bare path
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging (debug level, on stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all logging except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
