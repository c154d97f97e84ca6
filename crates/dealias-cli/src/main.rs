//! dealias CLI entry point.
//!
//! Parses arguments, sets up logging, resolves, and reports errors with miette.

use clap::Parser;
use dealias_cli::{cli, commands, error, logger};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let no_color = args.no_color || !logger::should_use_colors();
    logger::init_logger(args.verbose, args.quiet, no_color);

    commands::run(&args).map_err(error::cli_error_to_miette)
}
