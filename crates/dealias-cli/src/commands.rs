//! Resolve a dependency and print the result.

use std::io::Write;

use dealias::{ResolveRequest, resolve};
use serde_json::json;
use tracing::debug;

use crate::cli::Cli;
use crate::error::{Result, ResultExt};
use crate::settings::Settings;

/// Run the CLI: resolve and write the result to stdout.
pub fn run(args: &Cli) -> Result<()> {
    let output = execute(args)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{output}").context("Failed to write resolved path")?;
    Ok(())
}

/// Resolve the dependency described by `args` and render the output line.
pub fn execute(args: &Cli) -> Result<String> {
    let settings = Settings::load(args)?;
    let request = build_request(args, &settings);
    debug!(?request, "resolving");

    let resolved = resolve(&request)?;
    render(args, &resolved)
}

/// Translate CLI arguments and settings into a [`ResolveRequest`].
pub fn build_request(args: &Cli, settings: &Settings) -> ResolveRequest {
    let mut request = ResolveRequest::new(args.dependency.clone(), args.filename.clone());
    if let Some(config) = &settings.config {
        request = request.with_config_file(config);
    }
    if let Some(directory) = &settings.directory {
        request = request.with_directory(directory.clone());
    }
    request
}

fn render(args: &Cli, resolved: &str) -> Result<String> {
    if !args.json {
        return Ok(resolved.to_string());
    }

    let output = json!({
        "dependency": args.dependency,
        "filename": args.filename,
        "resolved": resolved,
    });
    Ok(serde_json::to_string(&output)?)
}
