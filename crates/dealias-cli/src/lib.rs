//! dealias CLI - resolve aliased AMD module references from the shell.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`settings`] - CLI / environment layering with figment
//! - [`commands`] - Resolution and output
//! - [`error`] - Error types and miette reporting
//! - [`logger`] - Structured logging with tracing
//!
//! # Example
//!
//! ```rust,no_run
//! use clap::Parser;
//! use dealias_cli::{cli::Cli, commands};
//!
//! let args = Cli::parse_from(["dealias", "jquery", "--filename", "js/a.js"]);
//! let resolved = commands::execute(&args).unwrap();
//! println!("{resolved}");
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod settings;

// Re-export commonly used types
pub use error::{CliError, Result, ResultExt};
