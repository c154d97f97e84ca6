//! Loader configuration for dealias.
//!
//! An AMD loader configuration carries three optional sections that affect
//! where a module id ends up on disk: `baseUrl`, `paths` and `map`. This crate
//! models them, fills in the documented defaults, and reads them from JSON,
//! TOML or CommonJS/AMD-style script files.
//!
//! Library users holding an already-parsed value should use
//! [`LoaderConfig::from_value`]; file-based loading goes through a
//! [`ConfigReader`].

pub mod config;
pub mod effective;
pub mod error;
pub mod reader;

mod js_object;

// Re-export main types
pub use config::*;
pub use effective::*;
pub use error::*;

pub use reader::{ConfigFormat, ConfigReader, FsConfigReader, MemoryConfigReader, parse_str};
