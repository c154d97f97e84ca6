//! Resolve aliased AMD module references to file paths.
//!
//! Given a dependency string as it appears in a `define`/`require` call, the
//! file that contains it and an optional loader configuration, compute the
//! path the loader would fetch. Plugin prefixes (`text!`, `hgn!`) are
//! discarded, `map` and `paths` aliases are applied, and relative or
//! absolute-style ids are resolved the way the loader does.
//!
//! Nothing here touches the filesystem except reading a config file when one
//! is given by path. A resolved path that does not exist is still returned.
//!
//! # Example
//!
//! ```
//! use dealias::{LoaderConfig, ResolveRequest, resolve};
//!
//! let config = LoaderConfig::new()
//!     .with_base_url("js")
//!     .with_path("jquery", "vendor/jquery.min.js");
//!
//! let request = ResolveRequest::new("jquery", "js/subdir/a.js").with_config(config);
//! assert_eq!(resolve(&request).unwrap(), "js/vendor/jquery.min.js");
//! ```

pub mod error;
pub mod module_id;
pub mod normalize;
pub mod path_ops;
pub mod plugin;
pub mod request;
pub mod resolver;

// Re-export commonly used types
pub use error::{ResolveError, Result};
pub use normalize::Normalizer;
pub use request::{ConfigSource, ResolveRequest};
pub use resolver::{Resolver, resolve};

pub use dealias_config::{
    ConfigError, ConfigFormat, ConfigReader, EffectiveConfig, FsConfigReader, LoaderConfig,
    MemoryConfigReader, PathTarget,
};
