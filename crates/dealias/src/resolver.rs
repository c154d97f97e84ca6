//! Top-level resolution.
//!
//! The resolver settles the effective `baseUrl`, splits the requesting file
//! path into the part before `baseUrl` (the resolution root) and the rest,
//! strips the plugin tag, normalizes, and joins the result back onto the root.

use std::borrow::Cow;
use std::path::Path;

use dealias_config::{ConfigReader, FsConfigReader, LoaderConfig};
use tracing::debug;

use crate::error::{ResolveError, Result};
use crate::normalize::Normalizer;
use crate::path_ops::{dirname, has_extension, is_url, join};
use crate::plugin::split_plugin;
use crate::request::{ConfigSource, ResolveRequest};

/// Resolve with the filesystem config reader.
///
/// See [`Resolver::resolve`].
pub fn resolve(request: &ResolveRequest) -> Result<String> {
    Resolver::new().resolve(request)
}

#[derive(Debug, Clone, Default)]
pub struct Resolver<R = FsConfigReader> {
    reader: R,
}

impl Resolver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: ConfigReader> Resolver<R> {
    /// Use a custom source for config files.
    pub fn with_reader(reader: R) -> Self {
        Self { reader }
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    /// Compute the path the loader would fetch for `request.partial`.
    ///
    /// # Errors
    ///
    /// Only fails when the dependency or filename is empty, or when a config
    /// file was given and could not be read or parsed. Missing aliases and
    /// non-existent targets still produce a path.
    pub fn resolve(&self, request: &ResolveRequest) -> Result<String> {
        if request.filename.is_empty() {
            return Err(ResolveError::EmptyInput("filename"));
        }

        let (plugin, dependency) = split_plugin(&request.partial);
        if dependency.is_empty() {
            return Err(ResolveError::EmptyInput("dependency"));
        }
        if let Some(plugin) = plugin {
            debug!(plugin, dependency, "stripped loader plugin");
        }

        let (config, config_dir) = self.load_config(request)?;

        let fallback_base = match (&config_dir, &request.config, &request.directory) {
            (Some(dir), _, _) => dir.as_str(),
            (None, ConfigSource::None, Some(directory)) => directory.as_str(),
            _ => dirname(&request.filename),
        };

        let effective = config.materialize(fallback_base);
        let base_url = effective.base_url();
        debug!(base_url, "effective baseUrl");

        let root = resolution_root(&request.filename, base_url);
        let requester = &request.filename[root.len()..];

        let normalized = Normalizer::new(&effective).normalize(dependency, requester);
        let resolved = if is_url(&normalized) {
            normalized
        } else {
            join(root, &normalized)
        };
        debug!(partial = %request.partial, filename = %request.filename, %resolved, "resolved dependency");

        Ok(resolved)
    }

    fn load_config<'r>(
        &self,
        request: &'r ResolveRequest,
    ) -> Result<(Cow<'r, LoaderConfig>, Option<String>)> {
        match &request.config {
            ConfigSource::File(path) => {
                let config = self.reader.read(path)?;
                Ok((Cow::Owned(config), Some(parent_dir(path))))
            }
            ConfigSource::Parsed(config) => Ok((
                Cow::Borrowed(config),
                request.config_path.as_deref().map(config_dir),
            )),
            ConfigSource::None => Ok((Cow::Owned(LoaderConfig::default()), None)),
        }
    }
}

/// The part of `filename` before the first occurrence of `base_url`.
///
/// A leading `./` on the base URL is ignored for the search. Empty when the
/// base URL does not occur.
pub fn resolution_root<'a>(filename: &'a str, base_url: &str) -> &'a str {
    let needle = base_url.strip_prefix("./").unwrap_or(base_url);
    if needle.is_empty() {
        return "";
    }
    match filename.find(needle) {
        Some(idx) => &filename[..idx],
        None => "",
    }
}

fn parent_dir(path: &Path) -> String {
    path.parent()
        .map(|parent| parent.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// `config_path` may name the config file or its directory. Without touching
/// the disk, a final segment with an extension is taken to be the file.
fn config_dir(path: &Path) -> String {
    let path_str = path.to_string_lossy();
    if path.file_name().is_some() && has_extension(&path_str) {
        parent_dir(path)
    } else {
        path_str.into_owned()
    }
}
