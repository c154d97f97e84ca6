//! Per-call view of a [`LoaderConfig`] with defaults applied.

use indexmap::IndexMap;

use crate::config::{LoaderConfig, ModuleMap, PathTarget};

/// Base URL used when neither the config nor the caller supply one.
pub const DEFAULT_BASE_URL: &str = "./";

/// A [`LoaderConfig`] with its `baseUrl` decided and normalized.
///
/// Borrowing the alias sections keeps the caller's config untouched; the only
/// thing materialized per call is the base URL.
#[derive(Debug, Clone)]
pub struct EffectiveConfig<'a> {
    base_url: String,
    paths: &'a IndexMap<String, PathTarget>,
    map: &'a ModuleMap,
}

impl LoaderConfig {
    /// Apply defaults for a single resolution.
    ///
    /// `fallback_base` is used when the config has no `baseUrl` of its own.
    pub fn materialize(&self, fallback_base: &str) -> EffectiveConfig<'_> {
        let raw = self.explicit_base_url().unwrap_or(fallback_base);
        EffectiveConfig {
            base_url: normalize_base_url(raw),
            paths: &self.paths,
            map: &self.map,
        }
    }
}

impl<'a> EffectiveConfig<'a> {
    /// Always ends with exactly one `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn paths(&self) -> &'a IndexMap<String, PathTarget> {
        self.paths
    }

    pub fn map(&self) -> &'a ModuleMap {
        self.map
    }
}

/// Give a base URL exactly one trailing separator. Empty means [`DEFAULT_BASE_URL`].
pub fn normalize_base_url(raw: &str) -> String {
    if raw.is_empty() {
        return DEFAULT_BASE_URL.to_string();
    }
    let trimmed = raw.trim_end_matches(['/', '\\']);
    format!("{trimmed}/")
}
