//! Turn a dependency id into a path below the resolution root.
//!
//! Order of application:
//!
//! 1. `map` aliases for the requesting module, then for `*`
//! 2. absolute-style ids (`/x`) against `baseUrl`
//! 3. relative ids (`./x`, `../x`) against the requester's directory
//! 4. `paths` aliases
//! 5. anything else against `baseUrl`
//!
//! A `map` substitution feeds into steps 2-5; it is never mapped twice.
//! `.js` is appended last when the final segment has no extension.

use std::borrow::Cow;

use dealias_config::EffectiveConfig;
use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::module_id::module_id;
use crate::path_ops::{clean, dirname, is_relative, is_url, join, with_default_extension};

/// Wildcard `map` consumer.
pub const ANY_CONSUMER: &str = "*";

/// Maps dependency ids to paths for one effective config.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'c, 'a> {
    config: &'c EffectiveConfig<'a>,
}

impl<'c, 'a> Normalizer<'c, 'a> {
    pub fn new(config: &'c EffectiveConfig<'a>) -> Self {
        Self { config }
    }

    /// Normalize `dependency` as requested from `requester`.
    ///
    /// `requester` is relative to the resolution root (the part of the file
    /// path before `baseUrl` already removed). The result is relative to the
    /// same root and includes `baseUrl` for non-relative ids.
    pub fn normalize(&self, dependency: &str, requester: &str) -> String {
        let consumer = module_id(requester, self.config.base_url());

        let dependency = match self.apply_map(dependency, consumer) {
            Some(mapped) => {
                debug!(from = dependency, to = %mapped, consumer, "applied map alias");
                Cow::Owned(mapped)
            }
            None => Cow::Borrowed(dependency),
        };

        let located = self.locate(&dependency, requester);
        let normalized = with_default_extension(located);
        trace!(dependency = %dependency, %normalized, "normalized dependency");
        normalized
    }

    fn apply_map(&self, dependency: &str, consumer: &str) -> Option<String> {
        let map = self.config.map();

        let specific = longest_segment_match(map, consumer)
            .filter(|(key, _)| *key != ANY_CONSUMER)
            .map(|(_, table)| table);
        let wildcard = map.get(ANY_CONSUMER);

        [specific, wildcard].into_iter().flatten().find_map(|table| {
            longest_segment_match(table, dependency)
                .map(|(key, replacement)| format!("{replacement}{}", &dependency[key.len()..]))
        })
    }

    fn locate(&self, dependency: &str, requester: &str) -> String {
        let base_url = self.config.base_url();

        if let Some(rooted) = dependency.strip_prefix('/') {
            debug!(dependency, base_url, "absolute-style id, resolving against baseUrl");
            return join(base_url, rooted);
        }

        if is_relative(dependency) {
            let directory = dirname(requester);
            debug!(dependency, directory, "relative id, resolving against requester");
            return join(directory, dependency);
        }

        if let Some(aliased) = self.apply_paths(dependency) {
            return aliased;
        }

        join(base_url, dependency)
    }

    fn apply_paths(&self, dependency: &str) -> Option<String> {
        let (alias, target) = longest_segment_match(self.config.paths(), dependency)?;
        let target = target.primary()?;
        let replaced = format!("{target}{}", &dependency[alias.len()..]);
        debug!(alias, target, %replaced, "applied paths alias");

        if is_url(target) {
            Some(replaced)
        } else if target.starts_with('/') {
            Some(clean(&replaced))
        } else {
            Some(join(self.config.base_url(), &replaced))
        }
    }
}

/// Longest key equal to `id` or to a run of its leading segments.
fn longest_segment_match<'t, V>(
    table: &'t IndexMap<String, V>,
    id: &str,
) -> Option<(&'t str, &'t V)> {
    table
        .iter()
        .filter(|(key, _)| !key.is_empty() && is_segment_prefix(id, key))
        .max_by_key(|(key, _)| key.len())
        .map(|(key, value)| (key.as_str(), value))
}

fn is_segment_prefix(id: &str, key: &str) -> bool {
    id.strip_prefix(key)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}
