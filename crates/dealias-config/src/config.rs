//! The loader configuration as written by users.
//!
//! Only `baseUrl`, `paths` and `map` influence resolution. Everything else a
//! loader config may carry (`shim`, `deps`, `waitSeconds`, ...) is ignored.
//! Parsing is deliberately forgiving: a section with the wrong shape is
//! dropped with a debug log instead of failing the whole config.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{ConfigError, Result as ConfigResult};

/// `map` section: consuming module id (or `*`) to dependency replacements.
pub type ModuleMap = IndexMap<String, IndexMap<String, String>>;

/// Target of a `paths` alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathTarget {
    Single(String),
    /// Fallback locations. Only the first one is used for resolution.
    Fallbacks(Vec<String>),
}

impl PathTarget {
    /// The location resolution uses, if any.
    pub fn primary(&self) -> Option<&str> {
        match self {
            PathTarget::Single(target) => Some(target),
            PathTarget::Fallbacks(targets) => targets.first().map(String::as_str),
        }
    }
}

impl From<&str> for PathTarget {
    fn from(target: &str) -> Self {
        PathTarget::Single(target.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Value")]
pub struct LoaderConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub paths: IndexMap<String, PathTarget>,

    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub map: ModuleMap,
}

impl LoaderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from serde_json::Value (for configs parsed by the caller)
    ///
    /// # Example
    ///
    /// ```
    /// use dealias_config::LoaderConfig;
    /// use serde_json::json;
    ///
    /// let config = LoaderConfig::from_value(json!({
    ///     "baseUrl": "js",
    ///     "paths": { "jquery": "vendor/jquery.min.js" }
    /// }))
    /// .unwrap();
    ///
    /// assert_eq!(config.base_url.as_deref(), Some("js"));
    /// assert_eq!(config.paths["jquery"].primary(), Some("vendor/jquery.min.js"));
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        match value {
            Value::Object(object) => Ok(Self::from_object(object)),
            other => Err(ConfigError::NotAnObject {
                found: value_kind(&other),
            }),
        }
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Value {
        // Only strings and maps of strings, serialization cannot fail.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_path(mut self, alias: impl Into<String>, target: impl Into<String>) -> Self {
        self.paths
            .insert(alias.into(), PathTarget::Single(target.into()));
        self
    }

    pub fn with_map(
        mut self,
        consumer: impl Into<String>,
        dependency: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        self.map
            .entry(consumer.into())
            .or_default()
            .insert(dependency.into(), replacement.into());
        self
    }

    /// The configured `baseUrl`, treating an empty string as unset.
    pub fn explicit_base_url(&self) -> Option<&str> {
        self.base_url.as_deref().filter(|base| !base.is_empty())
    }

    fn from_object(mut object: Map<String, Value>) -> Self {
        let base_url = match object.remove("baseUrl") {
            Some(Value::String(base)) => Some(base),
            None | Some(Value::Null) => None,
            Some(other) => {
                debug!("ignoring baseUrl of type {}", value_kind(&other));
                None
            }
        };

        let paths = match object.remove("paths") {
            Some(Value::Object(entries)) => entries
                .into_iter()
                .filter_map(|(alias, target)| match target {
                    Value::String(target) => Some((alias, PathTarget::Single(target))),
                    Value::Array(targets) => Some((
                        alias,
                        PathTarget::Fallbacks(
                            targets
                                .into_iter()
                                .filter_map(|t| match t {
                                    Value::String(t) => Some(t),
                                    _ => None,
                                })
                                .collect(),
                        ),
                    )),
                    other => {
                        debug!(alias = %alias, "ignoring paths entry of type {}", value_kind(&other));
                        None
                    }
                })
                .collect(),
            None | Some(Value::Null) => IndexMap::new(),
            Some(other) => {
                debug!("ignoring paths section of type {}", value_kind(&other));
                IndexMap::new()
            }
        };

        let map = match object.remove("map") {
            Some(Value::Object(consumers)) => consumers
                .into_iter()
                .filter_map(|(consumer, table)| match table {
                    Value::Object(table) => Some((consumer, string_entries(table))),
                    other => {
                        debug!(consumer = %consumer, "ignoring map entry of type {}", value_kind(&other));
                        None
                    }
                })
                .collect(),
            None | Some(Value::Null) => IndexMap::new(),
            Some(other) => {
                debug!("ignoring map section of type {}", value_kind(&other));
                IndexMap::new()
            }
        };

        Self {
            base_url,
            paths,
            map,
        }
    }
}

impl TryFrom<Value> for LoaderConfig {
    type Error = ConfigError;

    fn try_from(value: Value) -> ConfigResult<Self> {
        Self::from_value(value)
    }
}

fn string_entries(table: Map<String, Value>) -> IndexMap<String, String> {
    table
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::String(value) => Some((key, value)),
            _ => None,
        })
        .collect()
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_value_reads_all_sections() {
        let config = LoaderConfig::from_value(json!({
            "baseUrl": "js/",
            "paths": {
                "jquery": "vendor/jquery.min.js",
                "lodash": ["vendor/lodash", "https://cdn.example.com/lodash"]
            },
            "map": {
                "*": { "foobar": "b" },
                "app/main": { "util": "app/util-v2" }
            }
        }))
        .unwrap();

        assert_eq!(config.base_url.as_deref(), Some("js/"));
        assert_eq!(config.paths["jquery"].primary(), Some("vendor/jquery.min.js"));
        assert_eq!(config.paths["lodash"].primary(), Some("vendor/lodash"));
        assert_eq!(config.map["*"]["foobar"], "b");
        assert_eq!(config.map["app/main"]["util"], "app/util-v2");
    }

    #[test]
    fn from_value_ignores_unknown_keys() {
        let config = LoaderConfig::from_value(json!({
            "shim": { "backbone": { "deps": ["underscore"] } },
            "waitSeconds": 15
        }))
        .unwrap();

        assert_eq!(config, LoaderConfig::default());
    }

    #[test]
    fn malformed_sections_are_dropped() {
        let config = LoaderConfig::from_value(json!({
            "baseUrl": 42,
            "paths": ["not", "a", "map"],
            "map": { "*": "oops", "app": { "a": "b", "n": 1 } }
        }))
        .unwrap();

        assert_eq!(config.base_url, None);
        assert!(config.paths.is_empty());
        assert!(!config.map.contains_key("*"));
        assert_eq!(config.map["app"].len(), 1);
    }

    #[test]
    fn from_value_rejects_non_objects() {
        let err = LoaderConfig::from_value(json!(["baseUrl"])).unwrap_err();
        assert!(matches!(err, ConfigError::NotAnObject { found: "array" }));
    }

    #[test]
    fn empty_fallback_list_has_no_primary() {
        let target = PathTarget::Fallbacks(vec![]);
        assert_eq!(target.primary(), None);
    }

    #[test]
    fn empty_base_url_counts_as_unset() {
        let config = LoaderConfig::new().with_base_url("");
        assert_eq!(config.explicit_base_url(), None);
    }

    #[test]
    fn deserialize_goes_through_lenient_path() {
        let config: LoaderConfig =
            serde_json::from_str(r#"{"baseUrl": "lib", "paths": {"x": 1}}"#).unwrap();
        assert_eq!(config.base_url.as_deref(), Some("lib"));
        assert!(config.paths.is_empty());
    }

    #[test]
    fn deserialize_rejects_non_object_root() {
        let err = serde_json::from_str::<LoaderConfig>(r#"["baseUrl", "js"]"#).unwrap_err();
        assert!(err.to_string().contains("must be an object, found array"));

        let err = serde_json::from_str::<LoaderConfig>("null").unwrap_err();
        assert!(err.to_string().contains("found null"));
    }

    #[test]
    fn to_value_uses_loader_key_names() {
        let value = LoaderConfig::new()
            .with_base_url("js/")
            .with_map("*", "foobar", "b")
            .to_value();

        assert_eq!(value["baseUrl"], json!("js/"));
        assert_eq!(value["map"]["*"]["foobar"], json!("b"));
        assert!(value.get("paths").is_none());
    }
}
