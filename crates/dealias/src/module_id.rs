//! Module ids of requesting files.
//!
//! `map` entries are keyed by the id of the consuming module, which is its
//! path below `baseUrl` without the `.js` suffix.

/// Module id of `file`, a path relative to the resolution root.
///
/// ```
/// use dealias::module_id::module_id;
///
/// assert_eq!(module_id("js/app/main.js", "js/"), "app/main");
/// assert_eq!(module_id("lib/util.js", "./"), "lib/util");
/// ```
pub fn module_id<'a>(file: &'a str, base_url: &str) -> &'a str {
    let base = base_url.strip_prefix("./").unwrap_or(base_url);
    let file = file.strip_prefix("./").unwrap_or(file);
    let below_base = if base.is_empty() {
        file
    } else {
        file.strip_prefix(base).unwrap_or(file)
    };
    below_base.strip_suffix(".js").unwrap_or(below_base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_outside_base_keeps_full_path() {
        assert_eq!(module_id("other/a.js", "js/"), "other/a");
    }

    #[test]
    fn non_js_suffix_is_kept() {
        assert_eq!(module_id("js/templates/a.mustache", "js/"), "templates/a.mustache");
    }

    #[test]
    fn absolute_base_matches_absolute_file() {
        assert_eq!(module_id("/srv/app/js/main.js", "/srv/app/js/"), "main");
    }
}
