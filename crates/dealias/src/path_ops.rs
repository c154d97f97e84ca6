//! Lexical path helpers.
//!
//! Module ids and config values use `/` whatever the platform, so these work
//! on strings and only hand off to `path-clean` for `.`/`..` folding.

use std::path::Path;

use path_clean::PathClean;

/// Fold `.` and `..` components. An empty path stays empty.
pub fn clean(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }
    Path::new(path).clean().to_string_lossy().into_owned()
}

/// Join two fragments and normalize the result.
///
/// Unlike [`Path::join`], a leading `/` on `rest` does not discard `base`.
pub fn join(base: &str, rest: &str) -> String {
    match (base.is_empty(), rest.is_empty()) {
        (true, _) => clean(rest),
        (_, true) => clean(base),
        _ => clean(&format!(
            "{}/{}",
            base.trim_end_matches('/'),
            rest.trim_start_matches('/')
        )),
    }
}

/// Everything before the last `/`.
pub fn dirname(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) => "/",
        Some(idx) => &path[..idx],
        None => "",
    }
}

/// `./x`, `../x`, `.` or `..`.
pub fn is_relative(id: &str) -> bool {
    id == "." || id == ".." || id.starts_with("./") || id.starts_with("../")
}

pub fn is_url(target: &str) -> bool {
    target.contains("://")
}

/// Whether the final segment contains a `.`.
///
/// This is a heuristic: `jquery.min`, `lodash.debounce` and `.hidden` all
/// count as having an extension.
pub fn has_extension(path: &str) -> bool {
    path.rsplit('/').next().is_some_and(|segment| segment.contains('.'))
}

/// Append `.js` unless the path already has an extension or a query string.
pub fn with_default_extension(mut path: String) -> String {
    if path.is_empty() || path.contains('?') || has_extension(&path) {
        return path;
    }
    path.push_str(".js");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_folds_parent_segments() {
        assert_eq!(join("js/subdir/subsubdir", "../../b"), "js/b");
        assert_eq!(join("js/", "./a"), "js/a");
        assert_eq!(join("js/", "../templates/a"), "templates/a");
    }

    #[test]
    fn join_keeps_base_for_rooted_rest() {
        assert_eq!(join("/mnt", "/p/js/b.js"), "/mnt/p/js/b.js");
        assert_eq!(join("/", "b.js"), "/b.js");
    }

    #[test]
    fn join_with_empty_side() {
        assert_eq!(join("", "js/b.js"), "js/b.js");
        assert_eq!(join("", "./b.js"), "b.js");
        assert_eq!(join("/srv/", ""), "/srv");
        assert_eq!(join("", ""), "");
    }

    #[test]
    fn dirname_variants() {
        assert_eq!(dirname("js/subdir/a.js"), "js/subdir");
        assert_eq!(dirname("/a.js"), "/");
        assert_eq!(dirname("a.js"), "");
    }

    #[test]
    fn relative_detection() {
        assert!(is_relative("./a"));
        assert!(is_relative("../a"));
        assert!(is_relative(".."));
        assert!(!is_relative(".hidden/a"));
        assert!(!is_relative("a/./b"));
        assert!(!is_relative("/a"));
    }

    #[test]
    fn extension_heuristic() {
        assert!(has_extension("vendor/jquery.min.js"));
        assert!(has_extension("templates/a.mustache"));
        assert!(has_extension("vendor/jquery.min"));
        assert!(!has_extension("vendor/jquery"));
        assert!(!has_extension("dir.with.dots/module"));
        assert!(has_extension("config/.hidden"));
        assert!(!has_extension("config/"));
    }

    #[test]
    fn default_extension_only_when_missing() {
        assert_eq!(with_default_extension("js/b".into()), "js/b.js");
        assert_eq!(with_default_extension("js/b.css".into()), "js/b.css");
        assert_eq!(
            with_default_extension("vendor/jquery.min.js".into()),
            "vendor/jquery.min.js"
        );
        assert_eq!(with_default_extension("api/data?v=2".into()), "api/data?v=2");
        assert_eq!(with_default_extension("js/.hidden".into()), "js/.hidden");
    }
}
