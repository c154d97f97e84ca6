//! Loader plugin prefixes (`text!templates/a.html`).

/// Split `plugin!resource` at the first `!`.
///
/// ```
/// use dealias::plugin::split_plugin;
///
/// assert_eq!(split_plugin("hgn!templates/a"), (Some("hgn"), "templates/a"));
/// assert_eq!(split_plugin("app/main"), (None, "app/main"));
/// ```
pub fn split_plugin(dependency: &str) -> (Option<&str>, &str) {
    match dependency.split_once('!') {
        Some((plugin, resource)) => (Some(plugin), resource),
        None => (None, dependency),
    }
}

/// The resource part of a dependency, with any plugin tag discarded.
pub fn strip_plugin(dependency: &str) -> &str {
    split_plugin(dependency).1
}
