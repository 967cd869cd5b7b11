//! Colon-delimited configuration paths.
//!
//! A path joins the keys of every ancestor from the root down to a node,
//! e.g. `Logging:LogLevel:Default`. Paths compare case-insensitively.

/// Separator between the keys of a configuration path.
pub const KEY_DELIMITER: char = ':';

/// Join a parent path and a child key.
///
/// # Examples
///
/// ```rust
/// use config_provenance::core::path;
///
/// assert_eq!(path::combine(None, "Logging"), "Logging");
/// assert_eq!(path::combine(Some("Logging"), "LogLevel"), "Logging:LogLevel");
/// ```
pub fn combine(parent: Option<&str>, key: &str) -> String {
    match parent {
        Some(parent) if !parent.is_empty() => {
            let mut path = String::with_capacity(parent.len() + 1 + key.len());
            path.push_str(parent);
            path.push(KEY_DELIMITER);
            path.push_str(key);
            path
        }
        _ => key.to_string(),
    }
}

/// Split a path into its keys.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(KEY_DELIMITER)
}

/// Case-insensitive equality of two keys or paths.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Case-insensitive prefix test.
///
/// This is a plain string prefix: `Logging` matches `LoggingExtras` as well
/// as `Logging:LogLevel`.
pub fn starts_with_ignore_case(path: &str, prefix: &str) -> bool {
    let mut path_chars = path.chars().flat_map(char::to_lowercase);
    prefix
        .chars()
        .flat_map(char::to_lowercase)
        .all(|expected| path_chars.next() == Some(expected))
}

/// Normalized form used to index paths.
pub(crate) fn normalize(path: &str) -> String {
    path.to_lowercase()
}
