//! Persisted tag representation.
//!
//! Tags are stored as one comma-joined string. Entries come out of
//! [`SanitizationPipeline::normalize_tags`](crate::SanitizationPipeline::normalize_tags),
//! so a stored value never needs re-sanitization on read.

/// Separator between tags in the stored string.
pub const TAG_SEPARATOR: char = ',';

/// Joins normalized tags into the stored representation.
///
/// # Examples
///
/// ```
/// use article_guard::join_tags;
///
/// let stored = join_tags(&["rust".to_string(), "web".to_string()]);
/// assert_eq!(stored, "rust,web");
/// ```
pub fn join_tags(tags: &[String]) -> String {
    let mut stored = String::with_capacity(tags.iter().map(|t| t.len() + 1).sum());
    for (i, tag) in tags.iter().enumerate() {
        if i > 0 {
            stored.push(TAG_SEPARATOR);
        }
        stored.push_str(tag);
    }
    stored
}

/// Splits a stored tag string back into entries for display.
///
/// Empty segments are skipped, so an empty or missing column yields no tags.
pub fn split_stored_tags(stored: &str) -> Vec<String> {
    stored
        .split(TAG_SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}
