//! Placeholder substitution for page templates.
//!
//! Templates declare substitution points with the marker syntax `<? 'key' >`
//! (literal prefix `<? '`, the key's exact characters, literal suffix `' >`).
//! The marker is deliberately minimal so templates stay plain text with no
//! full templating grammar.

/// Replace the first occurrence of the marker `<? 'key' >` with `value`.
///
/// Scans `text` left to right for the exact marker string and rewrites only
/// the leftmost match. Matching is case-sensitive with no whitespace
/// normalization; if no marker for `key` exists the text is returned
/// unchanged. Absence is silent.
///
/// Callers needing multiple substitutions of the same key call this
/// repeatedly, reassigning the result each time; every call re-scans the
/// rewritten text from the beginning.
///
/// # Examples
///
/// ```rust
/// use pagekit::templating::place_value;
///
/// let text = "Hello, <? 'name' >!";
/// assert_eq!(place_value("name", "World", text), "Hello, World!");
/// ```
pub fn place_value(key: &str, value: &str, text: &str) -> String {
    let marker = format!("<? '{key}' >");
    debug_assert_eq!(marker.len(), 7 + key.len());
    text.replacen(&marker, value, 1)
}
