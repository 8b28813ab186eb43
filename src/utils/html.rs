//! HTML entity escaping for attribute values.

use std::borrow::Cow;

/// Characters that require HTML escaping.
const ESCAPE_CHARS: [char; 5] = ['&', '<', '>', '"', '\''];

/// Get the HTML entity for a special character.
#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape HTML special characters for use inside a quoted attribute.
///
/// Each source character is mapped exactly once, so entities produced here
/// are never escaped a second time. Uses `Cow` to avoid allocation when no
/// escaping is needed.
///
/// # Example
/// ```ignore
/// assert_eq!(escape_attr("Tom & Jerry"), "Tom &amp; Jerry");
/// assert_eq!(escape_attr("hello"), "hello"); // No allocation
/// ```
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    if !s.contains(ESCAPE_CHARS) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}
