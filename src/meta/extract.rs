//! Pasted-tag extraction for manual input.

use regex::Regex;
use std::sync::LazyLock;

static RE_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<title>(.*?)</title>").unwrap());

static RE_CONTENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"content=["']([^"']*)["']"#).unwrap());

/// Inner text of a pasted `<title>` or `content="..."` attribute.
///
/// The title pattern is tried first; input matching neither is returned as-is.
///
/// # Example
/// ```ignore
/// assert_eq!(extract_content("<title>Home</title>"), "Home");
/// assert_eq!(extract_content(r#"<meta name="keywords" content="a, b">"#), "a, b");
/// assert_eq!(extract_content("plain text"), "plain text");
/// ```
pub fn extract_content(input: &str) -> String {
    if let Some(caps) = RE_TITLE.captures(input) {
        return caps[1].to_string();
    }
    if let Some(caps) = RE_CONTENT.captures(input) {
        return caps[1].to_string();
    }
    input.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text() {
        assert_eq!(extract_content("Acme – Tools"), "Acme – Tools");
    }

    #[test]
    fn test_title_tag_case_insensitive() {
        assert_eq!(extract_content("<TITLE>Acme</Title>"), "Acme");
    }

    #[test]
    fn test_title_wins_over_content() {
        assert_eq!(
            extract_content(r#"<title>T</title><meta content="C">"#),
            "T"
        );
    }

    #[test]
    fn test_content_single_quotes() {
        assert_eq!(
            extract_content("<meta name='description' content='Fresh food'>"),
            "Fresh food"
        );
    }

    #[test]
    fn test_content_attribute_is_case_sensitive() {
        let input = r#"<meta CONTENT="x">"#;
        assert_eq!(extract_content(input), input);
    }

    #[test]
    fn test_multiline_title_not_extracted() {
        let input = "<title>a\nb</title>";
        assert_eq!(extract_content(input), input);
    }
}
