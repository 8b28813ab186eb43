//! Compiled pattern set.
//!
//! Every pattern works on the document as flat text. Case-insensitive
//! throughout; `.` crosses newlines only in the script/comment patterns.

use regex::Regex;
use std::sync::LazyLock;

/// Whole `<title>...</title>` element on a single line.
pub(super) static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<title>.*?</title>").unwrap());

pub(super) static TITLE_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</title>").unwrap());

/// Opening `<head>` tag with optional attributes (not `<header>`).
pub(super) static HEAD_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<head(?:\s[^>]*)?>").unwrap());

pub(super) static META_DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| named_meta("description"));

pub(super) static META_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| named_meta("keywords"));

/// Analytics blocks, applied in order.
pub(super) static ANALYTICS: LazyLock<[Regex; 5]> = LazyLock::new(|| {
    [
        // `<!-- Google tag ... -->` through the next closing script tag
        Regex::new(r"(?is)<!--\s*Google tag.*?</script>").unwrap(),
        // standalone marker comment from older runs
        Regex::new(r"(?i)[ \t]*<!--\s*Google Analytics\s*-->[ \t]*\n?").unwrap(),
        Regex::new(r"(?is)<script[^>]*googletagmanager[^>]*>.*?</script>").unwrap(),
        Regex::new(r"(?is)<script[^>]*gtag[^>]*>.*?</script>").unwrap(),
        // the gtag initializer, and nothing else inside that script
        Regex::new(concat!(
            r"(?is)<script>\s*window\.dataLayer\s*=\s*window\.dataLayer\s*\|\|\s*\[\];?\s*",
            r"function\s+gtag\(\)\s*\{\s*dataLayer\.push\(arguments\);?\s*\}",
            r"[^<]*?gtag\(\s*'config'\s*,\s*'[^']*'\s*\);?\s*</script>",
        ))
        .unwrap(),
    ]
});

/// `<meta name="{name}" content="...">`, either quote style, optional `/`.
fn named_meta(name: &str) -> Regex {
    let pattern =
        format!(r#"(?i)<meta\s+name=["']{name}["']\s+content=["'][^"']*["']\s*/?>"#);
    Regex::new(&pattern).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_single_line_only() {
        assert!(TITLE.is_match("<TITLE>Old</Title>"));
        assert!(!TITLE.is_match("<title>Old\n</title>"));
    }

    #[test]
    fn test_head_open_skips_header() {
        assert!(HEAD_OPEN.is_match("<head>"));
        assert!(HEAD_OPEN.is_match("<HEAD lang=\"en\">"));
        assert!(!HEAD_OPEN.is_match("<header class=\"top\">"));
    }

    #[test]
    fn test_named_meta_variants() {
        for tag in [
            r#"<meta name="description" content="x">"#,
            r#"<meta name='description' content='x' />"#,
            r#"<META NAME="Description"   content="x"/>"#,
            r#"<meta name="description" content="">"#,
        ] {
            assert!(META_DESCRIPTION.is_match(tag), "{tag}");
        }
        // Attribute order is significant.
        assert!(!META_DESCRIPTION.is_match(r#"<meta content="x" name="description">"#));
        assert!(!META_DESCRIPTION.is_match(r#"<meta name="keywords" content="x">"#));
        assert!(META_KEYWORDS.is_match(r#"<meta name="keywords" content="a, b">"#));
    }

    #[test]
    fn test_analytics_patterns_span_lines() {
        let html = "<script\n  src=\"https://www.googletagmanager.com/gtag/js?id=G-1\">\n</script>";
        assert!(ANALYTICS[2].is_match(html));
    }

    #[test]
    fn test_initializer_pattern_is_narrow() {
        let init = "<script>\n  window.dataLayer = window.dataLayer || [];\n  function gtag(){dataLayer.push(arguments);}\n  gtag('js', new Date());\n  gtag('config', 'G-1');\n</script>";
        assert!(ANALYTICS[4].is_match(init));

        for script in [
            "<script>console.log(1)</script>",
            "<script>window.dataLayer = window.dataLayer || []; window.dataLayer.push({page:'home'});</script>",
            "<script>window.dataLayer = window.dataLayer || [];\nfunction gtag(){dataLayer.push(arguments);}\n</script>",
        ] {
            assert!(!ANALYTICS[4].is_match(script), "{script}");
        }
    }

    #[test]
    fn test_legacy_marker_comment() {
        assert!(ANALYTICS[1].is_match("  <!-- Google Analytics -->\n"));
        assert!(ANALYTICS[1].is_match("<!--Google analytics-->"));
        assert!(!ANALYTICS[1].is_match("<!-- Google Analytics setup notes: keep -->"));
    }
}
