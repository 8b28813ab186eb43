//! HTML meta patcher (text → text).
//!
//! Rewrites the `<title>`, drops existing description/keywords meta tags and
//! analytics snippets, then inserts fresh tags right after `</title>`.
//! The document is never parsed; all edits are pattern replacements.
//!
//! # Example
//!
//! ```ignore
//! let meta = MetaTriple::new("Acme – Tools", "Best tools", "tools, pune");
//! let patched = MetaPatcher::new(&meta).with_analytics(Some("G-123")).apply(html);
//! assert!(patched.inserted);
//! ```

mod pattern;

use regex::NoExpand;

use crate::meta::MetaTriple;
use crate::utils::html::escape_attr;

/// What to do when a document has no `</title>` to anchor the new tags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeadFallback {
    /// Leave the document with only the removals applied.
    #[default]
    Skip,
    /// Insert a `<title>` and the meta block right after the opening `<head>`.
    Head,
}

/// Result of patching one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patched {
    pub html: String,
    /// An existing `<title>` element was rewritten.
    pub title_replaced: bool,
    /// The new meta block was inserted.
    pub inserted: bool,
}

/// Applies one [`MetaTriple`] (and optional analytics id) to documents.
#[derive(Debug, Clone, Copy)]
pub struct MetaPatcher<'a> {
    meta: &'a MetaTriple,
    analytics_id: Option<&'a str>,
    head_fallback: HeadFallback,
}

impl<'a> MetaPatcher<'a> {
    pub fn new(meta: &'a MetaTriple) -> Self {
        Self {
            meta,
            analytics_id: None,
            head_fallback: HeadFallback::Skip,
        }
    }

    /// Set the analytics id. Empty ids are treated as absent.
    pub fn with_analytics(mut self, analytics_id: Option<&'a str>) -> Self {
        self.analytics_id = analytics_id.filter(|id| !id.is_empty());
        self
    }

    pub fn with_head_fallback(mut self, head_fallback: HeadFallback) -> Self {
        self.head_fallback = head_fallback;
        self
    }

    /// Patch a full document.
    pub fn apply(&self, html: &str) -> Patched {
        let title_tag = format!("<title>{}</title>", self.meta.title);

        let title_replaced = pattern::TITLE.is_match(html);
        let mut html = pattern::TITLE
            .replace_all(html, NoExpand(&title_tag))
            .into_owned();

        html = strip(&html, &pattern::META_DESCRIPTION);
        html = strip(&html, &pattern::META_KEYWORDS);
        for re in pattern::ANALYTICS.iter() {
            html = strip(&html, re);
        }

        let block = self.meta_block();
        let inserted = if let Some(m) = pattern::TITLE_CLOSE.find(&html) {
            html.insert_str(m.end(), &block);
            true
        } else if self.head_fallback == HeadFallback::Head
            && let Some(m) = pattern::HEAD_OPEN.find(&html)
        {
            html.insert_str(m.end(), &format!("\n  {title_tag}{block}"));
            true
        } else {
            false
        };

        Patched {
            html,
            title_replaced,
            inserted,
        }
    }

    /// Description and keywords tags, plus the analytics snippet if any.
    fn meta_block(&self) -> String {
        let mut block = format!(
            "\n  <meta name=\"description\" content=\"{}\">\
             \n  <meta name=\"keywords\" content=\"{}\">",
            escape_attr(&self.meta.description),
            escape_attr(&self.meta.keywords),
        );

        if let Some(id) = self.analytics_id {
            block.push_str(&analytics_snippet(id));
        }
        block
    }
}

/// Google tag loader and initializer for `id`, inserted verbatim.
fn analytics_snippet(id: &str) -> String {
    format!(
        "\n\n  <!-- Google tag (gtag.js) -->\
         \n  <script async src=\"https://www.googletagmanager.com/gtag/js?id={id}\"></script>\
         \n  <script>\
         \n    window.dataLayer = window.dataLayer || [];\
         \n    function gtag(){{dataLayer.push(arguments);}}\
         \n    gtag('js', new Date());\
         \n    gtag('config', '{id}');\
         \n  </script>"
    )
}

#[inline]
fn strip(html: &str, re: &regex::Regex) -> String {
    re.replace_all(html, "").into_owned()
}
