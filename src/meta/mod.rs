//! Index-page meta resolution.
//!
//! Produces the base [`MetaTriple`] either from operator input (manual mode)
//! or from a category template (auto mode), together with the brand used to
//! derive the other pages.

mod extract;

pub use extract::extract_content;

use crate::error::MetaError;
use crate::template;

/// En-dash separating the brand from the rest of a title.
pub const BRAND_SEPARATOR: char = '–';

/// Title, description and keywords for one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaTriple {
    pub title: String,
    pub description: String,
    pub keywords: String,
}

impl MetaTriple {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        keywords: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            keywords: keywords.into(),
        }
    }

    /// First comma-separated keyword, untrimmed.
    pub fn first_keyword(&self) -> &str {
        self.keywords.split(',').next().unwrap_or_default()
    }
}

/// Where the index meta comes from.
#[derive(Debug, Clone)]
pub enum MetaSource {
    /// Operator-supplied strings; each may be bare text or a full tag.
    Manual {
        title: String,
        description: String,
        keywords: String,
        name: String,
        location: String,
    },
    /// Category template rendered for a business.
    Auto {
        category: String,
        name: String,
        location: String,
    },
}

/// Fully resolved index meta plus the values per-page rules need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub meta: MetaTriple,
    /// Operator-supplied business name.
    pub name: String,
    /// Brand shown on derived pages (see [`brand_from_title`]).
    pub brand: String,
    pub location: String,
}

/// Resolve the index meta.
///
/// Fails with [`MetaError::InvalidCategory`] before touching anything when
/// an auto-mode category id is unknown.
pub fn resolve(source: MetaSource) -> Result<Resolved, MetaError> {
    let (meta, name, location) = match source {
        MetaSource::Manual {
            title,
            description,
            keywords,
            name,
            location,
        } => {
            let meta = MetaTriple::new(
                extract_content(&title),
                extract_content(&description),
                extract_content(&keywords),
            );
            (meta, name, location)
        }
        MetaSource::Auto {
            category,
            name,
            location,
        } => {
            let meta = template::lookup(&category)?.render(&name, &location);
            (meta, name, location)
        }
    };

    let brand = brand_from_title(&meta.title, &name).to_string();
    Ok(Resolved {
        meta,
        name,
        brand,
        location,
    })
}

/// Brand is the trimmed text before the first en-dash, else `fallback`.
pub fn brand_from_title<'a>(title: &'a str, fallback: &'a str) -> &'a str {
    match title.split_once(BRAND_SEPARATOR) {
        Some((brand, _)) => brand.trim(),
        None => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auto(category: &str) -> MetaSource {
        MetaSource::Auto {
            category: category.into(),
            name: "Sweet Treats".into(),
            location: "Delhi".into(),
        }
    }

    #[test]
    fn test_resolve_auto() {
        let resolved = resolve(auto("1")).unwrap();
        assert_eq!(
            resolved.meta.title,
            "Sweet Treats – Fresh Mithai & Sweets Online"
        );
        assert_eq!(resolved.brand, "Sweet Treats");
        assert_eq!(resolved.name, "Sweet Treats");
        assert_eq!(resolved.location, "Delhi");
    }

    #[test]
    fn test_resolve_auto_doctor_brand_keeps_prefix() {
        let resolved = resolve(auto("9")).unwrap();
        assert_eq!(resolved.brand, "Dr. Sweet Treats");
    }

    #[test]
    fn test_resolve_auto_invalid_category() {
        let err = resolve(auto("99")).unwrap_err();
        assert!(matches!(err, MetaError::InvalidCategory(id) if id == "99"));
    }

    #[test]
    fn test_resolve_manual_extracts_tags() {
        let resolved = resolve(MetaSource::Manual {
            title: "<title>Acme Tools</title>".into(),
            description: r#"<meta name="description" content="Best tools">"#.into(),
            keywords: "tools, hardware".into(),
            name: "Acme".into(),
            location: "Pune".into(),
        })
        .unwrap();

        assert_eq!(
            resolved.meta,
            MetaTriple::new("Acme Tools", "Best tools", "tools, hardware")
        );
        // No en-dash in the title: brand falls back to the business name.
        assert_eq!(resolved.brand, "Acme");
    }

    #[test]
    fn test_brand_from_title() {
        assert_eq!(brand_from_title("  Acme  – Tools – Pune", "x"), "Acme");
        assert_eq!(brand_from_title("Acme - Tools", "Fallback"), "Fallback");
        assert_eq!(brand_from_title("– Tools", "x"), "");
    }

    #[test]
    fn test_first_keyword() {
        let meta = MetaTriple::new("", "", "sweets Delhi, mithai");
        assert_eq!(meta.first_keyword(), "sweets Delhi");
        assert_eq!(MetaTriple::default().first_keyword(), "");
        let meta = MetaTriple::new("", "", " padded ,b");
        assert_eq!(meta.first_keyword(), " padded ");
    }
}
