//! Per-page meta derivation.
//!
//! A fixed set of well-known filenames get their own title, description and
//! keywords built from the index meta. Every other page keeps the index meta.

mod rules;

use crate::meta::{MetaTriple, brand_from_title};

use rules::{PAGE_RULES, PageContext};

/// Filenames with a dedicated rule, in display order.
pub const KNOWN_PAGES: [&str; 11] = [
    "about.html",
    "contact.html",
    "services.html",
    "product-detail.html",
    "cart.html",
    "buynow.html",
    "yourorders.html",
    "privacy.html",
    "terms.html",
    "shipping.html",
    "return.html",
];

/// Whether `filename` has a dedicated rule.
pub fn is_known(filename: &str) -> bool {
    PAGE_RULES.iter().any(|rule| rule.filename == filename)
}

/// Derive the meta for `filename` from the index meta.
///
/// The brand is taken from `base.title` (text before the first en-dash),
/// falling back to `name`. Unknown filenames yield `base` unchanged.
pub fn derive(filename: &str, base: &MetaTriple, name: &str, location: &str) -> MetaTriple {
    let Some(rule) = PAGE_RULES.iter().find(|rule| rule.filename == filename) else {
        return base.clone();
    };

    let ctx = PageContext {
        brand: brand_from_title(&base.title, name),
        location,
        first_keyword: base.first_keyword(),
    };
    (rule.build)(&ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> MetaTriple {
        MetaTriple::new(
            "X – Acme",
            "Index description",
            "sweets Pune, mithai online, Acme",
        )
    }

    #[test]
    fn test_about_uses_brand_from_title() {
        let meta = derive("about.html", &base(), "Ignored", "Pune");
        assert_eq!(meta.title, "About Us – X");

        let base = MetaTriple::new("Acme – Anything", "d", "k");
        assert_eq!(derive("about.html", &base, "n", "Pune").title, "About Us – Acme");
    }

    #[test]
    fn test_about_keywords_reuse_first_token() {
        let meta = derive("about.html", &base(), "Acme", "Pune");
        assert_eq!(
            meta.keywords,
            "about X, Pune, our story, company information, sweets Pune"
        );
    }

    #[test]
    fn test_brand_falls_back_to_name() {
        let base = MetaTriple::new("Acme Tools", "d", "k");
        let meta = derive("contact.html", &base, "Acme", "Pune");
        assert_eq!(meta.title, "Contact Us – Acme | Pune");
        assert_eq!(
            meta.description,
            "Contact Acme in Pune. Get in touch for inquiries, support, or visit our store. We're here to help!"
        );
    }

    #[test]
    fn test_unknown_page_is_identity() {
        let base = base();
        assert_eq!(derive("unknown-page.html", &base, "Acme", "Pune"), base);
        assert_eq!(derive("index.html", &base, "Acme", "Pune"), base);
    }

    #[test]
    fn test_filename_match_is_exact() {
        let base = base();
        assert_eq!(derive("About.html", &base, "Acme", "Pune"), base);
        assert_eq!(derive("about", &base, "Acme", "Pune"), base);
    }

    #[test]
    fn test_every_known_page_has_a_rule() {
        assert_eq!(PAGE_RULES.len(), KNOWN_PAGES.len());
        for page in KNOWN_PAGES {
            assert!(is_known(page), "{page}");
            let meta = derive(page, &base(), "Acme", "Pune");
            assert_ne!(meta, base(), "{page}");
            assert!(meta.title.contains('X'), "{page}: {}", meta.title);
        }
    }

    #[test]
    fn test_derive_is_deterministic() {
        let a = derive("shipping.html", &base(), "Acme", "Pune");
        let b = derive("shipping.html", &base(), "Acme", "Pune");
        assert_eq!(a, b);
        assert_eq!(a.title, "Shipping Policy – X");
        assert_eq!(a.keywords, "shipping policy, delivery, X, shipping charges Pune");
    }
}
