//! Business-category templates for the index page.
//!
//! Each category carries title, description and keywords patterns with
//! `{name}` and `{location}` placeholders. Rendering replaces every token
//! literally (no escaping, no normalization).

mod table;

use crate::error::MetaError;
use crate::meta::MetaTriple;

/// Placeholder replaced by the business name.
pub const NAME_TOKEN: &str = "{name}";
/// Placeholder replaced by the location.
pub const LOCATION_TOKEN: &str = "{location}";

/// A predefined meta pattern for one business type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTemplate {
    /// Selection key ("1".."20").
    pub id: &'static str,
    /// Display name shown in the category listing.
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static str,
}

impl CategoryTemplate {
    /// Render all three patterns for a business.
    pub fn render(&self, name: &str, location: &str) -> MetaTriple {
        MetaTriple::new(
            fill(self.title, name, location),
            fill(self.description, name, location),
            fill(self.keywords, name, location),
        )
    }
}

/// All categories in id order.
pub fn all() -> &'static [CategoryTemplate] {
    table::CATEGORIES
}

/// Find a category by id, ignoring surrounding whitespace.
pub fn lookup(id: &str) -> Result<&'static CategoryTemplate, MetaError> {
    let id = id.trim();
    all()
        .iter()
        .find(|t| t.id == id)
        .ok_or_else(|| MetaError::InvalidCategory(id.to_string()))
}

/// Replace every placeholder in `pattern`.
#[inline]
pub fn fill(pattern: &str, name: &str, location: &str) -> String {
    pattern
        .replace(NAME_TOKEN, name)
        .replace(LOCATION_TOKEN, location)
}
