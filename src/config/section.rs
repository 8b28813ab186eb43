//! `[site]` and `[build]` sections.

use serde::Deserialize;
use std::path::PathBuf;

/// Business details used when the CLI does not supply them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Business / site name.
    pub name: Option<String>,
    /// City or region.
    pub location: Option<String>,
    /// Category id ("1".."20") for auto mode.
    pub category: Option<String>,
    /// Google Analytics measurement id, e.g. `G-XXXXXXXXX`.
    pub analytics_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuildSection {
    /// Directory holding the `.html` files (relative to the config file).
    pub dir: PathBuf,
    /// Insert after `<head>` when a page has no `</title>`.
    pub head_fallback: bool,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            head_fallback: false,
        }
    }
}
