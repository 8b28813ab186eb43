//! Configuration management for `metabot.toml`.
//!
//! The file is optional. When present it supplies defaults that command-line
//! flags override.
//!
//! # Sections
//!
//! | Section   | Purpose                                             |
//! |-----------|-----------------------------------------------------|
//! | `[site]`  | Business name, location, category, analytics id     |
//! | `[build]` | Target directory, missing-title fallback            |

mod error;
mod section;
mod template;
mod util;

pub use error::ConfigError;
pub use section::{BuildSection, SiteSection};
pub use template::{CONFIG_FILE, generate_config_template};

use util::find_config_file;

use crate::{log, template as categories};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing metabot.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BotConfig {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    #[serde(default)]
    pub site: SiteSection,

    #[serde(default)]
    pub build: BuildSection,
}

impl BotConfig {
    /// Load configuration, searching upward from the current directory.
    ///
    /// A missing file yields defaults; `build.dir` is resolved against the
    /// config file's directory.
    pub fn load(config_name: &Path) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let Some(path) = find_config_file(config_name, &cwd) else {
            crate::debug!("config"; "no {} found, using defaults", config_name.display());
            return Ok(Self::default());
        };

        let mut config = Self::from_path(&path)?;
        config.validate()?;
        if let Some(root) = path.parent() {
            config.build.dir = root.join(&config.build.dir);
        }
        config.config_path = Some(path);
        Ok(config)
    }

    /// Parse configuration from TOML string
    #[cfg(test)]
    pub fn from_str(content: &str) -> Result<Self> {
        let (config, ignored) = Self::parse_with_ignored(content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, Path::new(CONFIG_FILE));
        }
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Reject values that would fail later anyway.
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(category) = &self.site.category
            && categories::lookup(category).is_err()
        {
            return Err(ConfigError::Validation(format!(
                "site.category `{category}` is not a known category id"
            )));
        }
        Ok(())
    }
}
