//! `metabot init`: write a commented config file.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::config::generate_config_template;
use crate::log;

/// Write the config template to `path`, or print it when `dry_run` is set.
pub fn new_config(path: &Path, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", generate_config_template());
        return Ok(());
    }

    write_config(path)?;
    log!("init"; "wrote {}", path.display());
    Ok(())
}

/// Write the template, refusing to overwrite an existing file.
fn write_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("'{}' already exists, not overwriting", path.display());
    }

    fs::write(path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BotConfig, CONFIG_FILE};
    use tempfile::TempDir;

    #[test]
    fn test_write_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        write_config(&path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# metabot configuration file"));
        assert!(BotConfig::from_str(&content).is_ok());
    }

    #[test]
    fn test_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[site]\nname = \"Mine\"\n").unwrap();

        let err = write_config(&path).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "[site]\nname = \"Mine\"\n");
    }
}
