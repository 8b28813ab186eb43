//! Question-and-answer flow for operators who prefer prompts over flags.
//!
//! The order of questions:
//!
//! 1. Manual or auto mode
//! 2. Index meta (manual) or category (auto), then name and location
//! 3. Google Analytics id, unless `--ga-id` or `site.analytics_id` supplied one
//! 4. Preview and confirmation, then the batch

use anyhow::Result;
use std::io::{BufRead, Write};

use super::RunArgs;
use super::apply::{apply, batch_options};
use super::command::category_listing;
use super::prompt::Prompter;
use crate::batch::BatchReport;
use crate::config::BotConfig;
use crate::meta::{MetaSource, resolve};
use crate::template;

const RULE: &str = "============================================================";

pub fn run_interactive<R: BufRead, W: Write>(
    run: &RunArgs,
    config: &BotConfig,
    prompter: &mut Prompter<R, W>,
) -> Result<BatchReport> {
    prompter.say(RULE)?;
    prompter.say("SEO META TAGS BOT")?;
    prompter.say(RULE)?;

    let resolved = resolve(ask_source(prompter)?)?;

    let mut options = batch_options(run, config);
    if options.analytics_id.is_none() {
        prompter.say("\nDo you have Google Analytics?")?;
        if prompter.yes_no("(yes/no): ")? {
            let id = prompter.ask("Google Analytics ID (e.g., G-XXXXXXXXX): ", true)?;
            options.analytics_id = Some(id);
        }
    }

    apply(&resolved, &options, run.yes, prompter)
}

fn ask_source<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<MetaSource> {
    prompter.say("\nDo you already have your INDEX PAGE meta tags ready?")?;
    prompter.say("  yes: paste title, description and keywords")?;
    prompter.say("  no:  generate them from a business category")?;

    if prompter.yes_no("(yes/no): ")? {
        prompter.say("\nMANUAL MODE: provide meta for the index page")?;
        prompter.say("Paste just the content; full tags are unwrapped too.\n")?;
        let title = prompter.ask("Title (content only): ", true)?;
        let description = prompter.ask("Description (content only): ", true)?;
        let keywords = prompter.ask("Keywords (content only): ", true)?;

        prompter.say("\nFor generating other pages' meta tags:")?;
        let name = prompter.ask("Shop/Business Name: ", true)?;
        let location = prompter.ask("Location (City): ", true)?;

        Ok(MetaSource::Manual {
            title,
            description,
            keywords,
            name,
            location,
        })
    } else {
        prompter.say("\nAUTO-GENERATE MODE")?;
        prompter.say(RULE)?;
        prompter.say(category_listing().trim_end())?;
        prompter.say(RULE)?;

        let category = prompter.ask("Select category number: ", true)?;
        let chosen = template::lookup(&category)?;
        prompter.say(&format!("✓ Selected: {}\n", chosen.name))?;

        let name = prompter.ask("Site/Business Name: ", true)?;
        let location = prompter.ask("Location (City): ", true)?;

        Ok(MetaSource::Auto {
            category,
            name,
            location,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::prompt::tests::scripted;
    use crate::error::MetaError;
    use std::fs;
    use tempfile::TempDir;

    const PAGE: &str = "<head><title>Old</title></head>";

    fn site() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("index.html"), PAGE).unwrap();
        fs::write(dir.path().join("contact.html"), PAGE).unwrap();
        dir
    }

    fn run_in(dir: &TempDir) -> RunArgs {
        RunArgs {
            dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        }
    }

    #[test]
    fn test_auto_flow_with_analytics() {
        let dir = site();
        // mode, category, name, location, GA?, GA id, proceed, update
        let mut prompter = scripted("no\n1\nSweet Treats\nDelhi\nyes\nG-TEST123\ny\ny\n");

        let report = run_interactive(&run_in(&dir), &BotConfig::default(), &mut prompter).unwrap();
        assert_eq!(report.total(), 2);
        assert_eq!(report.updated(), 2);

        let index = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(index.contains("<title>Sweet Treats – Fresh Mithai & Sweets Online</title>"));
        assert!(index.contains("G-TEST123"));

        let contact = fs::read_to_string(dir.path().join("contact.html")).unwrap();
        assert!(contact.contains("Contact"));
        assert!(contact.contains("Sweet Treats"));
    }

    #[test]
    fn test_manual_flow_without_analytics() {
        let dir = site();
        let mut prompter = scripted("yes\nAcme – Widgets\nBest widgets\nwidgets, gadgets\nAcme\nPune\nno\nyes\nyes\n");

        run_interactive(&run_in(&dir), &BotConfig::default(), &mut prompter).unwrap();

        let index = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(index.contains("<title>Acme – Widgets</title>"));
        assert!(!index.contains("googletagmanager"));
    }

    #[test]
    fn test_configured_analytics_skips_question() {
        let dir = site();
        let mut config = BotConfig::default();
        config.site.analytics_id = Some("G-CONF".into());
        // no GA question between location and proceed
        let mut prompter = scripted("no\n4\nFreshCart\nMumbai\ny\ny\n");

        run_interactive(&run_in(&dir), &config, &mut prompter).unwrap();
        let index = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(index.contains("G-CONF"));
    }

    #[test]
    fn test_invalid_category_stops_early() {
        let dir = site();
        let mut prompter = scripted("no\n99\n");

        let err = run_interactive(&run_in(&dir), &BotConfig::default(), &mut prompter).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MetaError>(),
            Some(MetaError::InvalidCategory(id)) if id == "99"
        ));
        assert_eq!(fs::read_to_string(dir.path().join("index.html")).unwrap(), PAGE);
    }

    #[test]
    fn test_declining_preview_cancels() {
        let dir = site();
        let mut prompter = scripted("no\n1\nSweet Treats\nDelhi\nno\nno\n");

        let err = run_interactive(&run_in(&dir), &BotConfig::default(), &mut prompter).unwrap_err();
        assert!(matches!(err.downcast_ref::<MetaError>(), Some(MetaError::Cancelled)));
        assert_eq!(fs::read_to_string(dir.path().join("contact.html")).unwrap(), PAGE);
    }
}
