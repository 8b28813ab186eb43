//! Non-interactive `auto`, `manual` and `categories` commands.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use super::apply::{apply, batch_options};
use super::prompt::Prompter;
use super::{BusinessArgs, RunArgs};
use crate::batch::BatchReport;
use crate::config::BotConfig;
use crate::log;
use crate::meta::{MetaSource, resolve};
use crate::template;

/// Numbered category listing, one per line.
pub fn category_listing() -> String {
    template::all()
        .iter()
        .map(|t| format!("{:>3}. {}\n", t.id, t.name))
        .collect()
}

pub fn list_categories() {
    log!("meta"; "available business categories");
    print!("{}", category_listing());
}

/// Fill a category template and patch the target directory.
pub fn run_auto<R: BufRead, W: Write>(
    category: Option<&str>,
    business: &BusinessArgs,
    run: &RunArgs,
    config: &BotConfig,
    prompter: &mut Prompter<R, W>,
) -> Result<BatchReport> {
    let category = required(category, config.site.category.as_deref(), "category (--category)")?;
    let chosen = template::lookup(&category)?;
    log!("meta"; "category: {}", chosen.name);

    let (name, location) = business_details(business, config)?;
    let resolved = resolve(MetaSource::Auto {
        category,
        name,
        location,
    })?;
    apply(&resolved, &batch_options(run, config), run.yes, prompter)
}

/// Use operator-supplied index meta and patch the target directory.
pub fn run_manual<R: BufRead, W: Write>(
    title: &str,
    description: &str,
    keywords: &str,
    business: &BusinessArgs,
    run: &RunArgs,
    config: &BotConfig,
    prompter: &mut Prompter<R, W>,
) -> Result<BatchReport> {
    let (name, location) = business_details(business, config)?;
    let resolved = resolve(MetaSource::Manual {
        title: title.to_string(),
        description: description.to_string(),
        keywords: keywords.to_string(),
        name,
        location,
    })?;
    apply(&resolved, &batch_options(run, config), run.yes, prompter)
}

fn business_details(business: &BusinessArgs, config: &BotConfig) -> Result<(String, String)> {
    let name = required(business.name.as_deref(), config.site.name.as_deref(), "name (--name)")?;
    let location = required(
        business.location.as_deref(),
        config.site.location.as_deref(),
        "location (--location)",
    )?;
    Ok((name, location))
}

/// Flag value, else config value; blank counts as missing.
fn required(flag: Option<&str>, fallback: Option<&str>, what: &str) -> Result<String> {
    flag.or(fallback)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .with_context(|| format!("missing {what}: pass it on the command line or set it in [site]"))
}
