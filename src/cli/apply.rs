//! Preview, confirm, patch and report.

use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use super::RunArgs;
use super::prompt::Prompter;
use crate::batch::{self, BatchOptions, BatchReport, FileStatus};
use crate::config::BotConfig;
use crate::meta::Resolved;
use crate::page::KNOWN_PAGES;
use crate::patch::HeadFallback;
use crate::utils::plural_count;
use crate::{log, logger};

/// Merge command-line flags over config values.
pub fn batch_options(run: &RunArgs, config: &BotConfig) -> BatchOptions {
    let head_fallback = if run.head_fallback || config.build.head_fallback {
        HeadFallback::Head
    } else {
        HeadFallback::Skip
    };

    BatchOptions {
        dir: run.dir.clone().unwrap_or_else(|| config.build.dir.clone()),
        analytics_id: run
            .ga_id
            .clone()
            .or_else(|| config.site.analytics_id.clone())
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty()),
        head_fallback,
        dry_run: run.dry_run,
    }
}

/// Show the resolved meta, confirm, then patch every file.
///
/// Both confirmations are skipped when `yes` is set.
pub fn apply<R: BufRead, W: Write>(
    resolved: &Resolved,
    options: &BatchOptions,
    yes: bool,
    prompter: &mut Prompter<R, W>,
) -> Result<BatchReport> {
    print_preview(resolved, options);
    if !yes {
        prompter.confirm("Proceed? (yes/no): ")?;
    }

    let report = batch::run(options, resolved, |files: &[PathBuf]| -> Result<()> {
        log!("scan"; "found {} in {}", plural_count(files.len(), "HTML file"), options.dir.display());
        for file in files {
            if let Some(name) = file.file_name() {
                println!("  • {}", name.to_string_lossy());
            }
        }

        if !yes {
            prompter.confirm("Update all these files? (yes/no): ")?;
        }
        Ok(())
    })?;
    print_report(&report, options.dry_run);
    Ok(report)
}

fn print_preview(resolved: &Resolved, options: &BatchOptions) {
    let meta = &resolved.meta;
    log!("preview"; "index page meta");
    println!("  Title:       {}", meta.title);
    println!("  Description: {}", meta.description);
    println!("  Keywords:    {}", meta.keywords);
    if let Some(id) = &options.analytics_id {
        println!("  GA ID:       {}", id);
    }
    println!();
    log!("preview"; "{} in {}, shown as `{}` on other pages", resolved.name, resolved.location, resolved.brand);
    println!("  Page-specific meta for: {}", KNOWN_PAGES.join(", "));
    println!("  All other .html files use the index meta");
    if options.dry_run {
        log!("preview"; "dry run: no files will be written");
    }
}

fn print_report(report: &BatchReport, dry_run: bool) {
    for outcome in report.iter() {
        let name = outcome.file_name();
        match &outcome.result {
            Ok(FileStatus::Updated) => logger::status_success(&name, &outcome.title),
            Ok(FileStatus::RemovalOnly) => {
                logger::status_skipped(&name, "no </title> found, old tags removed only")
            }
            Err(reason) => logger::status_error(&name, reason),
        }
    }

    let verb = if dry_run { "would update" } else { "updated" };
    log!("done"; "{} {}/{}", verb, report.updated(), plural_count(report.total(), "file"));

    let skipped = report.count(FileStatus::RemovalOnly);
    if skipped > 0 {
        log!("done"; "{} without </title> left without new meta", plural_count(skipped, "file"));
    }
    if report.failed() > 0 {
        log!("error"; "{} failed", plural_count(report.failed(), "file"));
    }
}
