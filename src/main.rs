//! metabot - batch SEO meta tag editor for static HTML sites.

mod batch;
mod cli;
mod config;
mod error;
mod logger;
mod meta;
mod page;
mod patch;
mod template;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, prompt::Prompter};
use config::BotConfig;
use error::MetaError;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if matches!(e.downcast_ref::<MetaError>(), Some(MetaError::Cancelled)) => {
            log!("done"; "cancelled, no files were changed");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log!("error"; "{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut prompter = Prompter::stdio();
    match &cli.command {
        Commands::Init { dry } => cli::init::new_config(&cli.config, *dry),
        Commands::Categories => {
            cli::command::list_categories();
            Ok(())
        }
        Commands::Auto {
            category,
            business,
            run,
        } => {
            let config = load_config(cli)?;
            cli::command::run_auto(category.as_deref(), business, run, &config, &mut prompter)?;
            Ok(())
        }
        Commands::Manual {
            title,
            description,
            keywords,
            business,
            run,
        } => {
            let config = load_config(cli)?;
            cli::command::run_manual(
                title,
                description,
                keywords,
                business,
                run,
                &config,
                &mut prompter,
            )?;
            Ok(())
        }
        Commands::Interactive { run } => {
            let config = load_config(cli)?;
            cli::interactive::run_interactive(run, &config, &mut prompter)?;
            Ok(())
        }
    }
}

fn load_config(cli: &Cli) -> Result<BotConfig> {
    let config = BotConfig::load(&cli.config)?;
    if let Some(path) = &config.config_path {
        debug!("config"; "loaded {}", path.display());
    }
    Ok(config)
}
