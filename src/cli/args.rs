//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::CONFIG_FILE;

/// Batch SEO meta tag editor for static HTML files
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: metabot.toml, searched upward)
    #[arg(short = 'C', long, global = true, default_value = CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List the built-in business categories
    #[command(visible_alias = "c")]
    Categories,

    /// Generate index meta from a business category template
    #[command(visible_alias = "a")]
    Auto {
        /// Category id (see `metabot categories`)
        #[arg(short, long)]
        category: Option<String>,

        #[command(flatten)]
        business: BusinessArgs,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Use your own index title, description and keywords
    #[command(visible_alias = "m")]
    Manual {
        /// Index page title (plain text or a full `<title>` tag)
        #[arg(short, long)]
        title: String,

        /// Index page description (plain text or a full meta tag)
        #[arg(short, long)]
        description: String,

        /// Index page keywords (plain text or a full meta tag)
        #[arg(short, long)]
        keywords: String,

        #[command(flatten)]
        business: BusinessArgs,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Answer questions step by step
    #[command(visible_alias = "i")]
    Interactive {
        #[command(flatten)]
        run: RunArgs,
    },

    /// Write a commented metabot.toml into the current directory
    Init {
        /// Print the template to stdout instead of writing it
        #[arg(long)]
        dry: bool,
    },
}

/// Business details used for placeholders and derived pages.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct BusinessArgs {
    /// Business or site name
    #[arg(short, long)]
    pub name: Option<String>,

    /// City or region
    #[arg(short, long)]
    pub location: Option<String>,
}

/// Shared arguments for commands that patch files
#[derive(clap::Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Directory with the .html files (default: build.dir or current directory)
    #[arg(short = 'D', long, value_hint = clap::ValueHint::DirPath)]
    pub dir: Option<PathBuf>,

    /// Google Analytics measurement id (e.g. G-XXXXXXXXX)
    #[arg(short = 'g', long = "ga-id")]
    pub ga_id: Option<String>,

    /// Skip confirmation prompts
    #[arg(short, long)]
    pub yes: bool,

    /// Show what would change without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Insert title and meta after `<head>` when a page has no `</title>`
    #[arg(long)]
    pub head_fallback: bool,
}
