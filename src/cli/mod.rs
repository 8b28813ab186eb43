//! Command-line interface module.
//!
//! # Module Structure
//!
//! - [`args`]: clap definitions
//! - [`prompt`]: operator prompts over any reader/writer
//! - [`apply`]: preview, confirmation and per-file report
//! - [`command`]: `auto`, `manual`, `categories`
//! - [`interactive`]: step-by-step questions
//! - [`init`]: config template

mod apply;
mod args;
pub mod command;
pub mod init;
pub mod interactive;
pub mod prompt;

pub use args::{BusinessArgs, Cli, Commands, RunArgs};
