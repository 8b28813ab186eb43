//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro, printed only with `--verbose`
//! - per-file `✓`/`⚠`/`✗` result lines
//!
//! Colors go through `if_supports_color`, so `--color never` and non-TTY
//! output stay plain.
//!
//! # Example
//!
//! ```ignore
//! log!("scan"; "found {} files", count);
//! status_success("about.html", "About Us – Acme");
//! ```

use crossterm::{
    execute,
    terminal::{Clear, ClearType},
};
use owo_colors::{OwoColorize, Stream::Stdout, Style};
use std::{
    io::{Write, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    let mut stdout = stdout().lock();
    execute!(stdout, Clear(ClearType::UntilNewLine)).ok();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let style = match module_lower {
        "meta" | "preview" => Style::new().bright_blue().bold(),
        "done" => Style::new().bright_green().bold(),
        "error" => Style::new().bright_red().bold(),
        _ => Style::new().bright_yellow().bold(),
    };
    format!("[{module}]")
        .if_supports_color(Stdout, |p| p.style(style))
        .to_string()
}

// ============================================================================
// Per-file status lines
// ============================================================================

/// Width the file name column is padded to.
const NAME_WIDTH: usize = 25;

/// Longest title fragment shown next to a file.
const TITLE_WIDTH: usize = 50;

/// Format a success line: `✓ about.html  → About Us – Acme`.
pub fn success_line(file: &str, title: &str) -> String {
    let title: String = title.chars().take(TITLE_WIDTH).collect();
    format!(
        "{} {file:<NAME_WIDTH$} → {title}",
        "✓".if_supports_color(Stdout, |m| m.green())
    )
}

/// Format a note line for files that only had tags removed.
pub fn skipped_line(file: &str, reason: &str) -> String {
    format!(
        "{} {file:<NAME_WIDTH$} {}",
        "⚠".if_supports_color(Stdout, |m| m.yellow()),
        reason.if_supports_color(Stdout, |r| r.dimmed())
    )
}

/// Format a failure line: `✗ cart.html: reason`.
pub fn error_line(file: &str, reason: &str) -> String {
    format!("{} {file}: {reason}", "✗".if_supports_color(Stdout, |m| m.red()))
}

/// Print a success line.
pub fn status_success(file: &str, title: &str) {
    println!("{}", success_line(file, title));
}

/// Print a removal-only line.
pub fn status_skipped(file: &str, reason: &str) {
    println!("{}", skipped_line(file, reason));
}

/// Print a failure line.
pub fn status_error(file: &str, reason: &str) {
    println!("{}", error_line(file, reason));
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_toggle() {
        set_verbose(true);
        assert!(is_verbose());
        set_verbose(false);
        assert!(!is_verbose());
    }

    #[test]
    fn test_success_line_truncates_title() {
        owo_colors::set_override(false);
        let title = "x".repeat(80);
        let line = success_line("index.html", &title);
        assert!(line.ends_with(&"x".repeat(TITLE_WIDTH)));
        assert!(!line.ends_with(&"x".repeat(TITLE_WIDTH + 1)));
    }

    #[test]
    fn test_success_line_pads_name() {
        owo_colors::set_override(false);
        let line = success_line("a.html", "T");
        assert_eq!(line, format!("✓ {:<25} → T", "a.html"));
    }

    #[test]
    fn test_error_line() {
        owo_colors::set_override(false);
        assert_eq!(error_line("cart.html", "denied"), "✗ cart.html: denied");
    }
}
