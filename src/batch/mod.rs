//! Batch driver: apply resolved meta to every `.html` file in a directory.
//!
//! Files are handled one at a time and independently. A failure on one file
//! is recorded in the [`BatchReport`] and the loop moves on.

mod report;

pub use report::{BatchReport, FileOutcome, FileStatus};

use std::fs;
use std::path::{Path, PathBuf};

use crate::debug;
use crate::error::MetaError;
use crate::meta::{MetaTriple, Resolved};
use crate::page;
use crate::patch::{HeadFallback, MetaPatcher};

/// Options for one batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Directory whose direct `.html` children are patched.
    pub dir: PathBuf,
    pub analytics_id: Option<String>,
    pub head_fallback: HeadFallback,
    /// Compute everything but leave files untouched.
    pub dry_run: bool,
}

/// List `.html` files directly inside `dir`, sorted by name.
pub fn scan_html_files(dir: &Path) -> Result<Vec<PathBuf>, MetaError> {
    let entries = fs::read_dir(dir).map_err(|e| MetaError::read(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                if path.is_file() && is_html(&path) {
                    files.push(path);
                }
            }
            Err(e) => debug!("scan"; "skipping unreadable entry in {}: {}", dir.display(), e),
        }
    }
    files.sort();
    Ok(files)
}

#[inline]
fn is_html(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(".html"))
}

/// Patch every file found by [`scan_html_files`].
///
/// Fails with [`MetaError::NoFilesFound`] before writing anything when the
/// directory has no `.html` files. `confirm` sees the file list before any
/// file is touched; an error from it ends the run.
pub fn run<E, F>(options: &BatchOptions, resolved: &Resolved, confirm: F) -> Result<BatchReport, E>
where
    E: From<MetaError>,
    F: FnOnce(&[PathBuf]) -> Result<(), E>,
{
    let files = scan_html_files(&options.dir)?;
    if files.is_empty() {
        return Err(MetaError::NoFilesFound(options.dir.clone()).into());
    }

    confirm(&files)?;
    Ok(process_files(&files, options, resolved))
}

fn process_files(files: &[PathBuf], options: &BatchOptions, resolved: &Resolved) -> BatchReport {
    let mut report = BatchReport::with_capacity(files.len());
    for path in files {
        let filename = file_name(path);
        let meta = page::derive(&filename, &resolved.meta, &resolved.brand, &resolved.location);
        if page::is_known(&filename) {
            debug!("batch"; "{} gets page-specific meta", filename);
        }
        let result = process_file(path, options, &meta);

        if let Err(e) = &result {
            debug!("batch"; "{}: {:?}", filename, e);
        }

        report.push(FileOutcome {
            path: path.clone(),
            title: meta.title,
            result: result.map_err(|e| describe(&e)),
        });
    }

    report
}

/// Read → patch → write one file.
fn process_file(
    path: &Path,
    options: &BatchOptions,
    meta: &MetaTriple,
) -> Result<FileStatus, MetaError> {
    let content = fs::read_to_string(path).map_err(|e| MetaError::read(path, e))?;

    let patched = MetaPatcher::new(meta)
        .with_analytics(options.analytics_id.as_deref())
        .with_head_fallback(options.head_fallback)
        .apply(&content);
    if !patched.title_replaced {
        debug!("batch"; "{}: no <title> element to replace", path.display());
    }

    if !options.dry_run {
        fs::write(path, &patched.html).map_err(|e| MetaError::write(path, e))?;
    }

    Ok(if patched.inserted {
        FileStatus::Updated
    } else {
        FileStatus::RemovalOnly
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Error with its cause chain on one line.
fn describe(err: &MetaError) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
