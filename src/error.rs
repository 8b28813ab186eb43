//! Error types shared by the resolver, patcher and batch driver.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced to the operator.
#[derive(Debug, Error)]
pub enum MetaError {
    /// Category id is not one of the enumerated template ids.
    #[error("invalid category `{0}` (run `metabot categories` to list them)")]
    InvalidCategory(String),

    /// Target directory holds no `.html` files.
    #[error("no HTML files found in `{}`", .0.display())]
    NoFilesFound(PathBuf),

    /// Read or write failure on a single file.
    #[error("failed to {action} `{}`", path.display())]
    FileIo {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Operator declined a confirmation prompt.
    #[error("cancelled")]
    Cancelled,
}

impl MetaError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileIo {
            action: "read",
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileIo {
            action: "write",
            path: path.into(),
            source,
        }
    }
}
