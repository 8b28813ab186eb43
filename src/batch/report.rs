//! Per-file outcomes of a batch run.

use std::path::PathBuf;

/// How a successfully written file was changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// Title rewritten (if present) and new meta block inserted.
    Updated,
    /// No `</title>` anchor: only the removal steps ran.
    RemovalOnly,
}

/// Result for one file.
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub path: PathBuf,
    /// Title derived for this page.
    pub title: String,
    /// Status, or the failure reason.
    pub result: Result<FileStatus, String>,
}

impl FileOutcome {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            outcomes: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, outcome: FileOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter()
    }

    /// Files discovered.
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Files read, patched and written without error.
    pub fn updated(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.updated()
    }

    pub fn count(&self, status: FileStatus) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.result.as_ref().is_ok_and(|s| *s == status))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(name: &str, result: Result<FileStatus, String>) -> FileOutcome {
        FileOutcome {
            path: PathBuf::from("site").join(name),
            title: String::new(),
            result,
        }
    }

    #[test]
    fn test_counts() {
        let mut report = BatchReport::default();
        report.push(outcome("index.html", Ok(FileStatus::Updated)));
        report.push(outcome("about.html", Ok(FileStatus::RemovalOnly)));
        report.push(outcome("cart.html", Err("failed to read".into())));

        assert_eq!(report.total(), 3);
        assert_eq!(report.updated(), 2);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.count(FileStatus::Updated), 1);
        assert_eq!(report.count(FileStatus::RemovalOnly), 1);
    }

    #[test]
    fn test_file_name() {
        assert_eq!(outcome("cart.html", Ok(FileStatus::Updated)).file_name(), "cart.html");
    }
}
