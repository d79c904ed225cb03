use std::path::PathBuf;

use serde::Serialize;

use tracker_model::{SkippedRecord, SourceKind};

/// Outcome of one import run; also the JSON report body.
#[derive(Debug, Clone, Serialize)]
pub struct ImportResult {
    pub source: SourceKind,
    pub input: PathBuf,
    /// Records handed to the normalizer (data rows or entry lines).
    pub records_read: usize,
    pub rows_accepted: usize,
    pub skipped: Vec<SkippedRecord>,
    /// Values outside the target table's CHECK ranges (rows still written).
    pub range_warnings: usize,
    pub statements: usize,
    pub outputs: Vec<OutputFile>,
    pub dry_run: bool,
}

impl ImportResult {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputFile {
    pub path: PathBuf,
    pub rows: usize,
    pub statements: usize,
    /// `false` for files a dry run would have written.
    pub written: bool,
}
