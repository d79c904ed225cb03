//! Default output locations per source.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use tracker_model::SourceKind;

use crate::shard::shard_paths;

/// Where a run writes its SQL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLayout {
    /// All statements in one file.
    Single(PathBuf),
    /// One statement per file, named after `stem` inside `dir`.
    Sharded { dir: PathBuf, stem: String },
}

impl OutputLayout {
    /// Default layout for `kind`, next to `input` unless `output_dir` is given.
    ///
    /// Page imports are named after the page date, falling back to the
    /// input stem when no date is known.
    pub fn for_source(
        kind: SourceKind,
        input: &Path,
        page_date: Option<NaiveDate>,
        output_dir: Option<&Path>,
    ) -> Self {
        let dir = output_dir
            .map(Path::to_path_buf)
            .unwrap_or_else(|| input.parent().unwrap_or(Path::new("")).to_path_buf());
        let stem = input_stem(input);
        let file_name = match kind {
            SourceKind::JotformLegacy => "output.sql".to_string(),
            SourceKind::Jotform => "Jotform_data_for_input.sql".to_string(),
            SourceKind::OneNote => "OneNote_data_for_input.psql".to_string(),
            SourceKind::OneNotePage => match page_date {
                Some(date) => format!("{}_page_output.psql", date.format("%Y-%m-%d")),
                None => format!("{stem}_page_output.psql"),
            },
            SourceKind::Tally => return OutputLayout::Sharded { dir, stem },
        };
        OutputLayout::Single(dir.join(file_name))
    }

    /// Replace the single-file path; sharded layouts keep their naming.
    #[must_use]
    pub fn with_output_path(self, path: Option<&Path>) -> Self {
        match (self, path) {
            (OutputLayout::Single(_), Some(path)) => OutputLayout::Single(path.to_path_buf()),
            (layout, _) => layout,
        }
    }

    /// Files this layout produces for `rows` rows.
    pub fn planned_paths(&self, rows: usize, max_rows: usize) -> Vec<PathBuf> {
        match self {
            OutputLayout::Single(_) if rows == 0 => Vec::new(),
            OutputLayout::Single(path) => vec![path.clone()],
            OutputLayout::Sharded { dir, stem } => shard_paths(dir, stem, rows, max_rows),
        }
    }
}

/// File name of `input` without its last extension.
pub fn input_stem(input: &Path) -> String {
    input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "input".to_string())
}
