//! One-statement-per-file output.
//!
//! Each file holds a single `INSERT` of at most `max_rows` rows. A run that
//! fits in one file writes `<stem>_output.sql`; larger runs write
//! `<stem>_output_part01.sql`, `<stem>_output_part02.sql`, ...

use std::path::{Path, PathBuf};

use tracing::info;

use tracker_model::{TargetSchema, TrackingRow};

use crate::error::{OutputError, Result};
use crate::writer::write_sql_file;

/// One file written by [`write_sharded`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub rows: usize,
    pub statements: usize,
}

/// Number of files needed for `rows` rows.
pub fn shard_count(rows: usize, max_rows: usize) -> usize {
    rows.div_ceil(max_rows.max(1))
}

/// File name of shard `index` (1-based) out of `total`.
pub fn shard_file_name(stem: &str, index: usize, total: usize) -> String {
    if total <= 1 {
        format!("{stem}_output.sql")
    } else {
        format!("{stem}_output_part{index:02}.sql")
    }
}

/// Paths the shards of `rows` rows would be written to.
pub fn shard_paths(dir: &Path, stem: &str, rows: usize, max_rows: usize) -> Vec<PathBuf> {
    let total = shard_count(rows, max_rows);
    (1..=total)
        .map(|index| dir.join(shard_file_name(stem, index, total)))
        .collect()
}

/// Write `rows` as one statement per file in `dir`.
pub fn write_sharded(
    dir: &Path,
    stem: &str,
    rows: &[TrackingRow],
    schema: &TargetSchema,
    max_rows: usize,
) -> Result<Vec<WrittenFile>> {
    if max_rows == 0 {
        return Err(OutputError::ZeroBatchSize);
    }
    let paths = shard_paths(dir, stem, rows.len(), max_rows);
    let mut written = Vec::with_capacity(paths.len());
    for (chunk, path) in rows.chunks(max_rows).zip(paths) {
        let stats = write_sql_file(&path, chunk, schema, max_rows)?;
        info!(path = %path.display(), rows = stats.rows, "created shard");
        written.push(WrittenFile {
            path,
            rows: stats.rows,
            statements: stats.statements,
        });
    }
    Ok(written)
}
