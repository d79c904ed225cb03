//! Batched `INSERT` statement writer.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use tracker_model::{TargetSchema, TrackingRow};

use crate::error::{OutputError, Result};
use crate::literal::SqlRenderer;

/// Counts reported by a finished writer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteStats {
    pub rows: usize,
    pub statements: usize,
}

/// Accumulates rendered rows and emits one statement per full batch.
///
/// Nothing is written for an empty batch, so a writer that never receives
/// a row produces no output at all.
pub struct BatchWriter<W: Write> {
    writer: BufWriter<W>,
    renderer: SqlRenderer,
    max_rows: usize,
    pending: Vec<String>,
    stats: WriteStats,
}

impl<W: Write> BatchWriter<W> {
    pub fn new(writer: W, schema: TargetSchema, max_rows: usize) -> Result<Self> {
        if max_rows == 0 {
            return Err(OutputError::ZeroBatchSize);
        }
        Ok(Self {
            writer: BufWriter::new(writer),
            renderer: SqlRenderer::new(schema),
            max_rows,
            pending: Vec::with_capacity(max_rows.min(1024)),
            stats: WriteStats::default(),
        })
    }

    /// Buffer a row, flushing a statement once the batch is full.
    pub fn push(&mut self, row: &TrackingRow) -> Result<()> {
        self.pending.push(self.renderer.render_row(row));
        if self.pending.len() >= self.max_rows {
            self.flush_batch()?;
        }
        Ok(())
    }

    /// Flush the remaining rows and the underlying writer.
    pub fn finish(mut self) -> Result<WriteStats> {
        self.flush_batch()?;
        self.writer.flush()?;
        Ok(self.stats)
    }

    fn flush_batch(&mut self) -> Result<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let statement = self.renderer.render_statement(&self.pending);
        self.writer.write_all(statement.as_bytes())?;
        self.stats.rows += self.pending.len();
        self.stats.statements += 1;
        debug!(
            rows = self.pending.len(),
            statement = self.stats.statements,
            "flushed INSERT batch"
        );
        self.pending.clear();
        Ok(())
    }
}

/// Render `rows` into an in-memory script.
pub fn render_script(rows: &[TrackingRow], schema: &TargetSchema, max_rows: usize) -> Result<String> {
    let mut buffer = Vec::new();
    let writer = BatchWriter::new(&mut buffer, schema.clone(), max_rows)?;
    write_rows(writer, rows)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write `rows` to `path` as batched statements.
///
/// The file is created only when there is at least one row; otherwise
/// nothing is touched and zero statements are reported.
pub fn write_sql_file(
    path: &Path,
    rows: &[TrackingRow],
    schema: &TargetSchema,
    max_rows: usize,
) -> Result<WriteStats> {
    if max_rows == 0 {
        return Err(OutputError::ZeroBatchSize);
    }
    if rows.is_empty() {
        debug!(path = %path.display(), "no rows, skipping output file");
        return Ok(WriteStats::default());
    }
    let file = create_file(path)?;
    let writer = BatchWriter::new(file, schema.clone(), max_rows)?;
    write_rows(writer, rows).map_err(OutputError::at(path))
}

fn write_rows<W: Write>(mut writer: BatchWriter<W>, rows: &[TrackingRow]) -> Result<WriteStats> {
    for row in rows {
        writer.push(row)?;
    }
    writer.finish()
}

/// Create `path`, creating missing parent directories first.
pub fn create_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::Create {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    File::create(path).map_err(|source| OutputError::Create {
        path: PathBuf::from(path),
        source,
    })
}
