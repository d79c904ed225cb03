//! JSON import report.

use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use tracker_output::create_file;

use crate::types::ImportResult;

/// Write `result` as pretty-printed JSON to `path`.
pub fn write_report(path: &Path, result: &ImportResult) -> Result<()> {
    let file = create_file(path).with_context(|| format!("create report {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, result)
        .with_context(|| format!("serialize report {}", path.display()))?;
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .with_context(|| format!("write report {}", path.display()))?;
    info!(path = %path.display(), "wrote import report");
    Ok(())
}
