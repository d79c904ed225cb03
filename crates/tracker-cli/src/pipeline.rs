//! Read → normalize → write pipeline for one input file.
//!
//! Per-record problems never fail the run: the record is skipped, logged at
//! warn level with its row or line number, and listed in the result. Only
//! I/O failures on the input or the output, and an unusable page date, are
//! fatal.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use tracing::{debug, info, info_span, trace, warn};

use tracker_ingest::{
    CsvOptions, CsvRecordReader, LineOutcome, OneNoteLineParser, parse_page_lines, read_text_lines,
};
use tracker_model::{RecordRef, SkippedRecord, SourceKind, TargetSchema, TrackingRow};
use tracker_normalization::{
    NormalizeContext, RecordNormalizer, missing_columns, normalize_onenote_entry,
    normalize_page_entry, parse_page_date, record_normalizer,
};
use tracker_output::{OutputLayout, input_stem, shard_count, write_sharded, write_sql_file};

use crate::config::ImportConfig;
use crate::logging::redact_value;
use crate::types::{ImportResult, OutputFile};

/// What to import and where to write it.
#[derive(Debug, Clone)]
pub struct ImportRequest {
    pub source: SourceKind,
    pub input: PathBuf,
    /// Single-file output path; ignored by sharded sources.
    pub output: Option<PathBuf>,
    pub page_date: Option<NaiveDate>,
    pub dry_run: bool,
    pub report: Option<PathBuf>,
}

impl ImportRequest {
    pub fn new(source: SourceKind, input: impl Into<PathBuf>) -> Self {
        Self {
            source,
            input: input.into(),
            output: None,
            page_date: None,
            dry_run: false,
            report: None,
        }
    }
}

/// Rows that survived normalization, plus the records that did not.
#[derive(Debug, Default)]
pub struct NormalizedInput {
    pub records_read: usize,
    pub rows: Vec<TrackingRow>,
    pub skipped: Vec<SkippedRecord>,
    pub range_warnings: usize,
}

impl NormalizedInput {
    fn accept(&mut self, reference: RecordRef, row: TrackingRow) {
        self.records_read += 1;
        for issue in row.range_issues() {
            warn!(record = %reference, %issue, "value outside the column's allowed range");
            self.range_warnings += 1;
        }
        trace!(
            record = %reference,
            event_date = %row.event_date,
            notes = redact_value(row.notes.as_deref().unwrap_or_default()),
            "accepted record"
        );
        self.rows.push(row);
    }

    fn skip(&mut self, reference: RecordRef, reason: impl ToString) {
        self.records_read += 1;
        let reason = reason.to_string();
        warn!(record = %reference, %reason, "skipping record");
        self.skipped.push(SkippedRecord { reference, reason });
    }
}

/// Run one import end to end.
pub fn run_import(request: &ImportRequest, config: &ImportConfig) -> Result<ImportResult> {
    let span = info_span!(
        "import",
        source = %request.source,
        input = %request.input.display()
    );
    let _guard = span.enter();

    let schema = request.source.target_schema();
    let context = NormalizeContext::new(config.user_id, &schema);
    let page_date = match request.source {
        SourceKind::OneNotePage => Some(resolve_page_date(request)?),
        _ => None,
    };

    let normalized = read_and_normalize(request, &context, page_date)?;
    info!(
        records = normalized.records_read,
        accepted = normalized.rows.len(),
        skipped = normalized.skipped.len(),
        "normalized input"
    );

    let layout = OutputLayout::for_source(
        request.source,
        &request.input,
        page_date,
        config.output_dir.as_deref(),
    )
    .with_output_path(request.output.as_deref());

    let outputs = if request.dry_run {
        plan_outputs(&layout, normalized.rows.len(), config.batch_size)
    } else {
        write_outputs(&layout, &normalized.rows, &schema, config.batch_size)?
    };
    let statements = outputs.iter().map(|file| file.statements).sum();

    Ok(ImportResult {
        source: request.source,
        input: request.input.clone(),
        records_read: normalized.records_read,
        rows_accepted: normalized.rows.len(),
        skipped: normalized.skipped,
        range_warnings: normalized.range_warnings,
        statements,
        outputs,
        dry_run: request.dry_run,
    })
}

/// Read `request.input` and normalize every record it holds.
pub fn read_and_normalize(
    request: &ImportRequest,
    context: &NormalizeContext,
    page_date: Option<NaiveDate>,
) -> Result<NormalizedInput> {
    match request.source {
        SourceKind::JotformLegacy | SourceKind::Jotform | SourceKind::Tally => {
            let normalizer = record_normalizer(request.source)
                .ok_or_else(|| anyhow!("{} is not a delimited export", request.source))?;
            normalize_delimited(&request.input, normalizer.as_ref(), context)
        }
        SourceKind::OneNote => normalize_onenote(&request.input, context),
        SourceKind::OneNotePage => {
            let date = match page_date {
                Some(date) => date,
                None => resolve_page_date(request)?,
            };
            normalize_page(&request.input, date, context)
        }
    }
}

fn csv_options(source: SourceKind) -> CsvOptions {
    match source {
        SourceKind::JotformLegacy => CsvOptions::tab(),
        _ => CsvOptions::comma(),
    }
}

fn normalize_delimited(
    input: &Path,
    normalizer: &dyn RecordNormalizer,
    context: &NormalizeContext,
) -> Result<NormalizedInput> {
    let reader = CsvRecordReader::open(input, csv_options(normalizer.source()))?;
    let missing = missing_columns(normalizer, reader.headers());
    if !missing.is_empty() {
        warn!(
            columns = ?missing,
            "header lacks required columns; affected records will be skipped"
        );
    }

    let mut normalized = NormalizedInput::default();
    for item in reader {
        match item {
            Ok(record) => match normalizer.normalize(&record, context) {
                Ok(row) => normalized.accept(record.reference, row),
                Err(error) => normalized.skip(record.reference, error),
            },
            Err(unreadable) => normalized.skip(unreadable.reference, unreadable.message),
        }
    }
    Ok(normalized)
}

fn normalize_onenote(input: &Path, context: &NormalizeContext) -> Result<NormalizedInput> {
    let lines = read_text_lines(input)?;
    let mut parser = OneNoteLineParser::new();
    let mut normalized = NormalizedInput::default();
    for line in &lines {
        match parser.parse_line(line) {
            LineOutcome::Date(date) => debug!(record = %line.reference, %date, "date context"),
            LineOutcome::Ignored => {
                trace!(
                    record = %line.reference,
                    line = redact_value(&line.text),
                    "not an entry line"
                );
            }
            LineOutcome::Entry(entry) => match normalize_onenote_entry(&entry, context) {
                Ok(row) => normalized.accept(entry.reference, row),
                Err(error) => normalized.skip(entry.reference, error),
            },
        }
    }
    Ok(normalized)
}

fn normalize_page(
    input: &Path,
    date: NaiveDate,
    context: &NormalizeContext,
) -> Result<NormalizedInput> {
    let lines = read_text_lines(input)?;
    let mut normalized = NormalizedInput::default();
    for entry in parse_page_lines(&lines) {
        match normalize_page_entry(&entry, date, context) {
            Ok(row) => normalized.accept(entry.reference, row),
            Err(error) => normalized.skip(entry.reference, error),
        }
    }
    Ok(normalized)
}

/// The page date from `--page-date`, else from the input file name.
pub fn resolve_page_date(request: &ImportRequest) -> Result<NaiveDate> {
    if let Some(date) = request.page_date {
        return Ok(date);
    }
    let stem = input_stem(&request.input);
    parse_page_date(&stem).with_context(|| {
        format!("cannot determine the page date from '{stem}'; pass --page-date YYYY-MM-DD")
    })
}

fn plan_outputs(layout: &OutputLayout, rows: usize, batch_size: usize) -> Vec<OutputFile> {
    let paths = layout.planned_paths(rows, batch_size);
    match layout {
        OutputLayout::Single(_) => paths
            .into_iter()
            .map(|path| OutputFile {
                path,
                rows,
                statements: shard_count(rows, batch_size),
                written: false,
            })
            .collect(),
        OutputLayout::Sharded { .. } => {
            let mut remaining = rows;
            paths
                .into_iter()
                .map(|path| {
                    let in_file = remaining.min(batch_size);
                    remaining -= in_file;
                    OutputFile {
                        path,
                        rows: in_file,
                        statements: 1,
                        written: false,
                    }
                })
                .collect()
        }
    }
}

fn write_outputs(
    layout: &OutputLayout,
    rows: &[TrackingRow],
    schema: &TargetSchema,
    batch_size: usize,
) -> Result<Vec<OutputFile>> {
    match layout {
        OutputLayout::Single(path) => {
            let stats = write_sql_file(path, rows, schema, batch_size)
                .with_context(|| format!("write {}", path.display()))?;
            if stats.statements == 0 {
                info!("no rows accepted; no output file written");
                return Ok(Vec::new());
            }
            info!(path = %path.display(), rows = stats.rows, statements = stats.statements, "wrote SQL file");
            Ok(vec![OutputFile {
                path: path.clone(),
                rows: stats.rows,
                statements: stats.statements,
                written: true,
            }])
        }
        OutputLayout::Sharded { dir, stem } => {
            let written = write_sharded(dir, stem, rows, schema, batch_size)
                .with_context(|| format!("write SQL files to {}", dir.display()))?;
            Ok(written
                .into_iter()
                .map(|file| OutputFile {
                    path: file.path,
                    rows: file.rows,
                    statements: file.statements,
                    written: true,
                })
                .collect())
        }
    }
}
