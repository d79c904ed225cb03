//! Per-source record normalizers.

mod jotform;
mod onenote;
mod tally;

pub use jotform::{JotformLegacyNormalizer, JotformNormalizer};
pub use onenote::{
    ONENOTE_URGENCY_DEFAULT, PAGE_DEFAULT, normalize_onenote_entry, normalize_page_entry,
};
pub use tally::TallyNormalizer;

use tracker_ingest::SourceRecord;
use tracker_model::{SourceKind, TrackingRow};

use crate::context::NormalizeContext;
use crate::error::NormalizeError;

/// Turns one delimited-export record into a row.
pub trait RecordNormalizer {
    fn source(&self) -> SourceKind;

    /// Columns whose absence from the header drops every record.
    fn required_columns(&self) -> &'static [&'static str];

    fn normalize(
        &self,
        record: &SourceRecord,
        context: &NormalizeContext,
    ) -> Result<TrackingRow, NormalizeError>;
}

/// Normalizer for a delimited export; `None` for the line-oriented sources.
pub fn record_normalizer(kind: SourceKind) -> Option<Box<dyn RecordNormalizer>> {
    match kind {
        SourceKind::JotformLegacy => Some(Box::new(JotformLegacyNormalizer)),
        SourceKind::Jotform => Some(Box::new(JotformNormalizer)),
        SourceKind::Tally => Some(Box::new(TallyNormalizer)),
        SourceKind::OneNote | SourceKind::OneNotePage => None,
    }
}

/// Required columns missing from `headers`.
pub fn missing_columns(normalizer: &dyn RecordNormalizer, headers: &[String]) -> Vec<&'static str> {
    normalizer
        .required_columns()
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|header| header == column))
        .collect()
}

fn required<'a>(record: &'a SourceRecord, column: &'static str) -> Result<&'a str, NormalizeError> {
    record
        .get(column)
        .ok_or(NormalizeError::MissingColumn { column })
}
