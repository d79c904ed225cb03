//! Streaming CSV record reader.

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecordsIntoIter};
use tracing::debug;

use tracker_model::RecordRef;

use super::header::normalize_header;
use crate::error::{IngestError, Result};
use crate::record::{SourceRecord, UnreadableRecord};

/// Field separator of a delimited export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
}

impl Delimiter {
    pub fn as_byte(self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Tab => b'\t',
        }
    }
}

/// Options for reading a delimited export.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvOptions {
    pub delimiter: Delimiter,
}

impl CsvOptions {
    pub fn comma() -> Self {
        Self {
            delimiter: Delimiter::Comma,
        }
    }

    pub fn tab() -> Self {
        Self {
            delimiter: Delimiter::Tab,
        }
    }
}

/// Reads a delimited export with a header row, one [`SourceRecord`] at a time.
///
/// A record that cannot be decoded (bad quoting, invalid UTF-8) is yielded
/// as an [`UnreadableRecord`] and reading continues with the next one.
/// Rows whose cells are all blank are yielded like any other, so the
/// normalizer reports them and row numbers match what a spreadsheet shows
/// below the header.
pub struct CsvRecordReader {
    headers: Vec<String>,
    records: StringRecordsIntoIter<File>,
    row: usize,
    done: bool,
}

impl CsvRecordReader {
    /// Open `path` and read its header row.
    pub fn open(path: &Path, options: CsvOptions) -> Result<Self> {
        let file = File::open(path).map_err(|error| IngestError::from_io(path, error))?;
        let mut reader = ReaderBuilder::new()
            .delimiter(options.delimiter.as_byte())
            .has_headers(true)
            .flexible(true)
            .from_reader(file);
        let headers: Vec<String> = reader
            .headers()
            .map_err(|error| IngestError::CsvHeader {
                path: path.to_path_buf(),
                message: error.to_string(),
            })?
            .iter()
            .map(normalize_header)
            .collect();
        if headers.iter().all(String::is_empty) {
            return Err(IngestError::CsvHeader {
                path: path.to_path_buf(),
                message: "no header row".to_string(),
            });
        }
        debug!(
            path = %path.display(),
            column_count = headers.len(),
            "opened delimited export"
        );
        Ok(Self {
            headers,
            records: reader.into_records(),
            row: 0,
            done: false,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Whether the header row names `column`.
    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|header| header == column)
    }
}

impl Iterator for CsvRecordReader {
    type Item = std::result::Result<SourceRecord, UnreadableRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.records.next()?;
        self.row += 1;
        let reference = RecordRef::Row(self.row);
        match result {
            Ok(record) => {
                if record.iter().all(|cell| cell.trim().is_empty()) {
                    debug!(record = %reference, "row has no values");
                }
                let fields = self
                    .headers
                    .iter()
                    .cloned()
                    .zip(record.iter().map(str::to_string))
                    .collect();
                Some(Ok(SourceRecord::new(reference, fields)))
            }
            Err(error) => {
                // An I/O failure will not go away on retry.
                if error.is_io_error() {
                    self.done = true;
                }
                Some(Err(UnreadableRecord {
                    reference,
                    message: error.to_string(),
                }))
            }
        }
    }
}
