//! Source readers for tracking-log exports.
//!
//! # Features
//!
//! - **Delimited exports**: comma- or tab-separated files with a header row
//!   (Jotform, Tally), read one record at a time
//! - **Text exports**: numbered, trimmed lines of a OneNote export or a
//!   saved OneNote page
//! - **OneNote parsing**: entry extraction for the free-text export (with
//!   date context lines) and for single pages
//!
//! Readers never interpret values; they hand raw text to the normalizers.

mod delimited;
mod error;
mod onenote;
mod page;
mod record;
mod text;

// === Error Types ===
pub use error::{IngestError, Result};

// === Records ===
pub use record::{SourceRecord, UnreadableRecord};

// === Delimited Exports ===
pub use delimited::{CsvOptions, CsvRecordReader, Delimiter, normalize_header};

// === Text Exports ===
pub use text::{TextLine, read_text_lines, split_lines};

// === OneNote ===
pub use onenote::{
    LineOutcome, OneNoteEntry, OneNoteLineParser, labeled_field, parse_onenote_lines,
    quoted_notes,
};
pub use page::{PageEntry, parse_page_line, parse_page_lines};
