//! Field normalization for tracking-log exports.
//!
//! Turns raw source text into [`TrackingRow`](tracker_model::TrackingRow)
//! values: label tables, yes/no flags, integer-like fields, per-source date
//! formats and the per-source defaults for everything a form leaves out.
//!
//! A record that cannot become a row yields a [`NormalizeError`], which is
//! the reason reported when the record is skipped.

mod context;
mod datetime;
mod error;
mod labels;
mod sources;
mod values;

// === Error Types ===
pub use error::NormalizeError;

// === Context ===
pub use context::NormalizeContext;

// === Value Conversions ===
pub use labels::{
    JOTFORM_LEGACY_LEAK, JOTFORM_LEGACY_URGENCY, LabelTable, TALLY_LEAK, TALLY_URGENCY,
    leak_to_int, urgency_to_int,
};
pub use values::{int_or, parse_int_like, yes_no_to_bool};

// === Date/Time ===
pub use datetime::{
    DATE_FORMAT, JOTFORM_FORMAT, ONENOTE_FORMAT, parse_date_and_time, parse_iso_datetime,
    parse_jotform_datetime, parse_onenote_datetime, parse_page_date, parse_page_time,
};

// === Source Normalizers ===
pub use sources::{
    JotformLegacyNormalizer, JotformNormalizer, ONENOTE_URGENCY_DEFAULT, PAGE_DEFAULT,
    RecordNormalizer, TallyNormalizer, missing_columns, normalize_onenote_entry,
    normalize_page_entry, record_normalizer,
};
