//! Data model for `TrackingLog` imports.
//!
//! - [`TrackingRow`]: one normalized row, independent of the target dialect
//! - [`TargetSchema`]: column layout and literal conventions of a target table
//! - [`UserId`]: the configured owner of every imported row
//! - [`SourceKind`]: supported exports and the layout each is imported into

pub mod error;
pub mod ids;
pub mod row;
pub mod schema;
pub mod source;
pub mod timestamp;

pub use error::{ModelError, Result};
pub use ids::{RecordRef, UserId};
pub use row::{
    LEAK_AMOUNT_RANGE, PAIN_LEVEL_RANGE, RangeIssue, SkippedRecord, TrackingRow, URGENCY_RANGE,
};
pub use schema::{
    Column, DEFAULT_MAX_ROWS_PER_STATEMENT, IMPORT_COLUMNS, KEYED_COLUMNS, MissingValue,
    PAGE_COLUMNS, POSTGRES_SCHEMA, SqlDialect, TABLE_NAME, TargetSchema, TimestampStyle,
};
pub use source::SourceKind;
pub use timestamp::EventTimestamp;
