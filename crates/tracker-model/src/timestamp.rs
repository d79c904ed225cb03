//! Event timestamps.
//!
//! Most exports carry a wall-clock date and time with no zone; the legacy
//! Jotform extract sometimes carries an explicit UTC offset. Both are kept
//! so the PostgreSQL rendering can pass the offset through.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventTimestamp {
    local: NaiveDateTime,
    offset: Option<FixedOffset>,
}

impl EventTimestamp {
    /// A wall-clock timestamp without zone information.
    pub fn naive(local: NaiveDateTime) -> Self {
        Self {
            local,
            offset: None,
        }
    }

    /// A timestamp with a known UTC offset; the local time is preserved.
    pub fn with_offset(value: DateTime<FixedOffset>) -> Self {
        Self {
            local: value.naive_local(),
            offset: Some(*value.offset()),
        }
    }

    pub fn local(&self) -> NaiveDateTime {
        self.local
    }

    pub fn offset(&self) -> Option<FixedOffset> {
        self.offset
    }
}

impl From<NaiveDateTime> for EventTimestamp {
    fn from(value: NaiveDateTime) -> Self {
        Self::naive(value)
    }
}

impl fmt::Display for EventTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.local.format("%Y-%m-%dT%H:%M:%S%.f"))?;
        if let Some(offset) = self.offset {
            write!(f, "{offset}")?;
        }
        Ok(())
    }
}
