//! Date/time parsing for each export format.
//!
//! Every parser returns `None` on failure; the caller decides how to
//! report the skipped record.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use tracker_model::EventTimestamp;

/// Jotform download format, e.g. `Mar 6, 2025 03:46 PM`.
pub const JOTFORM_FORMAT: &str = "%b %d, %Y %I:%M %p";

/// Date line format of OneNote exports and page titles.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Combined date context and entry time of the OneNote export.
pub const ONENOTE_FORMAT: &str = "%Y-%m-%d %H:%M";

const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a Jotform timestamp such as `Mar 6, 2025 03:46 PM`.
pub fn parse_jotform_datetime(value: &str) -> Option<EventTimestamp> {
    NaiveDateTime::parse_from_str(value.trim(), JOTFORM_FORMAT)
        .ok()
        .map(EventTimestamp::naive)
}

/// Parse an ISO-8601 timestamp, keeping a UTC offset when one is given.
///
/// Accepts `T` or a space between date and time, optional seconds and
/// fractional seconds, and offsets written as `Z`, `-08:00` or `-08`.
pub fn parse_iso_datetime(value: &str) -> Option<EventTimestamp> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(EventTimestamp::with_offset(parsed));
    }
    for format in OFFSET_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(trimmed, format) {
            return Some(EventTimestamp::with_offset(parsed));
        }
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(EventTimestamp::naive)
}

/// Combine a `YYYY-MM-DD` date with an `H:MM` or `HH:MM` time.
///
/// Only the hour and minute parts of the time are read; trailing
/// seconds are ignored.
pub fn parse_date_and_time(date: &str, time: &str) -> Option<EventTimestamp> {
    let date = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).ok()?;
    let mut parts = time.trim().split(':');
    let hour: u32 = parts.next()?.trim().parse().ok()?;
    let minute: u32 = parts.next()?.trim().parse().ok()?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
    Some(EventTimestamp::naive(date.and_time(time)))
}

/// Parse the OneNote export's `"<date context> <time token>"`.
pub fn parse_onenote_datetime(date: &str, time: &str) -> Option<EventTimestamp> {
    NaiveDateTime::parse_from_str(&format!("{} {}", date.trim(), time.trim()), ONENOTE_FORMAT)
        .ok()
        .map(EventTimestamp::naive)
}

/// Parse a OneNote page title, which is the page's date.
pub fn parse_page_date(title: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(title.trim(), DATE_FORMAT).ok()
}

/// Combine a page date with an entry's `HH:MM`.
pub fn parse_page_time(date: NaiveDate, time: &str) -> Option<EventTimestamp> {
    NaiveTime::parse_from_str(time.trim(), "%H:%M")
        .ok()
        .map(|time| EventTimestamp::naive(date.and_time(time)))
}
