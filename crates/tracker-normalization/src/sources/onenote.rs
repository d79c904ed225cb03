//! OneNote entries.
//!
//! The free-text export leaves every column it does not mention to the
//! table defaults. Saved pages are written with explicit values instead,
//! so unmentioned fields take fixed defaults.

use chrono::NaiveDate;

use tracker_ingest::{OneNoteEntry, PageEntry};
use tracker_model::TrackingRow;

use crate::context::NormalizeContext;
use crate::datetime::{parse_onenote_datetime, parse_page_time};
use crate::error::NormalizeError;
use crate::values::{int_or, parse_int_like};

/// Urgency written when the export has an `urgency:` value that is not a number.
pub const ONENOTE_URGENCY_DEFAULT: i32 = 1;

/// Leak, urgency and pain written for a page entry that does not give them.
pub const PAGE_DEFAULT: i32 = 1;

/// Build a row from a free-text export entry.
///
/// Absent fields stay `None`, which the OneNote target renders as `DEFAULT`.
pub fn normalize_onenote_entry(
    entry: &OneNoteEntry,
    context: &NormalizeContext,
) -> Result<TrackingRow, NormalizeError> {
    let time = leading_time(&entry.time);
    let date = entry
        .date
        .as_deref()
        .ok_or_else(|| NormalizeError::MissingDateContext {
            time: time.to_string(),
        })?;
    let event_date = parse_onenote_datetime(date, &entry.time).ok_or_else(|| {
        if time == entry.time.trim() {
            NormalizeError::InvalidDateTime {
                value: format!("{date} {time}"),
            }
        } else {
            NormalizeError::UnseparatedTime {
                time: time.to_string(),
            }
        }
    })?;

    let mut row = TrackingRow::new(context.user_id, event_date).with_notes(entry.notes.as_deref());
    row.id = context.next_id();
    row.urgency = entry
        .urgency
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| parse_int_like(value).unwrap_or(ONENOTE_URGENCY_DEFAULT));
    row.pain_level = entry.pain.as_deref().and_then(parse_int_like);
    row.awoke_from_sleep = entry.was_sleeping;
    Ok(row)
}

/// The `H:MM` prefix of an entry's time segment. Anything after it may be
/// free text and never goes into a skip reason.
fn leading_time(segment: &str) -> &str {
    let segment = segment.trim();
    let end = segment
        .find(|c: char| !(c.is_ascii_digit() || c == ':'))
        .unwrap_or(segment.len());
    &segment[..end]
}

/// Build a row from a page entry on the page dated `date`.
pub fn normalize_page_entry(
    entry: &PageEntry,
    date: NaiveDate,
    context: &NormalizeContext,
) -> Result<TrackingRow, NormalizeError> {
    let event_date =
        parse_page_time(date, &entry.time).ok_or_else(|| NormalizeError::InvalidDateTime {
            value: format!("{} {}", date, entry.time),
        })?;

    let mut row = TrackingRow::new(context.user_id, event_date).with_notes(entry.notes.as_deref());
    row.id = context.next_id();
    row.accident = Some(false);
    row.change_pad_or_underwear = Some(false);
    row.leak_amount = Some(PAGE_DEFAULT);
    row.urgency = Some(int_or(entry.urgency.as_deref(), PAGE_DEFAULT));
    row.pain_level = Some(int_or(entry.pain.as_deref(), PAGE_DEFAULT));
    row.awoke_from_sleep = false;
    Ok(row)
}
