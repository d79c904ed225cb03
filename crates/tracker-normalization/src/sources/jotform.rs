//! Jotform exports.
//!
//! Two generations of the form exist. The older one was extracted as a
//! tab-delimited file whose headers are the table's own column names and
//! whose choice fields carry the form's labels. The newer one is the
//! regular Jotform CSV download: question text as headers, numeric choice
//! values and a `Mar 6, 2025 03:46 PM` timestamp.

use tracker_ingest::SourceRecord;
use tracker_model::{SourceKind, TrackingRow};

use super::{RecordNormalizer, required};
use crate::context::NormalizeContext;
use crate::datetime::{parse_iso_datetime, parse_jotform_datetime};
use crate::error::NormalizeError;
use crate::labels::{JOTFORM_LEGACY_LEAK, JOTFORM_LEGACY_URGENCY, leak_to_int, urgency_to_int};
use crate::values::{int_or, yes_no_to_bool};

const LEGACY_COLUMNS: &[&str] = &[
    "EventDate",
    "Accident",
    "ChangePadOrUnderware",
    "LeakAmount",
    "Urgency",
    "AwokeFromSleep",
    "PainLevel",
    "Notes",
];

const EVENT_DATE: &str = "Event Date";
const ACCIDENT: &str = "Did you have an accident";
const CHANGE_UNDERWEAR: &str = "Did you have to change your underwear?";
const LEAK_AMOUNT: &str = "Leak Amount";
const URGENCY: &str = "Urgency";
const AWAKENED: &str = "Did this awaken you from sleep?";
const PAIN_LEVEL: &str = "Pain level, if any";
const NOTES: &str = "Notes";

/// Tab-delimited extract of the original Jotform form.
#[derive(Debug, Clone, Copy, Default)]
pub struct JotformLegacyNormalizer;

impl RecordNormalizer for JotformLegacyNormalizer {
    fn source(&self) -> SourceKind {
        SourceKind::JotformLegacy
    }

    fn required_columns(&self) -> &'static [&'static str] {
        LEGACY_COLUMNS
    }

    fn normalize(
        &self,
        record: &SourceRecord,
        context: &NormalizeContext,
    ) -> Result<TrackingRow, NormalizeError> {
        let event_date = required(record, "EventDate")?.trim();
        if event_date.is_empty() {
            return Err(NormalizeError::EmptyField {
                field: "event date",
            });
        }
        let event_date =
            parse_iso_datetime(event_date).ok_or_else(|| NormalizeError::InvalidDateTime {
                value: event_date.to_string(),
            })?;

        let mut row = TrackingRow::new(context.user_id, event_date)
            .with_notes(Some(required(record, "Notes")?));
        row.id = context.next_id();
        row.accident = Some(yes_no_to_bool(required(record, "Accident")?));
        row.change_pad_or_underwear =
            Some(yes_no_to_bool(required(record, "ChangePadOrUnderware")?));
        row.leak_amount = Some(leak_to_int(
            &JOTFORM_LEGACY_LEAK,
            required(record, "LeakAmount")?,
        ));
        row.urgency = Some(urgency_to_int(
            &JOTFORM_LEGACY_URGENCY,
            required(record, "Urgency")?,
        ));
        row.awoke_from_sleep = yes_no_to_bool(required(record, "AwokeFromSleep")?);
        row.pain_level = Some(int_or(Some(required(record, "PainLevel")?), 0));
        Ok(row)
    }
}

/// Regular Jotform CSV download.
#[derive(Debug, Clone, Copy, Default)]
pub struct JotformNormalizer;

impl RecordNormalizer for JotformNormalizer {
    fn source(&self) -> SourceKind {
        SourceKind::Jotform
    }

    fn required_columns(&self) -> &'static [&'static str] {
        &[EVENT_DATE]
    }

    fn normalize(
        &self,
        record: &SourceRecord,
        context: &NormalizeContext,
    ) -> Result<TrackingRow, NormalizeError> {
        let event_date = required(record, EVENT_DATE)?.trim();
        if event_date.is_empty() {
            return Err(NormalizeError::EmptyField {
                field: "event date",
            });
        }
        let event_date =
            parse_jotform_datetime(event_date).ok_or_else(|| NormalizeError::InvalidDateTime {
                value: event_date.to_string(),
            })?;

        let flag = |column: &str| record.get(column).is_some_and(yes_no_to_bool);
        let mut row = TrackingRow::new(context.user_id, event_date).with_notes(record.get(NOTES));
        row.id = context.next_id();
        row.accident = Some(flag(ACCIDENT));
        row.change_pad_or_underwear = Some(flag(CHANGE_UNDERWEAR));
        row.leak_amount = Some(int_or(record.get(LEAK_AMOUNT), 0));
        row.urgency = Some(int_or(record.get(URGENCY), 1));
        row.awoke_from_sleep = flag(AWAKENED);
        row.pain_level = Some(int_or(record.get(PAIN_LEVEL), 0));
        Ok(row)
    }
}
