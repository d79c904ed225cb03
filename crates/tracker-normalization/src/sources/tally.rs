//! Tally form CSV export.

use tracker_ingest::SourceRecord;
use tracker_model::{SourceKind, TrackingRow};

use super::{RecordNormalizer, required};
use crate::context::NormalizeContext;
use crate::datetime::parse_date_and_time;
use crate::error::NormalizeError;
use crate::labels::{TALLY_LEAK, TALLY_URGENCY, leak_to_int, urgency_to_int};
use crate::values::{parse_int_like, yes_no_to_bool};

const EVENT_DATE: &str = "Event Date";
const EVENT_TIME: &str = "Event Time";
const ACCIDENT: &str = "Did you have an accident?";
const CHANGE_PAD: &str = "Did you have to change your pad/underwear?";
const LEAK_AMOUNT: &str = "Leak Amount";
const URGENCY: &str = "Urgency";
const SLEEPING: &str = "Were you sleeping?";
const PAIN_LEVEL: &str = "Pain Level";
const NOTES: &str = "Notes";

const REQUIRED: &[&str] = &[
    EVENT_DATE,
    EVENT_TIME,
    ACCIDENT,
    LEAK_AMOUNT,
    URGENCY,
    SLEEPING,
    PAIN_LEVEL,
    NOTES,
];

/// Answer assumed when the form version has no pad/underwear question.
const CHANGE_PAD_FALLBACK: &str = "No";

#[derive(Debug, Clone, Copy, Default)]
pub struct TallyNormalizer;

impl RecordNormalizer for TallyNormalizer {
    fn source(&self) -> SourceKind {
        SourceKind::Tally
    }

    fn required_columns(&self) -> &'static [&'static str] {
        REQUIRED
    }

    fn normalize(
        &self,
        record: &SourceRecord,
        context: &NormalizeContext,
    ) -> Result<TrackingRow, NormalizeError> {
        let date = required(record, EVENT_DATE)?;
        let time = required(record, EVENT_TIME)?;
        let event_date =
            parse_date_and_time(date, time).ok_or_else(|| NormalizeError::InvalidDateTime {
                value: format!("{} {}", date.trim(), time.trim()),
            })?;

        let mut row = TrackingRow::new(context.user_id, event_date)
            .with_notes(Some(required(record, NOTES)?));
        row.id = context.next_id();
        row.accident = Some(yes_no_to_bool(required(record, ACCIDENT)?));
        row.change_pad_or_underwear = Some(yes_no_to_bool(
            record.get(CHANGE_PAD).unwrap_or(CHANGE_PAD_FALLBACK),
        ));
        row.leak_amount = Some(leak_to_int(&TALLY_LEAK, required(record, LEAK_AMOUNT)?));
        row.urgency = Some(urgency_to_int(&TALLY_URGENCY, required(record, URGENCY)?));
        row.awoke_from_sleep = yes_no_to_bool(required(record, SLEEPING)?);
        row.pain_level = parse_int_like(required(record, PAIN_LEVEL)?);
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_model::{RecordRef, TargetSchema, UserId};

    fn record(extra: &[(&str, &str)]) -> SourceRecord {
        let mut fields = vec![
            (EVENT_DATE, "2025-01-02"),
            (EVENT_TIME, "8:05"),
            (ACCIDENT, "No"),
            (LEAK_AMOUNT, "3 - Heavy"),
            (URGENCY, "3 - Very Urgent"),
            (SLEEPING, "Yes"),
            (PAIN_LEVEL, ""),
            (NOTES, ""),
        ];
        for (name, value) in extra {
            match fields.iter_mut().find(|(field, _)| field == name) {
                Some(field) => field.1 = *value,
                None => fields.push((*name, *value)),
            }
        }
        SourceRecord::new(
            RecordRef::Row(4),
            fields
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        )
    }

    fn context() -> NormalizeContext {
        let user: UserId = "91a77400-564e-4312-8db5-bcd869a786ce".parse().unwrap();
        NormalizeContext::new(user, &TargetSchema::sql_server_import())
    }

    #[test]
    fn maps_tally_labels() {
        let row = TallyNormalizer.normalize(&record(&[]), &context()).unwrap();
        assert_eq!(row.event_date.to_string(), "2025-01-02T08:05:00");
        assert_eq!(row.id, None);
        assert_eq!(row.accident, Some(false));
        assert_eq!(row.leak_amount, Some(3));
        assert_eq!(row.urgency, Some(3));
        assert!(row.awoke_from_sleep);
        assert_eq!(row.pain_level, None);
        assert_eq!(row.notes, None);
    }

    #[test]
    fn change_pad_column_is_optional() {
        let row = TallyNormalizer.normalize(&record(&[]), &context()).unwrap();
        assert_eq!(row.change_pad_or_underwear, Some(false));
        let row = TallyNormalizer
            .normalize(&record(&[(CHANGE_PAD, "Yes")]), &context())
            .unwrap();
        assert_eq!(row.change_pad_or_underwear, Some(true));
    }

    #[test]
    fn pain_passes_through_when_numeric() {
        let row = TallyNormalizer
            .normalize(&record(&[(PAIN_LEVEL, "4")]), &context())
            .unwrap();
        assert_eq!(row.pain_level, Some(4));
    }

    #[test]
    fn bad_time_skips_the_row() {
        assert_eq!(
            TallyNormalizer.normalize(&record(&[(EVENT_TIME, "noon")]), &context()),
            Err(NormalizeError::InvalidDateTime {
                value: "2025-01-02 noon".to_string()
            })
        );
    }
}
