use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ids::{RecordRef, UserId};
use crate::schema::Column;
use crate::timestamp::EventTimestamp;

/// One normalized `TrackingLog` row, ready for rendering.
///
/// Optional columns are `None` when the source leaves the value to the
/// target (a column default or `NULL`); which keyword is written is a
/// property of the target schema, not of the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingRow {
    /// Explicit primary key, set only for schemas that carry an `Id` column.
    pub id: Option<Uuid>,
    pub user_id: UserId,
    pub event_date: EventTimestamp,
    pub accident: Option<bool>,
    pub change_pad_or_underwear: Option<bool>,
    pub leak_amount: Option<i32>,
    pub urgency: Option<i32>,
    pub awoke_from_sleep: bool,
    pub pain_level: Option<i32>,
    pub notes: Option<String>,
}

impl TrackingRow {
    /// A row with every optional column left to the target.
    pub fn new(user_id: UserId, event_date: EventTimestamp) -> Self {
        Self {
            id: None,
            user_id,
            event_date,
            accident: None,
            change_pad_or_underwear: None,
            leak_amount: None,
            urgency: None,
            awoke_from_sleep: false,
            pain_level: None,
            notes: None,
        }
    }

    /// Set notes, mapping blank text to `None`.
    pub fn with_notes(mut self, notes: Option<&str>) -> Self {
        self.notes = notes
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string);
        self
    }

    /// Values that the target table's CHECK constraints would reject.
    pub fn range_issues(&self) -> Vec<RangeIssue> {
        let checks = [
            (Column::LeakAmount, self.leak_amount, LEAK_AMOUNT_RANGE),
            (Column::PainLevel, self.pain_level, PAIN_LEVEL_RANGE),
            (Column::Urgency, self.urgency, URGENCY_RANGE),
        ];
        checks
            .into_iter()
            .filter_map(|(column, value, (min, max))| {
                let value = value?;
                (value < min || value > max).then_some(RangeIssue {
                    column,
                    value,
                    min,
                    max,
                })
            })
            .collect()
    }
}

/// Inclusive `LeakAmount` bounds enforced by the target table.
pub const LEAK_AMOUNT_RANGE: (i32, i32) = (0, 3);
/// Inclusive `PainLevel` bounds enforced by the target table.
pub const PAIN_LEVEL_RANGE: (i32, i32) = (0, 10);
/// Inclusive `Urgency` bounds enforced by the target table.
pub const URGENCY_RANGE: (i32, i32) = (0, 4);

/// A column value outside the target table's CHECK constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeIssue {
    pub column: Column,
    pub value: i32,
    pub min: i32,
    pub max: i32,
}

impl std::fmt::Display for RangeIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} value {} outside {}..={}",
            self.column.name(),
            self.value,
            self.min,
            self.max
        )
    }
}

/// A source record that was dropped before reaching the writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRecord {
    pub reference: RecordRef,
    pub reason: String,
}
