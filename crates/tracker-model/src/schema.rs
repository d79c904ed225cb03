//! Target `TrackingLog` layouts.
//!
//! The same logical table exists in a PostgreSQL database and a SQL Server
//! database. The two differ in identifier quoting, literal syntax and, for
//! some imports, in whether the primary key is supplied explicitly.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of the target table in both databases.
pub const TABLE_NAME: &str = "TrackingLog";

/// Schema that holds the table in PostgreSQL.
pub const POSTGRES_SCHEMA: &str = "public";

/// SQL Server accepts at most this many rows in one `VALUES` clause.
pub const DEFAULT_MAX_ROWS_PER_STATEMENT: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SqlDialect {
    Postgres,
    SqlServer,
}

impl SqlDialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            SqlDialect::Postgres => "postgres",
            SqlDialect::SqlServer => "sql-server",
        }
    }
}

impl fmt::Display for SqlDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `TrackingLog` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    Id,
    UserId,
    EventDate,
    Accident,
    ChangePadOrUnderware,
    LeakAmount,
    Urgency,
    AwokeFromSleep,
    PainLevel,
    Notes,
}

impl Column {
    /// Column name as declared in the table.
    pub fn name(&self) -> &'static str {
        match self {
            Column::Id => "Id",
            Column::UserId => "UserId",
            Column::EventDate => "EventDate",
            Column::Accident => "Accident",
            Column::ChangePadOrUnderware => "ChangePadOrUnderware",
            Column::LeakAmount => "LeakAmount",
            Column::Urgency => "Urgency",
            Column::AwokeFromSleep => "AwokeFromSleep",
            Column::PainLevel => "PainLevel",
            Column::Notes => "Notes",
        }
    }
}

/// Column order used by the bulk import scripts: user last, no key.
pub const IMPORT_COLUMNS: [Column; 9] = [
    Column::EventDate,
    Column::Accident,
    Column::ChangePadOrUnderware,
    Column::LeakAmount,
    Column::Urgency,
    Column::AwokeFromSleep,
    Column::PainLevel,
    Column::Notes,
    Column::UserId,
];

/// Column order used when the key is generated client-side and the user
/// column directly follows it.
pub const KEYED_COLUMNS: [Column; 10] = [
    Column::Id,
    Column::UserId,
    Column::EventDate,
    Column::Accident,
    Column::ChangePadOrUnderware,
    Column::LeakAmount,
    Column::Urgency,
    Column::AwokeFromSleep,
    Column::PainLevel,
    Column::Notes,
];

/// Column order of a page import: key first, otherwise the import order.
pub const PAGE_COLUMNS: [Column; 10] = [
    Column::Id,
    Column::EventDate,
    Column::Accident,
    Column::ChangePadOrUnderware,
    Column::LeakAmount,
    Column::Urgency,
    Column::AwokeFromSleep,
    Column::PainLevel,
    Column::Notes,
    Column::UserId,
];

/// Keyword written for a value the source leaves to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingValue {
    #[default]
    Null,
    /// Let the column default apply.
    Default,
}

impl MissingValue {
    pub fn keyword(&self) -> &'static str {
        match self {
            MissingValue::Null => "NULL",
            MissingValue::Default => "DEFAULT",
        }
    }
}

/// How event timestamps are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimestampStyle {
    /// `TIMESTAMP WITH TIME ZONE '2025-03-06T15:46:00'`.
    TypedIso,
    /// `'2025-03-06 15:46:00'`.
    Seconds,
    /// `'2025-03-06 15:46:00.000'`, matching `datetime2` with millisecond precision.
    Millis,
}

/// Everything the writer needs to know about the table it targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSchema {
    pub dialect: SqlDialect,
    pub columns: Vec<Column>,
    pub timestamp_style: TimestampStyle,
    pub missing: MissingValue,
}

impl TargetSchema {
    /// PostgreSQL bulk import layout.
    pub fn postgres_import() -> Self {
        Self {
            dialect: SqlDialect::Postgres,
            columns: IMPORT_COLUMNS.to_vec(),
            timestamp_style: TimestampStyle::TypedIso,
            missing: MissingValue::Null,
        }
    }

    /// PostgreSQL layout for page imports that supply their own keys.
    pub fn postgres_page() -> Self {
        Self {
            columns: PAGE_COLUMNS.to_vec(),
            ..Self::postgres_import()
        }
    }

    /// SQL Server bulk import layout.
    pub fn sql_server_import() -> Self {
        Self {
            dialect: SqlDialect::SqlServer,
            columns: IMPORT_COLUMNS.to_vec(),
            timestamp_style: TimestampStyle::Seconds,
            missing: MissingValue::Null,
        }
    }

    /// SQL Server layout with a client-generated key.
    pub fn sql_server_keyed() -> Self {
        Self {
            columns: KEYED_COLUMNS.to_vec(),
            timestamp_style: TimestampStyle::Millis,
            ..Self::sql_server_import()
        }
    }

    #[must_use]
    pub fn with_missing(mut self, missing: MissingValue) -> Self {
        self.missing = missing;
        self
    }

    /// Whether rows must carry a generated key.
    pub fn has_id_column(&self) -> bool {
        self.columns.contains(&Column::Id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyed_layouts_include_id() {
        assert!(TargetSchema::sql_server_keyed().has_id_column());
        assert!(TargetSchema::postgres_page().has_id_column());
        assert!(!TargetSchema::postgres_import().has_id_column());
        assert!(!TargetSchema::sql_server_import().has_id_column());
    }

    #[test]
    fn with_missing_only_changes_keyword() {
        let schema = TargetSchema::postgres_import().with_missing(MissingValue::Default);
        assert_eq!(schema.missing.keyword(), "DEFAULT");
        assert_eq!(schema.columns, IMPORT_COLUMNS.to_vec());
        assert_eq!(schema.dialect, SqlDialect::Postgres);
    }
}
