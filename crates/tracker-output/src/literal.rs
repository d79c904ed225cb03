//! SQL literal and identifier rendering.
//!
//! | Value     | PostgreSQL                              | SQL Server                  |
//! |-----------|-----------------------------------------|-----------------------------|
//! | timestamp | `TIMESTAMP WITH TIME ZONE '…T…[offset]'`| `'… …'` or `'… ….fff'`       |
//! | bool      | `true` / `false`                        | `1` / `0`                   |
//! | UUID      | lowercase                               | uppercase                   |
//! | text      | single quotes doubled                   | single quotes doubled       |

use uuid::Uuid;

use tracker_model::{
    Column, EventTimestamp, POSTGRES_SCHEMA, SqlDialect, TABLE_NAME, TargetSchema, TimestampStyle,
    TrackingRow,
};

/// Quote an identifier for the dialect.
pub fn quote_identifier(dialect: SqlDialect, name: &str) -> String {
    match dialect {
        SqlDialect::Postgres => format!("\"{}\"", name.replace('"', "\"\"")),
        SqlDialect::SqlServer => format!("[{}]", name.replace(']', "]]")),
    }
}

/// Qualified `TrackingLog` reference: `public."TrackingLog"` or `[TrackingLog]`.
pub fn table_reference(dialect: SqlDialect) -> String {
    match dialect {
        SqlDialect::Postgres => format!(
            "{POSTGRES_SCHEMA}.{}",
            quote_identifier(dialect, TABLE_NAME)
        ),
        SqlDialect::SqlServer => quote_identifier(dialect, TABLE_NAME),
    }
}

/// Double every single quote.
pub fn escape_text(value: &str) -> String {
    value.replace('\'', "''")
}

/// A single-quoted string literal.
pub fn text_literal(value: &str) -> String {
    format!("'{}'", escape_text(value))
}

pub fn bool_literal(dialect: SqlDialect, value: bool) -> &'static str {
    match (dialect, value) {
        (SqlDialect::Postgres, true) => "true",
        (SqlDialect::Postgres, false) => "false",
        (SqlDialect::SqlServer, true) => "1",
        (SqlDialect::SqlServer, false) => "0",
    }
}

/// Quoted UUID, lowercase for PostgreSQL and uppercase for SQL Server.
pub fn uuid_literal(dialect: SqlDialect, value: &Uuid) -> String {
    let hyphenated = value.hyphenated();
    match dialect {
        SqlDialect::Postgres => format!("'{hyphenated}'"),
        SqlDialect::SqlServer => format!("'{}'", hyphenated.to_string().to_uppercase()),
    }
}

pub fn timestamp_literal(style: TimestampStyle, value: &EventTimestamp) -> String {
    match style {
        TimestampStyle::TypedIso => format!("TIMESTAMP WITH TIME ZONE '{value}'"),
        TimestampStyle::Seconds => {
            format!("'{}'", value.local().format("%Y-%m-%d %H:%M:%S"))
        }
        TimestampStyle::Millis => {
            format!("'{}'", value.local().format("%Y-%m-%d %H:%M:%S%.3f"))
        }
    }
}

/// Renders rows and statement headers for one target schema.
#[derive(Debug, Clone)]
pub struct SqlRenderer {
    schema: TargetSchema,
}

impl SqlRenderer {
    pub fn new(schema: TargetSchema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &TargetSchema {
        &self.schema
    }

    /// `INSERT INTO <table> (<columns>) VALUES` followed by a newline.
    pub fn statement_header(&self) -> String {
        let dialect = self.schema.dialect;
        let columns = self
            .schema
            .columns
            .iter()
            .map(|column| quote_identifier(dialect, column.name()))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "INSERT INTO {} ({columns}) VALUES\n",
            table_reference(dialect)
        )
    }

    /// One parenthesized tuple in the schema's column order.
    pub fn render_row(&self, row: &TrackingRow) -> String {
        let values = self
            .schema
            .columns
            .iter()
            .map(|column| self.render_value(row, *column))
            .collect::<Vec<_>>()
            .join(", ");
        format!("({values})")
    }

    /// A full statement: header, tuples joined by `,\n`, then `;` and a blank line.
    pub fn render_statement(&self, tuples: &[String]) -> String {
        let mut statement = self.statement_header();
        statement.push_str(&tuples.join(",\n"));
        statement.push_str(";\n\n");
        statement
    }

    pub fn render_value(&self, row: &TrackingRow, column: Column) -> String {
        let dialect = self.schema.dialect;
        let missing = || self.schema.missing.keyword().to_string();
        match column {
            Column::Id => row
                .id
                .map_or_else(missing, |id| uuid_literal(dialect, &id)),
            Column::UserId => uuid_literal(dialect, row.user_id.as_uuid()),
            Column::EventDate => timestamp_literal(self.schema.timestamp_style, &row.event_date),
            Column::Accident => row
                .accident
                .map_or_else(missing, |value| bool_literal(dialect, value).to_string()),
            Column::ChangePadOrUnderware => row
                .change_pad_or_underwear
                .map_or_else(missing, |value| bool_literal(dialect, value).to_string()),
            Column::LeakAmount => row
                .leak_amount
                .map_or_else(missing, |value| value.to_string()),
            Column::Urgency => row.urgency.map_or_else(missing, |value| value.to_string()),
            Column::AwokeFromSleep => bool_literal(dialect, row.awoke_from_sleep).to_string(),
            Column::PainLevel => row
                .pain_level
                .map_or_else(missing, |value| value.to_string()),
            Column::Notes => row
                .notes
                .as_deref()
                .map_or_else(missing, text_literal),
        }
    }
}
