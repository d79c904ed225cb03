//! Supported export formats.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schema::{MissingValue, TargetSchema};

/// An export format together with the table layout it is imported into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    /// Tab-delimited Jotform extract with already-flattened column names.
    JotformLegacy,
    /// Jotform CSV download with the form's question text as headers.
    Jotform,
    /// Tally CSV download.
    Tally,
    /// OneNote free-text export with date lines between entries.
    #[serde(rename = "onenote")]
    OneNote,
    /// A single saved OneNote page titled with its date.
    #[serde(rename = "onenote-page")]
    OneNotePage,
}

impl SourceKind {
    pub const ALL: [SourceKind; 5] = [
        SourceKind::JotformLegacy,
        SourceKind::Jotform,
        SourceKind::Tally,
        SourceKind::OneNote,
        SourceKind::OneNotePage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::JotformLegacy => "jotform-legacy",
            SourceKind::Jotform => "jotform",
            SourceKind::Tally => "tally",
            SourceKind::OneNote => "onenote",
            SourceKind::OneNotePage => "onenote-page",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SourceKind::JotformLegacy => "Jotform tab-delimited extract",
            SourceKind::Jotform => "Jotform CSV download",
            SourceKind::Tally => "Tally CSV download",
            SourceKind::OneNote => "OneNote free-text export",
            SourceKind::OneNotePage => "OneNote page content",
        }
    }

    /// Layout of the table this export is written into.
    pub fn target_schema(&self) -> TargetSchema {
        match self {
            SourceKind::JotformLegacy => TargetSchema::postgres_import(),
            SourceKind::Jotform => TargetSchema::sql_server_keyed(),
            SourceKind::Tally => TargetSchema::sql_server_import(),
            SourceKind::OneNote => {
                TargetSchema::postgres_import().with_missing(MissingValue::Default)
            }
            SourceKind::OneNotePage => TargetSchema::postgres_page(),
        }
    }

    /// Whether each output file holds exactly one statement.
    pub fn shards_output(&self) -> bool {
        matches!(self, SourceKind::Tally)
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
