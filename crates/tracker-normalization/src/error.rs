//! Reasons a source record is dropped.

use thiserror::Error;

/// Why a record could not become a row. Never fatal for the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// The header has no column of this name.
    #[error("missing column '{column}'")]
    MissingColumn { column: &'static str },

    /// A required field is blank.
    #[error("no {field}")]
    EmptyField { field: &'static str },

    /// Date/time text that does not match the source's format.
    #[error("invalid date format: {value}")]
    InvalidDateTime { value: String },

    /// An entry line appeared before any date line.
    #[error("no date context for time '{time}'")]
    MissingDateContext { time: String },

    #[error("time '{time}' is followed by text without a comma")]
    UnseparatedTime { time: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        assert_eq!(
            NormalizeError::MissingColumn { column: "Urgency" }.to_string(),
            "missing column 'Urgency'"
        );
        assert_eq!(
            NormalizeError::EmptyField { field: "event date" }.to_string(),
            "no event date"
        );
    }
}
