//! Line-oriented text exports.

use std::fs;
use std::path::Path;

use tracing::warn;

use tracker_model::RecordRef;

use crate::error::{IngestError, Result};

/// One line of a text export with surrounding whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    pub reference: RecordRef,
    pub text: String,
}

/// Read every line of `path`.
///
/// A leading byte-order mark is dropped. Bytes that are not valid UTF-8 are
/// replaced rather than failing the whole file; the affected lines will
/// simply not match any entry pattern.
pub fn read_text_lines(path: &Path) -> Result<Vec<TextLine>> {
    let bytes = fs::read(path).map_err(|error| IngestError::from_io(path, error))?;
    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(error) => {
            warn!(
                path = %path.display(),
                "input is not valid UTF-8; invalid bytes were replaced"
            );
            String::from_utf8_lossy(error.as_bytes()).into_owned()
        }
    };
    Ok(split_lines(&content))
}

/// Split already-loaded text into numbered, trimmed lines.
pub fn split_lines(content: &str) -> Vec<TextLine> {
    content
        .trim_start_matches('\u{feff}')
        .lines()
        .enumerate()
        .map(|(index, line)| TextLine {
            reference: RecordRef::Line(index + 1),
            text: line.trim().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_lines_numbers_from_one_and_trims() {
        let lines = split_lines("\u{feff}2025-03-06\r\n  10:30, pain:2  \n\n");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text, "2025-03-06");
        assert_eq!(lines[1].reference, RecordRef::Line(2));
        assert_eq!(lines[1].text, "10:30, pain:2");
        assert_eq!(lines[2].text, "");
    }
}
