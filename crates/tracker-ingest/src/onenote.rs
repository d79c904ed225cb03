//! OneNote free-text export parsing.
//!
//! The export is a sequence of date lines and entry lines:
//!
//! ```text
//! 2025-03-06 Thursday
//! 07:15, pain:2, urgency:1, notes:"woke up, was sleeping"
//! 10:40, urgency:2
//! ```
//!
//! A date line sets the date for the entries that follow it. Entry fields
//! are kept as raw text; turning them into typed values is the
//! normalizer's job.

use std::sync::LazyLock;

use regex::Regex;

use tracker_model::RecordRef;

use crate::text::TextLine;

static ENTRY_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}:\d{2}").expect("valid entry start pattern"));

const NOTES_MARKER: &str = "notes:\"";
const SLEEPING_MARKER: &str = "was sleeping";

/// Raw fields of one entry line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneNoteEntry {
    pub reference: RecordRef,
    /// Date context in effect when the line was read, if any.
    pub date: Option<String>,
    /// First comma-separated segment of the line.
    pub time: String,
    pub pain: Option<String>,
    pub urgency: Option<String>,
    pub notes: Option<String>,
    pub was_sleeping: bool,
}

/// What a single line contributed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line started a new date context.
    Date(String),
    /// The line is not an entry (blank, a lone comma, prose).
    Ignored,
    Entry(OneNoteEntry),
}

/// Stateful line parser; holds the current date context.
#[derive(Debug, Default)]
pub struct OneNoteLineParser {
    current_date: Option<String>,
}

impl OneNoteLineParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_date(&self) -> Option<&str> {
        self.current_date.as_deref()
    }

    pub fn parse_line(&mut self, line: &TextLine) -> LineOutcome {
        let text = line.text.trim();
        if let Some(date) = date_context(text) {
            self.current_date = Some(date.to_string());
            return LineOutcome::Date(date.to_string());
        }
        if text.is_empty() || text == "," || !ENTRY_START.is_match(text) {
            return LineOutcome::Ignored;
        }
        let time = text.split(',').next().unwrap_or_default().trim().to_string();
        LineOutcome::Entry(OneNoteEntry {
            reference: line.reference,
            date: self.current_date.clone(),
            time,
            pain: labeled_field(text, "pain"),
            urgency: labeled_field(text, "urgency"),
            notes: quoted_notes(text),
            was_sleeping: text.contains(SLEEPING_MARKER),
        })
    }
}

/// Parse every line, keeping only the entries.
pub fn parse_onenote_lines(lines: &[TextLine]) -> Vec<OneNoteEntry> {
    let mut parser = OneNoteLineParser::new();
    lines
        .iter()
        .filter_map(|line| match parser.parse_line(line) {
            LineOutcome::Entry(entry) => Some(entry),
            LineOutcome::Date(_) | LineOutcome::Ignored => None,
        })
        .collect()
}

/// A date line is one token, or a token plus a weekday, whose first token
/// contains a hyphen.
fn date_context(text: &str) -> Option<&str> {
    let mut tokens = text.split_whitespace();
    let first = tokens.next()?;
    let rest = tokens.count();
    if rest > 1 || !first.contains('-') || ENTRY_START.is_match(first) {
        return None;
    }
    Some(first)
}

/// Value of the first comma-separated segment that starts with `label:`.
///
/// The value ends at the next colon, so `pain:3` yields `3`.
pub fn labeled_field(line: &str, label: &str) -> Option<String> {
    line.split(',').find_map(|segment| {
        let rest = segment.trim().strip_prefix(label)?.strip_prefix(':')?;
        Some(rest.split(':').next().unwrap_or_default().trim().to_string())
    })
}

/// Text between `notes:"` and the next quote; the rest of the line when
/// the closing quote is missing.
pub fn quoted_notes(line: &str) -> Option<String> {
    let start = line.find(NOTES_MARKER)? + NOTES_MARKER.len();
    let rest = &line[start..];
    let notes = match rest.find('"') {
        Some(end) => &rest[..end],
        None => rest,
    };
    Some(notes.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(number: usize, text: &str) -> TextLine {
        TextLine {
            reference: RecordRef::Line(number),
            text: text.to_string(),
        }
    }

    #[test]
    fn date_lines_set_context() {
        let mut parser = OneNoteLineParser::new();
        assert_eq!(
            parser.parse_line(&line(1, "2025-03-06")),
            LineOutcome::Date("2025-03-06".to_string())
        );
        assert_eq!(
            parser.parse_line(&line(2, "2025-03-07 Friday")),
            LineOutcome::Date("2025-03-07".to_string())
        );
        assert_eq!(parser.current_date(), Some("2025-03-07"));
    }

    #[test]
    fn prose_and_blank_lines_are_ignored() {
        let mut parser = OneNoteLineParser::new();
        for text in ["", ",", "felt fine today", "three word - line here"] {
            assert_eq!(parser.parse_line(&line(1, text)), LineOutcome::Ignored);
        }
        assert_eq!(parser.current_date(), None);
    }

    #[test]
    fn entry_fields_are_extracted() {
        let mut parser = OneNoteLineParser::new();
        parser.parse_line(&line(1, "2025-03-06"));
        let outcome = parser.parse_line(&line(
            2,
            r#"07:15, pain:2, urgency:3, notes:"woke up, was sleeping""#,
        ));
        let LineOutcome::Entry(entry) = outcome else {
            panic!("expected entry, got {outcome:?}");
        };
        assert_eq!(entry.date.as_deref(), Some("2025-03-06"));
        assert_eq!(entry.time, "07:15");
        assert_eq!(entry.pain.as_deref(), Some("2"));
        assert_eq!(entry.urgency.as_deref(), Some("3"));
        assert_eq!(entry.notes.as_deref(), Some("woke up, was sleeping"));
        assert!(entry.was_sleeping);
    }

    #[test]
    fn entry_without_date_context_keeps_none() {
        let entries = parse_onenote_lines(&[line(1, "09:00, pain:1")]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].date, None);
    }

    #[test]
    fn first_labeled_segment_wins() {
        assert_eq!(
            labeled_field("08:00, pain:4, pain:7", "pain").as_deref(),
            Some("4")
        );
        assert_eq!(labeled_field("08:00, urgency:2", "pain"), None);
    }

    #[test]
    fn unterminated_notes_take_rest_of_line() {
        assert_eq!(
            quoted_notes(r#"08:00, notes:"ran late, no pad"#).as_deref(),
            Some("ran late, no pad")
        );
        assert_eq!(quoted_notes("08:00, pain:1"), None);
    }

    #[test]
    fn sleeping_flag_is_plain_substring() {
        let entries = parse_onenote_lines(&[
            line(1, "2025-03-06"),
            line(2, r#"03:10, notes:"was not sleeping, honestly was sleeping""#),
            line(3, "04:00, urgency:1"),
        ]);
        assert!(entries[0].was_sleeping);
        assert!(!entries[1].was_sleeping);
    }
}
