//! OneNote page content parsing.
//!
//! A page is titled with its date and holds one entry per line, e.g.
//! `14:05 pain:3 urgency:2 notes:"after lunch"`. Unlike the free-text
//! export, fields may appear anywhere in the line and need no commas.

use std::sync::LazyLock;

use regex::Regex;

use tracker_model::RecordRef;

use crate::text::TextLine;

static TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2}:\d{2})").expect("valid time pattern"));
static PAIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"pain:(\d+)").expect("valid pain pattern"));
static URGENCY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"urgency:(\d+)").expect("valid urgency pattern"));
static NOTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"notes:"([^"]*)""#).expect("valid notes pattern"));

/// Raw fields of one page entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEntry {
    pub reference: RecordRef,
    /// `HH:MM` at the start of the line.
    pub time: String,
    /// Digits following `pain:`.
    pub pain: Option<String>,
    /// Digits following `urgency:`.
    pub urgency: Option<String>,
    /// Text of a closed `notes:"..."` field.
    pub notes: Option<String>,
}

/// Extract entries from the lines of one page. Lines that do not start
/// with a two-digit `HH:MM` are not entries.
pub fn parse_page_lines(lines: &[TextLine]) -> Vec<PageEntry> {
    lines.iter().filter_map(parse_page_line).collect()
}

pub fn parse_page_line(line: &TextLine) -> Option<PageEntry> {
    let text = line.text.trim();
    let time = TIME.captures(text)?.get(1)?.as_str().to_string();
    Some(PageEntry {
        reference: line.reference,
        time,
        pain: capture(&PAIN, text),
        urgency: capture(&URGENCY, text),
        notes: capture(&NOTES, text),
    })
}

fn capture(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|value| value.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::split_lines;

    #[test]
    fn extracts_fields_anywhere_in_line() {
        let lines = split_lines("14:05 urgency:2 pain:3 notes:\"after lunch\"\n");
        let entries = parse_page_lines(&lines);
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.time, "14:05");
        assert_eq!(entry.pain.as_deref(), Some("3"));
        assert_eq!(entry.urgency.as_deref(), Some("2"));
        assert_eq!(entry.notes.as_deref(), Some("after lunch"));
    }

    #[test]
    fn skips_lines_without_leading_two_digit_time() {
        let lines = split_lines("Daily log\n9:05 pain:1\n<p>10:00</p>\n22:30\n");
        let entries = parse_page_lines(&lines);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].time, "22:30");
        assert_eq!(entries[0].reference, RecordRef::Line(4));
        assert_eq!(entries[0].pain, None);
    }

    #[test]
    fn unterminated_notes_are_not_captured() {
        let lines = split_lines("08:00 notes:\"no closing quote\n");
        assert_eq!(parse_page_lines(&lines)[0].notes, None);
    }
}
