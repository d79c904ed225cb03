//! Raw source records.

use tracker_model::RecordRef;

/// One row of a delimited export: header names paired with raw cell text.
///
/// Field order follows the header. Short rows simply lack the trailing
/// fields; lookups for them return `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRecord {
    pub reference: RecordRef,
    fields: Vec<(String, String)>,
}

impl SourceRecord {
    pub fn new(reference: RecordRef, fields: Vec<(String, String)>) -> Self {
        Self { reference, fields }
    }

    /// Raw value of the first field named `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A record the reader could not decode; the run continues without it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreadableRecord {
    pub reference: RecordRef,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_first_match_in_header_order() {
        let record = SourceRecord::new(
            RecordRef::Row(1),
            vec![
                ("Urgency".to_string(), "2".to_string()),
                ("Notes".to_string(), "".to_string()),
                ("Urgency".to_string(), "3".to_string()),
            ],
        );
        assert_eq!(record.get("Urgency"), Some("2"));
        assert_eq!(record.get("Notes"), Some(""));
        assert_eq!(record.get("Pain Level"), None);
        assert_eq!(record.len(), 3);
    }
}
