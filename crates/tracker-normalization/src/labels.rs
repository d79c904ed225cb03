//! Per-form label tables.
//!
//! Each form words its choices differently ("1 - Somewhat urgent" on one,
//! "1 - Slight Urgency" on another) and the scales differ (0-2 vs 0-3).
//! Tables are therefore kept per source and matched on the exact label.

/// Fixed mapping from a form's choice labels to stored integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelTable {
    pub name: &'static str,
    pub entries: &'static [(&'static str, i32)],
    /// Value used for blank or unrecognized labels.
    pub default: i32,
}

impl LabelTable {
    /// Exact-match lookup after trimming surrounding whitespace.
    pub fn get(&self, label: &str) -> Option<i32> {
        let trimmed = label.trim();
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == trimmed)
            .map(|(_, value)| *value)
    }

    /// Mapped value, or the table default when the label is not listed.
    pub fn resolve(&self, label: &str) -> i32 {
        self.get(label).unwrap_or(self.default)
    }
}

/// Urgency choices of the Jotform form behind the tab-delimited extract.
pub const JOTFORM_LEGACY_URGENCY: LabelTable = LabelTable {
    name: "jotform-legacy urgency",
    entries: &[
        ("0 - No real urgency", 0),
        ("1 - Somewhat urgent", 1),
        ("2 - Pretty urgent", 2),
    ],
    default: 1,
};

/// Leak choices of the Jotform form behind the tab-delimited extract.
pub const JOTFORM_LEGACY_LEAK: LabelTable = LabelTable {
    name: "jotform-legacy leak",
    entries: &[("1. Slight", 1), ("2. Moderate", 2), ("3. Heavy", 3)],
    default: 1,
};

/// Urgency choices of the Tally form.
pub const TALLY_URGENCY: LabelTable = LabelTable {
    name: "tally urgency",
    entries: &[
        ("0 - No real urgency", 0),
        ("1 - Slight Urgency", 1),
        ("2 - Pretty Urgent", 2),
        ("3 - Very Urgent", 3),
    ],
    default: 1,
};

/// Leak choices of the Tally form.
pub const TALLY_LEAK: LabelTable = LabelTable {
    name: "tally leak",
    entries: &[("1 - Slight", 1), ("2 - Moderate", 2), ("3 - Heavy", 3)],
    default: 1,
};

/// Free function form of [`LabelTable::resolve`] for urgency tables.
pub fn urgency_to_int(table: &LabelTable, label: &str) -> i32 {
    table.resolve(label)
}

/// Free function form of [`LabelTable::resolve`] for leak tables.
pub fn leak_to_int(table: &LabelTable, label: &str) -> i32 {
    table.resolve(label)
}
