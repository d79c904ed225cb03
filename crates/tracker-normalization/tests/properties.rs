//! Property tests for the value conversions and source normalizers.

use proptest::prelude::*;

use tracker_ingest::SourceRecord;
use tracker_model::{RecordRef, TargetSchema, UserId};
use tracker_normalization::{
    JOTFORM_LEGACY_LEAK, JOTFORM_LEGACY_URGENCY, NormalizeContext, TALLY_LEAK, TALLY_URGENCY,
    missing_columns, parse_int_like, record_normalizer, yes_no_to_bool,
};

fn user() -> UserId {
    "8e3ddf21-4153-4838-abc6-47d553a5d905".parse().unwrap()
}

proptest! {
    #[test]
    fn only_yes_spellings_are_true(value in "\\PC{0,12}") {
        let expected = matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "yes" | "y" | "true" | "1"
        );
        prop_assert_eq!(yes_no_to_bool(&value), expected);
    }

    #[test]
    fn unknown_labels_default_to_one(label in "[a-z ]{0,20}") {
        for table in [JOTFORM_LEGACY_URGENCY, JOTFORM_LEGACY_LEAK, TALLY_URGENCY, TALLY_LEAK] {
            prop_assert_eq!(table.resolve(&label), 1);
        }
    }

    #[test]
    fn integers_survive_whitespace_and_decimal_zero(value in -10_000i32..10_000, pad in 0usize..3) {
        let spaces = " ".repeat(pad);
        prop_assert_eq!(parse_int_like(&format!("{spaces}{value}{spaces}")), Some(value));
        prop_assert_eq!(parse_int_like(&format!("{value}.0")), Some(value));
    }

    #[test]
    fn jotform_download_never_fails_on_optional_fields(
        leak in "\\PC{0,6}",
        urgency in "\\PC{0,6}",
        pain in "\\PC{0,6}",
    ) {
        let normalizer = record_normalizer(tracker_model::SourceKind::Jotform).unwrap();
        let record = SourceRecord::new(
            RecordRef::Row(1),
            vec![
                ("Event Date".to_string(), "Mar 6, 2025 03:46 PM".to_string()),
                ("Leak Amount".to_string(), leak),
                ("Urgency".to_string(), urgency),
                ("Pain level, if any".to_string(), pain),
            ],
        );
        let context = NormalizeContext::new(user(), &TargetSchema::sql_server_keyed());
        prop_assert!(normalizer.normalize(&record, &context).is_ok());
    }
}

#[test]
fn each_label_maps_to_its_listed_value() {
    for table in [JOTFORM_LEGACY_URGENCY, JOTFORM_LEGACY_LEAK, TALLY_URGENCY, TALLY_LEAK] {
        for (label, value) in table.entries {
            assert_eq!(table.resolve(label), *value, "{} {label}", table.name);
        }
    }
}

#[test]
fn missing_required_columns_are_listed() {
    let normalizer = record_normalizer(tracker_model::SourceKind::Tally).unwrap();
    let headers: Vec<String> = ["Event Date", "Event Time", "Notes"]
        .iter()
        .map(|header| header.to_string())
        .collect();
    assert_eq!(
        missing_columns(normalizer.as_ref(), &headers),
        vec![
            "Did you have an accident?",
            "Leak Amount",
            "Urgency",
            "Were you sleeping?",
            "Pain Level",
        ]
    );
    assert!(record_normalizer(tracker_model::SourceKind::OneNote).is_none());
}
