//! Rendered tuples read back to the values they were rendered from.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use uuid::Uuid;

use tracker_model::{EventTimestamp, TargetSchema, TrackingRow, UserId};
use tracker_output::SqlRenderer;

/// A value as it appears in a rendered tuple.
#[derive(Debug, PartialEq)]
enum Token {
    Bare(String),
    Quoted(String),
    Timestamp(String),
}

const TIMESTAMP_PREFIX: &str = "TIMESTAMP WITH TIME ZONE ";

/// Split `(a, 'b, c', d)` into its values, undoing quote doubling.
fn tokenize(tuple: &str) -> Vec<Token> {
    let inner = tuple
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .expect("parenthesized tuple");
    let mut tokens = Vec::new();
    let mut chars = inner.chars().peekable();
    loop {
        while chars.peek() == Some(&' ') {
            chars.next();
        }
        if chars.peek().is_none() {
            break;
        }
        let mut bare = String::new();
        while let Some(&c) = chars.peek() {
            if c == '\'' || c == ',' {
                break;
            }
            bare.push(c);
            chars.next();
        }
        let token = if chars.peek() == Some(&'\'') {
            chars.next();
            let mut text = String::new();
            while let Some(c) = chars.next() {
                if c == '\'' {
                    if chars.peek() == Some(&'\'') {
                        chars.next();
                        text.push('\'');
                    } else {
                        break;
                    }
                } else {
                    text.push(c);
                }
            }
            if bare == TIMESTAMP_PREFIX {
                Token::Timestamp(text)
            } else {
                assert!(bare.is_empty(), "unexpected prefix {bare:?}");
                Token::Quoted(text)
            }
        } else {
            Token::Bare(bare.trim_end().to_string())
        };
        tokens.push(token);
        match chars.next() {
            Some(',') | None => {}
            Some(other) => panic!("unexpected {other:?} after value"),
        }
    }
    tokens
}

fn bare(token: &Token) -> &str {
    match token {
        Token::Bare(value) => value,
        other => panic!("expected bare value, got {other:?}"),
    }
}

fn optional_int(token: &Token) -> Option<i32> {
    match bare(token) {
        "NULL" => None,
        value => Some(value.parse().expect("integer literal")),
    }
}

fn optional_bool(token: &Token) -> Option<bool> {
    match bare(token) {
        "NULL" => None,
        "true" => Some(true),
        "false" => Some(false),
        other => panic!("not a boolean literal: {other}"),
    }
}

fn optional_bit(token: &Token) -> Option<bool> {
    match bare(token) {
        "NULL" => None,
        "1" => Some(true),
        "0" => Some(false),
        other => panic!("not a bit literal: {other}"),
    }
}

fn uppercase_uuid(token: &Token) -> Uuid {
    let Token::Quoted(text) = token else {
        panic!("expected quoted uuid, got {token:?}");
    };
    assert_eq!(text, &text.to_uppercase());
    Uuid::parse_str(text).expect("uuid literal")
}

fn optional_text(token: &Token) -> Option<String> {
    match token {
        Token::Quoted(text) => Some(text.clone()),
        Token::Bare(value) if value == "NULL" => None,
        other => panic!("expected text, got {other:?}"),
    }
}

fn base_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 6)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[test]
fn tokenizer_respects_quoted_commas() {
    assert_eq!(
        tokenize("(1, 'a, b', NULL, 'It''s')"),
        vec![
            Token::Bare("1".to_string()),
            Token::Quoted("a, b".to_string()),
            Token::Bare("NULL".to_string()),
            Token::Quoted("It's".to_string()),
        ]
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn postgres_tuples_reparse_to_row_values(
        minutes in 0i64..(60 * 24 * 365),
        accident in proptest::option::of(any::<bool>()),
        change in proptest::option::of(any::<bool>()),
        leak in proptest::option::of(0i32..4),
        urgency in proptest::option::of(0i32..5),
        awoke in any::<bool>(),
        pain in proptest::option::of(0i32..11),
        notes in proptest::option::of("[a-zA-Z0-9 ',\"()]{1,24}"),
        user in any::<u128>().prop_filter("non-nil", |value| *value != 0),
    ) {
        let user_id = UserId::new(Uuid::from_u128(user)).unwrap();
        let at = base_time() + Duration::minutes(minutes);
        let mut row = TrackingRow::new(user_id, EventTimestamp::naive(at));
        row.accident = accident;
        row.change_pad_or_underwear = change;
        row.leak_amount = leak;
        row.urgency = urgency;
        row.awoke_from_sleep = awoke;
        row.pain_level = pain;
        row.notes = notes.clone();

        let renderer = SqlRenderer::new(TargetSchema::postgres_import());
        let tokens = tokenize(&renderer.render_row(&row));
        prop_assert_eq!(tokens.len(), 9);

        let Token::Timestamp(stamp) = &tokens[0] else {
            panic!("expected timestamp, got {:?}", tokens[0]);
        };
        let parsed = NaiveDateTime::parse_from_str(stamp, "%Y-%m-%dT%H:%M:%S%.f").unwrap();
        prop_assert_eq!(parsed, at);
        prop_assert_eq!(optional_bool(&tokens[1]), accident);
        prop_assert_eq!(optional_bool(&tokens[2]), change);
        prop_assert_eq!(optional_int(&tokens[3]), leak);
        prop_assert_eq!(optional_int(&tokens[4]), urgency);
        prop_assert_eq!(optional_bool(&tokens[5]), Some(awoke));
        prop_assert_eq!(optional_int(&tokens[6]), pain);
        prop_assert_eq!(optional_text(&tokens[7]), notes);
        let Some(user_text) = optional_text(&tokens[8]) else {
            panic!("user id rendered as NULL");
        };
        prop_assert_eq!(user_text.parse::<UserId>().unwrap(), user_id);
    }

    #[test]
    fn sql_server_keyed_tuples_reparse_to_row_values(
        millis in 0i64..(1000 * 60 * 60 * 24 * 365),
        accident in proptest::option::of(any::<bool>()),
        change in proptest::option::of(any::<bool>()),
        leak in proptest::option::of(0i32..4),
        urgency in proptest::option::of(0i32..5),
        awoke in any::<bool>(),
        pain in proptest::option::of(0i32..11),
        notes in proptest::option::of("[a-zA-Z0-9 ',\"()]{1,24}"),
        key in any::<u128>(),
        user in any::<u128>().prop_filter("non-nil", |value| *value != 0),
    ) {
        let user_id = UserId::new(Uuid::from_u128(user)).unwrap();
        let at = base_time() + Duration::milliseconds(millis);
        let id = Uuid::from_u128(key);
        let mut row = TrackingRow::new(user_id, EventTimestamp::naive(at));
        row.id = Some(id);
        row.accident = accident;
        row.change_pad_or_underwear = change;
        row.leak_amount = leak;
        row.urgency = urgency;
        row.awoke_from_sleep = awoke;
        row.pain_level = pain;
        row.notes = notes.clone();

        let renderer = SqlRenderer::new(TargetSchema::sql_server_keyed());
        let tokens = tokenize(&renderer.render_row(&row));
        prop_assert_eq!(tokens.len(), 10);

        prop_assert_eq!(uppercase_uuid(&tokens[0]), id);
        prop_assert_eq!(&uppercase_uuid(&tokens[1]), user_id.as_uuid());
        let Token::Quoted(stamp) = &tokens[2] else {
            panic!("expected quoted timestamp, got {:?}", tokens[2]);
        };
        let parsed = NaiveDateTime::parse_from_str(stamp, "%Y-%m-%d %H:%M:%S%.3f").unwrap();
        prop_assert_eq!(parsed, at);
        prop_assert_eq!(optional_bit(&tokens[3]), accident);
        prop_assert_eq!(optional_bit(&tokens[4]), change);
        prop_assert_eq!(optional_int(&tokens[5]), leak);
        prop_assert_eq!(optional_int(&tokens[6]), urgency);
        prop_assert_eq!(optional_bit(&tokens[7]), Some(awoke));
        prop_assert_eq!(optional_int(&tokens[8]), pain);
        prop_assert_eq!(optional_text(&tokens[9]), notes);
    }
}
