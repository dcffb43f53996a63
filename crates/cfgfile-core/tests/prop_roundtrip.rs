//! Property-based tests for the option cell, the parser/serializer pair and
//! the flat array codec.
//!
//! Generated stores only use names and values that the text format can carry:
//! no `=` or line breaks in names, no leading comment markers, no surrounding
//! whitespace or quotes in values.

use cfgfile_core::{join_array, parse, serialize, split_array, Store, Value};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z_][a-zA-Z0-9_.-]{0,12}").unwrap()
}

fn arb_section_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        prop::string::string_regex("[a-zA-Z][a-zA-Z0-9 _]{0,10}[a-zA-Z0-9]").unwrap(),
    ]
}

fn arb_value_text() -> impl Strategy<Value = String> {
    prop_oneof![
        (-100_000i64..100_000).prop_map(|n| n.to_string()),
        (-1000.0f64..1000.0).prop_map(|f| f.to_string()),
        Just("true".to_string()),
        Just("FALSE".to_string()),
        Just(String::new()),
        prop::string::string_regex("[a-zA-Z0-9][a-zA-Z0-9 ,:{}=/]{0,20}[a-zA-Z0-9}]").unwrap(),
    ]
}

/// How a generated option gets its value.
#[derive(Debug, Clone)]
enum Input {
    Text(String),
    Bool(bool),
    Float(f64),
}

fn arb_input() -> impl Strategy<Value = Input> {
    prop_oneof![
        4 => arb_value_text().prop_map(Input::Text),
        1 => any::<bool>().prop_map(Input::Bool),
        1 => prop_oneof![
            -1000.0f64..1000.0,
            Just(f64::NAN),
            Just(f64::INFINITY),
            Just(f64::NEG_INFINITY),
        ]
        .prop_map(Input::Float),
    ]
}

type Entry = (String, String, Input, bool);

/// A list of `(section, name, input, force_quotes)` entries.
fn arb_entries() -> impl Strategy<Value = Vec<Entry>> {
    prop::collection::vec(
        (arb_section_name(), arb_name(), arb_input(), any::<bool>()),
        0..20,
    )
}

/// Default-section entries go first: options of `""` written after another
/// section's header would be read back into that section.
fn build_store(entries: &[Entry]) -> Store {
    let mut ordered: Vec<_> = entries.iter().collect();
    ordered.sort_by_key(|(section, ..)| !section.is_empty());

    let mut store = Store::new();
    for (section, name, input, quotes) in ordered {
        let value = store.option_mut(name, section);
        match input {
            Input::Text(text) => value.assign(text).unwrap(),
            Input::Bool(flag) => value.set_bool(*flag).unwrap(),
            Input::Float(number) => value.set_float(*number).unwrap(),
        }
        if *quotes {
            value.set_quotes(true);
        }
    }
    store
}

/// Plain array elements: no quotes, commas or surrounding whitespace.
fn arb_array_element() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9_]([a-zA-Z0-9_ .-]{0,10}[a-zA-Z0-9_])?").unwrap()
}

// ============================================================================
// Value properties
// ============================================================================

proptest! {
    #[test]
    fn integer_is_truncated_float(f in -1.0e12f64..1.0e12) {
        let v = Value::new(&f.to_string());
        prop_assert_eq!(v.to_long(), v.to_double() as i64);
        prop_assert_eq!(v.to_double(), f);
        prop_assert!(!v.has_quotes());
        prop_assert_eq!(v.to_bool(), f != 0.0);
    }

    #[test]
    fn integer_text_parses_exactly(n in any::<i32>()) {
        let v = Value::new(&n.to_string());
        prop_assert_eq!(v.to_int(), n);
    }

    #[test]
    fn rejected_assignment_changes_nothing(
        start in -50i64..=50,
        candidate in -1000i64..1000,
        quoted in any::<bool>(),
    ) {
        let mut v = Value::new(&start.to_string());
        v.set_quotes(quoted);
        v.set_range(-50.0, 50.0);
        let before = v.clone();

        let result = v.assign(&candidate.to_string());
        if (-50..=50).contains(&candidate) {
            prop_assert!(result.is_ok());
            prop_assert_eq!(v.to_long(), candidate);
        } else {
            prop_assert!(result.is_err());
            prop_assert_eq!(v, before);
        }
    }
}

// ============================================================================
// Parse ∘ serialize
// ============================================================================

proptest! {
    #[test]
    fn reparse_preserves_text_and_quotes(entries in arb_entries()) {
        let store = build_store(&entries);
        let reparsed = parse(&serialize(&store));

        for (section_name, section) in &store {
            for (name, value) in section {
                let other = reparsed.option(name, section_name);
                prop_assert!(other.is_some(), "lost {}.{}", section_name, name);
                let other = other.unwrap();
                prop_assert_eq!(other.as_str(), value.as_str());
                prop_assert_eq!(other.has_quotes(), value.has_quotes());
                prop_assert_eq!(other.to_long(), value.to_long());
                prop_assert_eq!(other.to_bool(), value.to_bool());
            }
        }
    }

    #[test]
    fn reparse_preserves_order(entries in arb_entries()) {
        let store = build_store(&entries);
        let reparsed = parse(&serialize(&store));

        let expected: Vec<(&String, Vec<&String>)> = store
            .iter()
            .map(|(name, section)| (name, section.keys().collect()))
            .collect();
        let actual: Vec<(&String, Vec<&String>)> = reparsed
            .iter()
            .map(|(name, section)| (name, section.keys().collect()))
            .collect();
        prop_assert_eq!(expected, actual);
    }

    #[test]
    fn serialize_is_idempotent(entries in arb_entries()) {
        let once = serialize(&build_store(&entries));
        let twice = serialize(&parse(&once));
        prop_assert_eq!(once, twice);
    }
}

// ============================================================================
// Flat arrays
// ============================================================================

proptest! {
    #[test]
    fn split_join_roundtrip(elements in prop::collection::vec(arb_array_element(), 0..10)) {
        prop_assert_eq!(split_array(&join_array(&elements)), elements);
    }
}
