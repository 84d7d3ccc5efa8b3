//! Property-based tests for constructor chains and dump.

use proptest::prelude::*;
use tessera_value::prelude::*;

fn identity() -> Base {
    wrap_fn("identity", Ok)
}

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z ]{0,8}".prop_map(Value::from),
    ]
}

fn plain() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::List),
            prop::collection::vec(("[a-z]{1,4}", inner), 0..4)
                .prop_map(|entries| entries.into_iter().collect::<Value>()),
        ]
    })
}

fn point() -> StructType {
    StructType::builder("Point").attribute("x").attribute("y").build()
}

// ============================================================================
// CHAIN LAWS
// ============================================================================

proptest! {
    #[test]
    fn test_maybe_is_transparent_for_non_null(value in plain()) {
        prop_assume!(!value.is_null());
        prop_assert_eq!(identity().maybe().new(value.clone()).unwrap(), value);
    }

    #[test]
    fn test_list_preserves_length_and_order(items in prop::collection::vec(scalar(), 0..16)) {
        let built = identity().list().new(items.clone()).unwrap();
        prop_assert_eq!(built, Value::List(items));
    }

    #[test]
    fn test_present_or_replaces_exactly_the_blanks(value in plain()) {
        let built = identity().either_present_or("fallback").new(value.clone()).unwrap();
        if value.is_blank() {
            prop_assert_eq!(built, Value::from("fallback"));
        } else {
            prop_assert_eq!(built, value);
        }
    }

    #[test]
    fn test_dump_is_identity_on_plain_data(value in plain()) {
        prop_assert_eq!(dump(&value), value.clone());
    }

    #[test]
    fn test_records_round_trip_through_dump(x in any::<i64>(), y in "[a-z]{0,6}") {
        let point = point();
        let built = point.new(Value::from_iter([("x", Value::from(x)), ("y", Value::from(y))])).unwrap();
        let reloaded = point.load(dump(&built)).unwrap();
        prop_assert_eq!(dump(&reloaded), dump(&built));
    }

    #[test]
    fn test_text_equals_its_canonical_string(s in "[a-zA-Z]{0,12}") {
        let upper = TextType::new("Upper").transform(|s| s.to_uppercase());
        let built = upper.new(s.as_str()).unwrap();
        prop_assert_eq!(built, Value::from(s.to_uppercase()));
    }
}
