//! Recursive lowering of value objects to plain data
//!
//! `dump` is the inverse direction of `load`: whatever a chain built, dump
//! turns it back into maps, lists and scalars suitable for persistence.

use crate::error::{BuildError, BuildResult};
use crate::object::ObjectRef;
use crate::value::{Map, Value};

/// Converts a value to plain data.
///
/// The first matching rule wins:
///
/// 1. `Null` stays `Null`.
/// 2. A map is rebuilt with every entry dumped; undefined entries are dropped.
/// 3. A list is dumped element-wise.
/// 4. A lazy is forced, and an object with a plain representation yields that
///    representation; either way the result is dumped again.
/// 5. An object with a mapping view yields the dumped mapping.
/// 6. An object with an element sequence yields the dumped elements.
/// 7. Anything else is returned unchanged.
///
/// ```
/// use tessera_value::{Value, dump};
///
/// let plain = Value::from_iter([("name", Value::from("Joe")), ("age", Value::Undefined)]);
/// assert_eq!(dump(&plain), Value::from_iter([("name", "Joe")]));
/// ```
pub fn dump(value: &Value) -> Value {
    match value {
        Value::Null => Value::Null,
        Value::Map(map) => Value::Map(dump_map(map)),
        Value::List(items) => Value::List(dump_list(items)),
        Value::Lazy(thunk) => dump(&thunk.force()),
        Value::Object(object) => dump_object(object).unwrap_or_else(|| value.clone()),
        _ => value.clone(),
    }
}

fn dump_object(object: &ObjectRef) -> Option<Value> {
    if let Some(plain) = object.call() {
        return Some(dump(&plain));
    }
    if let Some(map) = object.to_map() {
        return Some(Value::Map(dump_map(&map)));
    }
    object.items().map(|items| Value::List(dump_list(&items)))
}

pub(crate) fn dump_map(map: &Map) -> Map {
    map.iter()
        .filter_map(|(key, value)| {
            let dumped = dump(value);
            (!dumped.is_undefined()).then(|| (key.clone(), dumped))
        })
        .collect()
}

fn dump_list(items: &[Value]) -> Vec<Value> {
    items.iter().map(dump).collect()
}

/// Dumps a value and converts the result to JSON.
///
/// Undefined leftovers become `null` outside of maps. An opaque value object
/// (no plain representation, mapping view or element sequence) has no JSON
/// form and is reported as a [`BuildError::ShapeMismatch`].
pub fn to_json(value: &Value) -> BuildResult<serde_json::Value> {
    lower(&dump(value))
}

fn lower(value: &Value) -> BuildResult<serde_json::Value> {
    use serde_json::Value as Json;

    Ok(match value {
        Value::Null | Value::Undefined => Json::Null,
        Value::Bool(flag) => Json::Bool(*flag),
        Value::Number(n) => Json::Number(n.clone()),
        Value::String(s) => Json::String(s.clone()),
        Value::List(items) => Json::Array(items.iter().map(lower).collect::<BuildResult<_>>()?),
        Value::Map(map) => Json::Object(
            map.iter()
                .filter(|(_, v)| !v.is_undefined())
                .map(|(k, v)| -> BuildResult<_> { Ok((k.clone(), lower(v)?)) })
                .collect::<BuildResult<_>>()?,
        ),
        Value::Lazy(thunk) => lower(&dump(&thunk.force()))?,
        Value::Object(object) => {
            return Err(BuildError::shape_mismatch(
                object.type_name(),
                "plain data",
                format!("{object:?}"),
            ));
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::ValueObject;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[derive(Debug)]
    struct Pair(i64, i64);

    impl ValueObject for Pair {
        fn type_name(&self) -> &str {
            "Pair"
        }

        fn items(&self) -> Option<Vec<Value>> {
            Some(vec![Value::from(self.0), Value::from(self.1)])
        }
    }

    #[derive(Debug)]
    struct Point {
        x: i64,
    }

    impl ValueObject for Point {
        fn type_name(&self) -> &str {
            "Point"
        }

        fn to_map(&self) -> Option<Map> {
            let mut map = Map::new();
            map.insert("x".into(), Value::from(self.x));
            map.insert("y".into(), Value::Undefined);
            Some(map)
        }
    }

    #[derive(Debug)]
    struct Opaque;

    impl ValueObject for Opaque {
        fn type_name(&self) -> &str {
            "Opaque"
        }
    }

    #[test]
    fn test_scalars_pass_through() {
        assert_eq!(dump(&Value::from(1)), Value::from(1));
        assert_eq!(dump(&Value::from("a")), Value::from("a"));
        assert!(dump(&Value::Undefined).is_undefined());
        assert!(dump(&Value::Null).is_null());
    }

    #[test]
    fn test_mapping_view_and_items() {
        let value = Value::from(vec![Value::object(Point { x: 3 }), Value::object(Pair(1, 2))]);
        assert_eq!(value.to_json().unwrap(), json!([{"x": 3}, [1, 2]]));
    }

    #[test]
    fn test_lazy_entries_are_forced() {
        let value = Value::from_iter([("n", Value::lazy(|| Value::from(7)))]);
        assert_eq!(to_json(&value).unwrap(), json!({"n": 7}));
    }

    #[test]
    fn test_lazy_yielding_undefined_is_dropped() {
        let value = Value::from_iter([("gone", Value::lazy(|| Value::Undefined))]);
        assert_eq!(dump(&value), Value::Map(Map::new()));
    }

    #[test]
    fn test_opaque_object_survives_dump_but_not_json() {
        let value = Value::object(Opaque);
        assert_eq!(dump(&value), value);

        let error = to_json(&value).unwrap_err();
        assert_eq!(error, BuildError::shape_mismatch("Opaque", "plain data", "Opaque"));
    }
}
