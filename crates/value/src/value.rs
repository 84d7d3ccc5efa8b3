//! Dynamic data flowing through constructor chains
//!
//! [`Value`] is the one currency of the crate: chain inputs, chain outputs,
//! nested attribute values and dump results are all `Value`s. Plain data
//! (`Null`, `Bool`, `Number`, `String`, `List`, `Map`) is what `dump`
//! produces; `Object` holds a materialized value object and `Lazy` a
//! zero-argument computation.

use crate::dump::{dump, to_json};
use crate::error::BuildResult;
use crate::object::{ObjectRef, ValueObject};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Number;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Insertion-ordered mapping from attribute name to value.
pub type Map = IndexMap<String, Value>;

// ============================================================================
// THUNK
// ============================================================================

/// A zero-argument computation, forced on demand.
///
/// Thunks must be pure: forcing one twice yields equal values.
#[derive(Clone)]
pub struct Thunk(Arc<dyn Fn() -> Value + Send + Sync>);

impl Thunk {
    pub fn new(f: impl Fn() -> Value + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn force(&self) -> Value {
        (self.0)()
    }
}

impl fmt::Debug for Thunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<lazy>")
    }
}

// ============================================================================
// VALUE
// ============================================================================

/// Any value a constructor can receive or produce.
#[derive(Clone, Default)]
pub enum Value {
    /// Explicit null.
    #[default]
    Null,
    /// No value was ever provided. Distinct from `Null`; dropped from dumped maps.
    Undefined,
    Bool(bool),
    Number(Number),
    String(String),
    List(Vec<Value>),
    Map(Map),
    /// A materialized value object.
    Object(ObjectRef),
    /// A lazily computed value.
    Lazy(Thunk),
}

static NULL: Value = Value::Null;
static UNDEFINED: Value = Value::Undefined;

impl Value {
    /// Wraps a value object.
    pub fn object<T: ValueObject>(object: T) -> Self {
        Self::Object(Arc::new(object))
    }

    /// Wraps a lazy computation.
    pub fn lazy(f: impl Fn() -> Value + Send + Sync + 'static) -> Self {
        Self::Lazy(Thunk::new(f))
    }

    pub(crate) fn null_ref() -> &'static Value {
        &NULL
    }

    pub(crate) fn undefined_ref() -> &'static Value {
        &UNDEFINED
    }

    /// Short shape name, used in error messages and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Undefined => "undefined",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Object(_) => "object",
            Self::Lazy(_) => "lazy",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Blankness as used by `either_present_or` and the `presence` rule.
    ///
    /// Null, undefined, `false`, whitespace-only strings and empty
    /// collections are blank. A value object is blank when its plain
    /// representation is. Numbers and lazies are never blank.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Null | Self::Undefined => true,
            Self::Bool(flag) => !flag,
            Self::Number(_) | Self::Lazy(_) => false,
            Self::String(s) => s.trim().is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Map(map) => map.is_empty(),
            Self::Object(object) => object.call().is_some_and(|plain| plain.is_blank()),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// The wrapped value object, if any.
    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Downcasts a wrapped value object to its concrete type.
    pub fn downcast_ref<T: ValueObject>(&self) -> Option<&T> {
        let object: &dyn Any = &**self.as_object()?;
        object.downcast_ref::<T>()
    }

    /// Textual form, as a string value object sees its source.
    ///
    /// Null and undefined render as the empty string.
    pub fn to_text(&self) -> String {
        match self {
            Self::Null | Self::Undefined => String::new(),
            Self::Bool(flag) => flag.to_string(),
            Self::Number(n) => n.to_string(),
            Self::String(s) => s.clone(),
            Self::List(_) | Self::Map(_) => format!("{self:?}"),
            Self::Object(object) => match object.call() {
                Some(plain) => plain.to_text(),
                None => format!("{object:?}"),
            },
            Self::Lazy(thunk) => thunk.force().to_text(),
        }
    }

    /// Lowers nested value objects to plain data. See [`dump`](crate::dump()).
    pub fn dump(&self) -> Value {
        dump(self)
    }

    /// Dumps and converts to JSON; opaque value objects are a `ShapeMismatch`.
    pub fn to_json(&self) -> BuildResult<serde_json::Value> {
        to_json(self)
    }
}

// ============================================================================
// EQUALITY
// ============================================================================

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Object(object), _) => object.eq_value(other),
            (_, Self::Object(object)) => object.eq_value(self),
            (Self::Lazy(thunk), _) => thunk.force() == *other,
            (_, Self::Lazy(thunk)) => *self == thunk.force(),
            (Self::Null, Self::Null) | (Self::Undefined, Self::Undefined) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        match self {
            Self::String(s) => s == other,
            Self::Object(_) | Self::Lazy(_) => *self == Value::from(other),
            _ => false,
        }
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        *self == Value::from(*other)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        *self == Value::Bool(*other)
    }
}

// ============================================================================
// INSPECT
// ============================================================================

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Undefined => f.write_str("undefined"),
            Self::Bool(flag) => write!(f, "{flag}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::List(items) => f.debug_list().entries(items).finish(),
            Self::Map(map) => f.debug_map().entries(map).finish(),
            Self::Object(object) => fmt::Debug::fmt(&**object, f),
            Self::Lazy(thunk) => fmt::Debug::fmt(thunk, f),
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Self::Number(n.into())
    }
}

impl From<f64> for Value {
    /// Non-finite floats have no plain representation and become `Null`.
    fn from(n: f64) -> Self {
        Number::from_f64(n).map_or(Self::Null, Self::Number)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Self::Map(map)
    }
}

impl From<ObjectRef> for Value {
    fn from(object: ObjectRef) -> Self {
        Self::Object(object)
    }
}

impl From<Thunk> for Value {
    fn from(thunk: Thunk) -> Self {
        Self::Lazy(thunk)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(flag) => Self::Bool(flag),
            serde_json::Value::Number(n) => Self::Number(n),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Self::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

// ============================================================================
// SERDE
// ============================================================================

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(Value::Null, true)]
    #[case(Value::Undefined, true)]
    #[case(Value::from(false), true)]
    #[case(Value::from(""), true)]
    #[case(Value::from("  \t"), true)]
    #[case(Value::List(vec![]), true)]
    #[case(Value::Map(Map::new()), true)]
    #[case(Value::from(true), false)]
    #[case(Value::from(0), false)]
    #[case(Value::from("x"), false)]
    #[case(Value::from(vec![1]), false)]
    #[case(Value::lazy(|| Value::Null), false)]
    fn test_blankness(#[case] value: Value, #[case] blank: bool) {
        assert_eq!(value.is_blank(), blank);
    }

    #[test]
    fn test_null_and_undefined_differ() {
        assert_ne!(Value::Null, Value::Undefined);
        assert_eq!(Value::default(), Value::Null);
    }

    #[test]
    fn test_from_json_preserves_order() {
        let value = Value::from(json!({"b": 1, "a": [true, null, "x"]}));
        let keys: Vec<&str> = value.as_map().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(
            value.as_map().unwrap()["a"],
            Value::from(vec![Value::from(true), Value::Null, Value::from("x")])
        );
    }

    #[test]
    fn test_lazy_compares_by_forcing() {
        assert_eq!(Value::lazy(|| Value::from("x")), Value::from("x"));
        assert_eq!(Value::from(3), Value::lazy(|| Value::from(3)));
    }

    #[test]
    fn test_scalar_comparisons() {
        assert_eq!(Value::from("abc"), "abc");
        assert_eq!(Value::from(12), 12);
        assert_eq!(Value::from(true), true);
        assert_ne!(Value::from(12), Value::from("12"));
    }

    #[test]
    fn test_non_finite_float_is_null() {
        assert_eq!(Value::from(f64::NAN), Value::Null);
        assert_eq!(Value::from(1.5).as_f64(), Some(1.5));
    }

    #[test]
    fn test_to_text() {
        assert_eq!(Value::Null.to_text(), "");
        assert_eq!(Value::from(42).to_text(), "42");
        assert_eq!(Value::from("joe").to_text(), "joe");
        assert_eq!(Value::from(vec![1, 2]).to_text(), "[1, 2]");
    }

    #[test]
    fn test_inspect() {
        let value: Value = [("name", Value::from("Joe")), ("age", Value::from(42))]
            .into_iter()
            .collect();
        assert_eq!(format!("{value:?}"), r#"{"name": "Joe", "age": 42}"#);
        assert_eq!(format!("{:?}", Value::Undefined), "undefined");
        assert_eq!(format!("{:?}", Value::lazy(|| Value::Null)), "<lazy>");
    }

    #[test]
    fn test_serde_round_trip() {
        let value: Value = serde_json::from_str(r#"{"tags": ["a", "b"], "n": 1}"#).unwrap();
        assert_eq!(value.kind(), "map");
        assert_eq!(
            serde_json::to_value(&value).unwrap(),
            json!({"tags": ["a", "b"], "n": 1})
        );
    }
}
