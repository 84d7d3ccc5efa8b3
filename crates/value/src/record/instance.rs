use super::{Schema, StructType};
use crate::dump::dump_map;
use crate::error::{BuildError, BuildResult};
use crate::object::{Validatable, ValueObject};
use crate::value::{Map, Value};
use std::fmt;
use std::ops::Index;
use std::sync::{Arc, OnceLock};
use tessera_validator::ValidationErrors;

/// State of one attribute of a built record.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Slot {
    /// No value was provided, or the attribute chain yielded undefined.
    #[default]
    Unset,
    Set(Value),
}

impl Slot {
    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Unset => None,
            Self::Set(value) => Some(value),
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }
}

/// An immutable record built by a [`StructType`].
pub struct StructValue {
    schema: Arc<Schema>,
    slots: Vec<Slot>,
    dumped: OnceLock<Map>,
}

impl StructValue {
    pub(super) fn new(schema: Arc<Schema>, slots: Vec<Slot>) -> Self {
        Self {
            schema,
            slots,
            dumped: OnceLock::new(),
        }
    }

    /// The type that built this record.
    pub fn struct_type(&self) -> StructType {
        StructType::from_schema(Arc::clone(&self.schema))
    }

    pub fn slot(&self, name: &str) -> Option<&Slot> {
        self.schema.position(name).map(|i| &self.slots[i])
    }

    /// The attribute value, `None` when unset or undeclared.
    ///
    /// Use [`fetch`](Self::fetch) to tell an undeclared name from an unset one.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.slot(name).and_then(Slot::value)
    }

    /// The attribute value read through its accessor: unset attributes are
    /// `Null`, undeclared names fail with [`BuildError::UnknownAttribute`].
    pub fn fetch(&self, name: &str) -> BuildResult<&Value> {
        let slot = self
            .slot(name)
            .ok_or_else(|| BuildError::unknown_attribute(self.schema.name(), name))?;
        Ok(slot.value().unwrap_or(Value::null_ref()))
    }

    /// Downcasts an attribute holding a value object.
    pub fn get_as<T: ValueObject>(&self, name: &str) -> Option<&T> {
        self.get(name).and_then(|value| value.downcast_ref::<T>())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.slot(name).is_some_and(Slot::is_set)
    }

    /// Attributes in declaration order, unset ones included.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &Slot)> {
        self.schema.names().zip(&self.slots)
    }

    /// Plain mapping of every set attribute, computed once.
    pub fn dump(&self) -> &Map {
        self.dumped.get_or_init(|| {
            let raw: Map = self
                .attributes()
                .filter_map(|(name, slot)| Some((name.to_owned(), slot.value()?.clone())))
                .collect();
            dump_map(&raw)
        })
    }

    /// Alias for [`dump`](Self::dump).
    pub fn as_map(&self) -> &Map {
        self.dump()
    }
}

/// Lenient attribute access, like indexing a `serde_json::Value`.
///
/// Unset attributes and undeclared names both read as `Null`; this never
/// panics. [`StructValue::fetch`] is the strict form.
impl Index<&str> for StructValue {
    type Output = Value;

    fn index(&self, name: &str) -> &Value {
        self.get(name).unwrap_or(Value::null_ref())
    }
}

impl ValueObject for StructValue {
    fn type_name(&self) -> &str {
        self.schema.name()
    }

    fn call(&self) -> Option<Value> {
        Some(Value::Map(self.dump().clone()))
    }

    fn to_map(&self) -> Option<Map> {
        Some(self.dump().clone())
    }

    fn validatable(&self) -> Option<&dyn Validatable> {
        Some(self)
    }

    /// Equal to anything whose mapping form equals this record's dump.
    fn eq_value(&self, other: &Value) -> bool {
        match other {
            Value::Map(map) => self.dump() == map,
            Value::Object(object) => object
                .to_map()
                .or_else(|| match object.call() {
                    Some(Value::Map(map)) => Some(map),
                    _ => None,
                })
                .is_some_and(|map| *self.dump() == map),
            Value::Lazy(thunk) => self.eq_value(&thunk.force()),
            _ => false,
        }
    }

    /// Same struct type and equal attributes.
    fn strict_eq(&self, other: &Value) -> bool {
        other
            .downcast_ref::<StructValue>()
            .is_some_and(|theirs| Arc::ptr_eq(&self.schema, &theirs.schema) && self == theirs)
    }
}

impl Validatable for StructValue {
    fn errors(&self) -> ValidationErrors {
        self.schema.examiner().run(|attribute| {
            attribute
                .and_then(|name| self.get(name))
                .unwrap_or(Value::undefined_ref())
        })
    }
}

impl PartialEq for StructValue {
    fn eq(&self, other: &Self) -> bool {
        self.dump() == other.dump()
    }
}

impl PartialEq<Value> for StructValue {
    fn eq(&self, other: &Value) -> bool {
        self.eq_value(other)
    }
}

impl fmt::Debug for StructValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{:?}]", self.schema.name(), self.dump())
    }
}
