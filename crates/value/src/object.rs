//! Value object capabilities
//!
//! A value object advertises what it can do through optional trait methods
//! instead of runtime reflection: a plain representation (`call`), a mapping
//! view (`to_map`), an element sequence (`items`) and validation
//! (`validatable`). `dump` and the `valid()` layer consult these.

use crate::value::{Map, Value};
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use tessera_validator::ValidationErrors;

/// Shared handle to a materialized value object.
pub type ObjectRef = Arc<dyn ValueObject>;

/// An immutable object produced by a constructor.
///
/// `Debug` doubles as the inspect form (`User[{"first_name": "Joe"}]`).
pub trait ValueObject: Any + fmt::Debug + Send + Sync {
    /// Name of the type that built this object.
    fn type_name(&self) -> &str;

    /// Plain representation, if the object has one.
    fn call(&self) -> Option<Value> {
        None
    }

    /// Mapping view, consulted by `dump` when there is no plain representation.
    fn to_map(&self) -> Option<Map> {
        None
    }

    /// Element sequence, consulted by `dump` after `to_map`.
    fn items(&self) -> Option<Vec<Value>> {
        None
    }

    /// Validation capability.
    fn validatable(&self) -> Option<&dyn Validatable> {
        None
    }

    /// Loose equality: compares plain representations.
    ///
    /// Objects without a plain representation are only equal to themselves.
    fn eq_value(&self, other: &Value) -> bool {
        match (self.call(), other) {
            (Some(mine), Value::Object(theirs)) => theirs.call().is_some_and(|t| mine == t),
            (Some(mine), _) => mine == *other,
            (None, Value::Object(theirs)) => {
                std::ptr::addr_eq(self as *const Self, Arc::as_ptr(theirs))
            }
            (None, _) => false,
        }
    }

    /// Strict equality: same concrete type and loosely equal.
    fn strict_eq(&self, other: &Value) -> bool {
        match other {
            Value::Object(theirs) => {
                let theirs: &dyn Any = &**theirs;
                theirs.type_id() == Any::type_id(self) && self.eq_value(other)
            }
            _ => false,
        }
    }
}

/// Validation capability of a value object.
pub trait Validatable {
    /// Every violation, in rule declaration order.
    fn errors(&self) -> ValidationErrors;

    fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    /// `Ok` when there are no violations.
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.errors().into_result(())
    }
}
