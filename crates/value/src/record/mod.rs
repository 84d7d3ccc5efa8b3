//! Record value types with named attributes
//!
//! A [`StructType`] is built once from a [`SchemaBuilder`] and then acts as
//! a constructor: it turns a mapping into an immutable [`StructValue`],
//! running each attribute's own chain over the matching entry.
//!
//! ```
//! use tessera_value::prelude::*;
//!
//! let user = StructType::builder("User")
//!     .attribute("first_name")
//!     .attribute_with("nickname", wrap_fn("upcase", |v| Ok(v.to_text().to_uppercase().into())))
//!     .validates("first_name", presence())
//!     .build();
//!
//! let joe = user.new(serde_json::json!({"first_name": "Joe", "nickname": "jo"})).unwrap();
//! assert_eq!(format!("{joe:?}"), r#"User[{"first_name": "Joe", "nickname": "JO"}]"#);
//! assert!(user.valid().new(serde_json::json!({})).is_err());
//! ```

mod instance;

pub use instance::{Slot, StructValue};

use crate::constructors::{Chain, Construct};
use crate::dump::dump;
use crate::error::{BuildError, BuildResult};
use crate::examiner::Examiner;
use crate::target::ValueType;
use crate::value::{Map, Value};
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;
use tessera_validator::Validate;

/// What to do with mapping keys that name no attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownKeys {
    /// Drop them silently.
    #[default]
    Ignore,
    /// Fail the build with `UnknownAttribute`.
    Reject,
}

/// A declared attribute and its optional coercion chain.
#[derive(Clone)]
pub struct Attribute {
    name: String,
    chain: Option<Chain>,
}

impl Attribute {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn chain(&self) -> Option<&Chain> {
        self.chain.as_ref()
    }

    fn coerce(&self, raw: Value) -> BuildResult<Slot> {
        let value = match &self.chain {
            Some(chain) => chain.build(raw)?,
            None => raw,
        };
        Ok(if value.is_undefined() {
            Slot::Unset
        } else {
            Slot::Set(value)
        })
    }
}

impl fmt::Debug for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.chain {
            Some(chain) => write!(f, "{}: {chain:?}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

pub(crate) struct Schema {
    name: String,
    attributes: IndexMap<String, Attribute>,
    examiner: Examiner<Value>,
    unknown_keys: UnknownKeys,
}

impl Schema {
    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn position(&self, attribute: &str) -> Option<usize> {
        self.attributes.get_index_of(attribute)
    }

    pub(crate) fn names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    pub(crate) fn examiner(&self) -> &Examiner<Value> {
        &self.examiner
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Declares the attributes and rules of a [`StructType`].
#[must_use]
pub struct SchemaBuilder {
    schema: Schema,
}

impl SchemaBuilder {
    fn new(name: String) -> Self {
        Self {
            schema: Schema {
                name,
                attributes: IndexMap::new(),
                examiner: Examiner::new(),
                unknown_keys: UnknownKeys::default(),
            },
        }
    }

    /// Declares an attribute that keeps its input as-is.
    pub fn attribute(self, name: impl Into<String>) -> Self {
        self.declare(name.into(), None)
    }

    /// Declares an attribute coerced through `chain`.
    pub fn attribute_with(self, name: impl Into<String>, chain: impl Construct + 'static) -> Self {
        self.declare(name.into(), Some(Arc::new(chain)))
    }

    fn declare(mut self, name: String, chain: Option<Chain>) -> Self {
        // Redeclaring replaces the chain but keeps the original position.
        let attribute = Attribute {
            name: name.clone(),
            chain,
        };
        self.schema.attributes.insert(name, attribute);
        self
    }

    /// Adds a rule over one attribute's value.
    ///
    /// Unset attributes are checked as [`Value::Undefined`].
    pub fn validates(
        mut self,
        attribute: impl Into<String>,
        rule: impl Validate<Input = Value> + Send + Sync + 'static,
    ) -> Self {
        self.schema.examiner.push(Some(attribute.into()), rule);
        self
    }

    pub fn unknown_keys(mut self, policy: UnknownKeys) -> Self {
        self.schema.unknown_keys = policy;
        self
    }

    pub fn build(self) -> StructType {
        tracing::trace!(
            struct_type = %self.schema.name,
            attributes = self.schema.attributes.len(),
            rules = self.schema.examiner.len(),
            "struct type defined"
        );
        StructType {
            schema: Arc::new(self.schema),
        }
    }
}

// ============================================================================
// STRUCT TYPE
// ============================================================================

/// A record type: an ordered set of attributes plus validation rules.
///
/// Cloning is cheap; clones are the same type.
#[derive(Clone)]
pub struct StructType {
    schema: Arc<Schema>,
}

impl StructType {
    pub fn builder(name: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder::new(name.into())
    }

    /// Starts a child type inheriting every attribute and rule of `self`.
    ///
    /// Inherited attributes come first, in the parent's order.
    pub fn extend(&self, name: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder {
            schema: Schema {
                name: name.into(),
                attributes: self.schema.attributes.clone(),
                examiner: self.schema.examiner.clone(),
                unknown_keys: self.schema.unknown_keys,
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.schema.name
    }

    /// Attribute names in declaration order.
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.schema.names()
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.schema.attributes.get(name)
    }

    pub fn unknown_keys(&self) -> UnknownKeys {
        self.schema.unknown_keys
    }

    /// Class-level alias for [`dump`](crate::dump()).
    pub fn dump(value: &Value) -> Value {
        dump(value)
    }

    pub(crate) fn is(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.schema, &other.schema)
    }

    pub(crate) fn from_schema(schema: Arc<Schema>) -> Self {
        Self { schema }
    }

    /// Builds a typed record from a mapping-like input.
    pub fn instantiate(&self, input: Value) -> BuildResult<StructValue> {
        let mut params = self.mapping(input)?;

        if let Some(unknown) = params.keys().find(|key| self.schema.position(key).is_none()) {
            match self.schema.unknown_keys {
                UnknownKeys::Reject => {
                    return Err(BuildError::unknown_attribute(self.name(), unknown.clone()));
                }
                UnknownKeys::Ignore => {
                    tracing::trace!(struct_type = %self.name(), key = %unknown, "ignoring unknown attribute");
                }
            }
        }

        let slots = self
            .schema
            .attributes
            .values()
            .map(|attribute| match params.swap_remove(attribute.name()) {
                Some(raw) => attribute.coerce(raw),
                None => Ok(Slot::Unset),
            })
            .collect::<BuildResult<Vec<_>>>()?;

        Ok(StructValue::new(Arc::clone(&self.schema), slots))
    }

    fn mapping(&self, input: Value) -> BuildResult<Map> {
        match input {
            Value::Map(map) => Ok(map),
            Value::Null => Ok(Map::new()),
            Value::List(items) if items.is_empty() => Ok(Map::new()),
            Value::Lazy(thunk) => self.mapping(thunk.force()),
            Value::Object(ref object) => object
                .to_map()
                .or_else(|| match object.call() {
                    Some(Value::Map(map)) => Some(map),
                    _ => None,
                })
                .ok_or_else(|| {
                    BuildError::shape_mismatch(self.name(), "mapping", format!("{input:?}"))
                }),
            other => Err(BuildError::shape_mismatch(
                self.name(),
                "mapping",
                format!("{other:?}"),
            )),
        }
    }
}

impl ValueType for StructType {
    fn name(&self) -> &str {
        &self.schema.name
    }

    fn construct(&self, input: Value) -> BuildResult<Value> {
        self.instantiate(input).map(Value::object)
    }
}

impl Construct for StructType {
    fn build(&self, input: Value) -> BuildResult<Value> {
        self.construct(input)
    }
}

impl fmt::Debug for StructType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.schema.name)
    }
}

impl PartialEq for StructType {
    fn eq(&self, other: &Self) -> bool {
        self.is(other)
    }
}

impl Eq for StructType {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructors::ConstructExt;
    use crate::examiner::presence;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn user() -> StructType {
        StructType::builder("User")
            .attribute("first_name")
            .attribute("last_name")
            .validates("first_name", presence())
            .build()
    }

    #[test]
    fn test_empty_inputs_build_empty_records() {
        let user = user();
        for input in [Value::Null, Value::List(vec![]), Value::from(json!({}))] {
            let built = user.instantiate(input).unwrap();
            assert!(!built.is_set("first_name"));
        }
    }

    #[test]
    fn test_non_mapping_input_fails() {
        let error = user().new("joe").unwrap_err();
        assert_eq!(error, BuildError::shape_mismatch("User", "mapping", "\"joe\""));
    }

    #[test]
    fn test_unknown_keys_policy() {
        let input = json!({"first_name": "Joe", "age": 3});
        assert!(user().new(input.clone()).is_ok());

        let strict = user().extend("StrictUser").unknown_keys(UnknownKeys::Reject).build();
        assert_eq!(
            strict.new(input).unwrap_err(),
            BuildError::unknown_attribute("StrictUser", "age")
        );
    }

    #[test]
    fn test_extend_keeps_parent_order() {
        let admin = user()
            .extend("Admin")
            .attribute("role")
            .attribute("first_name")
            .build();
        assert_eq!(
            admin.attributes().collect::<Vec<_>>(),
            vec!["first_name", "last_name", "role"]
        );
        assert_eq!(admin.schema.examiner().len(), 1);
    }

    #[test]
    fn test_clones_are_the_same_type() {
        let user = user();
        assert_eq!(user.clone(), user);
        assert_ne!(user, self::user());
    }
}
