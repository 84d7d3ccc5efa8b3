//! Ordered rule sets behind the validation capability
//!
//! An [`Examiner`] holds the rules a value type declared, each optionally
//! scoped to an attribute. Running it collects every violation in
//! declaration order; errors raised by attribute-scoped rules are tagged
//! with the attribute name.

use crate::value::Value;
use std::fmt;
use std::sync::Arc;
use tessera_validator::validators::{IsTrue, is_true};
use tessera_validator::{Validate, ValidationError, ValidationErrors, validator};

/// A shared, type-erased rule.
pub type Rule<T> = Arc<dyn Validate<Input = T> + Send + Sync>;

/// One declared rule.
pub struct Check<T: ?Sized> {
    attribute: Option<String>,
    rule: Rule<T>,
}

impl<T: ?Sized> Check<T> {
    pub fn attribute(&self) -> Option<&str> {
        self.attribute.as_deref()
    }
}

impl<T: ?Sized> Clone for Check<T> {
    fn clone(&self) -> Self {
        Self {
            attribute: self.attribute.clone(),
            rule: Arc::clone(&self.rule),
        }
    }
}

/// The rules of one value type, in declaration order.
pub struct Examiner<T: ?Sized> {
    checks: Vec<Check<T>>,
}

impl<T: ?Sized> Examiner<T> {
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    pub fn push(
        &mut self,
        attribute: Option<String>,
        rule: impl Validate<Input = T> + Send + Sync + 'static,
    ) {
        self.checks.push(Check {
            attribute,
            rule: Arc::new(rule),
        });
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    pub fn checks(&self) -> impl Iterator<Item = &Check<T>> {
        self.checks.iter()
    }

    /// Runs every check against the input its attribute resolves to.
    pub fn run<'a>(&self, resolve: impl Fn(Option<&str>) -> &'a T) -> ValidationErrors
    where
        T: 'a,
    {
        let mut errors = ValidationErrors::new();
        for check in &self.checks {
            let attribute = check.attribute();
            if let Err(error) = check.rule.validate(resolve(attribute)) {
                errors.add(match attribute {
                    Some(name) if error.field.is_none() => error.with_field(name.to_owned()),
                    _ => error,
                });
            }
        }
        errors
    }
}

impl<T: ?Sized> Default for Examiner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for Examiner<T> {
    fn clone(&self) -> Self {
        Self {
            checks: self.checks.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Examiner<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.checks.iter().map(|c| c.attribute().unwrap_or("*")))
            .finish()
    }
}

// ============================================================================
// VALUE RULES
// ============================================================================

validator! {
    /// The value must not be blank.
    pub Presence for Value;
    rule(input) { !input.is_blank() }
    error(input) { ValidationError::blank() }
    fn presence();
}

validator! {
    /// The value must be blank.
    pub Absence for Value;
    rule(input) { input.is_blank() }
    error(input) { ValidationError::present() }
    fn absence();
}

/// Applies a string rule to the textual content of a value.
///
/// Null and undefined are skipped; pair with [`presence`] to require them.
/// Value objects are checked through their plain representation.
#[derive(Debug, Clone)]
pub struct TextRule<V> {
    inner: V,
}

impl<V: Validate<Input = str>> Validate for TextRule<V> {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        match input {
            Value::Null | Value::Undefined => Ok(()),
            Value::String(s) => self.inner.validate(s),
            Value::Object(object) => match object.call() {
                Some(Value::String(s)) => self.inner.validate(&s),
                _ => Err(ValidationError::type_mismatch("string", "object")),
            },
            Value::Lazy(thunk) => self.validate(&thunk.force()),
            other => Err(ValidationError::type_mismatch("string", other.kind())),
        }
    }
}

/// Lifts a `str` rule to values.
///
/// ```
/// use tessera_validator::prelude::min_length;
/// use tessera_value::examiner::text;
/// use tessera_value::prelude::*;
///
/// let rule = text(min_length(3));
/// assert!(rule.validate(&Value::from("Joe")).is_ok());
/// assert!(rule.validate(&Value::from("Jo")).is_err());
/// assert!(rule.validate(&Value::Null).is_ok());
/// ```
pub fn text<V: Validate<Input = str>>(rule: V) -> TextRule<V> {
    TextRule { inner: rule }
}

/// Applies a `bool` rule to a flag value.
///
/// Null and undefined are skipped, like [`TextRule`].
#[derive(Debug, Clone)]
pub struct FlagRule<V> {
    inner: V,
}

impl<V: Validate<Input = bool>> Validate for FlagRule<V> {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        match input {
            Value::Null | Value::Undefined => Ok(()),
            Value::Bool(flag) => self.inner.validate(flag),
            Value::Object(object) => match object.call() {
                Some(Value::Bool(flag)) => self.inner.validate(&flag),
                _ => Err(ValidationError::type_mismatch("boolean", "object")),
            },
            Value::Lazy(thunk) => self.validate(&thunk.force()),
            other => Err(ValidationError::type_mismatch("boolean", other.kind())),
        }
    }
}

/// Lifts a `bool` rule to values.
pub fn flag<V: Validate<Input = bool>>(rule: V) -> FlagRule<V> {
    FlagRule { inner: rule }
}

/// The flag, when given, must be `true`.
pub fn acceptance() -> FlagRule<IsTrue> {
    flag(is_true())
}
