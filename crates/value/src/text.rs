//! String-like value types
//!
//! A [`TextType`] wraps any input as a [`Text`]: the original input is kept
//! as `source`, and the canonical string is the input's textual form,
//! optionally passed through a transform. Texts compare and order by their
//! canonical string, so they stand in for plain strings wherever one is
//! expected.

use crate::constructors::Construct;
use crate::error::BuildResult;
use crate::examiner::Examiner;
use crate::object::{Validatable, ValueObject};
use crate::target::ValueType;
use crate::value::Value;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;
use tessera_validator::{Validate, ValidationError, ValidationErrors};

type Transform = Arc<dyn Fn(&str) -> String + Send + Sync>;

#[derive(Clone)]
struct TextSpec {
    name: String,
    transform: Option<Transform>,
    examiner: Examiner<Text>,
}

/// Adapts a `str` rule so it checks the canonical string of a [`Text`].
#[derive(Debug, Clone)]
pub struct Canonical<V>(pub V);

impl<V: Validate<Input = str>> Validate for Canonical<V> {
    type Input = Text;

    fn validate(&self, input: &Text) -> Result<(), ValidationError> {
        self.0.validate(&input.canonical)
    }
}

/// A string value type.
///
/// ```
/// use tessera_value::prelude::*;
///
/// let slug = TextType::new("Slug").transform(|s| s.trim().to_lowercase());
/// let built = slug.new(" Hello ").unwrap();
///
/// assert_eq!(built, "hello");
/// assert_eq!(format!("{built:?}"), r#"Slug["hello"]"#);
/// ```
#[derive(Clone)]
pub struct TextType {
    spec: Arc<TextSpec>,
}

impl TextType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            spec: Arc::new(TextSpec {
                name: name.into(),
                transform: None,
                examiner: Examiner::new(),
            }),
        }
    }

    /// Sets the function deriving the canonical string from the input's text.
    #[must_use]
    pub fn transform(mut self, f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Arc::make_mut(&mut self.spec).transform = Some(Arc::new(f));
        self
    }

    /// Adds a rule over the whole text, source included.
    #[must_use]
    pub fn validates(mut self, rule: impl Validate<Input = Text> + Send + Sync + 'static) -> Self {
        Arc::make_mut(&mut self.spec).examiner.push(None, rule);
        self
    }

    /// Adds a rule over the canonical string.
    #[must_use]
    pub fn validates_text(self, rule: impl Validate<Input = str> + Send + Sync + 'static) -> Self {
        self.validates(Canonical(rule))
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    /// Builds a typed text from any input.
    pub fn instantiate(&self, input: Value) -> Text {
        let raw = input.to_text();
        let canonical = match &self.spec.transform {
            Some(transform) => transform(&raw),
            None => raw,
        };
        Text {
            spec: Arc::clone(&self.spec),
            source: input,
            canonical,
        }
    }
}

impl ValueType for TextType {
    fn name(&self) -> &str {
        &self.spec.name
    }

    fn construct(&self, input: Value) -> BuildResult<Value> {
        if input
            .downcast_ref::<Text>()
            .is_some_and(|existing| Arc::ptr_eq(&existing.spec, &self.spec))
        {
            return Ok(input);
        }
        Ok(Value::object(self.instantiate(input)))
    }
}

impl Construct for TextType {
    fn build(&self, input: Value) -> BuildResult<Value> {
        self.construct(input)
    }
}

impl fmt::Debug for TextType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.spec.name)
    }
}

// ============================================================================
// TEXT
// ============================================================================

/// A string value built by a [`TextType`].
pub struct Text {
    spec: Arc<TextSpec>,
    source: Value,
    canonical: String,
}

impl Text {
    /// The input this text was built from.
    pub fn source(&self) -> &Value {
        &self.source
    }

    /// The canonical string.
    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    pub fn text_type(&self) -> TextType {
        TextType {
            spec: Arc::clone(&self.spec),
        }
    }
}

impl ValueObject for Text {
    fn type_name(&self) -> &str {
        &self.spec.name
    }

    fn call(&self) -> Option<Value> {
        Some(Value::String(self.canonical.clone()))
    }

    fn validatable(&self) -> Option<&dyn Validatable> {
        Some(self)
    }

    /// Compares canonical strings; null and undefined are never equal.
    fn eq_value(&self, other: &Value) -> bool {
        scalar_text(other).is_some_and(|text| text == self.canonical)
    }
}

/// The text form of a scalar, looking through value objects and lazies.
///
/// Collections have no text form to compare with.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Bool(_) | Value::Number(_) | Value::String(_) => Some(value.to_text()),
        Value::Object(object) => object.call().as_ref().and_then(scalar_text),
        Value::Lazy(thunk) => scalar_text(&thunk.force()),
        Value::Null | Value::Undefined | Value::List(_) | Value::Map(_) => None,
    }
}

impl Validatable for Text {
    fn errors(&self) -> ValidationErrors {
        self.spec.examiner.run(|_| self)
    }
}

impl AsRef<str> for Text {
    fn as_ref(&self) -> &str {
        &self.canonical
    }
}

impl PartialEq for Text {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for Text {}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        self.canonical == other
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        self.canonical == *other
    }
}

impl PartialOrd for Text {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Text {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical.cmp(&other.canonical)
    }
}

impl PartialOrd<str> for Text {
    fn partial_cmp(&self, other: &str) -> Option<Ordering> {
        Some(self.canonical.as_str().cmp(other))
    }
}

impl PartialOrd<&str> for Text {
    fn partial_cmp(&self, other: &&str) -> Option<Ordering> {
        Some(self.canonical.as_str().cmp(*other))
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{:?}]", self.spec.name, self.canonical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructors::ConstructExt;
    use pretty_assertions::assert_eq;
    use tessera_validator::prelude::max_length;

    fn reversed() -> TextType {
        TextType::new("Reversed").transform(|s| s.chars().rev().collect())
    }

    #[test]
    fn test_source_is_kept() {
        let text = reversed().instantiate(Value::from("abc"));
        assert_eq!(text.as_str(), "cba");
        assert_eq!(*text.source(), "abc");
    }

    #[test]
    fn test_non_string_sources_use_their_text() {
        assert_eq!(TextType::new("Plain").instantiate(Value::from(42)), "42");
        assert_eq!(TextType::new("Plain").instantiate(Value::Null), "");
    }

    #[test]
    fn test_rebuilding_the_same_type_is_identity() {
        let kind = reversed();
        let once = kind.new("abc").unwrap();
        let twice = kind.new(once.clone()).unwrap();
        assert_eq!(twice, "cba");

        let other = reversed().new(once).unwrap();
        assert_eq!(other, "abc");
    }

    #[test]
    fn test_ordering_and_equality() {
        let kind = TextType::new("Name");
        let a = kind.instantiate("a".into());
        let b = kind.instantiate("b".into());
        assert!(a < b);
        assert!(a < "b");
        assert_eq!(a, "a");
        assert_ne!(Value::object(a), Value::Null);
    }

    #[test]
    fn test_canonical_rules() {
        let short = TextType::new("Short").validates_text(max_length(3));
        assert!(short.instantiate("abc".into()).is_valid());
        let errors = short.instantiate("abcd".into()).errors();
        assert_eq!(errors.full_messages(), vec!["is too long (maximum is 3 characters)"]);
    }
}
