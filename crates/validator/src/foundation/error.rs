//! Error types for validation failures
//!
//! A [`ValidationError`] describes one violated rule: a stable `code` for
//! programmatic handling, an English `message`, the attribute it concerns
//! and a few template parameters. [`ValidationErrors`] is the accumulated
//! violation set a value object reports through `errors()`.
//!
//! String fields use `Cow<'static, str>` so static codes and messages never
//! allocate.

use serde::Serialize;
use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;

type Param = (Cow<'static, str>, Cow<'static, str>);

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single violated rule.
///
/// # Examples
///
/// ```
/// use tessera_validator::foundation::ValidationError;
///
/// let error = ValidationError::blank().with_field("first_name");
/// assert_eq!(error.full_message(), "first_name can't be blank");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Error code, e.g. `"blank"`, `"min_length"`, `"invalid_format"`.
    pub code: Cow<'static, str>,

    /// Human-readable message without the attribute name.
    pub message: Cow<'static, str>,

    /// Attribute the error is attached to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Cow<'static, str>>,

    /// Ordered template parameters (typically 0-2).
    #[serde(skip_serializing_if = "SmallVec::is_empty")]
    pub params: SmallVec<[Param; 2]>,

    /// Errors reported by inner rules of a combinator.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: SmallVec::new(),
            nested: Vec::new(),
        }
    }

    /// Attaches the error to an attribute.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a template parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Appends a nested error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested_error(mut self, error: ValidationError) -> Self {
        self.nested.push(error);
        self
    }

    /// Replaces the nested errors.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested(mut self, errors: Vec<ValidationError>) -> Self {
        self.nested = errors;
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Message prefixed with the attribute name, when there is one.
    #[must_use]
    pub fn full_message(&self) -> String {
        match &self.field {
            Some(field) => format!("{field} {}", self.message),
            None => self.message.to_string(),
        }
    }

    /// Counts this error and all nested ones.
    #[must_use]
    pub fn total_error_count(&self) -> usize {
        1 + self
            .nested
            .iter()
            .map(ValidationError::total_error_count)
            .sum::<usize>()
    }

    /// Flattens the error tree depth-first.
    #[must_use]
    pub fn flatten(&self) -> Vec<&ValidationError> {
        let mut result = vec![self];
        for nested in &self.nested {
            result.extend(nested.flatten());
        }
        result
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "[{field}] {}: {}", self.code, self.message)?,
            None => write!(f, "{}: {}", self.code, self.message)?,
        }

        if !self.params.is_empty() {
            let rendered: Vec<String> = self.params.iter().map(|(k, v)| format!("{k}={v}")).collect();
            write!(f, " ({})", rendered.join(", "))?;
        }

        for (i, error) in self.nested.iter().enumerate() {
            write!(f, "\n  {}. {error}", i + 1)?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// The value is blank but must be present.
    #[must_use]
    pub fn blank() -> Self {
        Self::new("blank", "can't be blank")
    }

    /// The value is present but must be blank.
    #[must_use]
    pub fn present() -> Self {
        Self::new("present", "must be blank")
    }

    /// The string is shorter than `min`.
    #[must_use]
    pub fn min_length(min: usize, actual: usize) -> Self {
        Self::new(
            "min_length",
            format!("is too short (minimum is {min} characters)"),
        )
        .with_param("min", min.to_string())
        .with_param("actual", actual.to_string())
    }

    /// The string is longer than `max`.
    #[must_use]
    pub fn max_length(max: usize, actual: usize) -> Self {
        Self::new(
            "max_length",
            format!("is too long (maximum is {max} characters)"),
        )
        .with_param("max", max.to_string())
        .with_param("actual", actual.to_string())
    }

    /// The string does not match the expected format.
    pub fn invalid_format(expected: impl Into<Cow<'static, str>>) -> Self {
        Self::new("invalid_format", "is invalid").with_param("expected", expected)
    }

    /// The value has the wrong shape for the rule.
    pub fn type_mismatch(
        expected: impl Into<Cow<'static, str>>,
        actual: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new("type_mismatch", "has the wrong type")
            .with_param("expected", expected)
            .with_param("actual", actual)
    }

    /// A free-form error.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("custom", message)
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// The accumulated violation set of one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Number of top-level errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Errors attached to a given attribute.
    pub fn on<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationError> + 'a {
        self.errors
            .iter()
            .filter(move |e| e.field.as_deref() == Some(field))
    }

    /// Full messages of every error, in insertion order.
    #[must_use]
    pub fn full_messages(&self) -> Vec<String> {
        self.errors.iter().map(ValidationError::full_message).collect()
    }

    /// `Ok(ok_value)` when empty, otherwise `Err(self)`.
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl Extend<ValidationError> for ValidationErrors {
    fn extend<I: IntoIterator<Item = ValidationError>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_messages().join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_message_with_field() {
        let error = ValidationError::blank().with_field("email");
        assert_eq!(error.full_message(), "email can't be blank");
    }

    #[test]
    fn test_full_message_without_field() {
        assert_eq!(ValidationError::blank().full_message(), "can't be blank");
    }

    #[test]
    fn test_params_lookup() {
        let error = ValidationError::min_length(5, 3);
        assert_eq!(error.param("min"), Some("5"));
        assert_eq!(error.param("actual"), Some("3"));
        assert_eq!(error.param("max"), None);
    }

    #[test]
    fn test_nested_count_and_flatten() {
        let error = ValidationError::new("or_failed", "no alternative passed").with_nested(vec![
            ValidationError::blank(),
            ValidationError::new("inner", "inner")
                .with_nested_error(ValidationError::custom("deepest")),
        ]);

        assert_eq!(error.total_error_count(), 4);
        assert_eq!(error.flatten().len(), 4);
    }

    #[test]
    fn test_display_includes_params_and_nested() {
        let error = ValidationError::min_length(5, 3)
            .with_field("name")
            .with_nested_error(ValidationError::blank());
        let display = error.to_string();

        assert!(display.starts_with("[name] min_length: is too short"));
        assert!(display.contains("min=5, actual=3"));
        assert!(display.contains("1. blank: can't be blank"));
    }

    #[test]
    fn test_collection_filters_by_field() {
        let errors: ValidationErrors = vec![
            ValidationError::blank().with_field("first_name"),
            ValidationError::blank().with_field("second_name"),
            ValidationError::min_length(2, 1).with_field("first_name"),
        ]
        .into_iter()
        .collect();

        assert_eq!(errors.len(), 3);
        assert_eq!(errors.on("first_name").count(), 2);
        assert_eq!(
            errors.to_string(),
            "first_name can't be blank, second_name can't be blank, \
             first_name is too short (minimum is 2 characters)"
        );
    }

    #[test]
    fn test_into_result() {
        assert_eq!(ValidationErrors::new().into_result(7), Ok(7));
        let errors = ValidationErrors::from(ValidationError::blank());
        assert!(errors.into_result(7).is_err());
    }

    #[test]
    fn test_serializes_without_empty_parts() {
        let error = ValidationError::blank().with_field("email");
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"code": "blank", "message": "can't be blank", "field": "email"})
        );
    }

    #[test]
    fn test_static_strings_stay_borrowed() {
        let error = ValidationError::blank();
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }
}
