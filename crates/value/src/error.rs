//! Construction and dump errors
//!
//! Every failure is a deterministic function of the input and the chain
//! configuration, so nothing here is retried: errors propagate straight to
//! the caller of `build`/`to_json`.

use tessera_validator::ValidationErrors;

/// Errors raised while building or lowering value objects.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum BuildError {
    /// The wrapped target supports neither type-style nor function-style
    /// construction. Raised on the first build attempt, never at composition.
    #[error("{target} cannot build from {input}: it is neither a type nor a function")]
    NotBuildable { target: String, input: String },

    /// The built value reported violations through its validation capability.
    #[error("{target} is invalid: {errors}")]
    ValidationFailed {
        target: String,
        errors: ValidationErrors,
    },

    /// The input (or a dumped value) has a shape the operation cannot accept.
    #[error("{target} expected {expected}, got {found}")]
    ShapeMismatch {
        target: String,
        expected: &'static str,
        found: String,
    },

    /// A mapping key names no declared attribute and the schema rejects
    /// unknown keys.
    #[error("{target} has no attribute `{name}`")]
    UnknownAttribute { target: String, name: String },

    /// A function target refused its input.
    #[error("{target} rejected {input}: {reason}")]
    Rejected {
        target: String,
        input: String,
        reason: String,
    },
}

impl BuildError {
    pub fn not_buildable(target: impl Into<String>, input: impl Into<String>) -> Self {
        Self::NotBuildable {
            target: target.into(),
            input: input.into(),
        }
    }

    pub fn validation_failed(target: impl Into<String>, errors: ValidationErrors) -> Self {
        Self::ValidationFailed {
            target: target.into(),
            errors,
        }
    }

    pub fn shape_mismatch(
        target: impl Into<String>,
        expected: &'static str,
        found: impl Into<String>,
    ) -> Self {
        Self::ShapeMismatch {
            target: target.into(),
            expected,
            found: found.into(),
        }
    }

    pub fn unknown_attribute(target: impl Into<String>, name: impl Into<String>) -> Self {
        Self::UnknownAttribute {
            target: target.into(),
            name: name.into(),
        }
    }

    pub fn rejected(
        target: impl Into<String>,
        input: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Rejected {
            target: target.into(),
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// The violation set, for validation failures.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::ValidationFailed { errors, .. } => Some(errors),
            _ => None,
        }
    }

    pub fn is_validation_failure(&self) -> bool {
        matches!(self, Self::ValidationFailed { .. })
    }
}

/// Result alias for construction and dump operations.
pub type BuildResult<T> = Result<T, BuildError>;

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_validator::ValidationError;

    #[test]
    fn test_not_buildable_names_target_and_input() {
        let error = BuildError::not_buildable("42", "\"foo\"");
        assert_eq!(
            error.to_string(),
            "42 cannot build from \"foo\": it is neither a type nor a function"
        );
    }

    #[test]
    fn test_validation_failed_carries_errors() {
        let errors = ValidationErrors::from(ValidationError::blank().with_field("first_name"));
        let error = BuildError::validation_failed("User", errors.clone());

        assert!(error.is_validation_failure());
        assert_eq!(error.validation_errors(), Some(&errors));
        assert_eq!(error.to_string(), "User is invalid: first_name can't be blank");
    }

    #[test]
    fn test_shape_mismatch_display() {
        let error = BuildError::shape_mismatch("User", "mapping", "\"\"");
        assert_eq!(error.to_string(), "User expected mapping, got \"\"");
        assert!(error.validation_errors().is_none());
    }
}
