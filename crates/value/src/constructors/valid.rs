use super::Construct;
use crate::error::{BuildError, BuildResult};
use crate::value::Value;
use std::fmt;

/// Validates what `source` built.
///
/// Values without the validation capability are returned unchecked.
#[derive(Clone)]
pub struct Valid<C> {
    source: C,
}

impl<C> Valid<C> {
    pub fn new(source: C) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &C {
        &self.source
    }

    pub fn into_source(self) -> C {
        self.source
    }
}

impl<C: Construct> Construct for Valid<C> {
    fn build(&self, input: Value) -> BuildResult<Value> {
        let built = self.source.build(input)?;

        let Some(object) = built.as_object() else {
            tracing::trace!(kind = built.kind(), "value has no validation capability");
            return Ok(built);
        };
        let Some(validatable) = object.validatable() else {
            tracing::trace!(target_type = object.type_name(), "value has no validation capability");
            return Ok(built);
        };

        if let Err(errors) = validatable.validate() {
            tracing::debug!(
                target_type = object.type_name(),
                violations = errors.len(),
                "validation failed"
            );
            return Err(BuildError::validation_failed(object.type_name(), errors));
        }
        Ok(built)
    }
}

impl<C: fmt::Debug> fmt::Debug for Valid<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Valid {:?}>", self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructors::ConstructExt;
    use crate::object::{Validatable, ValueObject};
    use crate::target::wrap_fn;
    use tessera_validator::{ValidationError, ValidationErrors};

    #[derive(Debug)]
    struct Even(i64);

    impl ValueObject for Even {
        fn type_name(&self) -> &str {
            "Even"
        }

        fn call(&self) -> Option<Value> {
            Some(Value::from(self.0))
        }

        fn validatable(&self) -> Option<&dyn Validatable> {
            Some(self)
        }
    }

    impl Validatable for Even {
        fn errors(&self) -> ValidationErrors {
            let mut errors = ValidationErrors::new();
            if self.0 % 2 != 0 {
                errors.add(ValidationError::new("even", "must be even"));
            }
            errors
        }
    }

    fn even() -> Valid<crate::target::Base> {
        wrap_fn("even", |input| Ok(Value::object(Even(input.as_i64().unwrap_or(0))))).valid()
    }

    #[test]
    fn test_valid_object_is_returned() {
        assert_eq!(even().new(4).unwrap(), 4);
    }

    #[test]
    fn test_invalid_object_fails() {
        let error = even().new(3).unwrap_err();
        assert!(error.is_validation_failure());
        assert_eq!(error.to_string(), "Even is invalid: must be even");
    }

    #[test]
    fn test_plain_values_skip_validation() {
        let chain = wrap_fn("id", Ok).valid();
        assert_eq!(chain.new("x").unwrap(), "x");
        assert_eq!(format!("{chain:?}"), "<Valid <Base id>>");
    }
}
