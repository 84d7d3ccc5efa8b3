//! WHEN combinator - conditional validation

use crate::foundation::{Validate, ValidationError};

/// Runs the inner rule only if the condition holds; otherwise passes.
///
/// ```
/// use tessera_validator::prelude::*;
///
/// let rule = min_length(10).when(|s: &str| s.starts_with("long:"));
/// assert!(rule.validate("short").is_ok());
/// assert!(rule.validate("long:x").is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct When<V, C> {
    validator: V,
    condition: C,
}

impl<V, C> When<V, C> {
    pub fn new(validator: V, condition: C) -> Self {
        Self {
            validator,
            condition,
        }
    }

    pub fn into_parts(self) -> (V, C) {
        (self.validator, self.condition)
    }
}

impl<V, C> Validate for When<V, C>
where
    V: Validate,
    C: Fn(&V::Input) -> bool,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if (self.condition)(input) {
            self.validator.validate(input)
        } else {
            Ok(())
        }
    }
}

/// Creates a [`When`] combinator.
pub fn when<V, C>(validator: V, condition: C) -> When<V, C>
where
    V: Validate,
    C: Fn(&V::Input) -> bool,
{
    When::new(validator, condition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{is_true, min_length};

    #[test]
    fn test_when_skips() {
        let rule = when(min_length(3), |s: &str| !s.is_empty());
        assert!(rule.validate("").is_ok());
        assert!(rule.validate("ab").is_err());
        assert!(rule.validate("abc").is_ok());
    }

    #[test]
    fn test_when_on_sized_input() {
        let rule = when(is_true(), |_: &bool| false);
        assert!(rule.validate(&false).is_ok());
    }
}
