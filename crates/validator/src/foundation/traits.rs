//! Core traits for the validation system

use crate::combinators::{And, Not, Or, When};
use crate::foundation::ValidationError;
use std::sync::Arc;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// A single validation rule over some input type.
///
/// `Input` may be unsized (`str`, `[T]`) so rules borrow instead of copy.
///
/// # Examples
///
/// ```
/// use tessera_validator::foundation::{Validate, ValidationError};
///
/// struct Palindrome;
///
/// impl Validate for Palindrome {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.chars().eq(input.chars().rev()) {
///             Ok(())
///         } else {
///             Err(ValidationError::new("palindrome", "must read the same backwards"))
///         }
///     }
/// }
///
/// assert!(Palindrome.validate("abba").is_ok());
/// assert!(Palindrome.validate("abc").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Checks the input, returning the violation on failure.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Arc<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Fluent composition for every [`Validate`] implementation.
///
/// ```
/// use tessera_validator::prelude::*;
///
/// let name = not_empty().and(max_length(20));
/// assert!(name.validate("Joe").is_ok());
/// assert!(name.validate("").is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Both rules must pass; stops at the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// At least one rule must pass; stops at the first success.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Inverts the rule.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// Runs the rule only when `condition` holds for the input.
    fn when<C>(self, condition: C) -> When<Self, C>
    where
        C: Fn(&Self::Input) -> bool,
    {
        When::new(self, condition)
    }
}

impl<T: Validate> ValidateExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    #[test]
    fn test_validate_through_pointers() {
        let boxed: Box<dyn Validate<Input = str>> = Box::new(AlwaysValid);
        assert!(boxed.validate("x").is_ok());

        let shared: Arc<dyn Validate<Input = str> + Send + Sync> = Arc::new(AlwaysValid);
        assert!(shared.validate("x").is_ok());
        assert!((&AlwaysValid).validate("x").is_ok());
    }
}
