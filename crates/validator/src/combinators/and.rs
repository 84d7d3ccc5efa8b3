//! AND combinator - both rules must pass

use crate::foundation::{Validate, ValidationError};

/// Combines two rules with logical AND.
///
/// The left rule runs first; its error is returned without running the right
/// one.
///
/// ```
/// use tessera_validator::prelude::*;
///
/// let rule = min_length(2).and(max_length(4));
/// assert!(rule.validate("abc").is_ok());
/// assert_eq!(rule.validate("a").unwrap_err().code, "min_length");
/// assert_eq!(rule.validate("abcde").unwrap_err().code, "max_length");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    left: L,
    right: R,
}

impl<L, R> And<L, R> {
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    pub fn left(&self) -> &L {
        &self.left
    }

    pub fn right(&self) -> &R {
        &self.right
    }

    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)
    }
}

/// Creates an [`And`] combinator.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}
