//! OR combinator - at least one rule must pass

use crate::foundation::{Validate, ValidationError};

/// Combines two rules with logical OR.
///
/// When both fail, the error carries both failures as nested errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    left: L,
    right: R,
}

impl<L, R> Or<L, R> {
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let Err(left_error) = self.left.validate(input) else {
            return Ok(());
        };
        let Err(right_error) = self.right.validate(input) else {
            return Ok(());
        };
        Err(
            ValidationError::new("or_failed", "matches none of the alternatives")
                .with_nested(vec![left_error, right_error]),
        )
    }
}

/// Creates an [`Or`] combinator.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}
