//! NOT combinator - inverts a rule

use crate::foundation::{Validate, ValidationError};

/// Passes when the inner rule fails and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    inner: V,
}

impl<V> Not<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V: Validate> Validate for Not<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(ValidationError::new("not_failed", "is reserved")),
            Err(_) => Ok(()),
        }
    }
}

/// Creates a [`Not`] combinator.
pub fn not<V: Validate>(validator: V) -> Not<V> {
    Not::new(validator)
}
