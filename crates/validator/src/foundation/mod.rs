//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//!
//! Rules are generic over their input type and compose through
//! [`ValidateExt`]. Collecting every failure of a set of rules (rather than
//! stopping at the first) is the job of [`validate_with_all`].

pub mod error;
pub mod traits;

pub use error::{ValidationError, ValidationErrors};
pub use traits::{Validate, ValidateExt};

/// Runs every rule and collects all failures.
///
/// ```
/// use tessera_validator::foundation::validate_with_all;
/// use tessera_validator::validators::{min_length, not_empty};
///
/// let errors = validate_with_all("", &[&not_empty(), &not_empty()]);
/// assert_eq!(errors.len(), 2);
/// assert!(validate_with_all("ok", &[&min_length(1)]).is_empty());
/// ```
pub fn validate_with_all<V>(value: &V::Input, validators: &[&V]) -> ValidationErrors
where
    V: Validate + ?Sized,
{
    validators
        .iter()
        .filter_map(|validator| validator.validate(value).err())
        .collect()
}

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
