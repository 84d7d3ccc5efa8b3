//! Prelude module for convenient imports.
//!
//! ```
//! use tessera_validator::prelude::*;
//!
//! let rule = min_length(3).and(max_length(20)).when(|s: &str| !s.is_empty());
//! assert!(rule.validate("").is_ok());
//! ```

pub use crate::foundation::{Validate, ValidateExt, ValidationError, ValidationErrors};

pub use crate::validators::{
    exact_length, is_true, matches, max_length, min_length, not_empty,
};

pub use crate::combinators::{And, Not, Or, When, and, not, or, when};
