//! Built-in rules
//!
//! ```
//! use tessera_validator::prelude::*;
//!
//! let username = not_empty().and(max_length(20));
//! let accepted = is_true();
//! assert!(username.validate("joe").is_ok());
//! assert!(accepted.validate(&true).is_ok());
//! ```

pub mod boolean;
pub mod length;
pub mod pattern;

pub use boolean::{IsTrue, is_true};
pub use length::{
    ExactLength, LengthMode, MaxLength, MinLength, NotEmpty, exact_length, max_length, min_length,
    not_empty,
};
pub use pattern::{Matches, PatternError, matches};
