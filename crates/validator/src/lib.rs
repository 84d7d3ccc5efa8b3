//! # tessera-validator
//!
//! Composable validation rules. This crate is the engine behind the
//! validation capability of tessera value objects: a value type attaches
//! rules, and a `valid()` constructor layer turns the collected
//! [`ValidationErrors`](foundation::ValidationErrors) into a build failure.
//!
//! ## Quick Start
//!
//! ```
//! use tessera_validator::prelude::*;
//!
//! let username = min_length(3).and(max_length(20));
//! assert!(username.validate("alice").is_ok());
//! assert!(username.validate("al").is_err());
//! ```
//!
//! Declare new rules with [`validator!`] or implement
//! [`Validate`](foundation::Validate) by hand.

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;

pub use foundation::{Validate, ValidateExt, ValidationError, ValidationErrors};
