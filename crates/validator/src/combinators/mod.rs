//! Validator combinators
//!
//! Combinators build compound rules out of simpler ones. They are zero-cost
//! wrappers; most users reach them through
//! [`ValidateExt`](crate::foundation::ValidateExt).

pub mod and;
pub mod not;
pub mod or;
pub mod when;

pub use and::{And, and};
pub use not::{Not, not};
pub use or::{Or, or};
pub use when::{When, when};
