//! Constructor chains
//!
//! A chain is a stack of layers over a base target. Each layer wraps its
//! `source` and either handles the input itself or delegates inward:
//!
//! - [`List`] maps the inner chain over every element.
//! - [`Either`] short-circuits to a replacement when a guard matches.
//! - [`Valid`] validates whatever the inner chain built.
//!
//! Layers compose through [`ConstructExt`], which every [`Construct`]
//! implementation gets for free:
//!
//! ```
//! use tessera_value::prelude::*;
//!
//! let user = StructType::builder("User").attribute("name").build();
//! let users = user.list().maybe();
//!
//! assert!(users.new(Value::Null).unwrap().is_null());
//! let built = users.new(serde_json::json!([{"name": "Joe"}])).unwrap();
//! assert_eq!(built.dump(), Value::from(serde_json::json!([{"name": "Joe"}])));
//! ```

mod either;
mod list;
mod valid;

pub use either::{Either, Guard, Predicate};
pub use list::List;
pub use valid::Valid;

use crate::error::BuildResult;
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

// ============================================================================
// CORE TRAIT
// ============================================================================

/// Anything that builds a value from one input.
///
/// `Debug` renders the chain structure, e.g. `<Either <List User> | null>`.
pub trait Construct: fmt::Debug + Send + Sync {
    fn build(&self, input: Value) -> BuildResult<Value>;
}

impl<C: Construct + ?Sized> Construct for &C {
    fn build(&self, input: Value) -> BuildResult<Value> {
        (**self).build(input)
    }
}

impl<C: Construct + ?Sized> Construct for Box<C> {
    fn build(&self, input: Value) -> BuildResult<Value> {
        (**self).build(input)
    }
}

impl<C: Construct + ?Sized> Construct for Arc<C> {
    fn build(&self, input: Value) -> BuildResult<Value> {
        (**self).build(input)
    }
}

/// A type-erased, shareable chain.
pub type Chain = Arc<dyn Construct>;

// ============================================================================
// EXTENSION TRAIT
// ============================================================================

/// Entry points and layer composition for every [`Construct`].
///
/// `new`, `call` and `load` are the same operation under three names.
pub trait ConstructExt: Construct + Sized {
    fn new(&self, input: impl Into<Value>) -> BuildResult<Value> {
        self.build(input.into())
    }

    fn call(&self, input: impl Into<Value>) -> BuildResult<Value> {
        self.build(input.into())
    }

    fn load(&self, input: impl Into<Value>) -> BuildResult<Value> {
        self.build(input.into())
    }

    /// Builds every element of a list input; `Null` passes through.
    fn list(self) -> List<Self> {
        List::new(self)
    }

    /// Returns `Null` for a `Null` input.
    fn maybe(self) -> Either<Self> {
        Either::new(self, Guard::value(Value::Null), Value::Null)
    }

    /// Returns `target` for any blank input.
    fn either_present_or(self, target: impl Into<Value>) -> Either<Self> {
        Either::new(self, Guard::blank(), target)
    }

    /// Returns `Undefined` for any blank input, leaving a struct slot unset.
    fn either_present_or_undefined(self) -> Either<Self> {
        self.either_present_or(Value::Undefined)
    }

    /// Returns the input unchanged when it equals `source`.
    fn guard(self, source: impl Into<Value>) -> Either<Self> {
        let source = source.into();
        Either::new(self, Guard::value(source.clone()), source)
    }

    /// Returns `target` whenever `source` matches the input.
    fn guard_as(self, source: impl Into<Guard>, target: impl Into<Value>) -> Either<Self> {
        Either::new(self, source, target)
    }

    /// Validates the built value when it supports validation.
    fn valid(self) -> Valid<Self> {
        Valid::new(self)
    }

    /// Erases the chain type.
    fn boxed(self) -> Chain
    where
        Self: 'static,
    {
        Arc::new(self)
    }
}

impl<C: Construct> ConstructExt for C {}
