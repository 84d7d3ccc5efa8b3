//! What a constructor chain ultimately builds
//!
//! The innermost layer of every chain is a [`Base`] around a [`Target`]:
//! either a type (something that constructs from one input) or a named
//! function. Anything else is still accepted at composition time and only
//! fails once a build is attempted.

use crate::constructors::Construct;
use crate::error::{BuildError, BuildResult};
use crate::value::Value;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// A type that can be instantiated from a single input value.
pub trait ValueType: fmt::Debug + Send + Sync {
    fn name(&self) -> &str;

    fn construct(&self, input: Value) -> BuildResult<Value>;
}

type Callable = Arc<dyn Fn(Value) -> BuildResult<Value> + Send + Sync>;

/// A named function target.
#[derive(Clone)]
pub struct Function {
    name: Cow<'static, str>,
    f: Callable,
}

impl Function {
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        f: impl Fn(Value) -> BuildResult<Value> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            f: Arc::new(f),
        }
    }

    /// A function that cannot fail.
    pub fn infallible(
        name: impl Into<Cow<'static, str>>,
        f: impl Fn(Value) -> Value + Send + Sync + 'static,
    ) -> Self {
        Self::new(name, move |input| Ok(f(input)))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn invoke(&self, input: Value) -> BuildResult<Value> {
        (self.f)(input)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The thing a chain builds.
#[derive(Clone)]
pub enum Target {
    /// Type-style construction.
    Type(Arc<dyn ValueType>),
    /// Function-style construction.
    Function(Function),
    /// Supports neither style; every build fails with `NotBuildable`.
    Inert(Value),
}

impl Target {
    pub fn of_type(value_type: impl ValueType + 'static) -> Self {
        Self::Type(Arc::new(value_type))
    }

    pub fn function(
        name: impl Into<Cow<'static, str>>,
        f: impl Fn(Value) -> BuildResult<Value> + Send + Sync + 'static,
    ) -> Self {
        Self::Function(Function::new(name, f))
    }

    pub fn is_buildable(&self) -> bool {
        !matches!(self, Self::Inert(_))
    }
}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(value_type) => fmt::Debug::fmt(value_type, f),
            Self::Function(function) => fmt::Debug::fmt(function, f),
            Self::Inert(value) => fmt::Debug::fmt(value, f),
        }
    }
}

impl From<Function> for Target {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

impl From<Arc<dyn ValueType>> for Target {
    fn from(value_type: Arc<dyn ValueType>) -> Self {
        Self::Type(value_type)
    }
}

impl From<Value> for Target {
    fn from(value: Value) -> Self {
        Self::Inert(value)
    }
}

// ============================================================================
// BASE LAYER
// ============================================================================

/// Innermost chain layer: builds by delegating to its target.
#[derive(Clone)]
pub struct Base {
    target: Target,
}

impl Base {
    pub fn new(target: impl Into<Target>) -> Self {
        Self {
            target: target.into(),
        }
    }

    pub fn target(&self) -> &Target {
        &self.target
    }
}

impl Construct for Base {
    fn build(&self, input: Value) -> BuildResult<Value> {
        match &self.target {
            Target::Type(value_type) => value_type.construct(input),
            Target::Function(function) => function.invoke(input),
            Target::Inert(target) => {
                tracing::debug!(target_value = ?target, input = ?input, "target is not buildable");
                Err(BuildError::not_buildable(
                    format!("{target:?}"),
                    format!("{input:?}"),
                ))
            }
        }
    }
}

impl fmt::Debug for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Base {:?}>", self.target)
    }
}

/// Wraps any target in a base layer.
///
/// ```
/// use tessera_value::prelude::*;
///
/// let parse = wrap(Function::infallible("upcase", |v: Value| v.to_text().to_uppercase().into()));
/// assert_eq!(parse.new("joe").unwrap(), "JOE");
/// ```
pub fn wrap(target: impl Into<Target>) -> Base {
    Base::new(target)
}

/// Wraps a type in a base layer.
pub fn wrap_type(value_type: impl ValueType + 'static) -> Base {
    Base::new(Target::of_type(value_type))
}

/// Wraps a named function in a base layer.
pub fn wrap_fn(
    name: impl Into<Cow<'static, str>>,
    f: impl Fn(Value) -> BuildResult<Value> + Send + Sync + 'static,
) -> Base {
    Base::new(Target::function(name, f))
}
