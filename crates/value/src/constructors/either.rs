use super::Construct;
use crate::error::BuildResult;
use crate::value::Value;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// A named input predicate.
#[derive(Clone)]
pub struct Predicate {
    name: Cow<'static, str>,
    f: Arc<dyn Fn(&Value) -> bool + Send + Sync>,
}

impl Predicate {
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        f: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            f: Arc::new(f),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn test(&self, input: &Value) -> bool {
        (self.f)(input)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.name)
    }
}

/// Decides whether an [`Either`] layer short-circuits.
#[derive(Clone)]
pub enum Guard {
    /// Matches inputs equal to the value.
    Value(Value),
    /// Matches inputs the predicate accepts.
    Predicate(Predicate),
}

impl Guard {
    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    pub fn predicate(f: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        Self::Predicate(Predicate::new("predicate", f))
    }

    pub fn named(
        name: impl Into<Cow<'static, str>>,
        f: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self::Predicate(Predicate::new(name, f))
    }

    /// Matches blank inputs; see [`Value::is_blank`].
    pub fn blank() -> Self {
        Self::named("blank", Value::is_blank)
    }

    pub fn matches(&self, input: &Value) -> bool {
        match self {
            Self::Value(expected) => expected == input,
            Self::Predicate(predicate) => predicate.test(input),
        }
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => fmt::Debug::fmt(value, f),
            Self::Predicate(predicate) => fmt::Debug::fmt(predicate, f),
        }
    }
}

impl From<Value> for Guard {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for Guard {
    fn from(value: &str) -> Self {
        Self::Value(value.into())
    }
}

impl From<Predicate> for Guard {
    fn from(predicate: Predicate) -> Self {
        Self::Predicate(predicate)
    }
}

/// Returns a fixed replacement when the guard matches, otherwise delegates.
///
/// The replacement is returned as-is; it is never passed through `source`.
#[derive(Clone)]
pub struct Either<C> {
    source: C,
    guard: Guard,
    target: Value,
}

impl<C> Either<C> {
    pub fn new(source: C, guard: impl Into<Guard>, target: impl Into<Value>) -> Self {
        Self {
            source,
            guard: guard.into(),
            target: target.into(),
        }
    }

    pub fn source(&self) -> &C {
        &self.source
    }

    pub fn into_source(self) -> C {
        self.source
    }

    pub fn guard(&self) -> &Guard {
        &self.guard
    }

    /// The value returned when the guard matches.
    pub fn replacement(&self) -> &Value {
        &self.target
    }
}

impl<C: Construct> Construct for Either<C> {
    fn build(&self, input: Value) -> BuildResult<Value> {
        if self.guard.matches(&input) {
            tracing::trace!(guard = ?self.guard, input = ?input, "guard matched, returning replacement");
            return Ok(self.target.clone());
        }
        self.source.build(input)
    }
}

impl<C: fmt::Debug> fmt::Debug for Either<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Either {:?} | {:?}", self.source, self.guard)?;
        match &self.guard {
            Guard::Value(value) if *value == self.target => {}
            _ => write!(f, " as {:?}", self.target)?,
        }
        f.write_str(">")
    }
}
