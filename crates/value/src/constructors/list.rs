use super::Construct;
use crate::error::{BuildError, BuildResult};
use crate::value::Value;
use std::fmt;

/// Builds every element of a list through `source`.
///
/// `Null` passes through unchanged; the first failing element aborts the
/// whole build. Value objects exposing an element sequence are accepted
/// like lists.
#[derive(Clone)]
pub struct List<C> {
    source: C,
}

impl<C> List<C> {
    pub fn new(source: C) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &C {
        &self.source
    }

    pub fn into_source(self) -> C {
        self.source
    }
}

impl<C: Construct> List<C> {
    fn build_all(&self, items: Vec<Value>) -> BuildResult<Value> {
        items
            .into_iter()
            .map(|item| self.source.build(item))
            .collect::<BuildResult<Vec<_>>>()
            .map(Value::List)
    }
}

impl<C: Construct> Construct for List<C> {
    fn build(&self, input: Value) -> BuildResult<Value> {
        match input {
            Value::Null => Ok(Value::Null),
            Value::List(items) => self.build_all(items),
            Value::Lazy(thunk) => self.build(thunk.force()),
            Value::Object(ref object) => match object.items() {
                Some(items) => self.build_all(items),
                None => Err(BuildError::shape_mismatch(
                    format!("{self:?}"),
                    "sequence",
                    format!("{input:?}"),
                )),
            },
            other => Err(BuildError::shape_mismatch(
                format!("{self:?}"),
                "sequence",
                format!("{other:?}"),
            )),
        }
    }
}

impl<C: fmt::Debug> fmt::Debug for List<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<List {:?}>", self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructors::ConstructExt;
    use crate::target::wrap_fn;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn positive() -> crate::target::Base {
        wrap_fn("positive", |input| match input.as_i64() {
            Some(n) if n > 0 => Ok(input),
            _ => Err(BuildError::rejected("positive", format!("{input:?}"), "not positive")),
        })
    }

    #[test]
    fn test_maps_in_order() {
        let chain = positive().list();
        assert_eq!(chain.new(vec![3, 1, 2]).unwrap(), Value::from(vec![3, 1, 2]));
        assert_eq!(chain.new(Vec::<i64>::new()).unwrap(), Value::List(vec![]));
    }

    #[test]
    fn test_null_passes_through() {
        assert!(positive().list().new(Value::Null).unwrap().is_null());
    }

    #[test]
    fn test_first_failure_aborts() {
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&seen);
        let chain = wrap_fn("counted", move |input| {
            counter.fetch_add(1, Ordering::SeqCst);
            if input == 0 {
                Err(BuildError::rejected("counted", "0", "zero"))
            } else {
                Ok(input)
            }
        })
        .list();

        assert!(chain.new(vec![1, 0, 2]).is_err());
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_scalar_input_is_a_shape_mismatch() {
        let error = positive().list().new("a").unwrap_err();
        assert_eq!(
            error,
            BuildError::shape_mismatch("<List <Base positive>>", "sequence", "\"a\"")
        );
    }
}
