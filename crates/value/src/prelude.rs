//! Prelude module for convenient imports.
//!
//! ```
//! use tessera_value::prelude::*;
//!
//! let tags = TextType::new("Tag").list().maybe();
//! assert_eq!(tags.new(vec!["a", "b"]).unwrap().dump(), Value::from(vec!["a", "b"]));
//! ```

pub use crate::constructors::{Chain, Construct, ConstructExt, Either, Guard, List, Valid};
pub use crate::dump::{dump, to_json};
pub use crate::error::{BuildError, BuildResult};
pub use crate::examiner::{absence, acceptance, flag, presence, text};
pub use crate::object::{Validatable, ValueObject};
pub use crate::record::{StructType, StructValue, UnknownKeys};
pub use crate::target::{Base, Function, Target, ValueType, wrap, wrap_fn, wrap_type};
pub use crate::text::{Text, TextType};
pub use crate::value::{Map, Value};

pub use tessera_validator::{Validate, ValidateExt, ValidationError, ValidationErrors};
