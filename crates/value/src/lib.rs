//! # tessera-value
//!
//! Immutable value objects built through composable constructor chains.
//!
//! A chain starts at a target (a [`ValueType`], a named [`Function`], or a
//! [`StructType`]) and stacks layers on top:
//!
//! ```
//! use tessera_value::prelude::*;
//! use serde_json::json;
//!
//! let user = StructType::builder("User")
//!     .attribute("name")
//!     .attribute_with("email", TextType::new("Email").either_present_or_undefined())
//!     .validates("name", presence())
//!     .build();
//!
//! let users = user.clone().valid().list().maybe();
//!
//! let built = users.load(json!([{"name": "Joe", "email": ""}])).unwrap();
//! assert_eq!(built.to_json().unwrap(), json!([{"name": "Joe"}]));
//!
//! assert!(users.load(Value::Null).unwrap().is_null());
//! assert!(users.load(json!([{"email": "joe@example.com"}])).is_err());
//! ```
//!
//! [`dump`] lowers any built value back to plain maps, lists and scalars.

pub mod constructors;
mod dump;
pub mod error;
pub mod examiner;
pub mod object;
pub mod prelude;
pub mod record;
pub mod target;
pub mod text;
mod value;

pub use constructors::{Chain, Construct, ConstructExt, Either, Guard, List, Valid};
pub use dump::{dump, to_json};
pub use error::{BuildError, BuildResult};
pub use object::{ObjectRef, Validatable, ValueObject};
pub use record::{Attribute, SchemaBuilder, Slot, StructType, StructValue, UnknownKeys};
pub use target::{Base, Function, Target, ValueType, wrap, wrap_fn, wrap_type};
pub use text::{Text, TextType};
pub use value::{Map, Thunk, Value};
