//! Wrapper Definition Library
//!
//! This crate provides the model consumed by `wrapper-gen` to generate `Send`
//! wrapper methods for request types.
//!
//! ## Core Types
//!
//! - [`Function`] - One request type mapped to one or more response types
//! - [`Field`] - A described struct member (name, type, tags, nested fields)
//! - [`Tag`] - A serialization tag on a field
//! - [`Arity`] - Single or multiple response types
//!
//! ## Examples
//!
//! ```
//! use wrapper_define::{Arity, Field, Function, Tag};
//!
//! let function = Function::new(
//!     Field::new("r", "ModifyChannel")
//!         .pointer()
//!         .with_field(Field::new("ChannelID", "Snowflake"))
//!         .with_field(Field::new("Name", "string").with_tag(Tag::new("json", "name"))),
//!     Field::new("result", "Channel").pointer(),
//! );
//!
//! assert_eq!(function.arity(), Arity::Single);
//! assert_eq!(function.from.fields.len(), 2);
//! ```

pub mod field;
pub mod function;
pub mod prelude;

pub use field::{Field, Tag};
pub use function::{Arity, Function};
