//! Convenient re-exports for building generation models.
//!
//! ```
//! use wrapper_define::prelude::*;
//!
//! let function = Function::new(Field::new("r", "GetUser").pointer(), Field::new("u", "User"));
//! assert_eq!(function.arity(), Arity::Single);
//! ```

pub use crate::field::{Field, Tag};
pub use crate::function::{Arity, Function};
