//! Generation units.
//!
//! - [`Function`] - one request type mapped to one or more response types
//! - [`Arity`] - how many response types a function declares

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::field::Field;

/// Number of response types a [`Function`] declares.
///
/// The arity is the only input that changes the shape of the generated
/// return statements.
///
/// ## Examples
///
/// ```
/// use wrapper_define::Arity;
///
/// assert_eq!(Arity::from_count(1), Arity::Single);
/// assert_eq!(Arity::from_count(3), Arity::Multiple);
/// assert_eq!(Arity::Multiple.to_string(), "multiple");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Arity {
    /// Exactly one response type.
    Single,
    /// Two or more response types.
    Multiple,
}

impl Arity {
    /// Classifies a response count.
    ///
    /// Zero is treated as [`Arity::Single`]; the model is not validated.
    pub fn from_count(count: usize) -> Self {
        if count >= 2 {
            Arity::Multiple
        } else {
            Arity::Single
        }
    }
}

/// One generation unit: a request mapped to its response(s).
///
/// Built once by the host before generation and read-only afterwards.
///
/// ## Examples
///
/// ```
/// use wrapper_define::{Arity, Field, Function};
///
/// let function = Function::new(
///     Field::new("r", "GetChannel").pointer(),
///     Field::new("result", "Channel").pointer(),
/// );
/// assert_eq!(function.arity(), Arity::Single);
///
/// let function = function.with_response(Field::new("result", "Thread").pointer());
/// assert_eq!(function.arity(), Arity::Multiple);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    /// The request field. Its nested `fields` are the request's own members.
    pub from: Field,
    /// Response fields, in declaration order.
    pub to: Vec<Field>,
}

impl Function {
    /// Creates a function with a single response.
    pub fn new(from: Field, to: Field) -> Self {
        Self { from, to: vec![to] }
    }

    /// Appends another response type.
    pub fn with_response(mut self, to: Field) -> Self {
        self.to.push(to);
        self
    }

    /// Returns the arity derived from the number of response fields.
    pub fn arity(&self) -> Arity {
        Arity::from_count(self.to.len())
    }

    /// Returns the first response field, which types the generated result.
    pub fn primary_response(&self) -> Option<&Field> {
        self.to.first()
    }
}
