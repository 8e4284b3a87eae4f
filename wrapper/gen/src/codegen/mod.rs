//! Code generation modules for wrapper methods.
//!
//! This module contains the pieces that turn a [`wrapper_define::Function`]
//! into Go source. Each submodule handles one step.
//!
//! ## Submodules
//!
//! - [`classify`] - Splits request fields into endpoint parameters and body fields
//! - [`endpoint`] - Builds the endpoint helper call from the endpoint parameters
//! - [`emitter`] - Builds and emits one wrapper method, shaped by response arity
//! - [`ast`] - The intermediate representation the emitter produces
//! - [`render`] - Prints the intermediate representation as Go source
//!
//! ## Code Generation Flow
//!
//! 1. Request fields are classified via [`classify_fields`]
//! 2. The endpoint call is built via [`build_endpoint_call`]
//! 3. The method IR is built via [`build_method`]
//! 4. The method is rendered via [`emit_function`]
//!
//! See [`crate::generator`] for assembling a whole file.

pub mod ast;
pub mod classify;
pub mod emitter;
pub mod endpoint;
pub mod render;

pub use classify::{
    APPLICATION_ID_FIELD, Classification, EndpointParam, classify_fields, endpoint_argument_list,
    endpoint_arguments,
};
pub use emitter::{build_method, emit_function};
pub use endpoint::{ENDPOINT_PREFIX, EndpointCall, build_endpoint_call, endpoint_callee};
pub use render::Emit;
