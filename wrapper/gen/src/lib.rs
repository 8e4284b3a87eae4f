//! Wrapper code generator library.
//!
//! This crate generates Go `Send` wrapper methods from a list of
//! [`Function`](wrapper_define::Function) definitions created with
//! `wrapper-define`. Each generated method:
//!
//! - marshals the request receiver to JSON
//! - dispatches it through the shared send primitive, addressing the
//!   endpoint helper derived from the request type name
//! - returns the parsed response and/or an error, shaped by how many
//!   response types the function declares
//!
//! ## Modules
//!
//! - [`codegen`] - Field classification, endpoint calls, method emission
//! - [`generator`] - Whole-file assembly
//! - [`loader`] - Builds functions from Rust type declarations
//! - [`output`] - Atomic file writing
//! - [`config`] - Generator options
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```
//! use wrapper_define::{Field, Function, Tag};
//! use wrapper_gen::generate;
//!
//! let functions = vec![Function::new(
//!     Field::new("r", "CreateGlobalApplicationCommand")
//!         .pointer()
//!         .with_field(Field::new("ApplicationID", "Snowflake"))
//!         .with_field(Field::new("Name", "string").with_tag(Tag::new("json", "name"))),
//!     Field::new("result", "ApplicationCommand").pointer(),
//! )];
//!
//! let code = generate("package wrapper\n\n", &functions);
//! assert!(code.contains("EndpointCreateGlobalApplicationCommand(bot.ApplicationID)"));
//! ```
//!
//! ## Generated Code Structure
//!
//! ```text
//! // Send sends a GetChannel request to Discord and returns a Channel.
//! func (r *GetChannel) Send(bot *Client) error {
//!     var result *Channel
//!     body, err := json.Marshal(r)
//!     if err != nil {
//!         return err
//!     }
//!     err = SendRequest(result, bot.client, "TODO", EndpointGetChannel(r.ChannelID), body)
//!     if err != nil {
//!         return err
//!     }
//!     return nil
//! }
//! ```

pub mod codegen;
pub mod config;
pub mod errors;
pub mod generator;
pub mod loader;
pub mod output;

#[cfg(test)]
mod test_utils;

pub use generator::{generate, generate_with_options};
