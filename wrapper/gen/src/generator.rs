//! File-level generation.
//!
//! Concatenates a caller-supplied header with the emitted wrapper method of
//! every function, in input order. Generation cannot fail; malformed models
//! produce malformed Go that only surfaces when the output is compiled.

use tracing::info;
use wrapper_define::Function;

use crate::codegen::emit_function;
use crate::config::GeneratorOptions;

/// Generates a file body with default options.
///
/// ## Examples
///
/// ```
/// use wrapper_define::{Field, Function};
/// use wrapper_gen::generate;
///
/// let functions = vec![Function::new(
///     Field::new("r", "GetUser").pointer().with_field(Field::new("UserID", "Snowflake")),
///     Field::new("result", "User").pointer(),
/// )];
///
/// let code = generate("package wrapper\n\n", &functions);
/// assert!(code.starts_with("package wrapper\n\n// Send sends a GetUser request"));
/// assert!(code.contains("EndpointGetUser(r.UserID)"));
/// ```
pub fn generate(header: &str, functions: &[Function]) -> String {
    generate_with_options(header, functions, &GeneratorOptions::default())
}

/// Generates a file body: the header verbatim, then each function's method
/// followed by a newline.
pub fn generate_with_options(
    header: &str,
    functions: &[Function],
    options: &GeneratorOptions,
) -> String {
    let mut content = String::from(header);

    for function in functions {
        content.push_str(&emit_function(function, options));
        content.push('\n');
    }

    info!(functions = functions.len(), bytes = content.len(), "generated wrappers");
    content
}
