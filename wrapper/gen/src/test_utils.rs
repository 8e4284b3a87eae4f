//! Shared test utilities for wrapper-gen tests.

use wrapper_define::{Field, Function, Tag};

/// Creates a function for testing.
///
/// ## Arguments
///
/// * `request` - Request type name (receiver is a pointer)
/// * `endpoint_params` - Names of untagged `Snowflake` fields
/// * `responses` - Response type names, each a pointer
pub fn make_function(request: &str, endpoint_params: &[&str], responses: &[&str]) -> Function {
    let from = endpoint_params
        .iter()
        .fold(Field::new("r", request).pointer(), |field, name| {
            field.with_field(Field::new(*name, "Snowflake"))
        });

    Function {
        from,
        to: responses
            .iter()
            .map(|name| Field::new("result", *name).pointer())
            .collect(),
    }
}

/// A small mix of functions: path parameters, body fields, the client-bound
/// application ID, and both arities.
pub fn sample_functions() -> Vec<Function> {
    vec![
        make_function("GetChannel", &["ChannelID"], &["Channel"]),
        Function::new(
            Field::new("r", "CreateGlobalApplicationCommand")
                .pointer()
                .with_field(Field::new("ApplicationID", "Snowflake"))
                .with_field(Field::new("Name", "string").with_tag(Tag::new("json", "name"))),
            Field::new("result", "ApplicationCommand").pointer(),
        ),
        make_function(
            "GetCurrentUserGuilds",
            &[],
            &["Guild", "Guild"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use wrapper_define::Arity;

    #[test]
    fn make_function_builds_pointer_request() {
        let function = make_function("GetUser", &["UserID"], &["User"]);
        assert_eq!(function.from.name_with_pointer(), "*GetUser");
        assert_eq!(function.from.fields.len(), 1);
        assert_eq!(function.arity(), Arity::Single);
    }

    #[test]
    fn sample_functions_cover_both_arities() {
        let functions = sample_functions();
        assert!(functions.iter().any(|f| f.arity() == Arity::Single));
        assert!(functions.iter().any(|f| f.arity() == Arity::Multiple));
    }
}
