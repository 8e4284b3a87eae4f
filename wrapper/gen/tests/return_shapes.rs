//! Integration tests for arity-driven return shapes and endpoint arguments.
//!
//! These tests verify that:
//! - Single-response functions return only an error
//! - Multi-response functions return `(nil, err)` / `(result, nil)`
//! - Endpoint arguments come from the request, except `ApplicationID`
//! - The endpoint helper name is derived from the request type name

use wrapper_define::{Arity, Field, Function, Tag};
use wrapper_gen::codegen::ast::Expr;
use wrapper_gen::codegen::{build_method, emit_function, endpoint_callee};
use wrapper_gen::config::GeneratorOptions;
use wrapper_gen::generate;

fn request_x() -> Field {
    Field::new("r", "X")
        .pointer()
        .with_field(Field::new("ID", "Snowflake"))
        .with_field(Field::new("Payload", "Data").with_tag(Tag::new("json", "payload")))
}

// =============================================================================
// Scenario: one request, one vs. two responses
// =============================================================================

#[test]
fn single_response_scenario() {
    let function = Function::new(request_x(), Field::new("result", "Y").pointer());
    let code = emit_function(&function, &GeneratorOptions::default());

    assert!(code.contains("EndpointX(r.ID)"), "Generated code:\n{}", code);
    assert!(!code.contains("r.Payload"), "Body fields are not endpoint args");
    assert_eq!(code.matches("\t\treturn err\n").count(), 2);
    assert!(code.contains("\treturn nil\n}"));
    assert!(!code.contains("return nil, err"));
    assert!(!code.contains("return result, nil"));
}

#[test]
fn two_response_scenario() {
    let function = Function::new(request_x(), Field::new("result", "Y").pointer())
        .with_response(Field::new("result", "Z").pointer());
    let code = emit_function(&function, &GeneratorOptions::default());

    assert!(code.contains("EndpointX(r.ID)"), "Generated code:\n{}", code);
    assert_eq!(code.matches("\t\treturn nil, err\n").count(), 2);
    assert!(code.contains("\treturn result, nil\n}"));
    assert!(code.contains(") Send(bot *Client) (*Y, error) {"));
}

#[test]
fn endpoint_call_identical_across_arities() {
    let options = GeneratorOptions::default();
    let one = Function::new(request_x(), Field::new("result", "Y").pointer());
    let two = one.clone().with_response(Field::new("result", "Z").pointer());

    let call_one = build_method(&one, &options).find_call("EndpointX").cloned();
    let call_two = build_method(&two, &options).find_call("EndpointX").cloned();
    assert!(call_one.is_some());
    assert_eq!(call_one, call_two);
}

// =============================================================================
// Return shape holds for every arity
// =============================================================================

#[test]
fn return_shape_by_response_count() {
    let options = GeneratorOptions::default();

    for count in 1..=4 {
        let mut function = Function::new(request_x(), Field::new("result", "R0").pointer());
        for i in 1..count {
            function = function.with_response(Field::new("result", format!("R{}", i)).pointer());
        }

        let method = build_method(&function, &options);
        let returns = method.returns();
        assert_eq!(returns.len(), 3, "marshal, dispatch, success returns");

        match function.arity() {
            Arity::Single => {
                assert_eq!(count, 1);
                assert_eq!(returns[0], [Expr::ident("err")]);
                assert_eq!(returns[1], [Expr::ident("err")]);
                assert_eq!(returns[2], [Expr::Nil]);
            }
            Arity::Multiple => {
                assert!(count >= 2);
                assert_eq!(returns[0], [Expr::Nil, Expr::ident("err")]);
                assert_eq!(returns[1], [Expr::Nil, Expr::ident("err")]);
                assert_eq!(returns[2], [Expr::ident("result"), Expr::Nil]);
            }
        }
    }
}

// =============================================================================
// Endpoint arguments
// =============================================================================

#[test]
fn request_fields_referenced_in_declaration_order() {
    let request = Field::new("r", "GetGuildMember")
        .pointer()
        .with_field(Field::new("GuildID", "Snowflake"))
        .with_field(Field::new("Limit", "int").with_tag(Tag::new("url", "limit")))
        .with_field(Field::new("UserID", "Snowflake"));
    let function = Function::new(request, Field::new("result", "GuildMember").pointer());

    let code = emit_function(&function, &GeneratorOptions::default());
    assert!(
        code.contains("EndpointGetGuildMember(r.GuildID, r.UserID)"),
        "Generated code:\n{}",
        code
    );
}

#[test]
fn application_id_comes_from_client() {
    let request = Field::new("r", "GetGlobalApplicationCommands")
        .pointer()
        .with_field(Field::new("ApplicationID", "Snowflake"))
        .with_field(Field::new("WithLocalizations", "bool").with_tag(Tag::new("url", "with")));
    let function = Function::new(request, Field::new("result", "ApplicationCommand").pointer())
        .with_response(Field::new("result", "ApplicationCommand").pointer());

    let code = emit_function(&function, &GeneratorOptions::default());
    assert!(code.contains("EndpointGetGlobalApplicationCommands(bot.ApplicationID)"));
    assert!(!code.contains("r.ApplicationID"));
}

#[test]
fn callee_is_prefix_plus_stripped_name() {
    let names = ["*GetChannel", "*X", "_Odd", "*"];
    for name in names {
        let stripped: String = name.chars().skip(1).collect();
        assert_eq!(endpoint_callee(name), format!("Endpoint{}", stripped));
    }
}

// =============================================================================
// Whole-file generation
// =============================================================================

#[test]
fn generation_is_idempotent() {
    let functions = vec![
        Function::new(request_x(), Field::new("result", "Y").pointer()),
        Function::new(request_x(), Field::new("result", "Y").pointer())
            .with_response(Field::new("result", "Z").pointer()),
    ];

    let first = generate("package wrapper\n\n", &functions);
    let second = generate("package wrapper\n\n", &functions);
    assert_eq!(first, second);
}
