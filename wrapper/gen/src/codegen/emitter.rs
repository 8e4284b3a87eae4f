//! Wrapper method emission.
//!
//! Each [`Function`] becomes one method on its request type that marshals
//! the receiver, dispatches it through the shared send primitive, and
//! returns. Only the three return statements depend on the function's
//! [`Arity`]:
//!
//! | arity    | marshal / dispatch error | success              | results       |
//! |----------|--------------------------|----------------------|---------------|
//! | single   | `return err`             | `return nil`         | `error`       |
//! | multiple | `return nil, err`        | `return result, nil` | `(*T, error)` |

use tracing::{debug, warn};
use wrapper_define::{Arity, Function};

use super::ast::{Expr, Method, Param, Stmt};
use super::endpoint::build_endpoint_call;
use super::render::Emit;
use crate::config::GeneratorOptions;

const RESULT_VAR: &str = "result";
const BODY_VAR: &str = "body";
const ERR_VAR: &str = "err";

/// Result type used when a function declares no responses.
const FALLBACK_RESULT_TYPE: &str = "any";

/// Builds the IR for one wrapper method.
///
/// ## Examples
///
/// ```
/// use wrapper_define::{Field, Function};
/// use wrapper_gen::codegen::ast::{Expr, Stmt};
/// use wrapper_gen::codegen::build_method;
/// use wrapper_gen::config::GeneratorOptions;
///
/// let function = Function::new(
///     Field::new("r", "GetChannel").pointer().with_field(Field::new("ChannelID", "Snowflake")),
///     Field::new("result", "Channel").pointer(),
/// );
///
/// let method = build_method(&function, &GeneratorOptions::default());
/// assert_eq!(method.results, vec!["error".to_string()]);
/// assert_eq!(method.body.last(), Some(&Stmt::Return(vec![Expr::Nil])));
/// ```
pub fn build_method(function: &Function, options: &GeneratorOptions) -> Method {
    let arity = function.arity();
    let result_type = result_type(function);
    let endpoint = build_endpoint_call(&function.from, options);

    debug!(
        request = %function.from.type_name,
        %arity,
        endpoint_params = endpoint.args.len(),
        "building wrapper method"
    );

    let client_handle = Expr::select(Expr::ident(&options.client_param), &options.client_field);
    let dispatch = Expr::call(
        Expr::ident(&options.dispatch_fn),
        vec![
            Expr::ident(RESULT_VAR),
            client_handle,
            endpoint.rate_limit_expr(options),
            endpoint.to_expr(),
            Expr::ident(BODY_VAR),
        ],
    );

    let body = vec![
        Stmt::VarDecl {
            name: RESULT_VAR.to_string(),
            ty: result_type.clone(),
        },
        Stmt::Define {
            names: vec![BODY_VAR.to_string(), ERR_VAR.to_string()],
            value: Expr::call(
                Expr::ident(&options.marshal_fn),
                vec![Expr::ident(&options.receiver)],
            ),
        },
        error_check(arity),
        Stmt::Assign {
            names: vec![ERR_VAR.to_string()],
            value: dispatch,
        },
        error_check(arity),
        success_return(arity),
    ];

    Method {
        doc: doc_lines(function, options),
        receiver: Param::new(&options.receiver, function.from.full_name_with_pointer()),
        name: options.method_name.clone(),
        params: vec![Param::new(&options.client_param, &options.client_type)],
        results: result_types(arity, &result_type),
        body,
    }
}

/// Emits the Go source for one wrapper method.
///
/// The returned text ends with the method's closing brace and a newline.
pub fn emit_function(function: &Function, options: &GeneratorOptions) -> String {
    build_method(function, options).to_source()
}

/// Returns the type of the result variable: the first response, pointer-decorated.
fn result_type(function: &Function) -> String {
    match function.primary_response() {
        Some(response) => response.full_name_with_pointer(),
        None => {
            warn!(
                request = %function.from.type_name,
                "function declares no response types"
            );
            FALLBACK_RESULT_TYPE.to_string()
        }
    }
}

fn result_types(arity: Arity, result_type: &str) -> Vec<String> {
    match arity {
        Arity::Single => vec!["error".to_string()],
        Arity::Multiple => vec![result_type.to_string(), "error".to_string()],
    }
}

/// `if err != nil { <arity error return> }`
fn error_check(arity: Arity) -> Stmt {
    Stmt::If {
        cond: Expr::not_equal(Expr::ident(ERR_VAR), Expr::Nil),
        then: vec![error_return(arity)],
    }
}

fn error_return(arity: Arity) -> Stmt {
    match arity {
        Arity::Single => Stmt::Return(vec![Expr::ident(ERR_VAR)]),
        Arity::Multiple => Stmt::Return(vec![Expr::Nil, Expr::ident(ERR_VAR)]),
    }
}

fn success_return(arity: Arity) -> Stmt {
    match arity {
        Arity::Single => Stmt::Return(vec![Expr::Nil]),
        Arity::Multiple => Stmt::Return(vec![Expr::ident(RESULT_VAR), Expr::Nil]),
    }
}

fn doc_lines(function: &Function, options: &GeneratorOptions) -> Vec<String> {
    let request = &function.from.type_name;
    let summary = if function.to.is_empty() {
        format!(
            "{} sends a {} request to {}.",
            options.method_name, request, options.service_name
        )
    } else {
        let responses = function
            .to
            .iter()
            .map(|f| f.full_name())
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "{} sends a {} request to {} and returns a {}.",
            options.method_name, request, options.service_name, responses
        )
    };
    vec![summary]
}
