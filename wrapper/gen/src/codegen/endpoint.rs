//! Endpoint call construction.
//!
//! Every request type has a matching endpoint helper named `Endpoint` plus
//! the request type name with its leading marker character removed. The
//! helper receives the request's endpoint parameters positionally.

use wrapper_define::Field;

use super::ast::Expr;
use super::classify::endpoint_arguments;
use crate::config::GeneratorOptions;

/// Prefix shared by all endpoint helper names.
pub const ENDPOINT_PREFIX: &str = "Endpoint";

/// Returns the endpoint helper name for a request type name.
///
/// The first character is dropped unconditionally; nothing is validated.
///
/// ## Examples
///
/// ```
/// use wrapper_gen::codegen::endpoint::endpoint_callee;
///
/// assert_eq!(endpoint_callee("*GetChannel"), "EndpointGetChannel");
/// assert_eq!(endpoint_callee("X"), "Endpoint");
/// assert_eq!(endpoint_callee(""), "Endpoint");
/// ```
pub fn endpoint_callee(request_type: &str) -> String {
    let mut chars = request_type.chars();
    chars.next();
    format!("{}{}", ENDPOINT_PREFIX, chars.as_str())
}

/// The pieces of an endpoint dispatch: helper call plus rate-limit bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointCall {
    /// Endpoint helper name.
    pub callee: String,
    /// Helper arguments in declaration order.
    pub args: Vec<Expr>,
    /// Rate-limit bucket for the dispatch. Always `None`: bucket resolution
    /// is not derived from the model yet.
    pub rate_limit_bucket: Option<Expr>,
}

impl EndpointCall {
    /// Returns the helper call expression.
    pub fn to_expr(&self) -> Expr {
        Expr::call(Expr::ident(&self.callee), self.args.clone())
    }

    /// Returns the bucket expression, falling back to the configured placeholder.
    pub fn rate_limit_expr(&self, options: &GeneratorOptions) -> Expr {
        self.rate_limit_bucket
            .clone()
            .unwrap_or_else(|| Expr::Raw(options.rate_limit_placeholder.clone()))
    }
}

/// Builds the endpoint call for a request field.
///
/// The helper name is derived from the request's pointer-decorated type name
/// (`*GetChannel` becomes `EndpointGetChannel`). A request without endpoint
/// parameters still gets a call, with no arguments.
///
/// ## Examples
///
/// ```
/// use wrapper_define::Field;
/// use wrapper_gen::codegen::endpoint::build_endpoint_call;
/// use wrapper_gen::config::GeneratorOptions;
///
/// let request = Field::new("r", "DeleteChannel")
///     .pointer()
///     .with_field(Field::new("ChannelID", "Snowflake"));
///
/// let call = build_endpoint_call(&request, &GeneratorOptions::default());
/// assert_eq!(call.to_expr().to_string(), "EndpointDeleteChannel(r.ChannelID)");
/// assert!(call.rate_limit_bucket.is_none());
/// ```
pub fn build_endpoint_call(request: &Field, options: &GeneratorOptions) -> EndpointCall {
    EndpointCall {
        callee: endpoint_callee(&request.name_with_pointer()),
        args: endpoint_arguments(request, options),
        rate_limit_bucket: None,
    }
}
