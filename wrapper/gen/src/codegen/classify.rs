//! Request field classification.
//!
//! A request type's nested fields are either endpoint parameters (no tags,
//! passed positionally to the endpoint helper) or body fields (tagged, sent
//! in the marshaled payload).

use wrapper_define::Field;

use super::ast::Expr;
use super::render::join_exprs;
use crate::config::GeneratorOptions;

/// Field name that is always read from the client instead of the request.
pub const APPLICATION_ID_FIELD: &str = "ApplicationID";

/// Where an endpoint argument is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndpointParam {
    /// The application identifier bound to the shared client.
    ApplicationId,
    /// A field on the request receiver, by name.
    RequestField(String),
}

impl EndpointParam {
    fn from_field(field: &Field) -> Self {
        if field.name == APPLICATION_ID_FIELD {
            EndpointParam::ApplicationId
        } else {
            EndpointParam::RequestField(field.name.clone())
        }
    }

    /// Builds the argument expression for this parameter.
    pub fn to_expr(&self, options: &GeneratorOptions) -> Expr {
        match self {
            EndpointParam::ApplicationId => {
                Expr::select(Expr::ident(&options.client_param), APPLICATION_ID_FIELD)
            }
            EndpointParam::RequestField(name) => {
                Expr::select(Expr::ident(&options.receiver), name)
            }
        }
    }
}

/// A request's nested fields, split by role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification<'a> {
    /// Untagged fields in declaration order.
    pub endpoint_params: Vec<EndpointParam>,
    /// Tagged fields in declaration order.
    pub body_fields: Vec<&'a Field>,
}

/// Splits the request's nested fields into endpoint parameters and body fields.
///
/// Order is preserved and duplicates are kept.
///
/// ## Examples
///
/// ```
/// use wrapper_define::{Field, Tag};
/// use wrapper_gen::codegen::classify::{EndpointParam, classify_fields};
///
/// let request = Field::new("r", "GetGuildMember")
///     .with_field(Field::new("GuildID", "Snowflake"))
///     .with_field(Field::new("UserID", "Snowflake"))
///     .with_field(Field::new("Reason", "string").with_tag(Tag::new("json", "-")));
///
/// let classification = classify_fields(&request);
/// assert_eq!(
///     classification.endpoint_params,
///     vec![
///         EndpointParam::RequestField("GuildID".into()),
///         EndpointParam::RequestField("UserID".into()),
///     ]
/// );
/// assert_eq!(classification.body_fields.len(), 1);
/// ```
pub fn classify_fields(request: &Field) -> Classification<'_> {
    let mut endpoint_params = Vec::new();
    let mut body_fields = Vec::new();

    for field in &request.fields {
        if field.is_tagged() {
            body_fields.push(field);
        } else {
            endpoint_params.push(EndpointParam::from_field(field));
        }
    }

    Classification {
        endpoint_params,
        body_fields,
    }
}

/// Returns the endpoint argument expressions for a request, in order.
pub fn endpoint_arguments(request: &Field, options: &GeneratorOptions) -> Vec<Expr> {
    classify_fields(request)
        .endpoint_params
        .iter()
        .map(|param| param.to_expr(options))
        .collect()
}

/// Returns the endpoint arguments as a single comma-joined list.
///
/// ## Examples
///
/// ```
/// use wrapper_define::Field;
/// use wrapper_gen::codegen::classify::endpoint_argument_list;
/// use wrapper_gen::config::GeneratorOptions;
///
/// let request = Field::new("r", "GetGlobalApplicationCommand")
///     .with_field(Field::new("ApplicationID", "Snowflake"))
///     .with_field(Field::new("CommandID", "Snowflake"));
///
/// assert_eq!(
///     endpoint_argument_list(&request, &GeneratorOptions::default()),
///     "bot.ApplicationID, r.CommandID"
/// );
/// ```
pub fn endpoint_argument_list(request: &Field, options: &GeneratorOptions) -> String {
    join_exprs(&endpoint_arguments(request, options))
}
