//! Builds the generation model from Rust type declarations.
//!
//! Request types are ordinary structs annotated with `#[returns(...)]`, listing
//! the response types in order:
//!
//! ```ignore
//! #[returns(Box<Channel>)]
//! pub struct GetChannel {
//!     pub ChannelID: Snowflake,
//! }
//!
//! #[returns(Box<Message>, Box<Thread>)]
//! pub struct CreateMessage {
//!     pub ChannelID: Snowflake,
//!     #[json("content,omitempty")]
//!     pub Content: String,
//! }
//! ```
//!
//! ## Mapping
//!
//! - Each annotated struct becomes one [`Function`], in declaration order.
//!   Structs without `#[returns]` are ignored. Inline `mod` blocks are
//!   searched in place; out-of-line `mod name;` declarations are skipped.
//! - The struct itself is the request field: name and type are the struct
//!   name, and it is always a pointer (the generated receiver).
//! - Struct fields become the request's nested fields. Every attribute other
//!   than a doc comment or a built-in Rust attribute (`allow`, `cfg`,
//!   `deprecated`, ...) is a tag: `#[json("content")]` is `json:"content"`.
//! - `Box<T>`, `&T` and raw pointers mark the type as a pointer; `a::b::T`
//!   is type `T` in package `b`; other types keep their token text.

use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::punctuated::Punctuated;
use syn::{GenericArgument, Item, ItemStruct, Meta, PathArguments, Token, Type};
use tracing::{debug, info, warn};
use wrapper_define::{Field, Function, Tag};

use crate::errors::GeneratorError;

/// Attribute naming a request's response types.
pub const RETURNS_ATTR: &str = "returns";

/// Name given to response fields.
const RESPONSE_FIELD_NAME: &str = "result";

/// Field attributes that belong to the compiler, never tags.
const NON_TAG_ATTRS: &[&str] = &[
    "doc",
    "allow",
    "warn",
    "deny",
    "forbid",
    "expect",
    "cfg",
    "cfg_attr",
    "deprecated",
];

/// Parses Rust source and returns one function per `#[returns]` struct.
///
/// ## Errors
///
/// Returns `GeneratorError::ParseError` if the source is not valid Rust,
/// if a `#[returns]` attribute is malformed, or if it lists no types.
///
/// ## Examples
///
/// ```
/// use wrapper_gen::loader::load_functions;
///
/// let functions = load_functions(r#"
///     #[returns(Box<Channel>)]
///     struct GetChannel {
///         ChannelID: Snowflake,
///     }
///
///     struct Channel {
///         #[json("id")]
///         ID: Snowflake,
///     }
/// "#).unwrap();
///
/// assert_eq!(functions.len(), 1);
/// assert_eq!(functions[0].from.name_with_pointer(), "*GetChannel");
/// assert_eq!(functions[0].to[0].full_name_with_pointer(), "*Channel");
/// ```
pub fn load_functions(source: &str) -> Result<Vec<Function>, GeneratorError> {
    let file = syn::parse_file(source).map_err(|e| GeneratorError::ParseError(e.to_string()))?;

    let mut functions = Vec::new();
    collect_functions(&file.items, &mut functions)?;

    info!(functions = functions.len(), "loaded declarations");
    Ok(functions)
}

fn collect_functions(
    items: &[Item],
    functions: &mut Vec<Function>,
) -> Result<(), GeneratorError> {
    for item in items {
        match item {
            Item::Struct(item) => {
                if let Some(function) = function_from_struct(item)? {
                    debug!(
                        request = %item.ident,
                        responses = function.to.len(),
                        "loaded request type"
                    );
                    functions.push(function);
                }
            }
            Item::Mod(module) => match &module.content {
                Some((_, items)) => collect_functions(items, functions)?,
                None => warn!(module = %module.ident, "skipping out-of-line module"),
            },
            _ => {}
        }
    }
    Ok(())
}

fn function_from_struct(item: &ItemStruct) -> Result<Option<Function>, GeneratorError> {
    let mut to = Vec::new();
    let mut annotated = false;

    for attr in item.attrs.iter().filter(|a| a.path().is_ident(RETURNS_ATTR)) {
        annotated = true;
        let types = attr
            .parse_args_with(Punctuated::<Type, Token![,]>::parse_terminated)
            .map_err(|e| {
                GeneratorError::ParseError(format!(
                    "invalid #[{}] on `{}`: {}",
                    RETURNS_ATTR, item.ident, e
                ))
            })?;
        to.extend(types.iter().map(|ty| type_field(RESPONSE_FIELD_NAME, ty)));
    }

    if !annotated {
        return Ok(None);
    }
    if to.is_empty() {
        return Err(GeneratorError::ParseError(format!(
            "#[{}] on `{}` lists no response types",
            RETURNS_ATTR, item.ident
        )));
    }

    let name = item.ident.to_string();
    let mut from = Field::new(name.clone(), name).pointer();
    for (index, member) in item.fields.iter().enumerate() {
        let name = member
            .ident
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| index.to_string());
        let mut field = type_field(&name, &member.ty);
        field.tags = member
            .attrs
            .iter()
            .filter(|a| !is_compiler_attr(a))
            .map(|a| attr_tag(&a.meta))
            .collect();
        from.fields.push(field);
    }

    Ok(Some(Function { from, to }))
}

fn is_compiler_attr(attr: &syn::Attribute) -> bool {
    NON_TAG_ATTRS.iter().any(|name| attr.path().is_ident(name))
}

/// Converts a field attribute into a tag.
fn attr_tag(meta: &Meta) -> Tag {
    let key = meta
        .path()
        .segments
        .iter()
        .map(|s| s.ident.to_string())
        .collect::<Vec<_>>()
        .join("::");

    let value = match meta {
        Meta::Path(_) => String::new(),
        Meta::List(list) => match syn::parse2::<syn::LitStr>(list.tokens.clone()) {
            Ok(lit) => lit.value(),
            Err(_) => list.tokens.to_string(),
        },
        Meta::NameValue(nv) => match &nv.value {
            syn::Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Str(lit),
                ..
            }) => lit.value(),
            other => other.to_token_stream().to_string(),
        },
    };

    Tag::new(key, value)
}

/// Describes a Rust type as a field.
fn type_field(name: &str, ty: &Type) -> Field {
    match ty {
        Type::Reference(reference) => type_field(name, &reference.elem).pointer(),
        Type::Ptr(ptr) => type_field(name, &ptr.elem).pointer(),
        Type::Paren(paren) => type_field(name, &paren.elem),
        Type::Group(group) => type_field(name, &group.elem),
        Type::Path(path) if path.qself.is_none() => {
            if let Some(inner) = boxed_type(&path.path) {
                return type_field(name, inner).pointer();
            }

            let segments: Vec<_> = path.path.segments.iter().collect();
            match segments.as_slice() {
                [.., package, last] if last.arguments.is_empty() => {
                    Field::new(name, last.ident.to_string()).in_package(package.ident.to_string())
                }
                [last] if last.arguments.is_empty() => Field::new(name, last.ident.to_string()),
                _ => Field::new(name, type_text(&ty.to_token_stream())),
            }
        }
        other => Field::new(name, type_text(&other.to_token_stream())),
    }
}

/// Returns `T` for `Box<T>`.
fn boxed_type(path: &syn::Path) -> Option<&Type> {
    let last = path.segments.last()?;
    if last.ident != "Box" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &last.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(ty) => Some(ty),
        _ => None,
    }
}

/// Renders tokens compactly: spaces survive only between two word characters.
fn type_text(tokens: &TokenStream) -> String {
    let text = tokens.to_string();
    let chars: Vec<char> = text.chars().collect();
    let is_word = |c: char| c.is_alphanumeric() || c == '_';

    let mut out = String::with_capacity(text.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == ' ' {
            let prev = out.chars().next_back();
            let next = chars.get(i + 1).copied();
            if let (Some(prev), Some(next)) = (prev, next)
                && is_word(prev)
                && is_word(next)
            {
                out.push(' ');
            }
            continue;
        }
        out.push(c);
    }
    out
}
