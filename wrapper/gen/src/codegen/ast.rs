//! Intermediate representation for generated wrapper methods.
//!
//! The emitter builds these nodes instead of splicing text, so the shape of a
//! generated method (which statements, which return values) can be inspected
//! directly. [`crate::codegen::render`] turns them into Go source.

/// An expression in the generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A (possibly package-qualified) identifier, e.g. `err` or `json.Marshal`.
    Ident(String),
    /// Field selection, e.g. `r.ChannelID`.
    Selector { base: Box<Expr>, field: String },
    /// A function call.
    Call { callee: Box<Expr>, args: Vec<Expr> },
    /// The `nil` literal.
    Nil,
    /// Inequality comparison, e.g. `err != nil`.
    NotEqual(Box<Expr>, Box<Expr>),
    /// Expression text taken verbatim from configuration.
    Raw(String),
}

impl Expr {
    /// A bare identifier.
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(name.into())
    }

    /// `base.field`
    pub fn select(base: Expr, field: impl Into<String>) -> Self {
        Expr::Selector {
            base: Box::new(base),
            field: field.into(),
        }
    }

    /// `callee(args...)`
    pub fn call(callee: Expr, args: Vec<Expr>) -> Self {
        Expr::Call {
            callee: Box::new(callee),
            args,
        }
    }

    /// `lhs != rhs`
    pub fn not_equal(lhs: Expr, rhs: Expr) -> Self {
        Expr::NotEqual(Box::new(lhs), Box::new(rhs))
    }

    /// Returns the callee name when this is a call to a plain identifier.
    pub fn callee_name(&self) -> Option<&str> {
        match self {
            Expr::Call { callee, .. } => match callee.as_ref() {
                Expr::Ident(name) => Some(name),
                _ => None,
            },
            _ => None,
        }
    }
}

/// A statement in a generated method body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// `var name ty`
    VarDecl { name: String, ty: String },
    /// `a, b := value`
    Define { names: Vec<String>, value: Expr },
    /// `a = value`
    Assign { names: Vec<String>, value: Expr },
    /// `if cond { ... }`
    If { cond: Expr, then: Vec<Stmt> },
    /// `return a, b`
    Return(Vec<Expr>),
}

/// A named, typed parameter (or receiver).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    /// Creates a parameter rendered as `name ty`.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// A method declaration with its doc comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    /// Doc comment lines, without comment markers.
    pub doc: Vec<String>,
    pub receiver: Param,
    pub name: String,
    pub params: Vec<Param>,
    /// Result types in order; a single entry is printed without parentheses.
    pub results: Vec<String>,
    pub body: Vec<Stmt>,
}

impl Method {
    /// Collects every return statement in the body, depth-first in source order.
    pub fn returns(&self) -> Vec<&[Expr]> {
        fn walk<'a>(stmts: &'a [Stmt], out: &mut Vec<&'a [Expr]>) {
            for stmt in stmts {
                match stmt {
                    Stmt::Return(values) => out.push(values),
                    Stmt::If { then, .. } => walk(then, out),
                    _ => {}
                }
            }
        }

        let mut out = Vec::new();
        walk(&self.body, &mut out);
        out
    }

    /// Finds the first call expression (at any statement) whose callee is `name`.
    pub fn find_call(&self, name: &str) -> Option<&Expr> {
        fn in_expr<'a>(expr: &'a Expr, name: &str) -> Option<&'a Expr> {
            if expr.callee_name() == Some(name) {
                return Some(expr);
            }
            match expr {
                Expr::Call { args, .. } => args.iter().find_map(|arg| in_expr(arg, name)),
                Expr::Selector { base, .. } => in_expr(base, name),
                Expr::NotEqual(lhs, rhs) => in_expr(lhs, name).or_else(|| in_expr(rhs, name)),
                _ => None,
            }
        }

        fn in_stmts<'a>(stmts: &'a [Stmt], name: &str) -> Option<&'a Expr> {
            stmts.iter().find_map(|stmt| match stmt {
                Stmt::Define { value, .. } | Stmt::Assign { value, .. } => in_expr(value, name),
                Stmt::If { cond, then } => in_expr(cond, name).or_else(|| in_stmts(then, name)),
                Stmt::Return(values) => values.iter().find_map(|v| in_expr(v, name)),
                Stmt::VarDecl { .. } => None,
            })
        }

        in_stmts(&self.body, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_method() -> Method {
        Method {
            doc: vec![],
            receiver: Param::new("r", "*X"),
            name: "Send".to_string(),
            params: vec![],
            results: vec!["error".to_string()],
            body: vec![
                Stmt::Define {
                    names: vec!["body".into(), "err".into()],
                    value: Expr::call(Expr::ident("json.Marshal"), vec![Expr::ident("r")]),
                },
                Stmt::If {
                    cond: Expr::not_equal(Expr::ident("err"), Expr::Nil),
                    then: vec![Stmt::Return(vec![Expr::ident("err")])],
                },
                Stmt::Assign {
                    names: vec!["err".into()],
                    value: Expr::call(
                        Expr::ident("SendRequest"),
                        vec![Expr::call(Expr::ident("EndpointX"), vec![])],
                    ),
                },
                Stmt::Return(vec![Expr::Nil]),
            ],
        }
    }

    #[test]
    fn returns_walks_nested_blocks_in_order() {
        let method = sample_method();
        let returns = method.returns();
        assert_eq!(returns.len(), 2);
        assert_eq!(returns[0], [Expr::ident("err")]);
        assert_eq!(returns[1], [Expr::Nil]);
    }

    #[test]
    fn find_call_searches_nested_arguments() {
        let method = sample_method();
        assert!(method.find_call("json.Marshal").is_some());
        assert!(method.find_call("EndpointX").is_some());
        assert!(method.find_call("Missing").is_none());
    }

    #[test]
    fn callee_name_only_for_plain_identifiers() {
        let call = Expr::call(Expr::ident("f"), vec![]);
        assert_eq!(call.callee_name(), Some("f"));

        let method_call = Expr::call(Expr::select(Expr::ident("a"), "b"), vec![]);
        assert_eq!(method_call.callee_name(), None);
        assert_eq!(Expr::Nil.callee_name(), None);
    }
}
