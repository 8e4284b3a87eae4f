//! Go source rendering for the wrapper IR.
//!
//! Output follows `gofmt` layout: tab indentation, `//` doc comments directly
//! above the declaration, and a single unparenthesized result when a method
//! returns one value.

use std::fmt;

use super::ast::{Expr, Method, Param, Stmt};

/// Line-oriented writer that tracks indentation depth.
#[derive(Debug, Default)]
pub struct Printer {
    out: String,
    depth: usize,
}

impl Printer {
    /// Writes one line at the current depth. Empty lines get no indentation.
    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.out.push('\t');
            }
            self.out.push_str(text);
        }
        self.out.push('\n');
    }

    /// Runs `f` one level deeper.
    pub fn indented(&mut self, f: impl FnOnce(&mut Self)) {
        self.depth += 1;
        f(self);
        self.depth -= 1;
    }

    /// Returns the accumulated source.
    pub fn finish(self) -> String {
        self.out
    }
}

/// Types that can be written as Go source.
pub trait Emit {
    /// Writes `self` to the printer at its current depth.
    fn emit(&self, printer: &mut Printer);

    fn to_source(&self) -> String {
        let mut printer = Printer::default();
        self.emit(&mut printer);
        printer.finish()
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Ident(name) | Expr::Raw(name) => f.write_str(name),
            Expr::Selector { base, field } => write!(f, "{}.{}", base, field),
            Expr::Call { callee, args } => write!(f, "{}({})", callee, join_exprs(args)),
            Expr::Nil => f.write_str("nil"),
            Expr::NotEqual(lhs, rhs) => write!(f, "{} != {}", lhs, rhs),
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.ty)
    }
}

/// Joins expressions with `", "`.
pub fn join_exprs(exprs: &[Expr]) -> String {
    exprs
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl Emit for Stmt {
    fn emit(&self, printer: &mut Printer) {
        match self {
            Stmt::VarDecl { name, ty } => printer.line(format!("var {} {}", name, ty)),
            Stmt::Define { names, value } => {
                printer.line(format!("{} := {}", names.join(", "), value))
            }
            Stmt::Assign { names, value } => {
                printer.line(format!("{} = {}", names.join(", "), value))
            }
            Stmt::If { cond, then } => {
                printer.line(format!("if {} {{", cond));
                printer.indented(|p| then.iter().for_each(|stmt| stmt.emit(p)));
                printer.line("}");
            }
            Stmt::Return(values) if values.is_empty() => printer.line("return"),
            Stmt::Return(values) => printer.line(format!("return {}", join_exprs(values))),
        }
    }
}

impl Emit for Method {
    fn emit(&self, printer: &mut Printer) {
        for doc in &self.doc {
            if doc.is_empty() {
                printer.line("//");
            } else {
                printer.line(format!("// {}", doc));
            }
        }

        let params = self
            .params
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let results = match self.results.as_slice() {
            [] => String::new(),
            [single] => format!(" {}", single),
            many => format!(" ({})", many.join(", ")),
        };

        printer.line(format!(
            "func ({}) {}({}){} {{",
            self.receiver, self.name, params, results
        ));
        printer.indented(|p| self.body.iter().for_each(|stmt| stmt.emit(p)));
        printer.line("}");
    }
}
