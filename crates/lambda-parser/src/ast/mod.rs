//! The Lambda syntax tree.
//!
//! `Line` is the top-level syntactic category; `Expr` the recursive
//! expression sum. The subset of expressions that may stand on the right of
//! an application without explicit bracketing (names, strings, bracketed
//! groups) is carved out as [`SimpleExpr`], so the left-associativity
//! invariant -- the right child of an application is never itself an
//! application -- holds structurally rather than by convention.
//!
//! Trees are fully owned and never share nodes; `Clone` is the deep copy the
//! evaluator relies on. `Display` produces the stable rendering the driver
//! prints and the round-trip tests re-parse.

use std::fmt;

use serde::Serialize;

/// Names reserved by the grammar; never valid as identifiers.
pub const KEYWORDS: [&str; 3] = ["let", "in", "where"];

pub fn is_keyword(name: &str) -> bool {
    KEYWORDS.contains(&name)
}

/// One logical line of input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Line {
    /// `// ...`, or an empty line. A no-op.
    Comment,
    /// `#include "<base-name>"` -- the file base-name, without extension.
    Include(String),
    /// A top-level definition, `name = expr`.
    Binding(Binding),
    /// An expression to evaluate and print.
    Expr(Expr),
}

/// A `name = value` pair, used at top level and inside `let`/`where`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Binding {
    pub name: String,
    pub value: Expr,
}

/// An expression tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    /// A reference to a binding.
    Name(String),
    /// A string literal. Irreducible.
    String(String),
    /// A parenthesised sub-expression.
    Bracket(Box<Expr>),
    /// A single-parameter function, `param -> body`.
    Mapping { param: String, body: Box<Expr> },
    /// Curried application. The right child is structurally simple.
    Application { left: Box<Expr>, right: SimpleExpr },
    /// `let binding in body` -- the bound value is simplified eagerly.
    Let { binding: Box<Binding>, body: Box<Expr> },
    /// `body where binding` -- the bound value is substituted unsimplified.
    Where { body: Box<Expr>, binding: Box<Binding> },
}

/// The non-application atomic forms: Name, String, BracketExpr.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SimpleExpr {
    Name(String),
    String(String),
    Bracket(Box<Expr>),
}

impl Expr {
    /// Demote to a [`SimpleExpr`], wrapping anything non-atomic in a
    /// synthetic bracket so it can sit on the right of an application.
    pub fn into_simple(self) -> SimpleExpr {
        match self {
            Expr::Name(name) => SimpleExpr::Name(name),
            Expr::String(literal) => SimpleExpr::String(literal),
            Expr::Bracket(inner) => SimpleExpr::Bracket(inner),
            other => SimpleExpr::Bracket(Box::new(other)),
        }
    }
}

impl From<SimpleExpr> for Expr {
    fn from(simple: SimpleExpr) -> Self {
        match simple {
            SimpleExpr::Name(name) => Expr::Name(name),
            SimpleExpr::String(literal) => Expr::String(literal),
            SimpleExpr::Bracket(inner) => Expr::Bracket(inner),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Name(name) => f.write_str(name),
            Expr::String(literal) => write!(f, "\"{literal}\""),
            Expr::Bracket(inner) => write!(f, "({inner})"),
            Expr::Mapping { param, body } => write!(f, "{param} -> {body}"),
            Expr::Application { left, right } => write!(f, "{left} {right}"),
            Expr::Let { binding, body } => write!(f, "let {binding} in {body}"),
            Expr::Where { body, binding } => write!(f, "{body} where {binding}"),
        }
    }
}

impl fmt::Display for SimpleExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimpleExpr::Name(name) => f.write_str(name),
            SimpleExpr::String(literal) => write!(f, "\"{literal}\""),
            SimpleExpr::Bracket(inner) => write!(f, "({inner})"),
        }
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Comment => Ok(()),
            Line::Include(name) => write!(f, "#include \"{name}\""),
            Line::Binding(binding) => binding.fmt(f),
            Line::Expr(expr) => expr.fmt(f),
        }
    }
}
