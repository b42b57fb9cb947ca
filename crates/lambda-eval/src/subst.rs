//! Textual substitution.
//!
//! `substitute` replaces every free occurrence of a name with a copy of the
//! replacement expression. It is deliberately not capture-avoiding: a
//! replacement whose free names collide with a binder inside the target is
//! inserted as-is. Binders shadow -- a mapping, let, or where whose
//! parameter equals the substituted name is returned unchanged.
//!
//! Brackets are transparent here: substituting into `(E)` yields the
//! substituted `E` without the brackets. The application case re-wraps
//! non-simple right children itself, which is the only place the loss of
//! brackets could violate the structural invariant.

use lambda_parser::{Binding, Expr, SimpleExpr};

/// Replace free occurrences of `name` in `expr` with `replacement`,
/// producing a fresh tree. The input is never mutated.
pub fn substitute(expr: &Expr, name: &str, replacement: &Expr) -> Expr {
    match expr {
        Expr::Name(n) => {
            if n == name {
                replacement.clone()
            } else {
                expr.clone()
            }
        }

        // Strings have no free variables.
        Expr::String(_) => expr.clone(),

        Expr::Bracket(inner) => substitute(inner, name, replacement),

        Expr::Mapping { param, body } => {
            if param == name {
                expr.clone()
            } else {
                Expr::Mapping {
                    param: param.clone(),
                    body: Box::new(substitute(body, name, replacement)),
                }
            }
        }

        Expr::Application { left, right } => Expr::Application {
            left: Box::new(substitute(left, name, replacement)),
            right: substitute_simple(right, name, replacement).into_simple(),
        },

        Expr::Let { binding, body } => {
            if binding.name == name {
                expr.clone()
            } else {
                Expr::Let {
                    binding: Box::new(substitute_binding(binding, name, replacement)),
                    body: Box::new(substitute(body, name, replacement)),
                }
            }
        }

        Expr::Where { body, binding } => {
            if binding.name == name {
                expr.clone()
            } else {
                Expr::Where {
                    body: Box::new(substitute(body, name, replacement)),
                    binding: Box::new(substitute_binding(binding, name, replacement)),
                }
            }
        }
    }
}

/// Substitute into an application's right child. The result is a full
/// expression; the caller decides whether it needs re-bracketing.
pub fn substitute_simple(simple: &SimpleExpr, name: &str, replacement: &Expr) -> Expr {
    match simple {
        SimpleExpr::Name(n) => {
            if n == name {
                replacement.clone()
            } else {
                Expr::Name(n.clone())
            }
        }
        SimpleExpr::String(literal) => Expr::String(literal.clone()),
        SimpleExpr::Bracket(inner) => substitute(inner, name, replacement),
    }
}

fn substitute_binding(binding: &Binding, name: &str, replacement: &Expr) -> Binding {
    Binding {
        name: binding.name.clone(),
        value: substitute(&binding.value, name, replacement),
    }
}
