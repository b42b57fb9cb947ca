//! Normal-order simplification.
//!
//! `simplify` reduces toward weak head normal form: strings and mappings
//! are normal forms, names resolve through the binding table, brackets
//! dissolve, `let` is eager, `where` is lazy, and application reduces its
//! left side first. A mapping on the left β-reduces with the *unsimplified*
//! argument; a string on the left concatenates with a string on the right;
//! anything else on the left wins outright and the argument is discarded.

use lambda_parser::{Expr, SimpleExpr};

use crate::error::EvalError;
use crate::subst::substitute;
use crate::BindingTable;

/// Simplify `expr` under `bindings`, producing a fresh tree.
pub fn simplify(expr: &Expr, bindings: &BindingTable) -> Result<Expr, EvalError> {
    match expr {
        Expr::Name(name) => match bindings.get(name) {
            Some(bound) => simplify(bound, bindings),
            None => Err(EvalError::Undefined { name: name.clone() }),
        },

        // Normal forms.
        Expr::String(_) | Expr::Mapping { .. } => Ok(expr.clone()),

        Expr::Bracket(inner) => simplify(inner, bindings),

        // Eager: the bound value is simplified once, up front.
        Expr::Let { binding, body } => {
            let value = simplify(&binding.value, bindings)?;
            simplify(&substitute(body, &binding.name, &value), bindings)
        }

        // Lazy: the bound value goes in unsimplified and is re-reduced at
        // every use site.
        Expr::Where { body, binding } => {
            simplify(&substitute(body, &binding.name, &binding.value), bindings)
        }

        Expr::Application { left, right } => {
            let left = simplify(left, bindings)?;

            match left {
                Expr::Mapping { param, body } => {
                    let argument = Expr::from(right.clone());
                    simplify(&substitute(&body, &param, &argument), bindings)
                }

                Expr::String(left_str) => {
                    let right = simplify_simple(right, bindings)?;
                    match right {
                        Expr::String(right_str) => {
                            Ok(Expr::String(format!("{left_str}{right_str}")))
                        }
                        other => Err(EvalError::StringApply {
                            application: expr.to_string(),
                            left: Expr::String(left_str).to_string(),
                            right: other.to_string(),
                        }),
                    }
                }

                // Residual left side: keep it, drop the argument.
                other => Ok(other),
            }
        }
    }
}

/// Simplify an application's right child.
pub fn simplify_simple(
    simple: &SimpleExpr,
    bindings: &BindingTable,
) -> Result<Expr, EvalError> {
    match simple {
        SimpleExpr::Name(name) => match bindings.get(name) {
            Some(bound) => simplify(bound, bindings),
            None => Err(EvalError::Undefined { name: name.clone() }),
        },
        SimpleExpr::String(literal) => Ok(Expr::String(literal.clone())),
        SimpleExpr::Bracket(inner) => simplify(inner, bindings),
    }
}
