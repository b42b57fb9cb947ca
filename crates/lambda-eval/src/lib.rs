//! Evaluator for the Lambda language.
//!
//! Two pure operations over [`lambda_parser::Expr`] trees:
//!
//! - [`substitute`]: textual, non-capture-avoiding replacement of a free
//!   name by an expression. Always produces a fresh tree.
//! - [`simplify`]: normal-order reduction toward weak head normal form
//!   under a [`BindingTable`].
//!
//! There is deliberately no α-renaming and no thunking; `where`-bound
//! values are re-substituted on every use. Reduction depth is unbounded --
//! a non-terminating program exhausts the stack rather than hitting a
//! configured ceiling.

pub mod error;
pub mod simplify;
pub mod subst;

use lambda_parser::Expr;
use rustc_hash::FxHashMap;

pub use error::EvalError;
pub use simplify::{simplify, simplify_simple};
pub use subst::{substitute, substitute_simple};

/// The top-level environment: identifier to defining expression.
/// Logically unordered; insertion order carries no meaning.
pub type BindingTable = FxHashMap<String, Expr>;
