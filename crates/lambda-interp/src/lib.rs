//! The interpreter driver.
//!
//! [`Interpreter`] owns a binding table and an include-set and runs the
//! read/parse/dispatch loop over a [`Host`]: read one logical line, parse
//! it as a [`lambda_parser::Line`], then install a binding, evaluate and
//! print an expression, or resolve an include. All diagnostics flow through
//! the host's error channel and never abort the session.
//!
//! [`StreamHost`] is the buffered-stream realisation of [`Host`] used for
//! files and piped input; the REPL realisation lives in `lambda-repl`.

pub mod host;
pub mod interp;

pub use host::{continuation_prefix, Host, StreamHost};
pub use interp::{IncludeSet, Interpreter};
