//! Evaluation error types.

use std::fmt;

use serde::Serialize;

/// An error raised while simplifying an expression.
///
/// Errors unwind to the driver, which reports them as diagnostics and moves
/// on to the next line; they never terminate a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum EvalError {
    /// A name was evaluated that has no entry in the binding table.
    Undefined { name: String },
    /// The left side of an application simplified to a string but the right
    /// side did not. All three renderings are carried for the message.
    StringApply {
        application: String,
        left: String,
        right: String,
    },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined { name } => {
                write!(f, "Cannot evaluate `{name}`, it is not defined.")
            }
            Self::StringApply {
                application,
                left,
                right,
            } => write!(
                f,
                "Left side of application expression must not be a string \
                 unless right side is also a string in {application} \
                 where Left side is {left}, and Right side is {right}"
            ),
        }
    }
}

impl std::error::Error for EvalError {}
