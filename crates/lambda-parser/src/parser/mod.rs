//! Grammar entry points.
//!
//! The grammar, with every non-terminal first skipping whitespace:
//!
//! ```text
//! Line         := Binding | WhereExpr | Expression | Comment | Include
//! Include      := "#include" String
//! Comment      := "//" <to end of line>      (empty cursor is a Comment)
//! Binding      := Name "=" (WhereExpr | Expression)
//! Expression   := LetExpr | Mapping | SimpleExpr { SimpleExpr }
//! LetExpr      := "let" Binding "in" Expression
//! WhereExpr    := Expression "where" Binding { "," Binding }
//! Mapping      := Name "->" Expression
//! SimpleExpr   := Name | String | BracketExpr
//! BracketExpr  := "(" Expression ")" | "$" Expression
//! Name         := [A-Za-z0-9_:]+             (keywords rejected)
//! String       := '"' <any char except '"'> '"'
//! ```
//!
//! The `_complete` variants parse from a string and succeed only when the
//! residue after the parse and trailing whitespace is empty; the driver uses
//! them to tell a parsed line from a syntactically partial one.

pub(crate) mod expressions;
pub(crate) mod lines;

use crate::ast::{Expr, Line};
use crate::cursor::{attempt, Cursor};

/// Parse a [`Line`], restoring the cursor on no-match.
pub fn parse_line(cur: &mut Cursor<'_>) -> Option<Line> {
    attempt(cur, lines::line)
}

/// Parse an [`Expr`], restoring the cursor on no-match.
pub fn parse_expression(cur: &mut Cursor<'_>) -> Option<Expr> {
    attempt(cur, expressions::expression)
}

/// Whole-string parse of one logical line.
pub fn parse_line_complete(src: &str) -> Option<Line> {
    parse_complete(src, lines::line)
}

/// Whole-string parse of an expression. Mostly useful in tests; the driver
/// goes through [`parse_line_complete`].
pub fn parse_expression_complete(src: &str) -> Option<Expr> {
    parse_complete(src, expressions::expression)
}

/// Run a parse function against `src` and succeed only if nothing but
/// whitespace remains afterwards.
fn parse_complete<T>(
    src: &str,
    parse: impl FnOnce(&mut Cursor<'_>) -> Option<T>,
) -> Option<T> {
    let mut cur = Cursor::new(src);
    let result = attempt(&mut cur, parse)?;
    cur.skip_whitespace();
    cur.at_end().then_some(result)
}
