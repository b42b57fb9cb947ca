//! Line-level grammar: bindings, comments, includes, and the Line dispatch.

use crate::ast::{Binding, Line};
use crate::cursor::{attempt, Cursor};

use super::expressions;

/// Line := Binding | WhereExpr | Expression | Comment | Include
///
/// The alternatives are tried in order; `f = x where x = "y"` is a Binding
/// rather than a WhereExpr because Binding comes first.
pub(crate) fn line(cur: &mut Cursor<'_>) -> Option<Line> {
    if let Some(binding) = attempt(cur, binding) {
        return Some(Line::Binding(binding));
    }
    if let Some(expr) = attempt(cur, expressions::where_expr) {
        return Some(Line::Expr(expr));
    }
    if let Some(expr) = attempt(cur, expressions::expression) {
        return Some(Line::Expr(expr));
    }
    if let Some(comment) = attempt(cur, comment) {
        return Some(comment);
    }
    if let Some(include) = attempt(cur, include) {
        return Some(include);
    }
    None
}

/// Binding := Name "=" (WhereExpr | Expression)
pub(crate) fn binding(cur: &mut Cursor<'_>) -> Option<Binding> {
    let name = attempt(cur, expressions::name)?;

    cur.skip_whitespace();
    if !cur.eat("=") {
        return None;
    }

    let value = attempt(cur, expressions::where_expr)
        .or_else(|| attempt(cur, expressions::expression))?;

    Some(Binding { name, value })
}

/// Comment := "//" <to end of line>. An exhausted cursor is also a Comment,
/// which is what makes blank lines no-ops.
pub(crate) fn comment(cur: &mut Cursor<'_>) -> Option<Line> {
    cur.skip_whitespace();

    if cur.at_end() {
        return Some(Line::Comment);
    }

    if !cur.eat("//") {
        return None;
    }

    cur.eat_while(|c| c != '\n');

    Some(Line::Comment)
}

/// Include := "#include" String
pub(crate) fn include(cur: &mut Cursor<'_>) -> Option<Line> {
    cur.skip_whitespace();

    if !cur.eat("#include") {
        return None;
    }

    let name = attempt(cur, expressions::string)?;

    Some(Line::Include(name))
}
