//! Expression grammar.
//!
//! Application is the subtle production. `Expression` parses one
//! `SimpleExpr` and then optionally another `Expression`; when the optional
//! parse produces something, the leading atom is pushed down the leftmost
//! spine of it by [`left_append`], so `a b c` groups as `((a b) c)` even
//! though the recursion is right-leaning.

use crate::ast::{is_keyword, Expr, SimpleExpr};
use crate::cursor::{attempt, Cursor};

use super::lines;

/// Expression := LetExpr | Mapping | SimpleExpr { SimpleExpr }
pub(crate) fn expression(cur: &mut Cursor<'_>) -> Option<Expr> {
    if let Some(let_expr) = attempt(cur, let_expr) {
        return Some(let_expr);
    }
    if let Some(mapping) = attempt(cur, mapping) {
        return Some(mapping);
    }

    let first = attempt(cur, simple_expr)?;
    Some(match attempt(cur, expression) {
        Some(rest) => left_append(first, rest),
        None => first.into(),
    })
}

/// Install `leftmost` as the innermost left atom of `expr`.
///
/// Walks the leftmost spine: an application recurses into its left child; a
/// simple form combines directly; anything else (a mapping, a let) is
/// wrapped in a synthetic bracket so the right child of the new application
/// stays structurally simple.
fn left_append(leftmost: SimpleExpr, expr: Expr) -> Expr {
    match expr {
        Expr::Application { left, right } => Expr::Application {
            left: Box::new(left_append(leftmost, *left)),
            right,
        },
        other => Expr::Application {
            left: Box::new(leftmost.into()),
            right: other.into_simple(),
        },
    }
}

/// LetExpr := "let" Binding "in" Expression
pub(crate) fn let_expr(cur: &mut Cursor<'_>) -> Option<Expr> {
    cur.skip_whitespace();
    if !cur.eat("let") {
        return None;
    }

    let binding = attempt(cur, lines::binding)?;

    cur.skip_whitespace();
    if !cur.eat("in") {
        return None;
    }

    let body = attempt(cur, expression)?;

    Some(Expr::Let {
        binding: Box::new(binding),
        body: Box::new(body),
    })
}

/// WhereExpr := Expression "where" Binding { "," Binding }
///
/// Each successive binding wraps the prior result, so `E where b1, b2`
/// desugars to `(E where b1) where b2`.
pub(crate) fn where_expr(cur: &mut Cursor<'_>) -> Option<Expr> {
    let mut expr = attempt(cur, expression)?;

    cur.skip_whitespace();
    if !cur.eat("where") {
        return None;
    }

    loop {
        let binding = attempt(cur, lines::binding)?;

        expr = Expr::Where {
            body: Box::new(expr),
            binding: Box::new(binding),
        };

        cur.skip_whitespace();
        if !cur.eat(",") {
            break;
        }
    }

    Some(expr)
}

/// Mapping := Name "->" Expression
///
/// Right-associative through the recursion into `Expression`.
pub(crate) fn mapping(cur: &mut Cursor<'_>) -> Option<Expr> {
    let param = attempt(cur, name)?;

    cur.skip_whitespace();
    if !cur.eat("->") {
        return None;
    }

    let body = attempt(cur, expression)?;

    Some(Expr::Mapping {
        param,
        body: Box::new(body),
    })
}

/// SimpleExpr := Name | String | BracketExpr
pub(crate) fn simple_expr(cur: &mut Cursor<'_>) -> Option<SimpleExpr> {
    if let Some(name) = attempt(cur, name) {
        return Some(SimpleExpr::Name(name));
    }
    if let Some(literal) = attempt(cur, string) {
        return Some(SimpleExpr::String(literal));
    }
    if let Some(inner) = attempt(cur, bracket_expr) {
        return Some(SimpleExpr::Bracket(Box::new(inner)));
    }
    None
}

/// BracketExpr := "(" Expression ")" | "$" Expression
///
/// Returns the inner expression; callers decide how to wrap it. The `$`
/// form consumes the whole expression tail with no closing delimiter.
pub(crate) fn bracket_expr(cur: &mut Cursor<'_>) -> Option<Expr> {
    cur.skip_whitespace();

    if cur.eat("$") {
        return attempt(cur, expression);
    }

    if !cur.eat("(") {
        return None;
    }

    let inner = attempt(cur, expression)?;

    cur.skip_whitespace();
    if !cur.eat(")") {
        return None;
    }

    Some(inner)
}

/// Name := [A-Za-z0-9_:]+, rejected when it equals a keyword.
pub(crate) fn name(cur: &mut Cursor<'_>) -> Option<String> {
    cur.skip_whitespace();

    let ident = cur.eat_while(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':');
    if ident.is_empty() || is_keyword(ident) {
        return None;
    }

    Some(ident.to_string())
}

/// String := '"' <any char except '"'> '"'. No escape handling.
pub(crate) fn string(cur: &mut Cursor<'_>) -> Option<String> {
    cur.skip_whitespace();

    if !cur.eat("\"") {
        return None;
    }

    let literal = cur.eat_while(|c| c != '"').to_string();

    // Unterminated literal: the loop above ran to end of input.
    if !cur.eat("\"") {
        return None;
    }

    Some(literal)
}
