//! The advancing cursor over a source line, and the backtracking wrapper.
//!
//! All grammar functions take a `&mut Cursor` and return `Option`. The
//! contract is one-sided: a function may consume input before discovering it
//! cannot match, so every call to a sub-parser goes through [`attempt`],
//! which snapshots the position and restores it on no-match. After the
//! wrapper, no-match is guaranteed to leave the cursor byte-for-byte where
//! it started.

/// A position within a single line of source text.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    /// Byte offset from the start of the source.
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// The unconsumed remainder of the source.
    pub fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    /// Consume `literal` if the remaining input starts with it.
    ///
    /// This is a plain prefix match with no word-boundary check; keyword
    /// recognition relies on the greedy name rule instead.
    pub fn eat(&mut self, literal: &str) -> bool {
        if self.rest().starts_with(literal) {
            self.pos += literal.len();
            true
        } else {
            false
        }
    }

    /// Consume the longest prefix whose characters satisfy `pred` and
    /// return it.
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) -> &'a str {
        let rest = self.rest();
        let len = rest
            .find(|c: char| !pred(c))
            .unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    /// Skip ASCII whitespace: space, tab, CR, LF, vertical tab.
    ///
    /// Every non-terminal starts with this; there is no other lexical layer.
    pub fn skip_whitespace(&mut self) {
        self.eat_while(|c| matches!(c, ' ' | '\t' | '\r' | '\n' | '\x0B'));
    }
}

/// Run `parse` against the cursor, restoring the position on no-match.
pub fn attempt<'a, T>(
    cur: &mut Cursor<'a>,
    parse: impl FnOnce(&mut Cursor<'a>) -> Option<T>,
) -> Option<T> {
    let saved = cur.pos;
    let result = parse(cur);
    if result.is_none() {
        cur.pos = saved;
    }
    result
}
