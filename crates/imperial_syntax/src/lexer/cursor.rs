//! A `Copy` scanning cursor.
//!
//! Scanning functions take a [`Cursor`] by value and hand back the cursor past what they consumed, so every scanner
//! is a pure function of its input and can be tested on its own.

use crate::diagnostics::Diagnostic;
use crate::lexer::tokens::TokenKind;
use crate::span::{Position, Span};

/// A position inside a source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    text: &'a str,
    pos: Position,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: Position::default(),
        }
    }

    pub fn pos(&self) -> Position {
        self.pos
    }

    /// Unconsumed text.
    pub fn rest(&self) -> &'a str {
        self.text.get(self.pos.offset..).unwrap_or("")
    }

    pub fn is_eof(&self) -> bool {
        self.rest().is_empty()
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consume one character.
    pub fn bump(self) -> Option<(char, Self)> {
        let c = self.peek()?;
        Some((
            c,
            Self {
                text: self.text,
                pos: self.pos.advance(c),
            },
        ))
    }

    /// Consume `expected` if it is next.
    pub fn eat(self, expected: char) -> Option<Self> {
        match self.bump() {
            Some((c, next)) if c == expected => Some(next),
            _ => None,
        }
    }

    /// Consume characters while `pred` holds; return the consumed slice and the cursor after it.
    pub fn eat_while(self, pred: impl Fn(char) -> bool) -> (&'a str, Self) {
        let mut cur = self;
        while let Some((c, next)) = cur.bump() {
            if !pred(c) {
                break;
            }
            cur = next;
        }
        (cur.slice_from(self.pos), cur)
    }

    /// Consume the prefix `s` of the remaining text. `s` must be a prefix of [`Cursor::rest`].
    pub fn advance_over(self, s: &str) -> Self {
        let pos = s.chars().fold(self.pos, Position::advance);
        Self { text: self.text, pos }
    }

    /// Consume everything that is left.
    pub fn to_end(self) -> Self {
        self.advance_over(self.rest())
    }

    /// Text between `start` and the cursor.
    pub fn slice_from(&self, start: Position) -> &'a str {
        self.text.get(start.offset..self.pos.offset).unwrap_or("")
    }

    pub fn span_from(&self, start: Position) -> Span {
        Span::new(start, self.pos)
    }
}

/// Outcome of one scanning function: a token kind or a diagnostic, plus the cursor after the consumed text.
#[derive(Debug)]
pub struct Scanned<'a> {
    pub result: Result<TokenKind, Diagnostic>,
    pub rest: Cursor<'a>,
}

impl<'a> Scanned<'a> {
    pub fn token(kind: TokenKind, rest: Cursor<'a>) -> Self {
        Self { result: Ok(kind), rest }
    }

    pub fn error(diagnostic: Diagnostic, rest: Cursor<'a>) -> Self {
        Self {
            result: Err(diagnostic),
            rest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bump_threads_position() {
        let cur = Cursor::new("a\nb");
        let (a, cur) = cur.bump().unwrap();
        let (nl, cur) = cur.bump().unwrap();
        assert_eq!((a, nl), ('a', '\n'));
        assert_eq!(cur.pos(), Position::new(2, 1, 0));
        assert_eq!(cur.peek(), Some('b'));
    }

    #[test]
    fn copied_cursor_is_unchanged() {
        let cur = Cursor::new("xyz");
        let (_, after) = cur.eat_while(|c| c != 'z');
        assert_eq!(cur.peek(), Some('x'));
        assert_eq!(after.peek(), Some('z'));
        assert_eq!(after.slice_from(cur.pos()), "xy");
    }

    #[test]
    fn eat_only_matches_expected() {
        let cur = Cursor::new("+=");
        assert!(cur.eat('-').is_none());
        let after = cur.eat('+').unwrap();
        assert_eq!(after.peek(), Some('='));
    }

    #[test]
    fn to_end_consumes_everything() {
        let cur = Cursor::new("ab\ncd").to_end();
        assert!(cur.is_eof());
        assert_eq!(cur.pos(), Position::new(5, 1, 2));
        assert_eq!(cur.bump(), None);
    }
}
