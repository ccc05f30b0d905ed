//! Missive (string) and letter (char) literal scanning.
//!
//! Both literal forms share the escape set `\n \t \\ \" \'`. Inside a missive an unknown escape keeps its backslash;
//! inside a letter it is an error. A missive may not run into a `;` or the end of input before its closing quote.

use super::cursor::{Cursor, Scanned};
use super::tokens::TokenKind;
use crate::diagnostics::errors;
use crate::span::{Position, Span};

/// Result of resolving one escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeResult {
    /// A recognized escape and the character it stands for.
    Char(char),
    /// An escape that is not part of the language.
    Unknown(char),
}

/// Resolve the character following a backslash.
pub fn resolve_escape(c: char) -> EscapeResult {
    match c {
        'n' => EscapeResult::Char('\n'),
        't' => EscapeResult::Char('\t'),
        '\\' => EscapeResult::Char('\\'),
        '"' => EscapeResult::Char('"'),
        '\'' => EscapeResult::Char('\''),
        other => EscapeResult::Unknown(other),
    }
}

/// Scan a missive literal starting at its opening `"`.
pub fn scan_missive(cur: Cursor<'_>) -> Scanned<'_> {
    let start = cur.pos();
    let mut value = String::new();
    let Some(mut cur) = cur.eat('"') else {
        return unclosed_missive(start, cur);
    };

    loop {
        match cur.bump() {
            None | Some((';', _)) => return unclosed_missive(start, cur),
            Some(('"', next)) => return Scanned::token(TokenKind::MissiveLit(value), next),
            Some(('\\', next)) => match next.bump() {
                None => return unclosed_missive(start, next),
                Some((e, after)) => {
                    match resolve_escape(e) {
                        EscapeResult::Char(c) => value.push(c),
                        EscapeResult::Unknown(c) => {
                            value.push('\\');
                            value.push(c);
                        }
                    }
                    cur = after;
                }
            },
            Some((c, next)) => {
                value.push(c);
                cur = next;
            }
        }
    }
}

fn unclosed_missive(start: Position, at: Cursor<'_>) -> Scanned<'_> {
    Scanned::error(errors::unclosed_literal("closing '\"'", at.span_from(start)), at)
}

/// Scan a letter literal starting at its opening `'`.
pub fn scan_letter(cur: Cursor<'_>) -> Scanned<'_> {
    let start = cur.pos();
    let Some(body) = cur.eat('\'') else {
        return unclosed_letter(start, cur);
    };

    match body.bump() {
        None => unclosed_letter(start, body),
        Some(('\'', after)) => Scanned::error(errors::empty_letter(after.span_from(start)), after),
        Some(('\\', next)) => match next.bump() {
            None => unclosed_letter(start, next),
            Some((e, after)) => match resolve_escape(e) {
                EscapeResult::Char(c) => close_letter(start, c, after),
                EscapeResult::Unknown(c) => {
                    let rest = after.eat('\'').unwrap_or(after);
                    let span = Span::new(body.pos(), after.pos());
                    Scanned::error(errors::unknown_escape(c, span), rest)
                }
            },
        },
        Some((c, after)) => close_letter(start, c, after),
    }
}

fn close_letter(start: Position, value: char, cur: Cursor<'_>) -> Scanned<'_> {
    match cur.eat('\'') {
        Some(rest) => Scanned::token(TokenKind::LetterLit(value), rest),
        None => unclosed_letter(start, cur),
    }
}

fn unclosed_letter(start: Position, at: Cursor<'_>) -> Scanned<'_> {
    Scanned::error(errors::unclosed_literal("closing \"'\"", at.span_from(start)), at)
}
