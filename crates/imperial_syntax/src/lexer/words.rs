//! Identifier and keyword scanning.
//!
//! Identifiers start with a lowercase letter. Keywords start with an uppercase letter and are recognized one letter at
//! a time: each partial spelling is a state, and a letter with no transition makes the whole alphabetic run an
//! illegal keyword.

use imperial_core::lang::keywords;
use imperial_core::lang::limits::MAX_IDENTIFIER_LEN;

use super::cursor::{Cursor, Scanned};
use super::tokens::TokenKind;
use crate::diagnostics::errors;
use crate::span::Position;

/// Check if a character can start an identifier.
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_lowercase()
}

/// Check if a character can continue an identifier.
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Scan an identifier. Identifiers longer than the limit are reported and produce no token.
pub fn scan_identifier(cur: Cursor<'_>) -> Scanned<'_> {
    let start = cur.pos();
    let (name, rest) = cur.eat_while(is_ident_continue);

    if name.chars().count() > MAX_IDENTIFIER_LEN {
        return Scanned::error(errors::identifier_too_long(name, rest.span_from(start)), rest);
    }
    Scanned::token(TokenKind::Ident(name.to_string()), rest)
}

/// Walk a keyword letter by letter.
///
/// The walk stops at the first non-letter. A letter that cannot extend the current prefix consumes the rest of the
/// alphabetic run, which is reported as a single illegal keyword. A run that stops on an incomplete spelling is
/// illegal too.
pub fn scan_keyword(cur: Cursor<'_>) -> Scanned<'_> {
    let start = cur.pos();
    let mut walk = cur;

    while let Some((c, next)) = walk.bump() {
        if !c.is_ascii_alphabetic() {
            break;
        }
        if !keywords::continues(next.slice_from(start)) {
            let (_, rest) = next.eat_while(|c| c.is_ascii_alphabetic());
            return illegal(start, rest);
        }
        walk = next;
    }

    match keywords::from_str(walk.slice_from(start)) {
        Some(id) => Scanned::token(TokenKind::Keyword(id), walk),
        None => illegal(start, walk),
    }
}

fn illegal(start: Position, rest: Cursor<'_>) -> Scanned<'_> {
    let text = rest.slice_from(start);
    Scanned::error(errors::illegal_keyword(text, rest.span_from(start)), rest)
}
