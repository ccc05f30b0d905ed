//! Lexer for the Imperial Code language.
//!
//! Handles tokenization including:
//! - Keywords, recognized letter by letter (`Embark`, `Numeral`, `Thou`, ...)
//! - Identifiers and literals (numeral, decimal, letter, missive)
//! - Operators and punctuation, with greedy one-character lookahead
//! - Line and block comments
//! - Delimiter validation: the character after each token must be in that token kind's delimiter set
//!
//! ## Module Structure
//!
//! - `cursor` - The `Copy` cursor threaded through scanners
//! - `tokens` - Token types (TokenKind, Token)
//! - `words` - Identifier and keyword scanning
//! - `numbers` - Numeric literal scanning
//! - `literals` - Missive/letter scanning and escapes
//! - `comments` - Slash operators and comments
//! - `delimiters` - Per-kind delimiter sets
//!
//! ## Notes
//! - Lexical errors are accumulated, never fatal: the lexer always produces a token list ending in `Eof`.
//! - A token followed by a character outside its delimiter set is replaced by an `IllegalDelimiter` diagnostic and
//!   scanning resumes at that character.

pub mod comments;
pub mod cursor;
pub mod delimiters;
pub mod literals;
pub mod numbers;
pub mod tokens;
pub mod words;

pub use cursor::{Cursor, Scanned};
pub use tokens::{Token, TokenKind, keyword_id};

use imperial_core::lang::operators::OperatorId;
use imperial_core::lang::punctuation;

use crate::diagnostics::{Diagnostic, errors};
use crate::span::{Position, Span};

/// Output of [`tokenize`]: every token that survived plus every lexical diagnostic, both in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Lexed {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Lexed {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Convert into the `lex` result shape.
    pub fn into_result(self) -> Result<Vec<Token>, Vec<Diagnostic>> {
        if self.diagnostics.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.diagnostics)
        }
    }
}

/// Lexer for Imperial source code.
///
/// Owns the token and diagnostic accumulators; all scanning happens in the pure functions of the submodules.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Tokenize the whole source.
    pub fn tokenize(mut self) -> Lexed {
        while let Some((c, next)) = self.cursor.bump() {
            if matches!(c, '\t' | '\r') {
                self.cursor = next;
                continue;
            }
            let start = self.cursor.pos();
            let scanned = scan_token(self.cursor);
            self.accept(start, scanned);
        }

        let end = self.cursor.pos();
        self.tokens.push(Token::new(TokenKind::Eof, Span::point(end)));
        Lexed {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
        }
    }

    fn accept(&mut self, start: Position, scanned: Scanned<'a>) {
        self.cursor = scanned.rest;
        let kind = match scanned.result {
            Ok(kind) => kind,
            Err(diagnostic) => {
                self.diagnostics.push(diagnostic);
                return;
            }
        };

        if let Some(next) = self.cursor.peek() {
            if !delimiters::permits(&kind, next) {
                let at = self.cursor.pos();
                tracing::debug!(token = %kind, next = %next, "dropping token before illegal delimiter");
                self.diagnostics.push(errors::illegal_delimiter(
                    next,
                    &kind.to_string(),
                    Span::new(at, at.advance(next)),
                ));
                return;
            }
        }

        self.tokens.push(Token::new(kind, self.cursor.span_from(start)));
    }
}

/// Scan one token starting at the cursor. The cursor must not be at end of input.
pub fn scan_token(cur: Cursor<'_>) -> Scanned<'_> {
    let start = cur.pos();
    let Some((c, next)) = cur.bump() else {
        return Scanned::token(TokenKind::Eof, cur);
    };

    match c {
        ' ' => Scanned::token(TokenKind::Space, next),
        '\n' => Scanned::token(TokenKind::Newline, next),
        '"' => literals::scan_missive(cur),
        '\'' => literals::scan_letter(cur),
        '/' => comments::scan_slash(cur),
        c if c.is_ascii_digit() => numbers::scan_number(cur),
        c if words::is_ident_start(c) => words::scan_identifier(cur),
        c if c.is_ascii_uppercase() => words::scan_keyword(cur),

        '+' => operator(next, OperatorId::Plus, &[('+', OperatorId::PlusPlus), ('=', OperatorId::PlusEq)]),
        '-' => operator(next, OperatorId::Minus, &[('-', OperatorId::MinusMinus), ('=', OperatorId::MinusEq)]),
        '*' => operator(next, OperatorId::Star, &[('=', OperatorId::StarEq)]),
        '%' => operator(next, OperatorId::Percent, &[('=', OperatorId::PercentEq)]),
        '=' => operator(next, OperatorId::Eq, &[('=', OperatorId::EqEq)]),
        '!' => operator(next, OperatorId::Bang, &[('=', OperatorId::NotEq)]),
        '<' => operator(next, OperatorId::Lt, &[('=', OperatorId::LtEq), ('<', OperatorId::Shl)]),
        '>' => operator(next, OperatorId::Gt, &[('=', OperatorId::GtEq), ('>', OperatorId::Shr)]),
        '&' => operator(next, OperatorId::Amp, &[('&', OperatorId::AndAnd)]),
        '|' => operator(next, OperatorId::Pipe, &[('|', OperatorId::OrOr)]),
        '^' => Scanned::token(TokenKind::Operator(OperatorId::Caret), next),
        '~' => Scanned::token(TokenKind::Operator(OperatorId::Tilde), next),

        c => match punctuation::from_char(c) {
            Some(id) => Scanned::token(TokenKind::Punctuation(id), next),
            None => Scanned::error(errors::illegal_character(c, next.span_from(start)), next),
        },
    }
}

/// Try to match a compound operator, fall back to the simple one.
fn operator<'a>(cur: Cursor<'a>, simple: OperatorId, compounds: &[(char, OperatorId)]) -> Scanned<'a> {
    for &(c, id) in compounds {
        if let Some(rest) = cur.eat(c) {
            return Scanned::token(TokenKind::Operator(id), rest);
        }
    }
    Scanned::token(TokenKind::Operator(simple), cur)
}

/// Tokenize `source`, keeping every diagnostic.
///
/// `file_name` is only recorded on the tracing span; diagnostics carry positions, not names.
#[tracing::instrument(skip_all, fields(file = file_name, source_len = source.len()))]
pub fn tokenize(file_name: &str, source: &str) -> Lexed {
    let lexed = Lexer::new(source).tokenize();
    tracing::debug!(
        tokens = lexed.tokens.len(),
        diagnostics = lexed.diagnostics.len(),
        "lexing finished"
    );
    lexed
}

/// Convenience function to lex a source string.
///
/// Returns the tokens when no diagnostic was produced.
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<Diagnostic>> {
    Lexer::new(source).tokenize().into_result()
}

// ============================================================================
// TESTS
// ============================================================================
