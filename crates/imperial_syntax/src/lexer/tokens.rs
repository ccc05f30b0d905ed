//! Token types for the Imperial lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for operators
//! - `Punctuation(PunctuationId)` for punctuation tokens
//!
//! ## Notes
//! - Literal and identifier tokens carry their decoded lexeme inside the kind.
//! - `Display` gives the short name used in diagnostics (`Numeral_Lit(5)`, `Identifier(x)`, `;`);
//!   [`TokenKind::lexeme`] renders the token back to source text.

use std::fmt;

use imperial_core::lang::keywords::{self, KeywordId};
use imperial_core::lang::operators::{self, OperatorId};
use imperial_core::lang::punctuation::{self, PunctuationId};

use crate::span::Span;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Ident(String),
    NumeralLit(i64),
    DecimalLit(f64),
    LetterLit(char),
    MissiveLit(String),

    // ========== Trivia ==========
    LineComment(String),
    BlockComment(String),
    Space,
    Newline,

    // ========== Special ==========
    Eof,
}

/// A token with its kind and source span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Resolve a spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}

impl TokenKind {
    /// Render the token back to source text.
    ///
    /// Re-lexing the result yields the same kind. Escapes are re-applied to letter and missive literals.
    pub fn lexeme(&self) -> String {
        match self {
            TokenKind::Keyword(id) => keywords::as_str(*id).to_string(),
            TokenKind::Operator(id) => operators::as_str(*id).to_string(),
            TokenKind::Punctuation(id) => punctuation::as_str(*id).to_string(),
            TokenKind::Ident(name) => name.clone(),
            TokenKind::NumeralLit(n) => n.to_string(),
            TokenKind::DecimalLit(x) => format_decimal(*x),
            TokenKind::LetterLit(c) => format!("'{}'", escape_char(*c)),
            TokenKind::MissiveLit(s) => format!("\"{}\"", s.chars().map(escape_char).collect::<String>()),
            TokenKind::LineComment(text) => format!("//{}", text),
            TokenKind::BlockComment(text) => format!("/*{}*/", text),
            TokenKind::Space => " ".to_string(),
            TokenKind::Newline => "\n".to_string(),
            TokenKind::Eof => String::new(),
        }
    }

    /// Name used in "expected X, found Y" messages. Symbols and keywords are quoted.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Keyword(_) | TokenKind::Operator(_) | TokenKind::Punctuation(_) => {
                format!("'{}'", self)
            }
            _ => self.to_string(),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(id) => f.write_str(keywords::as_str(*id)),
            TokenKind::Operator(id) => f.write_str(operators::as_str(*id)),
            TokenKind::Punctuation(id) => f.write_str(punctuation::as_str(*id)),
            TokenKind::Ident(name) => write!(f, "Identifier({})", name),
            TokenKind::NumeralLit(n) => write!(f, "Numeral_Lit({})", n),
            TokenKind::DecimalLit(x) => write!(f, "Decimal_Lit({})", format_decimal(*x)),
            TokenKind::LetterLit(c) => write!(f, "Letter_Lit({})", escape_char(*c)),
            TokenKind::MissiveLit(s) => write!(f, "Missive_Lit({})", s),
            TokenKind::LineComment(_) | TokenKind::BlockComment(_) => f.write_str("comment"),
            TokenKind::Space => f.write_str("space"),
            TokenKind::Newline => f.write_str("newline"),
            TokenKind::Eof => f.write_str("EOF"),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

/// Format a decimal so it always shows a fractional part (`5.0`, not `5`).
pub fn format_decimal(x: f64) -> String {
    let s = x.to_string();
    if s.contains('.') { s } else { format!("{}.0", s) }
}

fn escape_char(c: char) -> String {
    match c {
        '\n' => "\\n".to_string(),
        '\t' => "\\t".to_string(),
        '\\' => "\\\\".to_string(),
        '"' => "\\\"".to_string(),
        '\'' => "\\'".to_string(),
        _ => c.to_string(),
    }
}
