//! Punctuation vocabulary.
//!
//! This module defines the canonical set of non-operator punctuation tokens used by the lexer and parser: brackets,
//! braces, separators and the access dot.
//!
//! ## Examples
//! ```rust
//! use imperial_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_char(';'), Some(PunctuationId::Semicolon));
//! assert_eq!(punctuation::as_str(PunctuationId::LBrace), "{");
//! ```

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Brackets and braces.
    Delimiter,
    /// Separators like `,`, `;` and `:`.
    Separator,
    /// The `.` access marker.
    Access,
}

/// Stable identifier for punctuation tokens.
///
/// ## Notes
/// - The declaration order matches [`PUNCTUATION`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Semicolon,
    Colon,
    Dot,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: char,
    pub spelling: &'static str,
    pub category: PunctuationCategory,
}

/// Registry of all punctuation, in [`PunctuationId`] declaration order.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    info(PunctuationId::LParen, '(', "(", PunctuationCategory::Delimiter),
    info(PunctuationId::RParen, ')', ")", PunctuationCategory::Delimiter),
    info(PunctuationId::LBracket, '[', "[", PunctuationCategory::Delimiter),
    info(PunctuationId::RBracket, ']', "]", PunctuationCategory::Delimiter),
    info(PunctuationId::LBrace, '{', "{", PunctuationCategory::Delimiter),
    info(PunctuationId::RBrace, '}', "}", PunctuationCategory::Delimiter),
    info(PunctuationId::Comma, ',', ",", PunctuationCategory::Separator),
    info(PunctuationId::Semicolon, ';', ";", PunctuationCategory::Separator),
    info(PunctuationId::Colon, ':', ":", PunctuationCategory::Separator),
    info(PunctuationId::Dot, '.', ".", PunctuationCategory::Access),
];

pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).spelling
}

pub fn category(id: PunctuationId) -> PunctuationCategory {
    info_for(id).category
}

pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    &PUNCTUATION[id as usize]
}

/// Lookup by single-character spelling.
pub fn from_char(c: char) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == c).map(|p| p.id)
}

/// Lookup by spelling.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.spelling == s).map(|p| p.id)
}

const fn info(
    id: PunctuationId,
    canonical: char,
    spelling: &'static str,
    category: PunctuationCategory,
) -> PunctuationInfo {
    PunctuationInfo {
        id,
        canonical,
        spelling,
        category,
    }
}
