//! Define the reserved keyword vocabulary for the Imperial language.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings, categories and a short description.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**. Every keyword starts with an uppercase letter; identifiers start
//!   with a lowercase one, so the two never collide.
//! - The lexer recognizes keywords letter by letter. [`continues`] answers whether a partial spelling can still grow
//!   into a keyword, which makes the table double as the recognizer's state set.
//!
//! ## Examples
//! ```rust
//! use imperial_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("Embark"), Some(KeywordId::Embark));
//! assert!(keywords::continues("Emb"));
//! assert!(!keywords::continues("Emx"));
//! ```

/// Stable identifier for every reserved keyword.
///
/// ## Notes
/// - The declaration order matches [`KEYWORDS`]; `info_for` indexes the table by discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Program entry
    Embark,

    // Data types
    Numeral,
    Decimal,
    Letter,
    Missive,
    Veracity,
    Void,

    // Modifiers
    Constant,

    // Input / output
    Seek,
    Emit,

    // Conditionals
    Thou,
    Or,
    Shift,
    Opt,
    Usual,

    // Loops
    Until,
    Per,
    Act,

    // Jumps
    Halt,
    Extend,
    Recede,

    // Values
    Pure,
    Nay,
    Nil,
}

/// High-level grouping used by the lexer's delimiter rules and by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// `Embark`
    Entry,
    /// `Numeral`, `Decimal`, `Letter`, `Missive`, `Veracity`, `Void`
    DataType,
    /// `Constant`
    Modifier,
    /// `Seek`, `Emit`
    Io,
    /// `Thou`, `Or`, `Shift`, `Opt`, `Usual`
    Conditional,
    /// `Until`, `Per`, `Act`
    Loop,
    /// `Halt`, `Extend`, `Recede`
    Jump,
    /// `Pure`, `Nay`, `Nil`
    Value,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub description: &'static str,
}

/// Registry of all keywords, in [`KeywordId`] declaration order.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::Embark, "Embark", KeywordCategory::Entry, "Opens the program entry block."),
    info(KeywordId::Numeral, "Numeral", KeywordCategory::DataType, "Integer data type."),
    info(KeywordId::Decimal, "Decimal", KeywordCategory::DataType, "Floating-point data type."),
    info(KeywordId::Letter, "Letter", KeywordCategory::DataType, "Single character data type."),
    info(KeywordId::Missive, "Missive", KeywordCategory::DataType, "String data type."),
    info(KeywordId::Veracity, "Veracity", KeywordCategory::DataType, "Boolean data type."),
    info(KeywordId::Void, "Void", KeywordCategory::DataType, "Return type of functions that return nothing."),
    info(KeywordId::Constant, "Constant", KeywordCategory::Modifier, "Marks a declaration as read-only."),
    info(KeywordId::Seek, "Seek", KeywordCategory::Io, "Reads input into addressed variables."),
    info(KeywordId::Emit, "Emit", KeywordCategory::Io, "Writes formatted output."),
    info(KeywordId::Thou, "Thou", KeywordCategory::Conditional, "Conditional branch (if)."),
    info(KeywordId::Or, "Or", KeywordCategory::Conditional, "Alternative branch (else)."),
    info(KeywordId::Shift, "Shift", KeywordCategory::Conditional, "Multi-way branch (switch)."),
    info(KeywordId::Opt, "Opt", KeywordCategory::Conditional, "Case label inside `Shift`."),
    info(KeywordId::Usual, "Usual", KeywordCategory::Conditional, "Default label inside `Shift`."),
    info(KeywordId::Until, "Until", KeywordCategory::Loop, "Condition-checked loop (while)."),
    info(KeywordId::Per, "Per", KeywordCategory::Loop, "Counted loop (for)."),
    info(KeywordId::Act, "Act", KeywordCategory::Loop, "Body-first loop (do ... while)."),
    info(KeywordId::Halt, "Halt", KeywordCategory::Jump, "Leaves the enclosing loop or switch (break)."),
    info(KeywordId::Extend, "Extend", KeywordCategory::Jump, "Skips to the next loop iteration (continue)."),
    info(KeywordId::Recede, "Recede", KeywordCategory::Jump, "Returns from a function."),
    info(KeywordId::Pure, "Pure", KeywordCategory::Value, "Boolean true."),
    info(KeywordId::Nay, "Nay", KeywordCategory::Value, "Boolean false."),
    info(KeywordId::Nil, "Nil", KeywordCategory::Value, "The absent value."),
];

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Returns
/// - The associated [`KeywordInfo`] from [`KEYWORDS`].
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    &KEYWORDS[id as usize]
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if `s` is exactly a keyword spelling, `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

/// Check whether `prefix` is a (possibly complete) prefix of some keyword.
///
/// ## Notes
/// - The empty string continues every keyword.
/// - A complete spelling continues itself, so `continues("Or")` is `true`.
pub fn continues(prefix: &str) -> bool {
    KEYWORDS.iter().any(|k| k.canonical.starts_with(prefix))
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: KeywordId,
    canonical: &'static str,
    category: KeywordCategory,
    description: &'static str,
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        description,
    }
}
