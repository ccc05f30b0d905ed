//! Operator vocabulary.
//!
//! This module defines the canonical operator set along with the category each operator belongs to. The lexer's
//! delimiter rules and the parser's precedence ladder both branch on [`OperatorCategory`].
//!
//! ## Notes
//! - Lookup via [`from_str`] is exact; the lexer performs greedy matching (`+` vs `++` vs `+=`) itself.
//! - `&` is both bitwise-and and the address-of marker used by `Seek`.
//!
//! ## Examples
//! ```rust
//! use imperial_core::lang::operators::{self, OperatorCategory, OperatorId};
//!
//! assert_eq!(operators::from_str("+="), Some(OperatorId::PlusEq));
//! assert_eq!(operators::category(OperatorId::PlusEq), OperatorCategory::CompoundAssignment);
//! ```

/// Stable identifier for every operator.
///
/// ## Notes
/// - The declaration order matches [`OPERATORS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    // Assignment
    Eq,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,

    // Increment / decrement
    PlusPlus,
    MinusMinus,

    // Comparison
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Logical
    AndAnd,
    OrOr,
    Bang,

    // Bitwise / address-of
    Amp,
    Pipe,
    Caret,
    Tilde,
    Shl,
    Shr,
}

/// Grouping of operators by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    Arithmetic,
    Assignment,
    CompoundAssignment,
    IncDec,
    Comparison,
    Logical,
    Bitwise,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub category: OperatorCategory,
}

/// Registry of all operators, in [`OperatorId`] declaration order.
pub const OPERATORS: &[OperatorInfo] = &[
    info(OperatorId::Plus, "+", OperatorCategory::Arithmetic),
    info(OperatorId::Minus, "-", OperatorCategory::Arithmetic),
    info(OperatorId::Star, "*", OperatorCategory::Arithmetic),
    info(OperatorId::Slash, "/", OperatorCategory::Arithmetic),
    info(OperatorId::Percent, "%", OperatorCategory::Arithmetic),
    info(OperatorId::Eq, "=", OperatorCategory::Assignment),
    info(OperatorId::PlusEq, "+=", OperatorCategory::CompoundAssignment),
    info(OperatorId::MinusEq, "-=", OperatorCategory::CompoundAssignment),
    info(OperatorId::StarEq, "*=", OperatorCategory::CompoundAssignment),
    info(OperatorId::SlashEq, "/=", OperatorCategory::CompoundAssignment),
    info(OperatorId::PercentEq, "%=", OperatorCategory::CompoundAssignment),
    info(OperatorId::PlusPlus, "++", OperatorCategory::IncDec),
    info(OperatorId::MinusMinus, "--", OperatorCategory::IncDec),
    info(OperatorId::EqEq, "==", OperatorCategory::Comparison),
    info(OperatorId::NotEq, "!=", OperatorCategory::Comparison),
    info(OperatorId::Lt, "<", OperatorCategory::Comparison),
    info(OperatorId::LtEq, "<=", OperatorCategory::Comparison),
    info(OperatorId::Gt, ">", OperatorCategory::Comparison),
    info(OperatorId::GtEq, ">=", OperatorCategory::Comparison),
    info(OperatorId::AndAnd, "&&", OperatorCategory::Logical),
    info(OperatorId::OrOr, "||", OperatorCategory::Logical),
    info(OperatorId::Bang, "!", OperatorCategory::Logical),
    info(OperatorId::Amp, "&", OperatorCategory::Bitwise),
    info(OperatorId::Pipe, "|", OperatorCategory::Bitwise),
    info(OperatorId::Caret, "^", OperatorCategory::Bitwise),
    info(OperatorId::Tilde, "~", OperatorCategory::Bitwise),
    info(OperatorId::Shl, "<<", OperatorCategory::Bitwise),
    info(OperatorId::Shr, ">>", OperatorCategory::Bitwise),
];

/// Canonical spelling.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Category.
pub fn category(id: OperatorId) -> OperatorCategory {
    info_for(id).category
}

/// Full metadata.
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    &OPERATORS[id as usize]
}

/// Lookup by spelling.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

const fn info(id: OperatorId, spelling: &'static str, category: OperatorCategory) -> OperatorInfo {
    OperatorInfo { id, spelling, category }
}
