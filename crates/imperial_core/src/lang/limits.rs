//! Lexical limits of the language.
//!
//! The lexer rejects literals and identifiers that exceed these bounds. Leading zeros count as digits. The parser
//! rejects programs nested deeper than [`MAX_NESTING_DEPTH`] and operator chains longer than
//! [`MAX_EXPRESSION_OPERATORS`].

/// Maximum number of characters in an identifier.
pub const MAX_IDENTIFIER_LEN: usize = 20;

/// Maximum number of digits in a `Numeral` literal.
pub const MAX_NUMERAL_DIGITS: usize = 9;

/// Maximum number of digits before the decimal point of a `Decimal` literal.
pub const MAX_DECIMAL_INT_DIGITS: usize = 9;

/// Maximum number of digits after the decimal point of a `Decimal` literal.
pub const MAX_DECIMAL_FRAC_DIGITS: usize = 6;

/// Maximum combined nesting of blocks, parenthesized expressions and prefix operators the parser accepts.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Maximum number of binary operators in the expressions of one statement or global declaration.
pub const MAX_EXPRESSION_OPERATORS: usize = 1024;
