//! Built-in data types.
//!
//! Every data type is spelled by a keyword. This module maps between the two and answers the small questions the
//! parser asks while checking declarations: is the type numeric, can it be a `Shift` subject, and so on.
//!
//! ## Examples
//! ```rust
//! use imperial_core::lang::keywords::KeywordId;
//! use imperial_core::lang::types::DataType;
//!
//! assert_eq!(DataType::from_keyword(KeywordId::Decimal), Some(DataType::Decimal));
//! assert!(DataType::Decimal.is_numeric());
//! assert!(!DataType::Decimal.is_switchable());
//! ```

use std::fmt;

use super::keywords::KeywordId;

/// Data types of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Numeral,
    Decimal,
    Letter,
    Missive,
    Veracity,
    Void,
}

/// All data types in declaration order.
pub const DATA_TYPES: &[DataType] = &[
    DataType::Numeral,
    DataType::Decimal,
    DataType::Letter,
    DataType::Missive,
    DataType::Veracity,
    DataType::Void,
];

impl DataType {
    /// Map a type keyword to its data type.
    pub fn from_keyword(id: KeywordId) -> Option<Self> {
        match id {
            KeywordId::Numeral => Some(Self::Numeral),
            KeywordId::Decimal => Some(Self::Decimal),
            KeywordId::Letter => Some(Self::Letter),
            KeywordId::Missive => Some(Self::Missive),
            KeywordId::Veracity => Some(Self::Veracity),
            KeywordId::Void => Some(Self::Void),
            _ => None,
        }
    }

    /// The keyword spelling this type.
    pub fn keyword(self) -> KeywordId {
        match self {
            Self::Numeral => KeywordId::Numeral,
            Self::Decimal => KeywordId::Decimal,
            Self::Letter => KeywordId::Letter,
            Self::Missive => KeywordId::Missive,
            Self::Veracity => KeywordId::Veracity,
            Self::Void => KeywordId::Void,
        }
    }

    pub fn as_str(self) -> &'static str {
        super::keywords::as_str(self.keyword())
    }

    /// `Numeral` and `Decimal`.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Numeral | Self::Decimal)
    }

    /// Types a `Shift` subject may have.
    pub fn is_switchable(self) -> bool {
        matches!(self, Self::Numeral | Self::Letter | Self::Missive | Self::Veracity)
    }

    /// Types a variable, parameter or array element may have.
    pub fn is_storable(self) -> bool {
        self != Self::Void
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
