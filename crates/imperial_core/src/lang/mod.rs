//! Imperial language vocabulary registries.
//!
//! This module is the "front door" for language-level vocabulary: reserved keywords, operators, punctuation and the
//! built-in data types.
//!
//! Callers work with **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up spellings and metadata via const
//! registry tables instead of comparing strings across the front end.
//!
//! ## Examples
//! ```rust
//! use imperial_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("Thou"), Some(KeywordId::Thou));
//! assert_eq!(keywords::as_str(KeywordId::Thou), "Thou");
//! ```

pub mod keywords;
pub mod limits;
pub mod operators;
pub mod punctuation;
pub mod types;
