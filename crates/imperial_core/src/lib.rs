//! Provide the canonical language vocabulary for the Imperial Code front end.
//!
//! This crate is intentionally small and dependency-free. It holds the registries that both the lexer and the
//! parser consult (keywords, operators, punctuation, data types) plus the lexical limits of the language.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global state, and no syntax-tree types.
//! - Enforcement of syntax rules lives in `imperial_syntax`; this crate only answers "what is spelled how".

pub mod lang;
