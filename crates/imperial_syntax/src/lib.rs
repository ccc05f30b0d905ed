//! Syntax frontend for the Imperial Code language: spans, diagnostics, lexer, parser, AST.
//!
//! This crate is dependency-light and pure: every entrypoint takes source text or tokens and returns values, with no
//! IO.
//!
//! ## Notes
//! - Lexing accumulates diagnostics and always produces a token stream ending in `Eof`.
//! - Parsing is fail-fast and reports a single diagnostic.
//! - Vocabulary identity (keywords/operators/punctuation/data types) comes from `imperial_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use imperial_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("Embark() {\n}\n").unwrap();
//! let program = parser::parse(&tokens).unwrap();
//! assert!(program.globals.is_empty());
//! ```
//!
//! ## See also
//! - `imperial_core::lang` for registry-backed language vocabulary.

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod symbols;
pub mod token_helpers;
