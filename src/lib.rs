#![forbid(unsafe_code)]
//! Imperial Code front end
//!
//! Imperial Code is a small procedural language with Latin-flavoured keywords (`Embark`, `Thou`, `Recede`, ...).
//! This crate ties together the vocabulary registries (`imperial_core`) and the syntax frontend
//! (`imperial_syntax`: lexer, parser, AST, diagnostics) and provides the `imperial` command-line driver.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`. The lexer and parser never panic on any input.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;

pub use imperial_core::lang;
pub use imperial_syntax::ast;
pub use imperial_syntax::diagnostics;
pub use imperial_syntax::lexer;
pub use imperial_syntax::parser;
pub use imperial_syntax::span;
pub use imperial_syntax::symbols;

pub use imperial_syntax::diagnostics::{Diagnostic, DiagnosticKind};
pub use imperial_syntax::lexer::{Lexed, Token, TokenKind, lex, tokenize};
pub use imperial_syntax::parser::{parse, parse_source};
