//! Parser for the Imperial Code language.
//!
//! Converts a token stream into an AST. The parser is recursive descent for statements and precedence climbing for
//! expressions, and it is **fail-fast**: the first syntax error aborts the parse.
//!
//! While parsing it keeps a flat [`SymbolTable`] so it can reject undeclared names and initializers whose type does
//! not match the declaration.
//!
//! ## Examples
//!
//! ```rust
//! use imperial_syntax::{lexer, parser};
//!
//! let source = "Numeral x = 5;\nEmbark(){\n}\n";
//! let tokens = lexer::lex(source).unwrap();
//! let program = parser::parse(&tokens).unwrap();
//! assert_eq!(program.globals.len(), 1);
//! assert!(program.entry.node.body.is_empty());
//! ```

use imperial_core::lang::keywords::KeywordId;
use imperial_core::lang::limits;
use imperial_core::lang::operators::{self, OperatorCategory, OperatorId};
use imperial_core::lang::punctuation::PunctuationId;
use imperial_core::lang::types::DataType;

use crate::ast::*;
use crate::diagnostics::{Diagnostic, errors};
use crate::lexer::{Token, TokenKind};
use crate::span::Position;
use crate::symbols::{Symbol, SymbolKind, SymbolTable};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/checks.rs");
include!("parser/util.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
