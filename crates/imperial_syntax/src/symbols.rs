//! Symbol table built while parsing.
//!
//! The table is flat: there is no block scoping, entries are never removed, and declaring a name again overwrites
//! the previous entry. It exists so the parser can reject undeclared names and mismatched initializers as it goes.

use std::collections::HashMap;

use imperial_core::lang::types::DataType;

use crate::span::Span;

/// What a name refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Variable,
    Constant,
    /// Array with its declared size.
    Array(i64),
    Parameter,
    Function,
}

/// A declared name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    /// Declared type; the return type for functions, the element type for arrays.
    pub ty: DataType,
    pub kind: SymbolKind,
    pub span: Span,
}

impl Symbol {
    pub fn is_function(&self) -> bool {
        self.kind == SymbolKind::Function
    }

    pub fn is_array(&self) -> bool {
        matches!(self.kind, SymbolKind::Array(_))
    }

    pub fn array_size(&self) -> Option<i64> {
        match self.kind {
            SymbolKind::Array(size) => Some(size),
            _ => None,
        }
    }
}

/// Flat name → symbol map.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: HashMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name`, replacing any earlier entry.
    pub fn define(&mut self, name: &str, symbol: Symbol) {
        if let Some(previous) = self.symbols.insert(name.to_string(), symbol) {
            tracing::trace!(name, ?previous, "symbol redeclared");
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol(ty: DataType, kind: SymbolKind) -> Symbol {
        Symbol {
            ty,
            kind,
            span: Span::default(),
        }
    }

    #[test]
    fn define_and_lookup() {
        let mut table = SymbolTable::new();
        table.define("x", symbol(DataType::Numeral, SymbolKind::Variable));
        assert_eq!(table.lookup("x").map(|s| s.ty), Some(DataType::Numeral));
        assert!(table.lookup("y").is_none());
    }

    #[test]
    fn redeclaration_overwrites() {
        let mut table = SymbolTable::new();
        table.define("x", symbol(DataType::Numeral, SymbolKind::Variable));
        table.define("x", symbol(DataType::Missive, SymbolKind::Array(3)));
        assert_eq!(table.len(), 1);
        let x = table.lookup("x").unwrap();
        assert_eq!(x.ty, DataType::Missive);
        assert!(x.is_array());
    }
}
