//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy to work with ID-based
//! tokens.

use imperial_core::lang::keywords::KeywordId;
use imperial_core::lang::operators::OperatorId;
use imperial_core::lang::punctuation::PunctuationId;
use imperial_core::lang::types::DataType;

use crate::lexer::{Token, TokenKind};

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the operator id, if this is an operator token.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// Return the data type named by a type keyword (`Numeral`, ..., `Void`).
    pub fn data_type(&self) -> Option<DataType> {
        self.keyword_id().and_then(DataType::from_keyword)
    }

    /// Return `true` for tokens the parser never sees: spaces and comments.
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            TokenKind::Space | TokenKind::LineComment(_) | TokenKind::BlockComment(_)
        )
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.operator_id()`.
    pub fn operator_id(&self) -> Option<OperatorId> {
        self.kind.operator_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_accessors() {
        let kw = TokenKind::Keyword(KeywordId::Decimal);
        assert!(kw.is_keyword(KeywordId::Decimal));
        assert_eq!(kw.data_type(), Some(DataType::Decimal));
        assert_eq!(kw.operator_id(), None);

        let op = TokenKind::Operator(OperatorId::Minus);
        assert!(op.is_operator(OperatorId::Minus));
        assert!(!op.is_punctuation(PunctuationId::Comma));

        assert_eq!(TokenKind::Keyword(KeywordId::Thou).data_type(), None);
    }

    #[test]
    fn trivia() {
        assert!(TokenKind::Space.is_trivia());
        assert!(TokenKind::BlockComment(String::new()).is_trivia());
        assert!(!TokenKind::Newline.is_trivia());
        assert!(!TokenKind::Eof.is_trivia());
    }
}
