//! Per-token-kind delimiter sets.
//!
//! After a token is scanned, the character that follows it must belong to the token kind's delimiter set. Whitespace
//! and end of input are always permitted; trivia tokens are never checked.

use imperial_core::lang::keywords::{self, KeywordCategory, KeywordId};
use imperial_core::lang::operators::{self, OperatorCategory, OperatorId};
use imperial_core::lang::punctuation::PunctuationId;

use super::tokens::TokenKind;

/// Characters permitted to follow a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterSet {
    pub letters: bool,
    pub digits: bool,
    pub symbols: &'static str,
}

impl DelimiterSet {
    const fn symbols(symbols: &'static str) -> Self {
        Self {
            letters: false,
            digits: false,
            symbols,
        }
    }

    const fn alnum(symbols: &'static str) -> Self {
        Self {
            letters: true,
            digits: true,
            symbols,
        }
    }

    const fn alpha(symbols: &'static str) -> Self {
        Self {
            letters: true,
            digits: false,
            symbols,
        }
    }

    pub fn permits(&self, c: char) -> bool {
        is_always_permitted(c)
            || (self.letters && c.is_ascii_alphabetic())
            || (self.digits && c.is_ascii_digit())
            || self.symbols.contains(c)
    }
}

fn is_always_permitted(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

// The sets below are wider than the strict historical tables, which allowed little beyond a space after most
// keywords. Widened here:
// - control keywords accept `( { : ' " - +` directly, so `Thou(x){` and `Act{` lex;
// - `(` also accepts `;` for `Per (;;)`;
// - whitespace and end of input are accepted after every token.
// Number literals stay strict about letters, and a violation still drops the token.
const TYPE_KEYWORD: DelimiterSet = DelimiterSet::alnum("[(,");
const CALL_KEYWORD: DelimiterSet = DelimiterSet::symbols("(");
const CONTROL_KEYWORD: DelimiterSet = DelimiterSet::alnum("({:'\"-+");
const JUMP_KEYWORD: DelimiterSet = DelimiterSet::symbols(";");
const RECEDE: DelimiterSet = DelimiterSet::alnum("(;-+'\"!");
const VALUE_KEYWORD: DelimiterSet = DelimiterSet::symbols(";,)]}:=!&|<>");
const IDENTIFIER: DelimiterSet = DelimiterSet::symbols(";,()[]{}+-*/%=!<>&|^~:.");
const NUMBER: DelimiterSet = DelimiterSet::symbols(";,)]}(:.+-*/%=!<>&|^~");
const LETTER: DelimiterSet = DelimiterSet::symbols(";,)]}:=!<>&|+");
const MISSIVE: DelimiterSet = DelimiterSet::symbols(";,)]}([:=!<>&|+");
const BINARY_OPERATOR: DelimiterSet = DelimiterSet::alnum("(-+!'\"{");
const INC_DEC: DelimiterSet = DelimiterSet::alnum(";)]},+-*/%=!<>&|");
const BANG: DelimiterSet = DelimiterSet::alnum("(!-'\"");
const AMPERSAND: DelimiterSet = DelimiterSet::alnum("_(");
const BITWISE: DelimiterSet = DelimiterSet::alnum("(~-");
const LPAREN: DelimiterSet = DelimiterSet::alnum("();-+!&'\"[{");
const RPAREN: DelimiterSet = DelimiterSet::symbols("+-*/%=!<>&|^:;,.()[]{}");
const LBRACE: DelimiterSet = DelimiterSet::alnum("{}(),'\"-+/");
const RBRACE: DelimiterSet = DelimiterSet::symbols(",;)]}/");
const LBRACKET: DelimiterSet = DelimiterSet::alnum("-+([{])");
const RBRACKET: DelimiterSet = DelimiterSet::symbols(",;:.=+-*/%<>!&|()[]{}");
const COMMA: DelimiterSet = DelimiterSet::alnum("(-+[{)'\"&!");
const SEMICOLON: DelimiterSet = DelimiterSet::alnum(";)}/(+-!");
const COLON: DelimiterSet = DelimiterSet::alpha(":/");
const DOT: DelimiterSet = DelimiterSet::alnum("");

/// The delimiter set of `kind`, or `None` for trivia and end of input.
pub fn delimiter_set(kind: &TokenKind) -> Option<DelimiterSet> {
    let set = match kind {
        TokenKind::Keyword(id) => keyword_set(*id),
        TokenKind::Operator(id) => operator_set(*id),
        TokenKind::Punctuation(id) => punctuation_set(*id),
        TokenKind::Ident(_) => IDENTIFIER,
        TokenKind::NumeralLit(_) | TokenKind::DecimalLit(_) => NUMBER,
        TokenKind::LetterLit(_) => LETTER,
        TokenKind::MissiveLit(_) => MISSIVE,
        TokenKind::LineComment(_)
        | TokenKind::BlockComment(_)
        | TokenKind::Space
        | TokenKind::Newline
        | TokenKind::Eof => return None,
    };
    Some(set)
}

/// Check whether `next` may follow a token of `kind`.
pub fn permits(kind: &TokenKind, next: char) -> bool {
    delimiter_set(kind).is_none_or(|set| set.permits(next))
}

fn keyword_set(id: KeywordId) -> DelimiterSet {
    match id {
        KeywordId::Embark | KeywordId::Seek | KeywordId::Emit => CALL_KEYWORD,
        KeywordId::Halt | KeywordId::Extend => JUMP_KEYWORD,
        KeywordId::Recede => RECEDE,
        _ => match keywords::category(id) {
            KeywordCategory::DataType | KeywordCategory::Modifier => TYPE_KEYWORD,
            KeywordCategory::Value => VALUE_KEYWORD,
            KeywordCategory::Conditional | KeywordCategory::Loop => CONTROL_KEYWORD,
            KeywordCategory::Entry | KeywordCategory::Io | KeywordCategory::Jump => CALL_KEYWORD,
        },
    }
}

fn operator_set(id: OperatorId) -> DelimiterSet {
    match id {
        OperatorId::Bang => BANG,
        OperatorId::Amp => AMPERSAND,
        _ => match operators::category(id) {
            OperatorCategory::IncDec => INC_DEC,
            OperatorCategory::Bitwise => BITWISE,
            OperatorCategory::Arithmetic
            | OperatorCategory::Assignment
            | OperatorCategory::CompoundAssignment
            | OperatorCategory::Comparison
            | OperatorCategory::Logical => BINARY_OPERATOR,
        },
    }
}

fn punctuation_set(id: PunctuationId) -> DelimiterSet {
    match id {
        PunctuationId::LParen => LPAREN,
        PunctuationId::RParen => RPAREN,
        PunctuationId::LBrace => LBRACE,
        PunctuationId::RBrace => RBRACE,
        PunctuationId::LBracket => LBRACKET,
        PunctuationId::RBracket => RBRACKET,
        PunctuationId::Comma => COMMA,
        PunctuationId::Semicolon => SEMICOLON,
        PunctuationId::Colon => COLON,
        PunctuationId::Dot => DOT,
    }
}
