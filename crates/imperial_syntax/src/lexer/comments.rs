//! Slash scanning: `/`, `/=`, `// line comments` and `/* block comments */`.

use imperial_core::lang::operators::OperatorId;

use super::cursor::{Cursor, Scanned};
use super::tokens::TokenKind;
use crate::diagnostics::errors;

/// Scan everything that starts with `/`.
pub fn scan_slash(cur: Cursor<'_>) -> Scanned<'_> {
    let start = cur.pos();
    let Some(after) = cur.eat('/') else {
        return Scanned::token(TokenKind::Operator(OperatorId::Slash), cur);
    };

    if let Some(body) = after.eat('/') {
        // The newline is left for the lexer loop.
        let (text, rest) = body.eat_while(|c| c != '\n');
        return Scanned::token(TokenKind::LineComment(text.to_string()), rest);
    }

    if let Some(body) = after.eat('*') {
        let remaining = body.rest();
        return match remaining.find("*/") {
            Some(end) => {
                let text = &remaining[..end];
                let rest = body.advance_over(text).advance_over("*/");
                Scanned::token(TokenKind::BlockComment(text.to_string()), rest)
            }
            None => {
                let rest = body.to_end();
                Scanned::error(errors::unclosed_literal("closing '*/'", rest.span_from(start)), rest)
            }
        };
    }

    match after.eat('=') {
        Some(rest) => Scanned::token(TokenKind::Operator(OperatorId::SlashEq), rest),
        None => Scanned::token(TokenKind::Operator(OperatorId::Slash), after),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticKind;
    use crate::span::Position;

    #[test]
    fn line_comment_stops_before_newline() {
        let scanned = scan_slash(Cursor::new("// note\nNil"));
        assert_eq!(scanned.result, Ok(TokenKind::LineComment(" note".into())));
        assert_eq!(scanned.rest.peek(), Some('\n'));
    }

    #[test]
    fn block_comment_spans_lines() {
        let scanned = scan_slash(Cursor::new("/* a\nb */x"));
        assert_eq!(scanned.result, Ok(TokenKind::BlockComment(" a\nb ".into())));
        assert_eq!(scanned.rest.pos(), Position::new(9, 1, 4));
        assert_eq!(scanned.rest.peek(), Some('x'));
    }

    #[test]
    fn unterminated_block_comment() {
        let scanned = scan_slash(Cursor::new("/* open"));
        assert_eq!(scanned.result.unwrap_err().kind, DiagnosticKind::UnclosedLiteral);
        assert!(scanned.rest.is_eof());
    }

    #[test]
    fn slash_operators() {
        assert_eq!(
            scan_slash(Cursor::new("/= 2")).result,
            Ok(TokenKind::Operator(OperatorId::SlashEq))
        );
        assert_eq!(
            scan_slash(Cursor::new("/ 2")).result,
            Ok(TokenKind::Operator(OperatorId::Slash))
        );
    }
}
