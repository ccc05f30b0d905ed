/// Token-stream helpers.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `peek_nth`, `advance`)
/// - Matching / expecting keywords, operators, and punctuation
/// - Layout handling (`skip_newlines`)
/// - Nesting depth and operator budget (`nested`, `count_operator`)
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::Eof`].
    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &'a Token {
        self.peek_nth(0)
    }

    /// Return the token `n` positions ahead without consuming anything.
    fn peek_nth(&self, n: usize) -> &'a Token {
        self.tokens.get(self.pos + n).copied().unwrap_or(self.eof)
    }

    /// Advance to the next token and return the token we just consumed.
    fn advance(&mut self) -> &'a Token {
        let token = self.peek();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    fn current_span(&self) -> Span {
        self.peek().span
    }

    /// Span of the most recently consumed token.
    fn previous_span(&self) -> Span {
        match self.pos.checked_sub(1).and_then(|i| self.tokens.get(i)) {
            Some(token) => token.span,
            None => self.current_span(),
        }
    }

    /// Return `true` if the current token is the given keyword.
    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    /// Return `true` if the current token is the given punctuation.
    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().kind.is_punctuation(id)
    }

    /// Return `true` if the current token is the given operator.
    fn check_op(&self, id: OperatorId) -> bool {
        self.peek().kind.is_operator(id)
    }

    fn match_keyword(&mut self, id: KeywordId) -> bool {
        if self.check_keyword(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_op(&mut self, id: OperatorId) -> bool {
        if self.check_op(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect_keyword(&mut self, id: KeywordId, what: &str) -> Result<&'a Token, Diagnostic> {
        if self.check_keyword(id) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(what))
        }
    }

    fn expect_punct(&mut self, id: PunctuationId, what: &str) -> Result<&'a Token, Diagnostic> {
        if self.check_punct(id) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(what))
        }
    }

    fn expect_op(&mut self, id: OperatorId, what: &str) -> Result<&'a Token, Diagnostic> {
        if self.check_op(id) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(what))
        }
    }

    fn expect_semicolon(&mut self) -> Result<(), Diagnostic> {
        self.expect_punct(PunctuationId::Semicolon, "';'").map(|_| ())
    }

    /// "expected `what`, found <current token>" at the current token.
    fn unexpected(&self, what: &str) -> Diagnostic {
        errors::expected(what, &self.peek().kind.describe(), self.current_span())
    }

    /// Skip any newline tokens.
    fn skip_newlines(&mut self) {
        while matches!(self.peek().kind, TokenKind::Newline) {
            self.advance();
        }
    }

    /// Run `parse` one nesting level deeper, failing once the depth exceeds `MAX_NESTING_DEPTH`.
    fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> Result<T, Diagnostic>) -> Result<T, Diagnostic> {
        if self.depth >= limits::MAX_NESTING_DEPTH {
            return Err(errors::nesting_too_deep(self.current_span()));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Charge one binary operator against the current statement's budget.
    fn count_operator(&mut self) -> Result<(), Diagnostic> {
        if self.operators >= limits::MAX_EXPRESSION_OPERATORS {
            return Err(errors::expression_too_long(self.current_span()));
        }
        self.operators += 1;
        Ok(())
    }
}
