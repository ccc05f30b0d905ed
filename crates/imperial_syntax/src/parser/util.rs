/// Miscellaneous parser utilities.
///
/// This chunk contains small shared parsing helpers that don't cleanly fit into
/// "decl", "stmt" or "expr" (identifier and literal handling, lookahead predicates, node builders).
impl<'a> Parser<'a> {
    // ========================================================================
    // Utilities
    // ========================================================================

    fn identifier_spanned(&mut self, what: &str) -> Result<Spanned<Ident>, Diagnostic> {
        match &self.peek().kind {
            TokenKind::Ident(name) => {
                let span = self.current_span();
                let name = name.clone();
                self.advance();
                Ok(Spanned::new(name, span))
            }
            _ => Err(self.unexpected(what)),
        }
    }

    /// A data type keyword.
    fn data_type(&mut self) -> Result<Spanned<DataType>, Diagnostic> {
        match self.peek().kind.data_type() {
            Some(ty) => {
                let span = self.advance().span;
                Ok(Spanned::new(ty, span))
            }
            None => Err(self.unexpected("a data type")),
        }
    }

    fn missive_literal(&mut self, what: &str) -> Result<Spanned<String>, Diagnostic> {
        match &self.peek().kind {
            TokenKind::MissiveLit(text) => {
                let span = self.current_span();
                let text = text.clone();
                self.advance();
                Ok(Spanned::new(text, span))
            }
            _ => Err(self.unexpected(what)),
        }
    }

    /// A positive numeral literal.
    fn array_size(&mut self) -> Result<Spanned<i64>, Diagnostic> {
        match self.peek().kind {
            TokenKind::NumeralLit(n) if n > 0 => {
                let span = self.advance().span;
                Ok(Spanned::new(n, span))
            }
            _ => Err(errors::invalid_array_size(self.current_span())),
        }
    }

    /// Consume a compound assignment operator, if present.
    fn compound_op(&mut self) -> Option<CompoundOp> {
        let id = self
            .peek()
            .operator_id()
            .filter(|id| operators::category(*id) == OperatorCategory::CompoundAssignment)?;
        let op = match id {
            OperatorId::PlusEq => CompoundOp::Add,
            OperatorId::MinusEq => CompoundOp::Sub,
            OperatorId::StarEq => CompoundOp::Mul,
            OperatorId::SlashEq => CompoundOp::Div,
            OperatorId::PercentEq => CompoundOp::Mod,
            _ => return None,
        };
        self.advance();
        Some(op)
    }

    fn binary(&self, left: Spanned<Expr>, op: BinaryOp, right: Spanned<Expr>) -> Spanned<Expr> {
        let span = left.span.merge(right.span);
        Spanned::new(Expr::Binary(Box::new(left), op, Box::new(right)), span)
    }

    /// `Constant` or a data type keyword starts a declaration.
    fn at_declaration_start(&self) -> bool {
        self.check_keyword(KeywordId::Constant) || self.peek().kind.data_type().is_some()
    }

    /// An identifier followed by `=`, a compound assignment operator, or `[...] =`.
    fn at_assignment(&self) -> bool {
        if !matches!(self.peek().kind, TokenKind::Ident(_)) {
            return false;
        }

        let next = &self.peek_nth(1).kind;
        if next.is_operator(OperatorId::Eq) {
            return true;
        }
        if next
            .operator_id()
            .is_some_and(|id| operators::category(id) == OperatorCategory::CompoundAssignment)
        {
            return true;
        }
        if !next.is_punctuation(PunctuationId::LBracket) {
            return false;
        }

        // Skip the balanced index expression and look at what follows it.
        let mut depth = 0usize;
        let mut ahead = 1;
        loop {
            let kind = &self.peek_nth(ahead).kind;
            match kind {
                TokenKind::Eof => return false,
                TokenKind::Punctuation(PunctuationId::LBracket) => depth += 1,
                TokenKind::Punctuation(PunctuationId::RBracket) => {
                    depth -= 1;
                    if depth == 0 {
                        return self.peek_nth(ahead + 1).kind.is_operator(OperatorId::Eq);
                    }
                }
                _ => {}
            }
            ahead += 1;
        }
    }
}
