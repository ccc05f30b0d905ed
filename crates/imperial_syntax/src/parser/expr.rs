/// Expression parsing methods.
///
/// This chunk implements precedence climbing from `||` (lowest) down to primary expressions. Every binary level is
/// left-associative.
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn expression(&mut self) -> Result<Spanned<Expr>, Diagnostic> {
        self.or_expr()
    }

    fn or_expr(&mut self) -> Result<Spanned<Expr>, Diagnostic> {
        self.binary_level(Self::and_expr, &[(OperatorId::OrOr, BinaryOp::Or)])
    }

    fn and_expr(&mut self) -> Result<Spanned<Expr>, Diagnostic> {
        self.binary_level(Self::comparison, &[(OperatorId::AndAnd, BinaryOp::And)])
    }

    fn comparison(&mut self) -> Result<Spanned<Expr>, Diagnostic> {
        self.binary_level(
            Self::additive,
            &[
                (OperatorId::EqEq, BinaryOp::Eq),
                (OperatorId::NotEq, BinaryOp::NotEq),
                (OperatorId::Lt, BinaryOp::Lt),
                (OperatorId::Gt, BinaryOp::Gt),
                (OperatorId::LtEq, BinaryOp::LtEq),
                (OperatorId::GtEq, BinaryOp::GtEq),
            ],
        )
    }

    fn additive(&mut self) -> Result<Spanned<Expr>, Diagnostic> {
        self.binary_level(
            Self::multiplicative,
            &[(OperatorId::Plus, BinaryOp::Add), (OperatorId::Minus, BinaryOp::Sub)],
        )
    }

    fn multiplicative(&mut self) -> Result<Spanned<Expr>, Diagnostic> {
        self.binary_level(
            Self::unary,
            &[
                (OperatorId::Star, BinaryOp::Mul),
                (OperatorId::Slash, BinaryOp::Div),
                (OperatorId::Percent, BinaryOp::Mod),
            ],
        )
    }

    /// One left-associative level: `operand {op operand}`.
    fn binary_level(
        &mut self,
        operand: fn(&mut Self) -> Result<Spanned<Expr>, Diagnostic>,
        ops: &[(OperatorId, BinaryOp)],
    ) -> Result<Spanned<Expr>, Diagnostic> {
        let mut left = operand(self)?;
        while let Some(op) = ops.iter().find(|(id, _)| self.check_op(*id)).map(|(_, op)| *op) {
            self.count_operator()?;
            self.advance();
            let right = operand(self)?;
            left = self.binary(left, op, right);
        }
        Ok(left)
    }

    /// Prefix `+ - !`.
    fn unary(&mut self) -> Result<Spanned<Expr>, Diagnostic> {
        let start = self.current_span();
        let op = match self.peek().operator_id() {
            Some(OperatorId::Plus) => UnaryOp::Plus,
            Some(OperatorId::Minus) => UnaryOp::Neg,
            Some(OperatorId::Bang) => UnaryOp::Not,
            _ => return self.postfix(),
        };
        self.advance();
        let operand = self.nested(Self::unary)?;
        let span = start.merge(operand.span);
        Ok(Spanned::new(Expr::Unary(op, Box::new(operand)), span))
    }

    /// Postfix `++ --`, applied to a variable or array element.
    fn postfix(&mut self) -> Result<Spanned<Expr>, Diagnostic> {
        let expr = self.primary()?;
        let op = match self.peek().operator_id() {
            Some(OperatorId::PlusPlus) => UnaryOp::PostIncrement,
            Some(OperatorId::MinusMinus) => UnaryOp::PostDecrement,
            _ => return Ok(expr),
        };
        let op_span = self.advance().span;

        let target = match &expr.node {
            Expr::Access(name) => name,
            Expr::Index(name, _) => &name.node,
            _ => return Err(errors::invalid_increment_target(&op.to_string(), op_span)),
        };
        if self.symbols.lookup(target).is_some_and(|s| s.kind == SymbolKind::Constant) {
            return Err(errors::assign_to_constant(target, expr.span));
        }

        let span = expr.span.merge(op_span);
        Ok(Spanned::new(Expr::Unary(op, Box::new(expr)), span))
    }

    fn primary(&mut self) -> Result<Spanned<Expr>, Diagnostic> {
        let token = self.peek();
        let literal = match &token.kind {
            TokenKind::NumeralLit(n) => Some(Literal::Numeral(*n)),
            TokenKind::DecimalLit(x) => Some(Literal::Decimal(*x)),
            TokenKind::LetterLit(c) => Some(Literal::Letter(*c)),
            TokenKind::MissiveLit(s) => Some(Literal::Missive(s.clone())),
            TokenKind::Keyword(KeywordId::Pure) => Some(Literal::Veracity(true)),
            TokenKind::Keyword(KeywordId::Nay) => Some(Literal::Veracity(false)),
            TokenKind::Keyword(KeywordId::Nil) => Some(Literal::Nil),
            _ => None,
        };
        if let Some(literal) = literal {
            self.advance();
            return Ok(Spanned::new(Expr::Literal(literal), token.span));
        }

        match &token.kind {
            TokenKind::Ident(_) => {
                let name = self.identifier_spanned("an identifier")?;
                if self.check_punct(PunctuationId::LParen) {
                    self.call(name)
                } else if self.check_punct(PunctuationId::LBracket) {
                    self.index(name)
                } else {
                    self.lookup_variable(&name)?;
                    Ok(Spanned::new(Expr::Access(name.node), name.span))
                }
            }
            TokenKind::Punctuation(PunctuationId::LParen) => {
                self.advance();
                let inner = self.nested(Self::expression)?;
                self.expect_punct(PunctuationId::RParen, "')'")?;
                Ok(Spanned::new(inner.node, token.span.merge(self.previous_span())))
            }
            _ => Err(self.unexpected("an expression")),
        }
    }

    /// `callee ( [expr {, expr}] )`
    fn call(&mut self, callee: Spanned<Ident>) -> Result<Spanned<Expr>, Diagnostic> {
        match self.symbols.lookup(&callee.node) {
            None => return Err(errors::undeclared_function(&callee.node, callee.span)),
            Some(symbol) if !symbol.is_function() => {
                return Err(errors::not_a_function(&callee.node, callee.span));
            }
            Some(_) => {}
        }

        self.expect_punct(PunctuationId::LParen, "'('")?;
        let mut args = Vec::new();
        if !self.check_punct(PunctuationId::RParen) {
            loop {
                args.push(self.nested(Self::expression)?);
                if !self.match_punct(PunctuationId::Comma) {
                    break;
                }
            }
        }
        self.expect_punct(PunctuationId::RParen, "',' or ')' after arguments")?;

        let span = callee.span.merge(self.previous_span());
        Ok(Spanned::new(Expr::Call(callee, args), span))
    }

    /// `name [ expr ]`
    fn index(&mut self, name: Spanned<Ident>) -> Result<Spanned<Expr>, Diagnostic> {
        let symbol = self.lookup_variable(&name)?;
        if !symbol.is_array() {
            return Err(errors::not_an_array(&name.node, name.span));
        }

        self.expect_punct(PunctuationId::LBracket, "'['")?;
        let index = self.nested(Self::expression)?;
        self.check_numeric(&index, DataType::Numeral)?;
        self.expect_punct(PunctuationId::RBracket, "']'")?;

        let span = name.span.merge(self.previous_span());
        Ok(Spanned::new(Expr::Index(name, Box::new(index)), span))
    }
}
