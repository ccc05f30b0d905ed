/// Statement parsing methods.
///
/// This chunk contains block parsing and every statement form: declarations, assignments, control flow, jumps,
/// and the `Seek`/`Emit` I/O statements.
///
/// ## Notes
/// - Newlines are skipped between statements only; inside a statement they are significant and usually produce an
///   "expected ..." diagnostic.
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    /// `{ statement* }`
    fn block(&mut self) -> Result<Block, Diagnostic> {
        self.skip_newlines();
        self.expect_punct(PunctuationId::LBrace, "'{'")?;
        self.nested(Self::block_body)
    }

    /// Statements up to and including the closing `}`.
    fn block_body(&mut self) -> Result<Block, Diagnostic> {
        let mut body = Vec::new();
        loop {
            self.skip_newlines();
            if self.match_punct(PunctuationId::RBrace) {
                break;
            }
            if self.is_at_end() {
                return Err(self.unexpected("'}'"));
            }
            body.push(self.statement()?);
        }
        Ok(body)
    }

    fn statement(&mut self) -> Result<Spanned<Statement>, Diagnostic> {
        let start = self.current_span();
        self.operators = 0;

        let stmt = match self.peek().keyword_id() {
            Some(KeywordId::Constant) => Statement::Declaration(self.declaration()?.node),
            Some(id) if DataType::from_keyword(id).is_some() => Statement::Declaration(self.declaration()?.node),
            Some(KeywordId::Thou) => Statement::If(self.if_stmt()?),
            Some(KeywordId::Or) => return Err(errors::dangling_else(start)),
            Some(KeywordId::Until) => Statement::While(self.while_stmt()?),
            Some(KeywordId::Per) => Statement::For(self.for_stmt()?),
            Some(KeywordId::Act) => Statement::DoWhile(self.do_while_stmt()?),
            Some(KeywordId::Shift) => Statement::Switch(self.nested(Self::switch_stmt)?),
            Some(KeywordId::Halt) => {
                self.advance();
                self.expect_semicolon()?;
                Statement::Break
            }
            Some(KeywordId::Extend) => {
                self.advance();
                self.expect_semicolon()?;
                Statement::Continue
            }
            Some(KeywordId::Recede) => {
                self.advance();
                let value = if self.check_punct(PunctuationId::Semicolon) {
                    None
                } else {
                    Some(self.expression()?)
                };
                self.expect_semicolon()?;
                Statement::Return(value)
            }
            Some(KeywordId::Seek) => Statement::Input(self.input_stmt()?),
            Some(KeywordId::Emit) => Statement::Output(self.output_stmt()?),
            Some(KeywordId::Pure | KeywordId::Nay | KeywordId::Nil) | None => {
                let stmt = self.simple_statement()?;
                self.expect_semicolon()?;
                stmt
            }
            Some(_) => return Err(self.unexpected("a statement")),
        };

        Ok(Spanned::new(stmt, start.merge(self.previous_span())))
    }

    /// Assignment or bare expression, without the trailing `;`.
    fn simple_statement(&mut self) -> Result<Statement, Diagnostic> {
        if self.at_assignment() {
            self.assignment()
        } else {
            Ok(Statement::Expr(self.expression()?))
        }
    }

    /// `target ['[' index ']'] = value` or `target op= value`
    fn assignment(&mut self) -> Result<Statement, Diagnostic> {
        let target = self.identifier_spanned("a variable name")?;
        let symbol = self.lookup_variable(&target)?;
        if symbol.kind == SymbolKind::Constant {
            return Err(errors::assign_to_constant(&target.node, target.span));
        }

        let index = if self.check_punct(PunctuationId::LBracket) {
            if !symbol.is_array() {
                return Err(errors::not_an_array(&target.node, target.span));
            }
            self.advance();
            let index = self.expression()?;
            self.check_numeric(&index, DataType::Numeral)?;
            self.expect_punct(PunctuationId::RBracket, "']'")?;
            Some(index)
        } else {
            None
        };

        let compound = if index.is_none() { self.compound_op() } else { None };
        if let Some(op) = compound {
            if !symbol.ty.is_numeric() || symbol.is_array() {
                return Err(errors::type_mismatch(DataType::Numeral, symbol.ty.as_str(), target.span));
            }
            let value = self.expression()?;
            self.check_numeric(&value, symbol.ty)?;
            return Ok(Statement::CompoundAssign(CompoundAssignStmt { target, op, value }));
        }

        self.expect_op(OperatorId::Eq, "'='")?;
        let size = if index.is_none() { symbol.array_size() } else { None };
        let value = self.initializer(symbol.ty, size)?;
        Ok(Statement::Assign(AssignStmt { target, index, value }))
    }

    /// `( expr )`
    fn condition(&mut self) -> Result<Spanned<Expr>, Diagnostic> {
        self.expect_punct(PunctuationId::LParen, "'('")?;
        let condition = self.expression()?;
        self.expect_punct(PunctuationId::RParen, "')'")?;
        Ok(condition)
    }

    /// `Thou (cond) block [Or Thou ... | Or block]`
    fn if_stmt(&mut self) -> Result<IfStmt, Diagnostic> {
        self.expect_keyword(KeywordId::Thou, "'Thou'")?;
        let condition = self.condition()?;
        let body = self.block()?;
        let else_branch = self.else_branch()?;
        Ok(IfStmt {
            condition: Some(condition),
            body,
            else_branch,
        })
    }

    fn else_branch(&mut self) -> Result<Option<Box<Spanned<IfStmt>>>, Diagnostic> {
        // `Or` may start on a later line than the closing brace.
        let mut ahead = 0;
        while matches!(self.peek_nth(ahead).kind, TokenKind::Newline) {
            ahead += 1;
        }
        if !self.peek_nth(ahead).kind.is_keyword(KeywordId::Or) {
            return Ok(None);
        }

        self.skip_newlines();
        let start = self.advance().span;
        self.skip_newlines();
        let branch = if self.check_keyword(KeywordId::Thou) {
            self.nested(Self::if_stmt)?
        } else {
            IfStmt {
                condition: None,
                body: self.block()?,
                else_branch: None,
            }
        };
        Ok(Some(Box::new(Spanned::new(branch, start.merge(self.previous_span())))))
    }

    /// `Until (cond) block`
    fn while_stmt(&mut self) -> Result<WhileStmt, Diagnostic> {
        self.expect_keyword(KeywordId::Until, "'Until'")?;
        let condition = self.condition()?;
        let body = self.block()?;
        Ok(WhileStmt { condition, body })
    }

    /// `Act block Until (cond) ;`
    fn do_while_stmt(&mut self) -> Result<DoWhileStmt, Diagnostic> {
        self.expect_keyword(KeywordId::Act, "'Act'")?;
        let body = self.block()?;
        self.skip_newlines();
        self.expect_keyword(KeywordId::Until, "'Until' after 'Act' block")?;
        let condition = self.condition()?;
        self.expect_semicolon()?;
        Ok(DoWhileStmt { body, condition })
    }

    /// `Per ( [init] ; [cond] ; [update] ) block`
    fn for_stmt(&mut self) -> Result<ForStmt, Diagnostic> {
        self.expect_keyword(KeywordId::Per, "'Per'")?;
        self.expect_punct(PunctuationId::LParen, "'(' after 'Per'")?;

        let init = if self.match_punct(PunctuationId::Semicolon) {
            None
        } else {
            let start = self.current_span();
            let stmt = if self.at_declaration_start() {
                Statement::Declaration(self.declaration()?.node)
            } else {
                let stmt = self.simple_statement()?;
                self.expect_semicolon()?;
                stmt
            };
            Some(Box::new(Spanned::new(stmt, start.merge(self.previous_span()))))
        };

        let condition = if self.check_punct(PunctuationId::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.expect_semicolon()?;

        let update = if self.check_punct(PunctuationId::RParen) {
            None
        } else {
            let start = self.current_span();
            let stmt = self.simple_statement()?;
            Some(Box::new(Spanned::new(stmt, start.merge(self.previous_span()))))
        };
        self.expect_punct(PunctuationId::RParen, "')'")?;

        let body = self.block()?;
        Ok(ForStmt {
            init,
            condition,
            update,
            body,
        })
    }

    /// `Shift (ident) { Opt literal: stmts* ... [Usual: stmts*] }`
    fn switch_stmt(&mut self) -> Result<SwitchStmt, Diagnostic> {
        self.expect_keyword(KeywordId::Shift, "'Shift'")?;
        self.expect_punct(PunctuationId::LParen, "'(' after 'Shift'")?;
        let subject = self.identifier_spanned("a variable")?;
        let symbol = self.lookup_variable(&subject)?;
        if symbol.is_array() {
            return Err(errors::expected(
                "a scalar variable",
                &format!("array '{}'", subject.node),
                subject.span,
            ));
        }
        if !symbol.ty.is_switchable() {
            return Err(errors::invalid_switch_subject(symbol.ty, subject.span));
        }
        self.expect_punct(PunctuationId::RParen, "')'")?;
        self.skip_newlines();
        self.expect_punct(PunctuationId::LBrace, "'{'")?;

        let mut cases = Vec::new();
        let mut default = None;
        loop {
            self.skip_newlines();
            if self.match_punct(PunctuationId::RBrace) {
                break;
            }
            if self.match_keyword(KeywordId::Opt) {
                let value = self.array_element(symbol.ty)?;
                self.expect_punct(PunctuationId::Colon, "':' after case value")?;
                let body = self.case_body()?;
                cases.push(SwitchCase { value, body });
            } else if self.check_keyword(KeywordId::Usual) {
                let usual = self.advance().span;
                if default.is_some() {
                    return Err(errors::duplicate_default(usual));
                }
                self.expect_punct(PunctuationId::Colon, "':' after 'Usual'")?;
                default = Some(self.case_body()?);
            } else {
                return Err(self.unexpected("'Opt', 'Usual' or '}'"));
            }
        }

        Ok(SwitchStmt {
            subject,
            cases,
            default,
        })
    }

    /// Statements up to the next `Opt`, `Usual` or closing brace.
    fn case_body(&mut self) -> Result<Block, Diagnostic> {
        let mut body = Vec::new();
        loop {
            self.skip_newlines();
            if self.is_at_end()
                || self.check_keyword(KeywordId::Opt)
                || self.check_keyword(KeywordId::Usual)
                || self.check_punct(PunctuationId::RBrace)
            {
                break;
            }
            body.push(self.statement()?);
        }
        Ok(body)
    }

    /// `Seek ( "format" {, &target} ) ;`
    fn input_stmt(&mut self) -> Result<InputStmt, Diagnostic> {
        self.expect_keyword(KeywordId::Seek, "'Seek'")?;
        self.expect_punct(PunctuationId::LParen, "'(' after 'Seek'")?;
        let format = self.missive_literal("a format Missive")?;

        let mut targets = Vec::new();
        while self.match_punct(PunctuationId::Comma) {
            self.expect_op(OperatorId::Amp, "'&' before an input target")?;
            let target = self.identifier_spanned("a variable name")?;
            let symbol = self.lookup_variable(&target)?;
            if symbol.kind == SymbolKind::Constant {
                return Err(errors::assign_to_constant(&target.node, target.span));
            }
            targets.push(target);
        }

        self.expect_punct(PunctuationId::RParen, "',' or ')'")?;
        self.expect_semicolon()?;
        Ok(InputStmt { format, targets })
    }

    /// `Emit ( "format" | ident {, expr} ) ;`
    fn output_stmt(&mut self) -> Result<OutputStmt, Diagnostic> {
        self.expect_keyword(KeywordId::Emit, "'Emit'")?;
        self.expect_punct(PunctuationId::LParen, "'(' after 'Emit'")?;

        let token = self.peek();
        let format = match &token.kind {
            TokenKind::MissiveLit(text) => {
                self.advance();
                Spanned::new(OutputFormat::Missive(text.clone()), token.span)
            }
            TokenKind::Ident(_) => {
                let name = self.identifier_spanned("a variable name")?;
                self.lookup_variable(&name)?;
                Spanned::new(OutputFormat::Variable(name.node), name.span)
            }
            _ => return Err(self.unexpected("a format Missive or a variable")),
        };

        let mut args = Vec::new();
        while self.match_punct(PunctuationId::Comma) {
            args.push(self.expression()?);
        }

        self.expect_punct(PunctuationId::RParen, "',' or ')'")?;
        self.expect_semicolon()?;
        Ok(OutputStmt { format, args })
    }
}
