/// Declaration parsing methods.
///
/// This chunk is responsible for parsing global items (variable declarations and function
/// prototypes/definitions) and the declarations that also appear inside blocks.
///
/// ## Notes
/// - Names enter the symbol table as soon as their declarator is complete, so an initializer cannot refer to the
///   name it initializes.
impl<'a> Parser<'a> {
    // ========================================================================
    // Declarations
    // ========================================================================

    /// A global declaration or a function header.
    fn global(&mut self) -> Result<Spanned<Global>, Diagnostic> {
        self.operators = 0;
        let is_function = self.peek().kind.data_type().is_some()
            && matches!(self.peek_nth(1).kind, TokenKind::Ident(_))
            && self.peek_nth(2).kind.is_punctuation(PunctuationId::LParen);

        if is_function {
            let function = self.function()?;
            Ok(Spanned::new(Global::Function(function.node), function.span))
        } else {
            let decl = self.declaration()?;
            Ok(Spanned::new(Global::Declaration(decl.node), decl.span))
        }
    }

    /// `Type name ( [Type name {, Type name}] ) ( ; | block )`
    fn function(&mut self) -> Result<Spanned<Function>, Diagnostic> {
        let start = self.current_span();
        let return_type = self.data_type()?;
        let name = self.identifier_spanned("a function name")?;
        self.symbols.define(
            &name.node,
            Symbol {
                ty: return_type.node,
                kind: SymbolKind::Function,
                span: name.span,
            },
        );

        self.expect_punct(PunctuationId::LParen, "'('")?;
        let mut params = Vec::new();
        if !self.check_punct(PunctuationId::RParen) {
            loop {
                params.push(self.param()?);
                if !self.match_punct(PunctuationId::Comma) {
                    break;
                }
            }
        }
        self.expect_punct(PunctuationId::RParen, "')' after parameters")?;

        let body = if self.match_punct(PunctuationId::Semicolon) {
            None
        } else {
            self.skip_newlines();
            if !self.check_punct(PunctuationId::LBrace) {
                return Err(self.unexpected("';' or '{' after function header"));
            }
            Some(self.block()?)
        };

        tracing::trace!(name = %name.node, params = params.len(), defined = body.is_some(), "function");
        Ok(Spanned::new(
            Function {
                return_type,
                name,
                params,
                body,
            },
            start.merge(self.previous_span()),
        ))
    }

    fn param(&mut self) -> Result<Param, Diagnostic> {
        let ty = self.data_type()?;
        if !ty.node.is_storable() {
            return Err(errors::void_variable(ty.span));
        }
        let name = self.identifier_spanned("a parameter name")?;
        self.symbols.define(
            &name.node,
            Symbol {
                ty: ty.node,
                kind: SymbolKind::Parameter,
                span: name.span,
            },
        );
        Ok(Param { ty, name })
    }

    /// `[Constant] Type binding {, binding} ;`
    fn declaration(&mut self) -> Result<Spanned<Declaration>, Diagnostic> {
        let start = self.current_span();
        let is_const = self.match_keyword(KeywordId::Constant);
        let ty = self.data_type()?;
        if !ty.node.is_storable() {
            return Err(errors::void_variable(ty.span));
        }

        let mut bindings = vec![self.binding(ty.node, is_const)?];
        while self.match_punct(PunctuationId::Comma) {
            bindings.push(self.binding(ty.node, is_const)?);
        }
        self.expect_semicolon()?;

        Ok(Spanned::new(
            Declaration { ty, is_const, bindings },
            start.merge(self.previous_span()),
        ))
    }

    /// `name ['[' size ']'] ['=' initializer]`
    fn binding(&mut self, ty: DataType, is_const: bool) -> Result<Binding, Diagnostic> {
        let name = self.identifier_spanned("a variable name")?;

        let size = if self.match_punct(PunctuationId::LBracket) {
            let size = self.array_size()?;
            self.expect_punct(PunctuationId::RBracket, "']' after array size")?;
            Some(size)
        } else {
            None
        };

        let init = if self.match_op(OperatorId::Eq) {
            Some(self.initializer(ty, size.as_ref().map(|s| s.node))?)
        } else {
            None
        };

        if is_const && init.is_none() {
            return Err(errors::constant_without_value(&name.node, name.span));
        }

        let kind = match &size {
            Some(size) => SymbolKind::Array(size.node),
            None if is_const => SymbolKind::Constant,
            None => SymbolKind::Variable,
        };
        self.symbols.define(&name.node, Symbol { ty, kind, span: name.span });

        Ok(Binding { name, size, init })
    }

    /// Value on the right of `=` for a target of type `ty`; `size` is set for arrays.
    fn initializer(&mut self, ty: DataType, size: Option<i64>) -> Result<Initializer, Diagnostic> {
        if !self.check_punct(PunctuationId::LBrace) {
            if size.is_some() {
                return Err(self.unexpected("'{' to start an array initializer"));
            }
            return Ok(Initializer::Expr(self.typed_value(ty)?));
        }

        let open = self.advance().span;
        let Some(size) = size else {
            return Err(errors::scalar_array_initializer(open));
        };

        let mut elements = Vec::new();
        self.skip_newlines();
        if !self.check_punct(PunctuationId::RBrace) {
            loop {
                elements.push(self.array_element(ty)?);
                self.skip_newlines();
                if !self.match_punct(PunctuationId::Comma) {
                    break;
                }
                self.skip_newlines();
            }
        }
        let close = self.expect_punct(PunctuationId::RBrace, "',' or '}'")?.span;

        if elements.len() as i64 > size {
            return Err(errors::too_many_elements(size, elements.len(), open.merge(close)));
        }
        Ok(Initializer::Array(elements))
    }
}
