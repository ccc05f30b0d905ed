/// Inline type checks.
///
/// The parser validates initializers and assignment values against the declared type of their target as soon as
/// they are parsed:
///
/// - `Numeral` accepts arithmetic over numerals, `Numeral` variables and calls returning `Numeral`.
/// - `Decimal` additionally accepts decimal leaves.
/// - `Letter`, `Missive` and `Veracity` accept a single literal of their own kind.
impl<'a> Parser<'a> {
    // ========================================================================
    // Type checks
    // ========================================================================

    /// Parse a scalar value for a target of type `ty`.
    fn typed_value(&mut self, ty: DataType) -> Result<Spanned<Expr>, Diagnostic> {
        if ty.is_numeric() {
            let value = self.expression()?;
            self.check_numeric(&value, ty)?;
            return Ok(value);
        }
        if !ty.is_storable() {
            return Err(errors::void_variable(self.current_span()));
        }
        let literal = self.literal_of(ty)?;
        Ok(Spanned::new(Expr::Literal(literal.node), literal.span))
    }

    /// Check that `expr` only combines values that fit a `ty` target (`Numeral` or `Decimal`).
    fn check_numeric(&self, expr: &Spanned<Expr>, ty: DataType) -> Result<(), Diagnostic> {
        let found = match &expr.node {
            Expr::Literal(Literal::Nil) => return Err(errors::type_mismatch(ty, "Nil", expr.span)),
            Expr::Literal(literal) => literal.data_type(),
            Expr::Access(name) => match self.symbols.lookup(name) {
                Some(symbol) => symbol.ty,
                None => return Ok(()),
            },
            Expr::Index(name, _) | Expr::Call(name, _) => match self.symbols.lookup(&name.node) {
                Some(symbol) => symbol.ty,
                None => return Ok(()),
            },
            Expr::Unary(UnaryOp::Not, _) => {
                return Err(errors::type_mismatch(ty, "a logical expression", expr.span));
            }
            Expr::Unary(_, operand) => return self.check_numeric(operand, ty),
            Expr::Binary(lhs, op, rhs) if op.is_arithmetic() => {
                self.check_numeric(lhs, ty)?;
                return self.check_numeric(rhs, ty);
            }
            Expr::Binary(_, BinaryOp::And | BinaryOp::Or, _) => {
                return Err(errors::type_mismatch(ty, "a logical expression", expr.span));
            }
            Expr::Binary(..) => return Err(errors::type_mismatch(ty, "a comparison", expr.span)),
        };

        if numeric_fits(found, ty) {
            Ok(())
        } else {
            Err(errors::type_mismatch(ty, found.as_str(), expr.span))
        }
    }

    /// A single literal of a non-numeric type.
    fn literal_of(&mut self, ty: DataType) -> Result<Spanned<Literal>, Diagnostic> {
        let token = self.peek();
        let literal = match (ty, &token.kind) {
            (DataType::Letter, TokenKind::LetterLit(c)) => Literal::Letter(*c),
            (DataType::Missive, TokenKind::MissiveLit(s)) => Literal::Missive(s.clone()),
            (DataType::Veracity, TokenKind::Keyword(KeywordId::Pure)) => Literal::Veracity(true),
            (DataType::Veracity, TokenKind::Keyword(KeywordId::Nay)) => Literal::Veracity(false),
            (DataType::Veracity, TokenKind::Keyword(KeywordId::Nil)) => Literal::Nil,
            (_, kind) => return Err(errors::type_mismatch(ty, &found_kind(kind), token.span)),
        };
        self.advance();
        Ok(Spanned::new(literal, token.span))
    }

    /// Element of an array initializer or a `Shift` case label. Numeric elements may carry a leading `-`.
    fn array_element(&mut self, ty: DataType) -> Result<Spanned<Literal>, Diagnostic> {
        if !ty.is_numeric() {
            return self.literal_of(ty);
        }

        let start = self.current_span();
        let negative = self.match_op(OperatorId::Minus);
        let token = self.peek();
        let literal = match &token.kind {
            TokenKind::NumeralLit(n) => Literal::Numeral(if negative { -n } else { *n }),
            TokenKind::DecimalLit(x) if ty == DataType::Decimal => Literal::Decimal(if negative { -x } else { *x }),
            kind => return Err(errors::type_mismatch(ty, &found_kind(kind), token.span)),
        };
        self.advance();
        Ok(Spanned::new(literal, start.merge(token.span)))
    }

    /// Resolve a name used as a value.
    fn lookup_variable(&self, name: &Spanned<Ident>) -> Result<Symbol, Diagnostic> {
        match self.symbols.lookup(&name.node) {
            None => Err(errors::undeclared_variable(&name.node, name.span)),
            Some(symbol) if symbol.is_function() => Err(errors::function_as_value(&name.node, name.span)),
            Some(symbol) => Ok(*symbol),
        }
    }
}

/// `found` may be stored in a `target` of a numeric type.
fn numeric_fits(found: DataType, target: DataType) -> bool {
    found == DataType::Numeral || (found == DataType::Decimal && target == DataType::Decimal)
}

/// How a token reads in a type-mismatch message: the type of a literal, the token itself otherwise.
fn found_kind(kind: &TokenKind) -> String {
    match kind {
        TokenKind::NumeralLit(_) => DataType::Numeral.to_string(),
        TokenKind::DecimalLit(_) => DataType::Decimal.to_string(),
        TokenKind::LetterLit(_) => DataType::Letter.to_string(),
        TokenKind::MissiveLit(_) => DataType::Missive.to_string(),
        TokenKind::Keyword(KeywordId::Pure | KeywordId::Nay) => DataType::Veracity.to_string(),
        TokenKind::Ident(name) => format!("variable '{}'", name),
        other => other.describe(),
    }
}
