/// Parse a token stream into an AST [`Program`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `tokens`: Token stream produced by `imperial_syntax::lexer`.
///
/// ## Errors
/// Returns the first syntax [`Diagnostic`]; the parser does not recover.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<Program, Diagnostic> {
    let mut parser = Parser::new(tokens);
    let result = parser.parse();
    match &result {
        Ok(program) => tracing::debug!(
            globals = program.globals.len(),
            symbols = parser.symbols().len(),
            "parsed program"
        ),
        Err(diag) => tracing::debug!(error = %diag, "parse failed"),
    }
    result
}

/// Lex and parse `source` in one step.
///
/// ## Errors
/// Returns every lexical diagnostic when lexing fails, otherwise the single syntax diagnostic.
pub fn parse_source(source: &str) -> Result<Program, Vec<Diagnostic>> {
    let tokens = crate::lexer::lex(source)?;
    parse(&tokens).map_err(|diag| vec![diag])
}
