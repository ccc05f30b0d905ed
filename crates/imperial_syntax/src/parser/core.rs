/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type and its top-level `parse()` entrypoint: globals and function definitions
/// in any order, plus exactly one `Embark` entry block.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single "god file".
/// Fallback end-of-input token for streams that do not end in `Eof`.
static EOF_TOKEN: Token = Token {
    kind: TokenKind::Eof,
    span: Span::point(Position::new(0, 0, 0)),
};

/// Parser state.
///
/// ## Notes
/// - Space and comment tokens are dropped up front; newline tokens stay and are skipped at statement and block
///   boundaries.
/// - Nesting (blocks, parentheses, prefix operators, call arguments) is capped at `MAX_NESTING_DEPTH` and binary
///   operators per statement at `MAX_EXPRESSION_OPERATORS`, so deep input fails with a diagnostic instead of
///   exhausting the stack.
/// - The parser does not recover: every parsing method returns `Result<_, Diagnostic>` and `?` carries the first
///   error straight out of [`Parser::parse`].
pub struct Parser<'a> {
    tokens: Vec<&'a Token>,
    pos: usize,
    eof: &'a Token,
    symbols: SymbolTable,
    depth: usize,
    operators: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `imperial_syntax::lexer`.
    pub fn new(tokens: &'a [Token]) -> Self {
        let eof = match tokens.last() {
            Some(last) if last.kind == TokenKind::Eof => last,
            _ => &EOF_TOKEN,
        };
        Self {
            tokens: tokens.iter().filter(|t| !t.kind.is_trivia()).collect(),
            pos: 0,
            eof,
            symbols: SymbolTable::new(),
            depth: 0,
            operators: 0,
        }
    }

    /// Names declared so far.
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Parse the entire token stream into a [`Program`].
    ///
    /// ## Errors
    /// Returns the first [`Diagnostic`] encountered.
    pub fn parse(&mut self) -> Result<Program, Diagnostic> {
        let mut globals = Vec::new();
        let mut entry: Option<Spanned<EntryBlock>> = None;

        loop {
            self.skip_newlines();
            if self.is_at_end() {
                break;
            }

            if self.check_keyword(KeywordId::Embark) {
                if entry.is_some() {
                    return Err(errors::multiple_entry_blocks(self.current_span()));
                }
                entry = Some(self.entry_block()?);
            } else if self.at_declaration_start() {
                globals.push(self.global()?);
            } else {
                return Err(errors::expected(
                    "a declaration, function or 'Embark' block",
                    &self.peek().kind.describe(),
                    self.current_span(),
                ));
            }
        }

        let entry = entry.ok_or_else(|| errors::missing_entry_block(self.current_span()))?;
        Ok(Program { globals, entry })
    }

    /// `Embark ( ) { ... }`
    fn entry_block(&mut self) -> Result<Spanned<EntryBlock>, Diagnostic> {
        let start = self.expect_keyword(KeywordId::Embark, "'Embark'")?.span;
        self.expect_punct(PunctuationId::LParen, "'(' after 'Embark'")?;
        self.expect_punct(PunctuationId::RParen, "')'")?;
        let body = self.block()?;
        Ok(Spanned::new(EntryBlock { body }, start.merge(self.previous_span())))
    }
}
