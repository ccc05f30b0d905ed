//! Diagnostics produced by the lexer and parser.
//!
//! A [`Diagnostic`] owns its message and copies its span, so it outlives the source buffer it was produced from. It
//! renders two ways:
//!
//! - [`Diagnostic::render`]: the plain format, `"<Kind>: <message>\nFile <name>, line <n>"` followed by a caret excerpt;
//! - through [`miette`], since `Diagnostic` implements [`miette::Diagnostic`] with one label over its span.
//!
//! Message wording lives in the [`errors`] catalog.

use std::fmt;

use miette::{LabeledSpan, SourceSpan};
use thiserror::Error;

use crate::span::{SourceFile, Span};

/// What went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    IllegalCharacter,
    IllegalKeyword,
    IdentifierTooLong,
    IllegalDelimiter,
    NumeralTooLong,
    DecimalOutOfRange,
    InvalidSyntax,
    UnclosedLiteral,
}

impl DiagnosticKind {
    /// Display name used as the first word(s) of a rendered diagnostic.
    pub fn name(self) -> &'static str {
        match self {
            Self::IllegalCharacter => "Illegal Character",
            Self::IllegalKeyword => "Illegal Keyword",
            Self::IdentifierTooLong => "Identifier Too Long",
            Self::IllegalDelimiter => "Illegal Delimiter",
            Self::NumeralTooLong => "Numeral Too Long",
            Self::DecimalOutOfRange => "Decimal Out Of Range",
            Self::InvalidSyntax => "Invalid Syntax",
            Self::UnclosedLiteral => "Unclosed Literal",
        }
    }

    /// Stable code used by `miette` reports.
    pub fn code(self) -> &'static str {
        match self {
            Self::IllegalCharacter => "imperial::illegal_character",
            Self::IllegalKeyword => "imperial::illegal_keyword",
            Self::IdentifierTooLong => "imperial::identifier_too_long",
            Self::IllegalDelimiter => "imperial::illegal_delimiter",
            Self::NumeralTooLong => "imperial::numeral_too_long",
            Self::DecimalOutOfRange => "imperial::decimal_out_of_range",
            Self::InvalidSyntax => "imperial::invalid_syntax",
            Self::UnclosedLiteral => "imperial::unclosed_literal",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A located error report.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}: {message}")]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub span: Span,
    pub message: String,
    /// Suggestions shown as `help` in rich reports. Not part of the plain rendering.
    pub hints: Vec<String>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            span,
            message: message.into(),
            hints: Vec::new(),
        }
    }

    pub fn syntax(message: impl Into<String>, span: Span) -> Self {
        Self::new(DiagnosticKind::InvalidSyntax, message, span)
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    /// Render the plain two-part format followed by a caret excerpt of the spanned lines.
    ///
    /// ## Examples
    /// ```rust
    /// use imperial_syntax::diagnostics::{Diagnostic, DiagnosticKind};
    /// use imperial_syntax::span::{Position, SourceFile, Span};
    ///
    /// let file = SourceFile::new("demo.ic", "Numeral $;");
    /// let span = Span::new(Position::new(8, 0, 8), Position::new(9, 0, 9));
    /// let diag = Diagnostic::new(DiagnosticKind::IllegalCharacter, "'$'", span);
    /// assert_eq!(
    ///     diag.render(&file),
    ///     "Illegal Character: '$'\nFile demo.ic, line 1\nNumeral $;\n        ^"
    /// );
    /// ```
    pub fn render(&self, source: &SourceFile) -> String {
        let mut out = format!(
            "{}: {}\nFile {}, line {}",
            self.kind,
            self.message,
            source.name(),
            self.span.start.line + 1
        );
        let excerpt = caret_excerpt(source, self.span);
        if !excerpt.is_empty() {
            out.push('\n');
            out.push_str(&excerpt);
        }
        out
    }
}

/// Underline `span` with carets, one text line plus one caret line per source line it touches.
///
/// Tabs are stripped from the excerpt, so caret columns skip them too.
fn caret_excerpt(source: &SourceFile, span: Span) -> String {
    let first = span.start.line;
    let last = span.end.line.max(first);
    let mut lines = Vec::new();

    for line in first..=last {
        let text = source.line_text(line);
        let width = text.chars().count();
        let col_start = if line == first { span.start.column } else { 0 };
        let col_end = if line == last { span.end.column } else { width };
        let col_start = col_start - tabs_before(text, col_start);
        let col_end = col_end - tabs_before(text, col_end);
        let carets = col_end.saturating_sub(col_start).max(1);

        lines.push(text.replace('\t', ""));
        lines.push(format!("{}{}", " ".repeat(col_start), "^".repeat(carets)));
    }

    lines.join("\n")
}

/// Number of tabs among the first `column` characters of `text`.
fn tabs_before(text: &str, column: usize) -> usize {
    text.chars().take(column).filter(|&c| c == '\t').count()
}

impl miette::Diagnostic for Diagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        if self.hints.is_empty() {
            None
        } else {
            Some(Box::new(self.hints.join("\n")))
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = SourceSpan::from(self.span.start.offset..self.span.end.offset);
        let label = LabeledSpan::new_with_span(Some(self.message.clone()), span);
        Some(Box::new(std::iter::once(label)))
    }
}

/// Catalog of every diagnostic the front end emits.
pub mod errors {
    use imperial_core::lang::limits;
    use imperial_core::lang::types::DataType;

    use super::*;

    pub fn illegal_character(c: char, span: Span) -> Diagnostic {
        Diagnostic::new(DiagnosticKind::IllegalCharacter, format!("'{}'", c), span)
    }

    pub fn unknown_escape(c: char, span: Span) -> Diagnostic {
        Diagnostic::new(DiagnosticKind::IllegalCharacter, format!("unknown escape sequence '\\{}'", c), span)
            .with_hint("valid escapes are \\n, \\t, \\\\, \\\" and \\'")
    }

    pub fn illegal_keyword(text: &str, span: Span) -> Diagnostic {
        Diagnostic::new(DiagnosticKind::IllegalKeyword, format!("'{}'", text), span)
            .with_hint("keywords start with an uppercase letter; identifiers start with a lowercase one")
    }

    pub fn identifier_too_long(name: &str, span: Span) -> Diagnostic {
        Diagnostic::new(DiagnosticKind::IdentifierTooLong, format!("'{}'", name), span).with_hint(format!(
            "identifiers are limited to {} characters",
            limits::MAX_IDENTIFIER_LEN
        ))
    }

    pub fn illegal_delimiter(c: char, after: &str, span: Span) -> Diagnostic {
        Diagnostic::new(
            DiagnosticKind::IllegalDelimiter,
            format!("unexpected delimiter '{}' after {}", c, after),
            span,
        )
    }

    pub fn numeral_too_long(digits: &str, span: Span) -> Diagnostic {
        Diagnostic::new(DiagnosticKind::NumeralTooLong, digits, span).with_hint(format!(
            "numerals are limited to {} digits",
            limits::MAX_NUMERAL_DIGITS
        ))
    }

    pub fn decimal_out_of_range(digits: &str, span: Span) -> Diagnostic {
        Diagnostic::new(DiagnosticKind::DecimalOutOfRange, digits, span).with_hint(format!(
            "decimals are limited to {} integer and {} fractional digits",
            limits::MAX_DECIMAL_INT_DIGITS,
            limits::MAX_DECIMAL_FRAC_DIGITS
        ))
    }

    pub fn unclosed_literal(expected: &str, span: Span) -> Diagnostic {
        Diagnostic::new(DiagnosticKind::UnclosedLiteral, format!("expected {}", expected), span)
    }

    pub fn empty_letter(span: Span) -> Diagnostic {
        Diagnostic::new(DiagnosticKind::UnclosedLiteral, "expected a character before closing \"'\"", span)
    }

    pub fn expected(what: &str, found: &str, span: Span) -> Diagnostic {
        Diagnostic::syntax(format!("expected {}, found {}", what, found), span)
    }

    pub fn undeclared_variable(name: &str, span: Span) -> Diagnostic {
        Diagnostic::syntax(format!("undeclared variable '{}'", name), span)
    }

    pub fn undeclared_function(name: &str, span: Span) -> Diagnostic {
        Diagnostic::syntax(format!("undeclared function '{}'", name), span)
    }

    pub fn not_a_function(name: &str, span: Span) -> Diagnostic {
        Diagnostic::syntax(format!("'{}' is not a function", name), span)
    }

    pub fn function_as_value(name: &str, span: Span) -> Diagnostic {
        Diagnostic::syntax(format!("function '{}' used as a value", name), span)
            .with_hint(format!("call it instead: {}(...)", name))
    }

    pub fn type_mismatch(expected: DataType, found: &str, span: Span) -> Diagnostic {
        Diagnostic::syntax(format!("type mismatch: expected {}, found {}", expected, found), span)
    }

    pub fn multiple_entry_blocks(span: Span) -> Diagnostic {
        Diagnostic::syntax("multiple entry blocks are not allowed", span)
    }

    pub fn missing_entry_block(span: Span) -> Diagnostic {
        Diagnostic::syntax("missing entry block: expected 'Embark'", span).with_hint("add an entry block: Embark() { }")
    }

    pub fn nesting_too_deep(span: Span) -> Diagnostic {
        Diagnostic::syntax(
            format!("nesting too deep: more than {} levels", limits::MAX_NESTING_DEPTH),
            span,
        )
    }

    pub fn expression_too_long(span: Span) -> Diagnostic {
        Diagnostic::syntax(
            format!("expression too long: more than {} operators", limits::MAX_EXPRESSION_OPERATORS),
            span,
        )
    }

    pub fn void_variable(span: Span) -> Diagnostic {
        Diagnostic::syntax("'Void' is only valid as a function return type", span)
    }

    pub fn constant_without_value(name: &str, span: Span) -> Diagnostic {
        Diagnostic::syntax(format!("constant '{}' must be initialized", name), span)
    }

    pub fn assign_to_constant(name: &str, span: Span) -> Diagnostic {
        Diagnostic::syntax(format!("cannot assign to constant '{}'", name), span)
    }

    pub fn not_an_array(name: &str, span: Span) -> Diagnostic {
        Diagnostic::syntax(format!("'{}' is not an array", name), span)
    }

    pub fn scalar_array_initializer(span: Span) -> Diagnostic {
        Diagnostic::syntax("'{ ... }' initializes arrays only", span)
    }

    pub fn invalid_increment_target(op: &str, span: Span) -> Diagnostic {
        Diagnostic::syntax(format!("'{}' can only follow a variable", op), span)
    }

    pub fn invalid_array_size(span: Span) -> Diagnostic {
        Diagnostic::syntax("array size must be a positive Numeral literal", span)
    }

    pub fn too_many_elements(size: i64, found: usize, span: Span) -> Diagnostic {
        Diagnostic::syntax(
            format!("too many array elements: declared {}, found {}", size, found),
            span,
        )
    }

    pub fn duplicate_default(span: Span) -> Diagnostic {
        Diagnostic::syntax("duplicate 'Usual' label in 'Shift'", span)
    }

    pub fn invalid_switch_subject(ty: DataType, span: Span) -> Diagnostic {
        Diagnostic::syntax(format!("cannot 'Shift' on a value of type {}", ty), span)
    }

    pub fn dangling_else(span: Span) -> Diagnostic {
        Diagnostic::syntax("'Or' without a preceding 'Thou'", span)
    }
}
