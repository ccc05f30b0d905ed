//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;

use miette::{NamedSource, Report};

use crate::diagnostics::Diagnostic;
use crate::lexer;
use crate::parser;
use crate::span::SourceFile;

use super::{CliError, CliResult, ExitCode, ReportStyle};

/// Maximum source file size (10 MB).
///
/// Files larger than this are rejected before lexing.
const MAX_SOURCE_SIZE: u64 = 10 * 1024 * 1024;

/// Read a source file with size validation.
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE`
pub fn read_source(file_path: &str) -> CliResult<SourceFile> {
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    let text = fs::read_to_string(file_path)
        .map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))?;
    Ok(SourceFile::new(file_path, text))
}

/// Render diagnostics in the requested style, separated by blank lines.
pub fn render_diagnostics(source: &SourceFile, diagnostics: &[Diagnostic], style: ReportStyle) -> String {
    let rendered: Vec<String> = diagnostics
        .iter()
        .map(|diag| match style {
            ReportStyle::Plain => diag.render(source),
            ReportStyle::Fancy => {
                let report = Report::new(diag.clone())
                    .with_source_code(NamedSource::new(source.name(), source.text().to_string()));
                format!("{:?}", report)
            }
        })
        .collect();
    rendered.join("\n\n")
}

/// Tokenize a file, printing tokens when `verbose`.
pub fn lex_file(file_path: &str, verbose: bool, style: ReportStyle) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let lexed = lexer::tokenize(source.name(), source.text());

    if verbose {
        for tok in &lexed.tokens {
            println!("{:>7}  {}", tok.span.start.to_string(), tok.kind);
        }
    }

    if lexed.has_errors() {
        return Err(CliError::failure(render_diagnostics(&source, &lexed.diagnostics, style)));
    }
    Ok(ExitCode::SUCCESS)
}

/// Tokenize and parse a file, printing the AST when `verbose`.
pub fn parse_file(file_path: &str, verbose: bool, style: ReportStyle) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = lexer::tokenize(source.name(), source.text())
        .into_result()
        .map_err(|diags| CliError::failure(render_diagnostics(&source, &diags, style)))?;

    match parser::parse(&tokens) {
        Ok(ast) => {
            if verbose {
                println!("{:#?}", ast);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(diag) => Err(CliError::failure(render_diagnostics(&source, &[diag], style))),
    }
}
