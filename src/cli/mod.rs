//! CLI module for the Imperial front end
//!
//! This module provides the command-line interface: it reads one `.ic` file and runs the lexer, or the lexer and
//! the parser, over it.
//!
//! ## Usage
//!
//! - `imperial <FILE>` - Lex and parse (syntax mode)
//! - `imperial <FILE> --mode lexical` - Lex only
//! - `--verbose` prints the tokens (lexical) or the AST (syntax)
//! - `--fancy` prints diagnostics as graphical reports
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use thiserror::Error;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// How far to take the source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    /// Tokenize only
    Lexical,
    /// Tokenize, then parse
    #[default]
    Syntax,
}

/// How diagnostics are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStyle {
    /// `<Kind>: <message>` plus file/line and a caret excerpt
    Plain,
    /// Graphical `miette` report
    Fancy,
}

/// Lexer and parser front end for the Imperial Code language
#[derive(Parser, Debug)]
#[command(name = "imperial")]
#[command(version = VERSION)]
#[command(about = "Lexer and parser front end for the Imperial Code language", long_about = None)]
pub struct Cli {
    /// Source file to analyze
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Analysis to run
    #[arg(long, value_enum, default_value_t = Mode::Syntax)]
    pub mode: Mode,

    /// Print tokens (lexical mode) or the AST (syntax mode)
    #[arg(short, long)]
    pub verbose: bool,

    /// Print diagnostics as graphical reports
    #[arg(long)]
    pub fancy: bool,
}

impl Cli {
    pub fn report_style(&self) -> ReportStyle {
        if self.fancy { ReportStyle::Fancy } else { ReportStyle::Plain }
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run(cli: Cli) {
    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let style = cli.report_style();
    let file = cli.file.to_string_lossy();
    tracing::debug!(file = %file, mode = ?cli.mode, "running");

    match cli.mode {
        Mode::Lexical => commands::lex_file(&file, cli.verbose, style),
        Mode::Syntax => commands::parse_file(&file, cli.verbose, style),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_to_syntax_mode() {
        let cli = Cli::try_parse_from(["imperial", "main.ic"]).unwrap();
        assert_eq!(cli.mode, Mode::Syntax);
        assert!(!cli.verbose);
        assert_eq!(cli.report_style(), ReportStyle::Plain);
        assert_eq!(cli.file, PathBuf::from("main.ic"));
    }

    #[test]
    fn test_cli_parse_lexical_mode() {
        let cli = Cli::try_parse_from(["imperial", "main.ic", "--mode", "lexical", "-v"]).unwrap();
        assert_eq!(cli.mode, Mode::Lexical);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_parse_fancy() {
        let cli = Cli::try_parse_from(["imperial", "--fancy", "main.ic"]).unwrap();
        assert_eq!(cli.report_style(), ReportStyle::Fancy);
    }

    #[test]
    fn test_cli_requires_file() {
        assert!(Cli::try_parse_from(["imperial"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["imperial", "main.ic", "--mode", "semantic"]).is_err());
    }

    #[test]
    fn test_missing_file_is_failure() {
        let cli = Cli::try_parse_from(["imperial", "does/not/exist.ic"]).unwrap();
        let err = execute(cli).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("does/not/exist.ic"));
    }
}
