//! End-to-end scenarios: a small source text, the exact token sequence or diagnostic it must produce.

use imperial::ast::{Expr, Global, Initializer, Literal};
use imperial::diagnostics::DiagnosticKind;
use imperial::lang::types::DataType;
use imperial::lexer::{TokenKind, tokenize};
use imperial::parser::parse;

fn kinds(source: &str) -> Vec<String> {
    tokenize("scenario.ic", source)
        .tokens
        .iter()
        .map(|t| t.kind.to_string())
        .collect()
}

#[test]
fn scenario_a_declaration_and_empty_entry() {
    let source = "Numeral x = 5;\nEmbark(){\n}\n";
    let lexed = tokenize("a.ic", source);
    assert!(lexed.diagnostics.is_empty(), "{:?}", lexed.diagnostics);
    assert_eq!(
        kinds(source),
        [
            "Numeral",
            "space",
            "Identifier(x)",
            "space",
            "=",
            "space",
            "Numeral_Lit(5)",
            ";",
            "newline",
            "Embark",
            "(",
            ")",
            "{",
            "newline",
            "}",
            "newline",
            "EOF",
        ]
    );

    let program = parse(&lexed.tokens).unwrap();
    assert!(program.entry.node.body.is_empty());
    assert_eq!(program.globals.len(), 1);
    let Global::Declaration(decl) = &program.globals[0].node else {
        panic!("expected a global declaration");
    };
    assert_eq!(decl.ty.node, DataType::Numeral);
    assert_eq!(decl.bindings.len(), 1);
    assert_eq!(decl.bindings[0].name.node, "x");
    assert!(decl.bindings[0].size.is_none());
    assert!(matches!(
        &decl.bindings[0].init,
        Some(Initializer::Expr(e)) if e.node == Expr::Literal(Literal::Numeral(5))
    ));
}

#[test]
fn scenario_b_illegal_delimiter_drops_numeral() {
    let lexed = tokenize("b.ic", "Numeral 2x;");
    assert_eq!(lexed.diagnostics.len(), 1);
    let diag = &lexed.diagnostics[0];
    assert_eq!(diag.kind, DiagnosticKind::IllegalDelimiter);
    assert_eq!(diag.message, "unexpected delimiter 'x' after Numeral_Lit(2)");
    assert_eq!(diag.span.start.offset, 9);

    let kinds: Vec<String> = lexed.tokens.iter().map(|t| t.kind.to_string()).collect();
    assert_eq!(kinds, ["Numeral", "space", "Identifier(x)", ";", "EOF"]);
}

#[test]
fn scenario_c_unterminated_missive() {
    let lexed = tokenize("c.ic", "Missive s = \"abc");
    assert_eq!(lexed.diagnostics.len(), 1);
    assert_eq!(lexed.diagnostics[0].kind, DiagnosticKind::UnclosedLiteral);
    assert_eq!(lexed.diagnostics[0].message, "expected closing '\"'");
    assert!(
        !lexed
            .tokens
            .iter()
            .any(|t| matches!(t.kind, TokenKind::MissiveLit(_)))
    );
}

#[test]
fn scenario_d_undeclared_variable() {
    let lexed = tokenize("d.ic", "Embark(){ Thou (x) { } }");
    assert!(lexed.diagnostics.is_empty());
    let err = parse(&lexed.tokens).unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::InvalidSyntax);
    assert_eq!(err.message, "undeclared variable 'x'");
    assert_eq!(err.span.start.offset, 16);
}

#[test]
fn scenario_e_two_entry_blocks() {
    let lexed = tokenize("e.ic", "Embark(){}\nEmbark(){}\n");
    assert!(lexed.diagnostics.is_empty());
    let err = parse(&lexed.tokens).unwrap_err();
    assert_eq!(err.message, "multiple entry blocks are not allowed");
    assert_eq!(err.span.start.offset, 11);
}
