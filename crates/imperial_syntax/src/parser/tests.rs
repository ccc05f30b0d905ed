#[cfg(test)]
/// Parser unit tests.
///
/// These tests focus on correctness of specific syntactic forms and on the exact wording and
/// location of the single diagnostic the parser returns.
mod tests {
    use super::*;
    use crate::lexer;

    fn parse_str(source: &str) -> Result<Program, Diagnostic> {
        let tokens = lexer::lex(source).unwrap_or_else(|diags| panic!("lexing failed: {diags:?}"));
        parse(&tokens)
    }

    fn entry_body(source: &str) -> Block {
        parse_str(source).unwrap().entry.node.body
    }

    fn error_message(source: &str) -> String {
        parse_str(source).expect_err("expected a syntax error").message
    }

    fn literal(expr: &Spanned<Expr>) -> &Literal {
        match &expr.node {
            Expr::Literal(lit) => lit,
            other => panic!("expected literal, got {other:?}"),
        }
    }

    #[test]
    fn test_global_declaration_and_empty_entry() {
        let program = parse_str("Numeral x = 5;\nEmbark(){\n}\n").unwrap();
        assert_eq!(program.globals.len(), 1);
        assert!(program.entry.node.body.is_empty());

        let global = &program.globals[0];
        assert_eq!(global.span.start.offset, 0);
        assert_eq!(global.span.end.offset, 14);
        match &global.node {
            Global::Declaration(decl) => {
                assert_eq!(decl.ty.node, DataType::Numeral);
                assert!(!decl.is_const);
                assert_eq!(decl.bindings.len(), 1);
                let binding = &decl.bindings[0];
                assert_eq!(binding.name.node, "x");
                assert!(binding.size.is_none());
                match &binding.init {
                    Some(Initializer::Expr(expr)) => assert_eq!(literal(expr), &Literal::Numeral(5)),
                    other => panic!("expected expression initializer, got {other:?}"),
                }
            }
            other => panic!("expected declaration, got {other:?}"),
        }
    }

    #[test]
    fn test_undeclared_variable_in_condition() {
        let err = parse_str("Embark(){ Thou (x) { } }").unwrap_err();
        assert_eq!(err.kind, crate::diagnostics::DiagnosticKind::InvalidSyntax);
        assert_eq!(err.message, "undeclared variable 'x'");
        assert_eq!(err.span.start.column, 16);
    }

    #[test]
    fn test_multiple_entry_blocks() {
        let err = parse_str("Embark(){}\nEmbark(){}\n").unwrap_err();
        assert_eq!(err.message, "multiple entry blocks are not allowed");
        assert_eq!(err.span.start.line, 1);
        assert_eq!(err.span.start.column, 0);
    }

    #[test]
    fn test_missing_entry_block() {
        assert_eq!(
            error_message("Numeral x = 1;\n"),
            "missing entry block: expected 'Embark'"
        );
    }

    #[test]
    fn test_empty_token_stream() {
        let err = parse(&[]).unwrap_err();
        assert_eq!(err.message, "missing entry block: expected 'Embark'");
    }

    #[test]
    fn test_unexpected_top_level_statement() {
        assert_eq!(
            error_message("Halt;\nEmbark(){}\n"),
            "expected a declaration, function or 'Embark' block, found 'Halt'"
        );
    }

    #[test]
    fn test_function_prototype_definition_and_call() {
        let source = r#"Numeral add(Numeral a, Numeral b);
Numeral add(Numeral a, Numeral b) {
    Recede a + b;
}
Embark() {
    Numeral total = add(1, 2) * 3;
    Emit("%d", total);
}
"#;
        let program = parse_str(source).unwrap();
        assert_eq!(program.globals.len(), 2);

        match (&program.globals[0].node, &program.globals[1].node) {
            (Global::Function(proto), Global::Function(def)) => {
                assert!(!proto.is_definition());
                assert!(def.is_definition());
                assert_eq!(def.name.node, "add");
                assert_eq!(def.params.len(), 2);
                assert_eq!(def.params[1].name.node, "b");
                let body = def.body.as_ref().unwrap();
                assert!(matches!(body[0].node, Statement::Return(Some(_))));
            }
            other => panic!("expected two functions, got {other:?}"),
        }

        let body = program.entry.node.body;
        assert_eq!(body.len(), 2);
        match &body[0].node {
            Statement::Declaration(decl) => match &decl.bindings[0].init {
                Some(Initializer::Expr(expr)) => match &expr.node {
                    Expr::Binary(lhs, BinaryOp::Mul, _) => {
                        assert!(matches!(&lhs.node, Expr::Call(name, args) if name.node == "add" && args.len() == 2));
                    }
                    other => panic!("expected multiplication, got {other:?}"),
                },
                other => panic!("expected expression initializer, got {other:?}"),
            },
            other => panic!("expected declaration, got {other:?}"),
        }
        match &body[1].node {
            Statement::Output(out) => {
                assert_eq!(out.format.node, OutputFormat::Missive("%d".to_string()));
                assert_eq!(out.args.len(), 1);
            }
            other => panic!("expected Emit, got {other:?}"),
        }
    }

    #[test]
    fn test_function_header_needs_body_or_semicolon() {
        assert_eq!(
            error_message("Numeral f() Numeral\nEmbark(){}\n"),
            "expected ';' or '{' after function header, found 'Numeral'"
        );
    }

    #[test]
    fn test_function_used_as_value() {
        assert_eq!(
            error_message("Numeral f();\nEmbark() {\n    Numeral x = f;\n}\n"),
            "function 'f' used as a value"
        );
    }

    #[test]
    fn test_call_checks() {
        assert_eq!(
            error_message("Numeral x = 1;\nEmbark() {\n    x();\n}\n"),
            "'x' is not a function"
        );
        assert_eq!(error_message("Embark() {\n    g();\n}\n"), "undeclared function 'g'");
    }

    #[test]
    fn test_precedence_and_associativity() {
        let body = entry_body("Embark() {\n    Numeral x = 1 + 2 * 3 - 4;\n}\n");
        let Statement::Declaration(decl) = &body[0].node else {
            panic!("expected declaration");
        };
        let Some(Initializer::Expr(expr)) = &decl.bindings[0].init else {
            panic!("expected expression initializer");
        };
        // ((1 + (2 * 3)) - 4)
        match &expr.node {
            Expr::Binary(lhs, BinaryOp::Sub, rhs) => {
                assert_eq!(literal(rhs), &Literal::Numeral(4));
                match &lhs.node {
                    Expr::Binary(one, BinaryOp::Add, product) => {
                        assert_eq!(literal(one), &Literal::Numeral(1));
                        assert!(matches!(product.node, Expr::Binary(_, BinaryOp::Mul, _)));
                    }
                    other => panic!("expected addition, got {other:?}"),
                }
            }
            other => panic!("expected subtraction, got {other:?}"),
        }
    }

    #[test]
    fn test_arrays() {
        let body = entry_body("Embark() {\n    Numeral xs[3] = {1, -2, 3};\n    xs[0] = xs[1] + 4;\n}\n");
        assert_eq!(body.len(), 2);

        match &body[0].node {
            Statement::Declaration(decl) => {
                let binding = &decl.bindings[0];
                assert_eq!(binding.size.as_ref().map(|s| s.node), Some(3));
                match &binding.init {
                    Some(Initializer::Array(items)) => {
                        assert_eq!(items.len(), 3);
                        assert_eq!(items[1].node, Literal::Numeral(-2));
                    }
                    other => panic!("expected array initializer, got {other:?}"),
                }
            }
            other => panic!("expected declaration, got {other:?}"),
        }

        match &body[1].node {
            Statement::Assign(assign) => {
                assert_eq!(assign.target.node, "xs");
                assert!(assign.index.is_some());
                assert!(matches!(
                    &assign.value,
                    Initializer::Expr(expr) if matches!(expr.node, Expr::Binary(..))
                ));
            }
            other => panic!("expected assignment, got {other:?}"),
        }
    }

    #[test]
    fn test_array_errors() {
        assert_eq!(
            error_message("Embark() {\n    Numeral xs[2] = {1, 2, 3};\n}\n"),
            "too many array elements: declared 2, found 3"
        );
        assert_eq!(
            error_message("Embark() {\n    Numeral xs[0];\n}\n"),
            "array size must be a positive Numeral literal"
        );
        assert_eq!(
            error_message("Embark() {\n    Numeral x = {1};\n}\n"),
            "'{ ... }' initializes arrays only"
        );
        assert_eq!(
            error_message("Embark() {\n    Numeral n = 1;\n    n[0] = 2;\n}\n"),
            "'n' is not an array"
        );
    }

    #[test]
    fn test_type_mismatches() {
        assert_eq!(
            error_message("Embark() {\n    Numeral x = 1.5;\n}\n"),
            "type mismatch: expected Numeral, found Decimal"
        );
        assert_eq!(
            error_message("Embark() {\n    Missive s = 5;\n}\n"),
            "type mismatch: expected Missive, found Numeral"
        );
        assert_eq!(
            error_message("Embark() {\n    Numeral x = 1 < 2;\n}\n"),
            "type mismatch: expected Numeral, found a comparison"
        );
        assert_eq!(
            error_message("Embark() {\n    Letter c = 'a';\n    Numeral n = c;\n}\n"),
            "type mismatch: expected Numeral, found Letter"
        );
    }

    #[test]
    fn test_decimal_accepts_numerals() {
        let body = entry_body("Embark() {\n    Numeral n = 2;\n    Decimal d = n + 2.5;\n    d += 1;\n}\n");
        assert_eq!(body.len(), 3);
        assert!(matches!(
            &body[2].node,
            Statement::CompoundAssign(stmt) if stmt.op == CompoundOp::Add && stmt.target.node == "d"
        ));
    }

    #[test]
    fn test_compound_assignment_requires_numeric_target() {
        assert_eq!(
            error_message("Embark() {\n    Missive s = \"a\";\n    s += 1;\n}\n"),
            "type mismatch: expected Numeral, found Missive"
        );
    }

    #[test]
    fn test_constants() {
        assert_eq!(
            error_message("Constant Numeral limit;\nEmbark(){}\n"),
            "constant 'limit' must be initialized"
        );
        assert_eq!(
            error_message("Constant Numeral limit = 10;\nEmbark() {\n    limit = 2;\n}\n"),
            "cannot assign to constant 'limit'"
        );
        assert_eq!(
            error_message("Constant Numeral limit = 10;\nEmbark() {\n    limit++;\n}\n"),
            "cannot assign to constant 'limit'"
        );
    }

    #[test]
    fn test_void_variable() {
        assert_eq!(
            error_message("Void v;\nEmbark(){}\n"),
            "'Void' is only valid as a function return type"
        );
    }

    #[test]
    fn test_if_else_chain() {
        let source = r#"Embark() {
    Veracity ok = Pure;
    Thou (ok) {
        Emit("yes");
    }
    Or Thou (!ok) {
        Emit("no");
    }
    Or {
        Emit("maybe");
    }
}
"#;
        let body = entry_body(source);
        assert_eq!(body.len(), 2);
        let Statement::If(stmt) = &body[1].node else {
            panic!("expected Thou");
        };
        assert!(stmt.condition.is_some());
        let second = stmt.else_branch.as_ref().unwrap();
        assert!(matches!(
            second.node.condition.as_ref().map(|c| &c.node),
            Some(Expr::Unary(UnaryOp::Not, _))
        ));
        let last = second.node.else_branch.as_ref().unwrap();
        assert!(last.node.condition.is_none());
        assert_eq!(last.node.body.len(), 1);
    }

    #[test]
    fn test_dangling_or() {
        assert_eq!(
            error_message("Embark() {\n    Or {\n    }\n}\n"),
            "'Or' without a preceding 'Thou'"
        );
    }

    #[test]
    fn test_loops() {
        let source = r#"Embark() {
    Numeral i = 0;
    Per (i = 0; i < 10; i++) {
        Extend;
    }
    Until (i > 0) {
        i -= 1;
    }
    Act {
        i++;
    }
    Until (i == 3);
}
"#;
        let body = entry_body(source);
        assert_eq!(body.len(), 4);

        match &body[1].node {
            Statement::For(stmt) => {
                assert!(matches!(stmt.init.as_deref().map(|s| &s.node), Some(Statement::Assign(_))));
                assert!(stmt.condition.is_some());
                assert!(matches!(
                    stmt.update.as_deref().map(|s| &s.node),
                    Some(Statement::Expr(Spanned {
                        node: Expr::Unary(UnaryOp::PostIncrement, _),
                        ..
                    }))
                ));
                assert!(matches!(stmt.body[0].node, Statement::Continue));
            }
            other => panic!("expected Per, got {other:?}"),
        }
        assert!(matches!(body[2].node, Statement::While(_)));
        assert!(matches!(body[3].node, Statement::DoWhile(_)));
    }

    #[test]
    fn test_for_with_empty_parts() {
        let body = entry_body("Embark() {\n    Per (;;) {\n        Halt;\n    }\n}\n");
        match &body[0].node {
            Statement::For(stmt) => {
                assert!(stmt.init.is_none());
                assert!(stmt.condition.is_none());
                assert!(stmt.update.is_none());
                assert!(matches!(stmt.body[0].node, Statement::Break));
            }
            other => panic!("expected Per, got {other:?}"),
        }
    }

    #[test]
    fn test_switch() {
        let source = r#"Embark() {
    Letter grade = 'a';
    Shift (grade) {
        Opt 'a':
            Emit("top");
            Halt;
        Opt 'b':
        Usual:
            Halt;
    }
}
"#;
        let body = entry_body(source);
        let Statement::Switch(stmt) = &body[1].node else {
            panic!("expected Shift");
        };
        assert_eq!(stmt.subject.node, "grade");
        assert_eq!(stmt.cases.len(), 2);
        assert_eq!(stmt.cases[0].value.node, Literal::Letter('a'));
        assert_eq!(stmt.cases[0].body.len(), 2);
        assert!(stmt.cases[1].body.is_empty());
        assert_eq!(stmt.default.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_switch_errors() {
        assert_eq!(
            error_message("Embark() {\n    Numeral n = 1;\n    Shift (n) {\n        Usual:\n        Usual:\n    }\n}\n"),
            "duplicate 'Usual' label in 'Shift'"
        );
        assert_eq!(
            error_message("Embark() {\n    Decimal d = 1.5;\n    Shift (d) {\n    }\n}\n"),
            "cannot 'Shift' on a value of type Decimal"
        );
        assert_eq!(
            error_message("Embark() {\n    Numeral n = 1;\n    Shift (n) {\n        Opt 'a':\n    }\n}\n"),
            "type mismatch: expected Numeral, found Letter"
        );
    }

    #[test]
    fn test_input() {
        let body = entry_body("Embark() {\n    Numeral n;\n    Seek(\"%d\", &n);\n}\n");
        match &body[1].node {
            Statement::Input(input) => {
                assert_eq!(input.format.node, "%d");
                assert_eq!(input.targets.len(), 1);
                assert_eq!(input.targets[0].node, "n");
            }
            other => panic!("expected Seek, got {other:?}"),
        }

        assert_eq!(
            error_message("Embark() {\n    Seek(\"%d\", &m);\n}\n"),
            "undeclared variable 'm'"
        );
    }

    #[test]
    fn test_output_with_variable_format() {
        let body = entry_body("Embark() {\n    Missive greeting = \"hi\";\n    Emit(greeting);\n}\n");
        assert!(matches!(
            &body[1].node,
            Statement::Output(out) if out.format.node == OutputFormat::Variable("greeting".to_string())
        ));
    }

    #[test]
    fn test_missing_semicolon() {
        assert_eq!(
            error_message("Embark() {\n    Numeral x = 1\n}\n"),
            "expected ';', found newline"
        );
    }

    #[test]
    fn test_unclosed_block() {
        assert_eq!(error_message("Embark() {\n"), "expected '}', found EOF");
    }

    #[test]
    fn test_symbols_recorded() {
        let tokens = lexer::lex("Numeral f(Numeral a);\nDecimal xs[2];\nEmbark(){}\n").unwrap();
        let mut parser = Parser::new(&tokens);
        parser.parse().unwrap();
        let symbols = parser.symbols();
        assert!(symbols.lookup("f").unwrap().is_function());
        assert_eq!(symbols.lookup("a").unwrap().kind, SymbolKind::Parameter);
        assert_eq!(symbols.lookup("xs").unwrap().array_size(), Some(2));
    }

    fn assert_too_deep(source: &str) {
        let err = parse_str(source).expect_err("expected nesting to be rejected");
        assert_eq!(err.kind, crate::diagnostics::DiagnosticKind::InvalidSyntax);
        assert_eq!(err.message, "nesting too deep: more than 64 levels");
    }

    #[test]
    fn test_deep_parentheses_fail_with_diagnostic() {
        let depth = 100_000;
        let source = format!("Embark(){{\nNumeral x = {}1{};\n}}\n", "(".repeat(depth), ")".repeat(depth));
        assert_too_deep(&source);
    }

    #[test]
    fn test_moderate_parentheses_parse() {
        let source = format!("Embark(){{\nNumeral x = {}1{};\n}}\n", "(".repeat(40), ")".repeat(40));
        let body = entry_body(&source);
        assert_eq!(body.len(), 1);
    }

    #[test]
    fn test_deep_prefix_operators_fail_with_diagnostic() {
        let source = format!("Embark(){{\nNumeral x = {}1;\n}}\n", "- ".repeat(10_000));
        assert_too_deep(&source);
    }

    #[test]
    fn test_deep_blocks_fail_with_diagnostic() {
        let depth = 10_000;
        let source = format!(
            "Embark(){{\nVeracity x = Pure;\n{}{}}}\n",
            "Thou (x) {\n".repeat(depth),
            "}\n".repeat(depth)
        );
        assert_too_deep(&source);
    }

    #[test]
    fn test_long_or_chain_fails_with_diagnostic() {
        let source = format!(
            "Embark(){{\nVeracity x = Pure;\n{}{{ }}\n}}\n",
            "Thou (x) { } Or ".repeat(10_000)
        );
        assert_too_deep(&source);
    }

    #[test]
    fn test_deep_call_arguments_fail_with_diagnostic() {
        let depth = 10_000;
        let source = format!(
            "Numeral f(Numeral a);\nEmbark(){{\nNumeral x = {}1{};\n}}\n",
            "f(".repeat(depth),
            ")".repeat(depth)
        );
        assert_too_deep(&source);
    }

    #[test]
    fn test_long_operator_chain_fails_with_diagnostic() {
        let source = format!("Embark(){{\nNumeral x = {}1;\n}}\n", "1+".repeat(100_000));
        let err = parse_str(&source).expect_err("expected the chain to be rejected");
        assert_eq!(err.message, "expression too long: more than 1024 operators");
    }

    #[test]
    fn test_operator_budget_is_per_statement() {
        let line = format!("x = {}1;\n", "1+".repeat(1000));
        let source = format!("Embark(){{\nNumeral x;\n{}{}}}\n", line, line);
        assert_eq!(entry_body(&source).len(), 3);
    }
}
