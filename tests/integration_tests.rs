//! Integration tests for the complete front end.
//!
//! These tests drive source text through the lexer and parser together and
//! check the rendered tree and the collected diagnostics.

use moncow::{
    ast::ast::{Expr, Stmt},
    get_line_at_position,
    lexer::{lexer::Lexer, tokens::TokenKind},
    parse,
    parser::parser::Parser,
    render_error,
};

#[test]
fn test_parse_small_program() {
    let source = r#"
let five = 5;
let ten = 10.5;
let result = five * 2 + ten;

if (result > 20) {
    return true;
} else {
    return !false;
}
"#;
    let (program, errors) = parse(source);

    assert!(errors.is_empty(), "{:?}", errors);
    assert_eq!(program.statements.len(), 4);

    let rendered: Vec<String> = program.statements.iter().map(|s| s.to_string()).collect();
    assert_eq!(
        rendered,
        vec![
            "let five = 5;",
            "let ten = 10.5;",
            "let result = ((five*2)+ten);",
            "if ((result>20)) { return true; } else { return (!false); }",
        ]
    );
}

#[test]
fn test_rendered_statements_parse_back_identically() {
    let source = "let a = -b * (c + d) / e;\nreturn a != 3 < 4;\nif (!a) { a } else { -a }";
    let (program, errors) = parse(source);
    assert!(errors.is_empty());

    for stmt in &program.statements {
        let rendered = stmt.to_string();
        let (reparsed, errors) = parse(&rendered);

        assert!(errors.is_empty(), "{} produced {:?}", rendered, errors);
        assert_eq!(reparsed.statements.len(), 1);
        assert_eq!(reparsed.to_string(), rendered);
    }
}

#[test]
fn test_partial_program_keeps_valid_statements() {
    let source = "let x = 1;\nlet;\nlet y = x + 1;\nlet z = ;\nz";
    let (program, errors) = parse(source);

    let rendered: Vec<String> = program.statements.iter().map(|s| s.to_string()).collect();
    assert_eq!(rendered, vec!["let x = 1;", "let y = (x+1);", "z"]);
    assert_eq!(errors.len(), 2);
}

#[test]
fn test_diagnostics_are_in_source_order() {
    let (_, errors) = parse("let = 1;\n5 + ;\nlet x 2;");

    assert!(!errors.is_empty());
    let positions: Vec<usize> = errors.iter().map(|e| e.get_position().0).collect();
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
}

#[test]
fn test_empty_program_and_no_diagnostics() {
    let (program, errors) = parse("");

    assert!(program.statements.is_empty());
    assert!(errors.is_empty());
}

#[test]
fn test_parser_over_external_lexer() {
    let mut parser = Parser::new(Lexer::new("if (a == b) { c }"));
    let program = parser.parse_program();

    assert!(parser.errors().is_empty());
    let Stmt::Expression(stmt) = &program.statements[0] else {
        panic!("expected an expression statement");
    };
    assert!(matches!(stmt.expression, Expr::If(_)));
    assert_eq!(stmt.token.kind, TokenKind::If);
}

#[test]
fn test_render_error_report() {
    let source = "let x = 5;\nlet y = 10\n";
    let (_, errors) = parse(source);
    assert_eq!(errors.len(), 1);

    let report = render_error(&errors[0], source, "input.mc");

    assert!(report.starts_with("Error: UnexpectedToken (did you miss a semicolon?)"));
    assert!(report.contains("-> input.mc"));
    assert!(report.contains("expected token type ;, got EOF instead"));
}

#[test]
fn test_error_line_lookup() {
    let source = "let a = 1;\nlet b = @;";
    let (_, errors) = parse(source);

    let (line, text, column) = get_line_at_position(source, errors[0].get_position().0)
        .expect("position should be inside the source");
    assert_eq!(line, 2);
    assert_eq!(text, "let b = @;");
    assert_eq!(column, 8);
}
