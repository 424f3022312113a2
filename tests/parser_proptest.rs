//! Property-based tests for the lexer and parser
//!
//! These tests ensure that:
//! - The lexer terminates on any input and always ends with `EOF`
//! - The parser never panics, whatever it is given
//! - Rendering a valid statement and parsing the rendering gives the same tree

use moncow::{
    lexer::{lexer::tokenize, tokens::TokenKind},
    parse,
};
use proptest::prelude::*;

/// Identifiers that never collide with a keyword
fn identifier_strategy() -> impl Strategy<Value = String> {
    "v[a-z]{0,4}"
}

/// Literal and identifier leaves
fn leaf_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        identifier_strategy(),
        any::<u32>().prop_map(|n| n.to_string()),
        (0u32..1000, 0u32..100).prop_map(|(whole, frac)| format!("{}.{}", whole, frac)),
        Just(String::from("true")),
        Just(String::from("false")),
    ]
}

fn infix_operator_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["+", "-", "*", "/", "==", "!=", "<", ">"])
}

/// Generate valid expressions
fn expression_strategy() -> impl Strategy<Value = String> {
    leaf_strategy().prop_recursive(4, 32, 3, |inner| {
        prop_oneof![
            // Prefix
            (prop::sample::select(vec!["-", "!"]), inner.clone())
                .prop_map(|(op, right)| format!("{}{}", op, right)),
            // Infix
            (inner.clone(), infix_operator_strategy(), inner.clone())
                .prop_map(|(left, op, right)| format!("{} {} {}", left, op, right)),
            // Grouping
            inner.clone().prop_map(|expr| format!("({})", expr)),
            // If/else
            (inner.clone(), inner.clone(), inner).prop_map(|(cond, then, otherwise)| {
                format!("if ({}) {{ {} }} else {{ {} }}", cond, then, otherwise)
            }),
        ]
    })
}

/// Generate single valid statements
fn statement_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        expression_strategy().prop_map(|expr| format!("{};", expr)),
        (identifier_strategy(), expression_strategy())
            .prop_map(|(name, expr)| format!("let {} = {};", name, expr)),
        expression_strategy().prop_map(|expr| format!("return {};", expr)),
    ]
}

#[cfg(test)]
mod proptest_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_lexer_always_terminates(source in any::<String>()) {
            let tokens = tokenize(&source);

            // Every token consumes at least one code point
            prop_assert!(tokens.len() <= source.chars().count() + 1);
            prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EOF));
            prop_assert_eq!(
                tokens.iter().filter(|t| t.kind == TokenKind::EOF).count(),
                1
            );
        }

        #[test]
        fn test_parser_never_panics(source in "[ -~\n]{0,64}") {
            let (program, errors) = parse(&source);

            // Each diagnostic or statement comes from at least one token
            prop_assert!(program.statements.len() + errors.len() <= tokenize(&source).len());
        }

        #[test]
        fn test_rendering_round_trips(source in statement_strategy()) {
            let (program, errors) = parse(&source);
            prop_assert!(errors.is_empty(), "{} produced {:?}", source, errors);
            prop_assert_eq!(program.statements.len(), 1);

            let rendered = program.to_string();
            let (reparsed, errors) = parse(&rendered);
            prop_assert!(errors.is_empty(), "{} produced {:?}", rendered, errors);
            prop_assert_eq!(reparsed.statements.len(), 1);
            prop_assert_eq!(reparsed.to_string(), rendered);
        }

        #[test]
        fn test_expression_literals_survive(expr in expression_strategy()) {
            let (program, errors) = parse(&expr);
            prop_assert!(errors.is_empty(), "{} produced {:?}", expr, errors);

            // Rendering only adds grouping, so the token literals stay the same
            let source_literals: Vec<String> = tokenize(&expr)
                .into_iter()
                .filter(|t| !t.is_one_of_many(&[TokenKind::OpenParen, TokenKind::CloseParen]))
                .map(|t| t.literal)
                .collect();
            let rendered_literals: Vec<String> = tokenize(&program.to_string())
                .into_iter()
                .filter(|t| !t.is_one_of_many(&[TokenKind::OpenParen, TokenKind::CloseParen]))
                .map(|t| t.literal)
                .collect();
            prop_assert_eq!(source_literals, rendered_literals);
        }
    }
}
