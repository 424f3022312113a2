//! Unit tests for error handling.
//!
//! This module contains tests for error types, messages and tips.

use std::num::IntErrorKind;

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;

fn unexpected(expected: TokenKind, received: TokenKind) -> Error {
    Error::new(
        ErrorImpl::UnexpectedToken { expected, received },
        Position(0),
    )
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::NoPrefixParseFn {
            kind: TokenKind::Illegal,
        },
        Position(10),
    );

    assert_eq!(error.get_error_name(), "NoPrefixParseFn");
    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::NoPrefixParseFn {
            kind: TokenKind::Illegal
        }
    );
}

#[test]
fn test_error_position() {
    let error = unexpected(TokenKind::Identifier, TokenKind::Integer);
    assert_eq!(error.get_position().0, 0);

    let error = Error::new(
        ErrorImpl::FloatParseError {
            literal: String::from("1.2"),
        },
        Position(42),
    );
    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_error_names() {
    let names = [
        unexpected(TokenKind::Semicolon, TokenKind::EOF),
        Error::new(
            ErrorImpl::NoPrefixParseFn {
                kind: TokenKind::Comma,
            },
            Position(0),
        ),
        Error::new(
            ErrorImpl::IntegerParseError {
                literal: String::from("1"),
                kind: IntErrorKind::InvalidDigit,
            },
            Position(0),
        ),
        Error::new(
            ErrorImpl::FloatParseError {
                literal: String::from("1."),
            },
            Position(0),
        ),
        Error::new(ErrorImpl::NestingTooDeep { limit: 100 }, Position(0)),
    ]
    .iter()
    .map(|error| error.get_error_name().to_string())
    .collect::<Vec<_>>();

    assert_eq!(
        names,
        vec![
            "UnexpectedToken",
            "NoPrefixParseFn",
            "IntegerParseError",
            "FloatParseError",
            "NestingTooDeep"
        ]
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        unexpected(TokenKind::Identifier, TokenKind::Assignment).to_string(),
        "expected token type IDENT, got = instead"
    );
    assert_eq!(
        ErrorImpl::NoPrefixParseFn {
            kind: TokenKind::CloseCurly
        }
        .to_string(),
        "no prefix parse function found for }"
    );
    assert_eq!(
        ErrorImpl::IntegerParseError {
            literal: String::from("99999999999999999999"),
            kind: IntErrorKind::PosOverflow,
        }
        .to_string(),
        "could not parse \"99999999999999999999\" as integer"
    );
    assert_eq!(
        ErrorImpl::FloatParseError {
            literal: String::from("٣.٤")
        }
        .to_string(),
        "could not parse \"٣.٤\" as float"
    );
    assert_eq!(
        ErrorImpl::NestingTooDeep { limit: 100 }.to_string(),
        "expression nesting exceeds the limit of 100 levels"
    );
}

#[test]
fn test_semicolon_tip() {
    let error = unexpected(TokenKind::Semicolon, TokenKind::Let);

    assert_eq!(error.get_tip().to_string(), "did you miss a semicolon?");
}

#[test]
fn test_unclosed_delimiter_tip() {
    assert_eq!(
        unexpected(TokenKind::CloseParen, TokenKind::EOF)
            .get_tip()
            .to_string(),
        "unclosed delimiter, expected `)`"
    );
    assert_eq!(
        unexpected(TokenKind::CloseCurly, TokenKind::EOF)
            .get_tip()
            .to_string(),
        "unclosed delimiter, expected `}`"
    );
}

#[test]
fn test_no_prefix_tips() {
    let at_eof = Error::new(
        ErrorImpl::NoPrefixParseFn {
            kind: TokenKind::EOF,
        },
        Position(3),
    );
    assert_eq!(
        at_eof.get_tip().to_string(),
        "input ended in the middle of an expression"
    );

    let on_keyword = Error::new(
        ErrorImpl::NoPrefixParseFn {
            kind: TokenKind::Fn,
        },
        Position(0),
    );
    assert!(matches!(on_keyword.get_tip(), ErrorTip::None));
}

fn integer_error(literal: &str, kind: IntErrorKind) -> Error {
    Error::new(
        ErrorImpl::IntegerParseError {
            literal: String::from(literal),
            kind,
        },
        Position(0),
    )
}

#[test]
fn test_integer_tip_follows_failure_kind() {
    assert_eq!(
        integer_error("99999999999999999999", IntErrorKind::PosOverflow)
            .get_tip()
            .to_string(),
        "`99999999999999999999` is above the integer limit of 9223372036854775807"
    );
    assert_eq!(
        integer_error("09", IntErrorKind::InvalidDigit)
            .get_tip()
            .to_string(),
        "`09` has a digit outside its base; integers take ASCII digits and a leading `0` means octal"
    );
    assert!(matches!(
        integer_error("", IntErrorKind::Empty).get_tip(),
        ErrorTip::None
    ));
}

#[test]
fn test_nesting_tip() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 100 }, Position(7));

    assert_eq!(
        error.get_tip().to_string(),
        "bind inner parts of the expression to names with `let`"
    );
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this".to_string());
    assert_eq!(format!("{}", tip), "Try this");

    let no_tip = ErrorTip::None;
    assert_eq!(format!("{}", no_tip), "");
}

#[test]
fn test_unrelated_expectation_has_no_tip() {
    let error = unexpected(TokenKind::Assignment, TokenKind::Integer);

    assert!(matches!(error.get_tip(), ErrorTip::None));
}
