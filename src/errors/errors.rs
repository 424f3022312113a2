use std::{fmt::Display, num::IntErrorKind};

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// A diagnostic recorded by the parser.
///
/// Diagnostics are collected rather than raised; the parser keeps going
/// after recording one so that a single pass reports as much as possible.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NoPrefixParseFn { .. } => "NoPrefixParseFn",
            ErrorImpl::IntegerParseError { .. } => "IntegerParseError",
            ErrorImpl::FloatParseError { .. } => "FloatParseError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, .. } => match expected {
                TokenKind::Semicolon => ErrorTip::Suggestion(String::from(
                    "did you miss a semicolon?",
                )),
                TokenKind::CloseParen | TokenKind::CloseCurly => {
                    ErrorTip::Suggestion(format!("unclosed delimiter, expected `{}`", expected))
                }
                _ => ErrorTip::None,
            },
            ErrorImpl::NoPrefixParseFn { kind } => match kind {
                TokenKind::Illegal => {
                    ErrorTip::Suggestion(String::from("unrecognised character in source"))
                }
                TokenKind::EOF => {
                    ErrorTip::Suggestion(String::from("input ended in the middle of an expression"))
                }
                _ => ErrorTip::None,
            },
            ErrorImpl::IntegerParseError { literal, kind } => match kind {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    ErrorTip::Suggestion(format!(
                        "`{}` is above the integer limit of {}",
                        literal,
                        i64::MAX
                    ))
                }
                IntErrorKind::InvalidDigit => ErrorTip::Suggestion(format!(
                    "`{}` has a digit outside its base; integers take ASCII digits and a leading `0` means octal",
                    literal
                )),
                _ => ErrorTip::None,
            },
            ErrorImpl::FloatParseError { .. } => ErrorTip::None,
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::Suggestion(String::from(
                "bind inner parts of the expression to names with `let`",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("expected token type {expected}, got {received} instead")]
    UnexpectedToken {
        expected: TokenKind,
        received: TokenKind,
    },
    #[error("no prefix parse function found for {kind}")]
    NoPrefixParseFn { kind: TokenKind },
    #[error("could not parse {literal:?} as integer")]
    IntegerParseError { literal: String, kind: IntErrorKind },
    #[error("could not parse {literal:?} as float")]
    FloatParseError { literal: String },
    #[error("expression nesting exceeds the limit of {limit} levels")]
    NestingTooDeep { limit: usize },
}
