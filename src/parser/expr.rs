use std::num::ParseIntError;

use crate::{
    ast::{
        ast::Expr,
        expressions::{
            BooleanExpr, FloatExpr, IdentifierExpr, IfExpr, InfixExpr, IntegerExpr, PrefixExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_block_stmt};

/// Pratt loop. Leaves the last token of the expression as the current token.
///
/// Every nested operand, group or `if` re-enters here, so this is where
/// nesting depth is bounded.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    parser.enter_nesting()?;
    let expr = parse_expr_at_depth(parser, bp);
    parser.exit_nesting();

    expr
}

fn parse_expr_at_depth(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(Error::new(
            ErrorImpl::NoPrefixParseFn { kind: token_kind },
            parser.get_position(),
        ));
    };

    let mut left = nud(parser)?;

    // While the upcoming operator binds tighter than `bp`, fold it into lhs
    while !parser.peek_token().is(TokenKind::Semicolon) && bp < parser.peek_binding_power() {
        let Some(led) = parser.get_led_lookup().get(&parser.peek_token_kind()).copied() else {
            return Ok(left);
        };

        parser.advance();
        let operator_bp = parser.current_binding_power();
        left = led(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    Ok(Expr::Identifier(IdentifierExpr {
        value: token.literal.clone(),
        token,
    }))
}

pub fn parse_integer_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    match parse_integer_literal(&token.literal) {
        Ok(value) => Ok(Expr::Integer(IntegerExpr { token, value })),
        Err(error) => Err(Error::new(
            ErrorImpl::IntegerParseError {
                literal: token.literal,
                kind: error.kind().clone(),
            },
            token.span.start,
        )),
    }
}

/// Converts integer literal text to an `i64`, honouring base prefixes.
///
/// `0x`, `0o` and `0b` select base 16, 8 and 2; a leading `0` followed by
/// further digits selects base 8; anything else is decimal.
pub fn parse_integer_literal(literal: &str) -> Result<i64, ParseIntError> {
    let (digits, radix) = match literal.get(..2) {
        Some("0x") | Some("0X") => (&literal[2..], 16),
        Some("0o") | Some("0O") => (&literal[2..], 8),
        Some("0b") | Some("0B") => (&literal[2..], 2),
        _ if literal.len() > 1 && literal.starts_with('0') => (&literal[1..], 8),
        _ => (literal, 10),
    };

    i64::from_str_radix(digits, radix)
}

pub fn parse_float_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    match token.literal.parse::<f64>() {
        Ok(value) => Ok(Expr::Float(FloatExpr { token, value })),
        Err(_) => Err(Error::new(
            ErrorImpl::FloatParseError {
                literal: token.literal,
            },
            token.span.start,
        )),
    }
}

pub fn parse_boolean_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    Ok(Expr::Boolean(BooleanExpr {
        value: token.is(TokenKind::True),
        token,
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, BindingPower::Prefix)?;

    Ok(Expr::Prefix(PrefixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_infix_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Infix(InfixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

/// `( expr )` yields the inner expression; grouping only shapes the tree.
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<Expr, Error> {
    // if (x < y) { x } else { y }
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    parser.advance();
    let condition = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let consequence = parse_block_stmt(parser)?;

    let alternative = if parser.peek_token().is(TokenKind::Else) {
        parser.advance();
        parser.expect_peek(TokenKind::OpenCurly)?;
        Some(parse_block_stmt(parser)?)
    } else {
        None
    };

    Ok(Expr::If(IfExpr {
        token,
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}
