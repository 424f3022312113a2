use log::debug;

use crate::{
    ast::{
        ast::Stmt,
        expressions::IdentifierExpr,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::parser::Parser;

/// Every statement handler leaves the statement's last token current.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    debug!(
        "parsing statement beginning {}",
        parser.current_token_kind()
    );

    if let Some(handler) = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied()
    {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

/// Parses one statement, recording its diagnostic instead of returning it.
pub fn parse_stmt_or_record(parser: &mut Parser) -> Option<Stmt> {
    match parse_stmt(parser) {
        Ok(stmt) => Some(stmt),
        Err(error) => {
            parser.record(error);
            None
        }
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.expect(TokenKind::Let)?;
    let name_token = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Assignment)?;

    let value = parse_expr(parser, BindingPower::Lowest)?;

    parser.expect_peek(TokenKind::Semicolon)?;

    Ok(Stmt::Let(LetStmt {
        token,
        name: IdentifierExpr {
            value: name_token.literal.clone(),
            token: name_token,
        },
        value,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.expect(TokenKind::Return)?;

    // `return;` leaves the semicolon current
    let value = if parser.current_token().is(TokenKind::Semicolon) {
        None
    } else {
        let value = parse_expr(parser, BindingPower::Lowest)?;
        parser.expect_peek(TokenKind::Semicolon)?;
        Some(value)
    };

    Ok(Stmt::Return(ReturnStmt { token, value }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Lowest)?;

    // The terminating semicolon is optional
    if parser.peek_token().is(TokenKind::Semicolon) {
        parser.advance();
    }

    Ok(Stmt::Expression(ExpressionStmt { token, expression }))
}

/// Parses `{ ... }` starting on the opening brace and ending on the closing one.
///
/// Statements inside are parsed as at top level: failures are recorded and
/// skipped, but never past the block's own `}`. Reaching end of input
/// before `}` fails the whole block.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let token = parser.current_token().clone();
    parser.advance();

    let mut statements = vec![];

    while !parser
        .current_token()
        .is_one_of_many(&[TokenKind::CloseCurly, TokenKind::EOF])
    {
        match parse_stmt_or_record(parser) {
            Some(stmt) => statements.push(stmt),
            // A failure on the closing brace leaves it for this loop
            None if parser.current_token().is(TokenKind::CloseCurly) => continue,
            None => {}
        }
        parser.advance();
    }

    if parser.current_token().is(TokenKind::EOF) {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::CloseCurly,
                received: TokenKind::EOF,
            },
            parser.get_position(),
        ));
    }

    Ok(BlockStmt {
        span: Span {
            start: token.span.start,
            end: parser.current_token().span.end,
        },
        token,
        statements,
    })
}
