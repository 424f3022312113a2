//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program loop.
//! The parser pulls tokens lazily from the lexer and looks at exactly two
//! of them: the current token and the one after it.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//!
//! Binding powers live in a single global table, see [`BINDING_POWER_LOOKUP`].
//!
//! [`BINDING_POWER_LOOKUP`]: super::lookups::BINDING_POWER_LOOKUP

use std::collections::HashMap;

use log::{debug, info};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{
        binding_power, create_token_lookups, BindingPower, LEDHandler, LEDLookup, NUDHandler,
        NUDLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt_or_record,
};

/// Deepest expression nesting accepted before the parse of a statement is
/// abandoned, keeping recursion well inside the thread's stack.
pub const MAX_NESTING_DEPTH: usize = 100;

/// The main parser structure that maintains parsing state.
///
/// Diagnostics are accumulated in order instead of aborting the parse;
/// a statement that fails is dropped and parsing resumes after it.
pub struct Parser {
    /// Source of tokens, pulled one at a time
    lexer: Lexer,
    /// The token under examination
    current_token: Token,
    /// The token after `current_token`
    peek_token: Token,
    /// Diagnostics recorded so far
    errors: Vec<Error>,
    /// Expressions currently being parsed, innermost included
    depth: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
}

impl Parser {
    /// Creates a new Parser over `lexer`, filling the two-token window.
    pub fn new(mut lexer: Lexer) -> Self {
        let current_token = lexer.next_token();
        let peek_token = lexer.next_token();

        let mut parser = Parser {
            lexer,
            current_token,
            peek_token,
            errors: vec![],
            depth: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek_token
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek_token.kind
    }

    /// Shifts the peek token into the current slot and pulls a new peek token.
    pub fn advance(&mut self) {
        self.current_token = std::mem::replace(&mut self.peek_token, self.lexer.next_token());
    }

    pub fn current_binding_power(&self) -> BindingPower {
        binding_power(self.current_token.kind)
    }

    pub fn peek_binding_power(&self) -> BindingPower {
        binding_power(self.peek_token.kind)
    }

    /// Consumes the current token if it is of `expected_kind`.
    ///
    /// On a mismatch nothing is consumed: the unexpected token stays current
    /// and the statement loop steps past it.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.current_token.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    received: self.current_token.kind,
                },
                self.get_position(),
            ));
        }

        let token = self.current_token.clone();
        self.advance();

        Ok(token)
    }

    /// Advances onto the peek token if it is of `expected_kind`.
    ///
    /// On a mismatch the window does not move, so the unexpected token is
    /// the first one the statement loop looks at next.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.peek_token.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    received: self.peek_token.kind,
                },
                self.peek_token.span.start,
            ));
        }

        self.advance();

        Ok(self.current_token.clone())
    }

    /// Enters one level of expression nesting, failing past [`MAX_NESTING_DEPTH`].
    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn exit_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Appends a diagnostic to the ordered list.
    pub fn record(&mut self, error: Error) {
        debug!(
            "recorded {} at offset {}: {}",
            error.get_error_name(),
            error.get_position().0,
            error
        );
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// The token's binding power comes from the global binding power table.
    pub fn led(&mut self, kind: TokenKind, led_fn: LEDHandler) {
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the position of the current token in the source text.
    pub fn get_position(&self) -> Position {
        self.current_token.span.start
    }

    /// Parses statements until end of input.
    ///
    /// Never stops early: failed statements are recorded and skipped.
    pub fn parse_program(&mut self) -> Program {
        info!("parsing program ({} bytes)", self.lexer.source().len());

        let mut program = Program::default();

        while !self.current_token.is(TokenKind::EOF) {
            if let Some(stmt) = parse_stmt_or_record(self) {
                program.statements.push(stmt);
            }
            self.advance();
        }

        info!(
            "parsed {} statements with {} errors",
            program.statements.len(),
            self.errors.len()
        );

        program
    }
}
