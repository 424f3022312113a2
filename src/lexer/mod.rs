//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that turns source text
//! into tokens for the parser. It handles:
//!
//! - On-demand tokenization, one token per request
//! - Recognition of keywords, identifiers, integer and float literals
//! - One- and two-character operators and delimiters
//! - Token spans for diagnostic reporting
//!
//! Unrecognised characters become `Illegal` tokens rather than errors.

pub mod lexer;
pub mod tokens;
