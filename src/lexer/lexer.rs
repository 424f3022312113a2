use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, Span, MK_TOKEN};

use super::tokens::{lookup_identifier, Token, TokenKind};

lazy_static! {
    static ref WHITESPACE_PATTERN: Regex = Regex::new(r"^\s+").unwrap();
    // Letters, symbols and `_`, minus the symbols that are operators on their own.
    static ref WORD_PATTERN: Regex = Regex::new(r"^[[\p{L}\p{S}_]--[+<=>]]+").unwrap();
    static ref NUMBER_PATTERN: Regex = Regex::new(r"^\p{N}+(\.\p{N}*)?").unwrap();
}

/// Pull-based tokenizer over an in-memory source text.
///
/// Each call to [`Lexer::next_token`] produces exactly one token. Once the
/// text is exhausted every further call yields an `EOF` token.
#[derive(Clone, Debug)]
pub struct Lexer {
    source: String,
    /// Byte offset of the code point under the cursor
    pos: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            source: String::from(source),
            pos: 0,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.source.len());
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    /// The code point under the cursor.
    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    /// The code point immediately after the cursor.
    pub fn peek(&self) -> Option<char> {
        self.remainder().chars().nth(1)
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn skip_whitespace(&mut self) {
        if let Some(matched) = WHITESPACE_PATTERN.find(self.remainder()) {
            self.advance_n(matched.end());
        }
    }

    /// Consumes the maximal run matched by an anchored pattern.
    fn read_pattern(&mut self, pattern: &Regex) -> Option<String> {
        let matched = String::from(pattern.find(self.remainder())?.as_str());
        self.advance_n(matched.len());
        Some(matched)
    }

    fn read_operator(&self, ch: char) -> Option<TokenKind> {
        let kind = match (ch, self.peek()) {
            ('=', Some('=')) => TokenKind::Equals,
            ('!', Some('=')) => TokenKind::NotEquals,
            ('=', _) => TokenKind::Assignment,
            ('!', _) => TokenKind::Not,
            ('+', _) => TokenKind::Plus,
            ('-', _) => TokenKind::Dash,
            ('*', _) => TokenKind::Star,
            ('/', _) => TokenKind::Slash,
            ('<', _) => TokenKind::Less,
            ('>', _) => TokenKind::Greater,
            (',', _) => TokenKind::Comma,
            (';', _) => TokenKind::Semicolon,
            ('(', _) => TokenKind::OpenParen,
            (')', _) => TokenKind::CloseParen,
            ('{', _) => TokenKind::OpenCurly,
            ('}', _) => TokenKind::CloseCurly,
            _ => return None,
        };

        Some(kind)
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.pos;
        let Some(ch) = self.at() else {
            return MK_TOKEN!(TokenKind::EOF, String::new(), start, start);
        };

        if let Some(kind) = self.read_operator(ch) {
            // Operator and delimiter literals are their own names
            let literal = String::from(kind.name());
            self.advance_n(literal.len());
            return MK_TOKEN!(kind, literal, start, self.pos);
        }

        if let Some(word) = self.read_pattern(&WORD_PATTERN) {
            return MK_TOKEN!(lookup_identifier(&word), word, start, self.pos);
        }

        if let Some(number) = self.read_pattern(&NUMBER_PATTERN) {
            let kind = if number.contains('.') {
                TokenKind::Float
            } else {
                TokenKind::Integer
            };
            return MK_TOKEN!(kind, number, start, self.pos);
        }

        self.advance_n(ch.len_utf8());
        MK_TOKEN!(TokenKind::Illegal, ch.to_string(), start, self.pos)
    }
}

/// Collects every token of `source` up to and including the first `EOF`.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.is(TokenKind::EOF);
        tokens.push(token);

        if done {
            break;
        }
    }

    tokens
}
