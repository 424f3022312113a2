#![allow(clippy::module_inception)]

use std::fmt::Write;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::Lexer,
    parser::parser::Parser,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Byte offset into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Parses a complete source text, returning the program and every diagnostic.
///
/// An empty diagnostics list is the only signal of success; a partial
/// program is returned alongside diagnostics when statements were dropped.
pub fn parse(source: &str) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    (program, parser.into_errors())
}

/// Resolves a byte offset to `(line number, line text, column)`.
///
/// The column counts code points. An offset equal to the text length
/// resolves to the position just past the final character.
pub fn get_line_at_position(content: &str, pos: usize) -> Option<(usize, String, usize)> {
    if pos > content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let column = line.get(..pos - start)?.chars().count();
            return Some((line_number, line.to_string(), column));
        }

        start = end;
        line_number += 1;
    }

    // Past the final character
    match content.split_inclusive('\n').last() {
        Some(line) if !line.ends_with('\n') => {
            Some((line_number - 1, line.to_string(), line.chars().count()))
        }
        _ => Some((line_number, String::new(), 0)),
    }
}

/// Renders a diagnostic with the offending line and a caret under its column.
pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    /*
        Error: UnexpectedToken (did you miss a semicolon?)
        -> input.mc
          |
        1 | let a = 5
          | ---------^
          = expected token type ;, got EOF instead
    */

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "-> {}", file);

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_position().0)
    else {
        let _ = writeln!(out, "  = {}", error);
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");
    let _ = writeln!(out, "{:>padding$} {}", "=", error);

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
