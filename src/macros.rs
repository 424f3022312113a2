//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$literal` - The token's source text
/// * `$start` - Byte offset where the token begins
/// * `$end` - Byte offset just past the token
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), 0, 2);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $literal:expr, $start:expr, $end:expr) => {
        Token {
            kind: $kind,
            literal: $literal,
            span: Span {
                start: Position($start),
                end: Position($end),
            },
        }
    };
}
