//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SPAN!` - Creates a Span from two byte offsets

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$literal` - The token's source text
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $literal:expr, $span:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            literal: $literal,
            span: $span,
        }
    };
}

/// Creates a Span covering the byte offsets `$start..$end`.
#[macro_export]
macro_rules! MK_SPAN {
    ($start:expr, $end:expr) => {
        $crate::Span {
            start: $crate::Position($start as u32),
            end: $crate::Position($end as u32),
        }
    };
}
