use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position, Span};

/// A recorded parse failure together with the span of the offending token.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    span: Span,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, span: Span) -> Self {
        Error {
            internal_error: error_impl,
            span,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.span.start
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NoPrefixParseFn { .. } => "NoPrefixParseFn",
            ErrorImpl::IntegerParseError { .. } => "IntegerParseError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::Semicolon,
                ..
            } => ErrorTip::Suggestion(String::from("did you miss a semicolon?")),
            ErrorImpl::UnexpectedToken { .. } => ErrorTip::None,
            ErrorImpl::NoPrefixParseFn { kind } => {
                ErrorTip::Suggestion(format!("`{}` cannot start an expression", kind))
            }
            ErrorImpl::IntegerParseError { .. } => ErrorTip::Suggestion(String::from(
                "integer literals must fit in a signed 64-bit integer",
            )),
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::Suggestion(String::from(
                "split the expression with `let` bindings",
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
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken { expected: TokenKind, found: TokenKind },
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFn { kind: TokenKind },
    #[error("could not parse {literal:?} as integer")]
    IntegerParseError { literal: String },
    #[error("expression nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

/// Marker for a parse rule that produced no node. The failure has already
/// been recorded, so callers must not report it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reported;

pub type ParseResult<T> = Result<T, Reported>;
