//! Unit tests for error handling.
//!
//! This module contains tests for error types, messages and the diagnostics sink.

use crate::errors::diagnostics::Diagnostics;
use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::MK_SPAN;

#[test]
fn test_unexpected_token_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Semicolon,
            found: TokenKind::EOF,
        },
        MK_SPAN!(9, 9),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(
        error.to_string(),
        "expected next token to be ;, got EOF instead"
    );
}

#[test]
fn test_unexpected_token_names_keywords() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Identifier,
            found: TokenKind::Integer,
        },
        MK_SPAN!(4, 5),
    );

    assert_eq!(
        error.to_string(),
        "expected next token to be IDENT, got INT instead"
    );
}

#[test]
fn test_no_prefix_parse_fn_message() {
    let error = Error::new(
        ErrorImpl::NoPrefixParseFn {
            kind: TokenKind::Illegal,
        },
        MK_SPAN!(0, 1),
    );

    assert_eq!(error.get_error_name(), "NoPrefixParseFn");
    assert_eq!(
        error.to_string(),
        "no prefix parse function for ILLEGAL found"
    );
}

#[test]
fn test_integer_parse_error_message() {
    let error = Error::new(
        ErrorImpl::IntegerParseError {
            literal: "99999999999999999999".to_string(),
        },
        MK_SPAN!(0, 20),
    );

    assert_eq!(error.get_error_name(), "IntegerParseError");
    assert_eq!(
        error.to_string(),
        "could not parse \"99999999999999999999\" as integer"
    );
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::NoPrefixParseFn {
            kind: TokenKind::CloseParen,
        },
        MK_SPAN!(42, 43),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_span().end.0, 43);
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Semicolon,
            found: TokenKind::Integer,
        },
        MK_SPAN!(0, 0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "did you miss a semicolon?"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::CloseParen,
            found: TokenKind::EOF,
        },
        MK_SPAN!(0, 0),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_diagnostics_preserve_order() {
    let mut diagnostics = Diagnostics::new();
    assert!(diagnostics.is_empty());

    diagnostics.push(Error::new(
        ErrorImpl::NoPrefixParseFn {
            kind: TokenKind::Illegal,
        },
        MK_SPAN!(0, 1),
    ));
    diagnostics.push(Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Assignment,
            found: TokenKind::Integer,
        },
        MK_SPAN!(6, 7),
    ));

    assert_eq!(diagnostics.len(), 2);
    assert_eq!(
        diagnostics.messages(),
        vec![
            "no prefix parse function for ILLEGAL found".to_string(),
            "expected next token to be =, got INT instead".to_string(),
        ]
    );

    let positions: Vec<u32> = diagnostics.iter().map(|e| e.get_position().0).collect();
    assert_eq!(positions, vec![0, 6]);
    assert_eq!(diagnostics.into_errors().len(), 2);
}

#[test]
fn test_nesting_too_deep_message() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 128 }, MK_SPAN!(128, 129));

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.to_string(), "expression nested deeper than 128 levels");
    assert!(matches!(error.get_impl(), ErrorImpl::NestingTooDeep { limit: 128 }));
}
