//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;
use std::rc::Rc;

fn at(offset: u32) -> Position {
    Position(offset, Rc::new("test.mk".to_string()))
}

#[test]
fn test_unexpected_peek_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedPeek {
            expected: TokenKind::Assignment,
            received: TokenKind::Integer,
        },
        at(6),
    );

    assert_eq!(
        error.to_string(),
        "expected next token to be ASSIGN, got INTEGER instead"
    );
    assert_eq!(error.get_error_name(), "UnexpectedPeek");
    assert_eq!(error.get_position().0, 6);
}

#[test]
fn test_missing_prefix_handler_message() {
    let error = Error::new(ErrorImpl::MissingPrefixHandler { kind: TokenKind::Illegal }, at(0));

    assert_eq!(error.to_string(), "no prefix parse function for ILLEGAL found");
    assert_eq!(error.get_error_name(), "MissingPrefixHandler");
}

#[test]
fn test_integer_parse_error_message() {
    let error = Error::new(
        ErrorImpl::IntegerParseError {
            literal: "99999999999999999999".to_string(),
        },
        at(0),
    );

    assert_eq!(
        error.to_string(),
        "could not parse \"99999999999999999999\" as integer"
    );
}

#[test]
fn test_unexpected_eof_message() {
    let error = Error::new(ErrorImpl::UnexpectedEof { expected: TokenKind::CloseCurly }, at(3));

    assert_eq!(error.to_string(), "expected RBRACE, reached end of input");
    assert_eq!(error.get_error_name(), "UnexpectedEof");
}

#[test]
fn test_nesting_too_deep_message() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 256 }, at(256));

    assert_eq!(error.to_string(), "expression nested deeper than 256 levels");
    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(
        error.get_tip().to_string(),
        "split the expression with `let` bindings"
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnexpectedPeek {
            expected: TokenKind::Identifier,
            received: TokenKind::Assignment,
        },
        at(0),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(ErrorImpl::MissingPrefixHandler { kind: TokenKind::CloseParen }, at(0));

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "`RPAREN` cannot start an expression"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
