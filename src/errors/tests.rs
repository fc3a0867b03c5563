//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "Ident".to_string(),
            found: "=".to_string(),
        },
        Position(10, Rc::new("test.mk".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.mk".to_string()));
    let error = Error::new(
        ErrorImpl::ExpressionExpected {
            token: ")".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_expression_expected_error() {
    let error = Error::new(
        ErrorImpl::ExpressionExpected {
            token: "}".to_string(),
        },
        Position(0, Rc::new("test.mk".to_string())),
    );

    assert_eq!(error.get_error_name(), "ExpressionExpected");
}

#[test]
fn test_number_parse_error_tip() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string(),
        },
        Position(0, Rc::new("test.mk".to_string())),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
    let ErrorTip::Suggestion(tip) = error.get_tip() else {
        panic!("expected a suggestion");
    };
    assert!(tip.contains("99999999999999999999"));
}

#[test]
fn test_nesting_too_deep_error() {
    let error = Error::new(
        ErrorImpl::NestingTooDeep { limit: 128 },
        Position(64, Rc::new("test.mk".to_string())),
    );

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    let ErrorTip::Suggestion(tip) = error.get_tip() else {
        panic!("expected a suggestion");
    };
    assert!(tip.contains("128"));
}

#[test]
fn test_error_impl_display() {
    let error = ErrorImpl::UnexpectedToken {
        expected: "RParen".to_string(),
        found: ";".to_string(),
    };

    assert_eq!(
        error.to_string(),
        "unexpected token: expected \"RParen\", found \";\""
    );
}
