use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorImpl, ErrorTip},
    lexer::tokens::TokenKind,
    Position,
};

fn at(line: u32, column: u32) -> Position {
    Position::new(line, column, Rc::new("test.tez".to_string()))
}

#[test]
fn test_error_display_includes_position() {
    let error = Error::new(ErrorImpl::UnknownOperator { operator: '#' }, at(3, 7));

    assert_eq!(error.to_string(), "test.tez:3:7: unknown operator '#'");
    assert_eq!(error.get_error_name(), "UnknownOperator");
    assert_eq!(error.get_position().line, 3);
}

#[test]
fn test_unexpected_token_message_uses_kind_names() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::RParen,
            found: TokenKind::LBrace,
        },
        at(1, 1),
    );

    assert_eq!(
        error.get_internal_error().to_string(),
        "expected R_PAREN, got L_BRACE"
    );
    assert!(matches!(
        error.get_tip(),
        ErrorTip::Suggestion(tip) if tip.contains("expected `R_PAREN`")
    ));
}

#[test]
fn test_missing_semicolon_tip() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Semicolon,
            found: TokenKind::Identifier,
        },
        at(1, 1),
    );

    assert_eq!(
        error.get_tip().to_string(),
        "Unexpected token: `IDENTIFIER`, did you miss a semicolon?"
    );
}

#[test]
fn test_messages() {
    assert_eq!(
        ErrorImpl::MalformedCharacter { found: 'b' }.to_string(),
        "expected ''', got 'b'"
    );
    assert_eq!(ErrorImpl::MissingClosingBrace.to_string(), "missing closing '}'");
    assert_eq!(
        ErrorImpl::ExpectedPrimaryExpression {
            found: TokenKind::Semicolon
        }
        .to_string(),
        "expected primary expression, got SEMICOLON"
    );
}

#[test]
fn test_only_end_of_input_and_io_are_fatal() {
    assert!(Error::new(ErrorImpl::UnexpectedEndOfFile, at(1, 1)).is_fatal());
    assert!(Error::new(
        ErrorImpl::FileRead {
            file: "x.tez".to_string(),
            reason: "not found".to_string()
        },
        at(0, 0)
    )
    .is_fatal());
    assert!(!Error::new(ErrorImpl::InvalidCallTarget, at(1, 1)).is_fatal());
    assert!(matches!(
        Error::new(ErrorImpl::UnexpectedCharacter { character: 'é' }, at(1, 1)).get_tip(),
        ErrorTip::None
    ));
}
