use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// A single diagnostic: what went wrong and where.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Whether this error ends the phase that raised it.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self.internal_error,
            ErrorImpl::UnexpectedEndOfFile | ErrorImpl::FileRead { .. }
        )
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::UnknownOperator { .. } => "UnknownOperator",
            ErrorImpl::MalformedCharacter { .. } => "MalformedCharacter",
            ErrorImpl::TooManyDecimalPoints { .. } => "TooManyDecimalPoints",
            ErrorImpl::UnexpectedEndOfFile => "UnexpectedEndOfFile",
            ErrorImpl::FileRead { .. } => "FileRead",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedPrimaryExpression { .. } => "ExpectedPrimaryExpression",
            ErrorImpl::InvalidCallTarget => "InvalidCallTarget",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::MissingClosingBrace => "MissingClosingBrace",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnknownOperator { operator } => ErrorTip::Suggestion(format!(
                "`{}` is not an operator of the language",
                operator
            )),
            ErrorImpl::MalformedCharacter { .. } => ErrorTip::Suggestion(String::from(
                "character literals hold exactly one character or one escape sequence",
            )),
            ErrorImpl::TooManyDecimalPoints { literal } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, remove the extra `.`",
                literal
            )),
            ErrorImpl::UnexpectedEndOfFile => ErrorTip::Suggestion(String::from(
                "is a string, character literal or comment left unterminated?",
            )),
            ErrorImpl::FileRead { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { expected, found } => {
                if *expected == TokenKind::Semicolon {
                    ErrorTip::Suggestion(format!(
                        "Unexpected token: `{}`, did you miss a semicolon?",
                        found
                    ))
                } else {
                    ErrorTip::Suggestion(format!(
                        "Unexpected token: `{}`, expected `{}`",
                        found, expected
                    ))
                }
            }
            ErrorImpl::ExpectedPrimaryExpression { found } => ErrorTip::Suggestion(format!(
                "`{}` cannot start an expression",
                found
            )),
            ErrorImpl::InvalidCallTarget => ErrorTip::Suggestion(String::from(
                "only a plain function name can be called",
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::MissingClosingBrace => {
                ErrorTip::Suggestion(String::from("a block was opened but never closed"))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.position, self.internal_error)
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
    #[error("unexpected character '{character}'")]
    UnexpectedCharacter { character: char },
    #[error("unknown operator '{operator}'")]
    UnknownOperator { operator: char },
    #[error("expected ''', got '{found}'")]
    MalformedCharacter { found: char },
    #[error("too many decimal points in number {literal:?}")]
    TooManyDecimalPoints { literal: String },
    #[error("unexpected end of file")]
    UnexpectedEndOfFile,
    #[error("failed to open file {file:?}: {reason}")]
    FileRead { file: String, reason: String },
    #[error("expected {expected}, got {found}")]
    UnexpectedToken { expected: TokenKind, found: TokenKind },
    #[error("expected primary expression, got {found}")]
    ExpectedPrimaryExpression { found: TokenKind },
    #[error("only an identifier can be called as a function")]
    InvalidCallTarget,
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("missing closing '}}'")]
    MissingClosingBrace,
}
