use std::collections::HashMap;

use crate::{ast::ast::Node, errors::errors::Error, lexer::tokens::TokenKind};

use super::{parser::Parser, stmt::*};

/// Expression precedence levels, lowest binding first.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum Precedence {
    Assignment,
    LogicalOr,
    LogicalAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    Equality,
    Comparison,
    BitwiseShift,
    Additive,
    Multiplicative,
    Cast,
    PrefixUnary,
    PostfixUnary,
}

impl Precedence {
    /// The operator tokens handled at this level.
    pub fn operators(&self) -> &'static [TokenKind] {
        match self {
            Precedence::Assignment => &[
                TokenKind::Equals,
                TokenKind::PlusEquals,
                TokenKind::MinusEquals,
                TokenKind::MultiplyEquals,
                TokenKind::DivideEquals,
                TokenKind::ModuloEquals,
                TokenKind::AndEquals,
                TokenKind::OrEquals,
                TokenKind::XorEquals,
                TokenKind::LeftShiftEquals,
                TokenKind::RightShiftEquals,
            ],
            Precedence::LogicalOr => &[TokenKind::LogicalOr],
            Precedence::LogicalAnd => &[TokenKind::LogicalAnd],
            Precedence::BitwiseOr => &[TokenKind::BitwiseOr],
            Precedence::BitwiseXor => &[TokenKind::Caret],
            Precedence::BitwiseAnd => &[TokenKind::Ampersand],
            Precedence::Equality => &[TokenKind::EqualsEquals, TokenKind::BangEquals],
            Precedence::Comparison => &[
                TokenKind::Greater,
                TokenKind::GreaterEquals,
                TokenKind::Less,
                TokenKind::LessEquals,
            ],
            Precedence::BitwiseShift => {
                &[TokenKind::BitwiseShiftLeft, TokenKind::BitwiseShiftRight]
            }
            Precedence::Additive => &[TokenKind::Plus, TokenKind::Minus],
            Precedence::Multiplicative => {
                &[TokenKind::Asterisk, TokenKind::Slash, TokenKind::Modulo]
            }
            Precedence::Cast => &[TokenKind::As],
            Precedence::PrefixUnary => &[
                TokenKind::Bang,
                TokenKind::Minus,
                TokenKind::Ampersand,
                TokenKind::Caret,
                TokenKind::New,
            ],
            Precedence::PostfixUnary => &[
                TokenKind::LParen,
                TokenKind::LBracket,
                TokenKind::Dot,
                TokenKind::Arrow,
            ],
        }
    }
}

/// Tokens at which panic-mode recovery stops discarding.
pub const SYNCHRONIZATION_TOKENS: &[TokenKind] = &[
    TokenKind::Semicolon,
    TokenKind::LBrace,
    TokenKind::RBrace,
    TokenKind::LParen,
    TokenKind::RParen,
    TokenKind::Comma,
];

pub type StmtHandler = fn(&mut Parser) -> Result<Node, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Declarations
    parser.stmt(TokenKind::Namespace, parse_namespace_stmt);
    parser.stmt(TokenKind::Func, parse_fn_decl_stmt);
    parser.stmt(TokenKind::Struct, parse_struct_decl_stmt);
    parser.stmt(TokenKind::Enum, parse_enum_decl_stmt);
    parser.stmt(TokenKind::Union, parse_union_decl_stmt);
    parser.stmt(TokenKind::Let, parse_var_decl_stmt);
    parser.stmt(TokenKind::Var, parse_var_decl_stmt);
    parser.stmt(TokenKind::Using, parse_using_stmt);

    // Control flow
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::While, parse_while_stmt);
    parser.stmt(TokenKind::Do, parse_do_while_stmt);
    parser.stmt(TokenKind::For, parse_for_stmt);
    parser.stmt(TokenKind::Break, parse_break_stmt);
    parser.stmt(TokenKind::Continue, parse_continue_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);

    // Memory and machine code
    parser.stmt(TokenKind::Free, parse_free_stmt);
    parser.stmt(TokenKind::Asm, parse_asm_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
