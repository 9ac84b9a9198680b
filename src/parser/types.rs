//! Type parsing implementation.
//!
//! Types have their own small recursive-descent grammar, independent of
//! expressions:
//!
//! - Array types: `[type]` or `[type, size]`
//! - Pointer types: `^type`
//! - Scoped names: `a::b::T`
//! - Plain identifiers
//!
//! Only the size of an array type goes back through the expression grammar.

use crate::{
    ast::{
        ast::Node,
        expressions::ScopeResolution,
        types::{ArrayType, PointerType},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, parser::Parser};

pub fn parse_type(parser: &mut Parser) -> Result<Node, Error> {
    parse_array_type(parser)
}

pub fn parse_array_type(parser: &mut Parser) -> Result<Node, Error> {
    if parser.match_token(&[TokenKind::LBracket]).is_none() {
        return parse_pointer_type(parser);
    }

    let element = parse_array_type(parser)?;
    let size = if parser.match_token(&[TokenKind::Comma]).is_some() {
        Some(Box::new(parse_expr(parser)?))
    } else {
        None
    };
    parser.expect(TokenKind::RBracket)?;

    Ok(Node::Array(ArrayType {
        element: Box::new(element),
        size,
    }))
}

pub fn parse_pointer_type(parser: &mut Parser) -> Result<Node, Error> {
    if parser.match_token(&[TokenKind::Caret]).is_none() {
        return parse_type_scope_resolution(parser);
    }

    Ok(Node::Pointer(PointerType {
        pointee: Box::new(parse_type(parser)?),
    }))
}

pub fn parse_type_scope_resolution(parser: &mut Parser) -> Result<Node, Error> {
    let left = parse_type_identifier(parser)?;
    if parser.match_token(&[TokenKind::ScopeResolution]).is_some() {
        let right = parse_type_scope_resolution(parser)?;
        return Ok(Node::ScopeResolution(ScopeResolution {
            left: Box::new(left),
            right: Box::new(right),
        }));
    }
    Ok(left)
}

pub fn parse_type_identifier(parser: &mut Parser) -> Result<Node, Error> {
    let token = parser.expect(TokenKind::Identifier)?;
    Ok(Node::Identifier(token.value))
}
