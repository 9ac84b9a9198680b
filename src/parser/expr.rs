//! Expression parsing by precedence climbing.
//!
//! Each level parses the next tighter level for its operands, so the call
//! chain below `parse_expr` mirrors `Precedence` from lowest to highest.

use crate::{
    ast::{
        ast::Node,
        expressions::{
            AddressOf, ArrayAccess, ArrayInitializer, BinaryOperation, Cast, FunctionCall,
            MemberAccess, New, PointerDereference, ScopeResolution, UnaryOperation,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::Precedence, parser::Parser, types::parse_type};

type ExprHandler = fn(&mut Parser) -> Result<Node, Error>;

pub fn parse_expr(parser: &mut Parser) -> Result<Node, Error> {
    parse_assignment(parser)
}

fn binary(operator: TokenKind, left: Node, right: Node) -> Node {
    Node::BinaryOperation(BinaryOperation {
        operator: operator.spelling().to_string(),
        left: Box::new(left),
        right: Box::new(right),
    })
}

/// Left-associative binary level: `operand (op operand)*`.
fn parse_binary_level(
    parser: &mut Parser,
    level: Precedence,
    operand: ExprHandler,
) -> Result<Node, Error> {
    let mut left = operand(parser)?;
    while let Some(operator) = parser.match_token(level.operators()) {
        let right = operand(parser)?;
        left = binary(operator, left, right);
    }
    Ok(left)
}

/// Assignments nest to the right: `a = b = c` is `a = (b = c)`.
pub fn parse_assignment(parser: &mut Parser) -> Result<Node, Error> {
    let left = parse_logical_or(parser)?;
    if let Some(operator) = parser.match_token(Precedence::Assignment.operators()) {
        let right = parse_assignment(parser)?;
        return Ok(binary(operator, left, right));
    }
    Ok(left)
}

pub fn parse_logical_or(parser: &mut Parser) -> Result<Node, Error> {
    parse_binary_level(parser, Precedence::LogicalOr, parse_logical_and)
}

pub fn parse_logical_and(parser: &mut Parser) -> Result<Node, Error> {
    parse_binary_level(parser, Precedence::LogicalAnd, parse_bitwise_or)
}

pub fn parse_bitwise_or(parser: &mut Parser) -> Result<Node, Error> {
    parse_binary_level(parser, Precedence::BitwiseOr, parse_bitwise_xor)
}

pub fn parse_bitwise_xor(parser: &mut Parser) -> Result<Node, Error> {
    parse_binary_level(parser, Precedence::BitwiseXor, parse_bitwise_and)
}

pub fn parse_bitwise_and(parser: &mut Parser) -> Result<Node, Error> {
    parse_binary_level(parser, Precedence::BitwiseAnd, parse_equality)
}

pub fn parse_equality(parser: &mut Parser) -> Result<Node, Error> {
    parse_binary_level(parser, Precedence::Equality, parse_comparison)
}

pub fn parse_comparison(parser: &mut Parser) -> Result<Node, Error> {
    parse_binary_level(parser, Precedence::Comparison, parse_bitwise_shift)
}

pub fn parse_bitwise_shift(parser: &mut Parser) -> Result<Node, Error> {
    parse_binary_level(parser, Precedence::BitwiseShift, parse_additive)
}

pub fn parse_additive(parser: &mut Parser) -> Result<Node, Error> {
    parse_binary_level(parser, Precedence::Additive, parse_multiplicative)
}

pub fn parse_multiplicative(parser: &mut Parser) -> Result<Node, Error> {
    parse_binary_level(parser, Precedence::Multiplicative, parse_cast)
}

/// `expr as type`; the target is read by the type grammar.
pub fn parse_cast(parser: &mut Parser) -> Result<Node, Error> {
    let mut expr = parse_prefix_unary(parser)?;
    while parser.match_token(Precedence::Cast.operators()).is_some() {
        let to = parse_type(parser)?;
        expr = Node::Cast(Cast {
            expr: Box::new(expr),
            to: Box::new(to),
        });
    }
    Ok(expr)
}

pub fn parse_prefix_unary(parser: &mut Parser) -> Result<Node, Error> {
    let Some(operator) = parser.match_token(Precedence::PrefixUnary.operators()) else {
        return parse_postfix_unary(parser);
    };

    match operator {
        TokenKind::Ampersand => Ok(Node::AddressOf(AddressOf {
            expr: Box::new(parse_postfix_unary(parser)?),
        })),
        TokenKind::Caret => Ok(Node::PointerDereference(PointerDereference {
            expr: Box::new(parse_postfix_unary(parser)?),
        })),
        TokenKind::New => Ok(Node::New(New {
            ty: Box::new(parse_type(parser)?),
        })),
        _ => Ok(Node::UnaryOperation(UnaryOperation {
            operator: operator.spelling().to_string(),
            operand: Box::new(parse_prefix_unary(parser)?),
        })),
    }
}

/// Calls, indexing and member access chained onto a base expression.
///
/// `.` and `->` take everything after them as their right side, so
/// `a.b[0]` is `a . (b[0])`. `a->b` is `(^a).b`.
pub fn parse_postfix_unary(parser: &mut Parser) -> Result<Node, Error> {
    let mut expr = parse_array_initializer(parser)?;

    while parser
        .current_token()
        .is_one_of_many(Precedence::PostfixUnary.operators())
    {
        match parser.current_token_kind() {
            TokenKind::LParen => {
                let Node::Identifier(name) = expr else {
                    return Err(Error::new(
                        ErrorImpl::InvalidCallTarget,
                        parser.current_token().position.clone(),
                    ));
                };
                parser.advance();
                expr = parse_call_expr(parser, name)?;
            }
            TokenKind::LBracket => {
                parser.advance();
                let index = parse_expr(parser)?;
                parser.expect(TokenKind::RBracket)?;
                expr = Node::ArrayAccess(ArrayAccess {
                    array: Box::new(expr),
                    index: Box::new(index),
                });
            }
            TokenKind::Dot => {
                parser.advance();
                let right = parse_postfix_unary(parser)?;
                return Ok(Node::MemberAccess(MemberAccess {
                    left: Box::new(expr),
                    right: Box::new(right),
                }));
            }
            TokenKind::Arrow => {
                parser.advance();
                let right = parse_postfix_unary(parser)?;
                let deref = Node::PointerDereference(PointerDereference {
                    expr: Box::new(expr),
                });
                return Ok(Node::MemberAccess(MemberAccess {
                    left: Box::new(deref),
                    right: Box::new(right),
                }));
            }
            _ => break,
        }
    }

    Ok(expr)
}

/// Arguments of `name(...)`; the opening parenthesis is already consumed.
fn parse_call_expr(parser: &mut Parser, name: String) -> Result<Node, Error> {
    let mut args = Vec::new();

    if parser.match_token(&[TokenKind::RParen]).is_none() {
        loop {
            args.push(parse_expr(parser)?);
            if parser.match_token(&[TokenKind::Comma]).is_none() {
                break;
            }
        }
        parser.expect(TokenKind::RParen)?;
    }

    Ok(Node::FunctionCall(FunctionCall { name, args }))
}

pub fn parse_array_initializer(parser: &mut Parser) -> Result<Node, Error> {
    if parser.match_token(&[TokenKind::LBracket]).is_none() {
        return parse_scope_resolution(parser);
    }

    let mut values = Vec::new();
    if parser.match_token(&[TokenKind::RBracket]).is_none() {
        loop {
            values.push(parse_expr(parser)?);
            if parser.match_token(&[TokenKind::Comma]).is_none() {
                break;
            }
        }
        parser.expect(TokenKind::RBracket)?;
    }

    Ok(Node::ArrayInitializer(ArrayInitializer { values }))
}

pub fn parse_scope_resolution(parser: &mut Parser) -> Result<Node, Error> {
    let left = parse_primary_expr(parser)?;
    if parser.match_token(&[TokenKind::ScopeResolution]).is_some() {
        let right = parse_postfix_unary(parser)?;
        return Ok(Node::ScopeResolution(ScopeResolution {
            left: Box::new(left),
            right: Box::new(right),
        }));
    }
    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Node, Error> {
    let token = parser.current_token().clone();

    let node = match token.kind {
        TokenKind::True => Node::Boolean(true),
        TokenKind::False => Node::Boolean(false),
        TokenKind::Null => Node::Null,
        TokenKind::Integer => match token.value.parse::<i64>() {
            Ok(value) => Node::Integer(value),
            Err(_) => {
                return Err(Error::new(
                    ErrorImpl::NumberParseError { token: token.value },
                    token.position,
                ))
            }
        },
        TokenKind::RealNumber => match token.value.parse::<f64>() {
            Ok(value) => Node::RealNumber(value),
            Err(_) => {
                return Err(Error::new(
                    ErrorImpl::NumberParseError { token: token.value },
                    token.position,
                ))
            }
        },
        TokenKind::String => Node::String(token.value),
        TokenKind::Character => Node::Character(token.value),
        TokenKind::Identifier => Node::Identifier(token.value),
        TokenKind::LParen => {
            parser.advance();
            let expr = parse_expr(parser)?;
            parser.expect(TokenKind::RParen)?;
            return Ok(Node::GroupingExpression(Box::new(expr)));
        }
        found => {
            return Err(Error::new(
                ErrorImpl::ExpectedPrimaryExpression { found },
                token.position,
            ))
        }
    };

    parser.advance();
    Ok(node)
}
