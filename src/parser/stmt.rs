use log::trace;

use crate::{
    ast::{
        ast::{Block, Node},
        statements::{
            DoWhile, Enum, EnumMember, Field, For, Free, FunctionDeclaration, If, InlineAsm,
            Namespace, Param, Return, Struct, Union, Using, VariableDeclaration, While,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_expr, parse_postfix_unary},
    parser::Parser,
    types::parse_type,
};

pub fn parse_stmt(parser: &mut Parser) -> Result<Node, Error> {
    trace!("statement at {}", parser.current_token());

    let handler = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied();
    if let Some(handler) = handler {
        return handler(parser);
    }

    let expr = parse_expr(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(expr)
}

/// Parses `{ statements }`. Malformed statements inside are reported and skipped.
///
/// A block left open at the end of input is reported, and the statements
/// parsed so far are kept.
pub fn parse_block(parser: &mut Parser) -> Result<Block, Error> {
    parser.expect(TokenKind::LBrace)?;

    let mut statements = Vec::new();
    loop {
        parser.skip_semicolons();
        if parser.match_token(&[TokenKind::RBrace]).is_some() {
            break;
        }
        if !parser.has_tokens() {
            let position = parser.current_token().position.clone();
            parser.report(Error::new(ErrorImpl::MissingClosingBrace, position));
            break;
        }
        if let Some(statement) = parser.parse_statement_recovering() {
            statements.push(statement);
        }
    }

    Ok(Block { statements })
}

pub fn parse_namespace_stmt(parser: &mut Parser) -> Result<Node, Error> {
    parser.advance();

    let mut names = vec![parser.expect(TokenKind::Identifier)?.value];
    while parser.match_token(&[TokenKind::ScopeResolution]).is_some() {
        names.push(parser.expect(TokenKind::Identifier)?.value);
    }

    // `namespace a::b { .. }` nests `b` inside `a`; the body belongs to the innermost.
    let mut body = parse_block(parser)?;
    let outermost = names.remove(0);
    for name in names.into_iter().rev() {
        body = Block {
            statements: vec![Node::Namespace(Namespace { name, body })],
        };
    }

    Ok(Node::Namespace(Namespace {
        name: outermost,
        body,
    }))
}

pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<Node, Error> {
    parser.advance();

    let first = parser.expect(TokenKind::Identifier)?.value;
    let (owner, name) = if parser.match_token(&[TokenKind::ScopeResolution]).is_some() {
        (Some(first), parser.expect(TokenKind::Identifier)?.value)
    } else {
        (None, first)
    };

    parser.expect(TokenKind::LParen)?;

    let mut params = Vec::new();
    if !parser.check(TokenKind::RParen) {
        loop {
            params.push(parse_fn_param(parser)?);
            if parser.match_token(&[TokenKind::Comma]).is_none() {
                break;
            }
        }
    }

    parser.expect(TokenKind::RParen)?;

    let return_type = if parser.match_token(&[TokenKind::Arrow]).is_some() {
        parse_type(parser)?
    } else {
        Node::Identifier(String::from("void"))
    };

    let body = parse_block(parser)?;

    Ok(Node::FunctionDeclaration(FunctionDeclaration {
        owner,
        name,
        params,
        return_type: Box::new(return_type),
        body,
    }))
}

fn parse_fn_param(parser: &mut Parser) -> Result<Param, Error> {
    let name = parser.expect(TokenKind::Identifier)?.value;
    parser.expect(TokenKind::Colon)?;
    let constant = parser.match_token(&[TokenKind::Var]).is_none();
    let ty = parse_type(parser)?;

    Ok(Param { name, constant, ty })
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let constant = parser.advance().kind == TokenKind::Let;

    let name = parser.expect(TokenKind::Identifier)?.value;
    parser.expect(TokenKind::Colon)?;
    let ty = parse_type(parser)?;

    let initializer = if parser.match_token(&[TokenKind::Equals]).is_some() {
        Some(Box::new(parse_expr(parser)?))
    } else {
        None
    };

    parser.expect(TokenKind::Semicolon)?;

    Ok(Node::VariableDeclaration(VariableDeclaration {
        name,
        constant,
        ty: Box::new(ty),
        initializer,
    }))
}

/// `name : type ;` repeated until `}`; shared by structs and unions.
fn parse_fields(parser: &mut Parser) -> Result<Vec<Field>, Error> {
    parser.expect(TokenKind::LBrace)?;

    let mut fields = Vec::new();
    while parser.match_token(&[TokenKind::RBrace]).is_none() {
        if !parser.has_tokens() {
            return Err(Error::new(
                ErrorImpl::MissingClosingBrace,
                parser.current_token().position.clone(),
            ));
        }
        let name = parser.expect(TokenKind::Identifier)?.value;
        parser.expect(TokenKind::Colon)?;
        let ty = parse_type(parser)?;
        parser.expect(TokenKind::Semicolon)?;
        fields.push(Field { name, ty });
    }

    Ok(fields)
}

pub fn parse_struct_decl_stmt(parser: &mut Parser) -> Result<Node, Error> {
    parser.advance();

    let name = parser.expect(TokenKind::Identifier)?.value;
    let fields = parse_fields(parser)?;

    Ok(Node::Struct(Struct { name, fields }))
}

pub fn parse_union_decl_stmt(parser: &mut Parser) -> Result<Node, Error> {
    parser.advance();

    let name = parser.expect(TokenKind::Identifier)?.value;
    let fields = parse_fields(parser)?;

    Ok(Node::Union(Union { name, fields }))
}

pub fn parse_enum_decl_stmt(parser: &mut Parser) -> Result<Node, Error> {
    parser.advance();

    let name = parser.expect(TokenKind::Identifier)?.value;
    parser.expect(TokenKind::LBrace)?;

    // Unmarked members continue counting from the previous value.
    let mut counter: i64 = 0;
    let mut members = Vec::new();
    while !parser.check(TokenKind::RBrace) {
        let member_name = parser.expect(TokenKind::Identifier)?.value;
        if parser.match_token(&[TokenKind::Equals]).is_some() {
            let token = parser.expect(TokenKind::Integer)?;
            counter = token.value.parse().map_err(|_| {
                Error::new(
                    ErrorImpl::NumberParseError {
                        token: token.value.clone(),
                    },
                    token.position.clone(),
                )
            })?;
        }

        members.push(EnumMember {
            name: member_name,
            value: counter,
        });
        counter = counter.wrapping_add(1);

        if parser.match_token(&[TokenKind::Comma]).is_none() {
            break;
        }
    }

    parser.expect(TokenKind::RBrace)?;

    Ok(Node::Enum(Enum { name, members }))
}

pub fn parse_using_stmt(parser: &mut Parser) -> Result<Node, Error> {
    parser.advance();

    let namespace = parser.expect(TokenKind::Identifier)?.value;
    let alias = if parser.match_token(&[TokenKind::As]).is_some() {
        Some(parser.expect(TokenKind::Identifier)?.value)
    } else {
        None
    };

    parser.expect(TokenKind::Semicolon)?;

    Ok(Node::Using(Using { namespace, alias }))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Node, Error> {
    parser.advance();

    let condition = parse_expr(parser)?;
    let then_block = parse_block(parser)?;

    let else_branch = if parser.match_token(&[TokenKind::Else]).is_some() {
        if parser.check(TokenKind::If) {
            Some(Box::new(parse_if_stmt(parser)?))
        } else {
            Some(Box::new(Node::Block(parse_block(parser)?)))
        }
    } else {
        None
    };

    Ok(Node::If(If {
        condition: Box::new(condition),
        then_block,
        else_branch,
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Node, Error> {
    parser.advance();

    let condition = parse_expr(parser)?;
    let body = parse_block(parser)?;

    Ok(Node::While(While {
        condition: Box::new(condition),
        body,
    }))
}

pub fn parse_do_while_stmt(parser: &mut Parser) -> Result<Node, Error> {
    parser.advance();

    let body = parse_block(parser)?;
    parser.expect(TokenKind::While)?;
    let condition = parse_expr(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Node::DoWhile(DoWhile {
        body,
        condition: Box::new(condition),
    }))
}

/// `for init-statement condition-statement iteration { body }`
pub fn parse_for_stmt(parser: &mut Parser) -> Result<Node, Error> {
    parser.advance();

    let init = parse_stmt(parser)?;
    let condition = parse_stmt(parser)?;
    let iteration = parse_expr(parser)?;
    let body = parse_block(parser)?;

    Ok(Node::For(For {
        init: Box::new(init),
        condition: Box::new(condition),
        iteration: Box::new(iteration),
        body,
    }))
}

pub fn parse_break_stmt(parser: &mut Parser) -> Result<Node, Error> {
    parser.advance();
    parser.expect(TokenKind::Semicolon)?;

    Ok(Node::Break)
}

pub fn parse_continue_stmt(parser: &mut Parser) -> Result<Node, Error> {
    parser.advance();
    parser.expect(TokenKind::Semicolon)?;

    Ok(Node::Continue)
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Node, Error> {
    parser.advance();

    let value = if parser.check(TokenKind::Semicolon) {
        None
    } else {
        Some(Box::new(parse_expr(parser)?))
    };

    parser.expect(TokenKind::Semicolon)?;

    Ok(Node::Return(Return { value }))
}

pub fn parse_free_stmt(parser: &mut Parser) -> Result<Node, Error> {
    parser.advance();

    let target = parse_postfix_unary(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Node::Free(Free {
        target: Box::new(target),
    }))
}

pub fn parse_asm_stmt(parser: &mut Parser) -> Result<Node, Error> {
    parser.advance();
    parser.expect(TokenKind::LBrace)?;

    let mut operations = Vec::new();
    while parser.check(TokenKind::String) {
        operations.push(parser.advance().value.clone());
    }

    parser.expect(TokenKind::RBrace)?;

    Ok(Node::InlineAsm(InlineAsm { operations }))
}
