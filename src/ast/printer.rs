//! Indented dump of a syntax tree, one node per line.
//!
//! The nesting depth is passed down explicitly through every call.

use std::fmt::{self, Display, Formatter};

use super::{
    ast::{Block, File, Node},
    statements::Field,
};

const INDENT: &str = "  ";

impl Display for File {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write_node(f, statement, 0)?;
        }
        Ok(())
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_node(f, self, 0)
    }
}

fn write_line(f: &mut Formatter<'_>, depth: usize, text: &str) -> fmt::Result {
    writeln!(f, "{}{}", INDENT.repeat(depth), text)
}

fn write_labeled(f: &mut Formatter<'_>, depth: usize, label: &str, node: &Node) -> fmt::Result {
    write_line(f, depth, &format!("{}:", label))?;
    write_node(f, node, depth + 1)
}

fn write_block(f: &mut Formatter<'_>, depth: usize, label: &str, block: &Block) -> fmt::Result {
    write_line(f, depth, &format!("{}:", label))?;
    for statement in block.iter() {
        write_node(f, statement, depth + 1)?;
    }
    Ok(())
}

fn write_fields(f: &mut Formatter<'_>, depth: usize, fields: &[Field]) -> fmt::Result {
    for field in fields {
        write_labeled(f, depth, &format!("Field {}", field.name), &field.ty)?;
    }
    Ok(())
}

pub fn write_node(f: &mut Formatter<'_>, node: &Node, depth: usize) -> fmt::Result {
    match node {
        Node::Namespace(namespace) => {
            write_line(f, depth, &format!("Namespace {}", namespace.name))?;
            for statement in namespace.body.iter() {
                write_node(f, statement, depth + 1)?;
            }
            Ok(())
        }
        Node::Block(block) => {
            write_line(f, depth, "Block")?;
            for statement in block.iter() {
                write_node(f, statement, depth + 1)?;
            }
            Ok(())
        }
        Node::Boolean(value) => write_line(f, depth, &format!("Boolean {}", value)),
        Node::Integer(value) => write_line(f, depth, &format!("Integer {}", value)),
        Node::RealNumber(value) => write_line(f, depth, &format!("RealNumber {:?}", value)),
        Node::String(value) => write_line(f, depth, &format!("String \"{}\"", value)),
        Node::Character(value) => write_line(f, depth, &format!("Character '{}'", value)),
        Node::Identifier(name) => write_line(f, depth, &format!("Identifier {}", name)),
        Node::Null => write_line(f, depth, "Null"),
        Node::UnaryOperation(unary) => {
            write_line(f, depth, &format!("UnaryOperation {}", unary.operator))?;
            write_node(f, &unary.operand, depth + 1)
        }
        Node::BinaryOperation(binary) => {
            write_line(f, depth, &format!("BinaryOperation {}", binary.operator))?;
            write_node(f, &binary.left, depth + 1)?;
            write_node(f, &binary.right, depth + 1)
        }
        Node::GroupingExpression(inner) => {
            write_line(f, depth, "GroupingExpression")?;
            write_node(f, inner, depth + 1)
        }
        Node::Cast(cast) => {
            write_line(f, depth, "Cast")?;
            write_node(f, &cast.expr, depth + 1)?;
            write_labeled(f, depth + 1, "to", &cast.to)
        }
        Node::FunctionCall(call) => {
            write_line(f, depth, &format!("FunctionCall {}", call.name))?;
            for arg in &call.args {
                write_node(f, arg, depth + 1)?;
            }
            Ok(())
        }
        Node::AddressOf(address_of) => {
            write_line(f, depth, "AddressOf")?;
            write_node(f, &address_of.expr, depth + 1)
        }
        Node::PointerDereference(deref) => {
            write_line(f, depth, "PointerDereference")?;
            write_node(f, &deref.expr, depth + 1)
        }
        Node::New(new) => {
            write_line(f, depth, "New")?;
            write_node(f, &new.ty, depth + 1)
        }
        Node::ArrayInitializer(array) => {
            write_line(f, depth, "ArrayInitializer")?;
            for value in &array.values {
                write_node(f, value, depth + 1)?;
            }
            Ok(())
        }
        Node::ArrayAccess(access) => {
            write_line(f, depth, "ArrayAccess")?;
            write_node(f, &access.array, depth + 1)?;
            write_labeled(f, depth + 1, "index", &access.index)
        }
        Node::MemberAccess(access) => {
            write_line(f, depth, "MemberAccess")?;
            write_node(f, &access.left, depth + 1)?;
            write_node(f, &access.right, depth + 1)
        }
        Node::ScopeResolution(scope) => {
            write_line(f, depth, "ScopeResolution")?;
            write_node(f, &scope.left, depth + 1)?;
            write_node(f, &scope.right, depth + 1)
        }
        Node::FunctionDeclaration(func) => {
            let name = match &func.owner {
                Some(owner) => format!("{}::{}", owner, func.name),
                None => func.name.clone(),
            };
            write_line(f, depth, &format!("FunctionDeclaration {}", name))?;
            for param in &func.params {
                let label = if param.constant {
                    format!("Param {}", param.name)
                } else {
                    format!("Param var {}", param.name)
                };
                write_labeled(f, depth + 1, &label, &param.ty)?;
            }
            write_labeled(f, depth + 1, "returns", &func.return_type)?;
            write_block(f, depth + 1, "body", &func.body)
        }
        Node::Return(ret) => {
            write_line(f, depth, "Return")?;
            match &ret.value {
                Some(value) => write_node(f, value, depth + 1),
                None => Ok(()),
            }
        }
        Node::VariableDeclaration(decl) => {
            let keyword = if decl.constant { "let" } else { "var" };
            write_line(f, depth, &format!("VariableDeclaration {} {}", keyword, decl.name))?;
            write_labeled(f, depth + 1, "type", &decl.ty)?;
            match &decl.initializer {
                Some(initializer) => write_labeled(f, depth + 1, "initializer", initializer),
                None => Ok(()),
            }
        }
        Node::If(if_stmt) => {
            write_line(f, depth, "If")?;
            write_labeled(f, depth + 1, "condition", &if_stmt.condition)?;
            write_block(f, depth + 1, "then", &if_stmt.then_block)?;
            match &if_stmt.else_branch {
                Some(else_branch) => write_labeled(f, depth + 1, "else", else_branch),
                None => Ok(()),
            }
        }
        Node::While(while_stmt) => {
            write_line(f, depth, "While")?;
            write_labeled(f, depth + 1, "condition", &while_stmt.condition)?;
            write_block(f, depth + 1, "body", &while_stmt.body)
        }
        Node::DoWhile(do_while) => {
            write_line(f, depth, "DoWhile")?;
            write_block(f, depth + 1, "body", &do_while.body)?;
            write_labeled(f, depth + 1, "condition", &do_while.condition)
        }
        Node::For(for_stmt) => {
            write_line(f, depth, "For")?;
            write_labeled(f, depth + 1, "init", &for_stmt.init)?;
            write_labeled(f, depth + 1, "condition", &for_stmt.condition)?;
            write_labeled(f, depth + 1, "iteration", &for_stmt.iteration)?;
            write_block(f, depth + 1, "body", &for_stmt.body)
        }
        Node::Break => write_line(f, depth, "Break"),
        Node::Continue => write_line(f, depth, "Continue"),
        Node::Struct(struct_decl) => {
            write_line(f, depth, &format!("Struct {}", struct_decl.name))?;
            write_fields(f, depth + 1, &struct_decl.fields)
        }
        Node::Enum(enum_decl) => {
            write_line(f, depth, &format!("Enum {}", enum_decl.name))?;
            for member in &enum_decl.members {
                write_line(f, depth + 1, &format!("{} = {}", member.name, member.value))?;
            }
            Ok(())
        }
        Node::Union(union_decl) => {
            write_line(f, depth, &format!("Union {}", union_decl.name))?;
            write_fields(f, depth + 1, &union_decl.fields)
        }
        Node::Using(using) => match &using.alias {
            Some(alias) => write_line(f, depth, &format!("Using {} as {}", using.namespace, alias)),
            None => write_line(f, depth, &format!("Using {}", using.namespace)),
        },
        Node::Free(free) => {
            write_line(f, depth, "Free")?;
            write_node(f, &free.target, depth + 1)
        }
        Node::InlineAsm(asm) => {
            write_line(f, depth, "InlineAsm")?;
            for operation in &asm.operations {
                write_line(f, depth + 1, &format!("\"{}\"", operation))?;
            }
            Ok(())
        }
        Node::Array(array) => {
            write_line(f, depth, "Array")?;
            write_node(f, &array.element, depth + 1)?;
            match &array.size {
                Some(size) => write_labeled(f, depth + 1, "size", size),
                None => Ok(()),
            }
        }
        Node::Pointer(pointer) => {
            write_line(f, depth, "Pointer")?;
            write_node(f, &pointer.pointee, depth + 1)
        }
    }
}
