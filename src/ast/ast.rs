use std::slice::Iter;

use super::{
    expressions::{
        AddressOf, ArrayAccess, ArrayInitializer, BinaryOperation, Cast, FunctionCall,
        MemberAccess, New, PointerDereference, ScopeResolution, UnaryOperation,
    },
    statements::{
        DoWhile, Enum, For, Free, FunctionDeclaration, If, InlineAsm, Namespace, Return, Struct,
        Union, Using, VariableDeclaration, While,
    },
    types::{ArrayType, PointerType},
};

/// Node Types
///
/// A field-less mirror of `Node`, for code that only cares about the shape.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum NodeKind {
    Namespace,
    Block,
    Boolean,
    Integer,
    RealNumber,
    String,
    Character,
    Identifier,
    UnaryOperation,
    BinaryOperation,
    GroupingExpression,
    Cast,
    FunctionDeclaration,
    FunctionCall,
    Return,
    VariableDeclaration,
    If,
    While,
    DoWhile,
    For,
    Break,
    Continue,
    Struct,
    Enum,
    Union,
    Using,
    Free,
    AddressOf,
    PointerDereference,
    New,
    ArrayInitializer,
    ArrayAccess,
    MemberAccess,
    ScopeResolution,
    Array,
    Pointer,
    InlineAsm,
    Null,
}

/// A node of the syntax tree. Every child is exclusively owned by its parent.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Namespace(Namespace),
    Block(Block),

    Boolean(bool),
    Integer(i64),
    RealNumber(f64),
    /// Raw text between the quotes; escapes are not interpreted.
    String(String),
    /// Raw text between the quotes; escapes are not interpreted.
    Character(String),
    Identifier(String),
    Null,

    UnaryOperation(UnaryOperation),
    BinaryOperation(BinaryOperation),
    GroupingExpression(Box<Node>),
    Cast(Cast),
    FunctionCall(FunctionCall),
    AddressOf(AddressOf),
    PointerDereference(PointerDereference),
    New(New),
    ArrayInitializer(ArrayInitializer),
    ArrayAccess(ArrayAccess),
    MemberAccess(MemberAccess),
    ScopeResolution(ScopeResolution),

    FunctionDeclaration(FunctionDeclaration),
    Return(Return),
    VariableDeclaration(VariableDeclaration),
    If(If),
    While(While),
    DoWhile(DoWhile),
    For(For),
    Break,
    Continue,
    Struct(Struct),
    Enum(Enum),
    Union(Union),
    Using(Using),
    Free(Free),
    InlineAsm(InlineAsm),

    Array(ArrayType),
    Pointer(PointerType),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Namespace(_) => NodeKind::Namespace,
            Node::Block(_) => NodeKind::Block,
            Node::Boolean(_) => NodeKind::Boolean,
            Node::Integer(_) => NodeKind::Integer,
            Node::RealNumber(_) => NodeKind::RealNumber,
            Node::String(_) => NodeKind::String,
            Node::Character(_) => NodeKind::Character,
            Node::Identifier(_) => NodeKind::Identifier,
            Node::Null => NodeKind::Null,
            Node::UnaryOperation(_) => NodeKind::UnaryOperation,
            Node::BinaryOperation(_) => NodeKind::BinaryOperation,
            Node::GroupingExpression(_) => NodeKind::GroupingExpression,
            Node::Cast(_) => NodeKind::Cast,
            Node::FunctionCall(_) => NodeKind::FunctionCall,
            Node::AddressOf(_) => NodeKind::AddressOf,
            Node::PointerDereference(_) => NodeKind::PointerDereference,
            Node::New(_) => NodeKind::New,
            Node::ArrayInitializer(_) => NodeKind::ArrayInitializer,
            Node::ArrayAccess(_) => NodeKind::ArrayAccess,
            Node::MemberAccess(_) => NodeKind::MemberAccess,
            Node::ScopeResolution(_) => NodeKind::ScopeResolution,
            Node::FunctionDeclaration(_) => NodeKind::FunctionDeclaration,
            Node::Return(_) => NodeKind::Return,
            Node::VariableDeclaration(_) => NodeKind::VariableDeclaration,
            Node::If(_) => NodeKind::If,
            Node::While(_) => NodeKind::While,
            Node::DoWhile(_) => NodeKind::DoWhile,
            Node::For(_) => NodeKind::For,
            Node::Break => NodeKind::Break,
            Node::Continue => NodeKind::Continue,
            Node::Struct(_) => NodeKind::Struct,
            Node::Enum(_) => NodeKind::Enum,
            Node::Union(_) => NodeKind::Union,
            Node::Using(_) => NodeKind::Using,
            Node::Free(_) => NodeKind::Free,
            Node::InlineAsm(_) => NodeKind::InlineAsm,
            Node::Array(_) => NodeKind::Array,
            Node::Pointer(_) => NodeKind::Pointer,
        }
    }

    /// The name carried by an `Identifier` node.
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Node::Identifier(name) => Some(name),
            _ => None,
        }
    }
}

/// Statements between a pair of braces, in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub statements: Vec<Node>,
}

impl Block {
    pub fn iter(&self) -> Iter<'_, Node> {
        self.statements.iter()
    }
}

/// The result of parsing a whole source buffer: its top-level statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct File {
    pub statements: Vec<Node>,
}

impl File {
    pub fn iter(&self) -> Iter<'_, Node> {
        self.statements.iter()
    }
}
