use super::ast::{Block, Node};

#[derive(Debug, Clone, PartialEq)]
pub struct Namespace {
    pub name: String,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    /// True unless the parameter type is preceded by `var`.
    pub constant: bool,
    pub ty: Node,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDeclaration {
    /// `Owner` in `func Owner::name(...)`.
    pub owner: Option<String>,
    pub name: String,
    pub params: Vec<Param>,
    pub return_type: Box<Node>,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Return {
    pub value: Option<Box<Node>>,
}

/// `let` (constant) or `var` declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub name: String,
    pub constant: bool,
    pub ty: Box<Node>,
    pub initializer: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct If {
    pub condition: Box<Node>,
    pub then_block: Block,
    /// Either a `Block` or, for `else if`, another `If`.
    pub else_branch: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct While {
    pub condition: Box<Node>,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoWhile {
    pub body: Block,
    pub condition: Box<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct For {
    pub init: Box<Node>,
    pub condition: Box<Node>,
    pub iteration: Box<Node>,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub ty: Node,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Struct {
    pub name: String,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumMember {
    pub name: String,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enum {
    pub name: String,
    pub members: Vec<EnumMember>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Union {
    pub name: String,
    pub fields: Vec<Field>,
}

/// `using name;` or `using name as alias;`
#[derive(Debug, Clone, PartialEq)]
pub struct Using {
    pub namespace: String,
    pub alias: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Free {
    pub target: Box<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InlineAsm {
    pub operations: Vec<String>,
}
