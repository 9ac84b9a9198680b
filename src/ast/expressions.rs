use super::ast::Node;

/// Prefix `!` or `-` applied to an operand.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryOperation {
    pub operator: String,
    pub operand: Box<Node>,
}

/// Any infix operator, assignments included. `operator` holds the source spelling.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOperation {
    pub operator: String,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

/// `expr as type`
#[derive(Debug, Clone, PartialEq)]
pub struct Cast {
    pub expr: Box<Node>,
    pub to: Box<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    pub args: Vec<Node>,
}

/// `&expr`
#[derive(Debug, Clone, PartialEq)]
pub struct AddressOf {
    pub expr: Box<Node>,
}

/// `^expr`, and the left side of a desugared `->`.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerDereference {
    pub expr: Box<Node>,
}

/// `new type`
#[derive(Debug, Clone, PartialEq)]
pub struct New {
    pub ty: Box<Node>,
}

/// `[a, b, c]`
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayInitializer {
    pub values: Vec<Node>,
}

/// `array[index]`
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayAccess {
    pub array: Box<Node>,
    pub index: Box<Node>,
}

/// `left.right`
#[derive(Debug, Clone, PartialEq)]
pub struct MemberAccess {
    pub left: Box<Node>,
    pub right: Box<Node>,
}

/// `left::right`, in both expressions and types.
#[derive(Debug, Clone, PartialEq)]
pub struct ScopeResolution {
    pub left: Box<Node>,
    pub right: Box<Node>,
}
