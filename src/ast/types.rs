//! Type-grammar nodes.
//!
//! A type annotation is an ordinary `Node`: a bare `Identifier`, a
//! `ScopeResolution` over identifiers, or one of the shapes below.

use super::ast::Node;

/// `[element]` or `[element, size]`
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayType {
    pub element: Box<Node>,
    pub size: Option<Box<Node>>,
}

/// `^pointee`
#[derive(Debug, Clone, PartialEq)]
pub struct PointerType {
    pub pointee: Box<Node>,
}
