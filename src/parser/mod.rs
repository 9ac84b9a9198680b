//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into an Abstract Syntax Tree. It handles:
//!
//! - Statement parsing (declarations, control flow, expression statements)
//! - Expression parsing, one function per precedence level
//! - Type parsing for type annotations, separate from expressions
//! - Error recovery and reporting
//!
//! Statements are dispatched through a lookup table keyed on the leading
//! token; anything not in the table is parsed as an expression statement.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
