/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Node` sum type, `File` and `Block`
/// - expressions: Definitions for the expression node shapes
/// - statements: Definitions for the statement and declaration node shapes
/// - types: Definitions for the type-grammar node shapes
/// - printer: Indented textual dump of a tree
pub mod ast;
pub mod expressions;
pub mod printer;
pub mod statements;
pub mod types;

#[cfg(test)]
mod tests;
