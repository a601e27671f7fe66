/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The Program root and the Statement/Expression families
/// - expressions: Definitions for the expression nodes
/// - statements: Definitions for the statement nodes and blocks
pub mod ast;
pub mod expressions;
pub mod statements;
