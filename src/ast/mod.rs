/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Program` root node
/// - expressions: Definitions for various expression types
/// - statements: Definitions for various statement types
///
/// Every node carries its originating token and renders back to a
/// canonical textual form through `Display`.
pub mod ast;
pub mod expressions;
pub mod statements;
