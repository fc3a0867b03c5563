//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms the lexer's token
//! stream into an Abstract Syntax Tree. It uses a Pratt parser for
//! expressions with proper operator precedence and handles:
//!
//! - Statement parsing (let, return, expression statements, blocks)
//! - Expression parsing (literals, prefix/infix operators, grouping,
//!   conditionals, function literals, calls, arrays, indexing)
//! - Syntax error reporting with source positions
//!
//! The parser uses NUD (null denotation) and LED (left denotation)
//! productions selected by token kind, with binding power for precedence
//! handling. Syntax errors abort the whole parse; there is no recovery.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
