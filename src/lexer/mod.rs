//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token position tracking for error reporting
//! - Whitespace handling
//!
//! Unrecognized input never fails the lexer; it surfaces as `Illegal`
//! tokens for the parser to react to.

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
