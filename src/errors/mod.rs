//! Error types and error handling for the front end.
//!
//! This module defines the error types raised while parsing. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for syntax violations
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions
//!
//! Lexical problems are not errors: the lexer reports unrecognized input
//! as `Illegal` tokens and the parser decides how to react.

pub mod errors;

#[cfg(test)]
mod tests;
