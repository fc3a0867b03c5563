//! Parser implementation for building the Abstract Syntax Tree.
//!
//! The parser owns the lexer and two buffered tokens (current and peek),
//! pulling fresh tokens on demand. Statements are parsed by recursive
//! descent; expressions by precedence climbing over the binding powers in
//! `lookups`.

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::stmt::parse_stmt;

/// Upper bound on expression nesting. Pathological inputs such as deeply
/// nested parentheses fail with a bounded error instead of exhausting the
/// call stack.
pub const MAX_EXPRESSION_DEPTH: usize = 128;

/// The main parser structure that maintains parsing state.
///
/// Holds the lexer and the two-token lookahead window. Construction primes
/// both buffered tokens, so `current_token` is valid from the start.
pub struct Parser {
    lexer: Lexer,
    current_token: Token,
    peek_token: Token,
    /// Current expression nesting depth, bounded by `MAX_EXPRESSION_DEPTH`.
    depth: usize,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Self {
        let current_token = lexer.next_token();
        let peek_token = lexer.next_token();

        Parser {
            lexer,
            current_token,
            peek_token,
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    /// Returns the peek token without advancing.
    pub fn peek_token(&self) -> &Token {
        &self.peek_token
    }

    /// Returns the kind of the peek token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek_token.kind
    }

    /// Shifts the peek token into the current slot and pulls a fresh token
    /// from the lexer.
    pub fn advance(&mut self) {
        self.current_token = std::mem::replace(&mut self.peek_token, self.lexer.next_token());
    }

    /// Expects the peek token to be of the specified kind.
    ///
    /// Advances onto it on success; otherwise raises a syntax error naming
    /// the expected kind, which aborts the current parse call chain.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<(), Error> {
        if self.peek_token.kind == expected_kind {
            self.advance();
            Ok(())
        } else {
            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind.to_string(),
                    found: self.peek_token.literal.clone(),
                },
                self.peek_token.span.start.clone(),
            ))
        }
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token.span.start.clone()
    }

    pub(crate) fn enter_expression(&mut self) -> Result<(), Error> {
        self.depth += 1;
        if self.depth > MAX_EXPRESSION_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_EXPRESSION_DEPTH,
                },
                self.get_position(),
            ));
        }
        Ok(())
    }

    pub(crate) fn exit_expression(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

/// Parses a whole source string into a `Program`.
///
/// This is the main entry point. Statements are collected in source order
/// until end of input. An `Illegal` token from the lexer also stops the
/// loop. The first syntax error aborts the whole parse; there is no
/// partial-program recovery.
pub fn parse(lexer: Lexer) -> Result<Program, Error> {
    let mut parser = Parser::new(lexer);
    let mut program = Program::new();

    while parser.current_token_kind() != TokenKind::Eof
        && parser.current_token_kind() != TokenKind::Illegal
    {
        if let Some(statement) = parse_stmt(&mut parser)? {
            program.statements.push(statement);
        }
        // Exactly one advance per iteration, so progress is guaranteed
        // even when a production consumed zero extra tokens.
        parser.advance();
    }

    Ok(program)
}
