use crate::{
    ast::{
        expressions::Identifier,
        statements::{
            BlockStatement, ExpressionStatement, LetStatement, ReturnStatement, Statement,
        },
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{
        expr::{expect_expr, parse_expr},
        lookups::BindingPower,
    },
};

use super::parser::Parser;

/// Dispatches on the current token: `let` and `return` have dedicated
/// productions, anything else is an expression statement. `Ok(None)`
/// means no statement started here (the position held no expression);
/// the caller skips the slot and advances.
pub fn parse_stmt(parser: &mut Parser) -> Result<Option<Statement>, Error> {
    match parser.current_token_kind() {
        TokenKind::Let => parse_let_stmt(parser).map(Some),
        TokenKind::Return => parse_return_stmt(parser).map(Some),
        _ => parse_expression_stmt(parser),
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::Ident)?;
    let name = Identifier {
        value: parser.current_token().literal.clone(),
        token: parser.current_token().clone(),
    };

    parser.expect_peek(TokenKind::Assign)?;
    parser.advance();
    let value = expect_expr(parser, BindingPower::Lowest)?;

    if parser.peek_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Ok(Statement::Let(LetStatement {
        token,
        name,
        value: Some(value),
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();

    parser.advance();
    let return_value = parse_expr(parser, BindingPower::Lowest)?;

    if parser.peek_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Ok(Statement::Return(ReturnStatement {
        token,
        return_value,
    }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Option<Statement>, Error> {
    let token = parser.current_token().clone();

    let expression = match parse_expr(parser, BindingPower::Lowest)? {
        Some(expression) => expression,
        None => return Ok(None),
    };

    if parser.peek_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Ok(Some(Statement::Expression(ExpressionStatement {
        token,
        expression,
    })))
}

/// Parses statements after an opening `{` until the current token is `}`
/// or end of input. Leaves the closing `}` as the current token for the
/// caller.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStatement, Error> {
    let token = parser.current_token().clone();

    parser.advance();

    let mut statements = vec![];
    while parser.current_token_kind() != TokenKind::RBrace
        && parser.current_token_kind() != TokenKind::Eof
    {
        if let Some(statement) = parse_stmt(parser)? {
            statements.push(statement);
        }
        parser.advance();
    }

    Ok(BlockStatement { token, statements })
}
