use crate::{
    ast::expressions::{
        ArrayLiteral, Boolean, CallExpression, Expression, FunctionLiteral, Identifier,
        IfExpression, IndexExpression, InfixExpression, IntegerLiteral, PrefixExpression,
        StringLiteral,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{binding_power, led_handler, nud_handler, BindingPower},
    parser::Parser,
    stmt::parse_block_stmt,
};

/// Precedence-climbing expression parser.
///
/// Looks up a NUD production for the current token; absence yields
/// `Ok(None)` ("no expression at this position"), which the caller treats
/// as an empty slot. While the peek token is not `;` and binds tighter
/// than `bp`, folds the left expression into the LED production for peek.
/// A missing LED simply ends the loop.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Option<Expression>, Error> {
    let nud = match nud_handler(parser.current_token_kind()) {
        Some(nud) => nud,
        None => return Ok(None),
    };

    parser.enter_expression()?;
    let mut left = nud(parser)?;

    while parser.peek_token_kind() != TokenKind::Semicolon
        && bp < binding_power(parser.peek_token_kind())
    {
        let led = match led_handler(parser.peek_token_kind()) {
            Some(led) => led,
            None => break,
        };

        parser.advance();
        left = led(parser, left)?;
    }

    parser.exit_expression();
    Ok(Some(left))
}

/// Like [`parse_expr`], but an empty slot is a syntax error. Used where
/// the grammar requires an operand: after an operator, inside `(...)`,
/// as an `if` condition, and in argument and element lists.
pub fn expect_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expression, Error> {
    match parse_expr(parser, bp)? {
        Some(expression) => Ok(expression),
        None => Err(Error::new(
            ErrorImpl::ExpressionExpected {
                token: parser.current_token().literal.clone(),
            },
            parser.get_position(),
        )),
    }
}

pub fn parse_identifier(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    Ok(Expression::Identifier(Identifier {
        value: token.literal.clone(),
        token,
    }))
}

pub fn parse_integer_literal(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    let value = token.literal.parse::<i64>().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: token.literal.clone(),
            },
            parser.get_position(),
        )
    })?;

    Ok(Expression::IntegerLiteral(IntegerLiteral { token, value }))
}

pub fn parse_string_literal(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    Ok(Expression::StringLiteral(StringLiteral {
        value: token.literal.clone(),
        token,
    }))
}

pub fn parse_boolean(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();
    let value = token.kind == TokenKind::True;

    Ok(Expression::Boolean(Boolean { token, value }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();
    let operator = token.literal.clone();

    parser.advance();
    let right = expect_expr(parser, BindingPower::Prefix)?;

    Ok(Expression::Prefix(PrefixExpression {
        token,
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_infix_expr(parser: &mut Parser, left: Expression) -> Result<Expression, Error> {
    let token = parser.current_token().clone();
    let operator = token.literal.clone();
    let bp = binding_power(token.kind);

    parser.advance();
    let right = expect_expr(parser, bp)?;

    Ok(Expression::Infix(InfixExpression {
        token,
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

/// Parentheses affect only precedence; no grouping node is retained.
pub fn parse_grouped_expr(parser: &mut Parser) -> Result<Expression, Error> {
    parser.advance();
    let expression = expect_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::RParen)?;

    Ok(expression)
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::LParen)?;
    parser.advance();
    let condition = expect_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::RParen)?;

    parser.expect_peek(TokenKind::LBrace)?;
    let consequence = parse_block_stmt(parser)?;

    let alternative = if parser.peek_token_kind() == TokenKind::Else {
        parser.advance();
        parser.expect_peek(TokenKind::LBrace)?;
        Some(parse_block_stmt(parser)?)
    } else {
        None
    };

    Ok(Expression::If(IfExpression {
        token,
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

pub fn parse_function_literal(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::LParen)?;
    let parameters = parse_function_parameters(parser)?;

    parser.expect_peek(TokenKind::LBrace)?;
    let body = parse_block_stmt(parser)?;

    Ok(Expression::Function(FunctionLiteral {
        token,
        parameters,
        body,
    }))
}

fn parse_function_parameters(parser: &mut Parser) -> Result<Vec<Identifier>, Error> {
    let mut parameters = vec![];

    if parser.peek_token_kind() == TokenKind::RParen {
        parser.advance();
        return Ok(parameters);
    }

    parser.expect_peek(TokenKind::Ident)?;
    parameters.push(Identifier {
        value: parser.current_token().literal.clone(),
        token: parser.current_token().clone(),
    });

    while parser.peek_token_kind() == TokenKind::Comma {
        parser.advance();
        parser.expect_peek(TokenKind::Ident)?;
        parameters.push(Identifier {
            value: parser.current_token().literal.clone(),
            token: parser.current_token().clone(),
        });
    }

    parser.expect_peek(TokenKind::RParen)?;

    Ok(parameters)
}

pub fn parse_call_expr(parser: &mut Parser, left: Expression) -> Result<Expression, Error> {
    let token = parser.current_token().clone();
    let arguments = parse_expr_list(parser, TokenKind::RParen)?;

    Ok(Expression::Call(CallExpression {
        token,
        function: Box::new(left),
        arguments,
    }))
}

pub fn parse_array_literal(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();
    let elements = parse_expr_list(parser, TokenKind::RBracket)?;

    Ok(Expression::Array(ArrayLiteral { token, elements }))
}

pub fn parse_index_expr(parser: &mut Parser, left: Expression) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    parser.advance();
    let index = expect_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::RBracket)?;

    Ok(Expression::Index(IndexExpression {
        token,
        left: Box::new(left),
        index: Box::new(index),
    }))
}

/// Comma-separated expressions up to (and consuming) the end delimiter.
/// Shared by call arguments and array elements.
fn parse_expr_list(parser: &mut Parser, end: TokenKind) -> Result<Vec<Expression>, Error> {
    let mut list = vec![];

    if parser.peek_token_kind() == end {
        parser.advance();
        return Ok(list);
    }

    parser.advance();
    list.push(expect_expr(parser, BindingPower::Lowest)?);

    while parser.peek_token_kind() == TokenKind::Comma {
        parser.advance();
        parser.advance();
        list.push(expect_expr(parser, BindingPower::Lowest)?);
    }

    parser.expect_peek(end)?;

    Ok(list)
}
