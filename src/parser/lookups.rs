use crate::{ast::expressions::Expression, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

/// Operator precedence tiers, lowest binding to highest.
///
/// Left-associative binary operators share a tier; index binds tighter
/// than call so `a[0](x)` groups the index first.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
    Index,
}

pub type NudHandler = fn(&mut Parser) -> Result<Expression, Error>;
pub type LedHandler = fn(&mut Parser, Expression) -> Result<Expression, Error>;

/// Selects the prefix production that begins an expression at this token,
/// if any. Absence of a handler means "no expression starts here" and is
/// not an error by itself.
pub fn nud_handler(kind: TokenKind) -> Option<NudHandler> {
    match kind {
        TokenKind::Ident => Some(parse_identifier),
        TokenKind::Int => Some(parse_integer_literal),
        TokenKind::String => Some(parse_string_literal),
        TokenKind::True | TokenKind::False => Some(parse_boolean),
        TokenKind::Bang | TokenKind::Minus => Some(parse_prefix_expr),
        TokenKind::LParen => Some(parse_grouped_expr),
        TokenKind::LBracket => Some(parse_array_literal),
        TokenKind::If => Some(parse_if_expr),
        TokenKind::Function => Some(parse_function_literal),
        _ => None,
    }
}

/// Selects the infix production that continues an expression with this
/// token. A missing handler simply ends the precedence-climbing loop.
pub fn led_handler(kind: TokenKind) -> Option<LedHandler> {
    match kind {
        TokenKind::Plus
        | TokenKind::Minus
        | TokenKind::Asterisk
        | TokenKind::Slash
        | TokenKind::Lt
        | TokenKind::Gt
        | TokenKind::Eq
        | TokenKind::NotEq => Some(parse_infix_expr),
        TokenKind::LParen => Some(parse_call_expr),
        TokenKind::LBracket => Some(parse_index_expr),
        _ => None,
    }
}

/// Binding power of an infix token; unmapped tokens default to `Lowest`.
pub fn binding_power(kind: TokenKind) -> BindingPower {
    match kind {
        TokenKind::Eq | TokenKind::NotEq => BindingPower::Equals,
        TokenKind::Lt | TokenKind::Gt => BindingPower::LessGreater,
        TokenKind::Plus | TokenKind::Minus => BindingPower::Sum,
        TokenKind::Asterisk | TokenKind::Slash => BindingPower::Product,
        TokenKind::LParen => BindingPower::Call,
        TokenKind::LBracket => BindingPower::Index,
        _ => BindingPower::Lowest,
    }
}
