use crate::{
    ast::ast::{Expression, Statement},
    errors::errors::ParseResult,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator precedence, lowest to highest.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

pub type StmtHandler = fn(&mut Parser) -> ParseResult<Statement>;
pub type NUDHandler = fn(&mut Parser) -> ParseResult<Expression>;
pub type LEDHandler = fn(&mut Parser, Expression, BindingPower) -> ParseResult<Expression>;

/// Statements that start with a dedicated keyword. Anything else is an
/// expression statement.
pub fn stmt_lookup(kind: TokenKind) -> Option<StmtHandler> {
    match kind {
        TokenKind::Let => Some(parse_let_stmt),
        TokenKind::Return => Some(parse_return_stmt),
        _ => None,
    }
}

/// Handlers for tokens that can begin an expression.
pub fn nud_lookup(kind: TokenKind) -> Option<NUDHandler> {
    match kind {
        // Literals and symbols
        TokenKind::Identifier => Some(parse_identifier),
        TokenKind::Integer => Some(parse_integer_literal),
        TokenKind::True | TokenKind::False => Some(parse_boolean_literal),

        TokenKind::Not | TokenKind::Dash => Some(parse_prefix_expr),
        TokenKind::OpenParen => Some(parse_grouping_expr),
        TokenKind::If => Some(parse_if_expr),
        TokenKind::Fn => Some(parse_function_literal),
        _ => None,
    }
}

/// Handlers for tokens that can continue an expression, with the binding
/// power they continue it at. This is the only place operator precedence
/// is defined.
pub fn led_lookup(kind: TokenKind) -> Option<(BindingPower, LEDHandler)> {
    match kind {
        TokenKind::Equals | TokenKind::NotEquals => {
            Some((BindingPower::Equals, parse_binary_expr))
        }
        TokenKind::Less | TokenKind::Greater => {
            Some((BindingPower::LessGreater, parse_binary_expr))
        }
        TokenKind::Plus | TokenKind::Dash => Some((BindingPower::Sum, parse_binary_expr)),
        TokenKind::Star | TokenKind::Slash => Some((BindingPower::Product, parse_binary_expr)),
        TokenKind::OpenParen => Some((BindingPower::Call, parse_call_expr)),
        _ => None,
    }
}

/// Binding power of `kind` in infix position; `Lowest` when it cannot
/// continue an expression.
pub fn binding_power(kind: TokenKind) -> BindingPower {
    led_lookup(kind)
        .map(|(binding_power, _)| binding_power)
        .unwrap_or(BindingPower::Lowest)
}
