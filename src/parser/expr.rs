use crate::{
    ast::{
        ast::Expression,
        expressions::{
            BooleanLiteral, CallExpr, FunctionLiteral, Identifier, IfExpr, InfixExpr,
            IntegerLiteral, PrefixExpr,
        },
    },
    errors::errors::{ErrorImpl, ParseResult},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{led_lookup, nud_lookup, BindingPower},
    parser::Parser,
    stmt::parse_block_stmt,
};

/// Pratt loop. Expects the first token of the expression in `current` and
/// leaves `current` on its last token.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> ParseResult<Expression> {
    parser.enter_nesting()?;
    let result = parse_nested_expr(parser, bp);
    parser.leave_nesting();

    result
}

fn parse_nested_expr(parser: &mut Parser, bp: BindingPower) -> ParseResult<Expression> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = nud_lookup(token_kind) else {
        return Err(parser.error_at_current(ErrorImpl::NoPrefixParseFn { kind: token_kind }));
    };

    let mut left = nud(parser)?;

    // While the upcoming operator binds tighter than the caller allows, fold it into lhs
    while !parser.peek_is(TokenKind::Semicolon) && bp < parser.peek_binding_power() {
        let Some((operator_bp, led)) = led_lookup(parser.peek_token_kind()) else {
            return Ok(left);
        };

        parser.advance();
        left = led(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_identifier(parser: &mut Parser) -> ParseResult<Expression> {
    let token = parser.current_token().clone();

    Ok(Expression::Identifier(Identifier {
        name: token.literal.clone(),
        token,
    }))
}

pub fn parse_integer_literal(parser: &mut Parser) -> ParseResult<Expression> {
    let token = parser.current_token().clone();

    match token.literal.parse::<i64>() {
        Ok(value) => Ok(Expression::Integer(IntegerLiteral { token, value })),
        Err(_) => Err(parser.error_at_current(ErrorImpl::IntegerParseError {
            literal: token.literal,
        })),
    }
}

pub fn parse_boolean_literal(parser: &mut Parser) -> ParseResult<Expression> {
    let token = parser.current_token().clone();

    Ok(Expression::Boolean(BooleanLiteral {
        value: token.kind == TokenKind::True,
        token,
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> ParseResult<Expression> {
    let operator_token = parser.advance();
    let operand = parse_expr(parser, BindingPower::Prefix)?;

    Ok(Expression::Prefix(PrefixExpr {
        operator: operator_token,
        operand: Box::new(operand),
    }))
}

/// Operators continue at their own binding power, so equal-power operators
/// to the right stop the recursion and the tree leans left.
pub fn parse_binary_expr(
    parser: &mut Parser,
    left: Expression,
    bp: BindingPower,
) -> ParseResult<Expression> {
    let operator_token = parser.advance();
    let right = parse_expr(parser, bp)?;

    Ok(Expression::Infix(InfixExpr {
        left: Box::new(left),
        operator: operator_token,
        right: Box::new(right),
    }))
}

/// A missing `)` is reported, but the inner expression is still returned.
pub fn parse_grouping_expr(parser: &mut Parser) -> ParseResult<Expression> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest)?;

    let _ = parser.expect_peek(TokenKind::CloseParen);

    Ok(expr)
}

pub fn parse_if_expr(parser: &mut Parser) -> ParseResult<Expression> {
    let token = parser.advance();
    let condition = parse_expr(parser, BindingPower::Lowest)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let consequence = parse_block_stmt(parser)?;

    let alternative = if parser.peek_is(TokenKind::Else) {
        parser.advance();
        parser.expect_peek(TokenKind::OpenCurly)?;
        Some(parse_block_stmt(parser)?)
    } else {
        None
    };

    Ok(Expression::If(IfExpr {
        token,
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

pub fn parse_function_literal(parser: &mut Parser) -> ParseResult<Expression> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    let parameters = parse_function_parameters(parser)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let body = parse_block_stmt(parser)?;

    Ok(Expression::Function(FunctionLiteral {
        token,
        parameters,
        body,
    }))
}

/// Parses `a, b, c)` with `(` as the current token.
fn parse_function_parameters(parser: &mut Parser) -> ParseResult<Vec<Identifier>> {
    let mut parameters = vec![];

    if parser.peek_is(TokenKind::CloseParen) {
        parser.advance();
        return Ok(parameters);
    }

    parser.expect_peek(TokenKind::Identifier)?;
    parameters.push(current_identifier(parser));

    while parser.peek_is(TokenKind::Comma) {
        parser.advance();
        parser.expect_peek(TokenKind::Identifier)?;
        parameters.push(current_identifier(parser));
    }

    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(parameters)
}

fn current_identifier(parser: &Parser) -> Identifier {
    let token = parser.current_token().clone();
    Identifier {
        name: token.literal.clone(),
        token,
    }
}

pub fn parse_call_expr(
    parser: &mut Parser,
    left: Expression,
    _bp: BindingPower,
) -> ParseResult<Expression> {
    let token = parser.current_token().clone();
    let arguments = parse_call_arguments(parser)?;

    Ok(Expression::Call(CallExpr {
        token,
        function: Box::new(left),
        arguments,
    }))
}

/// Parses a possibly empty, comma separated argument list with `(` as the
/// current token, through the closing `)`.
fn parse_call_arguments(parser: &mut Parser) -> ParseResult<Vec<Expression>> {
    let mut args = vec![];

    if parser.peek_is(TokenKind::CloseParen) {
        parser.advance();
        return Ok(args);
    }

    parser.advance();
    args.push(parse_expr(parser, BindingPower::Lowest)?);

    while parser.peek_is(TokenKind::Comma) {
        parser.advance();
        parser.advance();
        args.push(parse_expr(parser, BindingPower::Lowest)?);
    }

    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(args)
}
