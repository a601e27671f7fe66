use crate::{
    ast::{
        ast::Statement,
        expressions::Identifier,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::{ParseResult, Reported},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::{lookups::stmt_lookup, parser::Parser};

pub fn parse_stmt(parser: &mut Parser) -> ParseResult<Statement> {
    if let Some(handler) = stmt_lookup(parser.current_token_kind()) {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

/// `let <ident> = <expr>;`
///
/// A wrong terminator is reported but the statement is still returned.
pub fn parse_let_stmt(parser: &mut Parser) -> ParseResult<Statement> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::Identifier)?;
    let name_token = parser.current_token().clone();
    let name = Identifier {
        name: name_token.literal.clone(),
        token: name_token,
    };

    parser.expect_peek(TokenKind::Assignment)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;

    let _ = parser.expect_peek(TokenKind::Semicolon);

    Ok(Statement::Let(LetStmt { token, name, value }))
}

/// `return <expr>` with an optional `;`.
pub fn parse_return_stmt(parser: &mut Parser) -> ParseResult<Statement> {
    let token = parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;

    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Ok(Statement::Return(ReturnStmt { token, value }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> ParseResult<Statement> {
    let token = parser.current_token().clone();

    let expression = parse_expr(parser, BindingPower::Lowest)?;

    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Ok(Statement::Expression(ExpressionStmt { token, expression }))
}

/// Parses statements up to the matching `}` with `{` as the current token,
/// leaving `}` current. Failed statements inside the block are skipped the
/// same way the program loop skips them.
pub fn parse_block_stmt(parser: &mut Parser) -> ParseResult<BlockStmt> {
    let token = parser.advance();

    let mut statements = Vec::new();
    while !parser.current_is(TokenKind::CloseCurly) {
        if parser.current_is(TokenKind::EOF) {
            parser.peek_error(TokenKind::CloseCurly);
            return Err(Reported);
        }

        match parse_stmt(parser) {
            Ok(stmt) => statements.push(stmt),
            Err(Reported) => {
                parser.synchronize();
                if parser.current_is(TokenKind::CloseCurly) {
                    continue;
                }
            }
        }
        parser.advance();
    }

    Ok(BlockStmt { token, statements })
}
