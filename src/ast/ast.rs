use std::{fmt::Display, slice::Iter};

use crate::lexer::tokens::Token;

use super::{
    expressions::{
        BooleanLiteral, CallExpr, FunctionLiteral, Identifier, IfExpr, InfixExpr, IntegerLiteral,
        PrefixExpr,
    },
    statements::{ExpressionStmt, LetStmt, ReturnStmt},
};

/// The root of every parse. Statements are kept in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, Statement> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let statements = self
            .statements
            .iter()
            .map(|statement| statement.to_string())
            .collect::<Vec<String>>();

        write!(f, "{}", statements.join(" "))
    }
}

/// Statement Types
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
}

impl Statement {
    /// The token the statement started at.
    pub fn token(&self) -> &Token {
        match self {
            Statement::Let(stmt) => &stmt.token,
            Statement::Return(stmt) => &stmt.token,
            Statement::Expression(stmt) => &stmt.token,
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::Let(stmt) => write!(f, "{}", stmt),
            Statement::Return(stmt) => write!(f, "{}", stmt),
            Statement::Expression(stmt) => write!(f, "{}", stmt),
        }
    }
}

/// Expression Types
///
/// Grouped expressions have no node of their own; the parentheses only
/// shape the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Boolean(BooleanLiteral),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
    If(IfExpr),
    Function(FunctionLiteral),
    Call(CallExpr),
}

impl Expression {
    /// The token that produced this node. For infix and call expressions
    /// this is the operator token.
    pub fn token(&self) -> &Token {
        match self {
            Expression::Identifier(expr) => &expr.token,
            Expression::Integer(expr) => &expr.token,
            Expression::Boolean(expr) => &expr.token,
            Expression::Prefix(expr) => &expr.operator,
            Expression::Infix(expr) => &expr.operator,
            Expression::If(expr) => &expr.token,
            Expression::Function(expr) => &expr.token,
            Expression::Call(expr) => &expr.token,
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Identifier(expr) => write!(f, "{}", expr),
            Expression::Integer(expr) => write!(f, "{}", expr),
            Expression::Boolean(expr) => write!(f, "{}", expr),
            Expression::Prefix(expr) => write!(f, "{}", expr),
            Expression::Infix(expr) => write!(f, "{}", expr),
            Expression::If(expr) => write!(f, "{}", expr),
            Expression::Function(expr) => write!(f, "{}", expr),
            Expression::Call(expr) => write!(f, "{}", expr),
        }
    }
}
