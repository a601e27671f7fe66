//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program loop.
//! The parser pulls tokens from a [`Lexer`] into a two-slot window
//! (`current` and `peek`) and never buffers more than that.
//!
//! Failures never abort a parse. Every rule records its error in the
//! parser's [`Diagnostics`] and returns [`Reported`]; the program loop then
//! skips to the next statement boundary and carries on.

use tracing::debug;

use crate::{
    ast::ast::Program,
    errors::{
        diagnostics::Diagnostics,
        errors::{Error, ErrorImpl, ParseResult, Reported},
    },
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{binding_power, BindingPower},
    stmt::parse_stmt,
};

/// Deepest expression nesting accepted before the parse is cut short.
pub const MAX_NESTING_DEPTH: usize = 128;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of tokens, pulled one at a time
    lexer: Lexer,
    /// The token under consideration
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Errors recorded so far, in discovery order
    diagnostics: Diagnostics,
    /// Expressions currently being parsed
    depth: usize,
}

impl Parser {
    /// Creates a new Parser and fills the `current` and `peek` slots.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        Parser {
            lexer,
            current,
            peek,
            diagnostics: Diagnostics::new(),
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    pub fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Slides the window forward by one token and returns the token that
    /// was current.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        let previous = std::mem::replace(&mut self.peek, next);
        std::mem::replace(&mut self.current, previous)
    }

    /// Advances if the peek token has the expected kind, otherwise records
    /// an expectation error and leaves the window untouched.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> ParseResult<()> {
        if self.peek_is(expected_kind) {
            self.advance();
            Ok(())
        } else {
            self.peek_error(expected_kind);
            Err(Reported)
        }
    }

    /// Records that `expected_kind` should have followed the current token.
    pub fn peek_error(&mut self, expected_kind: TokenKind) {
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                expected: expected_kind,
                found: self.peek.kind,
            },
            self.peek.span,
        );
        self.diagnostics.push(error);
    }

    /// Records an error against the current token.
    pub fn error_at_current(&mut self, error_impl: ErrorImpl) -> Reported {
        self.diagnostics.push(Error::new(error_impl, self.current.span));
        Reported
    }

    /// Opens one level of expression nesting, failing at the current token
    /// once [`MAX_NESTING_DEPTH`] is reached.
    pub fn enter_nesting(&mut self) -> ParseResult<()> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error_at_current(ErrorImpl::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            }));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave_nesting(&mut self) {
        self.depth -= 1;
    }

    pub fn peek_binding_power(&self) -> BindingPower {
        binding_power(self.peek.kind)
    }

    /// Skips the rest of a failed statement. Stops on a `;` or `}`, at the
    /// end of input, or just before a token that starts a new statement or
    /// closes the enclosing block.
    pub fn synchronize(&mut self) {
        while !self.current_token().is_one_of_many(&[
            TokenKind::Semicolon,
            TokenKind::CloseCurly,
            TokenKind::EOF,
        ]) && !self.peek_token().is_one_of_many(&[
            TokenKind::Let,
            TokenKind::Return,
            TokenKind::CloseCurly,
        ]) {
            self.advance();
        }
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// The error messages recorded so far, in discovery order.
    pub fn errors(&self) -> Vec<String> {
        self.diagnostics.messages()
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }

    /// Parses statements until the end of input.
    ///
    /// A malformed statement is reported and skipped; the loop always moves
    /// at least one token forward per iteration.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_is(TokenKind::EOF) {
            match parse_stmt(self) {
                Ok(stmt) => program.statements.push(stmt),
                Err(Reported) => self.synchronize(),
            }
            self.advance();
        }

        debug!(
            statements = program.len(),
            errors = self.diagnostics.len(),
            "parsed program"
        );

        program
    }
}

/// Parses everything `lexer` produces.
///
/// The program is returned even when errors were recorded; callers must
/// check the diagnostics before trusting it.
pub fn parse(lexer: Lexer) -> (Program, Diagnostics) {
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    (program, parser.into_diagnostics())
}
