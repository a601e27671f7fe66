use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{MK_SPAN, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

lazy_static! {
    static ref WHITESPACE_PATTERN: Regex = Regex::new(r"^\s+").unwrap();
    static ref SYMBOL_PATTERN: Regex = Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*").unwrap();
    static ref INTEGER_PATTERN: Regex = Regex::new(r"^[0-9]+").unwrap();
}

/// Pull-based tokenizer. Each call to [`Lexer::next_token`] produces one token
/// and moves the cursor forward; the cursor never regresses.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        Lexer {
            source: source.into(),
            pos: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    /// The character under the cursor.
    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    /// The character one past the cursor.
    pub fn peek_char(&self) -> Option<char> {
        self.remainder().chars().nth(1)
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// Returns the next token. Once the source is exhausted every call
    /// returns an EOF token.
    pub fn next_token(&mut self) -> Token {
        if let Some(matched) = WHITESPACE_PATTERN.find(self.remainder()) {
            self.advance_n(matched.end());
        }

        let start = self.pos;
        let Some(current) = self.at() else {
            return MK_TOKEN!(TokenKind::EOF, String::new(), MK_SPAN!(start, start));
        };

        if let Some(value) = self.match_pattern(&SYMBOL_PATTERN) {
            return self.symbol_token(value);
        }

        if let Some(value) = self.match_pattern(&INTEGER_PATTERN) {
            return self.emit(TokenKind::Integer, value);
        }

        let kind = match (current, self.peek_char()) {
            ('=', Some('=')) => TokenKind::Equals,
            ('!', Some('=')) => TokenKind::NotEquals,
            ('=', _) => TokenKind::Assignment,
            ('!', _) => TokenKind::Not,
            ('+', _) => TokenKind::Plus,
            ('-', _) => TokenKind::Dash,
            ('*', _) => TokenKind::Star,
            ('/', _) => TokenKind::Slash,
            ('<', _) => TokenKind::Less,
            ('>', _) => TokenKind::Greater,
            (',', _) => TokenKind::Comma,
            (';', _) => TokenKind::Semicolon,
            ('(', _) => TokenKind::OpenParen,
            (')', _) => TokenKind::CloseParen,
            ('{', _) => TokenKind::OpenCurly,
            ('}', _) => TokenKind::CloseCurly,
            _ => {
                trace!(character = %current, position = start, "illegal character");
                TokenKind::Illegal
            }
        };

        let literal = match kind {
            TokenKind::Equals | TokenKind::NotEquals => self.remainder()[..2].to_string(),
            _ => current.to_string(),
        };

        self.emit(kind, literal)
    }

    /// Text matched by an anchored `pattern` at the cursor.
    fn match_pattern(&self, pattern: &Regex) -> Option<String> {
        pattern
            .find(self.remainder())
            .map(|matched| matched.as_str().to_string())
    }

    fn symbol_token(&mut self, value: String) -> Token {
        let kind = RESERVED_LOOKUP
            .get(value.as_str())
            .copied()
            .unwrap_or(TokenKind::Identifier);

        self.emit(kind, value)
    }

    fn emit(&mut self, kind: TokenKind, literal: String) -> Token {
        let start = self.pos;
        self.advance_n(literal.len());

        MK_TOKEN!(kind, literal, MK_SPAN!(start, self.pos))
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Yields every token before end-of-input.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.kind == TokenKind::EOF {
            None
        } else {
            Some(token)
        }
    }
}

/// Drives a fresh lexer over `source` to exhaustion. The returned tokens end
/// with exactly one EOF token.
pub fn tokenize(source: impl Into<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
