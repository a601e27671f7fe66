//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - Operators and delimiters, including two-character operators
//! - Illegal characters
//! - End-of-input behaviour

use super::{
    lexer::{tokenize, Lexer},
    tokens::TokenKind,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).iter().map(|token| token.kind).collect()
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("fn let true false if else return");

    assert_eq!(tokens[0].kind, TokenKind::Fn);
    assert_eq!(tokens[1].kind, TokenKind::Let);
    assert_eq!(tokens[2].kind, TokenKind::True);
    assert_eq!(tokens[3].kind, TokenKind::False);
    assert_eq!(tokens[4].kind, TokenKind::If);
    assert_eq!(tokens[5].kind, TokenKind::Else);
    assert_eq!(tokens[6].kind, TokenKind::Return);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar baz_123 _underscore CamelCase letter");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].literal, "foo");
    assert_eq!(tokens[1].literal, "bar");
    assert_eq!(tokens[2].literal, "baz_123");
    assert_eq!(tokens[3].literal, "_underscore");
    assert_eq!(tokens[4].literal, "CamelCase");
    // Keywords are only matched on the whole span
    assert_eq!(tokens[5].kind, TokenKind::Identifier);
    assert_eq!(tokens[5].literal, "letter");
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_integers() {
    let tokens = tokenize("42 0 1000 99999999999999999999");

    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].literal, "42");
    assert_eq!(tokens[1].literal, "0");
    assert_eq!(tokens[2].literal, "1000");
    // Range checking is left to the parser
    assert_eq!(tokens[3].kind, TokenKind::Integer);
    assert_eq!(tokens[3].literal, "99999999999999999999");
}

#[test]
fn test_tokenize_integer_followed_by_identifier() {
    assert_eq!(
        kinds("5five"),
        vec![TokenKind::Integer, TokenKind::Identifier, TokenKind::EOF]
    );
}

#[test]
fn test_tokenize_single_char_operators() {
    assert_eq!(
        kinds("= + - ! * / < > , ; ( ) { }"),
        vec![
            TokenKind::Assignment,
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Not,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_two_char_operators() {
    let tokens = tokenize("10 == 10; 10 != 9; a = !b");

    assert_eq!(tokens[1].kind, TokenKind::Equals);
    assert_eq!(tokens[1].literal, "==");
    assert_eq!(tokens[5].kind, TokenKind::NotEquals);
    assert_eq!(tokens[5].literal, "!=");
    assert_eq!(tokens[9].kind, TokenKind::Assignment);
    assert_eq!(tokens[10].kind, TokenKind::Not);
    assert_eq!(tokens[11].kind, TokenKind::Identifier);
}

#[test]
fn test_tokenize_without_whitespace() {
    assert_eq!(
        kinds("let x=y==!z;"),
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Not,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_program() {
    let source = "let add = fn(x, y) {\n  x + y;\n};\nlet result = add(five, ten);";
    let tokens = tokenize(source);

    let expected = [
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "add"),
        (TokenKind::Assignment, "="),
        (TokenKind::Fn, "fn"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Identifier, "x"),
        (TokenKind::Comma, ","),
        (TokenKind::Identifier, "y"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Identifier, "x"),
        (TokenKind::Plus, "+"),
        (TokenKind::Identifier, "y"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "result"),
        (TokenKind::Assignment, "="),
        (TokenKind::Identifier, "add"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Identifier, "five"),
        (TokenKind::Comma, ","),
        (TokenKind::Identifier, "ten"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::EOF, ""),
    ];

    assert_eq!(tokens.len(), expected.len());
    for (token, (kind, literal)) in tokens.iter().zip(expected.iter()) {
        assert_eq!(token.kind, *kind);
        assert_eq!(token.literal, *literal);
    }
}

#[test]
fn test_tokenize_illegal_character() {
    let tokens = tokenize("a @ b");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].literal, "@");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_multibyte_illegal_character() {
    let tokens = tokenize("é+1");

    assert_eq!(tokens[0].kind, TokenKind::Illegal);
    assert_eq!(tokens[0].literal, "é");
    assert_eq!(tokens[1].kind, TokenKind::Plus);
    assert_eq!(tokens[2].kind, TokenKind::Integer);
}

#[test]
fn test_tokenize_empty_and_whitespace_sources() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds("  \n\t  "), vec![TokenKind::EOF]);
}

#[test]
fn test_eof_is_repeated_forever() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..5 {
        assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    }
    assert!(lexer.at_eof());
}

#[test]
fn test_cursor_never_regresses() {
    let mut lexer = Lexer::new("let x = @ 5 == 6;");
    let mut last = lexer.position();

    loop {
        let token = lexer.next_token();
        assert!(lexer.position() >= last);
        last = lexer.position();

        if token.kind == TokenKind::EOF {
            break;
        }
    }

    assert_eq!(last, "let x = @ 5 == 6;".len());
}

#[test]
fn test_relexing_is_idempotent() {
    let source = "let five = 5; if (five != 10) { return !true; } else { fn(a) { a }(1) } @";

    assert_eq!(tokenize(source), tokenize(source));
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("let  xy == 1");

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 3);
    assert_eq!(tokens[1].span.start.0, 5);
    assert_eq!(tokens[1].span.end.0, 7);
    assert_eq!(tokens[2].span.start.0, 8);
    assert_eq!(tokens[2].span.end.0, 10);
    assert_eq!(tokens[3].span.start.0, 11);
    assert_eq!(tokens[4].kind, TokenKind::EOF);
    assert_eq!(tokens[4].span.start.0, 12);
}

#[test]
fn test_iterator_stops_before_eof() {
    let collected: Vec<TokenKind> = Lexer::new("a + 1").map(|token| token.kind).collect();

    assert_eq!(
        collected,
        vec![TokenKind::Identifier, TokenKind::Plus, TokenKind::Integer]
    );
}

#[test]
fn test_token_display() {
    let tokens = tokenize("let !=");

    assert_eq!(tokens[0].to_string(), "Token { kind: LET, literal: \"let\" }");
    assert_eq!(tokens[1].to_string(), "Token { kind: !=, literal: \"!=\" }");
    assert_eq!(TokenKind::Identifier.to_string(), "IDENT");
    assert_eq!(TokenKind::Fn.to_string(), "FUNCTION");
}
