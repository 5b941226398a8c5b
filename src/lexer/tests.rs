//! Unit tests for the lexer module.
//!
//! This module contains tests for scanning including:
//! - Keywords and identifiers
//! - Numeric literals with separators
//! - Operators, punctuation and pipeline tokens
//! - Line and column tracking
//! - Illegal characters

use super::{
    lexer::{tokenize, Scanner},
    tokens::{Token, TokenKind},
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).iter().map(|token| token.kind).collect()
}

fn token(kind: TokenKind, literal: &str, line: usize, column: usize) -> Token {
    Token {
        kind,
        literal: literal.to_string(),
        line,
        column,
        note: None,
    }
}

fn illegal(literal: &str, line: usize, column: usize, note: &str) -> Token {
    Token {
        note: Some(note.to_string()),
        ..token(TokenKind::Illegal, literal, line, column)
    }
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("let fn return if else true false and or not");

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Fn);
    assert_eq!(tokens[2].kind, TokenKind::Return);
    assert_eq!(tokens[3].kind, TokenKind::If);
    assert_eq!(tokens[4].kind, TokenKind::Else);
    assert_eq!(tokens[5].kind, TokenKind::True);
    assert_eq!(tokens[6].kind, TokenKind::False);
    assert_eq!(tokens[7].kind, TokenKind::And);
    assert_eq!(tokens[8].kind, TokenKind::Or);
    assert_eq!(tokens[9].kind, TokenKind::Not);
    assert_eq!(tokens[9].literal, "not");
    assert_eq!(tokens[10].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("hello hello_123 _name_ CamelCase lets");

    let expected = ["hello", "hello_123", "_name_", "CamelCase", "lets"];
    for (token, literal) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.literal, literal);
    }
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("123 123.01 1_000 10_000.12 5.");

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].literal, "123");
    assert_eq!(tokens[1].kind, TokenKind::Float);
    assert_eq!(tokens[1].literal, "123.01");
    assert_eq!(tokens[2].kind, TokenKind::Int);
    assert_eq!(tokens[2].literal, "1000");
    assert_eq!(tokens[3].kind, TokenKind::Float);
    assert_eq!(tokens[3].literal, "10000.12");
    assert_eq!(tokens[4].kind, TokenKind::Float);
    assert_eq!(tokens[4].literal, "5.");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_underscore_without_following_digit_stops_number() {
    let tokens = tokenize("1__10 7_");

    assert_eq!(tokens[0], token(TokenKind::Int, "1", 0, 0));
    assert_eq!(tokens[1], token(TokenKind::Identifier, "__10", 0, 1));
    assert_eq!(tokens[2], token(TokenKind::Int, "7", 0, 6));
    assert_eq!(tokens[3], token(TokenKind::Identifier, "_", 0, 7));
}

#[test]
fn test_second_fraction_delimiter_is_illegal() {
    let tokens = tokenize("10..1");

    assert_eq!(tokens[0], illegal(".", 0, 3, "unexpected fraction delimiter"));
    assert_eq!(tokens[1], token(TokenKind::Int, "1", 0, 4));
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("== != <= >= < > = + - * / ** ! ->"),
        vec![
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::LessEquals,
            TokenKind::GreaterEquals,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Assignment,
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Power,
            TokenKind::Not,
            TokenKind::PipeOp,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_adjacent_operators() {
    let tokens = tokenize("=+-*/**");

    let expected = [
        (TokenKind::Assignment, "="),
        (TokenKind::Plus, "+"),
        (TokenKind::Dash, "-"),
        (TokenKind::Star, "*"),
        (TokenKind::Slash, "/"),
        (TokenKind::Power, "**"),
        (TokenKind::EOF, ""),
    ];
    for (token, (kind, literal)) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, kind);
        assert_eq!(token.literal, literal);
    }
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("(){},.;"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_member_access_is_not_a_number() {
    let tokens = tokenize("a.b");

    assert_eq!(tokens[0], token(TokenKind::Identifier, "a", 0, 0));
    assert_eq!(tokens[1], token(TokenKind::Dot, ".", 0, 1));
    assert_eq!(tokens[2], token(TokenKind::Identifier, "b", 0, 2));
}

#[test]
fn test_tokenize_pipeline_tokens() {
    let tokens = tokenize("@fn @fnot @ fn @fn(");

    assert_eq!(tokens[0], token(TokenKind::PipeFn, "@fn", 0, 0));
    assert_eq!(tokens[1], token(TokenKind::PipeCtx, "@", 0, 4));
    assert_eq!(tokens[2], token(TokenKind::Identifier, "fnot", 0, 5));
    assert_eq!(tokens[3], token(TokenKind::PipeCtx, "@", 0, 10));
    assert_eq!(tokens[4], token(TokenKind::Fn, "fn", 0, 12));
    assert_eq!(tokens[5], token(TokenKind::PipeFn, "@fn", 0, 15));
    assert_eq!(tokens[6], token(TokenKind::OpenParen, "(", 0, 18));
}

#[test]
fn test_pipe_marker_at_end_of_input() {
    let tokens = tokenize("@f");

    assert_eq!(tokens[0], token(TokenKind::PipeCtx, "@", 0, 0));
    assert_eq!(tokens[1], token(TokenKind::Identifier, "f", 0, 1));
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_newlines_are_tokens() {
    assert_eq!(
        kinds("a\n\nb\r\n"),
        vec![
            TokenKind::Identifier,
            TokenKind::Newline,
            TokenKind::Newline,
            TokenKind::Identifier,
            TokenKind::Newline,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_line_and_column_tracking() {
    let tokens = tokenize("10\n%|\n1__10 10..1");

    let expected = vec![
        token(TokenKind::Int, "10", 0, 0),
        token(TokenKind::Newline, "\n", 0, 2),
        illegal("%", 1, 0, "unexpected character"),
        illegal("|", 1, 1, "unexpected character"),
        token(TokenKind::Newline, "\n", 1, 2),
        token(TokenKind::Int, "1", 2, 0),
        token(TokenKind::Identifier, "__10", 2, 1),
        illegal(".", 2, 9, "unexpected fraction delimiter"),
        token(TokenKind::Int, "1", 2, 10),
        token(TokenKind::EOF, "", 2, 11),
    ];

    assert_eq!(tokens, expected);
}

#[test]
fn test_whitespace_is_skipped() {
    let tokens = tokenize(" \t let\tx =  5 ");

    assert_eq!(tokens[0], token(TokenKind::Let, "let", 0, 3));
    assert_eq!(tokens[1], token(TokenKind::Identifier, "x", 0, 7));
    assert_eq!(tokens[2], token(TokenKind::Assignment, "=", 0, 9));
    assert_eq!(tokens[3], token(TokenKind::Int, "5", 0, 12));
    assert_eq!(tokens[4], token(TokenKind::EOF, "", 0, 14));
}

#[test]
fn test_non_ascii_character_is_one_illegal_token() {
    let tokens = tokenize("a é b");

    assert_eq!(tokens[1], illegal("é", 0, 2, "unexpected character"));
    assert_eq!(tokens[2], token(TokenKind::Identifier, "b", 0, 5));
}

#[test]
fn test_string_literals_are_not_scanned() {
    let tokens = tokenize("\"hi\"");

    assert_eq!(tokens[0], illegal("\"", 0, 0, "unexpected character"));
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[2], illegal("\"", 0, 3, "unexpected character"));
}

#[test]
fn test_eof_is_repeated() {
    let mut scanner = Scanner::new("x");

    assert_eq!(scanner.next_token().kind, TokenKind::Identifier);
    for _ in 0..3 {
        let token = scanner.next_token();
        assert_eq!(token, token_eof());
    }
}

#[test]
fn test_nul_byte_ends_input() {
    assert_eq!(
        tokenize("a\0b"),
        vec![
            token(TokenKind::Identifier, "a", 0, 0),
            token(TokenKind::EOF, "", 0, 1),
        ]
    );

    let mut scanner = Scanner::new("a\0b");
    scanner.next_token();
    for _ in 0..3 {
        assert_eq!(scanner.next_token(), token_eof());
    }
}

fn token_eof() -> Token {
    token(TokenKind::EOF, "", 0, 1)
}

#[test]
fn test_iterator_stops_after_eof() {
    let scanner = Scanner::new("a + b");

    let tokens: Vec<Token> = scanner.collect();
    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_empty_source() {
    assert_eq!(tokenize(""), vec![token(TokenKind::EOF, "", 0, 0)]);
}
