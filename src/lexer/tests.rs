//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer and string literals
//! - Operators, delimiters, and two-character look-ahead combination
//! - Illegal input and end-of-input behavior

use super::{lexer::Lexer, tokens::TokenKind};

fn tokenize(source: &str) -> Vec<(TokenKind, String)> {
    let mut lexer = Lexer::new(source.to_string(), Some("test.mk".to_string()));
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token();
        let kind = token.kind;
        tokens.push((token.kind, token.literal));
        if kind == TokenKind::Eof {
            break;
        }
    }

    tokens
}

#[test]
fn test_tokenize_single_character_tokens() {
    for (source, kind) in [
        ("+", TokenKind::Plus),
        ("(", TokenKind::LParen),
        (")", TokenKind::RParen),
        ("{", TokenKind::LBrace),
        ("}", TokenKind::RBrace),
        ("[", TokenKind::LBracket),
        ("]", TokenKind::RBracket),
        (",", TokenKind::Comma),
        (";", TokenKind::Semicolon),
    ] {
        let tokens = tokenize(source);
        assert_eq!(tokens.len(), 2, "source {:?}", source);
        assert_eq!(tokens[0].0, kind, "source {:?}", source);
        assert_eq!(tokens[0].1, source);
        assert_eq!(tokens[1].0, TokenKind::Eof);
    }
}

#[test]
fn test_tokenize_delimiters() {
    let tokens = tokenize("=+(){},;");

    assert_eq!(tokens[0].0, TokenKind::Assign);
    assert_eq!(tokens[1].0, TokenKind::Plus);
    assert_eq!(tokens[2].0, TokenKind::LParen);
    assert_eq!(tokens[3].0, TokenKind::RParen);
    assert_eq!(tokens[4].0, TokenKind::LBrace);
    assert_eq!(tokens[5].0, TokenKind::RBrace);
    assert_eq!(tokens[6].0, TokenKind::Comma);
    assert_eq!(tokens[7].0, TokenKind::Semicolon);
    assert_eq!(tokens[8].0, TokenKind::Eof);
}

#[test]
fn test_tokenize_two_character_operators() {
    let tokens = tokenize("== !=");

    assert_eq!(tokens[0], (TokenKind::Eq, "==".to_string()));
    assert_eq!(tokens[1], (TokenKind::NotEq, "!=".to_string()));
    assert_eq!(tokens[2].0, TokenKind::Eof);
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("+ - * / < > ! =");

    assert_eq!(tokens[0].0, TokenKind::Plus);
    assert_eq!(tokens[1].0, TokenKind::Minus);
    assert_eq!(tokens[2].0, TokenKind::Asterisk);
    assert_eq!(tokens[3].0, TokenKind::Slash);
    assert_eq!(tokens[4].0, TokenKind::Lt);
    assert_eq!(tokens[5].0, TokenKind::Gt);
    assert_eq!(tokens[6].0, TokenKind::Bang);
    assert_eq!(tokens[7].0, TokenKind::Assign);
    assert_eq!(tokens[8].0, TokenKind::Eof);
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("fn let true false if else return");

    assert_eq!(tokens[0].0, TokenKind::Function);
    assert_eq!(tokens[1].0, TokenKind::Let);
    assert_eq!(tokens[2].0, TokenKind::True);
    assert_eq!(tokens[3].0, TokenKind::False);
    assert_eq!(tokens[4].0, TokenKind::If);
    assert_eq!(tokens[5].0, TokenKind::Else);
    assert_eq!(tokens[6].0, TokenKind::Return);
    assert_eq!(tokens[7].0, TokenKind::Eof);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar foobar add _tmp");

    for (index, expected) in ["foo", "bar", "foobar", "add", "_tmp"].iter().enumerate() {
        assert_eq!(tokens[index].0, TokenKind::Ident);
        assert_eq!(tokens[index].1, *expected);
    }
    assert_eq!(tokens[5].0, TokenKind::Eof);
}

#[test]
fn test_tokenize_integers() {
    let tokens = tokenize("5 10 131313");

    assert_eq!(tokens[0], (TokenKind::Int, "5".to_string()));
    assert_eq!(tokens[1], (TokenKind::Int, "10".to_string()));
    assert_eq!(tokens[2], (TokenKind::Int, "131313".to_string()));
    assert_eq!(tokens[3].0, TokenKind::Eof);
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize(r#""hello" "world wide" """#);

    assert_eq!(tokens[0], (TokenKind::String, "hello".to_string()));
    assert_eq!(tokens[1], (TokenKind::String, "world wide".to_string()));
    assert_eq!(tokens[2], (TokenKind::String, "".to_string()));
    assert_eq!(tokens[3].0, TokenKind::Eof);
}

#[test]
fn test_tokenize_unterminated_string_is_illegal() {
    let tokens = tokenize(r#""oops"#);

    assert_eq!(tokens[0], (TokenKind::Illegal, "\"".to_string()));
    assert_eq!(tokens[1], (TokenKind::Ident, "oops".to_string()));
    assert_eq!(tokens[2].0, TokenKind::Eof);
}

#[test]
fn test_tokenize_simple_program() {
    let source = "let five = 5;\nlet add = fn(x, y) { x + y; };";
    let tokens = tokenize(source);

    let expected = [
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "five"),
        (TokenKind::Assign, "="),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "add"),
        (TokenKind::Assign, "="),
        (TokenKind::Function, "fn"),
        (TokenKind::LParen, "("),
        (TokenKind::Ident, "x"),
        (TokenKind::Comma, ","),
        (TokenKind::Ident, "y"),
        (TokenKind::RParen, ")"),
        (TokenKind::LBrace, "{"),
        (TokenKind::Ident, "x"),
        (TokenKind::Plus, "+"),
        (TokenKind::Ident, "y"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::RBrace, "}"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Eof, ""),
    ];

    assert_eq!(tokens.len(), expected.len());
    for (actual, (kind, literal)) in tokens.iter().zip(expected.iter()) {
        assert_eq!(actual.0, *kind);
        assert_eq!(actual.1, *literal);
    }
}

#[test]
fn test_tokenize_illegal_character() {
    // Unrecognized input is reported as data, never as a failure.
    let tokens = tokenize("let x = @;");

    assert_eq!(tokens[0].0, TokenKind::Let);
    assert_eq!(tokens[1].0, TokenKind::Ident);
    assert_eq!(tokens[2].0, TokenKind::Assign);
    assert_eq!(tokens[3], (TokenKind::Illegal, "@".to_string()));
    assert_eq!(tokens[4].0, TokenKind::Semicolon);
    assert_eq!(tokens[5].0, TokenKind::Eof);
}

#[test]
fn test_tokenize_whitespace_handling() {
    let tokens = tokenize("  let \t x \r\n =  42  ");

    assert_eq!(tokens[0].0, TokenKind::Let);
    assert_eq!(tokens[1].0, TokenKind::Ident);
    assert_eq!(tokens[2].0, TokenKind::Assign);
    assert_eq!(tokens[3].0, TokenKind::Int);
    assert_eq!(tokens[4].0, TokenKind::Eof);
}

#[test]
fn test_eof_is_idempotent() {
    let mut lexer = Lexer::new("x".to_string(), None);

    assert_eq!(lexer.next_token().kind, TokenKind::Ident);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::Eof);
    assert_eq!(token.literal, "");
}

#[test]
fn test_token_equality_ignores_span() {
    let mut first = Lexer::new("foo foo".to_string(), None);
    let a = first.next_token();
    let b = first.next_token();

    assert_eq!(a, b);
}
