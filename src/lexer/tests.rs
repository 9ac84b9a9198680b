//! Unit tests for the lexer module.

use crate::errors::errors::ErrorImpl;

use super::{
    lexer::Lexer,
    tokens::{Token, TokenKind},
};

fn lex(source: &str) -> (Vec<Token>, Lexer) {
    let mut lexer = Lexer::new(source.to_string(), Some("test.tez".to_string()));
    let tokens = lexer.tokenize();
    (tokens, lexer)
}

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|token| token.kind).collect()
}

#[test]
fn test_tokenize_keywords() {
    let source = "namespace func return var let struct if else while do for true false \
                  null enum union break continue using as new free asm";
    let (tokens, lexer) = lex(source);

    assert!(!lexer.errors_reported());
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Namespace,
            TokenKind::Func,
            TokenKind::Return,
            TokenKind::Var,
            TokenKind::Let,
            TokenKind::Struct,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::While,
            TokenKind::Do,
            TokenKind::For,
            TokenKind::True,
            TokenKind::False,
            TokenKind::Null,
            TokenKind::Enum,
            TokenKind::Union,
            TokenKind::Break,
            TokenKind::Continue,
            TokenKind::Using,
            TokenKind::As,
            TokenKind::New,
            TokenKind::Free,
            TokenKind::Asm,
            TokenKind::EOF,
        ]
    );
    assert!(tokens.iter().all(|token| token.value.is_empty()));
    assert!(tokens[..23].iter().all(|token| token.kind.is_keyword()));
}

#[test]
fn test_tokenize_identifiers() {
    let (tokens, _) = lex("foo _bar baz_123 CamelCase lets");

    let values: Vec<&str> = tokens[..5].iter().map(|t| t.value.as_str()).collect();
    assert_eq!(values, vec!["foo", "_bar", "baz_123", "CamelCase", "lets"]);
    assert!(tokens[..5].iter().all(|t| t.kind == TokenKind::Identifier));
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_single_integer() {
    let (tokens, lexer) = lex("42");

    assert!(!lexer.errors_reported());
    assert_eq!(kinds(&tokens), vec![TokenKind::Integer, TokenKind::EOF]);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[0].position.line, 1);
    assert_eq!(tokens[0].position.column, 1);
}

#[test]
fn test_tokenize_real_numbers() {
    let (tokens, lexer) = lex("3.14 0.5 7.");

    assert!(!lexer.errors_reported());
    assert_eq!(tokens[0].kind, TokenKind::RealNumber);
    assert_eq!(tokens[0].value, "3.14");
    assert_eq!(tokens[1].value, "0.5");
    assert_eq!(tokens[2].kind, TokenKind::RealNumber);
    assert_eq!(tokens[2].value, "7.");
}

#[test]
fn test_too_many_decimal_points() {
    let (tokens, lexer) = lex("1.2.3;");

    assert_eq!(tokens[0].kind, TokenKind::RealNumber);
    assert_eq!(tokens[0].value, "1.2");
    assert_eq!(tokens[1].kind, TokenKind::Semicolon);

    assert_eq!(lexer.errors().len(), 1);
    let error = &lexer.errors()[0];
    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::TooManyDecimalPoints {
            literal: "1.2.3".to_string()
        }
    );
    assert_eq!(error.get_position().column, 4);
    assert!(!error.is_fatal());
}

#[test]
fn test_extra_decimal_point_truncates_number() {
    let (tokens, lexer) = lex("1..2 x");

    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::RealNumber, TokenKind::Identifier, TokenKind::EOF]
    );
    assert_eq!(tokens[0].value, "1.");
    assert_eq!(lexer.errors().len(), 1);
    assert_eq!(lexer.errors()[0].get_position().column, 3);
}

#[test]
fn test_strings_are_kept_raw() {
    let (tokens, lexer) = lex(r#"print("a\"b", "x\ny");"#);

    assert!(!lexer.errors_reported());
    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].value, r#"a\"b"#);
    assert_eq!(tokens[2].position.column, 7);
    assert_eq!(tokens[4].kind, TokenKind::String);
    assert_eq!(tokens[4].value, r"x\ny");
}

#[test]
fn test_character_literals() {
    let (tokens, lexer) = lex(r"'a' '\n'");

    assert!(!lexer.errors_reported());
    assert_eq!(tokens[0].kind, TokenKind::Character);
    assert_eq!(tokens[0].value, "a");
    assert_eq!(tokens[1].kind, TokenKind::Character);
    assert_eq!(tokens[1].value, r"\n");
    assert_eq!(tokens[1].position.column, 5);
}

#[test]
fn test_malformed_character_recovers() {
    let (tokens, lexer) = lex("'ab' x");

    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::Character, TokenKind::Identifier, TokenKind::EOF]
    );
    assert_eq!(tokens[0].value, "a");
    assert_eq!(tokens[1].value, "x");

    assert_eq!(lexer.errors().len(), 1);
    assert_eq!(
        lexer.errors()[0].get_internal_error(),
        &ErrorImpl::MalformedCharacter { found: 'b' }
    );
    assert_eq!(lexer.errors()[0].get_position().column, 3);
}

#[test]
fn test_operators_use_longest_match() {
    let (tokens, lexer) = lex("<<= >>= << <= < -> - :: : a<<=b");

    assert!(!lexer.errors_reported());
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::LeftShiftEquals,
            TokenKind::RightShiftEquals,
            TokenKind::BitwiseShiftLeft,
            TokenKind::LessEquals,
            TokenKind::Less,
            TokenKind::Arrow,
            TokenKind::Minus,
            TokenKind::ScopeResolution,
            TokenKind::Colon,
            TokenKind::Identifier,
            TokenKind::LeftShiftEquals,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_compound_assignment_operators() {
    let (tokens, _) = lex("+= -= *= /= %= &= |= ^= != == >= && ||");

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::PlusEquals,
            TokenKind::MinusEquals,
            TokenKind::MultiplyEquals,
            TokenKind::DivideEquals,
            TokenKind::ModuloEquals,
            TokenKind::AndEquals,
            TokenKind::OrEquals,
            TokenKind::XorEquals,
            TokenKind::BangEquals,
            TokenKind::EqualsEquals,
            TokenKind::GreaterEquals,
            TokenKind::LogicalAnd,
            TokenKind::LogicalOr,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_comments_are_skipped_and_lines_counted() {
    let (tokens, lexer) = lex("// comment\nlet /* multi\nline */ x / y");

    assert!(!lexer.errors_reported());
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Slash,
            TokenKind::Identifier,
            TokenKind::EOF
        ]
    );
    assert_eq!(tokens[0].position.line, 2);
    assert_eq!(tokens[0].position.column, 1);
    assert_eq!(tokens[1].position.line, 3);
    assert_eq!(tokens[1].position.column, 9);
}

#[test]
fn test_block_comments_do_not_nest() {
    let (tokens, _) = lex("/* a /* b */ c */");

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Identifier,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::EOF
        ]
    );
    assert_eq!(tokens[0].value, "c");
}

#[test]
fn test_line_comment_at_end_of_input() {
    let (tokens, lexer) = lex("x // trailing");

    assert!(!lexer.errors_reported());
    assert_eq!(kinds(&tokens), vec![TokenKind::Identifier, TokenKind::EOF]);
}

#[test]
fn test_positions_track_columns() {
    let (tokens, _) = lex("let x\n  y");

    assert_eq!((tokens[1].position.line, tokens[1].position.column), (1, 5));
    assert_eq!((tokens[2].position.line, tokens[2].position.column), (2, 3));
    assert_eq!((tokens[3].position.line, tokens[3].position.column), (2, 4));
    assert_eq!(tokens[0].position.file.as_str(), "test.tez");
}

#[test]
fn test_unknown_operator_is_skipped() {
    let (tokens, lexer) = lex("a @ b");

    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::EOF]
    );
    assert_eq!(lexer.errors().len(), 1);
    assert_eq!(
        lexer.errors()[0].get_internal_error(),
        &ErrorImpl::UnknownOperator { operator: '@' }
    );
    assert_eq!(lexer.errors()[0].get_position().column, 3);
}

#[test]
fn test_unexpected_character_is_skipped() {
    let (tokens, lexer) = lex("a é b");

    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::EOF]
    );
    assert_eq!(
        lexer.errors()[0].get_internal_error(),
        &ErrorImpl::UnexpectedCharacter { character: 'é' }
    );
}

#[test]
fn test_unterminated_string_is_fatal() {
    let (tokens, lexer) = lex("x \"abc");

    assert_eq!(kinds(&tokens), vec![TokenKind::Identifier, TokenKind::EOF]);
    assert_eq!(lexer.errors().len(), 1);
    assert_eq!(
        lexer.errors()[0].get_internal_error(),
        &ErrorImpl::UnexpectedEndOfFile
    );
    assert!(lexer.errors()[0].is_fatal());
}

#[test]
fn test_unterminated_block_comment_is_fatal() {
    let (tokens, lexer) = lex("x /* never closed\n");

    assert_eq!(kinds(&tokens), vec![TokenKind::Identifier, TokenKind::EOF]);
    assert!(lexer.errors()[0].is_fatal());
}

#[test]
fn test_empty_source_yields_only_eof() {
    let (tokens, lexer) = lex("  \n\t ");

    assert!(!lexer.errors_reported());
    assert_eq!(kinds(&tokens), vec![TokenKind::EOF]);
    assert_eq!(tokens[0].position.line, 2);
}

#[test]
fn test_token_names_and_display() {
    let (tokens, _) = lex("let x");

    assert_eq!(TokenKind::LBrace.name(), "L_BRACE");
    assert_eq!(TokenKind::Func.name(), "KW_FUNC");
    assert_eq!(TokenKind::RightShiftEquals.spelling(), ">>=");
    assert!(!TokenKind::Identifier.is_keyword());
    assert_eq!(tokens[0].to_string(), "test.tez:1:1 KW_LET");
    assert_eq!(tokens[1].to_string(), "test.tez:1:5 IDENTIFIER (x)");
}
