use super::*;
use crate::{FileId, Location};

#[test]
fn keyword_classification() {
    assert!(TokenKind::Match.is_keyword());
    assert!(TokenKind::Import.is_keyword());
    assert!(!TokenKind::Identifier.is_keyword());
    assert!(!TokenKind::Arrow.is_keyword());
}

#[test]
fn operator_symbols() {
    assert!(TokenKind::Plus.is_operator_symbol());
    assert!(TokenKind::Shl.is_operator_symbol());
    assert!(TokenKind::Bang.is_operator_symbol());
    assert!(!TokenKind::Arrow.is_operator_symbol());
    assert!(!TokenKind::Equal.is_operator_symbol());
    assert!(!TokenKind::Attr.is_operator_symbol());
}

#[test]
fn unquoted_strips_string_quotes_only() {
    let span = Span::new(FileId::DUMMY, Location::START, Location::new(1, 6, 5));
    let string = Token::new(TokenKind::String, "\"abc\"", span);
    assert_eq!(string.unquoted(), "abc");

    let ident = Token::new(TokenKind::Identifier, "abc", span);
    assert_eq!(ident.unquoted(), "abc");
}

#[test]
fn display_names_are_quoted_for_punctuation() {
    assert_eq!(TokenKind::Arrow.to_string(), "`->`");
    assert_eq!(TokenKind::Identifier.to_string(), "identifier");
}
