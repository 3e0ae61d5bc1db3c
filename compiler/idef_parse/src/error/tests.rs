use super::*;
use idef_ir::{FileId, Location};
use pretty_assertions::assert_eq;

fn span() -> Span {
    Span::point(FileId::new(1), Location::new(2, 5, 12))
}

#[test]
fn innermost_context_wins() {
    let err = ParseError::new(ErrorCode::E1001, "expected `}`", span())
        .with_context(ErrorContext::Attribute)
        .with_context(ErrorContext::EnumDecl);
    assert_eq!(err.context, Some(ErrorContext::Attribute));
}

#[test]
fn display_includes_location_and_context() {
    let err = ParseError::new(ErrorCode::E1002, "expected identifier", span())
        .with_context(ErrorContext::TypeDecl);
    assert_eq!(
        err.to_string(),
        "file#1:2:5: expected identifier (while parsing a type declaration)"
    );
}

#[test]
fn into_diagnostic_keeps_code_span_and_help() {
    let diag = ParseError::new(ErrorCode::E1003, "expected declaration", span())
        .with_context(ErrorContext::MatcherDecl)
        .with_help("declarations start with `enum`, `type`, `match`, `fn`, `op`, `ctor` or `conv`")
        .into_diagnostic();
    assert_eq!(diag.code, ErrorCode::E1003);
    assert_eq!(diag.primary_span(), Some(span()));
    assert_eq!(diag.labels[0].message, "while parsing a matcher declaration");
    assert_eq!(diag.notes.len(), 1);
}
