use super::*;
use idef_ir::{FileId, Location};
use pretty_assertions::assert_eq;

fn span() -> Span {
    Span::point(FileId::new(2), Location::new(3, 7, 20))
}

#[test]
fn unterminated_string_diagnostic() {
    let diag = LexError::unterminated_string(span()).into_diagnostic();
    assert_eq!(diag.code, ErrorCode::E0001);
    assert_eq!(diag.message, "unterminated string literal");
    assert_eq!(diag.primary_span(), Some(span()));
    assert_eq!(diag.notes.len(), 1);
}

#[test]
fn unrecognized_character_diagnostic() {
    let err = LexError::unrecognized_character(span(), '$');
    assert_eq!(err.to_string(), "unrecognized character '$'");
    let diag = err.into_diagnostic();
    assert_eq!(diag.code, ErrorCode::E0002);
    assert_eq!(diag.labels[0].message, "not valid in a definition file");
}
