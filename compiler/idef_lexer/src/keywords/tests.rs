use super::*;

#[test]
fn every_keyword_resolves() {
    let cases = [
        ("match", TokenKind::Match),
        ("fn", TokenKind::Function),
        ("op", TokenKind::Operator),
        ("ctor", TokenKind::Constructor),
        ("conv", TokenKind::Converter),
        ("type", TokenKind::Type),
        ("enum", TokenKind::Enum),
        ("import", TokenKind::Import),
    ];
    for (text, kind) in cases {
        assert_eq!(lookup(text), Some(kind), "{text}");
        assert!(kind.is_keyword());
    }
}

#[test]
fn keyword_prefixes_are_identifiers() {
    for text in ["operation", "o", "fnx", "types", "enumerate", "matches", "importer"] {
        assert_eq!(lookup(text), None, "{text}");
    }
}

#[test]
fn keywords_are_case_sensitive() {
    assert_eq!(lookup("Match"), None);
    assert_eq!(lookup("FN"), None);
}
