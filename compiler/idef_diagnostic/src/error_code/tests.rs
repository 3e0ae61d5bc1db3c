use super::*;

#[test]
fn as_str_round_trips_through_parse() {
    for &code in ALL {
        assert_eq!(ErrorCode::parse(code.as_str()), Some(code));
    }
}

#[test]
fn parse_rejects_unknown_codes() {
    assert_eq!(ErrorCode::parse("E7777"), None);
    assert_eq!(ErrorCode::parse(""), None);
}

#[test]
fn syntax_errors_are_lexer_and_parser_codes() {
    assert!(ErrorCode::E0001.is_syntax_error());
    assert!(ErrorCode::E1001.is_syntax_error());
    assert!(!ErrorCode::E2001.is_syntax_error());
    assert!(!ErrorCode::E3001.is_syntax_error());
}

#[test]
fn every_code_has_a_description() {
    for &code in ALL {
        assert!(!code.description().is_empty(), "{code} has no description");
    }
}
