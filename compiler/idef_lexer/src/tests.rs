use super::*;
use idef_ir::Location;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const FILE: FileId = FileId::new(7);

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source, FILE).unwrap().iter().map(|t| t.kind).collect()
}

fn single(source: &str) -> Token<'_> {
    let tokens = lex(source, FILE).unwrap();
    assert_eq!(tokens.len(), 1, "expected one token for {source:?}: {tokens:?}");
    tokens[0]
}

fn span(begin: (u32, u32, u32), end: (u32, u32, u32)) -> Span {
    Span::new(
        FILE,
        Location::new(begin.0, begin.1, begin.2),
        Location::new(end.0, end.1, end.2),
    )
}

#[test]
fn empty_and_trivia_only() {
    assert!(lex("", FILE).unwrap().is_empty());
    assert!(lex("  \t\r\n // just a comment\n", FILE).unwrap().is_empty());
}

#[test]
fn keyword_match_spans_columns_one_to_six() {
    let token = single("match");
    assert_eq!(token.kind, TokenKind::Match);
    assert_eq!(token.text, "match");
    assert_eq!(token.span, span((1, 1, 0), (1, 6, 5)));
}

#[test]
fn every_token_class_lexes_alone() {
    let cases = [
        ("ident_1", TokenKind::Identifier),
        ("_x", TokenKind::Identifier),
        ("123", TokenKind::Integer),
        ("-7", TokenKind::Integer),
        ("1.5", TokenKind::Float),
        ("\"str\"", TokenKind::String),
        ("fn", TokenKind::Function),
        ("op", TokenKind::Operator),
        ("ctor", TokenKind::Constructor),
        ("conv", TokenKind::Converter),
        ("type", TokenKind::Type),
        ("enum", TokenKind::Enum),
        ("import", TokenKind::Import),
        (":", TokenKind::Colon),
        (";", TokenKind::Semicolon),
        (",", TokenKind::Comma),
        (".", TokenKind::Dot),
        ("{", TokenKind::Lbrace),
        ("}", TokenKind::Rbrace),
        ("(", TokenKind::Lparen),
        (")", TokenKind::Rparen),
        ("[", TokenKind::Lbracket),
        ("]", TokenKind::Rbracket),
        ("<", TokenKind::Lt),
        ("<=", TokenKind::Le),
        ("<<", TokenKind::Shl),
        (">", TokenKind::Gt),
        (">=", TokenKind::Ge),
        (">>", TokenKind::Shr),
        ("->", TokenKind::Arrow),
        ("|", TokenKind::Or),
        ("||", TokenKind::OrOr),
        ("&", TokenKind::And),
        ("&&", TokenKind::AndAnd),
        ("=", TokenKind::Equal),
        ("==", TokenKind::EqualEqual),
        ("!", TokenKind::Bang),
        ("!=", TokenKind::NotEqual),
        ("+", TokenKind::Plus),
        ("-", TokenKind::Minus),
        ("*", TokenKind::Star),
        ("/", TokenKind::Divide),
        ("%", TokenKind::Modulo),
        ("^", TokenKind::Xor),
        ("~", TokenKind::Complement),
        ("@", TokenKind::Attr),
    ];
    for (source, kind) in cases {
        let token = single(source);
        assert_eq!(token.kind, kind, "{source:?}");
        assert_eq!(token.text, source);
        #[allow(clippy::cast_possible_truncation)]
        let len = source.len() as u32;
        assert_eq!(token.span, span((1, 1, 0), (1, 1 + len, len)), "{source:?}");
    }
}

#[test]
fn negative_float_then_negative_integer() {
    let tokens = lex("-123.456-789", FILE).unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Float);
    assert_eq!(tokens[0].text, "-123.456");
    assert_eq!(tokens[1].kind, TokenKind::Integer);
    assert_eq!(tokens[1].text, "-789");
    assert_eq!(tokens[0].span.end, tokens[1].span.begin);
}

#[test]
fn dot_without_fraction_digits_is_separate() {
    assert_eq!(
        kinds("1.x"),
        vec![TokenKind::Integer, TokenKind::Dot, TokenKind::Identifier]
    );
}

#[test]
fn keyword_prefix_is_identifier() {
    let token = single("operation");
    assert_eq!(token.kind, TokenKind::Identifier);
    assert_eq!(token.text, "operation");
}

#[test]
fn string_text_keeps_quotes() {
    let token = single("\"vertex\"");
    assert_eq!(token.text, "\"vertex\"");
    assert_eq!(token.unquoted(), "vertex");
}

#[test]
fn unterminated_string_fails_at_opening_quote() {
    let err = lex("\"abc", FILE).unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!(err.span, span((1, 1, 0), (1, 2, 1)));
}

#[test]
fn newline_inside_string_is_unterminated() {
    let err = lex("fn f\n  \"abc\ndef\"", FILE).unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!(err.span.begin, Location::new(2, 3, 7));
}

#[test]
fn unrecognized_character_reports_char_and_location() {
    let err = lex("type a\n  $", FILE).unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnrecognizedCharacter('$'));
    assert_eq!(err.span, span((2, 3, 9), (2, 4, 10)));
}

#[test]
fn unrecognized_multibyte_character() {
    let err = lex("é", FILE).unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnrecognizedCharacter('é'));
    assert_eq!(err.span.len(), 2);
}

#[test]
fn multibyte_text_advances_one_column_per_character() {
    let tokens = lex("@display(\"é\") type", FILE).unwrap();
    let ty = tokens.last().unwrap();
    assert_eq!(ty.kind, TokenKind::Type);
    assert_eq!(ty.span.begin, Location::new(1, 15, 15));

    let tokens = lex("// naïve\ntype", FILE).unwrap();
    assert_eq!(tokens[0].span.begin, Location::new(2, 1, 10));
}

#[test]
fn comments_and_newlines_update_locations() {
    let tokens = lex("// header\ntype f32 // trailing\n\n  enum", FILE).unwrap();
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Type, TokenKind::Identifier, TokenKind::Enum]
    );
    assert_eq!(tokens[0].span.begin, Location::new(2, 1, 10));
    assert_eq!(tokens[1].span.begin, Location::new(2, 6, 15));
    assert_eq!(tokens[2].span.begin, Location::new(4, 3, 34));
}

#[test]
fn intrinsic_declaration() {
    assert_eq!(
        kinds("@must_use fn max<T: fiu32>(T, T) -> T"),
        vec![
            TokenKind::Attr,
            TokenKind::Identifier,
            TokenKind::Function,
            TokenKind::Identifier,
            TokenKind::Lt,
            TokenKind::Identifier,
            TokenKind::Colon,
            TokenKind::Identifier,
            TokenKind::Gt,
            TokenKind::Lparen,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::Identifier,
            TokenKind::Rparen,
            TokenKind::Arrow,
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn minus_before_non_digit_is_operator() {
    assert_eq!(
        kinds("op -(T)"),
        vec![
            TokenKind::Operator,
            TokenKind::Minus,
            TokenKind::Lparen,
            TokenKind::Identifier,
            TokenKind::Rparen,
        ]
    );
}

#[test]
fn tokens_carry_file_id() {
    let tokens = lex("a b", FileId::new(3)).unwrap();
    assert!(tokens.iter().all(|t| t.span.file == FileId::new(3)));
}

proptest! {
    #[test]
    fn identifiers_round_trip(name in "[a-zA-Z_][a-zA-Z0-9_]{0,16}") {
        let tokens = lex(&name, FILE).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].text, name.as_str());
        let expected = keywords::lookup(&name).unwrap_or(TokenKind::Identifier);
        prop_assert_eq!(tokens[0].kind, expected);
    }

    #[test]
    fn integers_round_trip(value in any::<i64>()) {
        let text = value.to_string();
        let tokens = lex(&text, FILE).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Integer);
        prop_assert_eq!(tokens[0].text, text.as_str());
    }

    #[test]
    fn token_spans_are_ordered(source in "[a-z0-9 ,:<>()\n]{0,40}") {
        let tokens = lex(&source, FILE).unwrap();
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].span.end.offset <= pair[1].span.begin.offset);
        }
        for token in &tokens {
            prop_assert_eq!(&source[token.span.to_range()], token.text);
        }
    }
}
