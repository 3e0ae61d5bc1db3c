use super::*;
use idef_diagnostic::ErrorCode;
use idef_ir::{AttributeValue, IntrinsicKind, Location, MatcherOption, TemplatedName};
use pretty_assertions::assert_eq;

const FILE: FileId = FileId::new(1);

fn parse_ok(source: &str) -> File {
    let tokens = idef_lexer::lex(source, FILE).unwrap();
    parse(&tokens, FILE).unwrap()
}

fn parse_err(source: &str) -> ParseError {
    let tokens = idef_lexer::lex(source, FILE).unwrap();
    parse(&tokens, FILE).unwrap_err()
}

fn names(args: &[TemplatedName]) -> Vec<String> {
    args.iter().map(ToString::to_string).collect()
}

#[test]
fn empty_file() {
    assert_eq!(parse_ok(""), File::new());
    assert_eq!(parse_ok("// only comments\n"), File::new());
}

#[test]
fn enum_with_entries_and_attributes() {
    let file = parse_ok("enum access { read write @internal read_write }");
    assert_eq!(file.enums.len(), 1);
    let decl = &file.enums[0];
    assert_eq!(decl.name, "access");
    let entries: Vec<_> = decl.entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(entries, vec!["read", "write", "read_write"]);
    assert!(!decl.entries[0].attributes.has("internal"));
    assert!(decl.entries[2].attributes.has("internal"));
    assert_eq!(decl.span.begin, Location::START);
    assert_eq!(decl.span.end.offset, 47);
}

#[test]
fn empty_enum() {
    let file = parse_ok("enum nothing {}");
    assert!(file.enums[0].entries.is_empty());
}

#[test]
fn unclosed_enum_is_an_error() {
    let err = parse_err("enum e { a b");
    assert_eq!(err.code, ErrorCode::E1001);
    assert_eq!(err.context, Some(ErrorContext::EnumDecl));
}

#[test]
fn types_with_template_params_and_attributes() {
    let file = parse_ok(
        "@precedence(5) @display(\"vec{N}<{T}>\") type vec<N: num, T>\ntype f32",
    );
    assert_eq!(file.types.len(), 2);
    let vec = &file.types[0];
    assert_eq!(vec.name, "vec");
    assert_eq!(vec.template_params.len(), 2);
    assert_eq!(vec.template_params[0].name, "N");
    assert_eq!(
        vec.template_params[0].ty.as_ref().map(ToString::to_string),
        Some("num".to_string())
    );
    assert_eq!(vec.template_params[1].ty, None);
    assert_eq!(
        vec.attributes.get("precedence").map(|a| a.values.clone()),
        Some(vec![AttributeValue::Integer(5)])
    );
    assert_eq!(
        vec.attributes.get("display").map(|a| a.values.clone()),
        Some(vec![AttributeValue::String("vec{N}<{T}>".to_string())])
    );
    assert!(file.types[1].template_params.is_empty());
}

#[test]
fn matcher_options_types_and_members() {
    let file = parse_ok("match fiu32: f32 | i32 | u32\nmatch rw: access.read | access.write");
    let fiu32 = &file.matchers[0];
    assert_eq!(fiu32.name, "fiu32");
    let options: Vec<_> = fiu32.options.iter().map(ToString::to_string).collect();
    assert_eq!(options, vec!["f32", "i32", "u32"]);

    let rw = &file.matchers[1];
    assert!(matches!(
        &rw.options[0],
        MatcherOption::Member(m) if m.owner == "access" && m.member == "read"
    ));
    assert_eq!(rw.options[1].to_string(), "access.write");
}

#[test]
fn matcher_with_templated_option() {
    let file = parse_ok("match vecs: vec2<f32> | vec3<f32>");
    assert!(matches!(
        &file.matchers[0].options[0],
        MatcherOption::Type(t) if t.template_args.len() == 1
    ));
}

#[test]
fn builtin_with_explicit_implicit_params_and_return() {
    let file = parse_ok("@must_use fn clamp<T: fiu32>[N: num](e: vec<N, T>, @const low: T) -> vec<N, T>");
    let decl = &file.intrinsics[0];
    assert_eq!(decl.kind, IntrinsicKind::Builtin);
    assert_eq!(decl.name, "clamp");
    assert!(decl.attributes.has("must_use"));
    assert_eq!(decl.explicit_template_params.len(), 1);
    assert_eq!(decl.implicit_template_params.len(), 1);
    assert_eq!(decl.parameters.len(), 2);
    assert_eq!(decl.parameters[0].name.as_deref(), Some("e"));
    assert_eq!(decl.parameters[0].ty.to_string(), "vec<N, T>");
    assert!(decl.parameters[1].attributes.has("const"));
    assert_eq!(
        decl.return_type.as_ref().map(ToString::to_string),
        Some("vec<N, T>".to_string())
    );
    assert_eq!(
        decl.to_string(),
        "fn clamp<T: fiu32>[N: num](e: vec<N, T>, @const low: T) -> vec<N, T>"
    );
}

#[test]
fn unnamed_parameters_and_no_return() {
    let file = parse_ok("fn discard()\nfn store(ptr<T>, T)");
    assert!(file.intrinsics[0].parameters.is_empty());
    assert!(file.intrinsics[0].return_type.is_none());
    assert_eq!(file.intrinsics[1].parameters[0].name, None);
}

#[test]
fn nested_template_args_close_with_shift_right() {
    let file = parse_ok("fn load(p: ptr<function, vec<N, T>>) -> T");
    let ty = &file.intrinsics[0].parameters[0].ty;
    assert_eq!(ty.name, "ptr");
    assert_eq!(names(&ty.template_args), vec!["function", "vec<N, T>"]);
}

#[test]
fn template_args_may_name_qualified_entries() {
    let file = parse_ok("fn load(p: ptr<function, f32, access.read>) -> f32");
    let ty = &file.intrinsics[0].parameters[0].ty;
    let entry = &ty.template_args[2];
    assert_eq!(entry.qualifier.as_deref(), Some("access"));
    assert_eq!(entry.name, "read");
    assert_eq!(entry.span.begin.column, 31);
    assert_eq!(ty.to_string(), "ptr<function, f32, access.read>");
}

#[test]
fn qualifier_needs_an_entry_name() {
    let err = parse_err("fn load(p: ptr<access.>)");
    assert_eq!(err.code, ErrorCode::E1002);
}

#[test]
fn operators_named_by_symbol() {
    let file = parse_ok("op + <T: fiu32>(T, T) -> T\nop ! (bool) -> bool\nop << (u32, u32) -> u32");
    let ops: Vec<_> = file
        .intrinsics
        .iter()
        .map(|d| (d.kind, d.name.as_str(), d.parameters.len()))
        .collect();
    assert_eq!(
        ops,
        vec![
            (IntrinsicKind::Operator, "+", 2),
            (IntrinsicKind::Operator, "!", 1),
            (IntrinsicKind::Operator, "<<", 2),
        ]
    );
}

#[test]
fn constructors_and_converters() {
    let file = parse_ok("ctor vec2<T: scalar>(x: T, y: T) -> vec2<T>\nconv f32<T: iu32>(T) -> f32");
    assert_eq!(file.intrinsics[0].kind, IntrinsicKind::Constructor);
    assert_eq!(file.intrinsics[1].kind, IntrinsicKind::Converter);
    assert_eq!(file.intrinsics[1].name, "f32");
}

#[test]
fn symbol_name_only_for_operators() {
    let err = parse_err("fn + (T) -> T");
    assert_eq!(err.code, ErrorCode::E1002);
    assert_eq!(err.context, Some(ErrorContext::IntrinsicDecl));
}

#[test]
fn imports_are_recorded() {
    let file = parse_ok("import \"common.def\"\ntype f32");
    assert_eq!(file.imports.len(), 1);
    assert_eq!(file.imports[0].path, "common.def");
    assert_eq!(file.types.len(), 1);
}

#[test]
fn import_requires_string() {
    let err = parse_err("import common");
    assert_eq!(err.code, ErrorCode::E1001);
    assert_eq!(err.context, Some(ErrorContext::Import));
}

#[test]
fn optional_semicolons() {
    let file = parse_ok("type f32;\nmatch f: f32;\nfn abs(f32) -> f32;\nenum e { a };");
    assert_eq!(file.declaration_count(), 4);
}

#[test]
fn declaration_order_is_preserved_per_kind() {
    let file = parse_ok("fn b()\ntype x\nfn a()\nfn b(x)");
    let names: Vec<_> = file.intrinsics.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["b", "a", "b"]);
}

#[test]
fn attribute_values_of_every_kind() {
    let file = parse_ok("@test(ident, \"str\", -3, 2.5) type t");
    let attr = file.types[0].attributes.get("test").unwrap();
    assert_eq!(
        attr.values,
        vec![
            AttributeValue::Identifier("ident".to_string()),
            AttributeValue::String("str".to_string()),
            AttributeValue::Integer(-3),
            AttributeValue::float(2.5),
        ]
    );
}

#[test]
fn bad_attribute_value() {
    let err = parse_err("@stage(<) fn f()");
    assert_eq!(err.code, ErrorCode::E1004);
    assert_eq!(err.context, Some(ErrorContext::Attribute));
}

#[test]
fn stray_token_is_expected_declaration() {
    let err = parse_err("type f32\n-> x");
    assert_eq!(err.code, ErrorCode::E1003);
    assert_eq!(err.span.begin, Location::new(2, 1, 9));
    assert_eq!(err.help.len(), 1);
}

#[test]
fn attribute_without_declaration() {
    let err = parse_err("@internal");
    assert_eq!(err.code, ErrorCode::E1003);
    assert_eq!(err.message, "expected declaration, found end of file");
}

#[test]
fn missing_closing_angle() {
    let err = parse_err("fn f(x: vec<T) -> T");
    assert_eq!(err.code, ErrorCode::E1001);
    assert_eq!(err.context, Some(ErrorContext::TemplatedName));
}

#[test]
fn empty_matcher_is_an_error() {
    let err = parse_err("match m:");
    assert_eq!(err.code, ErrorCode::E1002);
    assert_eq!(err.context, Some(ErrorContext::TemplatedName));
}
