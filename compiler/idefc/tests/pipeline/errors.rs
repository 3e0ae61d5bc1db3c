use std::path::Path;

use idef_diagnostic::emitter::{ColorMode, DiagnosticEmitter};
use idef_diagnostic::ErrorCode;
use pretty_assertions::assert_eq;

use super::common::cache_with;

fn codes(text: &str) -> Vec<ErrorCode> {
    let cache = cache_with(&[("bad.def", text)]);
    let errors = match cache.table(Path::new("bad.def")) {
        Ok(_) => panic!("expected diagnostics"),
        Err(errors) => errors,
    };
    errors.iter().map(|d| d.code).collect()
}

#[test]
fn lex_errors() {
    assert_eq!(codes("type t\n\"open"), vec![ErrorCode::E0001]);
    assert_eq!(codes("type $"), vec![ErrorCode::E0002]);
}

#[test]
fn parse_errors() {
    assert_eq!(codes("type"), vec![ErrorCode::E1002]);
}

#[test]
fn resolution_errors_accumulate() {
    assert_eq!(
        codes("type f32\nfn a(x) -> f32\nfn b(f32) -> y\nmatch m: f32 | read"),
        vec![ErrorCode::E2001, ErrorCode::E2001, ErrorCode::E2001]
    );
}

#[test]
fn build_errors_name_each_overload() {
    let cache = cache_with(&[(
        "bad.def",
        "enum none {}\ntype f32\nmatch m: f32\nfn a() -> m\nfn b[E: none](f32)",
    )]);
    let errors = cache.table(Path::new("bad.def")).unwrap_err();
    let codes: Vec<ErrorCode> = errors.iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::E3003, ErrorCode::E3001]);
    assert!(errors[0].message.contains("fn a() -> m"), "{}", errors[0].message);
    assert!(errors[1].message.contains("fn b[E: none](f32)"), "{}", errors[1].message);
}

#[test]
fn rendered_report() {
    let cache = cache_with(&[("main.def", "type f32\nfn f(g32) -> f32")]);
    let errors = cache.sem(Path::new("main.def")).unwrap_err();
    let mut out = Vec::new();
    cache.with_session(|session| {
        let mut emitter = session.emitter(&mut out, ColorMode::Never, false);
        emitter.emit_all(&errors);
        emitter.emit_summary(errors.len());
        emitter.flush();
    });
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("error[E2001]"), "{text}");
    assert!(text.contains("main.def:2:6"), "{text}");
    assert!(text.contains("aborting due to previous error"), "{text}");
}
