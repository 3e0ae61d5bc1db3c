use super::*;
use crate::MemoryLoader;
use idef_diagnostic::emitter::DiagnosticEmitter;
use pretty_assertions::assert_eq;

fn session(files: &[(&str, &str)]) -> Session<MemoryLoader> {
    let mut loader = MemoryLoader::new();
    for (path, text) in files {
        loader.insert(path, *text);
    }
    Session::new(loader)
}

#[test]
fn imported_declarations_come_first() {
    let mut session = session(&[
        ("main.def", "import \"core.def\"\nfn abs(f32) -> f32"),
        ("core.def", "type f32"),
    ]);
    let sem = session.resolve(Path::new("main.def")).unwrap();
    assert_eq!(session.files().len(), 2);
    assert_eq!(session.files()[0].id, FileId::new(1));
    assert_eq!(sem.types()[0].span.file, FileId::new(2));
    assert_eq!(sem.overloads()[0].span.file, FileId::new(1));
}

#[test]
fn imports_are_relative_to_the_importing_file() {
    let mut session = session(&[
        ("defs/main.def", "import \"lib/types.def\"\nfn f(t) -> u"),
        ("defs/lib/types.def", "import \"../common.def\"\ntype t"),
        ("defs/common.def", "type u"),
    ]);
    assert!(session.resolve(Path::new("defs/main.def")).is_ok());
    let paths: Vec<&Path> = session.files().iter().map(|f| f.path.as_path()).collect();
    assert_eq!(
        paths,
        vec![
            Path::new("defs/main.def"),
            Path::new("defs/lib/types.def"),
            Path::new("defs/lib/../common.def"),
        ]
    );
}

#[test]
fn shared_imports_load_once() {
    let mut session = session(&[
        ("a.def", "import \"b.def\"\nimport \"c.def\"\nfn f(d) -> d"),
        ("b.def", "import \"d.def\"\ntype b"),
        ("c.def", "import \"d.def\"\ntype c"),
        ("d.def", "type d"),
    ]);
    let sem = session.resolve(Path::new("a.def")).unwrap();
    let names: Vec<&str> = sem.types().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["d", "b", "c"]);
}

#[test]
fn import_cycles_are_ignored() {
    let mut session = session(&[
        ("a.def", "import \"b.def\"\ntype a"),
        ("b.def", "import \"a.def\"\ntype b"),
    ]);
    let sem = session.resolve(Path::new("a.def")).unwrap();
    assert_eq!(sem.types().len(), 2);
    assert_eq!(session.files().len(), 2);
}

#[test]
fn missing_import_points_at_the_directive() {
    let mut session = session(&[("main.def", "type t\nimport \"nope.def\"")]);
    let errors = session.load(Path::new("main.def")).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, ErrorCode::E9001);
    let span = errors[0].primary_span().unwrap();
    assert_eq!(span.file, FileId::new(1));
    assert_eq!(span.begin.line, 2);
}

#[test]
fn missing_root_has_no_location() {
    let mut session = session(&[]);
    let errors = session.load(Path::new("main.def")).unwrap_err();
    assert_eq!(errors[0].code, ErrorCode::E9001);
    assert!(errors[0].labels.is_empty());
}

#[test]
fn errors_from_several_files_are_collected() {
    let mut session = session(&[
        ("main.def", "import \"bad.def\"\nimport \"gone.def\"\ntype t"),
        ("bad.def", "type"),
    ]);
    let errors = session.load(Path::new("main.def")).unwrap_err();
    let codes: Vec<ErrorCode> = errors.iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::E1002, ErrorCode::E9001]);
}

#[test]
fn files_are_read_once_per_session() {
    let mut session = session(&[("main.def", "type t")]);
    let first = session.read(Path::new("main.def")).unwrap().id;
    let second = session.read(Path::new("./main.def")).unwrap().id;
    assert_eq!(first, second);
    assert_eq!(session.file(first).map(|f| f.text.as_str()), Some("type t"));
    assert_eq!(session.file(FileId::DUMMY), None);
}

#[test]
fn emitter_renders_session_paths() {
    let mut session = session(&[("main.def", "type t\nfn f(missing)")]);
    let errors = session.resolve(Path::new("main.def")).unwrap_err();
    let mut out = Vec::new();
    {
        let mut emitter = session.emitter(&mut out, ColorMode::Never, false);
        emitter.emit_all(&errors);
        emitter.flush();
    }
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("error[E2001]"), "{text}");
    assert!(text.contains("main.def:2:"), "{text}");
    assert!(text.contains("fn f(missing)"), "{text}");
}
