use std::fs;
use std::path::Path;
use std::sync::Arc;

use idefc::{FsLoader, GenerationCache, Session};
use pretty_assertions::assert_eq;

use super::common::{cache_with, CORE};

#[test]
fn imports_merge_into_one_namespace() {
    let cache = cache_with(&[
        ("defs/core.def", CORE),
        (
            "defs/extra/bits.def",
            "import \"../core.def\"\nfn count_ones[T: fiu32](T) -> T",
        ),
    ]);
    let table = cache.table(Path::new("defs/extra/bits.def")).unwrap();
    let names: Vec<&str> = table.builtins.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["abs", "select", "dpdx", "load", "count_ones"]);
}

#[test]
fn real_files_through_the_fs_loader() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("core.def"), CORE).unwrap();
    fs::write(
        dir.path().join("main.def"),
        "import \"core.def\"\nfn sign[T: fi32](T) -> T",
    )
    .unwrap();

    let cache = GenerationCache::new(FsLoader);
    let main = dir.path().join("main.def");
    let permutations = cache.permutations(&main).unwrap();
    let signs: Vec<&str> = permutations
        .iter()
        .filter(|p| p.intrinsic == "sign")
        .map(|p| p.description.as_str())
        .collect();
    assert_eq!(signs, vec!["fn sign(f32) -> f32", "fn sign(i32) -> i32"]);

    let again = cache.permutations(&dir.path().join(".").join("main.def")).unwrap();
    assert!(Arc::ptr_eq(&permutations, &again));
    assert_eq!(cache.with_session(|s| s.files().len()), 2);
}

#[test]
fn missing_file_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = Session::new(FsLoader);
    let errors = session.load(&dir.path().join("absent.def")).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, idef_diagnostic::ErrorCode::E9001);
}
