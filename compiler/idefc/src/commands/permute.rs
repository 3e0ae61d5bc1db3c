//! The `permute` command: list concrete signatures.

use std::path::Path;
use std::process::ExitCode;

use super::{cache, report};

/// Print every permutation, or only those of intrinsics named `filter`.
pub fn permute_file(path: &str, filter: Option<&str>) -> ExitCode {
    let cache = cache();
    let permutations = match cache.permutations(Path::new(path)) {
        Ok(permutations) => permutations,
        Err(diagnostics) => return cache.with_session(|session| report(session, &diagnostics)),
    };
    let mut shown = 0usize;
    for permutation in permutations
        .iter()
        .filter(|p| filter.map_or(true, |name| p.intrinsic == name))
    {
        println!("{}", permutation.description);
        shown += 1;
    }
    if let (0, Some(name)) = (shown, filter) {
        eprintln!("error: no intrinsic named `{name}` in {path}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
