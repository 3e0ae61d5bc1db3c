//! The `check` command: resolve a definition file and its imports.

use std::path::Path;
use std::process::ExitCode;

use super::{cache, report};

pub fn check_file(path: &str) -> ExitCode {
    let cache = cache();
    match cache.sem(Path::new(path)) {
        Ok(sem) => {
            println!(
                "OK: {path} ({} enums, {} types, {} matchers, {} intrinsics, {} overloads)",
                sem.enums().len(),
                sem.types().len(),
                sem.type_matchers().len() + sem.enum_matchers().len(),
                sem.intrinsics().len(),
                sem.overloads().len(),
            );
            ExitCode::SUCCESS
        }
        Err(diagnostics) => cache.with_session(|session| report(session, &diagnostics)),
    }
}
