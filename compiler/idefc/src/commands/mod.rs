//! CLI commands.
//!
//! Each command prints its results to stdout and its diagnostics to
//! stderr, then reports success through its exit code.

mod check;
mod lex;
mod permute;
mod table;

pub use check::check_file;
pub use lex::lex_file;
pub use permute::permute_file;
pub use table::table_file;

use std::io::IsTerminal;
use std::process::ExitCode;

use idef_diagnostic::emitter::{ColorMode, DiagnosticEmitter};
use idef_diagnostic::Diagnostic;

use crate::{FsLoader, GenerationCache, Session, SourceLoader};

/// Render `diagnostics` with the session's file text and fail.
fn report<L: SourceLoader>(session: &Session<L>, diagnostics: &[Diagnostic]) -> ExitCode {
    let is_tty = std::io::stderr().is_terminal();
    let mut emitter = session.emitter(std::io::stderr(), ColorMode::Auto, is_tty);
    emitter.emit_all(diagnostics);
    emitter.emit_summary(diagnostics.len());
    emitter.flush();
    ExitCode::FAILURE
}

fn cache() -> GenerationCache<FsLoader> {
    GenerationCache::new(FsLoader)
}
