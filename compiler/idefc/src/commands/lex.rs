//! The `lex` command: dump the token stream of one file.

use std::path::Path;
use std::process::ExitCode;

use idef_diagnostic::{Diagnostic, ErrorCode};

use super::report;
use crate::{FsLoader, Session};

pub fn lex_file(path: &str) -> ExitCode {
    let mut session = Session::new(FsLoader);
    let (id, text) = match session.read(Path::new(path)) {
        Ok(file) => (file.id, file.text.clone()),
        Err(err) => {
            let diagnostic = Diagnostic::error(ErrorCode::E9001)
                .with_message(format!("cannot read `{path}`: {err}"));
            return report(&session, &[diagnostic]);
        }
    };
    match idef_lexer::lex(&text, id) {
        Ok(tokens) => {
            for token in &tokens {
                let kind = format!("{:?}", token.kind);
                println!(
                    "{:>4}:{:<3} {kind:<12} {:?}",
                    token.span.begin.line, token.span.begin.column, token.text
                );
            }
            println!("{} tokens", tokens.len());
            ExitCode::SUCCESS
        }
        Err(err) => report(&session, &[err.into_diagnostic()]),
    }
}
