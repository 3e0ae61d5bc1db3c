//! The one way lexing can fail per file.

use std::fmt;

use idef_diagnostic::{Diagnostic, ErrorCode};
use idef_ir::Span;

/// A lexer error. Lexing stops at the first one.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    /// Starts at the first byte of the offending token.
    pub span: Span,
    pub kind: LexErrorKind,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// Newline or EOF before the closing `"`.
    UnterminatedString,
    /// A character that starts no token.
    UnrecognizedCharacter(char),
}

impl LexError {
    #[cold]
    pub fn unterminated_string(span: Span) -> Self {
        LexError {
            span,
            kind: LexErrorKind::UnterminatedString,
        }
    }

    #[cold]
    pub fn unrecognized_character(span: Span, c: char) -> Self {
        LexError {
            span,
            kind: LexErrorKind::UnrecognizedCharacter(c),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::UnrecognizedCharacter(_) => ErrorCode::E0002,
        }
    }

    /// Convert into a renderable diagnostic.
    pub fn into_diagnostic(self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self.kind {
            LexErrorKind::UnterminatedString => diag
                .with_label(self.span, "string starts here")
                .with_note("string literals cannot span lines"),
            LexErrorKind::UnrecognizedCharacter(_) => {
                diag.with_label(self.span, "not valid in a definition file")
            }
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LexErrorKind::UnterminatedString => f.write_str("unterminated string literal"),
            LexErrorKind::UnrecognizedCharacter(c) => {
                write!(f, "unrecognized character {c:?}")
            }
        }
    }
}

impl std::error::Error for LexError {}

#[cfg(test)]
mod tests;
