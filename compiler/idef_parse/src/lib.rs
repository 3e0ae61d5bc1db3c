//! Recursive descent parser for definition files.
//!
//! Turns the token list of one file into an [`ast::File`](idef_ir::File).
//! There is no error recovery: a syntax error is fatal to the file and is
//! returned as a [`ParseError`].

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ErrorContext, ParseError};

use idef_ir::{File, FileId, Span, Token};

/// Parse the tokens of one file.
#[tracing::instrument(level = "debug", skip_all, fields(file = %file, tokens = tokens.len()))]
pub fn parse(tokens: &[Token<'_>], file: FileId) -> Result<File, ParseError> {
    let mut parser = Parser::new(tokens, file);
    let ast = parser.parse_file()?;
    tracing::debug!(
        imports = ast.imports.len(),
        declarations = ast.declaration_count(),
        "parsed"
    );
    Ok(ast)
}

/// Parser state.
pub struct Parser<'a, 'src> {
    cursor: Cursor<'a, 'src>,
}

impl<'a, 'src> Parser<'a, 'src> {
    /// Create a new parser.
    pub fn new(tokens: &'a [Token<'src>], file: FileId) -> Self {
        Parser {
            cursor: Cursor::new(tokens, file),
        }
    }

    /// Span from `start` to the end of the last consumed token.
    #[inline]
    fn span_from(&self, start: Span) -> Span {
        start.merge(self.cursor.previous_span())
    }
}

#[cfg(test)]
mod tests;
