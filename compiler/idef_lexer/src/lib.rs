//! Lexer for the intrinsic definition language.
//!
//! A single forward scan over the source bytes. At each position the next
//! byte selects the token class; the token is then extended by maximal
//! munch (identifier runs, digit runs, two-byte operators). Keywords are
//! resolved after the identifier run is complete.
//!
//! Whitespace and `//` line comments produce no tokens. The first error
//! stops lexing.

mod cursor;
mod keywords;
mod lex_error;

pub use lex_error::{LexError, LexErrorKind};

use idef_ir::{FileId, Span, Token, TokenKind};

use cursor::Cursor;

/// Lex a whole definition file.
#[tracing::instrument(level = "debug", skip_all, fields(file = %file, bytes = source.len()))]
pub fn lex(source: &str, file: FileId) -> Result<Vec<Token<'_>>, LexError> {
    let mut lexer = Lexer {
        source,
        file,
        cursor: Cursor::new(source),
    };
    let mut tokens = Vec::with_capacity(source.len() / 4);
    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }
    tracing::debug!(tokens = tokens.len(), "lexed");
    Ok(tokens)
}

struct Lexer<'src> {
    source: &'src str,
    file: FileId,
    cursor: Cursor<'src>,
}

#[inline]
fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

impl<'src> Lexer<'src> {
    /// Scan the next token, or `None` at end of input.
    fn next_token(&mut self) -> Result<Option<Token<'src>>, LexError> {
        self.skip_trivia();
        if self.cursor.is_eof() {
            return Ok(None);
        }

        let start = self.cursor.location();
        let b = self.cursor.current();
        let kind = match b {
            b if is_ident_start(b) => {
                self.cursor.eat_while(is_ident_continue);
                let text = &self.source[start.offset as usize..self.cursor.pos()];
                keywords::lookup(text).unwrap_or(TokenKind::Identifier)
            }
            b'0'..=b'9' => self.number(),
            b'-' if self.cursor.peek().is_ascii_digit() => {
                self.cursor.advance();
                self.number()
            }
            b'"' => self.string()?,
            _ => match self.punctuation() {
                Some(kind) => kind,
                None => {
                    let c = self.cursor.current_char(self.source).unwrap_or('\u{fffd}');
                    let mut end = self.cursor;
                    end.advance_n(c.len_utf8());
                    let span = Span::new(self.file, start, end.location());
                    return Err(LexError::unrecognized_character(span, c));
                }
            },
        };

        let end = self.cursor.location();
        let text = &self.source[start.offset as usize..end.offset as usize];
        let token = Token::new(kind, text, Span::new(self.file, start, end));
        tracing::trace!(?token, "token");
        Ok(Some(token))
    }

    /// Skip whitespace and line comments.
    fn skip_trivia(&mut self) {
        loop {
            match self.cursor.current() {
                b' ' | b'\t' | b'\r' | b'\n' => self.cursor.advance(),
                b'/' if self.cursor.peek() == b'/' => self.cursor.eat_until_newline_or_eof(),
                _ => return,
            }
        }
    }

    /// Digits, optionally followed by `.` and more digits. A sign, if any,
    /// has already been consumed.
    fn number(&mut self) -> TokenKind {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit());
            TokenKind::Float
        } else {
            TokenKind::Integer
        }
    }

    /// A double-quoted string. The error points at the opening quote.
    fn string(&mut self) -> Result<TokenKind, LexError> {
        let open = self.cursor.location();
        self.cursor.advance();
        if self.cursor.skip_to_string_delim() == b'"' {
            self.cursor.advance();
            Ok(TokenKind::String)
        } else {
            let mut quote_end = open;
            quote_end.column += 1;
            quote_end.offset += 1;
            Err(LexError::unterminated_string(Span::new(
                self.file, open, quote_end,
            )))
        }
    }

    /// Operators and delimiters, longest match first.
    fn punctuation(&mut self) -> Option<TokenKind> {
        let (kind, len) = match (self.cursor.current(), self.cursor.peek()) {
            (b'-', b'>') => (TokenKind::Arrow, 2),
            (b'<', b'=') => (TokenKind::Le, 2),
            (b'<', b'<') => (TokenKind::Shl, 2),
            (b'>', b'=') => (TokenKind::Ge, 2),
            (b'>', b'>') => (TokenKind::Shr, 2),
            (b'|', b'|') => (TokenKind::OrOr, 2),
            (b'&', b'&') => (TokenKind::AndAnd, 2),
            (b'=', b'=') => (TokenKind::EqualEqual, 2),
            (b'!', b'=') => (TokenKind::NotEqual, 2),
            (b':', _) => (TokenKind::Colon, 1),
            (b';', _) => (TokenKind::Semicolon, 1),
            (b',', _) => (TokenKind::Comma, 1),
            (b'.', _) => (TokenKind::Dot, 1),
            (b'{', _) => (TokenKind::Lbrace, 1),
            (b'}', _) => (TokenKind::Rbrace, 1),
            (b'(', _) => (TokenKind::Lparen, 1),
            (b')', _) => (TokenKind::Rparen, 1),
            (b'[', _) => (TokenKind::Lbracket, 1),
            (b']', _) => (TokenKind::Rbracket, 1),
            (b'<', _) => (TokenKind::Lt, 1),
            (b'>', _) => (TokenKind::Gt, 1),
            (b'|', _) => (TokenKind::Or, 1),
            (b'&', _) => (TokenKind::And, 1),
            (b'=', _) => (TokenKind::Equal, 1),
            (b'!', _) => (TokenKind::Bang, 1),
            (b'+', _) => (TokenKind::Plus, 1),
            (b'-', _) => (TokenKind::Minus, 1),
            (b'*', _) => (TokenKind::Star, 1),
            (b'/', _) => (TokenKind::Divide, 1),
            (b'%', _) => (TokenKind::Modulo, 1),
            (b'^', _) => (TokenKind::Xor, 1),
            (b'~', _) => (TokenKind::Complement, 1),
            (b'@', _) => (TokenKind::Attr, 1),
            _ => return None,
        };
        self.cursor.advance_n(len);
        Some(kind)
    }
}

#[cfg(test)]
mod tests;
