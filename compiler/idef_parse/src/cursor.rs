//! Position in a token slice.
//!
//! Lookahead and consumption over the lexer's token slice.

use idef_diagnostic::ErrorCode;
use idef_ir::{FileId, Location, Span, Token, TokenKind};

use crate::ParseError;

/// Cursor for navigating tokens.
///
/// The lexer emits no EOF token; past the last token the cursor reports
/// `None` as the current kind and a zero-length span just after the last
/// token.
pub struct Cursor<'a, 'src> {
    tokens: &'a [Token<'src>],
    pos: usize,
    /// The first `>` of a `>>` token has been consumed.
    split_shr: bool,
    eof_span: Span,
}

impl<'a, 'src> Cursor<'a, 'src> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a [Token<'src>], file: FileId) -> Self {
        let eof_span = tokens.last().map_or_else(
            || Span::point(file, Location::START),
            |last| Span::point(file, last.span.end),
        );
        Cursor {
            tokens,
            pos: 0,
            split_shr: false,
            eof_span,
        }
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Get the current token, `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<&Token<'src>> {
        self.tokens.get(self.pos)
    }

    /// Get the current token's kind.
    ///
    /// The second half of a split `>>` reads as `>`.
    #[inline]
    pub fn current_kind(&self) -> Option<TokenKind> {
        if self.split_shr {
            return Some(TokenKind::Gt);
        }
        self.current().map(|t| t.kind)
    }

    /// Get the current token's span.
    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().map_or(self.eof_span, |t| t.span)
    }

    /// Get the previous token's span.
    #[inline]
    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            self.eof_span
        }
    }

    /// Peek at the kind of the token after the current one.
    #[inline]
    pub fn peek_next_kind(&self) -> Option<TokenKind> {
        self.tokens.get(self.pos + 1).map(|t| t.kind)
    }

    /// Check if the current token matches the given kind.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == Some(kind)
    }

    /// Advance to the next token.
    #[inline]
    pub fn advance(&mut self) {
        self.split_shr = false;
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    /// Consume the current token if it matches `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of `kind`, or fail with an "expected" error.
    pub fn expect(&mut self, kind: TokenKind) -> Result<Span, ParseError> {
        if self.check(kind) {
            let span = self.current_span();
            self.advance();
            Ok(span)
        } else {
            Err(self.unexpected(kind.display_name()))
        }
    }

    /// Consume a closing `>` of a template list.
    ///
    /// `>>` closes two nested lists: the first call consumes half of it.
    pub fn expect_closing_angle(&mut self) -> Result<Span, ParseError> {
        match self.current().map(|t| t.kind) {
            Some(TokenKind::Shr) if !self.split_shr => {
                self.split_shr = true;
                Ok(self.current_span())
            }
            _ => self.expect(TokenKind::Gt),
        }
    }

    /// Consume an identifier and return its text and span.
    pub fn expect_ident(&mut self) -> Result<(&'src str, Span), ParseError> {
        match self.current() {
            Some(token) if token.kind == TokenKind::Identifier && !self.split_shr => {
                let result = (token.text, token.span);
                self.advance();
                Ok(result)
            }
            _ => Err(ParseError::new(
                ErrorCode::E1002,
                format!("expected identifier, found {}", self.found()),
                self.current_span(),
            )),
        }
    }

    /// Description of the current token for error messages.
    pub fn found(&self) -> String {
        match self.current_kind() {
            Some(TokenKind::Identifier) => match self.current() {
                Some(token) => format!("identifier `{}`", token.text),
                None => "identifier".to_string(),
            },
            Some(kind) => kind.display_name().to_string(),
            None => "end of file".to_string(),
        }
    }

    /// Build an "unexpected token" error at the current position.
    #[cold]
    pub fn unexpected(&self, expected: &str) -> ParseError {
        ParseError::new(
            ErrorCode::E1001,
            format!("expected {expected}, found {}", self.found()),
            self.current_span(),
        )
    }
}
