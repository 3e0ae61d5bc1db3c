//! Byte cursor with line/column bookkeeping.
//!
//! The cursor never looks backwards. Every advance updates the current
//! [`Location`], so a token's span is just the location before and after
//! scanning it. Offsets count bytes; columns count characters.

use idef_ir::Location;

/// Forward-only cursor over the bytes of one source file.
///
/// Reads past the end return `0`, which no token starts with, so callers
/// test [`is_eof`](Self::is_eof) only where it matters.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    bytes: &'a [u8],
    loc: Location,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Cursor {
            bytes: source.as_bytes(),
            loc: Location::START,
        }
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.loc.offset as usize
    }

    #[inline]
    pub(crate) fn location(&self) -> Location {
        self.loc
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos() >= self.bytes.len()
    }

    /// Byte at the current position, `0` at EOF.
    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.byte_at(self.pos())
    }

    /// Byte one position ahead of current, `0` past EOF.
    #[inline]
    pub(crate) fn peek(&self) -> u8 {
        self.byte_at(self.pos() + 1)
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.bytes.get(index).copied().unwrap_or(0)
    }

    /// Advance one byte, moving to the next line after `\n`.
    #[inline]
    pub(crate) fn advance(&mut self) {
        if self.is_eof() {
            return;
        }
        match self.current() {
            b'\n' => {
                self.loc.line += 1;
                self.loc.column = 1;
            }
            byte if is_continuation(byte) => {}
            _ => self.loc.column += 1,
        }
        self.loc.offset += 1;
    }

    #[inline]
    pub(crate) fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Advance while `pred` holds for the current byte.
    #[inline]
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.advance();
        }
    }

    /// Advance to the next `\n` (not consumed) or EOF.
    ///
    /// Used to skip comment bodies.
    pub(crate) fn eat_until_newline_or_eof(&mut self) {
        let remaining = &self.bytes[self.pos().min(self.bytes.len())..];
        let skip = memchr::memchr(b'\n', remaining).unwrap_or(remaining.len());
        self.skip_same_line(skip);
    }

    /// Advance to the next `"` or `\n` inside a string literal.
    ///
    /// Returns the byte found, or `0` at EOF.
    pub(crate) fn skip_to_string_delim(&mut self) -> u8 {
        let remaining = &self.bytes[self.pos().min(self.bytes.len())..];
        match memchr::memchr2(b'"', b'\n', remaining) {
            Some(off) => {
                self.skip_same_line(off);
                self.current()
            }
            None => {
                self.skip_same_line(remaining.len());
                0
            }
        }
    }

    /// Jump `n` bytes known to contain no newline.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "definition files are far smaller than 4 GiB"
    )]
    fn skip_same_line(&mut self, n: usize) {
        let start = self.pos().min(self.bytes.len());
        let end = (start + n).min(self.bytes.len());
        let chars = self.bytes[start..end]
            .iter()
            .filter(|&&b| !is_continuation(b))
            .count();
        self.loc.column += chars as u32;
        self.loc.offset += n as u32;
    }

    /// The full character at the current position.
    ///
    /// Only called at a char boundary, which holds because the cursor only
    /// ever stops after ASCII bytes or at the start of the file.
    pub(crate) fn current_char(&self, source: &str) -> Option<char> {
        source.get(self.pos()..)?.chars().next()
    }
}

/// A non-leading byte of a multi-byte UTF-8 sequence.
#[inline]
fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}
