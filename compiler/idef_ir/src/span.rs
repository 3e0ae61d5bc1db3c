//! Source location spans.
//!
//! A [`Span`] names the file it came from and carries both endpoints as
//! full [`Location`]s (line, column and byte offset), so diagnostics can be
//! rendered without re-scanning the source.

use std::fmt;

/// Identifier of a definition file within one generation run.
///
/// The driver assigns ids and keeps the id → path mapping; the compiler
/// core only ever carries the id.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileId(u32);

impl FileId {
    /// Id used by tests and by synthesized values with no backing file.
    pub const DUMMY: FileId = FileId(0);

    #[inline]
    pub const fn new(raw: u32) -> Self {
        FileId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file#{}", self.0)
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file#{}", self.0)
    }
}

/// A position in a source file.
///
/// `line` and `column` are 1-based; `offset` is the 0-based byte offset.
/// Columns count bytes, not characters.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub line: u32,
    pub column: u32,
    pub offset: u32,
}

impl Location {
    /// The first byte of a file.
    pub const START: Location = Location {
        line: 1,
        column: 1,
        offset: 0,
    };

    #[inline]
    pub const fn new(line: u32, column: u32, offset: u32) -> Self {
        Location {
            line,
            column,
            offset,
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Location::START
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}@{}", self.line, self.column, self.offset)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Source location span.
///
/// `end` is exclusive: the span of `match` at the start of a file runs from
/// column 1 to column 6.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub file: FileId,
    pub begin: Location,
    pub end: Location,
}

impl Span {
    /// Dummy span for synthesized values.
    pub const DUMMY: Span = Span {
        file: FileId::DUMMY,
        begin: Location::START,
        end: Location::START,
    };

    #[inline]
    pub const fn new(file: FileId, begin: Location, end: Location) -> Self {
        Span { file, begin, end }
    }

    /// Create a point span (zero-length).
    #[inline]
    pub const fn point(file: FileId, at: Location) -> Self {
        Span {
            file,
            begin: at,
            end: at,
        }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.offset - self.begin.offset
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.begin.offset == self.end.offset
    }

    /// Merge two spans of the same file into one covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        debug_assert_eq!(self.file, other.file, "merging spans of different files");
        Span {
            file: self.file,
            begin: self.begin.min(other.begin),
            end: self.end.max(other.end),
        }
    }

    /// Convert to a byte range into the file's text.
    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.begin.offset as usize..self.end.offset as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:?}..{:?}", self.file, self.begin, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.begin)
    }
}

// Size assertions to prevent accidental regressions
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Location, Span};
    crate::static_assert_size!(Location, 12);
    crate::static_assert_size!(Span, 28);
}

#[cfg(test)]
mod tests;
