//! Source locations.
//!
//! Two representations live here:
//!
//! - [`Span`]: a compact byte range, used for slicing source text.
//! - [`SourcePosition`]: the human-facing location (1-based line and column,
//!   byte offset, optional length) carried by tokens, AST nodes and
//!   diagnostics.

use std::fmt;

/// Error when a byte range does not fit in `u32` offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanError {
    /// Range start exceeds `u32::MAX`.
    StartTooLarge(usize),
    /// Range end exceeds `u32::MAX`.
    EndTooLarge(usize),
}

impl fmt::Display for SpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanError::StartTooLarge(v) => write!(f, "span start {v} exceeds u32::MAX"),
            SpanError::EndTooLarge(v) => write!(f, "span end {v} exceeds u32::MAX"),
        }
    }
}

impl std::error::Error for SpanError {}

/// Byte range into a source text, end exclusive.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Fallible conversion from a `usize` range.
    #[inline]
    pub fn try_from_range(range: std::ops::Range<usize>) -> Result<Self, SpanError> {
        let start =
            u32::try_from(range.start).map_err(|_| SpanError::StartTooLarge(range.start))?;
        let end = u32::try_from(range.end).map_err(|_| SpanError::EndTooLarge(range.end))?;
        Ok(Span { start, end })
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    #[inline]
    pub const fn point(offset: u32) -> Span {
        Span {
            start: offset,
            end: offset,
        }
    }

    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A located point (and optional extent) in a source.
///
/// `line` and `column` are 1-based; `column` counts characters, not bytes.
/// `offset` is the byte offset of the first character. A `CRLF` pair counts
/// as a single line break.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct SourcePosition {
    pub line: u32,
    pub column: u32,
    pub offset: u32,
    /// Extent in bytes, when the location covers more than a point.
    pub length: Option<u32>,
}

impl SourcePosition {
    /// Position of the first character of any source.
    pub const START: SourcePosition = SourcePosition {
        line: 1,
        column: 1,
        offset: 0,
        length: None,
    };

    #[inline]
    pub const fn new(line: u32, column: u32, offset: u32) -> Self {
        SourcePosition {
            line,
            column,
            offset,
            length: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_length(self, length: u32) -> Self {
        SourcePosition {
            length: Some(length),
            ..self
        }
    }

    /// Byte span covered by this position. A point yields an empty span.
    #[inline]
    pub fn span(&self) -> Span {
        let len = self.length.unwrap_or(0);
        Span::new(self.offset, self.offset.saturating_add(len))
    }

    /// Byte offset one past the covered extent.
    #[inline]
    pub fn end_offset(&self) -> u32 {
        self.span().end
    }
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Debug for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.length {
            Some(len) => write!(f, "{}:{}+{len}", self.line, self.column),
            None => write!(f, "{}:{}", self.line, self.column),
        }
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{SourcePosition, Span};
    crate::static_assert_size!(Span, 8);
    crate::static_assert_size!(SourcePosition, 20);
}
