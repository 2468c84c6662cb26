//! Span module - Source location tracking.
//!
//! A [`Span`] pairs a byte range with the 1-based line and column of its
//! first character, which is all the lexer needs to point at a problem.
//!
//! # Examples
//!
//! ```
//! use arjit_util::span::Span;
//!
//! let span = Span::new(10, 20, 1, 11);
//! assert_eq!(span.len(), 10);
//! assert_eq!(span.to_string(), "1:11");
//! ```

use std::fmt;

use crate::error::{UtilError, UtilResult};

/// Source location span
///
/// A `Span` represents a range in source code, identified by:
/// - Byte offsets (start, end)
/// - Line and column numbers of `start` (for human-readable output)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use arjit_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert!(Span::DUMMY.is_empty());
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create a span, rejecting ranges where `start > end`.
    ///
    /// # Examples
    ///
    /// ```
    /// use arjit_util::span::Span;
    ///
    /// assert!(Span::checked(3, 5, 1, 4).is_ok());
    /// assert!(Span::checked(5, 3, 1, 6).is_err());
    /// ```
    pub fn checked(start: usize, end: usize, line: u32, column: u32) -> UtilResult<Self> {
        if start > end {
            return Err(UtilError::InvalidSpan { start, end });
        }
        Ok(Self::new(start, end, line, column))
    }

    /// Create an empty span at a single point
    #[inline]
    pub const fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if this span contains a byte offset
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Extend this span up to the end of `other`.
    ///
    /// Line and column stay those of `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use arjit_util::span::Span;
    ///
    /// let open = Span::new(8, 9, 1, 9);
    /// let close = Span::new(14, 15, 1, 15);
    /// assert_eq!(open.to(close), Span::new(8, 15, 1, 9));
    /// ```
    #[inline]
    pub fn to(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            line: self.line,
            column: self.column,
        }
    }

    /// Slice the text this span covers out of `source`.
    ///
    /// Returns `None` when the span does not fall on character boundaries
    /// of `source`.
    pub fn slice<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.start..self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
