//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source code characters. It steps over UTF-8
//! sequences as whole characters and tracks line/column information for
//! error reporting.

use arjit_util::Span;

/// The character reported once the cursor has run off the end of the source.
pub const EOF_CHAR: char = '\0';

/// A cursor for traversing source code character by character.
///
/// The character under the cursor is cached in `ch` and refreshed on every
/// [`advance`](Cursor::advance): it is `source[position..]`'s first
/// character while `position < source.len()`, and [`EOF_CHAR`] after that.
///
/// # Example
///
/// ```
/// use arjit_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("let x = 42;");
///
/// assert_eq!(cursor.current_char(), 'l');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'e');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Character at `position`, or `EOF_CHAR`.
    ch: char,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned on the first character of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            ch: Self::char_at(source, 0),
            line: 1,
            column: 1,
        }
    }

    #[inline]
    fn char_at(source: &str, position: usize) -> char {
        match source.as_bytes().get(position) {
            None => EOF_CHAR,
            // Fast path for ASCII (most common case)
            Some(&b) if b < 128 => b as char,
            Some(_) => source[position..].chars().next().unwrap_or(EOF_CHAR),
        }
    }

    /// Returns the character under the cursor, or [`EOF_CHAR`] at the end.
    #[inline]
    pub fn current_char(&self) -> char {
        self.ch
    }

    /// Advances the cursor to the next character.
    ///
    /// Updates line and column tracking. Does nothing if already at end.
    #[inline]
    pub fn advance(&mut self) {
        if self.is_at_end() {
            return;
        }

        self.position += self.ch.len_utf8();
        if self.ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.ch = Self::char_at(self.source, self.position);
    }

    /// Advances while `predicate` holds for the current character.
    ///
    /// Never consumes past the end of the source.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_at_end() && predicate(self.ch) {
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source text between `start` and the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text before the current position.
    pub fn consumed(&self) -> &'a str {
        &self.source[..self.position]
    }

    /// Captures the current location so a span can be closed later.
    pub fn mark(&self) -> Mark {
        Mark {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// Span from `mark` up to the current position.
    pub fn span_from(&self, mark: Mark) -> Span {
        Span::new(mark.position, self.position, mark.line, mark.column)
    }

    /// Span covering just the current character.
    pub fn current_span(&self) -> Span {
        let end = self.position + if self.is_at_end() { 0 } else { self.ch.len_utf8() };
        Span::new(self.position, end, self.line, self.column)
    }
}

/// A saved cursor location.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mark {
    /// Byte position in source.
    pub position: usize,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based).
    pub column: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("let x = 42;");
        assert_eq!(cursor.current_char(), 'l');
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_advance_reaches_sentinel() {
        let mut cursor = Cursor::new("abc");
        assert_eq!(cursor.current_char(), 'a');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'b');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'c');
        cursor.advance();
        assert_eq!(cursor.current_char(), EOF_CHAR);
        assert!(cursor.is_at_end());

        cursor.advance();
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.current_char(), EOF_CHAR);
    }

    #[test]
    fn test_advance_utf8() {
        let mut cursor = Cursor::new("αβ");
        assert_eq!(cursor.current_char(), 'α');
        cursor.advance();
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.current_char(), 'β');
        cursor.advance();
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_empty_source() {
        let mut cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current_char(), EOF_CHAR);
        cursor.advance();
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_eat_while() {
        let mut cursor = Cursor::new("  \t\n  let");
        cursor.eat_while(|c| c.is_ascii_whitespace());
        assert_eq!(cursor.current_char(), 'l');

        cursor.eat_while(|c| c.is_ascii_alphabetic());
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_embedded_nul_is_not_end() {
        let mut cursor = Cursor::new("a\0b");
        cursor.advance();
        assert_eq!(cursor.current_char(), '\0');
        assert!(!cursor.is_at_end());
        cursor.advance();
        assert_eq!(cursor.current_char(), 'b');
    }

    #[test]
    fn test_line_column_tracking() {
        let mut cursor = Cursor::new("ab\ncd");
        cursor.advance();
        cursor.advance();
        assert_eq!((cursor.line(), cursor.column()), (1, 3));
        cursor.advance();
        assert_eq!((cursor.line(), cursor.column()), (2, 1));
        cursor.advance();
        assert_eq!((cursor.line(), cursor.column()), (2, 2));
    }

    #[test]
    fn test_mark_and_span() {
        let mut cursor = Cursor::new("let add");
        cursor.eat_while(|c| c != ' ');
        cursor.advance();
        let mark = cursor.mark();
        cursor.eat_while(|c| c.is_ascii_alphabetic());
        let span = cursor.span_from(mark);
        assert_eq!(span, Span::new(4, 7, 1, 5));
        assert_eq!(cursor.slice_from(mark.position), "add");
    }

    #[test]
    fn test_current_span() {
        let cursor = Cursor::new("é!");
        assert_eq!(cursor.current_span(), Span::new(0, 2, 1, 1));
        let end = Cursor::new("");
        assert_eq!(end.current_span(), Span::new(0, 0, 1, 1));
    }

    #[test]
    fn test_consumed() {
        let mut cursor = Cursor::new("==x");
        assert_eq!(cursor.consumed(), "");
        cursor.advance();
        assert_eq!(cursor.consumed(), "=");
        assert!(cursor.consumed().ends_with('='));
    }
}
