//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, and [`SourceSnippet`] for showing the
//! offending source line under a report.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::error::{UtilError, UtilResult};
use crate::span::Span;

/// A source code snippet for display in diagnostics
///
/// # Examples
///
/// ```
/// use arjit_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("let x = #;", 1, 9, 10);
/// assert_eq!(snippet.format(), "  1 | let x = #;\n    |         ^");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: usize,
}

impl SourceSnippet {
    /// Create a new source snippet
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
        }
    }

    /// Cut the line containing `span` out of `source`.
    ///
    /// The highlight covers the span's characters, clamped to the end of
    /// the line (an unterminated string spans several lines).
    pub fn from_source(source: &str, span: Span) -> UtilResult<Self> {
        let max_lines = source.lines().count().max(1);
        let line_number = span.line as usize;
        let line = source
            .lines()
            .nth(line_number.saturating_sub(1))
            .or(if source.is_empty() { Some("") } else { None })
            .ok_or(UtilError::InvalidLineNumber {
                line: line_number,
                max_lines,
            })?;

        let width = span.slice(source).map_or(1, |text| {
            text.lines().next().map_or(1, |first| first.chars().count().max(1))
        });
        let start_column = span.column.max(1) as usize;
        let line_len = line.chars().count();
        let end_column = (start_column + width).min(line_len + 2).max(start_column + 1);

        Ok(Self::new(line, line_number, start_column, end_column))
    }

    /// Format the snippet for display
    ///
    /// Returns the source line followed by a caret (^) line pointing at the
    /// highlighted range.
    pub fn format(&self) -> String {
        let line_num_width = self.line_number.to_string().len().max(3);
        let mut result = format!(
            "{:>width$} | {}\n",
            self.line_number,
            self.line,
            width = line_num_width
        );
        result.push_str(&format!("{:>width$} | ", "", width = line_num_width));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);
        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));
        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use arjit_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
/// use arjit_util::Span;
///
/// let diag = DiagnosticBuilder::error("unterminated string literal")
///     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
///     .span(Span::new(10, 16, 1, 11))
///     .help("add a closing `\"`")
///     .build();
///
/// assert_eq!(diag.level, Level::Error);
/// assert_eq!(diag.helps.len(), 1);
/// ```
#[derive(Debug)]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    /// Start a diagnostic of the given level
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Start an error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Start a warning diagnostic
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the source location
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a note
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Finish building
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
        }
    }

    /// Finish building and hand the diagnostic to `handler`
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
