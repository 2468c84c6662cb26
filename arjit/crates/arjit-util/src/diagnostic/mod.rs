//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! This module provides types for creating, formatting, and collecting
//! compiler diagnostics (errors, warnings, notes, and help messages).
//!
//! # Examples
//!
//! ```
//! use arjit_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use arjit_util::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::warning("skipped character '#'")
//!     .code(DiagnosticCode::W_LEXER_DROPPED_INPUT)
//!     .span(Span::new(8, 9, 1, 9))
//!     .emit(&handler);
//!
//! assert!(!handler.has_errors());
//! assert_eq!(handler.warning_count(), 1);
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use std::cell::RefCell;
use std::fmt;

use crate::span::Span;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use arjit_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that stops the current phase
    Error,
    /// A warning that doesn't stop the current phase
    Warning,
    /// Additional information about a diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a note to the diagnostic
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Render the diagnostic against the source it was reported on.
    ///
    /// # Examples
    ///
    /// ```
    /// use arjit_util::diagnostic::{Diagnostic, DiagnosticCode};
    /// use arjit_util::Span;
    ///
    /// let source = "let x = #;";
    /// let diag = Diagnostic::error("unexpected character '#'", Span::new(8, 9, 1, 9))
    ///     .with_code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR);
    ///
    /// let report = diag.render(source);
    /// assert!(report.starts_with("error[E1002]: unexpected character '#'\n --> 1:9\n"));
    /// assert!(report.contains("  1 | let x = #;"));
    /// ```
    pub fn render(&self, source: &str) -> String {
        let mut out = match self.code {
            Some(code) => format!("{}[{}]: {}\n", self.level, code, self.message),
            None => format!("{}: {}\n", self.level, self.message),
        };

        if self.span != Span::DUMMY {
            out.push_str(&format!(" --> {}\n", self.span));
            if let Ok(snippet) = SourceSnippet::from_source(source, self.span) {
                out.push_str(&snippet.format());
                out.push('\n');
            }
        }

        for note in &self.notes {
            out.push_str(&format!("  = note: {}\n", note));
        }
        for help in &self.helps {
            out.push_str(&format!("  = help: {}\n", help));
        }

        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {} at {}", self.level, code, self.message, self.span),
            None => write!(f, "{}: {} at {}", self.level, self.message, self.span),
        }
    }
}

/// Handler for collecting diagnostics
///
/// # Examples
///
/// ```
/// use arjit_util::diagnostic::{Diagnostic, Handler};
/// use arjit_util::Span;
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::error("unexpected token", Span::DUMMY));
///
/// assert!(handler.has_errors());
/// assert_eq!(handler.error_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Create a diagnostic builder for a warning at `span`
    pub fn build_warning(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::warning(message).span(span)
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.count(Level::Error)
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.count(Level::Warning)
    }

    fn count(&self, level: Level) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == level)
            .count()
    }

    /// Get a copy of all diagnostics, in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Move all diagnostics out, leaving the handler empty
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }
}
