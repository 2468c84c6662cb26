//! Lexical error types.

use arjit_util::{Diagnostic, DiagnosticCode, Span};
use thiserror::Error;

/// A classified lexing failure.
///
/// Strict mode stops at the first of these. Lenient mode never returns
/// them and records a warning diagnostic instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LexError {
    /// The source text has no characters at all.
    #[error("source text is empty")]
    EmptyInput,

    /// A character outside the language's alphabet.
    #[error("unexpected character {ch:?} at {span}")]
    UnexpectedCharacter {
        /// The offending character
        ch: char,
        /// Where it sits
        span: Span,
    },

    /// End of input reached inside a string literal.
    #[error("unterminated string literal starting at {span}")]
    UnterminatedString {
        /// From the opening quote to end of input
        span: Span,
    },

    /// A decimal literal larger than `u64::MAX`.
    #[error("integer literal `{text}` does not fit in 64 bits at {span}")]
    IntegerOverflow {
        /// The digits as written
        text: String,
        /// Where the literal sits
        span: Span,
    },
}

impl LexError {
    /// The diagnostic code for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::EmptyInput => DiagnosticCode::E_LEXER_EMPTY_INPUT,
            LexError::UnexpectedCharacter { .. } => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            LexError::UnterminatedString { .. } => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            LexError::IntegerOverflow { .. } => DiagnosticCode::E_LEXER_INTEGER_OVERFLOW,
        }
    }

    /// Where the error was found, if it has a location.
    pub fn span(&self) -> Option<Span> {
        match self {
            LexError::EmptyInput => None,
            LexError::UnexpectedCharacter { span, .. }
            | LexError::UnterminatedString { span }
            | LexError::IntegerOverflow { span, .. } => Some(*span),
        }
    }

    /// Convert into a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let span = self.span().unwrap_or(Span::DUMMY);
        let diag = match self {
            LexError::EmptyInput => Diagnostic::error("source text is empty", span),
            LexError::UnexpectedCharacter { ch, .. } => {
                let diag = Diagnostic::error(format!("unexpected character {:?}", ch), span);
                if *ch == '=' {
                    diag.with_note("`==` is not an operator of this language")
                } else {
                    diag
                }
            },
            LexError::UnterminatedString { .. } => {
                Diagnostic::error("unterminated string literal", span)
                    .with_help("add a closing `\"`")
            },
            LexError::IntegerOverflow { text, .. } => Diagnostic::error(
                format!("integer literal `{}` does not fit in 64 bits", text),
                span,
            )
            .with_note(format!("the largest literal is {}", u64::MAX)),
        };
        diag.with_code(self.code())
    }
}

/// Result type alias for lexing operations
pub type LexResult<T> = std::result::Result<T, LexError>;
