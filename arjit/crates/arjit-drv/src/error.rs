//! Error handling module for the arjit driver.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the driver.

use arjit_lex::LexError;
use thiserror::Error;

/// Main error type for the arjit driver.
#[derive(Error, Debug)]
pub enum DrvError {
    /// Error when the configuration cannot be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when reading an input file fails.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Lexing failed. `report` is the diagnostic rendered against the
    /// source text.
    #[error("{report}")]
    Lex {
        /// The underlying lexer error
        #[source]
        error: LexError,
        /// Rendered diagnostic, ready for stderr
        report: String,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DrvError {
    /// Wrap a lexer error, rendering it against `source`.
    pub fn lex(error: LexError, source: &str) -> Self {
        let report = error.to_diagnostic().render(source);
        DrvError::Lex { error, report }
    }
}

/// Result type alias using DrvError.
pub type Result<T> = std::result::Result<T, DrvError>;

#[cfg(test)]
mod tests {
    use super::*;
    use arjit_util::Span;

    #[test]
    fn test_config_error_display() {
        let err = DrvError::Config("unknown lex mode".to_string());
        assert_eq!(err.to_string(), "Configuration error: unknown lex mode");
    }

    #[test]
    fn test_validation_error_display() {
        let err = DrvError::Validation("no input".to_string());
        assert_eq!(err.to_string(), "Validation error: no input");
    }

    #[test]
    fn test_lex_error_renders_report() {
        let source = "let x = #;";
        let err = DrvError::lex(
            LexError::UnexpectedCharacter {
                ch: '#',
                span: Span::new(8, 9, 1, 9),
            },
            source,
        );
        let text = err.to_string();
        assert!(text.starts_with("error[E1002]: unexpected character '#'"));
        assert!(text.contains("let x = #;"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DrvError = io_err.into();
        assert!(matches!(err, DrvError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: DrvError = json_err.into();
        assert!(matches!(err, DrvError::Json(_)));
    }
}
