//! Diagnostic codes for categorizing compiler errors and warnings.
//!
//! # Examples
//!
//! ```
//! use arjit_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_UNTERMINATED_STRING;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1003);
//! assert_eq!(code.as_str(), "E1003");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where:
/// - `prefix` is "E" for errors or "W" for warnings
/// - `number` is a 4-digit number (padded with zeros)
///
/// The thousands digit names the phase; `1xxx` belongs to the lexer.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix (e.g., "E" for error, "W" for warning)
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1001", "W1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    /// E1001: Lexer - Empty source text
    pub const E_LEXER_EMPTY_INPUT: Self = Self::new("E", 1001);
    /// E1002: Lexer - Unexpected character
    pub const E_LEXER_UNEXPECTED_CHAR: Self = Self::new("E", 1002);
    /// E1003: Lexer - Unterminated string literal
    pub const E_LEXER_UNTERMINATED_STRING: Self = Self::new("E", 1003);
    /// E1004: Lexer - Integer literal does not fit in 64 bits
    pub const E_LEXER_INTEGER_OVERFLOW: Self = Self::new("E", 1004);

    /// W1001: Lexer - Input skipped without producing a token
    pub const W_LEXER_DROPPED_INPUT: Self = Self::new("W", 1001);
    /// W1002: Lexer - Integer literal wrapped around `u64::MAX`
    pub const W_LEXER_INTEGER_WRAPPED: Self = Self::new("W", 1002);
    /// W1003: Lexer - String literal closed by end of input
    pub const W_LEXER_UNTERMINATED_STRING: Self = Self::new("W", 1003);
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_padding() {
        assert_eq!(DiagnosticCode::new("E", 7).as_str(), "E0007");
        assert_eq!(DiagnosticCode::W_LEXER_DROPPED_INPUT.as_str(), "W1001");
    }

    #[test]
    fn test_lexer_codes_are_distinct() {
        let codes = [
            DiagnosticCode::E_LEXER_EMPTY_INPUT,
            DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            DiagnosticCode::E_LEXER_INTEGER_OVERFLOW,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_code_debug_and_display() {
        let code = DiagnosticCode::E_LEXER_UNEXPECTED_CHAR;
        assert_eq!(format!("{}", code), "E1002");
        assert_eq!(format!("{:?}", code), "DiagnosticCode(E1002)");
    }
}
