//! Lexer configuration.

use std::fmt;
use std::str::FromStr;

/// How the lexer treats input it cannot turn into a token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LexMode {
    /// Fail with a [`LexError`](crate::LexError) at the first problem.
    #[default]
    Strict,
    /// Reproduce the legacy drop-and-continue token output, recording a
    /// warning diagnostic for everything dropped.
    Lenient,
}

impl fmt::Display for LexMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexMode::Strict => f.write_str("strict"),
            LexMode::Lenient => f.write_str("lenient"),
        }
    }
}

impl FromStr for LexMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(LexMode::Strict),
            "lenient" => Ok(LexMode::Lenient),
            other => Err(format!("unknown lex mode `{}` (expected strict or lenient)", other)),
        }
    }
}

/// Options for a lexing pass.
///
/// ```
/// use arjit_lex::{LexMode, LexOptions};
///
/// let options = LexOptions::default();
/// assert_eq!(options.mode, LexMode::Strict);
/// assert!(!options.emit_eof);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    /// Error stance.
    pub mode: LexMode,
    /// Append a trailing `EOF` token to the driver's output.
    pub emit_eof: bool,
}

impl LexOptions {
    /// Strict mode, no trailing `EOF`.
    pub const fn strict() -> Self {
        Self {
            mode: LexMode::Strict,
            emit_eof: false,
        }
    }

    /// Lenient mode, no trailing `EOF`.
    pub const fn lenient() -> Self {
        Self {
            mode: LexMode::Lenient,
            emit_eof: false,
        }
    }

    /// Same options with the trailing `EOF` switched on or off.
    pub fn with_eof(mut self, emit_eof: bool) -> Self {
        self.emit_eof = emit_eof;
        self
    }

    /// True in strict mode.
    pub const fn is_strict(&self) -> bool {
        matches!(self.mode, LexMode::Strict)
    }
}
