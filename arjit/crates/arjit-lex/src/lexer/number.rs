//! Integer literal lexing.
//!
//! Only unsigned decimal integers exist. A literal past `u64::MAX` is an
//! error in strict mode and wraps in lenient mode.

use arjit_util::DiagnosticCode;

use crate::error::{LexError, LexResult};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Consumes a run of ASCII digits and returns its value.
    ///
    /// The current character must be an ASCII digit.
    pub fn scan_number(&mut self) -> LexResult<u64> {
        debug_assert!(
            self.cursor.current_char().is_ascii_digit(),
            "scan_number called on {:?}",
            self.cursor.current_char()
        );

        let mark = self.cursor.mark();
        let mut value: u64 = 0;
        let mut overflowed = false;

        while self.cursor.current_char().is_ascii_digit() {
            let digit = u64::from(self.cursor.current_char() as u8 - b'0');
            match value.checked_mul(10).and_then(|v| v.checked_add(digit)) {
                Some(next) => value = next,
                None => {
                    overflowed = true;
                    value = value.wrapping_mul(10).wrapping_add(digit);
                },
            }
            self.cursor.advance();
        }

        if overflowed {
            let span = self.cursor.span_from(mark);
            let text = self.cursor.slice_from(mark.position);
            if self.is_strict() {
                return Err(LexError::IntegerOverflow {
                    text: text.to_string(),
                    span,
                });
            }
            self.warn(
                span,
                format!("integer literal `{}` wrapped to {}", text, value),
                DiagnosticCode::W_LEXER_INTEGER_WRAPPED,
            );
        }

        Ok(value)
    }
}
