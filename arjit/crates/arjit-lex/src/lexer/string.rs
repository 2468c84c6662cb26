//! String literal lexing.
//!
//! Strings are delimited by `"` and have no escape sequences.

use arjit_util::DiagnosticCode;

use crate::cursor::Mark;
use crate::error::{LexError, LexResult};
use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Consumes characters up to, but not including, the closing `"`.
    ///
    /// Must be called just after the opening quote. The closing quote is
    /// left for the caller. Reaching the end of input first is
    /// [`LexError::UnterminatedString`] in strict mode; lenient mode
    /// returns the text up to the end of input.
    pub fn scan_string(&mut self) -> LexResult<&'a str> {
        let start = self.cursor.mark();
        self.cursor.eat_while(|c| c != '"');
        let text = self.cursor.slice_from(start.position);

        if self.cursor.is_at_end() {
            let opening_quote = Mark {
                position: start.position.saturating_sub(1),
                line: start.line,
                column: start.column.saturating_sub(1).max(1),
            };
            let span = self.cursor.span_from(opening_quote);
            if self.is_strict() {
                return Err(LexError::UnterminatedString { span });
            }
            self.warn(
                span,
                "string literal closed by end of input".to_string(),
                DiagnosticCode::W_LEXER_UNTERMINATED_STRING,
            );
        }

        Ok(text)
    }

    /// Lexes a string literal starting at the opening quote.
    ///
    /// Strict mode accepts any content, including `""`. Lenient mode keeps
    /// the legacy rule that the first character after the quote must be a
    /// letter; otherwise only the quote is consumed and no token results.
    pub(super) fn lex_string(&mut self) -> LexResult<Option<Token<'a>>> {
        let quote = self.cursor.current_span();
        self.cursor.advance();

        if !self.is_strict() && !self.cursor.current_char().is_ascii_alphabetic() {
            self.dropped(quote, "skipped quote not followed by a letter".to_string());
            return Ok(None);
        }

        let text = self.scan_string()?;
        self.cursor.advance();
        Ok(Some(Token::string(text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::LexOptions;
    use crate::token::TokenType;
    use arjit_util::Span;

    fn strict(source: &str) -> LexResult<Vec<Token<'_>>> {
        Lexer::new(source)?.collect()
    }

    fn lenient(source: &str) -> Vec<Token<'_>> {
        Lexer::with_options(source, LexOptions::lenient())
            .and_then(|lexer| lexer.collect())
            .unwrap()
    }

    #[test]
    fn test_simple_string() {
        assert_eq!(strict("\"Hello\"").unwrap(), vec![Token::string("Hello")]);
    }

    #[test]
    fn test_string_keeps_spaces_and_punctuation() {
        assert_eq!(
            strict("\"Hello World !\"").unwrap(),
            vec![Token::string("Hello World !")]
        );
    }

    #[test]
    fn test_no_escape_processing() {
        assert_eq!(strict(r#""a\n""#).unwrap(), vec![Token::string(r"a\n")]);
    }

    #[test]
    fn test_closing_quote_is_consumed() {
        let tokens = strict("\"a\" b").unwrap();
        assert_eq!(tokens, vec![Token::string("a"), Token::ident("b")]);
    }

    #[test]
    fn test_scan_string_leaves_closing_quote() {
        let mut lexer = Lexer::new("\"abc\"").unwrap();
        lexer.advance();
        assert_eq!(lexer.scan_string(), Ok("abc"));
        assert_eq!(lexer.current_char(), '"');
    }

    #[test]
    fn test_strict_empty_string() {
        assert_eq!(strict("\"\"").unwrap(), vec![Token::string("")]);
    }

    #[test]
    fn test_strict_string_starting_with_non_letter() {
        assert_eq!(strict("\" 1+\"").unwrap(), vec![Token::string(" 1+")]);
    }

    #[test]
    fn test_strict_unterminated_string() {
        let err = strict("let s = \"abc").unwrap_err();
        assert_eq!(
            err,
            LexError::UnterminatedString {
                span: Span::new(8, 12, 1, 9),
            }
        );
    }

    #[test]
    fn test_strict_lone_quote_is_unterminated() {
        let err = strict("\"").unwrap_err();
        assert!(matches!(err, LexError::UnterminatedString { .. }));
    }

    #[test]
    fn test_string_spans_lines() {
        assert_eq!(strict("\"a\nb\"").unwrap(), vec![Token::string("a\nb")]);
    }

    #[test]
    fn test_lenient_string_starting_with_letter() {
        assert_eq!(lenient("\"Hello\""), vec![Token::string("Hello")]);
    }

    #[test]
    fn test_lenient_closing_quote_is_consumed() {
        // The closing quote does not reopen a string, so `b` is an identifier
        // and only the trailing lone quote is skipped.
        let output = crate::lex_with("\"a\"b\"", LexOptions::lenient()).unwrap();
        assert_eq!(output.tokens, vec![Token::string("a"), Token::ident("b")]);
        assert_eq!(output.diagnostics.len(), 1);
        assert_eq!(
            output.diagnostics[0].code,
            Some(DiagnosticCode::W_LEXER_DROPPED_INPUT)
        );
        assert_eq!(output.diagnostics[0].span, Span::new(4, 5, 1, 5));
    }

    #[test]
    fn test_lenient_empty_string_emits_nothing() {
        let mut lexer = Lexer::with_options("\"\"", LexOptions::lenient()).unwrap();
        assert_eq!(lexer.scan_token().unwrap(), None);
        assert_eq!(lexer.scan_token().unwrap(), None);
        assert!(lexer.is_at_end());
        assert_eq!(lexer.handler().warning_count(), 2);
    }

    #[test]
    fn test_lenient_non_letter_start_lexes_content() {
        let types: Vec<_> = lenient("\"1\"").iter().map(Token::token_type).collect();
        assert_eq!(types, vec![TokenType::Number]);
    }

    #[test]
    fn test_lenient_unterminated_string_runs_to_end() {
        let mut lexer = Lexer::with_options("\"abc", LexOptions::lenient()).unwrap();
        assert_eq!(lexer.scan_token().unwrap(), Some(Token::string("abc")));
        assert!(lexer.is_at_end());

        let diags = lexer.into_diagnostics();
        assert_eq!(diags[0].code, Some(DiagnosticCode::W_LEXER_UNTERMINATED_STRING));
        assert_eq!(diags[0].span, Span::new(0, 4, 1, 1));
    }
}
