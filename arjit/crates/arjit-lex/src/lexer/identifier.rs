//! Identifier and keyword lexing.

use crate::token::{is_keyword, keyword_to_token, Token};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Consumes a run of ASCII letters and returns it.
    ///
    /// Digits and underscores end the identifier: `foo2` scans as `foo`,
    /// leaving `2` for the next token.
    ///
    /// The current character must be an ASCII letter.
    pub fn scan_identifier(&mut self) -> &'a str {
        debug_assert!(
            self.cursor.current_char().is_ascii_alphabetic(),
            "scan_identifier called on {:?}",
            self.cursor.current_char()
        );

        let start = self.cursor.position();
        self.cursor.eat_while(|c| c.is_ascii_alphabetic());
        self.cursor.slice_from(start)
    }

    /// Lexes an identifier, resolving reserved words to keyword tokens.
    pub(super) fn lex_word(&mut self) -> Token<'a> {
        let text = self.scan_identifier();
        if is_keyword(text) {
            keyword_to_token(text)
        } else {
            Token::ident(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenType;

    fn lex_ident(source: &str) -> Token<'_> {
        let mut lexer = Lexer::new(source).unwrap();
        lexer.lex_word()
    }

    #[test]
    fn test_simple_identifier() {
        assert_eq!(lex_ident("foo"), Token::ident("foo"));
    }

    #[test]
    fn test_identifier_stops_at_digit() {
        let mut lexer = Lexer::new("foo2").unwrap();
        assert_eq!(lexer.scan_identifier(), "foo");
        assert_eq!(lexer.current_char(), '2');
    }

    #[test]
    fn test_identifier_stops_at_underscore() {
        let mut lexer = Lexer::new("foo_bar").unwrap();
        assert_eq!(lexer.scan_identifier(), "foo");
        assert_eq!(lexer.current_char(), '_');
    }

    #[test]
    fn test_keyword_let() {
        assert_eq!(lex_ident("let").token_type(), TokenType::Let);
    }

    #[test]
    fn test_keyword_function() {
        assert_eq!(lex_ident("function").token_type(), TokenType::Function);
    }

    #[test]
    fn test_keyword_return() {
        let token = lex_ident("return");
        assert_eq!(token.token_type(), TokenType::Return);
        assert_eq!(token.text(), Some("return"));
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        assert_eq!(lex_ident("letter"), Token::ident("letter"));
        assert_eq!(lex_ident("functions"), Token::ident("functions"));
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert_eq!(lex_ident("Let"), Token::ident("Let"));
        assert_eq!(lex_ident("RETURN"), Token::ident("RETURN"));
    }
}
