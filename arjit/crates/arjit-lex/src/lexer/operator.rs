//! Operator and punctuation lexing.

use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenType};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Consumes one character and returns the fixed token `token_type`.
    pub(super) fn single(&mut self, token_type: TokenType) -> Token<'a> {
        self.cursor.advance();
        Token::fixed(token_type)
    }

    /// Lexes `=`.
    ///
    /// There is no two-character `==` operator. Strict mode yields `EQUAL`
    /// for the first `=` of a doubled pair and rejects every `=` directly
    /// after another; lenient mode yields one `EQUAL` per character.
    pub(super) fn lex_equal(&mut self) -> LexResult<Token<'a>> {
        if self.is_strict() && self.cursor.consumed().ends_with('=') {
            let span = self.cursor.current_span();
            self.cursor.advance();
            return Err(LexError::UnexpectedCharacter { ch: '=', span });
        }

        Ok(self.single(TokenType::Equal))
    }
}
