//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the character dispatch and
//! the cursor-level operations the scanning routines share.

use arjit_util::{Diagnostic, DiagnosticCode, Handler, Span};

use crate::cursor::Cursor;
use crate::error::{LexError, LexResult};
use crate::options::{LexMode, LexOptions};
use crate::token::{Token, TokenType};

/// Lexer for arjit source text.
///
/// The lexer owns a cursor over borrowed source, the options of this pass
/// and a [`Handler`] collecting the warnings lenient mode records.
///
/// # Example
///
/// ```
/// use arjit_lex::{Lexer, Token, TokenType};
///
/// let mut lexer = Lexer::new("let x").unwrap();
/// assert_eq!(lexer.scan_token().unwrap(), Some(Token::fixed(TokenType::Let)));
/// assert_eq!(lexer.scan_token().unwrap(), None); // whitespace
/// assert_eq!(lexer.scan_token().unwrap(), Some(Token::ident("x")));
/// assert!(lexer.is_at_end());
/// ```
#[derive(Debug)]
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(super) cursor: Cursor<'a>,

    /// Options of this pass.
    options: LexOptions,

    /// Collected lenient-mode warnings.
    handler: Handler,
}

impl<'a> Lexer<'a> {
    /// Creates a strict-mode lexer.
    ///
    /// Fails with [`LexError::EmptyInput`] on an empty source.
    pub fn new(source: &'a str) -> LexResult<Self> {
        Self::with_options(source, LexOptions::strict())
    }

    /// Creates a lexer with explicit options.
    ///
    /// In lenient mode an empty source yields a lexer that is already at
    /// the end of input.
    pub fn with_options(source: &'a str, options: LexOptions) -> LexResult<Self> {
        if source.is_empty() && options.is_strict() {
            return Err(LexError::EmptyInput);
        }

        Ok(Self {
            cursor: Cursor::new(source),
            options,
            handler: Handler::new(),
        })
    }

    /// Scans at most one token from the current character.
    ///
    /// `Ok(None)` means input was consumed without producing a token
    /// (whitespace, or something lenient mode dropped). Every call that
    /// is not at the end of input consumes at least one character, errors
    /// included, so a caller may keep going after an error.
    pub fn scan_token(&mut self) -> LexResult<Option<Token<'a>>> {
        if self.cursor.is_at_end() {
            return Ok(None);
        }

        match self.cursor.current_char() {
            '+' => Ok(Some(self.single(TokenType::Plus))),
            '-' => Ok(Some(self.single(TokenType::Minus))),
            '*' => Ok(Some(self.single(TokenType::Star))),
            '/' => Ok(Some(self.single(TokenType::Slash))),
            '{' => Ok(Some(self.single(TokenType::LBrace))),
            '}' => Ok(Some(self.single(TokenType::RBrace))),
            '(' => Ok(Some(self.single(TokenType::LParen))),
            ')' => Ok(Some(self.single(TokenType::RParen))),
            ',' => Ok(Some(self.single(TokenType::Comma))),
            ';' => Ok(Some(self.single(TokenType::Semicolon))),
            '.' => Ok(Some(self.single(TokenType::Dot))),
            '=' => self.lex_equal().map(Some),
            '"' => self.lex_string(),
            c if c.is_ascii_digit() => self.scan_number().map(|value| Some(Token::number(value))),
            c if c.is_ascii_alphabetic() => Ok(Some(self.lex_word())),
            c if c.is_ascii_whitespace() => {
                self.skip_whitespace();
                Ok(None)
            },
            c => {
                let span = self.cursor.current_span();
                self.advance();
                if self.is_strict() {
                    return Err(LexError::UnexpectedCharacter { ch: c, span });
                }
                self.dropped(span, format!("skipped unexpected character {:?}", c));
                Ok(None)
            },
        }
    }

    /// Moves one character forward.
    ///
    /// Past the end, the current character stays
    /// [`EOF_CHAR`](crate::cursor::EOF_CHAR).
    pub fn advance(&mut self) {
        self.cursor.advance();
    }

    /// Skips consecutive ASCII whitespace.
    pub fn skip_whitespace(&mut self) {
        self.cursor.eat_while(|c| c.is_ascii_whitespace());
    }

    /// Records a lenient-mode warning for input that produced no token.
    pub(super) fn dropped(&self, span: Span, message: String) {
        self.warn(span, message, DiagnosticCode::W_LEXER_DROPPED_INPUT);
    }

    pub(super) fn warn(&self, span: Span, message: String, code: DiagnosticCode) {
        tracing::debug!(at = %span, "{}", message);
        self.handler
            .build_warning(span, message)
            .code(code)
            .emit(&self.handler);
    }

    /// The character under the cursor.
    pub fn current_char(&self) -> char {
        self.cursor.current_char()
    }

    /// Returns true once the whole source has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    /// The error stance of this pass.
    pub fn mode(&self) -> LexMode {
        self.options.mode
    }

    /// The options of this pass.
    pub fn options(&self) -> LexOptions {
        self.options
    }

    pub(super) fn is_strict(&self) -> bool {
        self.options.is_strict()
    }

    /// Warnings recorded so far.
    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    /// Consume the lexer, keeping its recorded diagnostics.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.handler.take_diagnostics()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = LexResult<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.cursor.is_at_end() {
            match self.scan_token() {
                Ok(Some(token)) => return Some(Ok(token)),
                Ok(None) => continue,
                Err(err) => return Some(Err(err)),
            }
        }
        None
    }
}
