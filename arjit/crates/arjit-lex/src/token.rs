//! Token definitions for the arjit lexer.
//!
//! A [`Token`] is a category ([`TokenType`]) plus a [`Literal`] payload.
//! Text payloads borrow from the source, so tokens are `Copy` and outlive
//! the [`Lexer`](crate::Lexer) that produced them only as long as the source
//! does.

use std::fmt;

/// The closed set of lexical categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `;`
    Semicolon,

    /// Identifier, e.g. `add`
    Ident,
    /// Non-negative decimal integer, e.g. `42`
    Number,
    /// Double-quoted string literal, e.g. `"Hello"`
    String,

    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `=`
    Equal,
    /// `!=`, part of the token model but never produced by the scanner
    NotEqual,

    /// `let`
    Let,
    /// `return`
    Return,
    /// `function`
    Function,

    /// End of input marker
    Eof,
}

impl TokenType {
    /// Every category, in declaration order.
    pub const ALL: [TokenType; 20] = [
        TokenType::LParen,
        TokenType::RParen,
        TokenType::LBrace,
        TokenType::RBrace,
        TokenType::Comma,
        TokenType::Dot,
        TokenType::Semicolon,
        TokenType::Ident,
        TokenType::Number,
        TokenType::String,
        TokenType::Plus,
        TokenType::Minus,
        TokenType::Star,
        TokenType::Slash,
        TokenType::Equal,
        TokenType::NotEqual,
        TokenType::Let,
        TokenType::Return,
        TokenType::Function,
        TokenType::Eof,
    ];

    /// The canonical text of a fixed token.
    ///
    /// Returns `None` for the categories whose text comes from the source
    /// (`Ident`, `Number`, `String`).
    pub const fn symbol(self) -> Option<&'static str> {
        match self {
            TokenType::LParen => Some("("),
            TokenType::RParen => Some(")"),
            TokenType::LBrace => Some("{"),
            TokenType::RBrace => Some("}"),
            TokenType::Comma => Some(","),
            TokenType::Dot => Some("."),
            TokenType::Semicolon => Some(";"),
            TokenType::Plus => Some("+"),
            TokenType::Minus => Some("-"),
            TokenType::Star => Some("*"),
            TokenType::Slash => Some("/"),
            TokenType::Equal => Some("="),
            TokenType::NotEqual => Some("!="),
            TokenType::Let => Some("let"),
            TokenType::Return => Some("return"),
            TokenType::Function => Some("function"),
            TokenType::Eof => Some(""),
            TokenType::Ident | TokenType::Number | TokenType::String => None,
        }
    }

    /// Returns true for `let`, `return` and `function`.
    pub const fn is_keyword(self) -> bool {
        matches!(self, TokenType::Let | TokenType::Return | TokenType::Function)
    }

    /// The upper-case name used in token dumps, e.g. `NOT_EQUAL`.
    pub const fn name(self) -> &'static str {
        match self {
            TokenType::LParen => "LPAREN",
            TokenType::RParen => "RPAREN",
            TokenType::LBrace => "LBRACE",
            TokenType::RBrace => "RBRACE",
            TokenType::Comma => "COMMA",
            TokenType::Dot => "DOT",
            TokenType::Semicolon => "SEMICOLON",
            TokenType::Ident => "IDENT",
            TokenType::Number => "NUMBER",
            TokenType::String => "STRING",
            TokenType::Plus => "PLUS",
            TokenType::Minus => "MINUS",
            TokenType::Star => "STAR",
            TokenType::Slash => "SLASH",
            TokenType::Equal => "EQUAL",
            TokenType::NotEqual => "NOT_EQUAL",
            TokenType::Let => "LET",
            TokenType::Return => "RETURN",
            TokenType::Function => "FUNCTION",
            TokenType::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The payload a token carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Literal<'src> {
    /// Identifier, keyword, string content or fixed symbol text
    Text(&'src str),
    /// Parsed integer value of a `Number`
    Int(u64),
}

impl fmt::Display for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Text(text) => f.write_str(text),
            Literal::Int(value) => write!(f, "{}", value),
        }
    }
}

/// A single lexical unit: category plus literal.
///
/// # Example
///
/// ```
/// use arjit_lex::{Literal, Token, TokenType};
///
/// let token = Token::ident("add");
/// assert_eq!(token.token_type(), TokenType::Ident);
/// assert_eq!(token.literal(), Literal::Text("add"));
/// assert_eq!(token.to_string(), "IDENT(add)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    token_type: TokenType,
    literal: Literal<'src>,
}

impl<'src> Token<'src> {
    /// Build a fixed token (punctuation, operator, keyword or `Eof`)
    /// carrying its canonical symbol.
    ///
    /// # Panics
    ///
    /// Panics for `Ident`, `Number` and `String`, which need a payload
    /// from the source.
    pub fn fixed(token_type: TokenType) -> Token<'static> {
        match token_type.symbol() {
            Some(symbol) => Token {
                token_type,
                literal: Literal::Text(symbol),
            },
            None => panic!("{} tokens carry source text, use a payload constructor", token_type),
        }
    }

    /// An `Ident` token.
    pub const fn ident(text: &'src str) -> Self {
        Self {
            token_type: TokenType::Ident,
            literal: Literal::Text(text),
        }
    }

    /// A `Number` token.
    pub const fn number(value: u64) -> Self {
        Self {
            token_type: TokenType::Number,
            literal: Literal::Int(value),
        }
    }

    /// A `String` token holding the text between the quotes.
    pub const fn string(text: &'src str) -> Self {
        Self {
            token_type: TokenType::String,
            literal: Literal::Text(text),
        }
    }

    /// The end-of-input marker.
    pub const fn eof() -> Self {
        Self {
            token_type: TokenType::Eof,
            literal: Literal::Text(""),
        }
    }

    /// The token's category.
    pub const fn token_type(&self) -> TokenType {
        self.token_type
    }

    /// The token's payload.
    pub const fn literal(&self) -> Literal<'src> {
        self.literal
    }

    /// The payload as text, if it is text.
    pub const fn text(&self) -> Option<&'src str> {
        match self.literal {
            Literal::Text(text) => Some(text),
            Literal::Int(_) => None,
        }
    }

    /// The payload as an integer, if it is one.
    pub const fn int(&self) -> Option<u64> {
        match self.literal {
            Literal::Int(value) => Some(value),
            Literal::Text(_) => None,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.token_type, self.literal) {
            (TokenType::String, Literal::Text(text)) => write!(f, "STRING({:?})", text),
            (TokenType::Ident | TokenType::Number, literal) => {
                write!(f, "{}({})", self.token_type, literal)
            },
            (token_type, _) => write!(f, "{}", token_type),
        }
    }
}

/// Reserved words of the language.
pub const KEYWORDS: [&str; 3] = ["let", "function", "return"];

/// Returns true if `ident` is a reserved word.
///
/// ```
/// use arjit_lex::is_keyword;
///
/// assert!(is_keyword("let"));
/// assert!(!is_keyword("Let"));
/// ```
pub fn is_keyword(ident: &str) -> bool {
    KEYWORDS.contains(&ident)
}

/// Build the keyword token for `ident`.
///
/// The payload is the keyword text itself.
///
/// # Panics
///
/// Panics if `ident` is not a reserved word. Callers check [`is_keyword`]
/// first.
pub fn keyword_to_token(ident: &str) -> Token<'static> {
    match ident {
        "let" => Token::fixed(TokenType::Let),
        "function" => Token::fixed(TokenType::Function),
        "return" => Token::fixed(TokenType::Return),
        other => panic!("`{}` is not a reserved keyword", other),
    }
}
