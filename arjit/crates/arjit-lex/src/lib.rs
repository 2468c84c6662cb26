//! arjit-lex - Lexical Analyzer for the arjit scripting language
//!
//! This crate turns arjit source text into a flat sequence of tokens for a
//! later parser.
//!
//! # Example Usage
//!
//! ```
//! use arjit_lex::{lex, Token, TokenType};
//!
//! let tokens = lex("let output = add(5, 3);").unwrap();
//! assert_eq!(tokens[0], Token::fixed(TokenType::Let));
//! assert_eq!(tokens[1], Token::ident("output"));
//! assert_eq!(tokens[5], Token::number(5));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token categories and values
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`options`] - Strict and lenient lexing modes
//! - [`error`] - Lexing errors
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `let`, `function`, `return`
//!
//! ## Identifiers
//!
//! Runs of ASCII letters. Digits end an identifier, so `foo2` is `foo`
//! followed by `2`.
//!
//! ## Literals
//!
//! - **Integer**: decimal digits, `42`
//! - **String**: `"hello"`, no escapes
//!
//! ## Operators and Delimiters
//!
//! `+ - * / =` and `( ) { } , ; .`
//!
//! # Modes
//!
//! [`LexMode::Strict`] is the default and fails on the first character it
//! cannot use. [`LexMode::Lenient`] keeps the legacy behaviour of skipping
//! such input, and records a warning for everything it skips.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod options;
pub mod token;

mod driver;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use driver::{debug_tokens, lex, lex_with, write_tokens, LexOutput};
pub use error::{LexError, LexResult};
pub use lexer::Lexer;
pub use options::{LexMode, LexOptions};
pub use token::{is_keyword, keyword_to_token, Literal, Token, TokenType, KEYWORDS};
