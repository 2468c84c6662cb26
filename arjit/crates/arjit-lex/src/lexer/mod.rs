//! Lexer module.
//!
//! The lexer implementation is split by token family:
//! - `core` - Main Lexer struct and dispatch
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Integer literal lexing
//! - `string` - String literal lexing
//! - `operator` - Operator and punctuation lexing

mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;
