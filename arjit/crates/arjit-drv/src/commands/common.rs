//! Common utilities shared by the driver commands.

use std::io::Write;

use arjit_lex::{Literal, Token};
use serde::Serialize;

use crate::error::Result;

/// Token output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One token per line, as the lexer's debug surface prints them.
    Text,
    /// A JSON array of `{ "type", "literal" }` objects.
    Json,
}

impl OutputFormat {
    /// Parse from a string, case-insensitively.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Serialized shape of one token.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    #[serde(rename = "type")]
    token_type: &'static str,
    literal: LiteralValue<'a>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum LiteralValue<'a> {
    Text(&'a str),
    Int(u64),
}

impl<'a> From<&Token<'a>> for TokenRecord<'a> {
    fn from(token: &Token<'a>) -> Self {
        let literal = match token.literal() {
            Literal::Text(text) => LiteralValue::Text(text),
            Literal::Int(value) => LiteralValue::Int(value),
        };
        Self {
            token_type: token.token_type().name(),
            literal,
        }
    }
}

/// Write `tokens` to `out` in `format`.
pub fn write_output<W: Write>(out: &mut W, tokens: &[Token<'_>], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => arjit_lex::write_tokens(out, tokens)?,
        OutputFormat::Json => {
            let records: Vec<TokenRecord<'_>> = tokens.iter().map(TokenRecord::from).collect();
            serde_json::to_writer_pretty(&mut *out, &records)?;
            writeln!(out)?;
        },
    }
    Ok(())
}
