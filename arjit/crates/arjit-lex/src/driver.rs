//! Whole-source entry points and the token debug surface.

use std::io::{self, Write};

use arjit_util::Diagnostic;

use crate::error::LexResult;
use crate::options::LexOptions;
use crate::token::Token;
use crate::Lexer;

/// Tokens of one lexing pass plus the warnings it recorded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LexOutput<'src> {
    /// Tokens in source order.
    pub tokens: Vec<Token<'src>>,
    /// Warnings recorded by lenient mode. Always empty in strict mode.
    pub diagnostics: Vec<Diagnostic>,
}

/// Lexes `source` in strict mode.
///
/// No trailing `EOF` token is appended.
///
/// ```
/// use arjit_lex::{lex, Token, TokenType};
///
/// let tokens = lex("let x = 5;").unwrap();
/// assert_eq!(tokens[0], Token::fixed(TokenType::Let));
/// assert_eq!(tokens.len(), 5);
/// ```
pub fn lex(source: &str) -> LexResult<Vec<Token<'_>>> {
    Lexer::new(source)?.collect()
}

/// Lexes `source` with explicit options.
///
/// Strict mode stops at the first error. Lenient mode never fails and
/// reports what it dropped in [`LexOutput::diagnostics`].
pub fn lex_with(source: &str, options: LexOptions) -> LexResult<LexOutput<'_>> {
    let mut lexer = Lexer::with_options(source, options)?;
    let mut tokens = Vec::new();

    for token in &mut lexer {
        let token = token?;
        tracing::trace!(token = %token, "lexed");
        tokens.push(token);
    }

    if options.emit_eof {
        tokens.push(Token::eof());
    }

    let diagnostics = lexer.into_diagnostics();
    tracing::debug!(
        mode = %options.mode,
        tokens = tokens.len(),
        warnings = diagnostics.len(),
        "lexing finished"
    );

    Ok(LexOutput {
        tokens,
        diagnostics,
    })
}

/// Writes each token on its own line.
pub fn write_tokens<W: Write>(out: &mut W, tokens: &[Token<'_>]) -> io::Result<()> {
    for token in tokens {
        writeln!(out, "{}", token)?;
    }
    Ok(())
}

/// Prints each token on its own line to stdout.
pub fn debug_tokens(tokens: &[Token<'_>]) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    // Best effort; a closed stdout is ignored.
    let _ = write_tokens(&mut out, tokens);
}
