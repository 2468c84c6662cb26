//! Lex command implementation.
//!
//! Reads source text from a file or the command line, lexes it and prints
//! the tokens.

use std::io::{self, Write};
use std::path::PathBuf;

use arjit_lex::{lex_with, LexMode, LexOptions};

use crate::commands::common::{write_output, OutputFormat};
use crate::config::Config;
use crate::error::{DrvError, Result};

/// Where the source text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceInput {
    /// A file on disk.
    File(PathBuf),
    /// Source given inline with `--expr`.
    Expr(String),
}

/// Arguments for the lex command.
#[derive(Debug, Clone)]
pub struct LexArgs {
    /// Source to lex.
    pub input: SourceInput,
    /// Force lenient mode.
    pub lenient: bool,
    /// Force strict mode.
    pub strict: bool,
    /// Append a trailing `EOF` token.
    pub emit_eof: bool,
    /// Output format name (default: from config).
    pub format: Option<String>,
}

/// Lex command handler.
pub struct LexCommand {
    args: LexArgs,
    config: Config,
}

impl LexCommand {
    /// Create a new LexCommand.
    pub fn new(args: LexArgs, config: Config) -> Self {
        Self { args, config }
    }

    /// Execute the command, printing to stdout.
    pub fn run(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)
    }

    /// Execute the command, printing to `out`.
    pub fn run_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let options = self.lex_options()?;
        let format = self.output_format()?;
        let source = self.read_source()?;

        tracing::debug!(
            mode = %options.mode,
            emit_eof = options.emit_eof,
            bytes = source.len(),
            "lexing source"
        );

        let output = lex_with(&source, options).map_err(|e| DrvError::lex(e, &source))?;
        for diagnostic in &output.diagnostics {
            tracing::warn!("{}", diagnostic);
        }

        write_output(out, &output.tokens, format)
    }

    /// Resolve lexer options from flags, falling back to the config.
    fn lex_options(&self) -> Result<LexOptions> {
        let mode = if self.args.lenient {
            LexMode::Lenient
        } else if self.args.strict {
            LexMode::Strict
        } else {
            self.config.lex.mode.parse::<LexMode>().map_err(DrvError::Config)?
        };

        Ok(LexOptions {
            mode,
            emit_eof: self.args.emit_eof || self.config.lex.emit_eof,
        })
    }

    /// Resolve the output format from flags, falling back to the config.
    fn output_format(&self) -> Result<OutputFormat> {
        let name = self
            .args
            .format
            .as_deref()
            .unwrap_or(&self.config.output.format);

        OutputFormat::from_str(name).ok_or_else(|| {
            DrvError::Validation(format!(
                "unknown output format `{}` (expected text or json)",
                name
            ))
        })
    }

    fn read_source(&self) -> Result<String> {
        match &self.args.input {
            SourceInput::Expr(source) => Ok(source.clone()),
            SourceInput::File(path) => std::fs::read_to_string(path).map_err(|e| {
                DrvError::FileOperation(format!("cannot read {}: {}", path.display(), e))
            }),
        }
    }
}

/// Run the lex command.
pub fn run_lex(args: LexArgs, config: Config) -> Result<()> {
    LexCommand::new(args, config).run()
}
