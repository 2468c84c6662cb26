//! arjit - command-line driver for the arjit lexer.
//!
//! This is the main entry point for the `arjit` binary. It uses clap for
//! argument parsing and dispatches to the command handlers.

mod commands;
mod config;
mod error;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_config, run_lex, ConfigArgs, LexArgs, SourceInput};
use config::Config;
use error::{DrvError, Result};

/// arjit - tools for the arjit scripting language
#[derive(Parser, Debug)]
#[command(name = "arjit")]
#[command(author = "arjit Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tools for the arjit scripting language", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "ARJIT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "ARJIT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "ARJIT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Lex source text and print its tokens
    ///
    /// Prints one token per line, or a JSON array with `--format json`.
    /// Strict mode stops at the first lexical error and exits non-zero.
    Lex(LexCommand),

    /// Print the effective configuration
    Config(ConfigCommand),
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommand {
    /// Source file to lex
    #[arg(required_unless_present = "expr", conflicts_with = "expr")]
    file: Option<PathBuf>,

    /// Lex this source text instead of a file
    #[arg(short, long)]
    expr: Option<String>,

    /// Skip input that cannot be lexed, logging a warning for each skip
    #[arg(long, conflicts_with = "strict")]
    lenient: bool,

    /// Stop at the first lexical error (default unless configured otherwise)
    #[arg(long)]
    strict: bool,

    /// Append a trailing EOF token
    #[arg(long)]
    emit_eof: bool,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,
}

/// Arguments for the config subcommand.
#[derive(Parser, Debug)]
struct ConfigCommand {
    /// Write the configuration to this file instead of printing it
    #[arg(short, long)]
    write: Option<PathBuf>,
}

/// Main entry point for the arjit driver.
///
/// Lexing failures print their rendered diagnostic; every other error is
/// printed as a single line. Both exit with status 1.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(DrvError::Lex { report, .. }) => {
            eprint!("{}", report);
            ExitCode::FAILURE
        },
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        },
    }
}

fn run(cli: Cli) -> Result<()> {
    // Load configuration
    let config = load_config(cli.config.as_deref())?;

    // Initialize logging
    let verbose = cli.verbose || config.verbose;
    init_logging(verbose, cli.no_color)?;

    // Execute the selected command
    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so that stdout carries only command output.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DrvError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Lex(args) => execute_lex(args, config),
        Commands::Config(args) => run_config(ConfigArgs { write: args.write }, config),
    }
}

/// Execute the lex command.
fn execute_lex(args: LexCommand, config: Config) -> Result<()> {
    let input = match (args.expr, args.file) {
        (Some(expr), _) => SourceInput::Expr(expr),
        (None, Some(file)) => SourceInput::File(file),
        (None, None) => {
            return Err(DrvError::Validation(
                "either a source file or --expr is required".to_string(),
            ))
        },
    };

    let lex_args = LexArgs {
        input,
        lenient: args.lenient,
        strict: args.strict,
        emit_eof: args.emit_eof,
        format: args.format,
    };
    run_lex(lex_args, config)
}
