//! Command modules for the arjit driver.
//!
//! Each subcommand is implemented in its own file.

pub mod common;

pub mod config;
pub mod lex;

// Re-export command types and functions
pub use config::{run_config, ConfigArgs};
pub use lex::{run_lex, LexArgs, SourceInput};
