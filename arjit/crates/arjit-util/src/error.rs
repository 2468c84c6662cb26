//! Core error types for arjit-util crate

use thiserror::Error;

/// Error type for utility operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UtilError {
    /// Invalid span range
    #[error("Invalid span: start {start} > end {end}")]
    InvalidSpan {
        /// Start byte offset
        start: usize,
        /// End byte offset
        end: usize,
    },

    /// Line number past the end of the source
    #[error("Invalid line number: {line} (source has {max_lines} lines)")]
    InvalidLineNumber {
        /// Requested line (1-based)
        line: usize,
        /// Number of lines available
        max_lines: usize,
    },
}

/// Result type alias for utility operations
pub type UtilResult<T> = std::result::Result<T, UtilError>;
