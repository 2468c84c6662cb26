//! arjit-util - Core utilities shared by the arjit compiler phases.
//!
//! This crate holds the foundation types every phase reports through:
//!
//! - [`span`] - Source locations (byte offsets plus line/column)
//! - [`diagnostic`] - Errors, warnings, codes and the collecting [`Handler`]
//! - [`error`] - Error types for the utilities themselves
//!
//! # Example
//!
//! ```
//! use arjit_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '#'")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(4, 5, 1, 5))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use error::{UtilError, UtilResult};
pub use span::Span;
