//! buzzc-util - Shared foundation types for the buzz toolchain.
//!
//! This crate holds the pieces every phase of `buzzc` agrees on:
//!
//! - [`span`] - source positions attached to tokens and diagnostics
//! - [`diagnostic`] - severity levels, codes, the fluent builder and the
//!   [`Handler`] that collects everything a phase reports
//!
//! # Example
//!
//! ```
//! use buzzc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '@'")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(14, 15, 3, 7))
//!     .emit(&handler);
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use span::Span;

pub use rustc_hash::FxHashMap;
