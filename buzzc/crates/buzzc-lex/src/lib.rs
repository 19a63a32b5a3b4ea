//! buzzc-lex - Lexical analyzer for the buzz language
//!
//! This crate turns buzz source text into a flat sequence of classified
//! tokens, each carrying the line and column where it starts. The sequence
//! always ends with an `END_OF_TOKENS` sentinel.
//!
//! # Example Usage
//!
//! ```
//! use buzzc_lex::{lex, TokenKind};
//!
//! let (tokens, count) = lex("buzz #x = 42;".as_bytes())?;
//!
//! assert_eq!(count, 5);
//! assert_eq!(tokens[0].kind, TokenKind::Buzz);
//! assert_eq!(tokens[1].text, "#x");
//! assert_eq!(tokens[5].kind, TokenKind::EndOfTokens);
//! # Ok::<(), buzzc_lex::LexError>(())
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - token kinds, tokens and the keyword tables
//! - [`lexer`] - the session loop and the per-class scanners
//! - [`cursor`] - byte cursor with one character of pushback
//! - [`classify`] - first-character classification
//! - [`sink`] - growable token buffer
//!
//! # Malformed Input
//!
//! Malformed input never aborts a session. Unknown words, bad numbers,
//! bad identifiers and stray characters become `INVALID` tokens and a
//! diagnostic is emitted to the [`Handler`](buzzc_util::Handler) passed to
//! [`Lexer::new`]. Only I/O failures, allocation failures and an exceeded
//! comment limit surface as [`LexError`].
//!
//! The input is read byte by byte and each byte is one character, so
//! non-ASCII input lexes as one `INVALID` token per byte.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod sink;
pub mod token;

use std::io::{BufReader, Read};

use buzzc_util::Handler;

pub use config::LexerConfig;
pub use cursor::Cursor;
pub use error::{LexError, Result};
pub use lexer::{delimiter_kind, Lexed, Lexer};
pub use token::{Lexeme, Token, TokenKind};

/// Lexes a whole input and returns the tokens and their count.
///
/// The count excludes the sentinel. Diagnostics are collected by a private
/// handler and dropped; use [`lex_with`] to keep them.
pub fn lex<R: Read>(input: R) -> Result<(Vec<Token>, usize)> {
    let handler = Handler::new();
    let lexed = lex_with(input, &handler, LexerConfig::default())?;
    Ok(lexed.into_parts())
}

/// Lexes a whole input, reporting malformed tokens to `handler`.
pub fn lex_with<R: Read>(input: R, handler: &Handler, config: LexerConfig) -> Result<Lexed> {
    Lexer::with_config(BufReader::new(input), handler, config)?.tokenize()
}

#[cfg(test)]
mod edge_cases;
