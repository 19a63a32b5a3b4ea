//! Error types for the buzzc driver.

use thiserror::Error;

/// Everything that can stop a `buzzc` run.
///
/// Malformed tokens are not in here: they come back as `INVALID` tokens
/// plus diagnostics, and the run still succeeds.
#[derive(Error, Debug)]
pub enum DriverError {
    /// A source or output file does not carry the configured extension.
    #[error("Invalid file type '{path}'. Expected '{expected}'.")]
    InvalidExtension {
        /// File name as given on the command line.
        path: String,
        /// Required extension, including the dot.
        expected: String,
    },

    /// The source file holds no bytes at all.
    #[error("Input file is empty.")]
    EmptyInput,

    /// The configuration could not be found, parsed or applied.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading the source or writing the table failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the JSON token list failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The lexing session itself failed.
    #[error("Lexer error: {0}")]
    Lex(#[from] buzzc_lex::LexError),
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
