//! Session-fatal lexer errors.
//!
//! Malformed input is never an error here: it becomes an `INVALID` token plus
//! a diagnostic. These variants cover the cases where the session itself
//! cannot continue.

use std::collections::TryReserveError;

use thiserror::Error;

/// Error type for a lexing session
#[derive(Debug, Error)]
pub enum LexError {
    /// The input stream failed while reading
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// A second character was pushed back before the first was re-read
    #[error("pushback slot already holds {pending:?}, cannot push back {rejected:?}")]
    PushbackOccupied {
        /// Character already waiting in the slot
        pending: char,
        /// Character that did not fit
        rejected: char,
    },

    /// The token buffer could not grow
    #[error("failed to grow token buffer to {requested} tokens")]
    AllocationFailed {
        /// Capacity that was asked for
        requested: usize,
        /// Allocator failure
        #[source]
        source: TryReserveError,
    },

    /// A block comment grew past the configured cap
    #[error("block comment starting at {line}:{column} exceeds {limit} bytes")]
    CommentTooLong {
        /// Line of the opener
        line: u32,
        /// Column of the opener
        column: u32,
        /// Configured cap in bytes
        limit: usize,
    },
}

/// Result type alias for lexer operations
pub type Result<T> = std::result::Result<T, LexError>;
