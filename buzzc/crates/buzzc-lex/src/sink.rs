//! Append-only token buffer.

use crate::error::{LexError, Result};
use crate::token::Token;

/// Capacity a fresh sink starts with.
pub const INITIAL_CAPACITY: usize = 12;

/// Growable, append-only token sequence.
///
/// Capacity doubles whenever the buffer is full. Growth goes through
/// `try_reserve_exact`, so running out of memory surfaces as
/// [`LexError::AllocationFailed`] instead of aborting.
#[derive(Debug)]
pub struct TokenSink {
    tokens: Vec<Token>,
}

impl TokenSink {
    /// Creates an empty sink with [`INITIAL_CAPACITY`].
    pub fn new() -> Result<Self> {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Creates an empty sink with room for `capacity` tokens.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut tokens = Vec::new();
        tokens
            .try_reserve_exact(capacity.max(1))
            .map_err(|source| LexError::AllocationFailed {
                requested: capacity.max(1),
                source,
            })?;
        Ok(Self { tokens })
    }

    /// Appends one token, doubling the capacity first if the buffer is full.
    pub fn push(&mut self, token: Token) -> Result<()> {
        if self.tokens.len() == self.tokens.capacity() {
            let additional = self.tokens.capacity().max(1);
            let requested = self.tokens.capacity().saturating_add(additional);
            self.tokens
                .try_reserve_exact(additional)
                .map_err(|source| LexError::AllocationFailed { requested, source })?;
        }
        self.tokens.push(token);
        Ok(())
    }

    /// Number of tokens stored so far.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Current capacity of the buffer.
    pub fn capacity(&self) -> usize {
        self.tokens.capacity()
    }

    /// Appends the sentinel and hands the sequence over.
    pub fn finish(mut self, sentinel: Token) -> Result<Vec<Token>> {
        debug_assert!(sentinel.is_end());
        self.push(sentinel)?;
        Ok(self.tokens)
    }
}
