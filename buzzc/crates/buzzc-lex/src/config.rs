//! Per-session lexer settings.

use crate::sink::INITIAL_CAPACITY;

/// Settings for one lexing session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexerConfig {
    /// Largest accepted block comment body in bytes; `None` means unbounded.
    pub max_comment_len: Option<usize>,
    /// Starting capacity of the token buffer.
    pub initial_capacity: usize,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            max_comment_len: None,
            initial_capacity: INITIAL_CAPACITY,
        }
    }
}

impl LexerConfig {
    /// Caps the size of block comment bodies.
    pub fn with_max_comment_len(mut self, limit: usize) -> Self {
        self.max_comment_len = Some(limit);
        self
    }

    /// Sets the starting capacity of the token buffer.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LexerConfig::default();
        assert_eq!(config.max_comment_len, None);
        assert_eq!(config.initial_capacity, 12);
    }

    #[test]
    fn test_builders() {
        let config = LexerConfig::default()
            .with_max_comment_len(64)
            .with_initial_capacity(3);
        assert_eq!(config.max_comment_len, Some(64));
        assert_eq!(config.initial_capacity, 3);
    }
}
